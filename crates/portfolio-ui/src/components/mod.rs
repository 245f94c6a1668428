//! Reusable UI components

mod button;
mod external_link;
mod tag_pills;

pub use button::*;
pub use external_link::*;
pub use tag_pills::*;
