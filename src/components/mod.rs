//! UI Components for the portfolio page.

mod demo_panel;
mod hero;
mod modal_overlay;
mod project_card;
mod side_projects_panel;

pub use demo_panel::DemoPanel;
pub use hero::Hero;
pub use modal_overlay::ModalOverlay;
pub use project_card::ProjectCard;
pub use side_projects_panel::SideProjectsPanel;
