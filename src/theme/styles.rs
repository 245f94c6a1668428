//! Global CSS styles for the portfolio page.
//!
//! Colors come from the custom properties emitted by `palette_css`.

pub const GLOBAL_STYLES: &str = r#"
/* === Tokens === */
:root {
  --font-sans: 'Geist', 'Inter', system-ui, -apple-system, sans-serif;

  --text-xs: 0.75rem;
  --text-sm: 0.875rem;
  --text-base: 1rem;
  --text-lg: 1.125rem;
  --text-xl: 1.25rem;
  --text-2xl: 1.5rem;
  --text-3xl: 1.875rem;
  --text-4xl: 2.25rem;
  --text-6xl: 3.75rem;

  --radius-card: 1rem;
  --transition-fast: 150ms ease;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html {
  font-size: 16px;
  -webkit-font-smoothing: antialiased;
}

body {
  font-family: var(--font-sans);
  color: var(--text-primary);
  background: var(--surface-bottom);
  line-height: 1.5;
}

/* === Layout === */
.page {
  display: flex;
  flex-direction: column;
  min-height: 100vh;
  background: linear-gradient(to bottom, var(--surface-top), var(--surface-bottom));
}

.hero {
  padding: 5rem 1.5rem;
  text-align: center;
}

.page-title {
  font-size: var(--text-4xl);
  font-weight: 700;
  letter-spacing: -0.025em;
}

.tagline {
  margin: 1rem auto 0;
  max-width: 42rem;
  font-size: var(--text-lg);
}

.hero-actions {
  margin-top: 1.5rem;
  display: flex;
  justify-content: center;
  gap: 1rem;
}

.projects {
  flex: 1;
  padding: 0 1.5rem 6rem;
}

.section-header {
  margin-bottom: 2rem;
  text-align: center;
  font-size: var(--text-2xl);
  font-weight: 600;
}

.project-grid {
  list-style: none;
  display: grid;
  gap: 2.5rem;
  max-width: 72rem;
  margin: 0 auto;
}

.site-footer {
  padding: 2rem 0;
  text-align: center;
  font-size: var(--text-sm);
  color: var(--text-muted);
}

@media (min-width: 640px) {
  .hero { padding: 5rem 2.5rem; }
  .page-title { font-size: var(--text-6xl); }
  .tagline { font-size: var(--text-xl); }
  .projects { padding: 0 2.5rem 6rem; }
  .section-header { font-size: var(--text-3xl); }
  .project-grid { grid-template-columns: repeat(2, 1fr); }
}

@media (min-width: 1024px) {
  .project-grid { grid-template-columns: repeat(3, 1fr); }
}

/* === Buttons === */
.btn-solid,
.btn-outline {
  display: inline-block;
  border-radius: 9999px;
  padding: 0.5rem 1.25rem;
  font-size: var(--text-sm);
  font-weight: 500;
  text-decoration: none;
  cursor: pointer;
  transition: opacity var(--transition-fast), background var(--transition-fast);
}

.btn-solid {
  background: var(--text-primary);
  color: var(--surface-top);
  border: none;
}

.btn-solid:hover { opacity: 0.9; }

.btn-outline {
  background: transparent;
  color: var(--text-primary);
  border: 1px solid color-mix(in srgb, var(--text-primary) 20%, transparent);
}

.btn-outline:hover {
  background: color-mix(in srgb, var(--text-primary) 5%, transparent);
}

.btn-bare {
  all: unset;
  display: block;
  cursor: pointer;
}

/* === Tags === */
.tag-pills {
  display: flex;
  flex-wrap: wrap;
  gap: 0.5rem;
}

.tag-pill {
  font-size: var(--text-xs);
  padding: 0.125rem 0.5rem;
  border-radius: 9999px;
  background: color-mix(in srgb, var(--text-primary) 10%, transparent);
}

/* === Project Cards === */
.project-card {
  border-radius: var(--radius-card);
  overflow: hidden;
  border: 1px solid color-mix(in srgb, var(--text-primary) 5%, transparent);
  background: color-mix(in srgb, var(--panel) 70%, transparent);
  box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
  backdrop-filter: blur(8px);
  transition: box-shadow var(--transition-fast);
}

.project-card:hover {
  box-shadow: 0 4px 6px rgba(0, 0, 0, 0.1);
}

.project-card__trigger {
  display: block;
  width: 100%;
  text-align: left;
  color: inherit;
  text-decoration: none;
}

.project-card__media {
  position: relative;
  height: 12rem;
  overflow: hidden;
}

.project-card__img {
  width: 100%;
  height: 100%;
  object-fit: cover;
  transition: transform var(--transition-fast);
}

.project-card:hover .project-card__img {
  transform: scale(1.05);
}

.project-card__body {
  padding: 1.25rem;
  display: flex;
  flex-direction: column;
  gap: 0.75rem;
}

.project-card__title {
  font-size: var(--text-lg);
  font-weight: 600;
}

.project-card__description {
  font-size: var(--text-sm);
  color: var(--text-muted);
  display: -webkit-box;
  -webkit-line-clamp: 3;
  -webkit-box-orient: vertical;
  overflow: hidden;
}

/* === Modal === */
.modal-overlay {
  position: fixed;
  inset: 0;
  z-index: 50;
  display: flex;
  align-items: center;
  justify-content: center;
  padding: 1.5rem;
  background: var(--scrim);
  backdrop-filter: blur(4px);
  outline: none;
}

.modal-panel {
  width: 100%;
  max-width: 32rem;
  max-height: 90vh;
  overflow-y: auto;
  border-radius: var(--radius-card);
  background: var(--panel);
  padding: 2rem;
  box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
}

.modal-panel--wide {
  max-width: 56rem;
  padding: 1.5rem;
}

.modal-title {
  font-size: var(--text-2xl);
  font-weight: 600;
  margin-bottom: 1rem;
}

.close-btn {
  margin-top: 1.5rem;
}

/* === Side Projects === */
.side-projects {
  list-style: none;
  display: flex;
  flex-direction: column;
  gap: 1.25rem;
}

.side-project__title {
  font-size: var(--text-lg);
  font-weight: 500;
  color: inherit;
}

.side-project__title--link { text-decoration: underline; }
.side-project__title--link:hover { text-decoration: none; }

.side-project__blurb {
  font-size: var(--text-sm);
  color: var(--text-muted);
  margin-bottom: 0.5rem;
}

/* === Demo === */
.demo-video {
  width: 100%;
  border-radius: 0.25rem;
}

.demo-caption,
.demo-missing {
  margin-top: 1rem;
  font-size: var(--text-sm);
  color: var(--text-muted);
}

.demo-link {
  display: inline-block;
  margin-top: 1rem;
  font-weight: 500;
  color: inherit;
  text-decoration: underline;
}

.load-error {
  padding: 2rem;
  text-align: center;
}
"#;
