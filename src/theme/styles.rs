//! Global CSS styles for the portfolio page.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  --background: #ffffff;
  --surface: #f8f9fa;
  --border: #e1e4e8;

  --primary: #2563eb;
  --primary-dark: #1d4ed8;
  --accent: #0ea5e9;

  --text-primary: #1f2933;
  --text-secondary: #52606d;
  --text-muted: #9aa5b1;

  --danger: #dc2626;
  --success: #16a34a;
  --overlay: rgba(0, 0, 0, 0.7);

  --font-sans: 'Inter', 'Segoe UI', Roboto, sans-serif;
  --header-height: 70px;

  --transition-fast: 150ms ease;
  --transition-normal: 300ms ease;
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
  background: var(--background);
  color: var(--text-primary);
  line-height: 1.6;
  overflow: auto;
}

a {
  color: var(--primary);
  text-decoration: none;
}

/* === Header === */
.header {
  position: fixed;
  top: 0;
  left: 0;
  right: 0;
  z-index: 100;
  background: var(--background);
  transition: box-shadow var(--transition-normal), padding var(--transition-normal);
}

.navbar {
  display: flex;
  align-items: center;
  justify-content: space-between;
  height: var(--header-height);
  max-width: 1200px;
  margin: 0 auto;
  padding: 0 1.5rem;
}

.nav-logo {
  font-size: 1.5rem;
  font-weight: 700;
  color: var(--text-primary);
}

.nav-menu {
  display: flex;
  gap: 2rem;
  list-style: none;
}

.nav-link {
  color: var(--text-secondary);
  font-weight: 500;
  transition: color var(--transition-fast);
}

.nav-link:hover {
  color: var(--primary);
}

.hamburger {
  display: none;
  background: none;
  border: none;
  cursor: pointer;
}

.hamburger .bar {
  display: block;
  width: 25px;
  height: 3px;
  margin: 5px auto;
  background: var(--text-primary);
  transition: all var(--transition-normal);
}

/* === Layout === */
.page {
  padding-top: var(--header-height);
}

.section {
  max-width: 1200px;
  margin: 0 auto;
  padding: 5rem 1.5rem;
}

.section-title {
  font-size: 2rem;
  margin-bottom: 2rem;
  text-align: center;
}

.hero {
  min-height: 80vh;
  display: flex;
  flex-direction: column;
  align-items: center;
  justify-content: center;
  gap: 1.5rem;
  text-align: center;
  background: var(--surface);
}

.hero-title {
  font-size: 3rem;
}

.hero-subtitle {
  color: var(--text-secondary);
  font-size: 1.25rem;
}

.timeline {
  display: flex;
  flex-direction: column;
  gap: 1.5rem;
}

.timeline-item {
  border-left: 3px solid var(--primary);
  padding-left: 1rem;
}

.skills-grid {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(250px, 1fr));
  gap: 2rem;
}

/* === Buttons === */
.btn {
  display: inline-block;
  padding: 0.6rem 1.25rem;
  border-radius: 6px;
  font-weight: 600;
  cursor: pointer;
  transition: background var(--transition-fast), color var(--transition-fast);
}

.btn-primary {
  background: var(--primary);
  color: #fff;
  border: 2px solid var(--primary);
}

.btn-primary:hover {
  background: var(--primary-dark);
}

.btn-secondary {
  background: transparent;
  color: var(--primary);
  border: 2px solid var(--primary);
}

.btn-secondary:hover {
  background: var(--primary);
  color: #fff;
}

.view-more {
  background: none;
  border: none;
  color: var(--primary);
  font-weight: 600;
  cursor: pointer;
}

.view-more:hover {
  text-decoration: underline;
}

/* === Project Cards === */
.projects-grid {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(320px, 1fr));
  gap: 2rem;
}

.project-card {
  background: var(--background);
  border: 1px solid var(--border);
  border-radius: 10px;
  overflow: hidden;
  box-shadow: 0 4px 12px rgba(0, 0, 0, 0.05);
  transition: transform var(--transition-normal);
}

.project-card:hover {
  transform: translateY(-4px);
}

.project-image img {
  width: 100%;
  height: 200px;
  object-fit: cover;
  display: block;
}

.project-info {
  padding: 1.5rem;
  display: flex;
  flex-direction: column;
  gap: 0.75rem;
}

.project-tech {
  display: flex;
  flex-wrap: wrap;
  gap: 0.5rem;
  list-style: none;
}

.tech-tag {
  background: var(--surface);
  color: var(--text-secondary);
  border: 1px solid var(--border);
  border-radius: 999px;
  padding: 0.2rem 0.75rem;
  font-size: 0.8rem;
}

.project-links {
  display: flex;
  flex-wrap: wrap;
  align-items: center;
  gap: 0.75rem;
}

/* === Scroll Animation === */
.fade-up {
  opacity: 0;
  transform: translateY(30px);
  transition-property: opacity, transform;
}

.fade-up.aos-animate {
  opacity: 1;
  transform: translateY(0);
}

/* === Detail Modal === */
.modal {
  position: fixed;
  inset: 0;
  z-index: 200;
  background: var(--overlay);
  overflow-y: auto;
  padding: 3rem 1rem;
}

.modal-content {
  position: relative;
  max-width: 800px;
  margin: 0 auto;
  background: var(--background);
  border-radius: 10px;
  padding: 2rem;
  animation: modal-appear 300ms ease-out;
}

@keyframes modal-appear {
  from {
    opacity: 0;
    transform: translateY(-20px);
  }
  to {
    opacity: 1;
    transform: translateY(0);
  }
}

.close-modal {
  position: absolute;
  top: 1rem;
  right: 1.25rem;
  background: none;
  border: none;
  font-size: 2rem;
  line-height: 1;
  color: var(--text-muted);
  cursor: pointer;
}

.close-modal:hover {
  color: var(--text-primary);
}

.modal-header h2 {
  margin-bottom: 1rem;
}

.modal-image img {
  width: 100%;
  max-height: 400px;
  object-fit: cover;
  border-radius: 6px;
}

.modal-description,
.modal-tech,
.modal-links {
  margin-top: 1.5rem;
}

.modal-tech h3 {
  margin-bottom: 0.75rem;
}

.modal-links {
  display: flex;
  gap: 1rem;
}

/* === Contact Form === */
.contact-form {
  max-width: 600px;
  margin: 0 auto;
  display: flex;
  flex-direction: column;
  gap: 1.25rem;
}

.form-group {
  display: flex;
  flex-direction: column;
  gap: 0.4rem;
}

.form-control {
  padding: 0.75rem;
  border: 1px solid var(--border);
  border-radius: 6px;
  font: inherit;
}

.form-control:focus {
  outline: none;
  border-color: var(--primary);
}

.form-control.error {
  border-color: var(--danger);
}

.error-message {
  color: var(--danger);
  font-size: 0.85rem;
}

.form-success {
  color: var(--success);
  font-weight: 600;
}

/* === Scroll To Top === */
.scroll-top {
  position: fixed;
  right: 2rem;
  bottom: 2rem;
  width: 44px;
  height: 44px;
  border-radius: 50%;
  border: none;
  background: var(--primary);
  color: #fff;
  font-size: 1.25rem;
  cursor: pointer;
  opacity: 0;
  pointer-events: none;
  transition: opacity var(--transition-normal);
}

.scroll-top.visible {
  opacity: 1;
  pointer-events: auto;
}

/* === Footer === */
.footer {
  text-align: center;
  padding: 2rem;
  background: var(--surface);
  color: var(--text-muted);
}

/* === Mobile === */
@media (max-width: 768px) {
  .hamburger {
    display: block;
  }

  .hamburger.active .bar:nth-child(2) {
    opacity: 0;
  }

  .hamburger.active .bar:nth-child(1) {
    transform: translateY(8px) rotate(45deg);
  }

  .hamburger.active .bar:nth-child(3) {
    transform: translateY(-8px) rotate(-45deg);
  }

  .nav-menu {
    position: fixed;
    top: var(--header-height);
    left: -100%;
    flex-direction: column;
    width: 100%;
    gap: 0;
    background: var(--background);
    text-align: center;
    transition: left var(--transition-normal);
    box-shadow: 0 10px 27px rgba(0, 0, 0, 0.05);
  }

  .nav-menu.active {
    left: 0;
  }

  .nav-item {
    padding: 1rem 0;
  }

  .hero-title {
    font-size: 2.25rem;
  }

  .modal-content {
    padding: 1.5rem;
  }
}
"#;
