//! Global CSS styles for the Guides section.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* Surfaces */
  --background: #0b0b0d;
  --card: #141417;
  --border: #26262b;

  /* Text */
  --foreground: #f4f4f5;
  --foreground-80: rgba(244, 244, 245, 0.8);
  --foreground-60: rgba(244, 244, 245, 0.6);
  --muted-foreground: #9d9da6;

  /* Accent */
  --primary: #e8e8ea;
  --primary-foreground: #0b0b0d;
  --danger: #ff5c6c;

  /* Typography */
  --font-sans: 'Inter', 'Segoe UI', system-ui, sans-serif;
  --font-mono: 'JetBrains Mono', 'SF Mono', 'Consolas', monospace;

  /* Transitions */
  --transition-fast: 150ms ease;
  --transition-reveal: 700ms cubic-bezier(0.4, 0, 0.2, 1);
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
  color: var(--foreground);
  line-height: 1.6;
  min-height: 100vh;
}

/* === Section Layout === */
.guides-section {
  display: flex;
  align-items: center;
  min-height: 100vh;
  width: 100%;
  padding: 5rem 1.5rem 0;
  overflow-y: auto;
}

.guides-inner {
  width: 100%;
  max-width: 80rem;
  margin: 0 auto;
  padding: 3rem 0;
}

.guides-header {
  display: flex;
  align-items: center;
  justify-content: space-between;
  gap: 1rem;
  margin-bottom: 2rem;
}

.guides-title {
  font-size: 3rem;
  font-weight: 300;
  letter-spacing: -0.02em;
  margin-bottom: 0.5rem;
}

.guides-subtitle {
  font-family: var(--font-mono);
  font-size: 0.875rem;
  color: var(--foreground-60);
}

.guides-grid {
  display: grid;
  gap: 1.5rem;
  grid-template-columns: repeat(auto-fill, minmax(18rem, 1fr));
}

.guides-empty {
  font-family: var(--font-mono);
  color: var(--muted-foreground);
}

/* === Reveal Transitions === */
.reveal {
  transition: opacity var(--transition-reveal), transform var(--transition-reveal);
}

.reveal--shown {
  opacity: 1;
  transform: translateY(0);
}

.reveal--from-above {
  opacity: 0;
  transform: translateY(-3rem);
}

.reveal--from-below {
  opacity: 0;
  transform: translateY(3rem);
}

/* === Buttons === */
.btn-solid,
.btn-outline,
.btn-link {
  display: inline-flex;
  align-items: center;
  gap: 0.5rem;
  font-family: var(--font-sans);
  font-size: 0.875rem;
  border-radius: 0.375rem;
  padding: 0.5rem 1rem;
  cursor: pointer;
  transition: all var(--transition-fast);
}

.btn-solid {
  background: var(--primary);
  color: var(--primary-foreground);
  border: 1px solid var(--primary);
}

.btn-solid:hover {
  opacity: 0.9;
}

.btn-outline {
  background: transparent;
  color: var(--foreground);
  border: 1px solid var(--border);
}

.btn-outline:hover {
  border-color: var(--foreground-60);
}

.btn-link {
  background: none;
  border: none;
  padding: 0;
  margin-top: 1rem;
  color: var(--foreground);
}

.btn-link:hover {
  text-decoration: underline;
}

.btn-lg {
  font-size: 1rem;
  padding: 0.75rem 1.5rem;
}

.btn-solid:disabled,
.btn-outline:disabled {
  opacity: 0.5;
  cursor: not-allowed;
}

.icon-btn {
  background: none;
  border: none;
  color: var(--muted-foreground);
  font-size: 1.5rem;
  line-height: 1;
  cursor: pointer;
}

.icon-btn:hover {
  color: var(--foreground);
}

.icon {
  display: inline-block;
}

/* === Cards === */
.card {
  background: var(--card);
  border: 1px solid var(--border);
  border-radius: 0.75rem;
  padding: 1.5rem;
}

.card:hover {
  box-shadow: 0 10px 30px rgba(0, 0, 0, 0.4);
}

.card-meta {
  display: flex;
  align-items: center;
  gap: 0.5rem;
  margin-bottom: 0.5rem;
  font-size: 0.75rem;
  color: var(--muted-foreground);
}

.card-title {
  font-size: 1.25rem;
  font-weight: 600;
}

.card-description {
  font-size: 0.875rem;
  color: var(--muted-foreground);
}

.card-content {
  margin-top: 1rem;
}

.card-excerpt {
  font-size: 0.875rem;
  color: var(--foreground-80);
  display: -webkit-box;
  -webkit-line-clamp: 3;
  -webkit-box-orient: vertical;
  overflow: hidden;
}

/* === Dialog === */
.dialog-overlay {
  position: fixed;
  inset: 0;
  display: flex;
  align-items: center;
  justify-content: center;
  background: rgba(0, 0, 0, 0.7);
  z-index: 50;
}

.dialog {
  position: relative;
  width: min(42rem, calc(100% - 2rem));
  max-height: calc(100vh - 2rem);
  overflow-y: auto;
  background: var(--background);
  border: 1px solid var(--border);
  border-radius: 0.75rem;
  padding: 1.5rem;
}

.dialog-header {
  margin-bottom: 1rem;
  padding-right: 2rem;
}

.dialog-title {
  font-size: 1.125rem;
  font-weight: 600;
}

.dialog-description {
  font-size: 0.875rem;
  color: var(--muted-foreground);
}

.dialog-close {
  position: absolute;
  top: 1rem;
  right: 1rem;
}

.dialog-body {
  display: grid;
  gap: 1rem;
  padding: 1rem 0;
}

.dialog-footer {
  display: flex;
  justify-content: flex-end;
  gap: 0.5rem;
}

/* === Form Fields === */
.form-field {
  display: grid;
  gap: 0.5rem;
}

.input-label {
  font-size: 0.875rem;
  font-weight: 500;
}

.input-field {
  width: 100%;
  font-family: var(--font-sans);
  font-size: 0.875rem;
  color: var(--foreground);
  background: transparent;
  border: 1px solid var(--border);
  border-radius: 0.375rem;
  padding: 0.5rem 0.75rem;
  outline: none;
  transition: border-color var(--transition-fast);
}

.input-field:focus {
  border-color: var(--foreground-60);
}

.input-field::placeholder {
  color: var(--muted-foreground);
}

.input-field.textarea {
  min-height: 200px;
  resize: vertical;
}

.input-invalid {
  border-color: var(--danger);
}

/* === Responsive === */
@media (min-width: 768px) {
  .guides-section {
    padding: 0 3rem;
  }

  .guides-header {
    margin-bottom: 3rem;
  }

  .guides-title {
    font-size: 3.75rem;
  }

  .guides-subtitle {
    font-size: 1rem;
  }
}

@media (min-width: 1024px) {
  .guides-section {
    padding: 0 4rem;
  }

  .guides-title {
    font-size: 4.5rem;
  }
}
"#;
