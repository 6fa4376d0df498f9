//! Global CSS for the droplink page.
//!
//! Monochrome terminal look: Courier, ink on paper, one narrow column.

pub const GLOBAL_STYLES: &str = r#"
/* === Palette and type === */
:root {
  --paper: #ffffff;
  --ink: #111111;
  --muted: #666666;
  --rule: #cccccc;
  --rule-strong: #111111;
  --font-mono: 'Courier New', Courier, monospace;
}

/* === Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

body {
  font-family: var(--font-mono);
  background: var(--paper);
  color: var(--ink);
  line-height: 1.6;
}

/* === Page frame === */
.page {
  width: 560px;
  max-width: 92vw;
  margin: 3rem auto;
}

.page-title {
  font-size: 2rem;
  font-weight: 700;
  letter-spacing: 0.05em;
  margin-bottom: 1.5rem;
}

/* === Form === */
.upload-form {
  display: flex;
  flex-direction: column;
  gap: 1rem;
}

.field-row {
  display: flex;
  align-items: baseline;
  gap: 0.75rem;
}

.field-label {
  flex: 0 0 3.5rem;
}

.url-input {
  flex: 1;
  font-family: var(--font-mono);
  font-size: 1rem;
  color: var(--ink);
  background: var(--paper);
  border: 1px solid var(--rule-strong);
  padding: 0.4rem 0.5rem;
}

.url-input:disabled {
  color: var(--muted);
}

/* === Drop zone === */
.drop-zone {
  flex: 1;
  border: 1px dashed var(--rule-strong);
  padding: 1rem;
  text-align: center;
}

.drop-zone.dragging {
  background: #f0f0f0;
  border-style: solid;
}

.drop-zone-hint {
  color: var(--muted);
  cursor: pointer;
}

.drop-zone-browse {
  color: var(--ink);
  text-decoration: underline;
}

.hidden-input {
  display: none;
}

/* === Chosen file === */
.file-chip {
  display: flex;
  align-items: baseline;
  justify-content: center;
  gap: 0.75rem;
}

.file-chip-size {
  color: var(--muted);
}

.remove-button {
  font-family: var(--font-mono);
  font-size: 0.875rem;
  color: var(--ink);
  background: var(--paper);
  border: 1px solid var(--rule-strong);
  padding: 0 0.5rem;
  cursor: pointer;
}

/* === Preview === */
.preview-panel {
  text-align: center;
}

.preview-image {
  max-width: 100%;
  max-height: 240px;
  border: 1px solid var(--rule);
}

/* === Options and submit === */
.options-row {
  display: flex;
  align-items: center;
}

.checkbox-label {
  display: flex;
  align-items: center;
  gap: 0.5rem;
  cursor: pointer;
}

.submit-button {
  font-family: var(--font-mono);
  font-size: 1rem;
  font-weight: 700;
  color: var(--paper);
  background: var(--ink);
  border: 1px solid var(--rule-strong);
  padding: 0.5rem 1rem;
  cursor: pointer;
}

.submit-button:disabled {
  background: var(--muted);
  cursor: default;
}

/* === Settled states === */
.status-line {
  color: var(--muted);
}

.error-text {
  color: var(--ink);
  border-left: 3px solid var(--rule-strong);
  padding-left: 0.75rem;
}

.result-panel {
  border-top: 1px solid var(--rule);
  padding-top: 1rem;
  display: flex;
  flex-direction: column;
  gap: 0.75rem;
}

.result-title {
  font-size: 1.25rem;
  font-weight: 700;
}

.short-link {
  color: var(--ink);
  word-break: break-all;
}

.qr-image {
  width: 320px;
  max-width: 100%;
  align-self: center;
}
"#;
