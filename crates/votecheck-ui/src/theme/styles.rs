//! Global CSS for the votecheck client.
//!
//! Token values are emitted once as CSS custom properties on `:root`; the
//! component rules below only reference those variables.

use super::tokens::{Theme, THEME};

/// The complete stylesheet: token variables followed by component rules
pub fn global_styles() -> String {
    let mut css = root_variables(&THEME);
    css.push_str(COMPONENT_STYLES);
    css.push_str(&small_screen_rules(&THEME));
    css
}

fn root_variables(theme: &Theme) -> String {
    let c = &theme.color;
    format!(
        r#"
/* === Design Tokens === */
:root {{
  --font-family: {font_family};
  --font-size: {font_size}px;
  --line-height: {line_height};
  --text-transform: {text_transform};
  --spacing: {spacing}px;
  --small-spacing: {small_spacing}px;
  --half-small-spacing: {half_small_spacing}px;
  --content-max-width: {content_max_width}px;
  --form-max-width: {form_max_width}px;

  --color-focus: {focus};
  --color-font: {font};
  --color-font-light: {font_light};
  --color-theme: {theme_color};
  --color-theme-light: {theme_light};
  --color-lightest: {lightest};
  --color-action: {action};
  --color-action-light: {action_light};
  --color-warn: {warn};
  --color-warn-light: {warn_light};
  --color-success: {success};
  --color-success-light: {success_light};
  --color-white: {white};
  --color-white-light: {white_light};

  --border: {border};
  --border-color: {border_color};
  --border-radius: {border_radius}px;
  --border-simple: {border_simple};

  --shadow: {box_shadow};
  --shadow-inset: {inset};
  --shadow-deep: {deep};
  --focus-ring: {focus_ring};
  --input-focus-ring: {input_focus_ring};
}}
"#,
        font_family = theme.font_family,
        font_size = theme.font_size,
        line_height = theme.line_height,
        text_transform = theme.text_transform,
        spacing = theme.spacing,
        small_spacing = theme.small_spacing,
        half_small_spacing = theme.small_spacing / 2,
        content_max_width = theme.content_max_width,
        form_max_width = theme.form_max_width,
        focus = c.focus,
        font = c.font,
        font_light = c.font_light,
        theme_color = c.theme,
        theme_light = c.theme_light,
        lightest = c.lightest,
        action = c.action,
        action_light = c.action_light,
        warn = c.warn,
        warn_light = c.warn_light,
        success = c.success,
        success_light = c.success_light,
        white = c.white,
        white_light = c.white_light,
        border = theme.border.css(),
        border_color = theme.border.color,
        border_radius = theme.border.radius,
        border_simple = theme.border_simple,
        box_shadow = theme.shadow.box_shadow,
        inset = theme.shadow.inset,
        deep = theme.shadow.deep,
        focus_ring = theme.focus_ring(),
        input_focus_ring = theme.input_focus_ring(),
    )
}

fn small_screen_rules(theme: &Theme) -> String {
    format!(
        r#"
/* === Small Screens === */
@media (max-width: {}px) {{
  .centered-box {{ margin: 0; }}
  .page-box {{ padding: var(--small-spacing); }}
  .labelled-flex {{ display: block; }}
  .button-row {{ flex-direction: column-reverse; gap: var(--small-spacing); }}
}}
"#,
        theme.small_screen
    )
}

const COMPONENT_STYLES: &str = r#"
/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

body {
  font-family: var(--font-family);
  font-size: var(--font-size);
  line-height: var(--line-height);
  color: var(--color-font);
  background: var(--color-lightest);
}

a {
  color: var(--color-theme);
}

a:focus {
  outline: none;
  box-shadow: var(--focus-ring);
}

.screenreader-only {
  position: absolute;
  left: -10000px;
  top: auto;
  width: 1px;
  height: 1px;
  overflow: hidden;
}

/* === Page Layout === */
.content-wrapper {
  min-height: 100vh;
  padding: var(--spacing) 0;
}

.centered-box {
  position: relative;
  margin: var(--spacing) auto;
  max-width: var(--content-max-width);
  background-color: var(--color-white-light);
  border-radius: var(--border-radius);
  box-shadow: var(--shadow);
}

.centered-box::after {
  content: "";
  display: table;
  clear: both;
}

.page-box {
  padding: var(--spacing);
}

.page-form {
  max-width: var(--form-max-width);
  margin: 0 auto;
}

.page-heading {
  text-align: center;
  margin-bottom: var(--spacing);
  color: var(--color-theme);
}

.page-note {
  margin-top: var(--spacing);
  padding-top: var(--small-spacing);
  border-top: var(--border-simple);
  font-size: 16px;
}

.result-icon {
  display: block;
  width: 100px;
  margin: 0 auto 20px;
  font-size: 80px;
  line-height: 100px;
  text-align: center;
  color: var(--color-success);
}

.result-icon.result-warn {
  color: var(--color-warn);
}

.button-row {
  margin-top: var(--spacing);
  display: flex;
  justify-content: space-between;
  align-items: center;
}

.clearfix::after {
  content: "";
  display: table;
  clear: both;
}

.float-right {
  float: right;
  margin-top: var(--small-spacing);
}

/* === Labelled Field === */
.labelled {
  position: relative;
  margin-bottom: var(--small-spacing);
}

.labelled-flex {
  display: inline-block;
  flex: 1;
}

.labelled-label {
  display: block;
  text-transform: var(--text-transform);
  color: var(--color-font-light);
}

.labelled-required {
  color: var(--color-warn);
}

.labelled-note {
  font-size: 12px;
  color: var(--color-font-light);
}

.labelled-errors {
  list-style: none;
}

.labelled-error {
  color: var(--color-warn);
  font-size: 12px;
}

/* === Inputs === */
.short-input {
  width: 100%;
  display: block;
  padding: var(--small-spacing);
  margin: var(--half-small-spacing) 0;
  font-size: var(--font-size);
  font-family: inherit;
  color: var(--color-font);
  background-color: var(--color-white-light);
  border: var(--border);
  border-radius: var(--border-radius);
  box-shadow: var(--shadow-inset);
  position: relative;
}

.short-input:focus {
  outline: none;
  box-shadow: var(--input-focus-ring);
  z-index: 1;
}

.short-input.has-errors {
  border-color: var(--color-warn);
}

.short-input::placeholder {
  color: var(--color-font-light);
  opacity: 0.5;
}

.short-input-icon {
  position: absolute;
  right: var(--small-spacing);
  bottom: calc(var(--small-spacing) - 2px);
  z-index: 2;
}

.birthday-input {
  display: flex;
  gap: var(--small-spacing);
}

.birthday-input .birthday-year {
  flex: 2;
}

.birthday-input .birthday-month,
.birthday-input .birthday-day {
  flex: 1;
}

/* === Buttons === */
.btn-primary,
.btn-success,
.btn-transparent {
  display: inline-block;
  text-decoration: none;
  padding: var(--small-spacing) var(--spacing);
  font-family: inherit;
  font-size: var(--font-size);
  text-transform: var(--text-transform);
  border: none;
  border-radius: var(--border-radius);
  cursor: pointer;
  position: relative;
  text-decoration: none;
}

.btn-primary {
  background: var(--color-action);
  color: var(--color-white-light);
  box-shadow: var(--shadow);
}

.btn-primary:hover {
  background: var(--color-action-light);
}

.btn-success {
  background: var(--color-success);
  color: var(--color-theme);
  box-shadow: var(--shadow);
}

.btn-transparent {
  background: transparent;
  color: var(--color-theme);
}

.btn-primary:focus,
.btn-success:focus,
.btn-transparent:focus {
  outline: none;
  box-shadow: var(--focus-ring);
  z-index: 1;
}

.btn-primary:disabled,
.btn-success:disabled {
  opacity: 0.6;
  cursor: progress;
}
"#;
