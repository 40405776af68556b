//! Default markup contract for the theme toggle.

// ── Storage ─────────────────────────────────────────────────────

/// `localStorage` key holding `"light"` or `"dark"`.
pub const STORAGE_KEY: &str = "theme";

// ── Document ────────────────────────────────────────────────────

/// Attribute set on `<html>` so stylesheets can key off the active theme.
pub const ROOT_ATTRIBUTE: &str = "data-bs-theme";

/// Element id of the icon inside the toggle control.
pub const ICON_ID: &str = "toggle-theme-icon";

/// Element id of the clickable toggle control.
pub const TOGGLE_ID: &str = "theme-toggle";

/// Marker set on the toggle control once its click listener is attached.
pub const BOUND_ATTRIBUTE: &str = "data-theme-toggle-bound";

// ── Icons ───────────────────────────────────────────────────────

/// Icon class shown while the light theme is active.
pub const LIGHT_ICON_CLASS: &str = "bi-sun-fill";

/// Icon class shown while the dark theme is active.
pub const DARK_ICON_CLASS: &str = "bi-moon-stars-fill";

// ── Media ───────────────────────────────────────────────────────

/// Media query reporting the system color-scheme preference.
pub const PREFERS_DARK_QUERY: &str = "(prefers-color-scheme: dark)";
