//! Shared constants for storage keys, DOM bindings, and defaults.

// ── Storage keys ────────────────────────────────────────────────

/// Key holding the requested theme (`light`, `dark` or `auto`).
pub const THEME_KEY: &str = "theme";

/// Key holding the selected currency code.
pub const CURRENCY_KEY: &str = "currency";

/// Key holding the monthly budget as a decimal string.
pub const MONTHLY_BUDGET_KEY: &str = "monthlyBudget";

// ── DOM bindings ────────────────────────────────────────────────

/// Id of the optional theme selector control.
pub const THEME_CONTROL_ID: &str = "theme";

/// Id of the optional currency selector control.
pub const CURRENCY_CONTROL_ID: &str = "currency";

/// Id of the optional element showing the monthly budget line.
pub const BUDGET_TEXT_ID: &str = "budget-text";

/// Classes marking an element as displaying a monetary amount.
pub const MONETARY_CLASSES: [&str; 2] = ["amount", "value"];

/// Body class that switches the stylesheet to the dark palette.
pub const DARK_CLASS: &str = "dark-theme";

/// Prefix of the budget line text.
pub const BUDGET_PREFIX: &str = "Budget: ";

/// Media query answering whether the environment prefers a dark scheme.
pub const PREFERS_DARK_QUERY: &str = "(prefers-color-scheme: dark)";

// ── Defaults ────────────────────────────────────────────────────

/// Currency used when nothing (or an empty string) is persisted.
pub const DEFAULT_CURRENCY: &str = "USD";
