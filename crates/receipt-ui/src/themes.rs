use crossterm::style::{Color, ContentStyle, Stylize};

/// Styles used by every receipt-ui renderer.
///
/// When `enabled` is `false` every helper returns its input unchanged, so the
/// output carries no ANSI escape codes at all.
#[derive(Debug, Clone)]
pub struct Theme {
    pub enabled: bool,

    // ── Headings ─────────────────────────────────────────────────────────────
    pub header: ContentStyle,
    pub separator: ContentStyle,

    // ── Text ─────────────────────────────────────────────────────────────────
    pub dim: ContentStyle,
    pub label: ContentStyle,
    pub value: ContentStyle,

    // ── Status ───────────────────────────────────────────────────────────────
    pub warning: ContentStyle,
    pub error: ContentStyle,

    // ── Tables and charts ────────────────────────────────────────────────────
    pub table_key: ContentStyle,
    pub table_total: ContentStyle,
    pub bar_expense: ContentStyle,
    pub bar_reimbursement: ContentStyle,
    pub axis: ContentStyle,
}

impl Theme {
    // ── Constructors ─────────────────────────────────────────────────────────

    /// ANSI colour theme.
    pub fn colored() -> Self {
        Self {
            enabled: true,

            header: ContentStyle::new().with(Color::Cyan).bold(),
            separator: ContentStyle::new().with(Color::DarkGrey),

            dim: ContentStyle::new().dim(),
            label: ContentStyle::new().with(Color::Green),
            value: ContentStyle::new(),

            warning: ContentStyle::new().with(Color::Yellow),
            error: ContentStyle::new().with(Color::Red),

            table_key: ContentStyle::new().with(Color::Green),
            table_total: ContentStyle::new().with(Color::Yellow).bold(),
            bar_expense: ContentStyle::new().with(Color::Cyan),
            bar_reimbursement: ContentStyle::new().with(Color::Green),
            axis: ContentStyle::new().with(Color::DarkGrey),
        }
    }

    /// No colour at all.
    pub fn plain() -> Self {
        Self {
            enabled: false,
            ..Self::colored()
        }
    }

    /// Theme for the `--no-color` flag.
    pub fn from_no_color(no_color: bool) -> Self {
        if no_color {
            Self::plain()
        } else {
            Self::colored()
        }
    }

    // ── Style helpers ────────────────────────────────────────────────────────

    /// Apply `style` to `text` when colour is enabled.
    pub fn paint(&self, style: ContentStyle, text: &str) -> String {
        if self.enabled {
            style.apply(text).to_string()
        } else {
            text.to_string()
        }
    }

    pub fn header(&self, text: &str) -> String {
        self.paint(self.header, text)
    }

    pub fn warning(&self, text: &str) -> String {
        self.paint(self.warning, text)
    }

    pub fn error(&self, text: &str) -> String {
        self.paint(self.error, text)
    }

    pub fn dim(&self, text: &str) -> String {
        self.paint(self.dim, text)
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────────
