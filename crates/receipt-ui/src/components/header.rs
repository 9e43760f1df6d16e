use unicode_width::UnicodeWidthStr;

use crate::themes::Theme;

/// Default separator width in columns.
pub const SEPARATOR_WIDTH: usize = 50;

/// Section heading: a styled title line followed by a `─` separator.
pub struct Header<'a> {
    pub title: &'a str,
    /// Separator width; never narrower than the title.
    pub width: usize,
    pub theme: &'a Theme,
}

impl<'a> Header<'a> {
    pub fn new(title: &'a str, theme: &'a Theme) -> Self {
        Self {
            title,
            width: SEPARATOR_WIDTH,
            theme,
        }
    }

    /// Render the two header lines joined by `\n`.
    pub fn render(&self) -> String {
        let width = self.width.max(self.title.width());
        format!(
            "{}\n{}",
            self.theme.header(self.title),
            self.theme.paint(self.theme.separator, &"─".repeat(width)),
        )
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_plain_lines() {
        let theme = Theme::plain();
        let out = Header::new("📊 Summary Statistics", &theme).render();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "📊 Summary Statistics");
        assert_eq!(lines[1].chars().count(), SEPARATOR_WIDTH);
    }

    #[test]
    fn test_header_separator_grows_to_title_width() {
        let theme = Theme::plain();
        // Each emoji occupies two columns.
        let title = "📊".repeat(30);
        let out = Header::new(&title, &theme).render();
        assert_eq!(out.lines().nth(1).unwrap().chars().count(), 60);
    }

    #[test]
    fn test_header_default_width() {
        let theme = Theme::plain();
        let out = Header::new("Title", &theme).render();
        assert_eq!(out.lines().nth(1).unwrap(), "─".repeat(SEPARATOR_WIDTH));
    }
}
