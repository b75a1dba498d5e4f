//! Terminal rendering of reports using console styles

use console::Style;
use framesumlib::{LineKind, Report};

/// Styles applied per line kind
struct Theme {
    header: Style,
    column_title: Style,
    warning: Style,
    plain: Style,
}

impl Theme {
    fn new() -> Self {
        Self {
            header: Style::new().bold(),
            column_title: Style::new().cyan(),
            warning: Style::new().yellow(),
            plain: Style::new(),
        }
    }

    fn for_kind(&self, kind: LineKind) -> &Style {
        match kind {
            LineKind::Header => &self.header,
            LineKind::ColumnTitle => &self.column_title,
            LineKind::Warning => &self.warning,
            LineKind::ColumnSpec | LineKind::Values => &self.plain,
        }
    }
}

/// Render a report for stdout.
///
/// Styling is dropped automatically when stdout is not a terminal, so piped
/// output is exactly the report text.
pub fn render_report(report: &Report) -> String {
    let theme = Theme::new();
    report
        .lines()
        .iter()
        .map(|line| theme.for_kind(line.kind).apply_to(&line.text).to_string())
        .collect::<Vec<_>>()
        .join("\n")
}
