//! Plain-text layout of a [`TableModel`] for terminal output.

use super::table::TableModel;

const COLUMN_GAP: &str = "  ";

fn width(text: &str) -> usize {
    text.chars().count()
}

/// Lays the table out as aligned columns: labels left-aligned, amounts
/// right-aligned, with a rule under the header.
///
/// Striped rows are prefixed with `▌`, the other rows with a space.
pub fn to_text(table: &TableModel) -> String {
    let mut widths = table.headers.each_ref().map(|h| width(h));
    for row in &table.rows {
        widths[0] = widths[0].max(width(&row.label));
        widths[1] = widths[1].max(width(&row.primary));
        widths[2] = widths[2].max(width(&row.secondary));
    }

    let mut out = String::new();
    out.push_str(&format!(
        "  {:<w0$}{gap}{:>w1$}{gap}{:>w2$}\n",
        table.headers[0],
        table.headers[1],
        table.headers[2],
        w0 = widths[0],
        w1 = widths[1],
        w2 = widths[2],
        gap = COLUMN_GAP,
    ));
    let rule_width = widths.iter().sum::<usize>() + 2 * COLUMN_GAP.len();
    out.push_str(&format!("  {}\n", "-".repeat(rule_width)));

    for row in &table.rows {
        let marker = if row.striped { '▌' } else { ' ' };
        out.push_str(&format!(
            "{marker} {:<w0$}{gap}{:>w1$}{gap}{:>w2$}\n",
            row.label,
            row.primary,
            row.secondary,
            w0 = widths[0],
            w1 = widths[1],
            w2 = widths[2],
            gap = COLUMN_GAP,
        ));
    }
    out
}
