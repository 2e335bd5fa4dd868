//! Aligned text rendering of frequency tables.
//!
//! This is a pure presentation layer: ordering and counting happen upstream,
//! and everything here just turns an ordered table into text lines. Columns
//! are aligned by *display* width (see [`crate::width`]), so reports with
//! mixed CJK and ASCII labels line up in a terminal. Counts are rendered with
//! fixed `1,234`-style digit grouping regardless of platform locale.

use serde::{Deserialize, Serialize};

use crate::aggregate::{FrequencyTable, Summary};
use crate::order::{country_order, region_order};
use crate::width::display_width;

/// Label of the final summary row.
pub const TOTAL_LABEL: &str = "合計";

/// Header line of the country-wise report block.
pub const COUNTRY_REPORT_HEADER: &str = "【国別集計結果】";

/// Header line of the region-wise report block.
pub const REGION_REPORT_HEADER: &str = "【地域別集計結果】";

/// Column alignment parameters for one report block.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormatParameters {
    /// Max display width over all labels to be printed, 合計 included
    pub column_width: usize,
    /// Character length of the largest grouped count, grand total included
    pub digit_width: usize,
}

/// Compute alignment parameters for a block of ordered labels.
///
/// The widest label (or 合計) fixes the label column; the numerically largest
/// of the per-label counts and the grand total fixes the count column, after
/// digit grouping.
pub fn format_parameters(ordered: &[String], table: &FrequencyTable) -> FormatParameters {
    let column_width = ordered
        .iter()
        .map(|label| display_width(label))
        .chain(std::iter::once(display_width(TOTAL_LABEL)))
        .max()
        .unwrap_or(0);

    let max_count = ordered
        .iter()
        .map(|label| table.get(label))
        .max()
        .unwrap_or(0)
        .max(table.total());

    FormatParameters {
        column_width,
        digit_width: group_digits(max_count).len(),
    }
}

/// Render a number with comma digit grouping (`1234567` → `"1,234,567"`).
pub fn group_digits(n: u64) -> String {
    let digits = n.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}

/// Render one report line, newline included.
///
/// The label is padded with spaces until its display width reaches
/// `column_width`, then the grouped count is right-justified to
/// `digit_width`: `{label}{padding}：{count}件`.
pub fn render_line(label: &str, count: u64, params: FormatParameters) -> String {
    let padding = params.column_width.saturating_sub(display_width(label));
    format!(
        "{}{}：{:>width$}件\n",
        label,
        " ".repeat(padding),
        group_digits(count),
        width = params.digit_width
    )
}

/// Render a full report block: header, one line per ordered label, 合計 line.
///
/// Labels absent from the table render with count 0; the 合計 line carries
/// the table's grand total, so an empty table still yields `合計：0件`.
pub fn render_report(header: &str, ordered: &[String], table: &FrequencyTable) -> String {
    let params = format_parameters(ordered, table);
    let mut out = String::new();
    out.push_str(header);
    out.push('\n');
    for label in ordered {
        out.push_str(&render_line(label, table.get(label), params));
    }
    out.push_str(&render_line(TOTAL_LABEL, table.total(), params));
    out
}

/// Country-wise report block for a table, ordered by [`country_order`].
pub fn country_report(table: &FrequencyTable) -> String {
    render_report(COUNTRY_REPORT_HEADER, &country_order(table), table)
}

/// Region-wise report block for a table, ordered by [`region_order`].
pub fn region_report(table: &FrequencyTable) -> String {
    render_report(REGION_REPORT_HEADER, &region_order(table), table)
}

/// Both report blocks of a [`Summary`], separated by a blank line.
pub fn render_summary(summary: &Summary) -> String {
    let mut out = country_report(&summary.country);
    out.push('\n');
    out.push_str(&region_report(&summary.region));
    out
}
