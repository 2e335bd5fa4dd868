//! Display-order policies for report rows.
//!
//! Frequency tables are unordered; these functions turn them into the fixed,
//! human-friendly row sequences the reports use. Both policies are total:
//! every label in the table appears exactly once in the output, and labels
//! the table does not contain are never invented here (the formatter may
//! still render extra labels with count 0).

use crate::aggregate::FrequencyTable;

/// Country pinned to the first report row when present.
pub const HOME_COUNTRY: &str = "日本";

/// Fixed display order for the canonical regions.
pub const REGION_ORDER: [&str; 7] = [
    "アジア",
    "ヨーロッパ",
    "北アメリカ",
    "南アメリカ",
    "アフリカ",
    "オセアニア",
    "その他",
];

/// Display order for a country table: 日本 first when present, everything
/// else sorted by code-point order of the label strings.
pub fn country_order(table: &FrequencyTable) -> Vec<String> {
    let mut rest: Vec<String> = table
        .labels()
        .iter()
        .filter(|label| *label != HOME_COUNTRY)
        .cloned()
        .collect();
    rest.sort();

    if table.contains(HOME_COUNTRY) {
        let mut ordered = Vec::with_capacity(rest.len() + 1);
        ordered.push(HOME_COUNTRY.to_string());
        ordered.extend(rest);
        ordered
    } else {
        rest
    }
}

/// Display order for a region table: the [`REGION_ORDER`] priority sequence
/// (skipping regions absent from the table), then any region outside the
/// sequence in the table's first-seen order.
pub fn region_order(table: &FrequencyTable) -> Vec<String> {
    let mut ordered: Vec<String> = REGION_ORDER
        .iter()
        .filter(|region| table.contains(region))
        .map(|region| region.to_string())
        .collect();

    for label in table.labels() {
        if !ordered.iter().any(|existing| existing == label) {
            ordered.push(label.clone());
        }
    }

    ordered
}
