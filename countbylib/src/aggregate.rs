//! Frequency aggregation over dataset columns.
//!
//! This module produces the two tables a report is built from: counts by
//! country (the raw column values) and counts by region (the same values run
//! through a [`RegionMap`]). Both come out of [`count_dataset`] in one call.

use std::collections::HashMap;

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::dataset::{Dataset, COUNTRY_COLUMN};
use crate::region::RegionMap;
use crate::Result;

/// An unordered label/count table that remembers first-seen label order.
///
/// Display ordering is a separate policy decision (see [`crate::order`]), but
/// labels outside any fixed ordering fall back to the order they first
/// appeared in the input. That order is recorded here explicitly rather than
/// left to incidental hash iteration, so reports are reproducible.
///
/// Invariants: the sum of counts equals the number of observations fed in,
/// and a label observed zero times never appears.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    order: Vec<String>,
    counts: HashMap<String, u64>,
}

impl FrequencyTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table by counting every label an iterator yields.
    pub fn from_labels<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut table = Self::new();
        for label in labels {
            table.increment(label.as_ref());
        }
        table
    }

    /// Count one occurrence of a label.
    pub fn increment(&mut self, label: &str) {
        match self.counts.get_mut(label) {
            Some(count) => *count += 1,
            None => {
                self.order.push(label.to_string());
                self.counts.insert(label.to_string(), 1);
            }
        }
    }

    /// Count for a label; absent labels read as 0.
    pub fn get(&self, label: &str) -> u64 {
        self.counts.get(label).copied().unwrap_or(0)
    }

    /// True if the label was observed at least once.
    pub fn contains(&self, label: &str) -> bool {
        self.counts.contains_key(label)
    }

    /// Labels in the order they were first observed.
    pub fn labels(&self) -> &[String] {
        &self.order
    }

    /// Sum of all counts.
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    /// Number of distinct labels.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// True if no labels were observed.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

// Serialize as a map in first-seen order, not hash order.
impl Serialize for FrequencyTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.order.len()))?;
        for label in &self.order {
            map.serialize_entry(label, &self.get(label))?;
        }
        map.end()
    }
}

/// Both aggregation views of one dataset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    /// Counts keyed by country name
    pub country: FrequencyTable,
    /// Counts keyed by region name (unknown countries under その他)
    pub region: FrequencyTable,
}

impl Summary {
    /// Number of rows that were counted.
    pub fn total(&self) -> u64 {
        self.country.total()
    }
}

/// Count occurrences of each country in the dataset's 国 column.
///
/// Labels are compared by exact string equality. An empty dataset yields an
/// empty table; a dataset without the 国 column is an error.
pub fn count_by_country(dataset: &Dataset) -> Result<FrequencyTable> {
    Ok(FrequencyTable::from_labels(
        dataset.column(COUNTRY_COLUMN)?,
    ))
}

/// Count rows per region, classifying each country through `regions`.
pub fn count_by_region(dataset: &Dataset, regions: &RegionMap) -> Result<FrequencyTable> {
    Ok(FrequencyTable::from_labels(
        dataset
            .column(COUNTRY_COLUMN)?
            .into_iter()
            .map(|country| regions.classify(country)),
    ))
}

/// Aggregate a dataset into both tables.
///
/// # Example
///
/// ```rust
/// use countbylib::{count_dataset, default_region_map, Dataset};
///
/// let dataset = Dataset::new(
///     vec!["国".to_string()],
///     vec![vec!["日本".to_string()], vec!["アメリカ".to_string()]],
/// );
/// let summary = count_dataset(&dataset, default_region_map()).unwrap();
/// assert_eq!(summary.country.get("日本"), 1);
/// assert_eq!(summary.region.get("北アメリカ"), 1);
/// assert_eq!(summary.total(), 2);
/// ```
pub fn count_dataset(dataset: &Dataset, regions: &RegionMap) -> Result<Summary> {
    Ok(Summary {
        country: count_by_country(dataset)?,
        region: count_by_region(dataset, regions)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CountbyError;
    use crate::region::{default_region_map, OTHER_REGION};

    fn sample_dataset() -> Dataset {
        let countries = ["日本", "アメリカ", "日本", "インド", "アメリカ"];
        Dataset::new(
            vec!["ID".to_string(), "国".to_string()],
            countries
                .iter()
                .enumerate()
                .map(|(i, c)| vec![(i + 1).to_string(), c.to_string()])
                .collect(),
        )
    }

    #[test]
    fn test_count_by_country() {
        let table = count_by_country(&sample_dataset()).unwrap();
        assert_eq!(table.len(), 3);
        assert_eq!(table.get("日本"), 2);
        assert_eq!(table.get("アメリカ"), 2);
        assert_eq!(table.get("インド"), 1);
        assert_eq!(table.total(), 5);
    }

    #[test]
    fn test_first_seen_label_order() {
        let table = count_by_country(&sample_dataset()).unwrap();
        assert_eq!(table.labels(), ["日本", "アメリカ", "インド"]);
    }

    #[test]
    fn test_absent_label_reads_zero() {
        let table = count_by_country(&sample_dataset()).unwrap();
        assert_eq!(table.get("カナダ"), 0);
        assert!(!table.contains("カナダ"));
    }

    #[test]
    fn test_count_by_region() {
        let table = count_by_region(&sample_dataset(), default_region_map()).unwrap();
        assert_eq!(table.get("アジア"), 3);
        assert_eq!(table.get("北アメリカ"), 2);
        assert_eq!(table.total(), 5);
    }

    #[test]
    fn test_unknown_country_counted_as_other() {
        let dataset = Dataset::new(
            vec!["国".to_string()],
            vec![vec!["アトランティス".to_string()], vec!["日本".to_string()]],
        );
        let table = count_by_region(&dataset, default_region_map()).unwrap();
        assert_eq!(table.get(OTHER_REGION), 1);
        assert_eq!(table.get("アジア"), 1);
    }

    #[test]
    fn test_region_total_matches_country_total() {
        let dataset = Dataset::new(
            vec!["国".to_string()],
            vec![
                vec!["日本".to_string()],
                vec!["アトランティス".to_string()],
                vec!["ドイツ".to_string()],
            ],
        );
        let summary = count_dataset(&dataset, default_region_map()).unwrap();
        assert_eq!(summary.country.total(), 3);
        assert_eq!(summary.region.total(), summary.country.total());
    }

    #[test]
    fn test_empty_dataset_yields_empty_table() {
        let dataset = Dataset::new(vec!["国".to_string()], vec![]);
        let summary = count_dataset(&dataset, default_region_map()).unwrap();
        assert!(summary.country.is_empty());
        assert!(summary.region.is_empty());
        assert_eq!(summary.total(), 0);
    }

    #[test]
    fn test_missing_country_column() {
        let dataset = Dataset::new(
            vec!["ID".to_string(), "名前".to_string()],
            vec![vec!["1".to_string(), "太郎".to_string()]],
        );
        let err = count_by_country(&dataset).unwrap_err();
        assert!(matches!(
            err,
            CountbyError::MissingColumn { ref column } if column == COUNTRY_COLUMN
        ));
    }

    #[test]
    fn test_serialize_in_first_seen_order() {
        let table = FrequencyTable::from_labels(["b", "a", "b", "c"]);
        let json = serde_json::to_string(&table).unwrap();
        assert_eq!(json, r#"{"b":2,"a":1,"c":1}"#);
    }
}
