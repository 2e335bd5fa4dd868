//! Tabular input model.
//!
//! A [`Dataset`] is an already-loaded table: an ordered header row plus string
//! rows. The aggregation layer only ever reads whole columns from it, so the
//! accessor surface is deliberately small.

use serde::{Deserialize, Serialize};

use crate::error::CountbyError;
use crate::Result;

/// Name of the column every aggregatable dataset must carry.
pub const COUNTRY_COLUMN: &str = "国";

/// An in-memory table of string cells with named columns.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dataset {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Dataset {
    /// Create a dataset from a header row and data rows.
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { headers, rows }
    }

    /// Column names, in source order.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Number of data rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// True if the dataset has no data rows.
    ///
    /// An empty dataset is valid input: it aggregates to an empty table and a
    /// zero total, not an error.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// True if a column with the given name exists.
    pub fn has_column(&self, name: &str) -> bool {
        self.headers.iter().any(|h| h == name)
    }

    /// All cell values of a named column, in row order.
    ///
    /// Returns [`CountbyError::MissingColumn`] when the column is absent;
    /// cells missing from short rows read as the empty string.
    pub fn column(&self, name: &str) -> Result<Vec<&str>> {
        let index = self
            .headers
            .iter()
            .position(|h| h == name)
            .ok_or_else(|| CountbyError::MissingColumn {
                column: name.to_string(),
            })?;

        Ok(self
            .rows
            .iter()
            .map(|row| row.get(index).map(String::as_str).unwrap_or(""))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_dataset() -> Dataset {
        Dataset::new(
            vec!["ID".to_string(), "国".to_string(), "スコア".to_string()],
            vec![
                vec!["1".to_string(), "日本".to_string(), "80".to_string()],
                vec!["2".to_string(), "アメリカ".to_string(), "75".to_string()],
                vec!["3".to_string(), "日本".to_string(), "60".to_string()],
            ],
        )
    }

    #[test]
    fn test_column_in_row_order() {
        let dataset = sample_dataset();
        let column = dataset.column("国").unwrap();
        assert_eq!(column, vec!["日本", "アメリカ", "日本"]);
    }

    #[test]
    fn test_missing_column() {
        let dataset = sample_dataset();
        let err = dataset.column("地域").unwrap_err();
        assert!(matches!(
            err,
            CountbyError::MissingColumn { ref column } if column == "地域"
        ));
    }

    #[test]
    fn test_has_column() {
        let dataset = sample_dataset();
        assert!(dataset.has_column(COUNTRY_COLUMN));
        assert!(!dataset.has_column("地域"));
    }

    #[test]
    fn test_short_row_reads_as_empty_cell() {
        let dataset = Dataset::new(
            vec!["ID".to_string(), "国".to_string()],
            vec![vec!["1".to_string()]],
        );
        assert_eq!(dataset.column("国").unwrap(), vec![""]);
    }

    #[test]
    fn test_empty_dataset_is_valid() {
        let dataset = Dataset::new(vec!["国".to_string()], vec![]);
        assert!(dataset.is_empty());
        assert_eq!(dataset.len(), 0);
        assert!(dataset.column("国").unwrap().is_empty());
    }
}
