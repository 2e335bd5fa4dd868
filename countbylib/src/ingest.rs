//! CSV sources for datasets and region master files.
//!
//! All filesystem and format failures are classified here, before any
//! aggregation runs: a missing file, a headerless file, and a malformed file
//! each map to their own [`CountbyError`] variant so the caller can present
//! one stable message per condition (or, for the region master, fall back to
//! the built-in map).

use std::path::Path;

use crate::dataset::Dataset;
use crate::error::CountbyError;
use crate::region::RegionMap;
use crate::Result;

/// Column name for the country key in a region master file.
pub const MASTER_COUNTRY_COLUMN: &str = "国";

/// Column name for the region value in a region master file.
pub const MASTER_REGION_COLUMN: &str = "地域";

/// Load a CSV file into a [`Dataset`].
///
/// The first record is the header row. A file with headers but no data rows
/// loads as a valid empty dataset.
pub fn load_dataset(path: impl AsRef<Path>) -> Result<Dataset> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(CountbyError::SourceNotFound(path.to_path_buf()));
    }

    let mut reader = csv::Reader::from_path(path).map_err(|e| csv_error(path, e))?;

    let headers: Vec<String> = reader
        .headers()
        .map_err(|e| csv_error(path, e))?
        .iter()
        .map(str::to_string)
        .collect();
    if headers.iter().all(|h| h.is_empty()) {
        return Err(CountbyError::SourceEmpty(path.to_path_buf()));
    }

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| csv_error(path, e))?;
        rows.push(record.iter().map(str::to_string).collect());
    }

    Ok(Dataset::new(headers, rows))
}

/// Load a country/region master CSV into a [`RegionMap`].
///
/// The file must carry 国 and 地域 columns; anything else is a
/// [`CountbyError::RegionMapFormat`]. Callers are expected to fall back to
/// [`crate::region::default_region_map`] on any error from this function.
pub fn load_region_map(path: impl AsRef<Path>) -> Result<RegionMap> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(CountbyError::SourceNotFound(path.to_path_buf()));
    }

    let dataset = load_dataset(path).map_err(|e| match e {
        CountbyError::SourceFormat { path, message } => {
            CountbyError::RegionMapFormat { path, message }
        }
        CountbyError::SourceEmpty(path) => CountbyError::RegionMapFormat {
            path,
            message: "file is empty".to_string(),
        },
        other => other,
    })?;

    let missing_column = |column: &str| CountbyError::RegionMapFormat {
        path: path.to_path_buf(),
        message: format!("missing '{column}' column"),
    };
    if !dataset.has_column(MASTER_COUNTRY_COLUMN) {
        return Err(missing_column(MASTER_COUNTRY_COLUMN));
    }
    if !dataset.has_column(MASTER_REGION_COLUMN) {
        return Err(missing_column(MASTER_REGION_COLUMN));
    }

    let countries = dataset.column(MASTER_COUNTRY_COLUMN)?;
    let regions = dataset.column(MASTER_REGION_COLUMN)?;
    Ok(RegionMap::from_pairs(countries.into_iter().zip(regions)))
}

/// Classify a csv error: IO failures pass through, everything else is a
/// format problem in the named file.
fn csv_error(path: &Path, err: csv::Error) -> CountbyError {
    let message = err.to_string();
    match err.into_kind() {
        csv::ErrorKind::Io(io) => CountbyError::Io(io),
        _ => CountbyError::SourceFormat {
            path: path.to_path_buf(),
            message,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn write_csv(dir: &tempfile::TempDir, name: &str, content: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_load_dataset() {
        let dir = tempdir().unwrap();
        let path = write_csv(
            &dir,
            "data.csv",
            "ID,名前,年齢,国,スコア\n1,太郎,25,日本,80\n2,花子,30,アメリカ,75\n",
        );

        let dataset = load_dataset(&path).unwrap();
        assert_eq!(dataset.len(), 2);
        assert_eq!(dataset.headers()[3], "国");
        assert_eq!(dataset.column("国").unwrap(), vec!["日本", "アメリカ"]);
    }

    #[test]
    fn test_load_dataset_headers_only() {
        let dir = tempdir().unwrap();
        let path = write_csv(&dir, "data.csv", "ID,国\n");

        let dataset = load_dataset(&path).unwrap();
        assert!(dataset.is_empty());
        assert!(dataset.has_column("国"));
    }

    #[test]
    fn test_missing_file() {
        let dir = tempdir().unwrap();
        let err = load_dataset(dir.path().join("nope.csv")).unwrap_err();
        assert!(matches!(err, CountbyError::SourceNotFound(_)));
    }

    #[test]
    fn test_empty_file() {
        let dir = tempdir().unwrap();
        let path = write_csv(&dir, "empty.csv", "");
        let err = load_dataset(&path).unwrap_err();
        assert!(matches!(err, CountbyError::SourceEmpty(_)));
    }

    #[test]
    fn test_ragged_rows_are_a_format_error() {
        let dir = tempdir().unwrap();
        let path = write_csv(&dir, "bad.csv", "ID,国\n1,日本\n2,日本,extra\n");
        let err = load_dataset(&path).unwrap_err();
        assert!(matches!(err, CountbyError::SourceFormat { .. }));
    }

    #[test]
    fn test_load_region_map() {
        let dir = tempdir().unwrap();
        let path = write_csv(&dir, "regions.csv", "国,地域\n日本,アジア\nペルー,南アメリカ\n");

        let map = load_region_map(&path).unwrap();
        assert_eq!(map.len(), 2);
        assert_eq!(map.classify("ペルー"), "南アメリカ");
        assert_eq!(map.classify("日本"), "アジア");
    }

    #[test]
    fn test_load_region_map_missing_column() {
        let dir = tempdir().unwrap();
        let path = write_csv(&dir, "regions.csv", "国,大陸\n日本,アジア\n");

        let err = load_region_map(&path).unwrap_err();
        assert!(matches!(
            err,
            CountbyError::RegionMapFormat { ref message, .. } if message.contains("地域")
        ));
    }

    #[test]
    fn test_load_region_map_missing_file() {
        let dir = tempdir().unwrap();
        let err = load_region_map(dir.path().join("nope.csv")).unwrap_err();
        assert!(matches!(err, CountbyError::SourceNotFound(_)));
    }
}
