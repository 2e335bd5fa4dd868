//! # countbylib
//!
//! Frequency tables over a tabular dataset's country column, grouped by
//! country and by derived geographic region, rendered as aligned text
//! reports that account for East-Asian wide characters.
//!
//! ## Overview
//!
//! Generic tabulation tools align columns by character count, which falls
//! apart the moment labels mix CJK and ASCII: `アメリカ` is four `char`s but
//! occupies eight terminal columns. This library measures rendered width, so
//! `日本` and `Peru` line up in the same report.
//!
//! The pipeline is:
//!
//! 1. **Dataset**: already-loaded rows with named columns (or loaded from CSV
//!    via [`load_dataset`]); the 国 column is required.
//! 2. **Aggregation**: count rows per country, and per region through a
//!    [`RegionMap`] (unknown countries land in その他).
//! 3. **Ordering**: 日本 first then code-point order for countries; a fixed
//!    アジア→その他 priority sequence for regions.
//! 4. **Rendering**: width-aligned lines with comma-grouped counts and a
//!    合計 row.
//!
//! ## Example
//!
//! ```rust
//! use countbylib::{count_dataset, default_region_map, render_summary, Dataset};
//!
//! let dataset = Dataset::new(
//!     vec!["ID".to_string(), "国".to_string()],
//!     vec![
//!         vec!["1".to_string(), "日本".to_string()],
//!         vec!["2".to_string(), "アメリカ".to_string()],
//!         vec!["3".to_string(), "日本".to_string()],
//!     ],
//! );
//!
//! let summary = count_dataset(&dataset, default_region_map()).unwrap();
//! assert_eq!(summary.country.get("日本"), 2);
//! assert_eq!(summary.region.get("アジア"), 2);
//!
//! let text = render_summary(&summary);
//! assert!(text.starts_with("【国別集計結果】\n日本"));
//! ```

pub mod aggregate;
pub mod dataset;
pub mod error;
pub mod ingest;
pub mod order;
pub mod region;
pub mod report;
pub mod width;

pub use aggregate::{count_by_country, count_by_region, count_dataset, FrequencyTable, Summary};
pub use dataset::{Dataset, COUNTRY_COLUMN};
pub use error::CountbyError;
pub use ingest::{load_dataset, load_region_map};
pub use order::{country_order, region_order, HOME_COUNTRY, REGION_ORDER};
pub use region::{default_region_map, RegionMap, OTHER_REGION};
pub use report::{
    country_report, format_parameters, group_digits, region_report, render_line, render_report,
    render_summary, FormatParameters, COUNTRY_REPORT_HEADER, REGION_REPORT_HEADER, TOTAL_LABEL,
};
pub use width::display_width;

/// Result type for countbylib operations
pub type Result<T> = std::result::Result<T, CountbyError>;
