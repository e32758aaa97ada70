//! Removes outliers from tables with Tukey's interquartile range (IQR) fences.
//!
//! Every numeric column is ranked and fenced at `[Q1 - 1.5 * IQR, Q3 + 1.5 * IQR]`; rows with a
//! value strictly outside the fences are dropped, printed and saved to a CSV file. Columns are
//! processed one after the other and each one only sees the rows the previous ones kept.
//!
//! ## Example
//!
//! ```no_run
//! use iqr_filter::{OutlierFilter, Table};
//!
//! # fn main() -> iqr_filter::Result<()> {
//! let table = Table::from_csv_path("measurements.csv")?;
//! let cleaned = OutlierFilter::default()
//!     .output_path("outliers.csv")
//!     .filter(&table)?;
//!
//! println!("kept {} of {} rows", cleaned.len(), table.len());
//! # Ok(())
//! # }
//! ```

#![warn(missing_debug_implementations)]

#[macro_use]
extern crate log;
#[macro_use]
extern crate serde_derive;

mod csv_report;
mod error;
mod filter;
mod fs;
mod report;
pub mod stats;
pub mod table;

use std::fmt;
use std::path::{Path, PathBuf};

pub use crate::error::{Error, Result};
pub use crate::filter::{detect, Cleaned, ColumnPass, OutlierRecord};
pub use crate::report::{CliReport, Report, Verbosity};
pub use crate::stats::univariate::outliers::tukey::{Fences, Label};
pub use crate::table::{Column, ColumnType, Row, Schema, Table, Value};

/// Where the flagged rows go unless told otherwise
pub const DEFAULT_OUTPUT_PATH: &str = "outliers.csv";

#[derive(Serialize)]
struct Summary<'a> {
    rows: usize,
    kept: usize,
    outlier_records: usize,
    columns: &'a [ColumnPass],
}

/// The outlier filter and its configuration
///
/// ```no_run
/// use iqr_filter::{OutlierFilter, Verbosity};
///
/// let filter = OutlierFilter::default()
///     .output_path("removed.csv")
///     .summary_path("removed.json")
///     .verbosity(Verbosity::Verbose);
/// ```
pub struct OutlierFilter {
    output_path: PathBuf,
    summary_path: Option<PathBuf>,
    report: Box<dyn Report>,
}

impl Default for OutlierFilter {
    /// Writes to `outliers.csv`, no summary, one console line per flagged row
    fn default() -> OutlierFilter {
        OutlierFilter {
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            summary_path: None,
            report: Box::new(CliReport::new(Verbosity::default())),
        }
    }
}

impl fmt::Debug for OutlierFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OutlierFilter")
            .field("output_path", &self.output_path)
            .field("summary_path", &self.summary_path)
            .finish()
    }
}

impl OutlierFilter {
    /// Changes where the flagged rows are saved. An existing file is overwritten.
    #[must_use]
    pub fn output_path<P: AsRef<Path>>(mut self, path: P) -> OutlierFilter {
        self.output_path = path.as_ref().to_owned();
        self
    }

    /// Also saves a JSON summary of every column's fences to `path`
    #[must_use]
    pub fn summary_path<P: AsRef<Path>>(mut self, path: P) -> OutlierFilter {
        self.summary_path = Some(path.as_ref().to_owned());
        self
    }

    /// Changes how much is printed to stdout
    #[must_use]
    pub fn verbosity(mut self, verbosity: Verbosity) -> OutlierFilter {
        self.report = Box::new(CliReport::new(verbosity));
        self
    }

    /// Sends the progress to `report` instead of stdout
    #[must_use]
    pub fn with_report<R: Report + 'static>(mut self, report: R) -> OutlierFilter {
        self.report = Box::new(report);
        self
    }

    /// Removes the outliers from `table` and saves them, returning the kept rows along with the
    /// records of what was removed.
    ///
    /// Nothing is returned unless the outlier file (and the summary, if enabled) was written.
    pub fn run(&self, table: &Table) -> Result<Cleaned> {
        let cleaned = filter::detect(table, &*self.report);

        csv_report::write_outliers(&self.output_path, table.schema(), &cleaned.outliers)?;
        info!(
            "Saved {} outlier records to {:?}",
            cleaned.outliers.len(),
            self.output_path
        );

        if let Some(path) = &self.summary_path {
            let summary = Summary {
                rows: table.len(),
                kept: cleaned.kept.len(),
                outlier_records: cleaned.outliers.len(),
                columns: &cleaned.passes,
            };
            fs::save(&summary, path)?;
            info!("Saved summary to {:?}", path);
        }

        Ok(cleaned)
    }

    /// Removes the outliers from `table`, saves them and returns the kept rows
    pub fn filter(&self, table: &Table) -> Result<Table> {
        self.run(table).map(|cleaned| cleaned.kept)
    }
}

/// Shorthand for `OutlierFilter::default().output_path(outliers_csv).filter(table)`
pub fn clean_outliers<P: AsRef<Path>>(table: &Table, outliers_csv: P) -> Result<Table> {
    OutlierFilter::default()
        .output_path(outliers_csv)
        .filter(table)
}
