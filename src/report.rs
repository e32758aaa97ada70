use crate::filter::{ColumnPass, OutlierRecord};
use crate::table::Column;

/// Receives the progress of a filter run, in order
///
/// Columns are visited in declared order. For a numeric column every flagged row is reported with
/// [`Report::outlier`] (in row order) before the column's [`Report::column_analyzed`] call.
pub trait Report {
    fn column_skipped(&self, _column: &Column) {}
    fn outlier(&self, _record: &OutlierRecord) {}
    fn column_analyzed(&self, _pass: &ColumnPass) {}
}

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Verbosity {
    /// Print nothing
    Quiet,
    /// One line per flagged (row, column) pair
    Normal,
    /// Also describe every column pass
    Verbose,
}

impl Default for Verbosity {
    fn default() -> Verbosity {
        Verbosity::Normal
    }
}

/// Prints the run to stdout
#[derive(Debug)]
pub struct CliReport {
    pub verbosity: Verbosity,
}
impl CliReport {
    pub fn new(verbosity: Verbosity) -> CliReport {
        CliReport { verbosity }
    }
}

impl Report for CliReport {
    fn column_skipped(&self, column: &Column) {
        if self.verbosity == Verbosity::Verbose {
            println!("Skipping {} column '{}'", column.ty, column.name);
        }
    }

    fn outlier(&self, record: &OutlierRecord) {
        if self.verbosity != Verbosity::Quiet {
            println!("{}", record);
        }
    }

    fn column_analyzed(&self, pass: &ColumnPass) {
        if self.verbosity != Verbosity::Verbose {
            return;
        }

        match &pass.fences {
            Some(fences) => println!(
                "Column '{}': Q1 = {}, Q3 = {}, IQR = {}, bounds = [{}, {}]; {} of {} values flagged",
                pass.column,
                fences.q1,
                fences.q3,
                fences.iqr,
                fences.lower,
                fences.upper,
                pass.flagged,
                pass.considered
            ),
            None => println!("Column '{}': no values to rank", pass.column),
        }
    }
}
