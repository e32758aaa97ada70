//! The outlier detection fold
//!
//! Numeric columns are visited in declared order. Each visit ranks the column over the rows that
//! survived the previous visits, fences it with Tukey's inner fences and drops every row that lands
//! strictly outside them. A dropped row is never seen by later columns, so the order of the columns
//! can change both the statistics of later columns and the final set of kept rows.

use itertools::{Either, Itertools};
use std::fmt;
use std::sync::Arc;

use crate::report::Report;
use crate::stats::univariate::outliers::tukey::{self, Fences, Label};
use crate::table::{Column, Row, Table, Value};

/// A row flagged by one column's fences
#[derive(Clone, Debug)]
pub struct OutlierRecord {
    /// Original index of the row
    pub index: usize,
    /// Column whose fences flagged the row
    pub column: String,
    /// The offending value
    pub value: Value,
    pub label: Label,
    row: Arc<Row>,
}

impl OutlierRecord {
    /// The whole row, as it was when it got flagged
    pub fn row(&self) -> &Row {
        &self.row
    }
}

impl fmt::Display for OutlierRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Outlier in row {} for column '{}': {}",
            self.index, self.column, self.value
        )
    }
}

/// What happened to a single numeric column
#[derive(Clone, Debug, Serialize)]
pub struct ColumnPass {
    pub column: String,
    /// Number of usable values that were ranked
    pub considered: usize,
    /// `None` when there was nothing to rank
    pub fences: Option<Fences<f64>>,
    /// Number of rows dropped by this column
    pub flagged: usize,
}

/// Result of a run: the surviving rows plus everything that was dropped on the way
#[derive(Clone, Debug)]
pub struct Cleaned {
    pub kept: Table,
    /// One record per (row, column) flag, in the order they were found
    pub outliers: Vec<OutlierRecord>,
    /// One entry per numeric column, in column order
    pub passes: Vec<ColumnPass>,
}

/// Runs the detection over `table` without touching the filesystem
///
/// `table` is left as is; the kept table shares its rows.
pub fn detect(table: &Table, report: &dyn Report) -> Cleaned {
    let initial = Cleaned {
        kept: table.clone(),
        outliers: vec![],
        passes: vec![],
    };

    table
        .columns()
        .iter()
        .enumerate()
        .fold(initial, |state, (position, column)| {
            if column.is_numeric() {
                narrow(state, position, column, report)
            } else {
                report.column_skipped(column);
                state
            }
        })
}

fn narrow(state: Cleaned, position: usize, column: &Column, report: &dyn Report) -> Cleaned {
    let Cleaned {
        kept: working,
        mut outliers,
        mut passes,
    } = state;

    let values = working.numeric_values(&column.name);
    let fences = tukey::classify(&values);

    let label_of = |row: &Row| -> Option<Label> {
        let fences = fences.as_ref()?;
        let x = row.get(position)?.as_f64()?;
        let label = fences.label(x);

        if label.is_outlier() {
            Some(label)
        } else {
            None
        }
    };
    let (kept, flagged): (Vec<Arc<Row>>, Vec<(Arc<Row>, Label)>) = working
        .shared_rows()
        .iter()
        .cloned()
        .partition_map(|row| match label_of(row.as_ref()) {
            Some(label) => Either::Right((row, label)),
            None => Either::Left(row),
        });

    let pass = ColumnPass {
        column: column.name.clone(),
        considered: values.len(),
        fences,
        flagged: flagged.len(),
    };
    debug!(
        "Column '{}': {:?}, {} of {} values flagged",
        pass.column, pass.fences, pass.flagged, pass.considered
    );

    for (row, label) in flagged {
        let record = OutlierRecord {
            index: row.index(),
            column: column.name.clone(),
            value: row.values()[position].clone(),
            label,
            row,
        };
        report.outlier(&record);
        outliers.push(record);
    }
    report.column_analyzed(&pass);
    passes.push(pass);

    Cleaned {
        kept: Table::from_rows(working.shared_schema().clone(), kept),
        outliers,
        passes,
    }
}
