//! In-memory tables
//!
//! A [`Table`] is an ordered list of rows over a fixed [`Schema`]. Rows are reference counted and
//! never mutated, so deriving a narrower table (see [`Table::retain`]) shares the row data with the
//! table it came from and leaves that table untouched.

mod load;
mod schema;
mod value;

use std::sync::Arc;

use crate::error::{Error, Result};

pub use self::schema::{Column, ColumnType, Schema};
pub use self::value::Value;

/// A row, remembering its position in the table it was first loaded into
#[derive(Clone, Debug, PartialEq)]
pub struct Row {
    index: usize,
    values: Box<[Value]>,
}

impl Row {
    /// Original, zero-based position of the row
    pub fn index(&self) -> usize {
        self.index
    }

    /// Cells in column order
    pub fn values(&self) -> &[Value] {
        &self.values
    }

    pub fn get(&self, column: usize) -> Option<&Value> {
        self.values.get(column)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Table {
    schema: Arc<Schema>,
    rows: Vec<Arc<Row>>,
}

impl Table {
    /// Builds a table, numbering the rows `0..rows.len()`
    ///
    /// Every row must have one value per column and every non-null value must match the type of
    /// its column; integers are accepted (and widened) in float columns.
    pub fn new(schema: Schema, rows: Vec<Vec<Value>>) -> Result<Table> {
        let width = schema.len();
        let rows = rows
            .into_iter()
            .enumerate()
            .map(|(index, values)| {
                if values.len() != width {
                    return Err(Error::InvalidInput(format!(
                        "row {} has {} values, expected {}",
                        index,
                        values.len(),
                        width
                    )));
                }

                let values = values
                    .into_iter()
                    .zip(schema.columns())
                    .map(|(value, column)| {
                        let found = value.column_type();
                        column.ty.coerce(value).ok_or_else(|| {
                            Error::InvalidInput(format!(
                                "row {} column '{}' holds a {} value, expected {}",
                                index,
                                column.name,
                                found.map_or_else(|| "null".to_owned(), |ty| ty.to_string()),
                                column.ty
                            ))
                        })
                    })
                    .collect::<Result<Vec<_>>>()?;

                Ok(Arc::new(Row {
                    index,
                    values: values.into_boxed_slice(),
                }))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Table {
            schema: Arc::new(schema),
            rows,
        })
    }

    /// A table with the given columns and no rows
    pub fn empty(schema: Schema) -> Table {
        Table {
            schema: Arc::new(schema),
            rows: vec![],
        }
    }

    pub(crate) fn from_rows(schema: Arc<Schema>, rows: Vec<Arc<Row>>) -> Table {
        Table { schema, rows }
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    pub(crate) fn shared_schema(&self) -> &Arc<Schema> {
        &self.schema
    }

    pub fn columns(&self) -> &[Column] {
        self.schema.columns()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.schema.index_of(name)
    }

    /// Number of rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> impl Iterator<Item = &Row> {
        self.rows.iter().map(|row| &**row)
    }

    pub(crate) fn shared_rows(&self) -> &[Arc<Row>] {
        &self.rows
    }

    /// Row at the current position `position` (not the original index)
    pub fn row(&self, position: usize) -> Option<&Row> {
        self.rows.get(position).map(|row| &**row)
    }

    /// Cell at the current position `position` in column `column`
    pub fn get(&self, position: usize, column: &str) -> Option<&Value> {
        let column = self.column_index(column)?;
        self.row(position)?.get(column)
    }

    /// Original indices of the rows, in order
    pub fn indices(&self) -> Vec<usize> {
        self.rows.iter().map(|row| row.index).collect()
    }

    /// Usable numeric values of a column, see [`Value::as_f64`]
    ///
    /// Empty for non-numeric and unknown columns.
    pub fn numeric_values(&self, column: &str) -> Vec<f64> {
        match self.column_index(column) {
            Some(i) if self.schema.columns()[i].is_numeric() => self
                .rows
                .iter()
                .filter_map(|row| row.values[i].as_f64())
                .collect(),
            _ => vec![],
        }
    }

    /// Derives a table with the rows for which `keep` returns `true`, order preserved
    pub fn retain<F>(&self, mut keep: F) -> Table
    where
        F: FnMut(&Row) -> bool,
    {
        Table {
            schema: self.schema.clone(),
            rows: self
                .rows
                .iter()
                .filter(|row| keep(row.as_ref()))
                .cloned()
                .collect(),
        }
    }

    /// Derives a table with only the named columns, in the given order
    ///
    /// Rows keep their original indices.
    pub fn select(&self, names: &[&str]) -> Result<Table> {
        let positions = names
            .iter()
            .map(|name| {
                self.column_index(name)
                    .ok_or_else(|| Error::InvalidInput(format!("unknown column '{}'", name)))
            })
            .collect::<Result<Vec<_>>>()?;
        let schema = Schema::new(
            positions
                .iter()
                .map(|&i| self.schema.columns()[i].clone())
                .collect(),
        )?;
        let rows = self
            .rows
            .iter()
            .map(|row| {
                Arc::new(Row {
                    index: row.index,
                    values: positions.iter().map(|&i| row.values[i].clone()).collect(),
                })
            })
            .collect();

        Ok(Table {
            schema: Arc::new(schema),
            rows,
        })
    }
}

#[cfg(test)]
mod test {
    use super::{Column, ColumnType, Schema, Table, Value};
    use crate::error::Error;

    fn people() -> Table {
        let schema = Schema::new(vec![
            Column::new("name", ColumnType::Text),
            Column::new("age", ColumnType::Integer),
            Column::new("height", ColumnType::Float),
        ])
        .unwrap();

        Table::new(
            schema,
            vec![
                vec!["ann".into(), Value::Integer(31), Value::Float(1.62)],
                vec!["bob".into(), Value::Null, Value::Integer(180)],
                vec!["cat".into(), Value::Integer(27), Value::Float(f64::NAN)],
            ],
        )
        .unwrap()
    }

    #[test]
    fn construction() {
        let table = people();

        assert_eq!(table.len(), 3);
        assert_eq!(table.indices(), vec![0, 1, 2]);
        assert_eq!(table.get(1, "height"), Some(&Value::Float(180.)));
        assert_eq!(table.get(1, "weight"), None);
        assert_eq!(table.numeric_values("age"), vec![31., 27.]);
        assert_eq!(table.numeric_values("height"), vec![1.62, 180.]);
        assert!(table.numeric_values("name").is_empty());
    }

    #[test]
    fn rejects_ragged_rows() {
        let schema = Schema::new(vec![Column::new("a", ColumnType::Integer)]).unwrap();
        let result = Table::new(schema, vec![vec![Value::Integer(1), Value::Integer(2)]]);

        assert!(matches!(result, Err(Error::InvalidInput(_))));
    }

    #[test]
    fn rejects_mistyped_values() {
        let schema = Schema::new(vec![Column::new("a", ColumnType::Integer)]).unwrap();
        let result = Table::new(schema, vec![vec!["1".into()]]);

        assert!(matches!(result, Err(Error::InvalidInput(_))));
    }

    #[test]
    fn retain_keeps_order_and_indices() {
        let table = people();
        let narrowed = table.retain(|row| row.index() != 1);

        assert_eq!(narrowed.indices(), vec![0, 2]);
        assert_eq!(narrowed.get(1, "name"), Some(&Value::from("cat")));
        // the source is untouched
        assert_eq!(table.len(), 3);
    }

    #[test]
    fn select_reorders_columns() {
        let table = people().retain(|row| row.index() > 0);
        let selected = table.select(&["height", "name"]).unwrap();

        assert_eq!(
            selected.schema().names().collect::<Vec<_>>(),
            vec!["height", "name"]
        );
        assert_eq!(selected.indices(), vec![1, 2]);
        assert_eq!(selected.get(0, "name"), Some(&Value::from("bob")));
        assert!(matches!(
            table.select(&["weight"]),
            Err(Error::InvalidInput(_))
        ));
    }
}
