use std::collections::HashSet;
use std::fmt;

use super::value::Value;
use crate::error::{Error, Result};

/// Per-column type tag, fixed when the table is built
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub enum ColumnType {
    Integer,
    Float,
    Boolean,
    Text,
}

impl ColumnType {
    /// Only numeric columns are ranked and fenced
    pub fn is_numeric(self) -> bool {
        matches!(self, ColumnType::Integer | ColumnType::Float)
    }

    /// Converts `value` into a cell of this type, `None` if it doesn't fit
    ///
    /// `Null` fits every column; integers are widened into float columns.
    pub(crate) fn coerce(self, value: Value) -> Option<Value> {
        match (self, value) {
            (_, Value::Null) => Some(Value::Null),
            (ColumnType::Integer, v @ Value::Integer(_)) => Some(v),
            (ColumnType::Float, v @ Value::Float(_)) => Some(v),
            (ColumnType::Float, Value::Integer(i)) => Some(Value::Float(i as f64)),
            (ColumnType::Boolean, v @ Value::Boolean(_)) => Some(v),
            (ColumnType::Text, v @ Value::Text(_)) => Some(v),
            _ => None,
        }
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ColumnType::Integer => "integer",
            ColumnType::Float => "float",
            ColumnType::Boolean => "boolean",
            ColumnType::Text => "text",
        })
    }
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Column {
    pub name: String,
    pub ty: ColumnType,
}

impl Column {
    pub fn new<S: Into<String>>(name: S, ty: ColumnType) -> Column {
        Column {
            name: name.into(),
            ty,
        }
    }

    pub fn is_numeric(&self) -> bool {
        self.ty.is_numeric()
    }
}

/// Ordered, uniquely named columns
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Schema {
    columns: Vec<Column>,
}

impl Schema {
    pub fn new(columns: Vec<Column>) -> Result<Schema> {
        let mut seen = HashSet::with_capacity(columns.len());

        for column in &columns {
            if column.name.is_empty() {
                return Err(Error::InvalidInput("empty column name".to_owned()));
            }
            if !seen.insert(column.name.as_str()) {
                return Err(Error::InvalidInput(format!(
                    "duplicate column name '{}'",
                    column.name
                )));
            }
        }

        Ok(Schema { columns })
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Position of the column called `name`
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.name == name)
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|c| c.name.as_str())
    }
}

#[cfg(test)]
mod test {
    use super::{Column, ColumnType, Schema};
    use crate::error::Error;
    use crate::table::Value;

    #[test]
    fn rejects_duplicates() {
        let result = Schema::new(vec![
            Column::new("a", ColumnType::Integer),
            Column::new("a", ColumnType::Text),
        ]);

        assert!(matches!(result, Err(Error::InvalidInput(_))));
    }

    #[test]
    fn rejects_empty_names() {
        let result = Schema::new(vec![Column::new("", ColumnType::Integer)]);

        assert!(matches!(result, Err(Error::InvalidInput(_))));
    }

    #[test]
    fn lookup() {
        let schema = Schema::new(vec![
            Column::new("name", ColumnType::Text),
            Column::new("age", ColumnType::Integer),
        ])
        .unwrap();

        assert_eq!(schema.index_of("age"), Some(1));
        assert_eq!(schema.index_of("height"), None);
        assert_eq!(schema.names().collect::<Vec<_>>(), vec!["name", "age"]);
        assert!(schema.column("age").unwrap().is_numeric());
        assert!(!schema.column("name").unwrap().is_numeric());
    }

    #[test]
    fn coercion() {
        assert_eq!(
            ColumnType::Float.coerce(Value::Integer(2)),
            Some(Value::Float(2.))
        );
        assert_eq!(ColumnType::Integer.coerce(Value::Float(2.)), None);
        assert_eq!(ColumnType::Text.coerce(Value::Null), Some(Value::Null));
        assert!(!ColumnType::Boolean.is_numeric());
    }
}
