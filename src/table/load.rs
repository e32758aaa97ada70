//! Loading tables from CSV
//!
//! Column types are inferred once, over every row, before any value is converted:
//!
//! - every field parses as an `i64` and none is empty: `Integer`
//! - every non-empty field parses as an `f64`, or the column is entirely empty: `Float`
//! - every non-empty field is `true`/`false` (any case): `Boolean`
//! - anything else: `Text`
//!
//! Empty fields become `Null` in typed columns and stay empty strings in text columns.

use csv::{ReaderBuilder, StringRecord};
use std::io;
use std::path::Path;

use super::{Column, ColumnType, Schema, Table, Value};
use crate::error::Result;
use crate::fs;

#[derive(Clone, Copy)]
struct TypeCandidate {
    integer: bool,
    float: bool,
    boolean: bool,
    has_empty: bool,
    has_values: bool,
}

impl TypeCandidate {
    fn new() -> TypeCandidate {
        TypeCandidate {
            integer: true,
            float: true,
            boolean: true,
            has_empty: false,
            has_values: false,
        }
    }

    fn update(&mut self, field: &str) {
        if field.is_empty() {
            self.has_empty = true;
            return;
        }

        self.has_values = true;
        if self.integer && field.parse::<i64>().is_err() {
            self.integer = false;
        }
        if self.float && field.parse::<f64>().is_err() {
            self.float = false;
        }
        if self.boolean && parse_bool(field).is_none() {
            self.boolean = false;
        }
    }

    fn decide(&self) -> ColumnType {
        if !self.has_values {
            ColumnType::Float
        } else if self.integer && !self.has_empty {
            ColumnType::Integer
        } else if self.float {
            ColumnType::Float
        } else if self.boolean {
            ColumnType::Boolean
        } else {
            ColumnType::Text
        }
    }
}

fn parse_bool(field: &str) -> Option<bool> {
    if field.eq_ignore_ascii_case("true") {
        Some(true)
    } else if field.eq_ignore_ascii_case("false") {
        Some(false)
    } else {
        None
    }
}

// Fields were all checked by `TypeCandidate::update`, so the fallbacks below are unreachable.
fn convert(field: &str, ty: ColumnType) -> Value {
    if field.is_empty() && ty != ColumnType::Text {
        return Value::Null;
    }

    match ty {
        ColumnType::Integer => field.parse().map_or(Value::Null, Value::Integer),
        ColumnType::Float => field.parse().map_or(Value::Null, Value::Float),
        ColumnType::Boolean => parse_bool(field).map_or(Value::Null, Value::Boolean),
        ColumnType::Text => Value::Text(field.to_owned()),
    }
}

/// Blank headers become `Unnamed: {position}`, repeated ones get a `.{n}` suffix.
fn column_names(headers: &StringRecord) -> Vec<String> {
    let mut names: Vec<String> = Vec::with_capacity(headers.len());

    for (position, header) in headers.iter().enumerate() {
        let base = if header.is_empty() {
            format!("Unnamed: {}", position)
        } else {
            header.to_owned()
        };

        let mut name = base.clone();
        let mut n = 0;
        while names.contains(&name) {
            n += 1;
            name = format!("{}.{}", base, n);
        }
        names.push(name);
    }

    names
}

impl Table {
    /// Reads a headed CSV document into a table, inferring the column types
    pub fn from_csv_reader<R>(reader: R) -> Result<Table>
    where
        R: io::Read,
    {
        let mut reader = ReaderBuilder::new().has_headers(true).from_reader(reader);
        let names = column_names(reader.headers()?);
        let records = reader.records().collect::<::std::result::Result<Vec<_>, _>>()?;

        let mut candidates = vec![TypeCandidate::new(); names.len()];
        for record in &records {
            for (candidate, field) in candidates.iter_mut().zip(record.iter()) {
                candidate.update(field);
            }
        }

        let types: Vec<ColumnType> = candidates.iter().map(TypeCandidate::decide).collect();
        debug!(
            "Inferred column types {:?} over {} rows",
            names.iter().zip(&types).collect::<Vec<_>>(),
            records.len()
        );

        let rows = records
            .iter()
            .map(|record| {
                record
                    .iter()
                    .zip(&types)
                    .map(|(field, &ty)| convert(field, ty))
                    .collect()
            })
            .collect();
        let schema = Schema::new(
            names
                .into_iter()
                .zip(types)
                .map(|(name, ty)| Column::new(name, ty))
                .collect(),
        )?;

        Table::new(schema, rows)
    }

    /// Reads the CSV file at `path`, see [`Table::from_csv_reader`]
    pub fn from_csv_path<P>(path: P) -> Result<Table>
    where
        P: AsRef<Path>,
    {
        let file = fs::open(path.as_ref())?;
        Table::from_csv_reader(io::BufReader::new(file))
    }
}

#[cfg(test)]
mod test {
    use crate::error::Error;
    use crate::table::{ColumnType, Table, Value};

    fn load(data: &str) -> Table {
        Table::from_csv_reader(data.as_bytes()).unwrap()
    }

    #[test]
    fn infers_types() {
        let table = load("id,score,ok,name\n1,2.5,true,a\n2,3,False,b\n3,-1e3,TRUE,c\n");
        let types: Vec<_> = table.columns().iter().map(|c| c.ty).collect();

        assert_eq!(
            types,
            vec![
                ColumnType::Integer,
                ColumnType::Float,
                ColumnType::Boolean,
                ColumnType::Text
            ]
        );
        assert_eq!(table.get(1, "score"), Some(&Value::Float(3.)));
        assert_eq!(table.get(2, "score"), Some(&Value::Float(-1000.)));
        assert_eq!(table.get(1, "ok"), Some(&Value::Boolean(false)));
    }

    #[test]
    fn integers_with_gaps_are_floats() {
        let table = load("a,b\n1,x\n,\n3,z\n");

        assert_eq!(table.columns()[0].ty, ColumnType::Float);
        assert_eq!(table.get(1, "a"), Some(&Value::Null));
        assert_eq!(table.get(2, "a"), Some(&Value::Float(3.)));
        assert_eq!(table.columns()[1].ty, ColumnType::Text);
        assert_eq!(table.get(1, "b"), Some(&Value::from("")));
    }

    #[test]
    fn empty_column_is_float() {
        let table = load("a,b\n,1\n,2\n");

        assert_eq!(table.columns()[0].ty, ColumnType::Float);
        assert!(table.numeric_values("a").is_empty());
    }

    #[test]
    fn header_only() {
        let table = load("a,b\n");

        assert!(table.is_empty());
        assert_eq!(table.schema().len(), 2);
    }

    #[test]
    fn renames_blank_and_repeated_headers() {
        let table = load(",a,a\n1,2,3\n");

        assert_eq!(
            table.schema().names().collect::<Vec<_>>(),
            vec!["Unnamed: 0", "a", "a.1"]
        );
    }

    #[test]
    fn ragged_rows_are_rejected() {
        let result = Table::from_csv_reader("a,b\n1,2\n3\n".as_bytes());

        assert!(matches!(result, Err(Error::CsvError(_))));
    }

    #[test]
    fn missing_file() {
        let result = Table::from_csv_path("/nonexistent/dir/data.csv");

        assert!(matches!(result, Err(Error::AccessError { .. })));
    }
}
