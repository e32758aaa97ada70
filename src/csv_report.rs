use crate::error::{Error, Result};
use crate::filter::OutlierRecord;
use crate::fs;
use crate::table::Schema;
use csv::Writer;
use std::io::Write;
use std::path::Path;

struct OutlierCsvWriter<W: Write> {
    writer: Writer<W>,
}
impl<W: Write> OutlierCsvWriter<W> {
    fn write_header(&mut self, schema: &Schema) -> Result<()> {
        // A record with no fields can't be told apart from a blank line
        if !schema.is_empty() {
            self.writer.write_record(schema.names())?;
        }
        Ok(())
    }

    fn write_records(&mut self, records: &[OutlierRecord]) -> Result<()> {
        for record in records {
            self.writer
                .write_record(record.row().values().iter().map(ToString::to_string))?;
        }
        Ok(())
    }

    fn finish(mut self) -> std::io::Result<()> {
        self.writer.flush()
    }
}

/// Writes the flagged rows to `path` as CSV: a header with every column of `schema`, then one
/// line per record with the full row. The header is written even when there are no records.
pub fn write_outliers(path: &Path, schema: &Schema, records: &[OutlierRecord]) -> Result<()> {
    let file = fs::create(path)?;
    let mut writer = OutlierCsvWriter {
        writer: Writer::from_writer(file),
    };
    writer.write_header(schema)?;
    writer.write_records(records)?;
    writer.finish().map_err(|inner| Error::AccessError {
        inner,
        path: path.to_owned(),
    })?;

    Ok(())
}

#[cfg(test)]
mod test {
    use std::fs;

    use super::write_outliers;
    use crate::error::Error;
    use crate::filter::detect;
    use crate::report::test::Recorder;
    use crate::table::{Column, ColumnType, Schema, Table, Value};

    fn table() -> Table {
        let schema = Schema::new(vec![
            Column::new("label", ColumnType::Text),
            Column::new("x", ColumnType::Float),
            Column::new("ok", ColumnType::Boolean),
        ])
        .unwrap();

        Table::new(
            schema,
            vec![
                vec!["a".into(), Value::Float(1.), true.into()],
                vec!["b".into(), Value::Float(2.), Value::Null],
                vec!["c".into(), Value::Float(3.), false.into()],
                vec!["quoted, \"d\"".into(), Value::Float(1000.), true.into()],
            ],
        )
        .unwrap()
    }

    #[test]
    fn writes_full_rows() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("outliers.csv");
        let table = table();
        let cleaned = detect(&table, &Recorder::default());

        write_outliers(&path, table.schema(), &cleaned.outliers).unwrap();

        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "label,x,ok\n\"quoted, \"\"d\"\"\",1000.0,True\n"
        );
    }

    #[test]
    fn header_without_records() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("outliers.csv");
        fs::write(&path, "stale content\n").unwrap();

        write_outliers(&path, table().schema(), &[]).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "label,x,ok\n");
    }

    #[test]
    fn unwritable_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("outliers.csv");

        let result = write_outliers(&path, table().schema(), &[]);

        assert!(matches!(result, Err(Error::AccessError { .. })));
    }
}
