use serde::Serialize;
use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::error::{Error, Result};

/// Creates (or truncates) the file at `path`
pub fn create(path: &Path) -> Result<File> {
    File::create(path).map_err(|inner| Error::AccessError {
        inner,
        path: path.to_owned(),
    })
}

/// Opens the file at `path` for reading
pub fn open(path: &Path) -> Result<File> {
    File::open(path).map_err(|inner| Error::AccessError {
        inner,
        path: path.to_owned(),
    })
}

/// Serializes `data` as pretty JSON into `path`, overwriting whatever was there
pub fn save<D>(data: &D, path: &Path) -> Result<()>
where
    D: Serialize,
{
    let buf = serde_json::to_string_pretty(&data).map_err(|inner| Error::SerdeError {
        inner,
        path: path.to_owned(),
    })?;
    save_string(&buf, path)
}

pub fn save_string(data: &str, path: &Path) -> Result<()> {
    let mut file = create(path)?;
    file.write_all(data.as_bytes())
        .map_err(|inner| Error::AccessError {
            inner,
            path: path.to_owned(),
        })?;

    Ok(())
}
