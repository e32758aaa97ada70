use csv::Error as CsvError;
use serde_json::Error as SerdeError;
use std::error::Error as StdError;
use std::fmt;
use std::io;
use std::path::PathBuf;

#[allow(clippy::enum_variant_names)]
#[derive(Debug)]
pub enum Error {
    /// A file could not be created, opened or written
    AccessError { path: PathBuf, inner: io::Error },
    /// The JSON summary could not be serialized
    SerdeError { path: PathBuf, inner: SerdeError },
    /// Reading a CSV source or writing the outlier file failed
    CsvError(CsvError),
    /// The table (or the schema it was built from) is malformed
    InvalidInput(String),
}
impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::AccessError { path, inner } => {
                write!(f, "Failed to access file {:?}: {}", path, inner)
            }
            Error::SerdeError { path, inner } => write!(
                f,
                "Failed to read or write file {:?} due to serialization error: {}",
                path, inner
            ),
            Error::CsvError(inner) => write!(f, "CSV error: {}", inner),
            Error::InvalidInput(reason) => write!(f, "Invalid table: {}", reason),
        }
    }
}
impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Error::AccessError { inner, .. } => Some(inner),
            Error::SerdeError { inner, .. } => Some(inner),
            Error::CsvError(inner) => Some(inner),
            Error::InvalidInput(_) => None,
        }
    }
}
impl From<CsvError> for Error {
    fn from(other: CsvError) -> Error {
        Error::CsvError(other)
    }
}

pub type Result<T> = ::std::result::Result<T, Error>;
