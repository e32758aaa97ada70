//! Quartile statistics used to fence off outliers.
//!
//! Everything here works on plain slices of floats; the table layer is responsible for pulling the
//! usable (non-null, non-NaN) values out of a column before handing them over.


pub mod univariate;

mod float;

pub use self::float::Float;
