//! Univariate analysis

mod percentiles;

pub mod outliers;

pub use self::percentiles::Percentiles;
