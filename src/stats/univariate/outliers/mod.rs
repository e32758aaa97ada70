//! Classification of outliers
//!
//! WARNING: There's no formal/mathematical definition of what an outlier actually is. The only
//! classifier provided here is Tukey's, which is the one the filter applies to every numeric
//! column.

pub mod tukey;
