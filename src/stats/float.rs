//! Float trait

use cast::From;
use num_traits::float;
use std::fmt;

/// Floating point type the quartile statistics are computed over.
///
/// On top of `num_traits::float::Float` this adds lossless casting from the small constants the
/// fences are built from (`1.5`, `3`, `100`) and `Debug` so fences can be logged.
pub trait Float:
    float::Float + From<usize, Output = Self> + From<f32, Output = Self> + fmt::Debug
{
}

impl Float for f32 {}
impl Float for f64 {}
