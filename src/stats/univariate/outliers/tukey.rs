//! Tukey's method
//!
//! The original method uses two "fences" to classify the data. All the observations "inside" the
//! fences are considered "normal", and the rest are considered outliers.
//!
//! The fences are computed from the quartiles of the values, according to the following formula:
//!
//! ``` ignore
//! // q1, q3 are the first and third quartiles
//! let iqr = q3 - q1;  // The interquartile range
//! let (f1, f2) = (q1 - 1.5 * iqr, q3 + 1.5 * iqr);  // the "fences"
//!
//! let is_outlier = |x| x < f1 || x > f2;
//! ```
//!
//! Points sitting exactly on a fence are *not* outliers.
//!
//! Two extra outer fences grade the severity of an outlier; they never change whether a point
//! is one:
//!
//! ``` ignore
//! let (f3, f4) = (q1 - 3 * iqr, q3 + 3 * iqr);  // the outer "fences"
//! ```
//!
//! ``` ignore
//!          LOW-ish                NORMAL-ish                 HIGH-ish
//!         x   |       +    |  o o  o    o   o o  o  |        +   |   x
//!             f3           f1                       f2           f4
//!
//! Legend:
//! o: "normal" data (not an outlier)
//! +: "mild" outlier
//! x: "severe" outlier
//! ```

use crate::stats::float::Float;
use crate::stats::univariate::Percentiles;

use self::Label::*;

/// Quartiles of a column and the fences derived from them
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Fences<A>
where
    A: Float,
{
    /// 25th percentile
    pub q1: A,
    /// 75th percentile
    pub q3: A,
    /// `q3 - q1`
    pub iqr: A,
    /// `q1 - 1.5 * iqr`; anything strictly below is an outlier
    pub lower: A,
    /// `q3 + 1.5 * iqr`; anything strictly above is an outlier
    pub upper: A,
    /// `q1 - 3 * iqr`
    pub lower_severe: A,
    /// `q3 + 3 * iqr`
    pub upper_severe: A,
}

impl<A> Fences<A>
where
    A: Float,
    usize: cast::From<A, Output = Result<usize, cast::Error>>,
{
    /// Computes the fences from the quartiles of `percentiles`
    pub fn new(percentiles: &Percentiles<A>) -> Fences<A> {
        let (q1, _, q3) = percentiles.quartiles();
        let iqr = q3 - q1;

        // Mild
        let k_m = A::cast(1.5_f32);
        // Severe
        let k_s = A::cast(3);

        Fences {
            q1,
            q3,
            iqr,
            lower: q1 - k_m * iqr,
            upper: q3 + k_m * iqr,
            lower_severe: q1 - k_s * iqr,
            upper_severe: q3 + k_s * iqr,
        }
    }
}

impl<A> Fences<A>
where
    A: Float,
{
    /// Classifies a single data point
    ///
    /// `NaN` compares false against every fence and is therefore never an outlier.
    #[allow(clippy::similar_names)]
    pub fn label(&self, x: A) -> Label {
        if x < self.lower_severe {
            LowSevere
        } else if x > self.upper_severe {
            HighSevere
        } else if x < self.lower {
            LowMild
        } else if x > self.upper {
            HighMild
        } else {
            NotAnOutlier
        }
    }

    /// Shorthand for `self.label(x).is_outlier()`
    pub fn excludes(&self, x: A) -> bool {
        x < self.lower || x > self.upper
    }
}

/// Classifies `values`, returns the fences or `None` when there is nothing to rank
///
/// - Time: `O(N log N) where N = length`
pub fn classify<A>(values: &[A]) -> Option<Fences<A>>
where
    A: Float,
    usize: cast::From<A, Output = Result<usize, cast::Error>>,
{
    Percentiles::new(values).map(|percentiles| Fences::new(&percentiles))
}

/// Labels used to classify outliers
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub enum Label {
    /// A "mild" outlier in the "high" spectrum
    HighMild,
    /// A "severe" outlier in the "high" spectrum
    HighSevere,
    /// A "mild" outlier in the "low" spectrum
    LowMild,
    /// A "severe" outlier in the "low" spectrum
    LowSevere,
    /// A normal data point
    NotAnOutlier,
}

impl Label {
    /// Checks if the data point has an "unusually" high value
    pub fn is_high(&self) -> bool {
        matches!(*self, HighMild | HighSevere)
    }

    /// Checks if the data point is labeled as a "mild" outlier
    pub fn is_mild(&self) -> bool {
        matches!(*self, HighMild | LowMild)
    }

    /// Checks if the data point has an "unusually" low value
    pub fn is_low(&self) -> bool {
        matches!(*self, LowMild | LowSevere)
    }

    /// Checks if the data point is labeled as an outlier
    pub fn is_outlier(&self) -> bool {
        !matches!(*self, NotAnOutlier)
    }

    /// Checks if the data point is labeled as a "severe" outlier
    pub fn is_severe(&self) -> bool {
        matches!(*self, HighSevere | LowSevere)
    }
}

#[cfg(test)]
macro_rules! test {
    ($ty:ident) => {
        mod $ty {
            use quickcheck::quickcheck;
            use quickcheck::TestResult;

            use super::super::{classify, Label};

            // `excludes` and `label` must agree on every point
            quickcheck! {
                fn label_agrees_with_fences(size: u8, start: u8) -> TestResult {
                    let size = size as usize;
                    let start = start as usize;

                    if let Some(v) = crate::stats::test::vec::<$ty>(size, start) {
                        let slice = &v[start..];
                        let fences = classify(slice).unwrap();

                        TestResult::from_bool(
                            slice
                                .iter()
                                .all(|&x| fences.label(x).is_outlier() == fences.excludes(x)),
                        )
                    } else {
                        TestResult::discard()
                    }
                }
            }

            #[test]
            fn one_extreme_value() {
                let fences = classify::<$ty>(&[1., 2., 3., 1000.]).unwrap();

                assert_eq!(fences.q1, 1.75);
                assert_eq!(fences.q3, 252.25);
                assert_eq!(fences.lower, -374.);
                assert_eq!(fences.upper, 628.);
                assert_eq!(fences.label(1000.), Label::HighMild);
                assert_eq!(fences.label(3.), Label::NotAnOutlier);
            }

            #[test]
            fn fences_are_inclusive() {
                let fences = classify::<$ty>(&[1., 2., 3., 4., 5.]).unwrap();

                // q1 = 2, q3 = 4, iqr = 2
                assert_eq!((fences.lower, fences.upper), (-1., 7.));
                assert!(!fences.excludes(-1.));
                assert!(!fences.excludes(7.));
                assert_eq!(fences.label(7.5), Label::HighMild);
                assert_eq!(fences.label(11.), Label::HighSevere);
                assert_eq!(fences.label(-1.5), Label::LowMild);
                assert_eq!(fences.label(-5.), Label::LowSevere);
            }

            #[test]
            fn zero_variance() {
                let fences = classify::<$ty>(&[5., 5., 5., 5., 6.]).unwrap();

                assert_eq!(fences.iqr, 0.);
                assert!(fences.excludes(6.));
                assert!(fences.label(6.).is_severe());
                assert!(!fences.excludes(5.));
            }

            #[test]
            fn nan_is_never_an_outlier() {
                let fences = classify::<$ty>(&[1., 2., 3.]).unwrap();

                assert!(!fences.label(<$ty>::NAN).is_outlier());
            }

            #[test]
            fn nothing_to_rank() {
                assert!(classify::<$ty>(&[]).is_none());
            }
        }
    };
}

#[cfg(test)]
mod test {
    test!(f32);
    test!(f64);
}
