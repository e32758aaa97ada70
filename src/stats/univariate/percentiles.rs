use crate::stats::float::Float;
use cast::usize;
use std::cmp::Ordering;

/// A "view" into the percentiles of a set of values
///
/// The values are sorted once on construction, which makes every later percentile lookup `O(1)`.
#[derive(Clone, Debug)]
pub struct Percentiles<A>(Box<[A]>)
where
    A: Float;

impl<A> Percentiles<A>
where
    A: Float,
    usize: cast::From<A, Output = Result<usize, cast::Error>>,
{
    /// Sorts a copy of `values`, returns `None` if there are no values to rank
    ///
    /// The caller is expected to have dropped `NaN`s already; any that slip through compare as
    /// equal to everything and leave the ordering unspecified.
    ///
    /// - Time: `O(N log N) where N = length`
    /// - Memory: `O(length)`
    pub fn new(values: &[A]) -> Option<Percentiles<A>> {
        // NB This function assumes that there are no `NaN`s in the values
        fn cmp<T>(a: &T, b: &T) -> Ordering
        where
            T: PartialOrd,
        {
            match a.partial_cmp(b) {
                Some(o) => o,
                // Arbitrary way to handle NaNs that should never happen
                None => Ordering::Equal,
            }
        }

        if values.is_empty() {
            return None;
        }

        let mut v = values.to_vec().into_boxed_slice();
        v.sort_unstable_by(cmp);

        Some(Percentiles(v))
    }

    /// Number of ranked values
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always `false`, an empty `Percentiles` can't be constructed
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the percentile at `p`%
    ///
    /// The rank is `p / 100 * (n - 1)`; the result is linearly interpolated between the values at
    /// the floor and the ceiling of that rank.
    ///
    /// # Panics
    ///
    /// Panics if `p` is outside the closed `[0, 100]` range
    pub fn at(&self, p: A) -> A {
        let _0 = A::cast(0);
        let _100 = A::cast(100);

        assert!(p >= _0 && p <= _100);

        let len = self.0.len() - 1;

        if p == _100 {
            return self.0[len];
        }

        let rank = (p / _100) * A::cast(len);
        let integer = rank.floor();
        let fraction = rank - integer;
        let n = usize(integer).unwrap_or(0);
        let floor = self.0[n];

        if fraction == _0 {
            floor
        } else {
            let ceiling = self.0[n + 1];

            floor + (ceiling - floor) * fraction
        }
    }

    /// Returns the interquartile range
    pub fn iqr(&self) -> A {
        let (q1, _, q3) = self.quartiles();

        q3 - q1
    }

    /// Returns the 50th percentile
    pub fn median(&self) -> A {
        self.at(A::cast(50))
    }

    /// Returns the 25th, 50th and 75th percentiles
    pub fn quartiles(&self) -> (A, A, A) {
        (
            self.at(A::cast(25)),
            self.at(A::cast(50)),
            self.at(A::cast(75)),
        )
    }

    /// Smallest ranked value
    pub fn min(&self) -> A {
        self.0[0]
    }

    /// Largest ranked value
    pub fn max(&self) -> A {
        self.0[self.0.len() - 1]
    }
}

#[cfg(test)]
macro_rules! test {
    ($ty:ident) => {
        mod $ty {
            use approx::relative_eq;
            use quickcheck::quickcheck;
            use quickcheck::TestResult;

            use crate::stats::univariate::Percentiles;

            quickcheck! {
                fn bounded_by_extremes(size: u8, start: u8, p: u8) -> TestResult {
                    let size = size as usize;
                    let start = start as usize;
                    let p = (p % 101) as $ty;

                    if let Some(v) = crate::stats::test::vec::<$ty>(size, start) {
                        let percentiles = Percentiles::new(&v[start..]).unwrap();
                        let x = percentiles.at(p);

                        TestResult::from_bool(x >= percentiles.min() && x <= percentiles.max())
                    } else {
                        TestResult::discard()
                    }
                }
            }

            quickcheck! {
                fn monotonic(size: u8, start: u8) -> TestResult {
                    let size = size as usize;
                    let start = start as usize;

                    if let Some(v) = crate::stats::test::vec::<$ty>(size, start) {
                        let percentiles = Percentiles::new(&v[start..]).unwrap();
                        let (q1, q2, q3) = percentiles.quartiles();

                        TestResult::from_bool(q1 <= q2 && q2 <= q3 && percentiles.iqr() >= 0.)
                    } else {
                        TestResult::discard()
                    }
                }
            }

            quickcheck! {
                fn order_independent(size: u8, start: u8) -> TestResult {
                    let size = size as usize;
                    let start = start as usize;

                    if let Some(v) = crate::stats::test::vec::<$ty>(size, start) {
                        let slice = &v[start..];
                        let mut reversed = slice.to_vec();
                        reversed.reverse();

                        let a = Percentiles::new(slice).unwrap().quartiles();
                        let b = Percentiles::new(&reversed).unwrap().quartiles();

                        TestResult::from_bool(a == b)
                    } else {
                        TestResult::discard()
                    }
                }
            }

            #[test]
            fn interpolates_between_ranks() {
                let percentiles = Percentiles::<$ty>::new(&[1000., 2., 1., 3.]).unwrap();
                let (q1, q2, q3) = percentiles.quartiles();

                assert!(relative_eq!(q1, 1.75));
                assert!(relative_eq!(q2, 2.5));
                assert!(relative_eq!(q3, 252.25));
                assert!(relative_eq!(percentiles.iqr(), 250.5));
            }

            #[test]
            fn exact_ranks() {
                let percentiles = Percentiles::<$ty>::new(&[1., 2., 3., 4., 5.]).unwrap();

                assert_eq!(percentiles.quartiles(), (2., 3., 4.));
                assert_eq!(percentiles.at(0.), 1.);
                assert_eq!(percentiles.at(100.), 5.);
            }

            #[test]
            fn single_value() {
                let percentiles = Percentiles::<$ty>::new(&[7.]).unwrap();

                assert_eq!(percentiles.quartiles(), (7., 7., 7.));
                assert_eq!(percentiles.iqr(), 0.);
            }

            #[test]
            fn empty() {
                assert!(Percentiles::<$ty>::new(&[]).is_none());
            }

            #[test]
            #[should_panic]
            fn out_of_range() {
                Percentiles::<$ty>::new(&[1., 2.]).unwrap().at(101.);
            }
        }
    };
}
