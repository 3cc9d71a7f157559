use crate::error::{InterpolationError, Result};

/// Monotonic collection of abscissas which answers which interval brackets a query point.
///
/// Orientation is decided once from the first and the last abscissa, so both ascending
/// and descending data is accepted as long as it is monotonic. Adjacent abscissas may be equal.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleIndex {
    x: Vec<f64>,
    ascending: bool,
}

impl SampleIndex {
    /// Creates index over already ordered abscissas.
    /// # Example
    /// ```
    /// use interp1d::SampleIndex;
    ///
    /// let samples = SampleIndex::new(vec![0.0, 1.0, 2.5, 4.0]).unwrap();
    /// assert_eq!(1, samples.locate(2.0));
    /// assert_eq!(2, samples.locate(4.0));
    /// ```
    /// # Errors
    /// Error is returned when less than 2 abscissas are given.
    /// ```
    /// use interp1d::SampleIndex;
    ///
    /// assert!(SampleIndex::new(vec![1.0]).is_err());
    /// ```
    pub fn new(x: Vec<f64>) -> Result<Self> {
        if x.len() < 2 {
            return Err(InterpolationError::NotEnoughSamples(x.len()));
        }
        let ascending = x[x.len() - 1] >= x[0];
        Ok(SampleIndex { x, ascending })
    }

    /// Returns index `j` of the interval `[x[j], x[j+1]]` containing `q`, where `0 <= j <= n-2`.
    ///
    /// Points outside of the sampled range are not rejected, the first or the last interval is returned for them.
    pub fn locate(&self, q: f64) -> usize {
        let size = self.x.len();
        if q == self.x[0] {
            return 0;
        }
        if q == self.x[size - 1] {
            return size - 2;
        }

        let mut jl = 0;
        let mut ju = size - 1;

        while ju - jl > 1 {
            let jm = (ju + jl) / 2;
            if (q >= self.x[jm]) == self.ascending {
                jl = jm;
            } else {
                ju = jm;
            }
        }
        jl
    }

    /// Same as [SampleIndex::locate], but checks interval `hint` and the one after it before bisecting.
    /// Sequences of increasing query points are located in constant time.
    pub fn hunt(&self, q: f64, hint: usize) -> usize {
        let size = self.x.len();
        if q == self.x[0] {
            return 0;
        }
        if q == self.x[size - 1] {
            return size - 2;
        }

        if hint < size - 1 && self.is_in_interval(hint, q) {
            return hint;
        }
        let next = hint.saturating_add(1);
        if next < size - 1 && self.is_in_interval(next, q) {
            return next;
        }
        self.locate(q)
    }

    /// Half-open interval check matching the side bisection settles on.
    fn is_in_interval(&self, interval_index: usize, q: f64) -> bool {
        let lower = self.x[interval_index];
        let upper = self.x[interval_index + 1];
        if self.ascending {
            lower <= q && q < upper
        } else {
            lower > q && q >= upper
        }
    }

    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    pub fn is_ascending(&self) -> bool {
        self.ascending
    }

    pub fn abscissas(&self) -> &[f64] {
        &self.x
    }

    pub fn min(&self) -> f64 {
        if self.ascending { self.x[0] } else { self.x[self.x.len() - 1] }
    }

    pub fn max(&self) -> f64 {
        if self.ascending { self.x[self.x.len() - 1] } else { self.x[0] }
    }

    /// Whether `q` lies inside of the sampled range. Queries outside of it are extrapolated.
    pub fn contains(&self, q: f64) -> bool {
        self.min() <= q && q <= self.max()
    }
}

impl std::ops::Index<usize> for SampleIndex {
    type Output = f64;

    fn index(&self, index: usize) -> &Self::Output {
        &self.x[index]
    }
}

/// Returns permutation which sorts `x` ascending, or `None` when `x` is already sorted.
pub(crate) fn sorting_permutation(x: &[f64]) -> Option<Vec<usize>> {
    if x.windows(2).all(|w| w[0] <= w[1]) {
        return None;
    }
    let mut order: Vec<usize> = (0..x.len()).collect();
    order.sort_by(|a, b| x[*a].total_cmp(&x[*b]));
    Some(order)
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, Rng, SeedableRng};

    use super::*;

    fn random_sorted(rng: &mut StdRng, size: usize) -> Vec<f64> {
        let mut x: Vec<f64> = (0..size).map(|_| rng.gen_range(-100.0..100.0)).collect();
        x.sort_by(|a, b| a.total_cmp(b));
        x
    }

    #[test]
    fn not_enough_samples() {
        assert_eq!(Err(InterpolationError::NotEnoughSamples(0)), SampleIndex::new(vec![]));
        assert_eq!(Err(InterpolationError::NotEnoughSamples(1)), SampleIndex::new(vec![3.0]));
        assert!(SampleIndex::new(vec![3.0, 4.0]).is_ok());
    }

    #[test]
    fn locate_ascending() {
        let samples = SampleIndex::new(vec![0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0]).unwrap();

        assert!(samples.is_ascending());
        assert_eq!(0, samples.locate(0.0));
        assert_eq!(0, samples.locate(0.3));
        assert_eq!(2, samples.locate(2.5));
        assert_eq!(3, samples.locate(3.0));
        assert_eq!(6, samples.locate(6.7));
        assert_eq!(8, samples.locate(8.6));
        assert_eq!(8, samples.locate(9.0));
    }

    #[test]
    fn locate_descending() {
        let samples = SampleIndex::new(vec![9.0, 8.0, 7.0, 6.0, 5.0, 4.0, 3.0, 2.0, 1.0, 0.0]).unwrap();

        assert!(!samples.is_ascending());
        assert_eq!(0, samples.locate(9.0));
        assert_eq!(8, samples.locate(0.0));
        assert_eq!(6, samples.locate(2.5));
        assert_eq!(2, samples.locate(6.7));
        assert_eq!(0.0, samples.min());
        assert_eq!(9.0, samples.max());
    }

    #[test]
    fn locate_out_of_range_returns_boundary_interval() {
        let samples = SampleIndex::new(vec![1.0, 2.0, 4.0, 8.0]).unwrap();

        assert_eq!(0, samples.locate(-10.0));
        assert_eq!(2, samples.locate(100.0));
        assert!(!samples.contains(-10.0));
        assert!(!samples.contains(100.0));
        assert!(samples.contains(8.0));
    }

    #[test]
    fn locate_with_duplicates() {
        let samples = SampleIndex::new(vec![0.0, 1.0, 1.0, 2.0, 3.0]).unwrap();

        let j = samples.locate(1.0);
        assert!(samples[j] <= 1.0 && 1.0 <= samples[j + 1]);
        assert_eq!(2, samples.locate(1.5));
    }

    #[test]
    fn locate_brackets_random_queries() {
        let mut rng = StdRng::seed_from_u64(7);

        for size in 2..40 {
            let x = random_sorted(&mut rng, size);
            let ascending = SampleIndex::new(x.clone()).unwrap();
            let descending = SampleIndex::new(x.iter().rev().copied().collect()).unwrap();

            for _ in 0..50 {
                let q = rng.gen_range(x[0]..=x[size - 1]);

                let j = ascending.locate(q);
                assert!(j <= size - 2);
                assert!(ascending[j] <= q && q <= ascending[j + 1]);

                let j = descending.locate(q);
                assert!(j <= size - 2);
                assert!(descending[j] >= q && q >= descending[j + 1]);
            }

            assert_eq!(0, ascending.locate(x[0]));
            assert_eq!(size - 2, ascending.locate(x[size - 1]));
            assert_eq!(0, descending.locate(x[size - 1]));
            assert_eq!(size - 2, descending.locate(x[0]));
        }
    }

    #[test]
    fn hunt_agrees_with_locate() {
        let mut rng = StdRng::seed_from_u64(11);
        let x = random_sorted(&mut rng, 25);
        let ascending = SampleIndex::new(x.clone()).unwrap();
        let descending = SampleIndex::new(x.iter().rev().copied().collect()).unwrap();

        let mut queries: Vec<f64> = (0..200).map(|_| rng.gen_range(-120.0..120.0)).collect();
        queries.extend_from_slice(&x);

        for samples in [&ascending, &descending] {
            for q in queries.iter() {
                let expected = samples.locate(*q);
                for hint in 0..samples.len() {
                    assert_eq!(expected, samples.hunt(*q, hint));
                }
            }
        }
    }

    #[test]
    fn hunt_with_repeated_abscissas() {
        let ascending = SampleIndex::new(vec![0.0, 1.0, 1.0, 1.0, 2.0]).unwrap();
        let descending = SampleIndex::new(vec![2.0, 1.0, 1.0, 1.0, 0.0]).unwrap();
        let queries = [-1.0, 0.0, 0.5, 1.0, 1.5, 2.0, 3.0];

        for samples in [&ascending, &descending] {
            for q in queries {
                let expected = samples.locate(q);
                for hint in 0..samples.len() {
                    assert_eq!(expected, samples.hunt(q, hint));
                }
            }
        }
        assert_eq!(3, ascending.locate(1.5));
        assert_eq!(3, ascending.hunt(1.0, 1));
    }

    #[test]
    fn hunt_with_hint_past_the_end() {
        let samples = SampleIndex::new(vec![0.0, 2.0, 4.0, 8.0]).unwrap();

        assert_eq!(2, samples.hunt(5.0, usize::MAX));
        assert_eq!(0, samples.hunt(1.0, usize::MAX));
        assert_eq!(1, samples.hunt(3.0, 17));
    }

    #[test]
    fn sorting_permutation_of_unsorted() {
        assert_eq!(None, sorting_permutation(&[0.0, 1.0, 1.0, 2.0]));
        assert_eq!(Some(vec![2, 0, 3, 1]), sorting_permutation(&[1.0, 3.0, 0.0, 2.0]));
    }
}
