//! Cumulative arc-length samples and the binary search they are queried with.

use alloc::vec::Vec;

use crate::NativeFloat;

/// Finds the index of the largest element of `values` that is not greater
/// than `target`, assuming `values` is sorted in non-decreasing order.
///
/// Returns `None` when `target` is smaller than every element (or the
/// slice is empty). Duplicate runs resolve to the highest index of the
/// run; targets beyond the last element clamp to the last index.
///
/// Implemented as an upper-bound bisection, `O(log n)`.
pub fn index_not_greater_than<T: PartialOrd>(values: &[T], target: &T) -> Option<usize> {
    // Invariant: values[..lo] <= target < values[hi..]
    let mut lo = 0;
    let mut hi = values.len();
    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        if values[mid] <= *target {
            lo = mid + 1;
        } else {
            hi = mid;
        }
    }
    lo.checked_sub(1)
}

/// Cumulative arc-length samples of one segment.
///
/// Entry `i` holds the summed chord length from the segment's start to the
/// point sampled at `t = i / resolution`; the sequence starts at zero,
/// never decreases, and ends at the segment's estimated total length.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ArcLengthTable {
    samples: Vec<NativeFloat>,
}

impl ArcLengthTable {
    /// Wraps a cumulative sample sequence produced by segment construction.
    pub(crate) fn from_samples(samples: Vec<NativeFloat>) -> Self {
        debug_assert!(samples.windows(2).all(|w| w[0] <= w[1]));
        ArcLengthTable { samples }
    }

    /// Number of samples (`resolution + 1` for a measured segment).
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// The cumulative length recorded at sample `index`.
    ///
    /// Panics if `index >= len()`; [`ArcLengthTable::locate`] only ever
    /// yields in-range indices.
    pub fn sample(&self, index: usize) -> NativeFloat {
        self.samples[index]
    }

    /// The total estimated length, i.e. the last sample (zero when empty).
    pub fn total(&self) -> NativeFloat {
        self.samples.last().copied().unwrap_or(0.0)
    }

    /// Index of the largest sample not exceeding `length`.
    pub fn locate(&self, length: NativeFloat) -> Option<usize> {
        index_not_greater_than(&self.samples, &length)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn search_on_duplicates_and_bounds() {
        let values = [0.0, 2.0, 2.0, 5.0, 9.0];
        assert_eq!(index_not_greater_than(&values, &0.0), Some(0));
        assert_eq!(index_not_greater_than(&values, &1.0), Some(0));
        // duplicates resolve to the highest index of the run
        assert_eq!(index_not_greater_than(&values, &2.0), Some(2));
        assert_eq!(index_not_greater_than(&values, &4.0), Some(2));
        assert_eq!(index_not_greater_than(&values, &9.0), Some(4));
        // beyond the last element clamps to the last index
        assert_eq!(index_not_greater_than(&values, &10.0), Some(4));
        assert_eq!(index_not_greater_than(&values, &-1.0), None);
    }

    #[test]
    fn search_degenerate_slices() {
        let empty: [f64; 0] = [];
        assert_eq!(index_not_greater_than(&empty, &1.0), None);
        assert_eq!(index_not_greater_than(&[3.0], &3.0), Some(0));
        assert_eq!(index_not_greater_than(&[3.0], &2.0), None);
    }

    #[test]
    fn search_is_generic_over_ord_like_types() {
        let values = [1u32, 4, 4, 7];
        assert_eq!(index_not_greater_than(&values, &5), Some(2));
    }

    #[test]
    fn table_accessors() {
        let table = ArcLengthTable::from_samples(vec![0.0, 1.0, 1.0, 4.0]);
        assert_eq!(table.len(), 4);
        assert_eq!(table.total(), 4.0);
        assert_eq!(table.sample(1), 1.0);
        assert_eq!(table.locate(1.0), Some(2));
        assert_eq!(table.locate(3.9), Some(2));
        assert_eq!(ArcLengthTable::default().total(), 0.0);
    }
}
