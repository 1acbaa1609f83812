//! Configuration for a [crate::ByteStore].

use core::ops::{Bound, RangeBounds};

/// Growth multiplier applied when an append outgrows the reserved capacity.
pub const DEFAULT_GROWTH_FACTOR: f64 = 1.5;

/// Range of lengths a decoder will accept from a length prefix.
///
/// Decoding untrusted input can otherwise request arbitrarily large allocations.
///
/// # Examples
///
/// ```
/// use commonware_bytestore::RangeCfg;
///
/// let cfg = RangeCfg::from(..=1024);
/// assert!(cfg.contains(&500));
/// assert!(!cfg.contains(&2000));
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct RangeCfg<T: Copy + PartialOrd> {
    start: Bound<T>,
    end: Bound<T>,
}

impl<T: Copy + PartialOrd> RangeCfg<T> {
    /// Creates a new `RangeCfg` from any type implementing `RangeBounds<T>`.
    pub fn new(r: impl RangeBounds<T>) -> Self {
        Self {
            start: r.start_bound().cloned(),
            end: r.end_bound().cloned(),
        }
    }

    /// Returns true if the value is within this range.
    pub fn contains(&self, value: &T) -> bool {
        RangeBounds::contains(self, value)
    }
}

impl<T: Copy + PartialOrd> RangeBounds<T> for RangeCfg<T> {
    fn start_bound(&self) -> Bound<&T> {
        self.start.as_ref()
    }

    fn end_bound(&self) -> Bound<&T> {
        self.end.as_ref()
    }
}

macro_rules! impl_from_range {
    ($($range:ty),*) => {
        $(
            impl<T: Copy + PartialOrd> From<$range> for RangeCfg<T> {
                fn from(r: $range) -> Self {
                    Self::new(r)
                }
            }
        )*
    };
}

impl_from_range!(
    core::ops::Range<T>,
    core::ops::RangeInclusive<T>,
    core::ops::RangeFrom<T>,
    core::ops::RangeTo<T>,
    core::ops::RangeToInclusive<T>
);

impl<T: Copy + PartialOrd> From<core::ops::RangeFull> for RangeCfg<T> {
    fn from(_: core::ops::RangeFull) -> Self {
        Self::new(..)
    }
}

/// Configuration for a [crate::ByteStore].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Config {
    /// Bytes reserved when the store is created.
    pub initial_capacity: usize,

    /// Multiplier used for geometric growth. Values below `1.0` are treated as `1.0`.
    pub growth_factor: f64,

    /// Lengths accepted from decoded length prefixes.
    pub max_len: RangeCfg<usize>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            initial_capacity: 0,
            growth_factor: DEFAULT_GROWTH_FACTOR,
            max_len: (..).into(),
        }
    }
}

impl Config {
    /// Capacity to reserve so that `required` bytes fit, growing geometrically.
    pub(crate) fn grow_to(&self, required: usize) -> usize {
        let factor = self.growth_factor.max(1.0);
        let grown = (required as f64 * factor) as usize;
        grown.max(required)
    }
}
