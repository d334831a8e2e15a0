//! Coordinate sampling.
//!
//! Each run draws `n` points independently and uniformly from the cube
//! `[low, high]^3`, collecting them into a set. Exact repeats collapse into a
//! single entry, so the resulting set can be smaller than `n`. Nothing tops
//! the set back up: the emitted count is whatever survives deduplication.

use std::collections::HashSet;
use std::fmt;

use rand::Rng;
use rand::distributions::{Distribution, Uniform};

/// Upper bound on the capacity reserved ahead of sampling.
const MAX_PREALLOC: u64 = 1 << 20;

/// A point in integer 3-space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coordinate {
    pub x: u64,
    pub y: u64,
    pub z: u64,
}

impl Coordinate {
    pub fn new(x: u64, y: u64, z: u64) -> Self {
        Self { x, y, z }
    }

    /// True when every axis lies in `[low, high]`.
    pub fn within(&self, low: u64, high: u64) -> bool {
        [self.x, self.y, self.z]
            .iter()
            .all(|v| (low..=high).contains(v))
    }
}

/// Single-space separated axes, the line format of `input.txt`.
impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.x, self.y, self.z)
    }
}

/// Unordered, duplicate-free collection of sampled points.
pub type CoordinateSet = HashSet<Coordinate>;

/// Draw `n` coordinates with every axis uniform over `[low, high]`.
///
/// Exactly `n` draws are made. The returned set holds at most `n` entries.
///
/// # Panics
/// Panics if `low > high`; resolved configurations never produce that.
pub fn sample_coordinates<R: Rng + ?Sized>(
    n: u64,
    low: u64,
    high: u64,
    rng: &mut R,
) -> CoordinateSet {
    let axis = Uniform::new_inclusive(low, high);
    let mut set = CoordinateSet::with_capacity(n.min(MAX_PREALLOC) as usize);
    for _ in 0..n {
        let x = axis.sample(rng);
        let y = axis.sample(rng);
        let z = axis.sample(rng);
        set.insert(Coordinate::new(x, y, z));
    }
    set
}
