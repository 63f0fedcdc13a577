//
// Copyright 2020, Gobsmacked Labs, LLC.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! An immutable axis-aligned box of 1, 2, or 3 dimensions.

use crate::error::{Error, Result};

/// Axis-aligned box with `dimension` significant entries in `min`/`max`.
///
/// Only the first `dimension` entries of the backing arrays are
/// meaningful; the rest are zero-filled and never read.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Envelope {
    dimension: u8,
    min: [f64; 3],
    max: [f64; 3],
}

impl Envelope {
    /// Constructs an envelope from parallel min/max slices.
    ///
    /// Fails if `min.len() != max.len()`, the shared length is not in
    /// `1..=3`, or any `max[dim] < min[dim]`.
    pub fn new(min: &[f64], max: &[f64]) -> Result<Self> {
        if min.len() != max.len() {
            return Err(Error::InvalidArgument(format!(
                "min has {} entries but max has {}",
                min.len(),
                max.len()
            )));
        }
        let dimension = min.len();
        if dimension == 0 || dimension > 3 {
            return Err(Error::InvalidArgument(format!(
                "dimension must be 1..=3, got {}",
                dimension
            )));
        }
        let mut m = [0.0; 3];
        let mut x = [0.0; 3];
        for dim in 0..dimension {
            if max[dim] < min[dim] {
                return Err(Error::InvalidArgument(format!(
                    "max[{}] ({}) < min[{}] ({})",
                    dim, max[dim], dim, min[dim]
                )));
            }
            m[dim] = min[dim];
            x[dim] = max[dim];
        }
        Ok(Envelope {
            dimension: dimension as u8,
            min: m,
            max: x,
        })
    }

    /// A square/cube envelope: `[lo, hi]` repeated across `dimension` axes.
    pub fn cube(dimension: u8, lo: f64, hi: f64) -> Result<Self> {
        let mins = [lo; 3];
        let maxs = [hi; 3];
        Self::new(&mins[..dimension as usize], &maxs[..dimension as usize])
    }

    /// Number of dimensions, always in `1..=3`.
    #[must_use]
    pub fn dimension(&self) -> u8 {
        self.dimension
    }

    /// Lower bound along `dim`.
    #[must_use]
    pub fn min(&self, dim: usize) -> f64 {
        self.min[dim]
    }

    /// Upper bound along `dim`.
    #[must_use]
    pub fn max(&self, dim: usize) -> f64 {
        self.max[dim]
    }

    /// `max(dim) - min(dim)`.
    #[must_use]
    pub fn width(&self, dim: usize) -> f64 {
        self.max[dim] - self.min[dim]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_construct_valid() {
        let e = Envelope::new(&[0.0, 0.0], &[8.0, 8.0]).unwrap();
        assert_eq!(e.dimension(), 2);
        assert_eq!(e.width(0), 8.0);
        assert_eq!(e.width(1), 8.0);
    }

    #[test]
    fn test_rejects_four_dimensions() {
        assert!(Envelope::new(&[0.0; 4], &[1.0; 4]).is_err());
    }

    #[test]
    fn test_rejects_inverted_bounds() {
        assert!(Envelope::new(&[1.0], &[0.0]).is_err());
    }

    #[test]
    fn test_cube() {
        let e = Envelope::cube(3, -1.0, 1.0).unwrap();
        assert_eq!(e.dimension(), 3);
        assert_eq!(e.min(2), -1.0);
        assert_eq!(e.max(2), 1.0);
    }
}
