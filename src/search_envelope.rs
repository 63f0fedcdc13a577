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

//! `SearchEnvelope`: an n-dimensional integer box in normalized space,
//! closed on both ends, used by `tiles_intersecting`'s recursive descent.

/// Integer box in normalized `[0, width]` space, closed on both ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchEnvelope {
    dimension: u8,
    min: [u64; 3],
    max: [u64; 3],
}

impl SearchEnvelope {
    /// Builds a box from explicit per-dimension bounds.
    #[must_use]
    pub fn from_arrays(dimension: u8, min: &[u64], max: &[u64]) -> Self {
        let mut m = [0u64; 3];
        let mut x = [0u64; 3];
        for dim in 0..dimension as usize {
            m[dim] = min[dim];
            x[dim] = max[dim];
        }
        SearchEnvelope {
            dimension,
            min: m,
            max: x,
        }
    }

    /// A uniform cube `[lo, hi]^dimension`.
    #[must_use]
    pub fn cube(dimension: u8, lo: u64, hi: u64) -> Self {
        Self::from_arrays(dimension, &[lo; 3], &[hi; 3])
    }

    /// Number of dimensions.
    #[must_use]
    pub fn dimension(&self) -> u8 {
        self.dimension
    }

    /// Lower bound along `dim`.
    #[must_use]
    pub fn min(&self, dim: usize) -> u64 {
        self.min[dim]
    }

    /// Upper bound along `dim`.
    #[must_use]
    pub fn max(&self, dim: usize) -> u64 {
        self.max[dim]
    }

    /// Whether `point` falls within this box on every axis.
    #[must_use]
    pub fn contains(&self, point: &[u64]) -> bool {
        (0..self.dimension as usize).all(|dim| point[dim] >= self.min[dim] && point[dim] <= self.max[dim])
    }

    /// Whether `self` and `other` overlap on every axis.
    #[must_use]
    pub fn intersects(&self, other: &SearchEnvelope) -> bool {
        (0..self.dimension as usize)
            .all(|dim| self.min[dim] <= other.max[dim] && other.min[dim] <= self.max[dim])
    }

    /// The sub-box selected by a `dimension`-bit mask (bit `k` set means
    /// the upper half of axis `k`), using integer halving.
    #[must_use]
    pub fn quadrant(&self, bits: u8) -> SearchEnvelope {
        let mut m = self.min;
        let mut x = self.max;
        for dim in 0..self.dimension as usize {
            let extent = (self.max[dim] - self.min[dim]) / 2;
            if (bits >> (self.dimension as usize - 1 - dim)) & 1 == 1 {
                m[dim] = self.min[dim] + extent;
            } else {
                x[dim] = self.min[dim] + extent;
            }
        }
        SearchEnvelope {
            dimension: self.dimension,
            min: m,
            max: x,
        }
    }
}
