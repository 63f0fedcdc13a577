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

//! `LongRange`, a closed `[min, max]` key interval, and `IntervalList`,
//! the append-or-extend accumulator `tiles_intersecting` builds its
//! answer with.

/// A closed interval of keys, `min <= max`.
///
/// Mutable only via [`LongRange::expand_to_max`] with a strictly larger
/// bound, matching `spec.md`'s "sealed at the end of the search": the
/// accumulator below is the only place that ever calls it, and only on
/// the last element while a search is in progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LongRange {
    min: u64,
    max: u64,
}

impl LongRange {
    /// Builds `[min, max]`.
    ///
    /// # Panics
    ///
    /// Panics if `min > max`.
    #[must_use]
    pub fn new(min: u64, max: u64) -> Self {
        assert!(min <= max, "LongRange min ({}) > max ({})", min, max);
        LongRange { min, max }
    }

    /// The lower bound.
    #[must_use]
    pub fn min(&self) -> u64 {
        self.min
    }

    /// The upper bound.
    #[must_use]
    pub fn max(&self) -> u64 {
        self.max
    }

    /// Raises `max` to `new_max`.
    ///
    /// # Panics
    ///
    /// Panics unless `new_max > self.max`.
    pub fn expand_to_max(&mut self, new_max: u64) {
        assert!(
            new_max > self.max,
            "expand_to_max must strictly grow the range"
        );
        self.max = new_max;
    }
}

/// Ordered accumulator of key intervals that greedily coalesces adjacent
/// tiles as they arrive in increasing order.
#[derive(Debug, Default)]
pub(crate) struct IntervalList {
    ranges: Vec<LongRange>,
}

impl IntervalList {
    pub(crate) fn new() -> Self {
        IntervalList { ranges: Vec::new() }
    }

    /// Records `key` as a matched tile. Extends the last interval if
    /// `key` is adjacent to it, otherwise appends a new singleton
    /// interval. Callers must present keys in non-decreasing order.
    pub(crate) fn push_or_extend(&mut self, key: u64) {
        if let Some(last) = self.ranges.last_mut() {
            if last.max() + 1 == key {
                last.expand_to_max(key);
                return;
            }
        }
        self.ranges.push(LongRange::new(key, key));
    }

    pub(crate) fn into_vec(self) -> Vec<LongRange> {
        self.ranges
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coalesces_adjacent_keys() {
        let mut list = IntervalList::new();
        for key in [0u64, 1, 2, 5, 6, 9] {
            list.push_or_extend(key);
        }
        let ranges: Vec<(u64, u64)> = list.into_vec().iter().map(|r| (r.min(), r.max())).collect();
        assert_eq!(ranges, vec![(0, 2), (5, 6), (9, 9)]);
    }

    #[test]
    #[should_panic]
    fn test_expand_to_max_requires_growth() {
        let mut r = LongRange::new(0, 3);
        r.expand_to_max(3);
    }
}
