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

//! `SpaceFillingCurve`: the engine. Immutable after construction,
//! `Send + Sync`, parameterized by a starting `RuleId` into its
//! `RuleTable` rather than by subclassing (`spec.md` design note 9).

use crate::codec;
use crate::envelope::Envelope;
use crate::error::{Error, Result};
use crate::interval::LongRange;
use crate::normalize;
use crate::range_search;
use crate::rule::{RuleId, RuleTable};
use crate::search_envelope::SearchEnvelope;

/// An immutable space-filling curve index core over up to 3 dimensions.
///
/// Thread-safe for unbounded concurrent reads: every field is plain
/// owned data with no interior mutability.
#[derive(Debug, Clone)]
pub struct SpaceFillingCurve {
    envelope: Envelope,
    max_level: u8,
    rule_table: RuleTable,
    width: u64,
    value_width: u64,
    scaling_factor: [f64; 3],
    initial_norm_mask: u64,
}

impl SpaceFillingCurve {
    /// Builds an engine over `envelope` with `max_level` levels of
    /// recursion, driven by `rule_table`.
    ///
    /// Fails if `max_level < 1`, `rule_table`'s dimension does not match
    /// `envelope`'s, `max_level * dimension >= 64` (keys must fit a
    /// `u64`), or `rule_table` fails validation (`spec.md` 7).
    pub fn new(envelope: Envelope, max_level: u8, rule_table: RuleTable) -> Result<Self> {
        if max_level < 1 {
            return Err(Error::InvalidArgument(
                "max_level must be at least 1".to_string(),
            ));
        }
        let dimension = envelope.dimension();
        if rule_table.dimension() != dimension {
            return Err(Error::InvalidArgument(format!(
                "rule table dimension {} does not match envelope dimension {}",
                rule_table.dimension(),
                dimension
            )));
        }
        let ld = u32::from(max_level) * u32::from(dimension);
        if ld >= 64 {
            return Err(Error::InvalidArgument(format!(
                "max_level ({}) * dimension ({}) = {} must be < 64",
                max_level, dimension, ld
            )));
        }
        rule_table.validate()?;

        let width = 1u64 << max_level;
        let value_width = 1u64 << ld;

        let mut scaling_factor = [0.0; 3];
        for dim in 0..dimension as usize {
            scaling_factor[dim] = width as f64 / envelope.width(dim);
        }

        let initial_norm_mask = (u64::from(1u8) << dimension) - 1;
        let initial_norm_mask = initial_norm_mask << ((u32::from(max_level) - 1) * u32::from(dimension));

        Ok(SpaceFillingCurve {
            envelope,
            max_level,
            rule_table,
            width,
            value_width,
            scaling_factor,
            initial_norm_mask,
        })
    }

    /// Maximum recursion depth.
    #[must_use]
    pub fn max_level(&self) -> u8 {
        self.max_level
    }

    /// `2^max_level`, the per-dimension discrete extent.
    #[must_use]
    pub fn width(&self) -> u64 {
        self.width
    }

    /// `2^(max_level * dimension)`, the exclusive upper bound of keys.
    #[must_use]
    pub fn value_width(&self) -> u64 {
        self.value_width
    }

    /// The envelope this engine was constructed over.
    #[must_use]
    pub fn range(&self) -> &Envelope {
        &self.envelope
    }

    /// Width of one tile along `dim` at `level`: `range().width(dim) / 2^level`.
    #[must_use]
    pub fn tile_width(&self, dim: usize, level: u8) -> f64 {
        self.envelope.width(dim) / (1u64 << level) as f64
    }

    /// The rule table driving this engine, for diagnostics.
    #[must_use]
    pub fn rule_table(&self) -> &RuleTable {
        &self.rule_table
    }

    pub(crate) fn dimension(&self) -> u8 {
        self.envelope.dimension()
    }

    pub(crate) fn root_rule(&self) -> RuleId {
        self.rule_table.root()
    }

    pub(crate) fn initial_norm_mask(&self) -> u64 {
        self.initial_norm_mask
    }

    /// Encodes `coord` at the finest level, `max_level`. Never fails.
    #[must_use]
    pub fn derived_value_for(&self, coord: &[f64]) -> u64 {
        let norm = self.normalize(coord);
        codec::derived_value_for(self, &norm, self.max_level)
    }

    /// Encodes `coord` at `level`, aligned to the coarser level's prefix.
    ///
    /// Fails with [`Error::InvalidLevel`] unless `1 <= level <= max_level`.
    pub fn derived_value_for_level(&self, coord: &[f64], level: u8) -> Result<u64> {
        self.check_level(level)?;
        let norm = self.normalize(coord);
        Ok(codec::derived_value_for(self, &norm, level))
    }

    /// Tile-center coordinate for `key` at `max_level`.
    #[must_use]
    pub fn center_point_for(&self, key: u64) -> [f64; 3] {
        self.center_point_for_level(key, self.max_level)
            .expect("max_level is always a valid level")
    }

    /// Tile-center coordinate for `key` at `level`.
    ///
    /// Fails with [`Error::InvalidLevel`] unless `1 <= level <= max_level`.
    pub fn center_point_for_level(&self, key: u64, level: u8) -> Result<[f64; 3]> {
        self.check_level(level)?;
        let norm = codec::normalized_coordinate_for(self, key, level);
        Ok(self.denormalize(&norm, level))
    }

    /// Minimal sorted, merged, disjoint list of key intervals covering
    /// every level-`max_level` tile that intersects `query`.
    #[must_use]
    pub fn tiles_intersecting(&self, query: &Envelope) -> Vec<LongRange> {
        let search = self.normalize_envelope(query);
        range_search::tiles_intersecting(self, &search)
    }

    pub(crate) fn full_extent(&self) -> SearchEnvelope {
        SearchEnvelope::cube(self.dimension(), 0, self.width)
    }

    fn check_level(&self, level: u8) -> Result<()> {
        if level < 1 || level > self.max_level {
            return Err(Error::InvalidLevel {
                level,
                max_level: self.max_level,
            });
        }
        Ok(())
    }

    fn normalize(&self, coord: &[f64]) -> [u64; 3] {
        normalize::normalize_coord(&self.envelope, &self.scaling_factor, self.width, coord)
    }

    fn denormalize(&self, norm: &[u64; 3], level: u8) -> [f64; 3] {
        normalize::denormalize_coord(&self.envelope, &self.scaling_factor, norm, level)
    }

    fn normalize_envelope(&self, query: &Envelope) -> SearchEnvelope {
        let dimension = self.dimension();
        let mut min = [0u64; 3];
        let mut max = [0u64; 3];
        for dim in 0..dimension as usize {
            min[dim] = normalize::normalize_one(
                &self.envelope,
                self.scaling_factor[dim],
                self.width,
                dim,
                query.min(dim),
            );
            max[dim] = normalize::normalize_upper(
                &self.envelope,
                self.scaling_factor[dim],
                self.width,
                dim,
                query.max(dim),
            );
        }
        SearchEnvelope::from_arrays(dimension, &min, &max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::{hilbert2d, zorder};

    fn hilbert_curve(max_level: u8) -> SpaceFillingCurve {
        let envelope = Envelope::new(&[0.0, 0.0], &[8.0, 8.0]).unwrap();
        SpaceFillingCurve::new(envelope, max_level, hilbert2d::build()).unwrap()
    }

    #[test]
    fn test_rejects_max_level_zero() {
        let envelope = Envelope::new(&[0.0, 0.0], &[8.0, 8.0]).unwrap();
        assert!(SpaceFillingCurve::new(envelope, 0, hilbert2d::build()).is_err());
    }

    #[test]
    fn test_rejects_dimension_mismatch() {
        let envelope = Envelope::new(&[0.0, 0.0, 0.0], &[8.0, 8.0, 8.0]).unwrap();
        assert!(SpaceFillingCurve::new(envelope, 3, hilbert2d::build()).is_err());
    }

    #[test]
    fn test_rejects_overflowing_level_times_dimension() {
        let envelope = Envelope::new(&[0.0, 0.0, 0.0], &[8.0, 8.0, 8.0]).unwrap();
        assert!(SpaceFillingCurve::new(envelope, 22, zorder::build(3)).is_err());
        assert!(SpaceFillingCurve::new(envelope, 21, zorder::build(3)).is_ok());
    }

    // S1 -- origin encode.
    #[test]
    fn test_scenario_origin_encodes_to_zero() {
        let curve = hilbert_curve(3);
        assert_eq!(curve.derived_value_for(&[0.0, 0.0]), 0);
        let center = curve.center_point_for(0);
        assert_eq!(center, [0.5, 0.5]);
    }

    // S2 -- opposite corner, and clamping of wildly out-of-range input.
    #[test]
    fn test_scenario_opposite_corner_and_clamping() {
        let curve = hilbert_curve(3);
        assert_eq!(curve.derived_value_for(&[8.0, 0.0]), 63);
        assert_eq!(
            curve.derived_value_for(&[1e9, -1e9]),
            curve.derived_value_for(&[8.0, 0.0])
        );
    }

    // S3 -- prefix property, top 2 bits.
    #[test]
    fn test_scenario_prefix() {
        let curve = hilbert_curve(3);
        let p = [3.1, 5.9];
        let full = curve.derived_value_for_level(&p, 3).unwrap();
        let coarse = curve.derived_value_for_level(&p, 1).unwrap();
        assert_eq!(coarse, (full >> 4) << 4);
    }

    // S4 -- single-tile query.
    #[test]
    fn test_scenario_single_tile_query() {
        let curve = hilbert_curve(3);
        let query = Envelope::new(&[3.0, 3.0], &[4.0, 4.0]).unwrap();
        let ranges = curve.tiles_intersecting(&query);
        let k = curve.derived_value_for(&[3.5, 3.5]);
        assert_eq!(ranges, vec![LongRange::new(k, k)]);
    }

    // S5 -- full-range query.
    #[test]
    fn test_scenario_full_range_query() {
        let curve = hilbert_curve(3);
        let query = Envelope::new(&[0.0, 0.0], &[8.0, 8.0]).unwrap();
        let ranges = curve.tiles_intersecting(&query);
        assert_eq!(ranges, vec![LongRange::new(0, 63)]);
    }

    // S6 -- thin query pruning.
    #[test]
    fn test_scenario_thin_query_pruning() {
        let curve = hilbert_curve(3);
        let query = Envelope::new(&[0.0, 0.0], &[1.0, 8.0]).unwrap();
        let ranges = curve.tiles_intersecting(&query);

        let total: u64 = ranges.iter().map(|r| r.max() - r.min() + 1).sum();
        assert_eq!(total, 8);
        assert!(ranges.len() <= 4);

        for i in 0..8 {
            let y = i as f64 + 0.5;
            let k = curve.derived_value_for(&[0.5, y]);
            assert!(ranges.iter().any(|r| r.min() <= k && k <= r.max()));
        }
    }

    #[test]
    fn test_intervals_are_sorted_disjoint_and_coalesced() {
        let curve = hilbert_curve(3);
        let query = Envelope::new(&[1.0, 1.0], &[6.0, 3.0]).unwrap();
        let ranges = curve.tiles_intersecting(&query);

        for w in ranges.windows(2) {
            assert!(w[0].max() < w[1].min());
            assert!(w[1].min() > w[0].max() + 1, "adjacent intervals should have been coalesced");
        }
    }
}
