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

//! Coordinate normalization: real coordinates in an [`Envelope`] to and
//! from fixed-precision integer coordinates in `[0, width)` per
//! dimension.
//!
//! Free functions rather than a `Normalizer` type that carries a
//! back-reference to its owning engine (`spec.md` design note 9):
//! [`crate::curve::SpaceFillingCurve`] holds the envelope and scaling
//! factors and calls through to these.

use crate::envelope::Envelope;

/// Normalizes one real coordinate along `dim` into `[0, width)`, clamping
/// silently. `v == envelope.max(dim)` maps to `width - 1`, the closed
/// upper bound's tile, rather than overflowing to `width`.
#[must_use]
pub(crate) fn normalize_one(envelope: &Envelope, scaling_factor: f64, width: u64, dim: usize, v: f64) -> u64 {
    let clamped = v.clamp(envelope.min(dim), envelope.max(dim));
    if clamped == envelope.max(dim) {
        return width - 1;
    }
    ((clamped - envelope.min(dim)) * scaling_factor).floor() as u64
}

/// Normalizes a full coordinate, dimension by dimension.
#[must_use]
pub(crate) fn normalize_coord(
    envelope: &Envelope,
    scaling_factor: &[f64; 3],
    width: u64,
    coord: &[f64],
) -> [u64; 3] {
    let mut norm = [0u64; 3];
    for dim in 0..envelope.dimension() as usize {
        norm[dim] = normalize_one(envelope, scaling_factor[dim], width, dim, coord[dim]);
    }
    norm
}

/// Normalizes the *upper* bound of a query envelope.
///
/// Like [`normalize_one`], except when `v` lands exactly on an interior
/// tile boundary (not the envelope's own max) the result is nudged down
/// by one tile: a query edge that exactly touches the start of the next
/// tile should not pull that tile into the search box. Without this, a
/// query such as `[0, 1]` over an 8-tile `[0, 8]` envelope would select
/// tiles `{0, 1}` instead of the single tile `{0}` the value range `[0,
/// 1)` actually occupies.
#[must_use]
pub(crate) fn normalize_upper(envelope: &Envelope, scaling_factor: f64, width: u64, dim: usize, v: f64) -> u64 {
    let clamped = v.clamp(envelope.min(dim), envelope.max(dim));
    if clamped == envelope.max(dim) {
        return width - 1;
    }
    let scaled = (clamped - envelope.min(dim)) * scaling_factor;
    let norm = scaled.floor() as u64;
    if norm > 0 && scaled == norm as f64 {
        norm - 1
    } else {
        norm
    }
}

/// Tile center, in real coordinates, for a normalized coordinate at `level`.
#[must_use]
pub(crate) fn denormalize_coord(
    envelope: &Envelope,
    scaling_factor: &[f64; 3],
    norm: &[u64; 3],
    level: u8,
) -> [f64; 3] {
    let mut out = [0.0; 3];
    for dim in 0..envelope.dimension() as usize {
        let tile_width = envelope.width(dim) / (1u64 << level) as f64;
        let center = norm[dim] as f64 / scaling_factor[dim] + envelope.min(dim) + tile_width / 2.0;
        out[dim] = center.clamp(envelope.min(dim), envelope.max(dim));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env() -> Envelope {
        Envelope::new(&[0.0, 0.0], &[8.0, 8.0]).unwrap()
    }

    #[test]
    fn test_clamps_silently() {
        let e = env();
        assert_eq!(normalize_one(&e, 1.0, 8, 0, -1e9), 0);
        assert_eq!(normalize_one(&e, 1.0, 8, 0, 1e9), 7);
    }

    #[test]
    fn test_upper_bound_on_interior_grid_line_is_exclusive() {
        let e = env();
        assert_eq!(normalize_upper(&e, 1.0, 8, 0, 1.0), 0);
        assert_eq!(normalize_upper(&e, 1.0, 8, 0, 4.0), 3);
    }

    #[test]
    fn test_upper_bound_at_envelope_max_is_last_tile() {
        let e = env();
        assert_eq!(normalize_upper(&e, 1.0, 8, 0, 8.0), 7);
    }
}
