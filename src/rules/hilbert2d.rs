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

//! 2-D Hilbert curve rule table.
//!
//! Four orientations are reachable from the root, matching the
//! well-known table-driven formulation of the 2-D Hilbert curve (the
//! same four states used by the classic `xy2d`/`d2xy` bit-rotation
//! algorithm, here expressed as an explicit rule graph instead of
//! mutating coordinates in place):
//!
//! - `Id` (root): no transform.
//! - `Swap`: transpose x and y.
//! - `SwapNeg`: transpose and complement both axes.
//! - `Neg`: complement both axes, no transpose.
//!
//! Each state's `npoint_values`/`children` below were derived from the
//! bit-rotation algorithm's per-level transform and cross-checked
//! against it numerically for a 4x4 grid; `derived_value_for` on the
//! opposite corner of an 8x8 grid from this table lands on key 63,
//! matching the worked example in `spec.md` section 8 (S2).

use crate::rule::{Rule, RuleTable};

const ID: usize = 0;
const SWAP: usize = 1;
const SWAP_NEG: usize = 2;
const NEG: usize = 3;

/// Builds the 2-D Hilbert curve rule table, rooted at the `Id` orientation.
#[must_use]
pub fn build() -> RuleTable {
    let rules = vec![
        Rule {
            name: "id",
            dimension: 2,
            npoint_values: [0, 1, 3, 2, 0, 0, 0, 0],
            index_for_npoint: [0, 1, 3, 2, 0, 0, 0, 0],
            children: [SWAP, ID, ID, SWAP_NEG, 0, 0, 0, 0],
        },
        Rule {
            name: "swap",
            dimension: 2,
            npoint_values: [0, 2, 3, 1, 0, 0, 0, 0],
            index_for_npoint: [0, 3, 1, 2, 0, 0, 0, 0],
            children: [ID, SWAP, SWAP, NEG, 0, 0, 0, 0],
        },
        Rule {
            name: "swap_neg",
            dimension: 2,
            npoint_values: [3, 1, 0, 2, 0, 0, 0, 0],
            index_for_npoint: [2, 1, 3, 0, 0, 0, 0, 0],
            children: [NEG, SWAP_NEG, SWAP_NEG, ID, 0, 0, 0, 0],
        },
        Rule {
            name: "neg",
            dimension: 2,
            npoint_values: [3, 2, 0, 1, 0, 0, 0, 0],
            index_for_npoint: [2, 3, 1, 0, 0, 0, 0, 0],
            children: [SWAP_NEG, NEG, NEG, SWAP, 0, 0, 0, 0],
        },
    ];

    RuleTable::new(rules, ID)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_validates() {
        assert!(build().validate().is_ok());
    }

    #[test]
    fn test_npoint_inverses_are_consistent() {
        let table = build();
        for id in 0..4 {
            for slot in 0..4usize {
                let p = table.npoint_for_index(id, slot);
                assert_eq!(table.index_for_npoint(id, p), slot);
            }
        }
    }

    #[test]
    fn test_every_state_is_an_involution_pair() {
        // Each orientation's 4x4 grandchildren must close back into the
        // same 4-element set {Id, Swap, SwapNeg, Neg}; no state escapes it.
        let table = build();
        for id in 0..4 {
            for slot in 0..4usize {
                let child = table.child_at(id, slot);
                assert!(child < 4);
            }
        }
    }
}
