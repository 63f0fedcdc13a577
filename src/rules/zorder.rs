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

//! Z-order (Morton) curve rule table.
//!
//! A Z-order curve never reorients: it visits children in n-point
//! numeric order at every level, always handing the same single
//! orientation to its children. That makes it the one-rule, self-loop
//! degenerate case of the rule-graph abstraction in [`crate::rule`].

use crate::rule::{Rule, RuleTable};

/// Builds a Z-order rule table for `dimension` in `1..=3`.
///
/// # Panics
///
/// Panics if `dimension` is not in `1..=3`; callers are expected to have
/// already validated the dimension against an [`crate::Envelope`]
/// (`SpaceFillingCurve::new` does this before it ever calls here).
#[must_use]
pub fn build(dimension: u8) -> RuleTable {
    assert!((1..=3).contains(&dimension), "dimension must be 1..=3");
    let width = 1usize << dimension;

    let mut npoint_values = [0u8; 8];
    let mut index_for_npoint = [0u8; 8];
    for i in 0..width {
        npoint_values[i] = i as u8;
        index_for_npoint[i] = i as u8;
    }

    let rule = Rule {
        name: "z-order",
        dimension,
        npoint_values,
        index_for_npoint,
        children: [0; 8],
    };

    RuleTable::new(vec![rule], 0)
}
