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

//! `RangeSearch`: recursive quadrant-pruning descent that produces a
//! minimal, sorted, maximally coalesced list of key intervals covering
//! every level-`max_level` tile intersecting a query.
//!
//! The three cursors (`rule`, `extent`, `[left, right)`) stay in lock
//! step as the recursion descends; traversal order `i = 0..2^d` is the
//! curve's own visiting order, which is exactly the order keys
//! increase in, so the greedy append-or-extend in [`IntervalList`]
//! coalesces in a single pass with no sorting step afterwards.

use crate::codec;
use crate::curve::SpaceFillingCurve;
use crate::interval::{IntervalList, LongRange};
use crate::rule::RuleId;
use crate::search_envelope::SearchEnvelope;

pub(crate) fn tiles_intersecting(curve: &SpaceFillingCurve, search: &SearchEnvelope) -> Vec<LongRange> {
    let mut list = IntervalList::new();
    descend(
        curve,
        search,
        curve.root_rule(),
        curve.full_extent(),
        0,
        curve.value_width(),
        &mut list,
    );
    list.into_vec()
}

#[allow(clippy::too_many_arguments)]
fn descend(
    curve: &SpaceFillingCurve,
    search: &SearchEnvelope,
    rule: RuleId,
    extent: SearchEnvelope,
    left: u64,
    right: u64,
    list: &mut IntervalList,
) {
    if right - left == 1 {
        let coord = codec::normalized_coordinate_for(curve, left, curve.max_level());
        if search.contains(&coord) {
            list.push_or_extend(left);
        }
        return;
    }

    if !search.intersects(&extent) {
        return;
    }

    let dimension = curve.dimension();
    let children = 1usize << dimension;
    let span = (right - left) / children as u64;
    let table = curve.rule_table();

    for i in 0..children {
        let p = table.npoint_for_index(rule, i);
        let child_extent = extent.quadrant(p);
        let child_left = left + i as u64 * span;
        let child_right = child_left + span;
        descend(
            curve,
            search,
            table.child_at(rule, i),
            child_extent,
            child_left,
            child_right,
            list,
        );
    }
}
