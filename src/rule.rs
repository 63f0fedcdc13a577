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

//! The self-similar curve rule graph, re-architected as a flat,
//! `RuleId`-indexed table instead of a polymorphic object graph.
//!
//! A [`Rule`] is a constant record: a slot-index-to-n-point permutation
//! (and its inverse, precomputed) plus the child rule visited when
//! descending into each slot. `childAt` is an index lookup into the
//! owning [`RuleTable`]; there is no dynamic dispatch on the hot path.

use crate::error::{Error, Result};
use std::collections::VecDeque;

/// Index of a [`Rule`] within a [`RuleTable`].
pub type RuleId = usize;

/// One orientation of a self-similar curve.
///
/// `npoint_values[i]` is the n-point visited at traversal slot `i`;
/// `index_for_npoint[p]` is its inverse, precomputed at table-build time
/// so encoding never does a linear scan. Only the first `2^dimension`
/// entries of each array are meaningful.
#[derive(Debug, Clone)]
pub struct Rule {
    /// Human-readable orientation name, for diagnostics.
    pub name: &'static str,
    /// Dimension this rule (and every rule reachable from it) is defined for.
    pub dimension: u8,
    /// Slot index -> n-point.
    pub npoint_values: [u8; 8],
    /// n-point -> slot index (inverse of `npoint_values`).
    pub index_for_npoint: [u8; 8],
    /// Slot index -> child `RuleId`, applied when recursing into that slot.
    pub children: [RuleId; 8],
}

impl Rule {
    /// The n-point visited at traversal slot `i`.
    #[must_use]
    pub fn npoint_for_index(&self, i: usize) -> u8 {
        self.npoint_values[i]
    }

    /// The traversal slot at which n-point `p` is visited.
    #[must_use]
    pub fn index_for_npoint(&self, p: u8) -> usize {
        self.index_for_npoint[p as usize] as usize
    }
}

/// An immutable, finite, possibly-cyclic graph of [`Rule`]s, shareable
/// across threads without synchronization (it never changes after
/// construction).
#[derive(Debug, Clone)]
pub struct RuleTable {
    rules: Vec<Rule>,
    root: RuleId,
}

impl RuleTable {
    /// Builds a table from its rules and the id of the root rule.
    #[must_use]
    pub fn new(rules: Vec<Rule>, root: RuleId) -> Self {
        RuleTable { rules, root }
    }

    /// Dimension of the root rule (and, once validated, every reachable rule).
    #[must_use]
    pub fn dimension(&self) -> u8 {
        self.rules[self.root].dimension
    }

    /// The root `RuleId`.
    #[must_use]
    pub fn root(&self) -> RuleId {
        self.root
    }

    /// The rule at `id`.
    #[must_use]
    pub fn rule(&self, id: RuleId) -> &Rule {
        &self.rules[id]
    }

    /// The n-point visited at traversal slot `i` under `rule`.
    #[must_use]
    pub fn npoint_for_index(&self, rule: RuleId, i: usize) -> u8 {
        self.rules[rule].npoint_for_index(i)
    }

    /// The traversal slot at which n-point `p` is visited under `rule`.
    #[must_use]
    pub fn index_for_npoint(&self, rule: RuleId, p: u8) -> usize {
        self.rules[rule].index_for_npoint(p)
    }

    /// The child rule visited when descending into `slot` from `rule`.
    #[must_use]
    pub fn child_at(&self, rule: RuleId, slot: usize) -> RuleId {
        self.rules[rule].children[slot]
    }

    /// Walks every rule reachable from the root and checks that each
    /// one's `npoint_values` is a permutation of `0..2^dimension`.
    ///
    /// Recommended at construction time (`spec.md` 7); the engine never
    /// re-validates on the hot path.
    pub fn validate(&self) -> Result<()> {
        let dimension = self.dimension();
        let width = 1usize << dimension;

        let mut seen = vec![false; self.rules.len()];
        let mut queue = VecDeque::new();
        queue.push_back(self.root);
        seen[self.root] = true;

        while let Some(id) = queue.pop_front() {
            let rule = &self.rules[id];
            if rule.dimension != dimension {
                return Err(Error::MalformedRule {
                    rule: id,
                    dimension,
                });
            }

            let mut present = vec![false; width];
            for &p in &rule.npoint_values[..width] {
                let p = p as usize;
                if p >= width || present[p] {
                    return Err(Error::MalformedRule {
                        rule: id,
                        dimension,
                    });
                }
                present[p] = true;
            }

            for &child in &rule.children[..width] {
                if !seen[child] {
                    seen[child] = true;
                    queue.push_back(child);
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::zorder;

    #[test]
    fn test_validate_accepts_zorder() {
        assert!(zorder::build(2).validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_non_permutation() {
        let bad = Rule {
            name: "bad",
            dimension: 2,
            npoint_values: [0, 0, 2, 3, 0, 0, 0, 0],
            index_for_npoint: [0, 0, 2, 3, 0, 0, 0, 0],
            children: [0; 8],
        };
        let table = RuleTable::new(vec![bad], 0);
        assert!(matches!(
            table.validate(),
            Err(Error::MalformedRule { rule: 0, .. })
        ));
    }
}
