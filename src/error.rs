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

//! Errors produced by construction and level-indexed lookups.
//!
//! `normalize` itself never fails (it clamps silently); these errors are
//! only raised at construction time and for explicit-level point queries.

use thiserror::Error;

/// Catch-all error for this crate.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// Bad constructor argument: wrong dimension, `max_level < 1`, or
    /// `max_level * dimension >= 64` (would overflow a `u64` key).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A level argument was outside `1..=max_level`.
    #[error("level {level} is outside 1..={max_level}")]
    InvalidLevel {
        /// The level that was requested.
        level: u8,
        /// The engine's maximum level.
        max_level: u8,
    },

    /// A rule's `npoint_values` is not a permutation of `0..2^dimension`.
    #[error("rule {rule} is malformed: npoint_values is not a permutation of 0..2^{dimension}")]
    MalformedRule {
        /// Index of the offending rule within its table.
        rule: usize,
        /// Dimension the table was built for.
        dimension: u8,
    },
}

/// Convenience alias for this crate's `Result`.
pub type Result<T> = std::result::Result<T, Error>;
