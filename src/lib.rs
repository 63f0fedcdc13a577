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

#![deny(missing_docs)]
//! A recursive space-filling curve index core.
//!
//! Maps multidimensional coordinates (1 to 3 axes) onto a single
//! totally-ordered 64-bit key space, and answers range queries by
//! returning the minimal sorted, merged list of key intervals covering
//! every tile that intersects a query envelope. The resulting intervals
//! are meant to drive lookups into an ordered index the caller already
//! owns (a B-tree, an RDBMS range scan, and so on); this crate does not
//! provide that index itself.
//!
//! The curve family (Hilbert, Z-order, or a caller's own) is supplied as
//! a [`rule::RuleTable`] at construction time; [`rules`] ships Z-order
//! for any dimension and the classic four-orientation 2-D Hilbert table.
//!
//! ```
//! use sfc_core::{Envelope, SpaceFillingCurve, rules::hilbert2d};
//!
//! let envelope = Envelope::new(&[0.0, 0.0], &[8.0, 8.0]).unwrap();
//! let curve = SpaceFillingCurve::new(envelope, 3, hilbert2d::build()).unwrap();
//!
//! let key = curve.derived_value_for(&[0.0, 0.0]);
//! assert_eq!(key, 0);
//!
//! let query = Envelope::new(&[3.0, 3.0], &[4.0, 4.0]).unwrap();
//! let tiles = curve.tiles_intersecting(&query);
//! assert_eq!(tiles.len(), 1);
//! ```

mod codec;
mod curve;
mod envelope;
mod error;
mod interval;
mod normalize;
mod range_search;
mod rule;
pub mod rules;
mod search_envelope;

pub use crate::curve::SpaceFillingCurve;
pub use crate::envelope::Envelope;
pub use crate::error::{Error, Result};
pub use crate::interval::LongRange;
pub use crate::rule::{Rule, RuleId, RuleTable};
pub use crate::search_envelope::SearchEnvelope;

#[cfg(test)]
extern crate quickcheck;

#[cfg(test)]
#[macro_use]
extern crate quickcheck_macros;
