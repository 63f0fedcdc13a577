//! Built-in [`crate::rule::RuleTable`] constructors.
//!
//! `spec.md` treats concrete rule tables as an external collaborator,
//! but a core with no curve to test against isn't exercisable, so this
//! crate ships two families, mirroring how the teacher repository ships
//! concrete `Z2`/`Z3` curves rather than leaving the curve abstract:
//!
//! - [`zorder`]: a trivial, single-orientation Z-order (Morton) curve,
//!   valid for any dimension in `1..=3`.
//! - [`hilbert2d`]: the classic four-orientation 2-D Hilbert curve.
//!
//! A 3-D Hilbert table is not shipped; see `DESIGN.md` for why.

pub mod hilbert2d;
pub mod zorder;
