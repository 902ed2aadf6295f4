//! Foundation types shared across the engine.
//!
//! - [`UnitId`] — identifies one source unit in a parse archive
//! - [`Name`], [`Interner`] — string interning for class/method names
//!
//! This module has no dependencies on any other module in the crate.

mod intern;
mod unit_id;

pub use intern::{Interner, Name};
pub use unit_id::UnitId;
