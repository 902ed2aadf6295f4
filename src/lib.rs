//! # stereocode
//!
//! Stereotype inference over parse trees of CPP, CSH, and JVA source units.
//!
//! Given a [`tree::ParseArchive`] (produced by an external parser this
//! crate does not implement), the engine extracts class and method models,
//! closes them over inheritance, filters calls down to the ones that
//! matter for classification, applies the stereotype rule table, and
//! emits annotations and reports.
//!
//! ## Module structure (dependency order)
//!
//! ```text
//! report     → TXT/CSV/verbose rendering of the final model
//!   ↑
//! annotate   → attaches stereotypes back onto the archive
//!   ↑
//! rules      → per-method / per-class / free-function stereotype rules
//!   ↑
//! callfilter → classifies and filters calls
//!   ↑
//! resolve    → inheritance closure over fields and method signatures
//!   ↑
//! extract    → ClassModel / MethodModel extraction
//!   ↑
//! exprrule   → the expression-to-variable resolution rule, shared above
//!   ↑
//! classify   → primitive / ignored-call / modifier tables
//!   ↑
//! model      → Variable, Call, MethodModel, ClassModel
//!   ↑
//! tree       → Language, ParseArchive, PathQueries
//!   ↑
//! base       → Name interning, UnitId
//! ```
//!
//! [`pipeline`] wires all of the above into a single entry point.

pub mod annotate;
pub mod base;
pub mod callfilter;
pub mod classify;
pub mod config;
pub mod error;
pub mod exprrule;
pub mod extract;
pub mod model;
pub mod pipeline;
pub mod report;
pub mod resolve;
pub mod rules;
pub mod tree;

#[cfg(any(test, feature = "testkit"))]
pub mod testkit;

pub use base::{Interner, Name, UnitId};
pub use classify::TypeClassifier;
pub use config::Config;
pub use error::{Result, StereoError};
pub use model::{Call, ClassCollection, ClassKind, ClassModel, MethodModel, Variable};
pub use pipeline::{run, AnalysisOutput};
pub use tree::{Language, NodeId, ParseArchive, PathExpr, PathQueries, QueryName};
