//! Extraction: turns path-query results (C1) over a [`ParseArchive`] into
//! [`ClassModel`]/[`MethodModel`] instances (§4.3, §4.4).
//!
//! This module does not resolve inheritance or filter calls — that is
//! [`crate::resolve`] and [`crate::callfilter`]. Extraction only reads
//! what is textually present in each unit.

mod class_extract;
mod method_extract;

pub use class_extract::extract_units;

use crate::base::Interner;
use crate::classify::TypeClassifier;
use crate::model::ClassCollection;
use crate::tree::{ParseArchive, PathQueries};

/// Shared, read-only context every extraction function needs.
pub struct ExtractionContext<'a> {
    pub archive: &'a dyn ParseArchive,
    pub queries: &'a PathQueries,
    pub classifier: &'a TypeClassifier,
}

/// Run extraction over an entire archive, producing the unresolved class
/// collection (fields/method-signatures not yet closed over inheritance —
/// that's §4.5).
pub fn extract(archive: &dyn ParseArchive, queries: &PathQueries, classifier: &TypeClassifier) -> ClassCollection {
    let mut interner = Interner::new();
    let ctx = ExtractionContext {
        archive,
        queries,
        classifier,
    };
    extract_units(&ctx, &mut interner)
}
