use crate::base::UnitId;
use crate::tree::{Language, PathExpr};

/// Identifies one node within a single unit's parse tree.
///
/// Scoped to the unit it came from — a `NodeId` is only meaningful when
/// paired with the [`UnitId`] it was produced against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(u32);

impl NodeId {
    pub fn new(raw: u32) -> Self {
        Self(raw)
    }

    pub fn raw(self) -> u32 {
        self.0
    }
}

/// The query interface the core requires from an external parse-tree
/// producer (§6, "Parse-tree producer (consumed)").
///
/// An archive is a collection of [`UnitId`]s, each with its own source
/// language and its own addressable tree. The core never constructs or
/// mutates an archive; it only queries one. Implementations are expected
/// to be cheap to query repeatedly — the engine re-queries the same unit
/// many times across extraction, resolution, and call filtering.
pub trait ParseArchive: Send + Sync {
    /// Every unit this archive holds, in a stable order.
    fn units(&self) -> Vec<UnitId>;

    /// The source language a unit was parsed as.
    fn language(&self, unit: UnitId) -> Language;

    /// Evaluate a path expression against a unit, returning the matching
    /// nodes in document order.
    fn query(&self, unit: UnitId, expr: &PathExpr) -> Vec<NodeId>;

    /// Evaluate a path expression rooted at a specific node rather than the
    /// whole unit (used to re-query a method's own fragment, e.g. its
    /// return expressions, without re-matching across the whole file).
    fn query_from(&self, unit: UnitId, root: NodeId, expr: &PathExpr) -> Vec<NodeId>;

    /// Serialize a node back to source text, verbatim.
    fn text(&self, unit: UnitId, node: NodeId) -> String;

    /// A stable path expression that addresses exactly this node, for
    /// later re-querying or for the annotation stage (§4.9).
    fn xpath(&self, unit: UnitId, node: NodeId) -> String;
}
