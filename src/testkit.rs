//! In-memory [`ParseArchive`] fixture (§A.4), gated behind `testkit`
//! (enabled for this crate's own tests and for `tests/` via the
//! `stereocode` dev-dependency with `features = ["testkit"]`).
//!
//! A fixture unit is built node by node; each node carries verbatim text
//! and an xpath string. Query responses are registered directly against
//! a `(Language, QueryName)` pair rather than by interpreting the path
//! expression text — the fixture doesn't need to understand the real
//! producer's query dialect, only answer the same calls the extraction
//! pipeline makes against it.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::base::UnitId;
use crate::tree::{Language, NodeId, ParseArchive, PathExpr, PathQueries, QueryName};

static QUERIES: Lazy<PathQueries> = Lazy::new(PathQueries::build);

#[derive(Debug, Clone)]
struct FixtureNode {
    text: String,
    xpath: String,
}

#[derive(Debug, Clone)]
struct UnitFixture {
    language: Language,
    nodes: Vec<FixtureNode>,
    unscoped: HashMap<String, Vec<NodeId>>,
    scoped: HashMap<(NodeId, String), Vec<NodeId>>,
}

impl UnitFixture {
    fn new(language: Language) -> Self {
        Self {
            language,
            nodes: Vec::new(),
            unscoped: HashMap::new(),
            scoped: HashMap::new(),
        }
    }
}

/// Accumulates fixture units; call [`ArchiveBuilder::unit`] for each one,
/// then [`ArchiveBuilder::build`] once all units/responses are set up.
#[derive(Debug, Clone, Default)]
pub struct ArchiveBuilder {
    units: Vec<UnitFixture>,
}

impl ArchiveBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new unit written in `language`, returning a handle to
    /// populate it with nodes and query responses.
    pub fn unit(&mut self, language: Language) -> UnitHandle<'_> {
        self.units.push(UnitFixture::new(language));
        let unit = UnitId::new((self.units.len() - 1) as u32);
        UnitHandle { builder: self, unit }
    }

    pub fn build(self) -> TestArchive {
        TestArchive { units: self.units }
    }
}

/// A single unit under construction.
pub struct UnitHandle<'a> {
    builder: &'a mut ArchiveBuilder,
    unit: UnitId,
}

impl<'a> UnitHandle<'a> {
    pub fn id(&self) -> UnitId {
        self.unit
    }

    fn fixture(&mut self) -> &mut UnitFixture {
        &mut self.builder.units[self.unit.index() as usize]
    }

    /// Register a node carrying verbatim `text`; its xpath is synthesized
    /// from insertion order (`/unit[N]/node[K]`), unique enough for any
    /// fixture since the engine only uses xpaths as opaque keys.
    pub fn node(&mut self, text: impl Into<String>) -> NodeId {
        let unit_index = self.unit.index();
        let fixture = self.fixture();
        let index = fixture.nodes.len();
        let xpath = format!("/unit[{unit_index}]/node[{index}]");
        fixture.nodes.push(FixtureNode { text: text.into(), xpath });
        NodeId::new(index as u32)
    }

    /// Make `archive.query(unit, expr)` return `nodes` for this unit's
    /// `(language, query)` path expression.
    pub fn respond(&mut self, query: QueryName, nodes: &[NodeId]) -> &mut Self {
        let lang = self.fixture().language;
        let key = expr_key(lang, query);
        self.fixture().unscoped.insert(key, nodes.to_vec());
        self
    }

    /// Make `archive.query_from(unit, root, expr)` return `nodes` for
    /// this unit's `(language, query)` path expression evaluated from
    /// `root`.
    pub fn respond_from(&mut self, root: NodeId, query: QueryName, nodes: &[NodeId]) -> &mut Self {
        let lang = self.fixture().language;
        let key = expr_key(lang, query);
        self.fixture().scoped.insert((root, key), nodes.to_vec());
        self
    }
}

fn expr_key(lang: Language, query: QueryName) -> String {
    QUERIES.get(lang, query).map(|e| e.as_str().to_string()).unwrap_or_default()
}

/// The built fixture archive; implements [`ParseArchive`] by table
/// lookup instead of real path-expression evaluation.
#[derive(Debug, Clone)]
pub struct TestArchive {
    units: Vec<UnitFixture>,
}

impl ParseArchive for TestArchive {
    fn units(&self) -> Vec<UnitId> {
        (0..self.units.len() as u32).map(UnitId::new).collect()
    }

    fn language(&self, unit: UnitId) -> Language {
        self.units[unit.index() as usize].language
    }

    fn query(&self, unit: UnitId, expr: &PathExpr) -> Vec<NodeId> {
        self.units[unit.index() as usize].unscoped.get(expr.as_str()).cloned().unwrap_or_default()
    }

    fn query_from(&self, unit: UnitId, root: NodeId, expr: &PathExpr) -> Vec<NodeId> {
        let fixture = &self.units[unit.index() as usize];
        if let Some(nodes) = fixture.scoped.get(&(root, expr.as_str().to_string())) {
            return nodes.clone();
        }
        fixture.unscoped.get(expr.as_str()).cloned().unwrap_or_default()
    }

    fn text(&self, unit: UnitId, node: NodeId) -> String {
        self.units[unit.index() as usize].nodes[node.raw() as usize].text.clone()
    }

    fn xpath(&self, unit: UnitId, node: NodeId) -> String {
        self.units[unit.index() as usize].nodes[node.raw() as usize].xpath.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unscoped_response_round_trips_through_query() {
        let mut builder = ArchiveBuilder::new();
        let mut unit = builder.unit(Language::Cpp);
        let class_node = unit.node("Engine");
        unit.respond(QueryName::ClassForm, &[class_node]);
        let unit_id = unit.id();
        let archive = builder.build();

        let expr = QUERIES.get(Language::Cpp, QueryName::ClassForm).unwrap();
        let found = archive.query(unit_id, expr);
        assert_eq!(found, vec![class_node]);
        assert_eq!(archive.text(unit_id, class_node), "Engine");
    }

    #[test]
    fn scoped_response_is_preferred_over_unscoped() {
        let mut builder = ArchiveBuilder::new();
        let mut unit = builder.unit(Language::Java);
        let class_node = unit.node("Car");
        let field_node = unit.node("speed");
        unit.respond(QueryName::FieldName, &[]);
        unit.respond_from(class_node, QueryName::FieldName, &[field_node]);
        let unit_id = unit.id();
        let archive = builder.build();

        let expr = QUERIES.get(Language::Java, QueryName::FieldName).unwrap();
        let found = archive.query_from(unit_id, class_node, expr);
        assert_eq!(found, vec![field_node]);
    }

    #[test]
    fn xpath_is_stable_and_unique_per_node() {
        let mut builder = ArchiveBuilder::new();
        let mut unit = builder.unit(Language::CSharp);
        let a = unit.node("a");
        let b = unit.node("b");
        let unit_id = unit.id();
        let archive = builder.build();
        assert_ne!(archive.xpath(unit_id, a), archive.xpath(unit_id, b));
    }
}
