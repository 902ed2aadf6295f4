//! AnnotationEmitter (C8, §4.9, §5): builds the ordered set of
//! `(unit, xpath, stereotype)` attachments the producer's annotated
//! archive needs, one entry per class and per method.
//!
//! Re-emitting the annotated tree itself is the producer's concern (§1,
//! explicitly out of scope for the core); this module only computes
//! *what* to attach and *where*, fanning the per-unit work out the way
//! §5 describes: one worker per unit, each writing into a mutex-guarded
//! ordered map, sequenced back into unit order once the pool drains.

use std::collections::BTreeMap;

use parking_lot::Mutex;
use rayon::prelude::*;

use crate::base::UnitId;
use crate::config::Config;
use crate::model::ClassCollection;

/// One `stereotype="..."` attachment: a node address plus the value to
/// write there, and optionally the `/** @stereotype ... */` comment form
/// (§4.9's second pass).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Annotation {
    pub xpath: String,
    pub stereotype: String,
    pub comment: Option<String>,
}

/// All annotations for one unit, in the order they were recorded during
/// extraction — stable so re-running annotation twice produces the same
/// output (§8 "Idempotence of annotation").
pub type UnitAnnotations = Vec<Annotation>;

/// The complete annotation plan, keyed and ordered by [`UnitId`].
#[derive(Debug, Clone, Default)]
pub struct AnnotationPlan {
    pub units: BTreeMap<u32, UnitAnnotations>,
}

impl AnnotationPlan {
    pub fn for_unit(&self, unit: UnitId) -> &[Annotation] {
        self.units.get(&unit.index()).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn total_annotations(&self) -> usize {
        self.units.values().map(Vec::len).sum()
    }
}

fn build_comment(config: &Config, stereotype: &str) -> Option<String> {
    config.emit_stereotype_comments.then(|| format!("/** @stereotype {stereotype} */"))
}

/// Build the annotation plan for a fully classified collection. Units are
/// processed in parallel (§5: "fan out one worker per unit"); each
/// worker's contribution is written once into the shared map under a
/// single lock, and the map itself is a `BTreeMap` so iteration is always
/// unit-order regardless of completion order.
pub fn build_plan(collection: &ClassCollection, config: &Config) -> AnnotationPlan {
    let by_unit: Mutex<BTreeMap<u32, UnitAnnotations>> = Mutex::new(BTreeMap::new());

    let class_entries: Vec<(UnitId, String, String)> = collection
        .classes
        .values()
        .flat_map(|class| {
            let stereotype = class.stereotype_string();
            class.xpath_anchors.iter().map(move |(unit, xpath)| (*unit, xpath.clone(), stereotype.clone()))
        })
        .collect();

    let method_entries: Vec<(UnitId, String, String)> = collection
        .classes
        .values()
        .flat_map(|class| class.methods.iter())
        .chain(collection.free_functions.iter())
        .map(|m| (m.unit, m.xpath.clone(), m.stereotype_string()))
        .collect();

    let all_entries: Vec<(UnitId, String, String)> = class_entries.into_iter().chain(method_entries).collect();

    // Group by unit first so each rayon task owns a disjoint unit and the
    // shared map is only ever touched once per unit (one lock acquisition
    // instead of one per annotation).
    let mut grouped: BTreeMap<u32, Vec<(String, String)>> = BTreeMap::new();
    for (unit, xpath, stereotype) in all_entries {
        grouped.entry(unit.index()).or_default().push((xpath, stereotype));
    }

    grouped.into_par_iter().for_each(|(unit_index, entries)| {
        let annotations: UnitAnnotations = entries
            .into_iter()
            .map(|(xpath, stereotype)| {
                let comment = build_comment(config, &stereotype);
                Annotation { xpath, stereotype, comment }
            })
            .collect();
        by_unit.lock().insert(unit_index, annotations);
    });

    AnnotationPlan {
        units: by_unit.into_inner(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::base::Interner;
    use crate::model::{ClassKind, ClassModel, MethodModel};
    use crate::tree::Language;

    #[test]
    fn class_and_method_anchors_both_land_in_the_plan() {
        let mut interner = Interner::new();
        let mut collection = ClassCollection::new();
        let mut class = ClassModel::new(Language::Cpp, ClassKind::Class, "Point");
        class.set_stereotype("data-class");
        class.xpath_anchors.push((UnitId::new(0), "/unit/class[1]".to_string()));

        let mut method = MethodModel::new(UnitId::new(0), "/unit/class[1]/function[1]", Language::Cpp);
        method.set_stereotype("get");
        class.methods.push(method);

        collection.classes.insert(interner.intern("Point"), class);

        let plan = build_plan(&collection, &Config::new());
        assert_eq!(plan.total_annotations(), 2);
        let for_unit = plan.for_unit(UnitId::new(0));
        assert!(for_unit.iter().any(|a| a.xpath == "/unit/class[1]" && a.stereotype == "data-class"));
        assert!(for_unit.iter().any(|a| a.xpath == "/unit/class[1]/function[1]" && a.stereotype == "get"));
    }

    #[test]
    fn comment_form_is_only_built_when_configured() {
        let mut interner = Interner::new();
        let mut collection = ClassCollection::new();
        let mut class = ClassModel::new(Language::Java, ClassKind::Class, "Widget");
        class.set_stereotype("unclassified");
        class.xpath_anchors.push((UnitId::new(0), "/unit/class[1]".to_string()));
        collection.classes.insert(interner.intern("Widget"), class);

        let plan = build_plan(&collection, &Config::new());
        assert!(plan.for_unit(UnitId::new(0))[0].comment.is_none());

        let config = Config::new();
        let mut config = config;
        config.emit_stereotype_comments = true;
        let plan = build_plan(&collection, &config);
        assert_eq!(plan.for_unit(UnitId::new(0))[0].comment.as_deref(), Some("/** @stereotype unclassified */"));
    }
}
