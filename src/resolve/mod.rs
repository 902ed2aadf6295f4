//! Inheritance resolution (C5, §4.5): a depth-first fixed point over the
//! class graph that folds every reachable parent's fields and method
//! signatures into each class, plus CPP's out-of-line `Class::method`
//! attachment.
//!
//! All fields are merged, not just non-private ones — a subclass can
//! still name-collide with a private parent field even though it can't
//! read it, and the call filter needs the full set to tell "on a field"
//! from "free function" correctly.

use rustc_hash::FxHashSet;
use tracing::{debug, trace};

use crate::base::Name;
use crate::model::ClassCollection;
use crate::tree::Language;

/// Close every class over its (transitive) parents' fields and method
/// signatures, then attach CPP free functions shaped like
/// `Class::method` onto the class they belong to.
pub fn resolve(collection: &mut ClassCollection) {
    let keys: Vec<Name> = collection.classes.keys().cloned().collect();
    let mut in_progress = FxHashSet::default();
    for key in &keys {
        resolve_one(key, collection, &mut in_progress);
    }
    attach_external_cpp_methods(collection);
}

fn resolve_one(key: &Name, collection: &mut ClassCollection, in_progress: &mut FxHashSet<Name>) {
    if collection.classes.get(key).map(|c| c.inherited).unwrap_or(true) {
        return;
    }
    if !in_progress.insert(key.clone()) {
        trace!(class = %key, "inheritance cycle detected, stopping here");
        return;
    }

    let parent_names: Vec<Name> = collection.classes[key].parents.keys().cloned().collect();
    let mut merged_fields = Vec::new();
    let mut merged_signatures = Vec::new();
    for parent_name in &parent_names {
        let Some(parent_key) = find_class_key(collection, parent_name) else {
            debug!(class = %key, parent = %parent_name, "parent not found in archive, skipping");
            continue;
        };
        resolve_one(&parent_key, collection, in_progress);
        if let Some(parent) = collection.classes.get(&parent_key) {
            merged_fields.extend(parent.fields.iter().map(|(n, v)| (n.clone(), v.clone())));
            merged_signatures.extend(parent.method_signatures.iter().cloned());
        }
    }

    if let Some(class) = collection.classes.get_mut(key) {
        for (name, var) in merged_fields {
            class.fields.entry(name).or_insert(var);
        }
        for sig in merged_signatures {
            class.method_signatures.insert(sig);
        }
        class.inherited = true;
    }
    in_progress.remove(key);
}

/// Exact name first, then without generic/template args, then without
/// namespace qualification either — the fallback chain a parent-list
/// entry is checked against (§4.5).
fn find_class_key(collection: &ClassCollection, parent_name: &Name) -> Option<Name> {
    if collection.classes.contains_key(parent_name) {
        return Some(parent_name.clone());
    }
    let candidate = parent_name.as_ref();
    collection
        .classes
        .iter()
        .find(|(_, class)| class.name_no_generic == candidate)
        .or_else(|| collection.classes.iter().find(|(_, class)| class.name_no_namespace_generic == candidate))
        .map(|(key, _)| key.clone())
}

/// CPP lets a method be defined outside its class (`void Engine::start()
/// {...}`); a producer without class context for that definition reports
/// it as a free function. Re-attach any such function whose name
/// contains `ClassName::` onto the matching class.
fn attach_external_cpp_methods(collection: &mut ClassCollection) {
    let mut remaining = Vec::with_capacity(collection.free_functions.len());
    let mut adopted = Vec::new();

    for function in std::mem::take(&mut collection.free_functions) {
        if function.language != Language::Cpp {
            remaining.push(function);
            continue;
        }
        let Some(qualifier_end) = function.name.rfind("::") else {
            remaining.push(function);
            continue;
        };
        let qualifier: Name = Name::from(&function.name[..qualifier_end]);
        let Some(owner_name) = find_class_key(collection, &qualifier) else {
            remaining.push(function);
            continue;
        };
        adopted.push((owner_name, function));
    }

    collection.free_functions = remaining;
    for (owner, method) in adopted {
        if let Some(class) = collection.classes.get_mut(&owner) {
            class.method_signatures.insert(method.name_signature.clone());
            class.methods.push(method);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::base::{Interner, UnitId};
    use crate::model::{ClassKind, ClassModel, MethodModel, Variable};
    use crate::tree::Language;

    fn class(language: Language, name: &str) -> ClassModel {
        ClassModel::new(language, ClassKind::Class, name)
    }

    #[test]
    fn fields_and_signatures_inherit_through_one_parent() {
        let mut interner = Interner::new();
        let mut collection = ClassCollection::new();

        let mut base = class(Language::Cpp, "Base");
        let field_name = interner.intern("count");
        base.fields.insert(field_name.clone(), Variable::new(field_name, "int", "int"));
        base.method_signatures.insert("tick()".to_string());
        collection.classes.insert(interner.intern("Base"), base);

        let mut derived = class(Language::Cpp, "Derived");
        derived.parents.insert(interner.intern("Base"), "public".to_string());
        collection.classes.insert(interner.intern("Derived"), derived);

        resolve(&mut collection);

        let derived = &collection.classes[&interner.intern("Derived")];
        assert!(derived.fields.contains_key(&interner.intern("count")));
        assert!(derived.method_signatures.contains("tick()"));
        assert!(derived.inherited);
    }

    #[test]
    fn cyclic_parents_do_not_infinite_loop() {
        let mut interner = Interner::new();
        let mut collection = ClassCollection::new();

        let mut a = class(Language::Cpp, "A");
        a.parents.insert(interner.intern("B"), "public".to_string());
        collection.classes.insert(interner.intern("A"), a);

        let mut b = class(Language::Cpp, "B");
        b.parents.insert(interner.intern("A"), "public".to_string());
        collection.classes.insert(interner.intern("B"), b);

        resolve(&mut collection);
        // Just needs to terminate; no further assertion necessary.
    }

    #[test]
    fn cpp_external_method_attaches_to_its_class() {
        let mut interner = Interner::new();
        let mut collection = ClassCollection::new();
        collection.classes.insert(interner.intern("Engine"), class(Language::Cpp, "Engine"));

        let mut method = MethodModel::new(UnitId::new(0), "/unit/function", Language::Cpp);
        method.name = "Engine::start".to_string();
        method.name_signature = "start()".to_string();
        collection.free_functions.push(method);

        resolve(&mut collection);

        assert!(collection.free_functions.is_empty());
        let engine = &collection.classes[&interner.intern("Engine")];
        assert_eq!(engine.methods.len(), 1);
        assert_eq!(engine.methods[0].name, "Engine::start");
    }
}
