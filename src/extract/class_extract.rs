//! Per-unit / per-class extraction (§4.4): discovers every class-like form
//! in a unit, builds its field table (including the `this` pseudo-field),
//! and extracts each of its methods — plus every free function.
//!
//! CSH auto-properties surface through the `FieldName`/`FieldType`
//! queries directly (they have no accessor body); properties with an
//! explicit body are walked separately below so their accessors become
//! ordinary methods.

use std::collections::HashSet;

use indexmap::IndexMap;

use crate::base::{Interner, UnitId};
use crate::extract::method_extract::extract_method;
use crate::extract::ExtractionContext;
use crate::model::{ClassCollection, ClassKind, ClassModel, Variable};
use crate::tree::{Language, NodeId, PathExpr, QueryName};

pub fn extract_units(ctx: &ExtractionContext, interner: &mut Interner) -> ClassCollection {
    let mut collection = ClassCollection::new();

    for unit in ctx.archive.units() {
        let lang = ctx.archive.language(unit);
        let ctor_dtor_nodes: HashSet<NodeId> = query_unit(ctx, unit, lang, QueryName::ConstructorDestructorForm).into_iter().collect();

        for class_node in query_unit(ctx, unit, lang, QueryName::ClassForm) {
            let class = extract_class(ctx, unit, class_node, lang, interner, &ctor_dtor_nodes);
            merge_class(&mut collection, class, interner);
        }

        for node in query_unit(ctx, unit, lang, QueryName::FreeFunctionForm) {
            let is_cd = ctor_dtor_nodes.contains(&node);
            let no_fields = IndexMap::new();
            let function = extract_method(ctx, unit, node, lang, interner, None, &no_fields, is_cd);
            collection.free_functions.push(function);
        }
    }

    collection
}

fn extract_class(
    ctx: &ExtractionContext,
    unit: UnitId,
    node: NodeId,
    lang: Language,
    interner: &mut Interner,
    ctor_dtor_nodes: &HashSet<NodeId>,
) -> ClassModel {
    let name_raw = text_from_first(ctx, unit, node, lang, QueryName::ClassName).unwrap_or_default();
    let kind_text = text_from_first(ctx, unit, node, lang, QueryName::ClassKind).unwrap_or_default();
    let kind = classify_kind(&kind_text, lang);
    let mut class = ClassModel::new(lang, kind, name_raw);
    class.xpath_anchors.push((unit, ctx.archive.xpath(unit, node)));

    let default_specifier = ClassModel::default_inheritance_specifier(lang, kind);
    for entry in texts_from(ctx, unit, node, lang, QueryName::ParentListEntry) {
        let (parent_name, specifier) = parse_parent_entry(&entry, lang, default_specifier);
        if parent_name.is_empty() {
            continue;
        }
        class.parents.insert(interner.intern(&parent_name), specifier);
    }

    let this_field = Variable::this_pseudo_field(interner);
    class.fields.insert(this_field.name.clone(), this_field);

    let field_names = texts_from(ctx, unit, node, lang, QueryName::FieldName);
    let field_types = texts_from(ctx, unit, node, lang, QueryName::FieldType);
    for (name, raw_type) in field_names.into_iter().zip(field_types) {
        if name.trim().is_empty() {
            continue;
        }
        let parsed_type = ctx.classifier.strip_modifiers(&raw_type, lang);
        let classification = ctx.classifier.classify_non_primitive(&raw_type, lang, Some(&class.name_no_namespace_generic));
        let mut var = Variable::new(interner.intern(name.trim()), raw_type, parsed_type);
        var.non_primitive = classification.non_primitive;
        var.non_primitive_external = classification.non_primitive_external;
        class.fields.insert(var.name.clone(), var);
    }

    for method_node in query_node(ctx, unit, node, lang, QueryName::MethodForm) {
        let is_cd = ctor_dtor_nodes.contains(&method_node);
        let method = extract_method(ctx, unit, method_node, lang, interner, Some(&class.name_no_namespace_generic), &class.fields, is_cd);
        if is_cd {
            class.constructor_destructor_count += 1;
        }
        class.method_signatures.insert(method.name_signature.clone());
        class.methods.push(method);
    }

    if lang == Language::CSharp {
        for property_node in query_node(ctx, unit, node, lang, QueryName::PropertyForm) {
            for accessor_node in query_node(ctx, unit, property_node, lang, QueryName::PropertyMethodForm) {
                let method = extract_method(ctx, unit, accessor_node, lang, interner, Some(&class.name_no_namespace_generic), &class.fields, false);
                class.method_signatures.insert(method.name_signature.clone());
                class.methods.push(method);
            }
        }
    }

    class
}

/// Fold a freshly extracted class into the collection, merging into an
/// already-present entry of the same name rather than overwriting it —
/// CSH allows a class to be declared `partial` across several units.
fn merge_class(collection: &mut ClassCollection, class: ClassModel, interner: &mut Interner) {
    let key = interner.intern(&class.name_raw);
    match collection.classes.get_mut(&key) {
        Some(existing) => {
            existing.xpath_anchors.extend(class.xpath_anchors);
            for (name, specifier) in class.parents {
                existing.parents.entry(name).or_insert(specifier);
            }
            for (name, var) in class.fields {
                existing.fields.entry(name).or_insert(var);
            }
            existing.constructor_destructor_count += class.constructor_destructor_count;
            for sig in class.method_signatures {
                existing.method_signatures.insert(sig);
            }
            existing.methods.extend(class.methods);
        }
        None => {
            collection.classes.insert(key, class);
        }
    }
}

fn classify_kind(text: &str, lang: Language) -> ClassKind {
    match (lang, text.trim()) {
        (Language::Cpp, "struct") => ClassKind::Struct,
        (Language::Cpp, "union") => ClassKind::Union,
        (Language::CSharp, "struct") => ClassKind::Struct,
        (Language::CSharp, "interface") => ClassKind::Interface,
        (Language::Java, "interface") => ClassKind::Interface,
        (Language::Java, "enum") => ClassKind::Enum,
        _ => ClassKind::Class,
    }
}

/// CPP spells an explicit specifier ahead of the parent name in the same
/// text node (`public Base`); CSH/JVA have no such syntax, so the whole
/// entry is the name and the default specifier always applies.
fn parse_parent_entry(entry: &str, lang: Language, default_specifier: &'static str) -> (String, String) {
    let trimmed = entry.trim();
    if lang != Language::Cpp {
        return (trimmed.to_string(), default_specifier.to_string());
    }
    for specifier in ["public", "protected", "private"] {
        if let Some(rest) = trimmed.strip_prefix(specifier) {
            let rest = rest.trim();
            if !rest.is_empty() {
                return (rest.to_string(), specifier.to_string());
            }
        }
    }
    (trimmed.to_string(), default_specifier.to_string())
}

fn query_unit(ctx: &ExtractionContext, unit: UnitId, lang: Language, q: QueryName) -> Vec<NodeId> {
    match non_empty_query(ctx, lang, q) {
        Some(expr) => ctx.archive.query(unit, expr),
        None => Vec::new(),
    }
}

fn query_node(ctx: &ExtractionContext, unit: UnitId, node: NodeId, lang: Language, q: QueryName) -> Vec<NodeId> {
    match non_empty_query(ctx, lang, q) {
        Some(expr) => ctx.archive.query_from(unit, node, expr),
        None => Vec::new(),
    }
}

fn non_empty_query(ctx: &ExtractionContext, lang: Language, q: QueryName) -> Option<&PathExpr> {
    ctx.queries.get(lang, q).filter(|expr| !expr.as_str().is_empty())
}

fn texts_from(ctx: &ExtractionContext, unit: UnitId, node: NodeId, lang: Language, q: QueryName) -> Vec<String> {
    query_node(ctx, unit, node, lang, q).into_iter().map(|n| ctx.archive.text(unit, n)).collect()
}

fn text_from_first(ctx: &ExtractionContext, unit: UnitId, node: NodeId, lang: Language, q: QueryName) -> Option<String> {
    texts_from(ctx, unit, node, lang, q).into_iter().next()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_kind_distinguishes_struct_and_union_in_cpp() {
        assert_eq!(classify_kind("struct", Language::Cpp), ClassKind::Struct);
        assert_eq!(classify_kind("union", Language::Cpp), ClassKind::Union);
        assert_eq!(classify_kind("class", Language::Cpp), ClassKind::Class);
    }

    #[test]
    fn parse_parent_entry_reads_cpp_specifier() {
        let (name, spec) = parse_parent_entry("protected Base", Language::Cpp, "private");
        assert_eq!(name, "Base");
        assert_eq!(spec, "protected");

        let (name, spec) = parse_parent_entry("Base", Language::Cpp, "private");
        assert_eq!(name, "Base");
        assert_eq!(spec, "private");
    }

    #[test]
    fn parse_parent_entry_ignores_specifier_syntax_outside_cpp() {
        let (name, spec) = parse_parent_entry("IWidget", Language::Java, "public");
        assert_eq!(name, "IWidget");
        assert_eq!(spec, "public");
    }
}
