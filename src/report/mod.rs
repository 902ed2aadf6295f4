//! Reporter (C9, §6): builds TXT/CSV report text and the verbose roll-ups.
//! Writing these strings to disk is a CLI/file-I/O concern, out of scope
//! for the core (§1) — this module only produces the content.

use indexmap::IndexMap;

use crate::model::ClassCollection;

const METHOD_LABEL_ORDER: [&str; 18] = [
    "get",
    "predicate",
    "property",
    "void-accessor",
    "set",
    "command",
    "non-void-command",
    "collaborator",
    "controller",
    "wrapper",
    "constructor",
    "copy-constructor",
    "destructor",
    "factory",
    "incidental",
    "stateless",
    "empty",
    "unclassified",
];

const CLASS_LABEL_ORDER: [&str; 15] = [
    "entity",
    "minimal-entity",
    "data-provider",
    "commander",
    "boundary",
    "factory",
    "controller",
    "pure-controller",
    "large-class",
    "lazy-class",
    "degenerate",
    "data-class",
    "small-class",
    "empty",
    "unclassified",
];

/// Per-class two-column header plus one row per method, classes separated
/// by a horizontal rule (§6 "Report formats").
pub fn build_txt_report(collection: &ClassCollection) -> String {
    let mut out = String::new();
    for (index, class) in collection.classes.values().enumerate() {
        if index > 0 {
            out.push_str(&"-".repeat(40));
            out.push('\n');
        }
        out.push_str(&class.name_raw);
        out.push(',');
        out.push_str(&class.stereotype_string());
        out.push('\n');
        for method in &class.methods {
            out.push_str(&method.name);
            out.push(',');
            out.push_str(&method.stereotype_string());
            out.push('\n');
        }
    }
    out
}

/// `Class Name,Class Stereotype,Method Name,Method Stereotype`, one row
/// per method.
pub fn build_csv_report(collection: &ClassCollection) -> String {
    let mut out = String::from("Class Name,Class Stereotype,Method Name,Method Stereotype\n");
    for class in collection.classes.values() {
        for method in &class.methods {
            out.push_str(&csv_row([
                class.name_raw.as_str(),
                class.stereotype_string().as_str(),
                method.name.as_str(),
                method.stereotype_string().as_str(),
            ]));
        }
    }
    out
}

/// `Free Function Name,Free Function Stereotype`, one row per free
/// function; kept in its own file per §6.
pub fn build_free_function_csv(collection: &ClassCollection) -> String {
    let mut out = String::from("Free Function Name,Free Function Stereotype\n");
    for function in &collection.free_functions {
        out.push_str(&csv_row([function.name.as_str(), function.stereotype_string().as_str()]));
    }
    out
}

fn csv_row<const N: usize>(fields: [&str; N]) -> String {
    let mut row = fields.iter().map(|f| csv_escape(f)).collect::<Vec<_>>().join(",");
    row.push('\n');
    row
}

fn csv_escape(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

/// Method/class/free-function counts rolled up five ways (§6 verbose
/// mode).
#[derive(Debug, Clone, Default)]
pub struct VerboseReport {
    /// Distinct method stereotype strings (e.g. `"factory collaborator"`)
    /// with occurrence counts, insertion-ordered by first sighting.
    pub unique_methods: IndexMap<String, usize>,
    pub unique_classes: IndexMap<String, usize>,
    /// Fixed key order per §6; a label with zero occurrences is still
    /// present with count 0.
    pub method_labels: Vec<(&'static str, usize)>,
    pub class_labels: Vec<(&'static str, usize)>,
    pub categories: Categories,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Categories {
    pub accessors: usize,
    pub mutators: usize,
    pub creational: usize,
    pub collaborational: usize,
    pub degenerate: usize,
    pub unclassified: usize,
    pub total: usize,
}

pub fn build_verbose(collection: &ClassCollection) -> VerboseReport {
    let mut report = VerboseReport::default();
    report.method_labels = METHOD_LABEL_ORDER.iter().map(|&label| (label, 0)).collect();
    report.class_labels = CLASS_LABEL_ORDER.iter().map(|&label| (label, 0)).collect();

    let all_methods = collection.classes.values().flat_map(|c| c.methods.iter()).chain(collection.free_functions.iter());

    for method in all_methods {
        *report.unique_methods.entry(method.stereotype_string()).or_insert(0) += 1;
        for label in &method.stereotypes {
            if let Some(slot) = report.method_labels.iter_mut().find(|(l, _)| l == label) {
                slot.1 += 1;
            }
            tally_category(&mut report.categories, label);
        }
    }

    for class in collection.classes.values() {
        *report.unique_classes.entry(class.stereotype_string()).or_insert(0) += 1;
        for label in &class.stereotypes {
            if let Some(slot) = report.class_labels.iter_mut().find(|(l, _)| l == label) {
                slot.1 += 1;
            }
        }
    }

    report
}

fn tally_category(categories: &mut Categories, label: &str) {
    categories.total += 1;
    match label {
        "get" | "predicate" | "property" | "void-accessor" => categories.accessors += 1,
        "set" | "command" | "non-void-command" => categories.mutators += 1,
        "factory" => categories.creational += 1,
        "collaborator" | "controller" | "wrapper" => categories.collaborational += 1,
        "incidental" | "stateless" | "empty" => categories.degenerate += 1,
        "unclassified" => categories.unclassified += 1,
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::base::{Interner, UnitId};
    use crate::model::{ClassKind, ClassModel, MethodModel};
    use crate::tree::Language;

    fn sample_collection() -> (Interner, ClassCollection) {
        let mut interner = Interner::new();
        let mut collection = ClassCollection::new();
        let mut class = ClassModel::new(Language::Cpp, ClassKind::Class, "Point");
        class.set_stereotype("data-class");

        let mut getter = MethodModel::new(UnitId::new(0), "/unit/function", Language::Cpp);
        getter.name = "getX".to_string();
        getter.set_stereotype("get");
        class.methods.push(getter);

        collection.classes.insert(interner.intern("Point"), class);
        (interner, collection)
    }

    #[test]
    fn csv_report_has_header_and_one_row_per_method() {
        let (_interner, collection) = sample_collection();
        let csv = build_csv_report(&collection);
        let mut lines = csv.lines();
        assert_eq!(lines.next().unwrap(), "Class Name,Class Stereotype,Method Name,Method Stereotype");
        assert_eq!(lines.next().unwrap(), "Point,data-class,getX,get");
    }

    #[test]
    fn txt_report_lists_class_then_its_methods() {
        let (_interner, collection) = sample_collection();
        let txt = build_txt_report(&collection);
        assert!(txt.starts_with("Point,data-class\n"));
        assert!(txt.contains("getX,get\n"));
    }

    #[test]
    fn verbose_report_tallies_the_get_label_and_the_accessor_category() {
        let (_interner, collection) = sample_collection();
        let verbose = build_verbose(&collection);
        assert_eq!(verbose.categories.accessors, 1);
        assert_eq!(verbose.categories.total, 1);
        let get_count = verbose.method_labels.iter().find(|(l, _)| *l == "get").unwrap().1;
        assert_eq!(get_count, 1);
        assert_eq!(verbose.unique_classes.get("data-class"), Some(&1));
    }

    #[test]
    fn csv_escapes_fields_containing_commas() {
        assert_eq!(csv_escape("a,b"), "\"a,b\"");
        assert_eq!(csv_escape("plain"), "plain");
    }
}
