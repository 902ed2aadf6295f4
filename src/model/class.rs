use indexmap::IndexMap;

use crate::base::{Name, UnitId};
use crate::model::{MethodModel, Variable};
use crate::tree::Language;

/// The declared form of a class-like type (§2, §3).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClassKind {
    Class,
    Struct,
    Interface,
    Enum,
    Union,
}

/// Name(s), parent links, fields, methods, and stereotype list for one
/// class-like type (§3 "ClassModel").
#[derive(Debug, Clone)]
pub struct ClassModel {
    pub language: Language,

    pub name_raw: String,
    pub name_stripped: String,
    /// Without namespace qualification and without generic/template args.
    pub name_no_namespace_generic: String,
    /// With namespace kept, generic/template args stripped.
    pub name_no_generic: String,

    pub kind: ClassKind,

    /// Parent name -> inheritance specifier. Defaults (§3): "private" for
    /// a CPP class, "public" for a CPP struct/union and for CSH/JVA.
    pub parents: IndexMap<Name, String>,

    /// Ordered field table, including the reserved pseudo-field `this`.
    pub fields: IndexMap<Name, Variable>,

    pub methods: Vec<MethodModel>,

    /// Own signatures at extraction time; extended with every reachable
    /// parent's signatures once the resolver runs (§4.5 invariant).
    pub method_signatures: indexmap::IndexSet<String>,

    pub constructor_destructor_count: usize,

    pub stereotypes: Vec<String>,

    /// One anchor xpath per unit this class (or partial-class fragment,
    /// CSH) was declared in, for the annotation stage (§4.9).
    pub xpath_anchors: Vec<(UnitId, String)>,

    /// Resolver bookkeeping (§4.5): true once this class's inherited
    /// fields/signatures have been folded in.
    pub inherited: bool,
    /// Resolver bookkeeping: cycle guard, reset between classes.
    pub visited: bool,
}

impl ClassModel {
    pub fn new(language: Language, kind: ClassKind, name_raw: impl Into<String>) -> Self {
        let name_raw = name_raw.into();
        Self {
            language,
            name_stripped: name_raw.split_whitespace().collect::<Vec<_>>().join(""),
            name_no_namespace_generic: strip_namespace_and_generic(&name_raw),
            name_no_generic: strip_generic(&name_raw),
            name_raw,
            kind,
            parents: IndexMap::new(),
            fields: IndexMap::new(),
            methods: Vec::new(),
            method_signatures: indexmap::IndexSet::new(),
            constructor_destructor_count: 0,
            stereotypes: Vec::new(),
            xpath_anchors: Vec::new(),
            inherited: false,
            visited: false,
        }
    }

    /// Default inheritance specifier for a parent that omitted one
    /// explicitly (§3).
    pub fn default_inheritance_specifier(language: Language, kind: ClassKind) -> &'static str {
        match (language, kind) {
            (Language::Cpp, ClassKind::Class) => "private",
            (Language::Cpp, _) => "public",
            _ => "public",
        }
    }

    /// Non-constructor/destructor method count, used throughout the class
    /// rule table (§4.8's `allM`).
    pub fn non_constructor_method_count(&self) -> usize {
        self.methods.len() - self.constructor_destructor_count
    }

    pub fn set_stereotype(&mut self, label: impl Into<String>) {
        let label = label.into();
        if !self.stereotypes.iter().any(|s| s == &label) {
            self.stereotypes.push(label);
        }
    }

    pub fn stereotype_string(&self) -> String {
        self.stereotypes.join(" ")
    }
}

fn strip_namespace_and_generic(name: &str) -> String {
    let no_generic = strip_generic(name);
    no_generic.rsplit("::").next().unwrap_or(&no_generic).to_string()
}

fn strip_generic(name: &str) -> String {
    match name.find(['<', '[']) {
        Some(idx) => name[..idx].to_string(),
        None => name.to_string(),
    }
}

/// The complete set of classes and free-standing (non-member) functions
/// discovered for one analysis run.
#[derive(Debug, Clone, Default)]
pub struct ClassCollection {
    pub classes: IndexMap<Name, ClassModel>,
    pub free_functions: Vec<MethodModel>,
}

impl ClassCollection {
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_forms_are_derived_correctly() {
        let c = ClassModel::new(Language::Cpp, ClassKind::Class, "ns::Widget<T>");
        assert_eq!(c.name_no_generic, "ns::Widget");
        assert_eq!(c.name_no_namespace_generic, "Widget");
    }

    #[test]
    fn default_inheritance_specifier_differs_cpp_class_vs_struct() {
        assert_eq!(
            ClassModel::default_inheritance_specifier(Language::Cpp, ClassKind::Class),
            "private"
        );
        assert_eq!(
            ClassModel::default_inheritance_specifier(Language::Cpp, ClassKind::Struct),
            "public"
        );
        assert_eq!(
            ClassModel::default_inheritance_specifier(Language::CSharp, ClassKind::Class),
            "public"
        );
    }
}
