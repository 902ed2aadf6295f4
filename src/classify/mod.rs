//! TypeClassifier (C2): primitives, ignored calls, and type modifiers per
//! language, plus the non-primitive-external test against a containing
//! class.

mod builtin;

use rustc_hash::FxHashSet;

use crate::tree::Language;

/// Per-language sets plus user extensions, merged on construction (§4.2).
///
/// The classifier never fails: an unrecognized component of a type is
/// non-primitive-external by definition (§2 error-handling design).
#[derive(Debug, Clone, Default)]
pub struct TypeClassifier {
    primitives: FxHashSet<(Language, String)>,
    ignored_calls: FxHashSet<(Language, String)>,
    modifiers: FxHashSet<(Language, String)>,
    user_primitives: FxHashSet<String>,
    user_ignored_calls: FxHashSet<String>,
    user_modifiers: FxHashSet<String>,
}

/// The outcome of classifying one type against a class (§4.2, §4.3 step 4).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TypeClassification {
    pub non_primitive: bool,
    pub non_primitive_external: bool,
}

impl TypeClassifier {
    /// Build the classifier from the built-in tables with no user
    /// extensions.
    pub fn new() -> Self {
        let mut me = Self::default();
        for lang in Language::ALL {
            for p in builtin::primitives(lang) {
                me.primitives.insert((lang, (*p).to_string()));
            }
            for c in builtin::ignored_calls(lang) {
                me.ignored_calls.insert((lang, (*c).to_string()));
            }
            for m in builtin::type_modifiers(lang) {
                me.modifiers.insert((lang, (*m).to_string()));
            }
        }
        me
    }

    /// Build the classifier from the built-in tables plus every user
    /// extension in a [`crate::Config`] (§A.3).
    pub fn from_config(config: &crate::Config) -> Self {
        let mut me = Self::new();
        for p in &config.user_primitives {
            me.add_user_primitive(p.clone());
        }
        for c in &config.user_ignored_calls {
            me.add_user_ignored_call(c.clone());
        }
        for m in &config.user_modifiers {
            me.add_user_modifier(m.clone());
        }
        me
    }

    /// Merge in a user-supplied primitive type, applied across all
    /// languages (§A.3 / original semantics: user extensions are
    /// language-agnostic).
    pub fn add_user_primitive(&mut self, type_name: impl Into<String>) {
        self.user_primitives.insert(type_name.into());
    }

    pub fn add_user_ignored_call(&mut self, call_name: impl Into<String>) {
        self.user_ignored_calls.insert(call_name.into());
    }

    pub fn add_user_modifier(&mut self, modifier: impl Into<String>) {
        self.user_modifiers.insert(modifier.into());
    }

    /// `is_primitive(type, lang)` — true if every comma-separated
    /// component of the stripped type is in the primitive set.
    pub fn is_primitive(&self, type_str: &str, lang: Language) -> bool {
        let stripped = self.strip_modifiers(type_str, lang);
        if stripped.trim().is_empty() {
            return false;
        }
        stripped
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .all(|component| self.is_primitive_component(component, lang))
    }

    fn is_primitive_component(&self, component: &str, lang: Language) -> bool {
        self.primitives.contains(&(lang, component.to_string()))
            || self.user_primitives.contains(component)
    }

    pub fn is_ignored_call(&self, call_name: &str, lang: Language) -> bool {
        let trailing = trailing_name(call_name);
        self.ignored_calls.contains(&(lang, trailing.to_string()))
            || self.user_ignored_calls.contains(trailing)
    }

    /// `strip_modifiers(type, lang)` — removal of all specifiers and
    /// containers, whitespace-collapsed.
    pub fn strip_modifiers(&self, type_str: &str, lang: Language) -> String {
        let mut working = type_str.to_string();
        for modifier in self.modifiers_for(lang) {
            working = remove_token(&working, modifier);
        }
        collapse_whitespace(&working)
    }

    fn modifiers_for<'a>(&'a self, lang: Language) -> impl Iterator<Item = &'a str> {
        self.modifiers
            .iter()
            .filter(move |(l, _)| *l == lang)
            .map(|(_, m)| m.as_str())
            .chain(self.user_modifiers.iter().map(String::as_str))
    }

    /// `classify_non_primitive(type, lang, own_class_name, out_var)` —
    /// strips generics, splits by commas, and for each component removes
    /// namespaces and decides non-primitive / non-primitive-external.
    ///
    /// `own_class_name` is the simple name (no namespace, no generic args)
    /// of the class the type appears in; `None` when classifying a type
    /// outside any class (e.g. a free function's parameter).
    pub fn classify_non_primitive(
        &self,
        type_str: &str,
        lang: Language,
        own_class_name: Option<&str>,
    ) -> TypeClassification {
        let stripped = self.strip_modifiers(type_str, lang);
        if stripped.trim().is_empty() {
            return TypeClassification::default();
        }
        let mut result = TypeClassification::default();
        for component in stripped.split(',').map(str::trim).filter(|s| !s.is_empty()) {
            let simple = strip_namespace(component);
            if self.is_primitive_component(simple, lang) {
                continue;
            }
            result.non_primitive = true;
            if own_class_name != Some(simple) {
                result.non_primitive_external = true;
            }
        }
        result
    }
}

/// The callee's trailing name component: after the last `::`, `->`, or
/// `.`, and after any template argument list — used both for ignored-call
/// matching and for the call signature's name portion (§4.3 step 8/10).
pub fn trailing_name(qualified: &str) -> &str {
    let no_template = match qualified.find('<') {
        Some(idx) => &qualified[..idx],
        None => qualified,
    };
    no_template
        .rsplit("::")
        .next()
        .unwrap_or(no_template)
        .rsplit("->")
        .next()
        .unwrap_or(no_template)
        .rsplit('.')
        .next()
        .unwrap_or(no_template)
}

fn strip_namespace(component: &str) -> &str {
    component.rsplit("::").next().unwrap_or(component)
}

fn remove_token(haystack: &str, token: &str) -> String {
    if token.is_empty() {
        return haystack.to_string();
    }
    // Bracket-style tokens (e.g. `\[.*\]`, `@\w+`) carry a tiny regex
    // meta-language in the original tables; here they're matched as the
    // literal bracket/at-sign forms they denote rather than re-deriving a
    // full regex engine for two escape patterns.
    if token == "\\[.*\\]" {
        return strip_bracket_suffix(haystack);
    }
    if token == "@\\w+" {
        return strip_at_prefixed_word(haystack);
    }
    if token == "\\?\\?=" || token == "\\.\\.\\." {
        return haystack.replace(&token.replace("\\", ""), "");
    }
    haystack.replace(token, "")
}

fn strip_bracket_suffix(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '[' {
            for c2 in chars.by_ref() {
                if c2 == ']' {
                    break;
                }
            }
        } else {
            out.push(c);
        }
    }
    out
}

fn strip_at_prefixed_word(s: &str) -> String {
    let mut out = String::new();
    let mut chars = s.char_indices().peekable();
    while let Some((_, c)) = chars.next() {
        if c == '@' {
            while let Some(&(_, c2)) = chars.peek() {
                if c2.is_alphanumeric() || c2 == '_' {
                    chars.next();
                } else {
                    break;
                }
            }
        } else {
            out.push(c);
        }
    }
    out
}

fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primitive_cpp_int_is_primitive() {
        let c = TypeClassifier::new();
        assert!(c.is_primitive("int", Language::Cpp));
        assert!(!c.is_primitive("Engine", Language::Cpp));
    }

    #[test]
    fn strip_modifiers_removes_const_and_pointer() {
        let c = TypeClassifier::new();
        let stripped = c.strip_modifiers("const Engine *", Language::Cpp);
        assert_eq!(stripped, "Engine");
    }

    #[test]
    fn classify_non_primitive_external_when_not_own_class() {
        let c = TypeClassifier::new();
        let result = c.classify_non_primitive("Engine", Language::Cpp, Some("Vehicle"));
        assert!(result.non_primitive);
        assert!(result.non_primitive_external);
    }

    #[test]
    fn classify_non_primitive_internal_when_own_class() {
        let c = TypeClassifier::new();
        let result = c.classify_non_primitive("Vehicle", Language::Cpp, Some("Vehicle"));
        assert!(result.non_primitive);
        assert!(!result.non_primitive_external);
    }

    #[test]
    fn unknown_component_defaults_to_non_primitive_external() {
        let c = TypeClassifier::new();
        let result = c.classify_non_primitive("FooBarBaz", Language::Java, None);
        assert!(result.non_primitive);
        assert!(result.non_primitive_external);
    }

    #[test]
    fn user_primitive_extension_applies_to_every_language() {
        let mut c = TypeClassifier::new();
        c.add_user_primitive("MyHandle");
        assert!(c.is_primitive("MyHandle", Language::Java));
        assert!(c.is_primitive("MyHandle", Language::Cpp));
    }

    #[test]
    fn ignored_call_matches_trailing_name_only() {
        let c = TypeClassifier::new();
        assert!(c.is_ignored_call("std::assert", Language::Cpp));
        assert!(c.is_ignored_call("assert", Language::Cpp));
        assert!(!c.is_ignored_call("compute", Language::Cpp));
    }

    #[test]
    fn trailing_name_strips_namespace_and_template() {
        assert_eq!(trailing_name("std::vector<int>::push_back"), "push_back");
        assert_eq!(trailing_name("obj->method"), "method");
        assert_eq!(trailing_name("obj.field"), "field");
        assert_eq!(trailing_name("plain"), "plain");
    }
}
