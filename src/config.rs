//! Run configuration (§A.3): user extensions to the built-in type tables,
//! the large-class threshold, and per-language feature toggles.

use crate::tree::Language;

/// One analysis run's configuration. Built with the builder methods below,
/// then handed to [`crate::pipeline::run`].
#[derive(Debug, Clone)]
pub struct Config {
    pub user_primitives: Vec<String>,
    pub user_ignored_calls: Vec<String>,
    pub user_modifiers: Vec<String>,

    /// Minimum non-constructor/destructor method count for the
    /// `large-class` class stereotype (§4.8). The original tool's
    /// default.
    pub large_class_threshold: usize,

    pub languages: LanguageToggles,

    /// Emit a `/** @stereotype ... */` comment above each annotated form
    /// in addition to the attribute (§4.9), for producers that don't
    /// preserve arbitrary attributes.
    pub emit_stereotype_comments: bool,
}

/// Per-language class-kind enable flags (§A.3): lets a caller restrict
/// analysis to, say, CPP classes and structs while ignoring unions.
#[derive(Debug, Clone, Copy)]
pub struct LanguageToggles {
    pub cpp_struct: bool,
    pub cpp_union: bool,
    pub csh_interface: bool,
    pub jva_interface: bool,
    pub jva_enum: bool,
}

impl Default for LanguageToggles {
    fn default() -> Self {
        Self {
            cpp_struct: true,
            cpp_union: true,
            csh_interface: true,
            jva_interface: true,
            jva_enum: true,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            user_primitives: Vec::new(),
            user_ignored_calls: Vec::new(),
            user_modifiers: Vec::new(),
            large_class_threshold: 21,
            languages: LanguageToggles::default(),
            emit_stereotype_comments: false,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_user_primitive(mut self, type_name: impl Into<String>) -> Self {
        self.user_primitives.push(type_name.into());
        self
    }

    pub fn with_user_ignored_call(mut self, call_name: impl Into<String>) -> Self {
        self.user_ignored_calls.push(call_name.into());
        self
    }

    pub fn with_user_modifier(mut self, modifier: impl Into<String>) -> Self {
        self.user_modifiers.push(modifier.into());
        self
    }

    pub fn with_large_class_threshold(mut self, threshold: usize) -> Self {
        self.large_class_threshold = threshold;
        self
    }

    /// True if the given class kind should be analyzed at all under this
    /// configuration.
    pub fn kind_enabled(&self, lang: Language, kind: crate::model::ClassKind) -> bool {
        use crate::model::ClassKind::*;
        match (lang, kind) {
            (Language::Cpp, Struct) => self.languages.cpp_struct,
            (Language::Cpp, Union) => self.languages.cpp_union,
            (Language::CSharp, Interface) => self.languages.csh_interface,
            (Language::Java, Interface) => self.languages.jva_interface,
            (Language::Java, Enum) => self.languages.jva_enum,
            _ => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_large_class_threshold_is_21() {
        assert_eq!(Config::default().large_class_threshold, 21);
    }

    #[test]
    fn kind_enabled_respects_toggles() {
        let mut config = Config::new();
        config.languages.cpp_union = false;
        assert!(!config.kind_enabled(Language::Cpp, crate::model::ClassKind::Union));
        assert!(config.kind_enabled(Language::Cpp, crate::model::ClassKind::Class));
    }
}
