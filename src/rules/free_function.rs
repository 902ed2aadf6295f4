//! Free-function stereotype rules (§4.8), run on every top-level function
//! that wasn't attached to a class (§4.5's `Class::method` reattachment
//! runs first).
//!
//! The two boolean names below read oddly next to what they gate — that
//! mismatch is carried over faithfully from the rule this is grounded on
//! rather than "fixed", since this tool reports what the original
//! actually computes, not what its variable names suggest it computes.

use crate::model::MethodModel;
use crate::tree::Language;

pub fn compute_free_function_stereotypes(language: Language, functions: &mut [MethodModel]) {
    for f in functions {
        classify_free_function(language, f);
    }
}

pub fn classify_free_function(language: Language, f: &mut MethodModel) {
    let is_global_or_static_changed = f.complex_return;
    let has_complex_return_expr = f.parameter_not_returned;
    let is_parameter_used = f.parameter_used;
    let is_parameter_modified = f.parameter_ref_modified;
    let has_calls = (f.function_calls.len() + f.method_calls.len()) > 0;
    let is_empty = f.non_comment_statement_count == 0;

    if f.name == "main" || f.name == "Main" {
        f.set_stereotype("main");
        return;
    }

    if is_empty {
        f.set_stereotype("empty");
        return;
    }

    // predicate
    let returns_bool = matches!(
        (language, f.return_type_parsed.as_str()),
        (Language::Cpp, "bool") | (Language::CSharp, "bool") | (Language::CSharp, "Boolean") | (Language::Java, "boolean")
    );
    if returns_bool && has_complex_return_expr && is_parameter_used {
        f.set_stereotype("predicate");
    }

    // property
    let returns_non_bool_non_void = match language {
        Language::Cpp => !matches!(f.return_type_parsed.as_str(), "bool" | "void" | ""),
        Language::CSharp => !matches!(f.return_type_parsed.as_str(), "bool" | "Boolean" | "void" | "Void" | ""),
        Language::Java => !matches!(f.return_type_parsed.as_str(), "boolean" | "void" | "Void" | ""),
    };
    if returns_non_bool_non_void && has_complex_return_expr && is_parameter_used {
        f.set_stereotype("property");
    }

    // factory
    if f.non_primitive_return_type && f.fields_created_with_new_and_returned {
        f.set_stereotype("factory");
    }

    // global-command
    if is_global_or_static_changed {
        f.set_stereotype("global-command");
    }

    // command
    if is_parameter_modified && !is_global_or_static_changed {
        f.set_stereotype("command");
    }

    // literal
    if !is_parameter_used && !has_calls {
        f.set_stereotype("literal");
    }

    // wrapper
    if !is_parameter_modified && has_calls {
        f.set_stereotype("wrapper");
    }

    if f.stereotypes.is_empty() {
        f.set_stereotype("unclassified");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::base::UnitId;

    fn function(name: &str) -> MethodModel {
        let mut f = MethodModel::new(UnitId::new(0), "/unit/function", Language::Cpp);
        f.name = name.to_string();
        f.non_comment_statement_count = 1;
        f
    }

    #[test]
    fn main_short_circuits_regardless_of_other_facts() {
        let mut f = function("main");
        f.parameter_ref_modified = true;
        classify_free_function(Language::Cpp, &mut f);
        assert_eq!(f.stereotype_string(), "main");
    }

    #[test]
    fn empty_function_short_circuits_to_empty() {
        let mut f = function("doNothing");
        f.non_comment_statement_count = 0;
        classify_free_function(Language::Cpp, &mut f);
        assert_eq!(f.stereotype_string(), "empty");
    }

    #[test]
    fn no_parameter_use_and_no_calls_is_literal() {
        let mut f = function("constantValue");
        classify_free_function(Language::Cpp, &mut f);
        assert!(f.stereotypes.contains(&"literal".to_string()));
    }

    #[test]
    fn modifying_a_reference_parameter_is_a_command() {
        let mut f = function("increment");
        f.parameter_ref_modified = true;
        classify_free_function(Language::Cpp, &mut f);
        assert!(f.stereotypes.contains(&"command".to_string()));
        assert!(!f.stereotypes.contains(&"global-command".to_string()));
    }

    #[test]
    fn complex_return_flag_drives_global_command_over_command() {
        let mut f = function("bumpCounter");
        f.parameter_ref_modified = true;
        f.complex_return = true;
        classify_free_function(Language::Cpp, &mut f);
        assert!(f.stereotypes.contains(&"global-command".to_string()));
        assert!(!f.stereotypes.contains(&"command".to_string()));
    }
}
