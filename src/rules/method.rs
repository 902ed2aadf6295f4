//! Per-method stereotype rules (§4.8), applied to every member method of
//! a class. Constructors/destructors short-circuit to their own label;
//! everything else runs the full rule set and multiple labels may
//! co-occur (e.g. a method can be both `controller` and `stateless` is
//! not possible, but `get` alongside `collaborator` is).

use crate::model::MethodModel;
use crate::tree::Language;

/// Run every method rule for one class's own methods (not inherited
/// ones — those belong to the class they were declared on).
pub fn compute_method_stereotypes(language: Language, class_simple_name: &str, methods: &mut [MethodModel]) {
    for method in methods {
        classify_method(language, class_simple_name, method);
    }
}

/// Same rule set applied to one already-extracted method — shared by the
/// per-class pass above and anywhere a single method needs (re)running.
pub fn classify_method(language: Language, class_simple_name: &str, m: &mut MethodModel) {
    let is_void_pointer = language != Language::Java && m.return_type_raw.replace(' ', "").contains("void*");
    let calls_on_data_members = m.method_calls.len();
    let calls_on_class_methods = m.function_calls.len();
    let calls_on_free_functions = m.num_external_function_calls;
    let calls_to_other_class_methods = m.num_external_method_calls;
    let fields_modified = m.num_fields_modified();
    let is_empty = m.non_comment_statement_count == 0;

    if m.is_constructor_or_destructor {
        if m.is_destructor {
            m.set_stereotype("destructor");
        } else if m.parameters.iter().any(|p| p.raw_type.contains(class_simple_name)) {
            m.set_stereotype("copy-constructor");
        } else {
            m.set_stereotype("constructor");
        }
        return;
    }

    if is_empty {
        m.set_stereotype("empty");
        return classify_unclassified(m);
    }

    // get
    if m.field_returned {
        m.set_stereotype("get");
    }

    // predicate
    let returns_bool = matches!(
        (language, m.return_type_parsed.as_str()),
        (Language::Cpp, "bool") | (Language::CSharp, "bool") | (Language::CSharp, "Boolean") | (Language::Java, "boolean")
    );
    if returns_bool && m.complex_return && (m.field_used || calls_on_class_methods > 0) {
        m.set_stereotype("predicate");
    }

    // property
    let return_not_void_or_bool = match language {
        Language::Cpp => {
            (!matches!(m.return_type_parsed.as_str(), "bool" | "void" | "")) || is_void_pointer
        }
        Language::CSharp => {
            (!matches!(m.return_type_parsed.as_str(), "bool" | "Boolean" | "void" | "Void" | "")) || is_void_pointer
        }
        Language::Java => !matches!(m.return_type_parsed.as_str(), "boolean" | "void" | "Void" | ""),
    };
    if return_not_void_or_bool && m.complex_return && (m.field_used || calls_on_class_methods > 0) {
        m.set_stereotype("property");
    }

    // void-accessor
    if m.parameter_ref_modified && m.return_type_parsed == "void" && !is_void_pointer && (m.field_used || calls_on_class_methods > 0) {
        m.set_stereotype("void-accessor");
    }

    // set
    if fields_modified == 1 && (calls_on_class_methods + calls_on_data_members) == 0 {
        m.set_stereotype("set");
    }

    // command / non-void-command
    let case1 = fields_modified > 1;
    let case2 = (fields_modified == 0 || fields_modified == 1) && (calls_on_class_methods > 0 || calls_on_data_members > 0);
    let is_mutable_const = m.is_const && case1;
    let is_non_void_return = !matches!(m.return_type_parsed.as_str(), "void" | "Void") && !is_void_pointer;
    if case1 || case2 {
        if !m.is_const || is_mutable_const {
            if is_non_void_return {
                m.set_stereotype("non-void-command");
            } else {
                m.set_stereotype("command");
            }
        }
    }

    // factory
    if m.non_primitive_return_type && (m.new_returned || m.fields_created_with_new_and_returned) {
        m.set_stereotype("factory");
    }

    // wrapper / controller / collaborator
    if fields_modified == 0 && calls_on_class_methods == 0 && calls_on_data_members == 0 && calls_to_other_class_methods == 0 && calls_on_free_functions > 0 {
        m.set_stereotype("wrapper");
    } else if fields_modified == 0
        && calls_on_class_methods == 0
        && calls_on_data_members == 0
        && (calls_to_other_class_methods > 0 || m.non_primitive_local_or_parameter_modified)
    {
        m.set_stereotype("controller");
    } else if m.non_primitive_field_external
        || m.non_primitive_local_external
        || m.non_primitive_parameter_external
        || m.non_primitive_return_type_external
        || is_void_pointer
    {
        m.set_stereotype("collaborator");
    }

    // incidental
    let no_calls = calls_on_class_methods == 0 && calls_on_data_members == 0 && m.constructor_calls.is_empty() && calls_to_other_class_methods == 0 && calls_on_free_functions == 0;
    if !m.field_used && no_calls {
        m.set_stereotype("incidental");
    }

    // stateless
    if !m.field_used
        && calls_on_class_methods == 0
        && calls_on_data_members == 0
        && (calls_on_free_functions > 0 || calls_to_other_class_methods > 0 || !m.constructor_calls.is_empty())
    {
        m.set_stereotype("stateless");
    }

    classify_unclassified(m);
}

fn classify_unclassified(m: &mut MethodModel) {
    if m.stereotypes.is_empty() {
        m.set_stereotype("unclassified");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::base::UnitId;
    use rstest::rstest;

    fn method(language: Language) -> MethodModel {
        let mut m = MethodModel::new(UnitId::new(0), "/unit/function", language);
        m.non_comment_statement_count = 1;
        m
    }

    #[rstest]
    #[case(true, false, "destructor")]
    #[case(false, true, "copy-constructor")]
    #[case(false, false, "constructor")]
    fn constructor_family_picks_the_right_label(#[case] is_destructor: bool, #[case] copy_param: bool, #[case] expected: &str) {
        let mut m = method(Language::Cpp);
        m.is_constructor_or_destructor = true;
        m.is_destructor = is_destructor;
        if copy_param {
            let p = crate::model::Variable::new(crate::base::Interner::new().intern("other"), "const Engine &", "Engine");
            m.parameters.push(p);
        }
        classify_method(Language::Cpp, "Engine", &mut m);
        assert_eq!(m.stereotype_string(), expected);
    }

    #[test]
    fn simple_field_return_is_a_getter() {
        let mut m = method(Language::Cpp);
        m.field_returned = true;
        classify_method(Language::Cpp, "Engine", &mut m);
        assert!(m.stereotypes.contains(&"get".to_string()));
    }

    #[test]
    fn single_field_modification_with_no_calls_is_a_setter() {
        let mut m = method(Language::Java);
        m.modified_fields.insert(crate::base::Interner::new().intern("speed"));
        classify_method(Language::Java, "Car", &mut m);
        assert!(m.stereotypes.contains(&"set".to_string()));
    }

    #[test]
    fn empty_method_short_circuits_to_empty() {
        let mut m = MethodModel::new(UnitId::new(0), "/unit/function", Language::Cpp);
        classify_method(Language::Cpp, "Engine", &mut m);
        assert_eq!(m.stereotype_string(), "empty");
    }

    #[test]
    fn destructor_is_tagged_before_the_general_rules_run() {
        let mut m = method(Language::Cpp);
        m.is_constructor_or_destructor = true;
        m.is_destructor = true;
        classify_method(Language::Cpp, "Engine", &mut m);
        assert_eq!(m.stereotype_string(), "destructor");
    }

    #[test]
    fn no_matching_rule_is_unclassified() {
        let mut m = method(Language::Cpp);
        m.return_type_parsed = "void".to_string();
        classify_method(Language::Cpp, "Engine", &mut m);
        assert!(m.stereotypes.contains(&"incidental".to_string()));
    }
}
