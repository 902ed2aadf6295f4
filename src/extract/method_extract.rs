//! Per-method extraction (§4.3): the fourteen-step pipeline that turns one
//! method/constructor/destructor/free-function node into a [`MethodModel`].

use indexmap::IndexMap;
use rustc_hash::FxHashSet;

use crate::base::{Interner, Name, UnitId};
use crate::exprrule::{is_simple_reference, resolve_expression, ExprMode, Resolution};
use crate::extract::ExtractionContext;
use crate::model::{Call, MethodModel, Variable};
use crate::tree::{Language, NodeId, QueryName};

/// Extract one method's fragment. `fields` is the enclosing class's own
/// field table (empty for a free function); `owner_class_name` is the
/// simple name used for the non-primitive-external test (§4.2), `None`
/// for a free function.
pub fn extract_method(
    ctx: &ExtractionContext,
    unit: UnitId,
    node: NodeId,
    lang: Language,
    interner: &mut Interner,
    owner_class_name: Option<&str>,
    fields: &IndexMap<Name, Variable>,
    is_constructor_or_destructor: bool,
) -> MethodModel {
    let xpath = ctx.archive.xpath(unit, node);
    let mut m = MethodModel::new(unit, xpath, lang);
    m.is_constructor_or_destructor = is_constructor_or_destructor;

    // Step 1/2: name, parameter list, arity signature.
    let raw_name = query_text(ctx, unit, node, lang, QueryName::MethodName).unwrap_or_default();
    let param_list_text = query_text(ctx, unit, node, lang, QueryName::ParameterList).unwrap_or_default();
    m.name = raw_name.clone();
    m.name_signature = Call::new(raw_name.clone(), param_list_text.clone()).signature;
    if is_constructor_or_destructor {
        m.is_destructor = raw_name.trim_start().starts_with('~');
    }

    // Step 3: const specifier (CPP only; empty query elsewhere).
    m.is_const = !query_texts(ctx, unit, node, lang, QueryName::ConstSpecifier).is_empty();

    // Step 4: return type, classified against the owning class.
    if !is_constructor_or_destructor {
        let raw_return = query_text(ctx, unit, node, lang, QueryName::MethodReturnType).unwrap_or_default();
        m.return_type_parsed = ctx.classifier.strip_modifiers(&raw_return, lang);
        let classification = ctx.classifier.classify_non_primitive(&raw_return, lang, owner_class_name);
        m.non_primitive_return_type = classification.non_primitive;
        m.non_primitive_return_type_external = classification.non_primitive_external;
        m.return_type_raw = raw_return;
    }

    // Step 5: parameters, positionally paired with their types.
    let param_names = query_texts(ctx, unit, node, lang, QueryName::ParameterName);
    let param_types = query_texts(ctx, unit, node, lang, QueryName::ParameterType);
    for (idx, (name, ty)) in param_names.into_iter().zip(param_types).enumerate() {
        let stripped_name = strip_array_suffix(&name);
        let parsed_type = ctx.classifier.strip_modifiers(&ty, lang);
        let classification = ctx.classifier.classify_non_primitive(&ty, lang, owner_class_name);
        let mut var = Variable::new(interner.intern(&stripped_name), ty, parsed_type).with_index(idx);
        var.non_primitive = classification.non_primitive;
        var.non_primitive_external = classification.non_primitive_external;
        m.parameters.push(var);
    }

    // Step 6: locals. A blank type means "same declared type as the
    // previous declarator in this statement" (e.g. `int a, b;`).
    let local_names = query_texts(ctx, unit, node, lang, QueryName::LocalVariableName);
    let local_types = query_texts(ctx, unit, node, lang, QueryName::LocalVariableType);
    let mut previous_type = String::new();
    for (name, ty) in local_names.into_iter().zip(local_types) {
        let effective_type = if ty.trim().is_empty() { previous_type.clone() } else { ty };
        previous_type = effective_type.clone();
        let stripped_name = strip_array_suffix(&name);
        let parsed_type = ctx.classifier.strip_modifiers(&effective_type, lang);
        let classification = ctx.classifier.classify_non_primitive(&effective_type, lang, owner_class_name);
        let mut var = Variable::new(interner.intern(&stripped_name), effective_type, parsed_type);
        var.non_primitive = classification.non_primitive;
        var.non_primitive_external = classification.non_primitive_external;
        m.locals.push(var);
    }

    // Step 7: return expressions; a `new` initializer on the return
    // expression itself is a direct return of a freshly created object.
    m.return_expressions = query_texts(ctx, unit, node, lang, QueryName::ReturnExpression);
    for expr in &m.return_expressions {
        if expr.trim_start().starts_with("new ") || expr.trim_start().starts_with("new(") {
            m.new_returned = true;
        }
    }

    // Step 8: calls, one list per flavor, signature built at the same time.
    m.function_calls = zip_calls(ctx, unit, node, lang, QueryName::FunctionCallName, QueryName::FunctionCallArgList);
    m.method_calls = zip_calls(ctx, unit, node, lang, QueryName::MethodCallName, QueryName::MethodCallArgList);
    m.constructor_calls = zip_calls(ctx, unit, node, lang, QueryName::ConstructorCallName, QueryName::ConstructorCallArgList);

    // Step 9: variables whose initializer is `new ...`.
    m.new_assigned_vars = query_texts(ctx, unit, node, lang, QueryName::NewAssignName)
        .into_iter()
        .map(|n| interner.intern(&n))
        .collect();

    // Step 10: drop calls to configured ignorable functions (logging,
    // assertions, and the like) before any later pass counts them.
    m.function_calls.retain(|c| !ctx.classifier.is_ignored_call(&c.callee, lang));
    m.method_calls.retain(|c| !ctx.classifier.is_ignored_call(&c.callee, lang));

    // Step 11: returned variables (§4.7, mode = Return).
    for expr in &m.return_expressions {
        let effects = resolve_expression(expr, lang, ExprMode::Return, &m.locals, &m.parameters, fields, &m.new_assigned_vars);
        let simple = is_simple_reference(expr, lang);
        match (simple, &effects.resolution) {
            (true, Resolution::Field(_)) => m.field_returned = true,
            _ => m.complex_return = true,
        }
        if !(simple && matches!(effects.resolution, Resolution::Parameter(_, _))) {
            m.parameter_not_returned = true;
        }
        if simple && matches!(effects.resolution, Resolution::Field(_)) && effects.created_with_new {
            m.fields_created_with_new_and_returned = true;
        }
    }

    // Step 12: every plain name reference in an expression (§4.7, mode = Use).
    for expr in query_texts(ctx, unit, node, lang, QueryName::ExpressionName) {
        let effects = resolve_expression(&expr, lang, ExprMode::Use, &m.locals, &m.parameters, fields, &m.new_assigned_vars);
        match &effects.resolution {
            Resolution::Field(name) => {
                m.field_used = true;
                if fields.get(name).is_some_and(|v| v.non_primitive_external) {
                    m.non_primitive_field_external = true;
                }
            }
            Resolution::Parameter(name, _) => {
                m.parameter_used = true;
                if m.parameters.iter().any(|v| &v.name == name && v.non_primitive_external) {
                    m.non_primitive_parameter_external = true;
                }
            }
            Resolution::Local(name) => {
                if m.locals.iter().any(|v| &v.name == name && v.non_primitive_external) {
                    m.non_primitive_local_external = true;
                }
            }
            Resolution::None => {}
        }
    }

    // Step 13: names that are assigned to or incremented/decremented
    // (§4.7, mode = Modify).
    for expr in query_texts(ctx, unit, node, lang, QueryName::ExpressionNameModified) {
        let effects = resolve_expression(&expr, lang, ExprMode::Modify, &m.locals, &m.parameters, fields, &m.new_assigned_vars);
        match effects.resolution {
            Resolution::Field(name) => {
                m.modified_fields.insert(name);
            }
            Resolution::Parameter(name, _) => {
                if effects.is_reference_modification {
                    m.parameter_ref_modified = true;
                }
                if m.parameters.iter().any(|v| v.name == name && v.non_primitive) {
                    m.non_primitive_local_or_parameter_modified = true;
                }
            }
            Resolution::Local(name) => {
                if m.locals.iter().any(|v| v.name == name && v.non_primitive) {
                    m.non_primitive_local_or_parameter_modified = true;
                }
            }
            Resolution::None => {
                m.global_or_static_modified = true;
            }
        }
    }

    // Step 14: non-comment statement count, used by the class-level
    // lazy-class rule (§4.8).
    m.non_comment_statement_count = query_texts(ctx, unit, node, lang, QueryName::NonCommentStatement).len();

    m
}

fn zip_calls(
    ctx: &ExtractionContext,
    unit: UnitId,
    node: NodeId,
    lang: Language,
    name_query: QueryName,
    args_query: QueryName,
) -> Vec<Call> {
    let names = query_texts(ctx, unit, node, lang, name_query);
    let args = query_texts(ctx, unit, node, lang, args_query);
    names.into_iter().zip(args).map(|(callee, arguments)| Call::new(callee, arguments)).collect()
}

fn query_texts(ctx: &ExtractionContext, unit: UnitId, node: NodeId, lang: Language, q: QueryName) -> Vec<String> {
    match ctx.queries.get(lang, q) {
        Some(expr) if !expr.as_str().is_empty() => ctx
            .archive
            .query_from(unit, node, expr)
            .into_iter()
            .map(|n| ctx.archive.text(unit, n))
            .collect(),
        _ => Vec::new(),
    }
}

fn query_text(ctx: &ExtractionContext, unit: UnitId, node: NodeId, lang: Language, q: QueryName) -> Option<String> {
    query_texts(ctx, unit, node, lang, q).into_iter().next()
}

/// CPP/CSH allow a trailing `[]` directly on a declarator name rather than
/// on its type (`int values[]`); the name is stored without it.
fn strip_array_suffix(name: &str) -> String {
    name.trim_end_matches("[]").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::TypeClassifier;
    use crate::tree::{ParseArchive, PathExpr, PathQueries};

    /// An archive with no nodes anywhere; every query comes back empty.
    struct EmptyArchive;

    impl ParseArchive for EmptyArchive {
        fn units(&self) -> Vec<UnitId> {
            vec![UnitId::new(0)]
        }
        fn language(&self, _unit: UnitId) -> Language {
            Language::Cpp
        }
        fn query(&self, _unit: UnitId, _expr: &PathExpr) -> Vec<NodeId> {
            Vec::new()
        }
        fn query_from(&self, _unit: UnitId, _root: NodeId, _expr: &PathExpr) -> Vec<NodeId> {
            Vec::new()
        }
        fn text(&self, _unit: UnitId, _node: NodeId) -> String {
            String::new()
        }
        fn xpath(&self, _unit: UnitId, _node: NodeId) -> String {
            "/unit/function".to_string()
        }
    }

    #[test]
    fn returns_a_method_with_no_children_when_archive_is_empty() {
        let queries = PathQueries::build();
        let classifier = TypeClassifier::new();
        let archive = EmptyArchive;
        let ctx = ExtractionContext {
            archive: &archive,
            queries: &queries,
            classifier: &classifier,
        };
        let mut interner = Interner::new();
        let fields = IndexMap::new();
        let m = extract_method(&ctx, UnitId::new(0), NodeId::new(0), Language::Cpp, &mut interner, None, &fields, false);
        assert!(m.parameters.is_empty());
        assert!(m.return_expressions.is_empty());
        assert_eq!(m.name, "");
    }

    #[test]
    fn strip_array_suffix_drops_trailing_brackets() {
        assert_eq!(strip_array_suffix("values[]"), "values");
        assert_eq!(strip_array_suffix("count"), "count");
    }
}
