use rustc_hash::FxHashSet;

use crate::base::{Name, UnitId};
use crate::model::{Call, Variable};
use crate::tree::Language;

/// All per-method extracted facts (§3 "MethodModel").
///
/// Populated by the extraction pipeline (§4.3), then closed over by the
/// call filter (§4.6), and finally consumed (read-only) by the rule
/// engine (§4.8) and the annotation stage (§4.9).
#[derive(Debug, Clone)]
pub struct MethodModel {
    pub unit: UnitId,
    pub xpath: String,
    pub language: Language,

    pub name: String,
    /// `name-without-namespace(,,)` — arity-only signature (§9).
    pub name_signature: String,

    pub return_type_raw: String,
    pub return_type_parsed: String,
    pub non_primitive_return_type: bool,
    pub non_primitive_return_type_external: bool,

    /// CPP only.
    pub is_const: bool,
    pub is_constructor_or_destructor: bool,
    pub is_destructor: bool,

    pub parameters: Vec<Variable>,
    pub locals: Vec<Variable>,

    pub return_expressions: Vec<String>,

    pub function_calls: Vec<Call>,
    pub method_calls: Vec<Call>,
    pub constructor_calls: Vec<Call>,

    /// Names of variables whose initializer is a `new` expression
    /// (§4.3 step 9).
    pub new_assigned_vars: FxHashSet<Name>,

    pub non_comment_statement_count: usize,

    /// Distinct field names resolved by the modify-rule (§4.3 step 13).
    /// Kept (not just the scalar count) so the "counting invariant"
    /// property (§8) can be checked directly against this set.
    pub modified_fields: FxHashSet<Name>,

    pub num_external_function_calls: usize,
    pub num_external_method_calls: usize,

    pub field_returned: bool,
    pub complex_return: bool,
    pub parameter_not_returned: bool,
    pub parameter_used: bool,
    pub field_used: bool,
    pub parameter_ref_modified: bool,
    pub global_or_static_modified: bool,
    pub new_returned: bool,
    pub fields_created_with_new_and_returned: bool,
    pub non_primitive_local_or_parameter_modified: bool,

    pub non_primitive_field_external: bool,
    pub non_primitive_local_external: bool,
    pub non_primitive_parameter_external: bool,

    pub stereotypes: Vec<String>,
}

impl MethodModel {
    pub fn new(unit: UnitId, xpath: impl Into<String>, language: Language) -> Self {
        Self {
            unit,
            xpath: xpath.into(),
            language,
            name: String::new(),
            name_signature: String::new(),
            return_type_raw: String::new(),
            return_type_parsed: String::new(),
            non_primitive_return_type: false,
            non_primitive_return_type_external: false,
            is_const: false,
            is_constructor_or_destructor: false,
            is_destructor: false,
            parameters: Vec::new(),
            locals: Vec::new(),
            return_expressions: Vec::new(),
            function_calls: Vec::new(),
            method_calls: Vec::new(),
            constructor_calls: Vec::new(),
            new_assigned_vars: FxHashSet::default(),
            non_comment_statement_count: 0,
            modified_fields: FxHashSet::default(),
            num_external_function_calls: 0,
            num_external_method_calls: 0,
            field_returned: false,
            complex_return: false,
            parameter_not_returned: false,
            parameter_used: false,
            field_used: false,
            parameter_ref_modified: false,
            global_or_static_modified: false,
            new_returned: false,
            fields_created_with_new_and_returned: false,
            non_primitive_local_or_parameter_modified: false,
            non_primitive_field_external: false,
            non_primitive_local_external: false,
            non_primitive_parameter_external: false,
            stereotypes: Vec::new(),
        }
    }

    /// Number of distinct fields modified (invariant in §3/§8).
    pub fn num_fields_modified(&self) -> usize {
        self.modified_fields.len()
    }

    /// Calls retained on the class's own fields/sibling methods after the
    /// call filter has run (§4.6): `ccm` in the rule table (§4.8).
    pub fn calls_on_fields(&self) -> usize {
        self.method_calls.len()
    }

    /// `ccf` in the rule table — calls to sibling (free-function-shaped)
    /// methods retained after filtering.
    pub fn calls_to_sibling_methods(&self) -> usize {
        self.function_calls.len()
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
