//! Call filtering (C6, §4.6): classifies every retained call as on-field,
//! sibling-method, or external, dropping external calls while counting
//! them, so the rule engine only ever sees `ccm`/`ccf` (§4.8).
//!
//! Runs after extraction (ignorable calls already dropped) and after
//! inheritance resolution (method signatures are the closed-over set).

use indexmap::{IndexMap, IndexSet};

use crate::base::Name;
use crate::exprrule::{resolve_expression, ExprMode, Resolution};
use crate::model::{Call, ClassCollection, MethodModel, Variable};
use crate::tree::Language;

/// Filter every class's methods and every free function in place.
pub fn filter_calls(collection: &mut ClassCollection) {
    let free_function_signatures: IndexSet<String> = collection.free_functions.iter().map(|f| f.name_signature.clone()).collect();

    let class_names: Vec<Name> = collection.classes.keys().cloned().collect();
    for name in class_names {
        let (fields, method_signatures) = {
            let class = &collection.classes[&name];
            (class.fields.clone(), class.method_signatures.clone())
        };
        if let Some(class) = collection.classes.get_mut(&name) {
            for method in &mut class.methods {
                filter_method(method, &fields, &method_signatures);
            }
        }
    }

    let empty_fields = IndexMap::new();
    for function in &mut collection.free_functions {
        filter_method(function, &empty_fields, &free_function_signatures);
    }
}

fn filter_method(method: &mut MethodModel, fields: &IndexMap<Name, Variable>, sibling_signatures: &IndexSet<String>) {
    let lang = method.language;

    let unreceived_calls = std::mem::take(&mut method.function_calls);
    let mut sibling_calls = Vec::new();
    for call in unreceived_calls {
        if sibling_signatures.contains(&call.signature) {
            sibling_calls.push(call);
        } else {
            method.num_external_function_calls += 1;
        }
    }

    let received_calls = std::mem::take(&mut method.method_calls);
    let mut on_field_calls = Vec::new();
    for call in received_calls {
        classify_received_call(call, lang, method, fields, sibling_signatures, &mut sibling_calls, &mut on_field_calls);
    }

    method.function_calls = sibling_calls;
    method.method_calls = on_field_calls;
}

fn classify_received_call(
    call: Call,
    lang: Language,
    method: &mut MethodModel,
    fields: &IndexMap<Name, Variable>,
    sibling_signatures: &IndexSet<String>,
    sibling_calls: &mut Vec<Call>,
    on_field_calls: &mut Vec<Call>,
) {
    let effects = resolve_expression(&call.callee, lang, ExprMode::Use, &method.locals, &method.parameters, fields, &method.new_assigned_vars);
    match effects.resolution {
        Resolution::Field(_) => on_field_calls.push(call),
        Resolution::Parameter(_, _) | Resolution::Local(_) => {
            method.num_external_method_calls += 1;
        }
        Resolution::None => {
            // A self-qualified receiver (this->/this./base./super.) is a
            // function call in disguise and goes through the same
            // sibling-signature check as any other unreceived call; any
            // other unknown/static receiver (e.g. a class name used to
            // reach a static method) is unconditionally external. Either
            // way a non-matching case lands in ecf, not ecm — this is a
            // call with no receiver variable, not a call on one.
            if is_self_receiver(&call.callee, lang) && sibling_signatures.contains(&call.signature) {
                sibling_calls.push(call);
            } else {
                method.num_external_function_calls += 1;
            }
        }
    }
}

/// True if a method call is explicitly qualified with `this`/`base`/
/// `super` — written as a sibling call rather than left unqualified.
fn is_self_receiver(callee: &str, lang: Language) -> bool {
    let t = callee.trim();
    match lang {
        Language::Cpp => t.starts_with("this->") || t.starts_with("(*this)."),
        Language::CSharp => t.starts_with("this.") || t.starts_with("base."),
        Language::Java => t.starts_with("this.") || t.starts_with("super."),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::base::{Interner, UnitId};
    use crate::model::{ClassKind, ClassModel};

    fn method(name_sig: &str, lang: Language) -> MethodModel {
        let mut m = MethodModel::new(UnitId::new(0), "/unit/function", lang);
        m.name_signature = name_sig.to_string();
        m
    }

    #[test]
    fn call_on_a_field_survives_as_on_field() {
        let mut interner = Interner::new();
        let mut collection = ClassCollection::new();
        let mut class = ClassModel::new(Language::Cpp, ClassKind::Class, "Car");
        let engine = interner.intern("engine");
        class.fields.insert(engine.clone(), Variable::new(engine, "Engine", "Engine"));

        let mut m = method("drive()", Language::Cpp);
        m.method_calls.push(Call::new("this->engine.start", "()"));
        class.methods.push(m);
        collection.classes.insert(interner.intern("Car"), class);

        filter_calls(&mut collection);

        let car = &collection.classes[&interner.intern("Car")];
        assert_eq!(car.methods[0].method_calls.len(), 1);
        assert_eq!(car.methods[0].num_external_method_calls, 0);
    }

    #[test]
    fn self_qualified_call_with_no_matching_sibling_is_an_external_function_call() {
        let mut interner = Interner::new();
        let mut collection = ClassCollection::new();
        let class = ClassModel::new(Language::Java, ClassKind::Class, "Widget");

        let mut m = method("render()", Language::Java);
        m.method_calls.push(Call::new("this.missing", "()"));
        let mut class = class;
        class.methods.push(m);
        collection.classes.insert(interner.intern("Widget"), class);

        filter_calls(&mut collection);

        let widget = &collection.classes[&interner.intern("Widget")];
        assert!(widget.methods[0].method_calls.is_empty());
        assert_eq!(widget.methods[0].num_external_method_calls, 0);
        assert_eq!(widget.methods[0].num_external_function_calls, 1);
    }

    #[test]
    fn unqualified_unresolved_receiver_is_an_external_function_call() {
        let mut interner = Interner::new();
        let mut collection = ClassCollection::new();
        let class = ClassModel::new(Language::Java, ClassKind::Class, "Widget");

        let mut m = method("render()", Language::Java);
        m.method_calls.push(Call::new("Utility.parse", "(x)"));
        let mut class = class;
        class.methods.push(m);
        collection.classes.insert(interner.intern("Widget"), class);

        filter_calls(&mut collection);

        let widget = &collection.classes[&interner.intern("Widget")];
        assert!(widget.methods[0].method_calls.is_empty());
        assert_eq!(widget.methods[0].num_external_method_calls, 0);
        assert_eq!(widget.methods[0].num_external_function_calls, 1);
    }

    #[test]
    fn call_on_a_parameter_counts_as_external() {
        let mut interner = Interner::new();
        let mut collection = ClassCollection::new();
        let mut class = ClassModel::new(Language::Java, ClassKind::Class, "Widget");

        let mut m = method("render()", Language::Java);
        m.parameters.push(Variable::new(interner.intern("canvas"), "Canvas", "Canvas").with_index(0));
        m.method_calls.push(Call::new("canvas.draw", "()"));
        class.methods.push(m);
        collection.classes.insert(interner.intern("Widget"), class);

        filter_calls(&mut collection);

        let widget = &collection.classes[&interner.intern("Widget")];
        assert!(widget.methods[0].method_calls.is_empty());
        assert_eq!(widget.methods[0].num_external_method_calls, 1);
    }

    #[test]
    fn unreceived_call_matching_a_sibling_signature_is_kept() {
        let mut interner = Interner::new();
        let mut collection = ClassCollection::new();
        let mut class = ClassModel::new(Language::Cpp, ClassKind::Class, "Car");
        class.method_signatures.insert("start()".to_string());

        let mut m = method("drive()", Language::Cpp);
        m.function_calls.push(Call::new("start", "()"));
        class.methods.push(m);
        collection.classes.insert(interner.intern("Car"), class);

        filter_calls(&mut collection);

        let car = &collection.classes[&interner.intern("Car")];
        assert_eq!(car.methods[0].function_calls.len(), 1);
        assert_eq!(car.methods[0].num_external_function_calls, 0);
    }

    #[test]
    fn unreceived_call_with_no_matching_signature_is_external() {
        let mut interner = Interner::new();
        let mut collection = ClassCollection::new();
        let class = ClassModel::new(Language::Cpp, ClassKind::Class, "Car");

        let mut m = method("drive()", Language::Cpp);
        m.function_calls.push(Call::new("printf", "(\"hi\")"));
        let mut class = class;
        class.methods.push(m);
        collection.classes.insert(interner.intern("Car"), class);

        filter_calls(&mut collection);

        let car = &collection.classes[&interner.intern("Car")];
        assert!(car.methods[0].function_calls.is_empty());
        assert_eq!(car.methods[0].num_external_function_calls, 1);
    }
}
