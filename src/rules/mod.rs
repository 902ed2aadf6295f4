//! Stereotype rule engine (C7, §4.8): method rules first (class rules
//! tally them), then class rules, then free-function rules. Order
//! matters — class stereotypes read each method's already-assigned
//! labels.

mod class;
mod free_function;
mod method;

pub use class::compute_class_stereotypes;
pub use free_function::{classify_free_function, compute_free_function_stereotypes};
pub use method::{classify_method, compute_method_stereotypes};

use crate::config::Config;
use crate::model::ClassCollection;

/// Run every rule over a fully extracted, resolved, and filtered
/// collection (§4.8's three passes, in order).
pub fn compute_all_stereotypes(collection: &mut ClassCollection, config: &Config) {
    for class in collection.classes.values_mut() {
        let simple_name = class.name_no_namespace_generic.clone();
        compute_method_stereotypes(class.language, &simple_name, &mut class.methods);
        compute_class_stereotypes(class, config);
    }

    // Free functions are grouped by language only incidentally (every
    // collection is single-language per producer in practice, but the
    // model doesn't assume that).
    for function in &mut collection.free_functions {
        classify_free_function(function.language, function);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::base::{Interner, UnitId};
    use crate::model::{ClassModel, MethodModel};
    use crate::tree::Language;

    #[test]
    fn class_pass_sees_method_stereotypes_already_assigned() {
        let mut interner = Interner::new();
        let mut collection = ClassCollection::new();
        let mut class = ClassModel::new(Language::Java, crate::model::ClassKind::Class, "Point");

        let x = interner.intern("x");
        class.fields.insert(x, crate::model::Variable::new(interner.intern("x"), "int", "int"));

        let mut getter = MethodModel::new(UnitId::new(0), "/unit/function", Language::Java);
        getter.non_comment_statement_count = 1;
        getter.field_returned = true;
        class.methods.push(getter);

        let mut setter = MethodModel::new(UnitId::new(0), "/unit/function", Language::Java);
        setter.non_comment_statement_count = 1;
        setter.modified_fields.insert(interner.intern("x"));
        class.methods.push(setter);

        collection.classes.insert(interner.intern("Point"), class);

        compute_all_stereotypes(&mut collection, &Config::new());

        let point = &collection.classes[&interner.intern("Point")];
        assert!(point.methods[0].stereotypes.contains(&"get".to_string()));
        assert!(point.methods[1].stereotypes.contains(&"set".to_string()));
        assert!(point.stereotypes.contains(&"data-class".to_string()));
    }
}
