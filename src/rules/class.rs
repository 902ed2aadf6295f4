//! Per-class stereotype rules (§4.8), derived from the tallied
//! stereotypes of a class's own (non-constructor/destructor) methods.
//! Several rules are ratios over these tallies; a class with zero
//! eligible methods never satisfies a ratio rule, mirroring what the
//! original divide-by-zero (`inf`/`NaN`) arithmetic actually produces.

use crate::config::Config;
use crate::model::ClassModel;

#[derive(Debug, Clone, Copy, Default)]
struct Tally {
    getters: usize,
    accessors: usize,
    setters: usize,
    commands: usize,
    mutators: usize,
    controllers: usize,
    collaborator: usize,
    collaborators: usize,
    factory: usize,
    degenerates: usize,
    all_methods: usize,
    non_collaborators: usize,
}

fn count_label(class: &ClassModel, label: &str) -> usize {
    class
        .methods
        .iter()
        .filter(|m| !m.is_constructor_or_destructor)
        .filter(|m| m.stereotypes.iter().any(|s| s == label))
        .count()
}

fn tally(class: &ClassModel) -> Tally {
    let getters = count_label(class, "get");
    let predicate = count_label(class, "predicate");
    let property = count_label(class, "property");
    let void_accessor = count_label(class, "void-accessor");
    let setters = count_label(class, "set");
    let command = count_label(class, "command");
    let non_void_command = count_label(class, "non-void-command");
    let controllers = count_label(class, "controller");
    let collaborator_label = count_label(class, "collaborator");
    let wrapper = count_label(class, "wrapper");
    let factory = count_label(class, "factory");
    let incidental = count_label(class, "incidental");
    let stateless = count_label(class, "stateless");
    let empty = count_label(class, "empty");

    let accessors = getters + predicate + property + void_accessor;
    let commands = command + non_void_command;
    let mutators = setters + commands;
    let collaborator = collaborator_label + wrapper;
    let collaborators = controllers + collaborator;
    let degenerates = incidental + stateless + empty;

    let non_collaborators = class
        .methods
        .iter()
        .filter(|m| !m.is_constructor_or_destructor)
        .filter(|m| !m.stereotypes.iter().any(|s| s == "collaborator" || s == "controller" || s == "wrapper"))
        .count();

    Tally {
        getters,
        accessors,
        setters,
        commands,
        mutators,
        controllers,
        collaborator,
        collaborators,
        factory,
        degenerates,
        all_methods: class.non_constructor_method_count(),
        non_collaborators,
    }
}

/// `numerator / denominator >= threshold`, with the same outcome IEEE-754
/// division by zero would give: a positive numerator over a zero
/// denominator is treated as infinite (satisfies any `>=`), and `0 / 0`
/// never satisfies it.
fn ratio_at_least(numerator: usize, denominator: usize, threshold: f64) -> bool {
    if denominator == 0 {
        numerator > 0
    } else {
        (numerator as f64 / denominator as f64) >= threshold
    }
}

/// `numerator / denominator > threshold`, with a zero denominator always
/// failing — every numerator in these rules is itself bounded by the
/// denominator, so `denominator == 0` implies `numerator == 0` too.
fn ratio_greater(numerator: usize, denominator: usize, threshold: f64) -> bool {
    denominator != 0 && (numerator as f64 / denominator as f64) > threshold
}

/// Run every class rule for one class, using its own methods' already
/// computed stereotypes. Constructors/destructors are excluded from every
/// tally (§4.8 note).
pub fn compute_class_stereotypes(class: &mut ClassModel, config: &Config) {
    let t = tally(class);

    // entity
    if (t.accessors - t.getters) != 0 && (t.mutators - t.setters) != 0 {
        if ratio_at_least(t.collaborators, t.non_collaborators, 2.0) && t.controllers == 0 {
            class.set_stereotype("entity");
        }
    }

    // minimal-entity
    if (t.all_methods - (t.getters + t.setters + t.commands)) == 0 && t.getters != 0 && t.setters != 0 && t.commands != 0 {
        if ratio_at_least(t.collaborators, t.non_collaborators, 2.0) {
            class.set_stereotype("minimal-entity");
        }
    }

    // data-provider
    if (t.accessors as f64) > 2.0 * t.mutators as f64 && (t.accessors as f64) > 2.0 * (t.controllers + t.factory) as f64 {
        class.set_stereotype("data-provider");
    }

    // commander
    if (t.mutators as f64) > 2.0 * t.accessors as f64 && (t.mutators as f64) > 2.0 * (t.controllers + t.factory) as f64 {
        class.set_stereotype("commander");
    }

    // boundary
    if t.collaborators > t.non_collaborators
        && (t.factory as f64) < 0.5 * t.all_methods as f64
        && (t.controllers as f64) < 0.33 * t.all_methods as f64
    {
        class.set_stereotype("boundary");
    }

    // factory
    if (t.factory as f64) > 0.67 * t.all_methods as f64 {
        class.set_stereotype("factory");
    }

    // controller
    if (t.controllers + t.factory) as f64 > 0.67 * t.all_methods as f64 && (t.accessors != 0 || t.mutators != 0) {
        class.set_stereotype("controller");
    }

    // pure-controller
    if (t.controllers + t.factory) != 0 && (t.accessors + t.mutators + t.collaborator) == 0 && t.controllers != 0 {
        class.set_stereotype("pure-controller");
    }

    // large-class
    {
        let acc_plus_mut = t.accessors + t.mutators;
        let fac_plus_con = t.controllers + t.factory;
        let all = t.all_methods as f64;
        if (0.2 * all < acc_plus_mut as f64)
            && ((acc_plus_mut as f64) < 0.67 * all)
            && (0.2 * all < fac_plus_con as f64)
            && ((fac_plus_con as f64) < 0.67 * all)
            && t.factory != 0
            && t.controllers != 0
            && t.accessors != 0
            && t.mutators != 0
            && t.all_methods > config.large_class_threshold
        {
            class.set_stereotype("large-class");
        }
    }

    // lazy-class
    if (t.getters + t.setters) != 0
        && ratio_greater(t.degenerates, t.all_methods, 0.33)
        && !ratio_greater(t.all_methods - (t.degenerates + t.getters + t.setters), t.all_methods, 0.2)
    {
        class.set_stereotype("lazy-class");
    }

    // degenerate
    if ratio_greater(t.degenerates, t.all_methods, 0.5) {
        class.set_stereotype("degenerate");
    }

    // data-class
    if (t.all_methods - (t.getters + t.setters)) == 0 && (t.getters + t.setters) != 0 {
        class.set_stereotype("data-class");
    }

    // small-class
    if t.all_methods > 0 && t.all_methods < 3 {
        class.set_stereotype("small-class");
    }

    // empty (considered degenerate)
    if t.all_methods == 0 {
        class.set_stereotype("empty");
    }

    if class.stereotypes.is_empty() {
        class.set_stereotype("unclassified");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::base::UnitId;
    use crate::model::{ClassKind, MethodModel};
    use crate::tree::Language;

    fn method_with_stereotype(label: &str) -> MethodModel {
        let mut m = MethodModel::new(UnitId::new(0), "/unit/function", Language::Cpp);
        m.non_comment_statement_count = 1;
        m.set_stereotype(label);
        m
    }

    #[test]
    fn class_with_only_getters_and_setters_is_a_data_class() {
        let mut class = ClassModel::new(Language::Cpp, ClassKind::Class, "Point");
        class.methods.push(method_with_stereotype("get"));
        class.methods.push(method_with_stereotype("get"));
        class.methods.push(method_with_stereotype("set"));
        let config = Config::new();
        compute_class_stereotypes(&mut class, &config);
        assert!(class.stereotypes.contains(&"data-class".to_string()));
    }

    #[test]
    fn class_with_no_methods_is_empty() {
        let mut class = ClassModel::new(Language::Cpp, ClassKind::Class, "Marker");
        let config = Config::new();
        compute_class_stereotypes(&mut class, &config);
        assert_eq!(class.stereotype_string(), "empty");
    }

    #[test]
    fn class_dominated_by_degenerate_methods_is_degenerate() {
        let mut class = ClassModel::new(Language::Cpp, ClassKind::Class, "Stub");
        for _ in 0..4 {
            class.methods.push(method_with_stereotype("incidental"));
        }
        class.methods.push(method_with_stereotype("get"));
        let config = Config::new();
        compute_class_stereotypes(&mut class, &config);
        assert!(class.stereotypes.contains(&"degenerate".to_string()));
    }

    #[test]
    fn class_with_no_eligible_methods_never_satisfies_a_ratio_rule() {
        // allMethods == 0 after excluding constructors; none of the ratio
        // rules should divide by zero and spuriously fire.
        let mut class = ClassModel::new(Language::Cpp, ClassKind::Class, "OnlyCtor");
        let mut ctor = MethodModel::new(UnitId::new(0), "/unit/function", Language::Cpp);
        ctor.is_constructor_or_destructor = true;
        class.constructor_destructor_count = 1;
        class.methods.push(ctor);
        let config = Config::new();
        compute_class_stereotypes(&mut class, &config);
        assert_eq!(class.stereotype_string(), "empty");
    }
}
