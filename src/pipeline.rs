//! Orchestration: wires C1-C9 into the one entry point §2's data-flow
//! paragraph describes — extract, resolve, filter, classify (methods
//! then classes then free functions), annotate. Report generation is a
//! separate, optional step the caller invokes on the result (§6: report
//! emission is auxiliary, not part of the core data flow).

use crate::annotate::{self, AnnotationPlan};
use crate::callfilter;
use crate::classify::TypeClassifier;
use crate::config::Config;
use crate::extract;
use crate::model::ClassCollection;
use crate::report::{self, VerboseReport};
use crate::resolve;
use crate::rules;
use crate::tree::{ParseArchive, PathQueries};

/// Everything one analysis run produces: the fully classified class
/// collection and the annotation plan built from it. Report text is
/// derived from this on demand rather than stored, since not every
/// caller wants every format (§6).
#[derive(Debug, Clone)]
pub struct AnalysisOutput {
    pub classes: ClassCollection,
    pub annotations: AnnotationPlan,
}

impl AnalysisOutput {
    pub fn txt_report(&self) -> String {
        report::build_txt_report(&self.classes)
    }

    pub fn csv_report(&self) -> String {
        report::build_csv_report(&self.classes)
    }

    pub fn free_function_csv(&self) -> String {
        report::build_free_function_csv(&self.classes)
    }

    pub fn verbose_report(&self) -> VerboseReport {
        report::build_verbose(&self.classes)
    }
}

/// Run the full engine over one archive: extract facts, close them over
/// inheritance, filter every call, run the three stereotype passes, then
/// build the annotation plan.
pub fn run(archive: &dyn ParseArchive, config: &Config) -> AnalysisOutput {
    let classifier = TypeClassifier::from_config(config);
    let queries = PathQueries::build();

    let mut classes = extract::extract(archive, &queries, &classifier);
    tracing::debug!(units = archive.units().len(), classes = classes.classes.len(), "extraction complete");

    resolve::resolve(&mut classes);
    callfilter::filter_calls(&mut classes);
    rules::compute_all_stereotypes(&mut classes, config);

    let annotations = annotate::build_plan(&classes, config);
    tracing::info!(
        classes = classes.classes.len(),
        free_functions = classes.free_functions.len(),
        annotations = annotations.total_annotations(),
        "stereotype analysis complete"
    );

    AnalysisOutput { classes, annotations }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testkit::ArchiveBuilder;
    use crate::tree::{Language, QueryName};

    #[test]
    fn run_over_an_empty_archive_produces_no_classes_or_annotations() {
        let archive = ArchiveBuilder::new().build();
        let output = run(&archive, &Config::new());
        assert!(output.classes.classes.is_empty());
        assert!(output.classes.free_functions.is_empty());
        assert_eq!(output.annotations.total_annotations(), 0);
    }

    #[test]
    fn run_classifies_a_simple_getter_as_get_and_the_class_as_data_class() {
        let mut builder = ArchiveBuilder::new();
        let mut unit = builder.unit(Language::Cpp);

        let class_node = unit.node("class P { int x; public: int getX() const { return x; } };");
        unit.respond(QueryName::ClassForm, &[class_node]);
        unit.respond_from(class_node, QueryName::ClassName, &[unit.node("P")]);
        unit.respond_from(class_node, QueryName::ClassKind, &[]);

        let method_node = unit.node("int getX() const { return x; }");
        unit.respond_from(class_node, QueryName::MethodForm, &[method_node]);
        unit.respond_from(method_node, QueryName::MethodName, &[unit.node("getX")]);
        unit.respond_from(method_node, QueryName::ParameterList, &[unit.node("()")]);
        unit.respond_from(method_node, QueryName::ConstSpecifier, &[unit.node("const")]);
        unit.respond_from(method_node, QueryName::MethodReturnType, &[unit.node("int")]);
        unit.respond_from(method_node, QueryName::ReturnExpression, &[unit.node("x")]);
        unit.respond_from(method_node, QueryName::NonCommentStatement, &[unit.node("return x ;")]);
        unit.respond_from(class_node, QueryName::FieldName, &[unit.node("x")]);
        unit.respond_from(class_node, QueryName::FieldType, &[unit.node("int")]);

        let archive = builder.build();
        let output = run(&archive, &Config::new());

        let p = output.classes.classes.values().find(|c| c.name_raw == "P").expect("class P extracted");
        assert_eq!(p.methods.len(), 1);
        assert_eq!(p.methods[0].stereotype_string(), "get");
        assert_eq!(p.stereotype_string(), "data-class");
    }
}
