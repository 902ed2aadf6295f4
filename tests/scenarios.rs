//! Integration tests exercising the full extract -> resolve -> filter ->
//! classify pipeline against the §8 scenarios, built with the `testkit`
//! in-memory fixture archive.

use stereocode::testkit::ArchiveBuilder;
use stereocode::tree::{Language, QueryName};
use stereocode::{run, Config};

/// Scenario 1: `class P { int x; public: int getX() const { return x; } };`
/// -> `getX` = `{get}`, `P` = `data-class`.
#[test]
fn getter_is_get_and_class_is_data_class() {
    let mut builder = ArchiveBuilder::new();
    let mut unit = builder.unit(Language::Cpp);

    let class_node = unit.node("class P { int x; public: int getX() const { return x; } };");
    unit.respond(QueryName::ClassForm, &[class_node]);
    let name_node = unit.node("P");
    unit.respond_from(class_node, QueryName::ClassName, &[name_node]);
    let field_name = unit.node("x");
    let field_type = unit.node("int");
    unit.respond_from(class_node, QueryName::FieldName, &[field_name]);
    unit.respond_from(class_node, QueryName::FieldType, &[field_type]);

    let method_node = unit.node("int getX() const { return x; }");
    unit.respond_from(class_node, QueryName::MethodForm, &[method_node]);
    let method_name = unit.node("getX");
    unit.respond_from(method_node, QueryName::MethodName, &[method_name]);
    let params = unit.node("()");
    unit.respond_from(method_node, QueryName::ParameterList, &[params]);
    let const_spec = unit.node("const");
    unit.respond_from(method_node, QueryName::ConstSpecifier, &[const_spec]);
    let return_type = unit.node("int");
    unit.respond_from(method_node, QueryName::MethodReturnType, &[return_type]);
    let return_expr = unit.node("x");
    unit.respond_from(method_node, QueryName::ReturnExpression, &[return_expr]);
    let stmt = unit.node("return x ;");
    unit.respond_from(method_node, QueryName::NonCommentStatement, &[stmt]);

    let archive = builder.build();
    let output = run(&archive, &Config::new());

    let p = output.classes.classes.values().find(|c| c.name_raw == "P").expect("class P extracted");
    assert_eq!(p.methods[0].stereotype_string(), "get");
    assert_eq!(p.stereotype_string(), "data-class");
}

/// Scenario 2: `class P { int x; public: void setX(int v) { x = v; } };`
/// -> `setX` = `{set}`, `P` = `data-class`.
#[test]
fn setter_is_set_and_class_is_data_class() {
    let mut builder = ArchiveBuilder::new();
    let mut unit = builder.unit(Language::Cpp);

    let class_node = unit.node("class P { int x; public: void setX(int v) { x = v; } };");
    unit.respond(QueryName::ClassForm, &[class_node]);
    let name_node = unit.node("P");
    unit.respond_from(class_node, QueryName::ClassName, &[name_node]);
    let field_name = unit.node("x");
    let field_type = unit.node("int");
    unit.respond_from(class_node, QueryName::FieldName, &[field_name]);
    unit.respond_from(class_node, QueryName::FieldType, &[field_type]);

    let method_node = unit.node("void setX(int v) { x = v; }");
    unit.respond_from(class_node, QueryName::MethodForm, &[method_node]);
    let method_name = unit.node("setX");
    unit.respond_from(method_node, QueryName::MethodName, &[method_name]);
    let params = unit.node("(int v)");
    unit.respond_from(method_node, QueryName::ParameterList, &[params]);
    let return_type = unit.node("void");
    unit.respond_from(method_node, QueryName::MethodReturnType, &[return_type]);
    let param_name = unit.node("v");
    unit.respond_from(method_node, QueryName::ParameterName, &[param_name]);
    let param_type = unit.node("int");
    unit.respond_from(method_node, QueryName::ParameterType, &[param_type]);
    let modified_name = unit.node("x");
    unit.respond_from(method_node, QueryName::ExpressionNameModified, &[modified_name]);
    let stmt = unit.node("x = v ;");
    unit.respond_from(method_node, QueryName::NonCommentStatement, &[stmt]);

    let archive = builder.build();
    let output = run(&archive, &Config::new());

    let p = output.classes.classes.values().find(|c| c.name_raw == "P").expect("class P extracted");
    assert_eq!(p.methods[0].stereotype_string(), "set");
    assert_eq!(p.stereotype_string(), "data-class");
}

/// Scenario 4: `class R { public: bool isOk() const { return compute() > 0; }
/// private: int compute() const; };` with `compute` resolved as a sibling
/// method -> `isOk` = `{predicate}`.
#[test]
fn bool_method_calling_a_sibling_is_a_predicate() {
    let mut builder = ArchiveBuilder::new();
    let mut unit = builder.unit(Language::Cpp);

    let class_node = unit.node("class R { ... };");
    unit.respond(QueryName::ClassForm, &[class_node]);
    let name_node = unit.node("R");
    unit.respond_from(class_node, QueryName::ClassName, &[name_node]);

    let is_ok_node = unit.node("bool isOk() const { return compute() > 0; }");
    let compute_node = unit.node("int compute() const { return data - 1; }");
    unit.respond_from(class_node, QueryName::MethodForm, &[is_ok_node, compute_node]);

    let is_ok_name = unit.node("isOk");
    unit.respond_from(is_ok_node, QueryName::MethodName, &[is_ok_name]);
    unit.respond_from(is_ok_node, QueryName::ParameterList, &[unit.node("()")]);
    unit.respond_from(is_ok_node, QueryName::ConstSpecifier, &[unit.node("const")]);
    unit.respond_from(is_ok_node, QueryName::MethodReturnType, &[unit.node("bool")]);
    let return_expr = unit.node("compute ( ) > 0");
    unit.respond_from(is_ok_node, QueryName::ReturnExpression, &[return_expr]);
    let call_name = unit.node("compute");
    let call_args = unit.node("()");
    unit.respond_from(is_ok_node, QueryName::FunctionCallName, &[call_name]);
    unit.respond_from(is_ok_node, QueryName::FunctionCallArgList, &[call_args]);
    unit.respond_from(is_ok_node, QueryName::NonCommentStatement, &[unit.node("return compute ( ) > 0 ;")]);

    let compute_name = unit.node("compute");
    unit.respond_from(compute_node, QueryName::MethodName, &[compute_name]);
    unit.respond_from(compute_node, QueryName::ParameterList, &[unit.node("()")]);
    unit.respond_from(compute_node, QueryName::ConstSpecifier, &[unit.node("const")]);
    unit.respond_from(compute_node, QueryName::MethodReturnType, &[unit.node("int")]);
    unit.respond_from(compute_node, QueryName::NonCommentStatement, &[unit.node("return data - 1 ;")]);

    let archive = builder.build();
    let output = run(&archive, &Config::new());

    let r = output.classes.classes.values().find(|c| c.name_raw == "R").expect("class R extracted");
    let is_ok = r.methods.iter().find(|m| m.name == "isOk").expect("isOk extracted");
    assert_eq!(is_ok.stereotype_string(), "predicate");
}

/// Scenario 6: `class T { int a,b; public: void f(){ a=1; b=2; g(); }
/// void g(){} };` -> `f.numOfFieldsModified == 2`, `f` = `{command}`, and
/// with no accessors anywhere `T` tends toward `commander`.
#[test]
fn two_field_modification_with_a_sibling_call_is_a_command_and_class_tends_commander() {
    let mut builder = ArchiveBuilder::new();
    let mut unit = builder.unit(Language::Cpp);

    let class_node = unit.node("class T { ... };");
    unit.respond(QueryName::ClassForm, &[class_node]);
    unit.respond_from(class_node, QueryName::ClassName, &[unit.node("T")]);

    let a = unit.node("a");
    let b = unit.node("b");
    unit.respond_from(class_node, QueryName::FieldName, &[a, b]);
    unit.respond_from(class_node, QueryName::FieldType, &[unit.node("int"), unit.node("int")]);

    let f_node = unit.node("void f(){ a=1; b=2; g(); }");
    let g_node = unit.node("void g(){}");
    unit.respond_from(class_node, QueryName::MethodForm, &[f_node, g_node]);

    unit.respond_from(f_node, QueryName::MethodName, &[unit.node("f")]);
    unit.respond_from(f_node, QueryName::ParameterList, &[unit.node("()")]);
    unit.respond_from(f_node, QueryName::MethodReturnType, &[unit.node("void")]);
    let modified_a = unit.node("a");
    let modified_b = unit.node("b");
    unit.respond_from(f_node, QueryName::ExpressionNameModified, &[modified_a, modified_b]);
    let call_name = unit.node("g");
    let call_args = unit.node("()");
    unit.respond_from(f_node, QueryName::FunctionCallName, &[call_name]);
    unit.respond_from(f_node, QueryName::FunctionCallArgList, &[call_args]);
    unit.respond_from(
        f_node,
        QueryName::NonCommentStatement,
        &[unit.node("a = 1 ;"), unit.node("b = 2 ;"), unit.node("g ( ) ;")],
    );

    unit.respond_from(g_node, QueryName::MethodName, &[unit.node("g")]);
    unit.respond_from(g_node, QueryName::ParameterList, &[unit.node("()")]);
    unit.respond_from(g_node, QueryName::MethodReturnType, &[unit.node("void")]);

    let archive = builder.build();
    let output = run(&archive, &Config::new());

    let t = output.classes.classes.values().find(|c| c.name_raw == "T").expect("class T extracted");
    let f = t.methods.iter().find(|m| m.name == "f").expect("f extracted");
    assert_eq!(f.num_fields_modified(), 2);
    assert_eq!(f.stereotype_string(), "command");
    assert!(t.stereotypes.contains(&"commander".to_string()));
}
