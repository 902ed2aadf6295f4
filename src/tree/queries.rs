//! PathQueries (C1): a compile-time table keyed by `(Language, QueryName)`
//! returning the path expression string used to drive extraction for that
//! language.
//!
//! The rule engine (C7) never looks at these strings; it only relies on
//! the queries existing and their documented semantics. The exact
//! expression syntax is producer-specific — what's written here is the
//! path-expression dialect our [`testkit`](crate::testkit) fixture
//! archive understands, analogous to how a real producer's own query
//! language would be used.

use std::sync::Arc;

use rustc_hash::FxHashMap;

use crate::tree::Language;

/// An opaque, already-compiled path expression. Cheap to clone; the table
/// is built once per process and shared.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PathExpr(pub Arc<str>);

impl PathExpr {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for PathExpr {
    fn from(value: &str) -> Self {
        Self(Arc::from(value))
    }
}

/// Every named query the extraction pipeline (C3/C4) issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueryName {
    /// The class/struct/interface/enum/union form for the language, not
    /// nested inside another such form.
    ClassForm,
    ClassName,
    /// Text child identifying struct vs. class vs. interface etc.
    ClassKind,
    ParentListEntry,
    FieldName,
    FieldType,
    /// Same as `FieldName`/`FieldType` but filtered to non-private fields
    /// by the enclosing access specifier.
    FieldNameNonPrivate,
    FieldTypeNonPrivate,
    /// Method form, excluding static definitions and methods nested
    /// inside a free function's body.
    MethodForm,
    MethodName,
    ParameterList,
    /// Return-type text, excluding generic-parameter text inside the
    /// parameter list (so Java's `<T>` doesn't leak into the return type).
    MethodReturnType,
    /// CSH-only: the property declaration form.
    PropertyForm,
    PropertyType,
    /// CSH-only: an accessor function nested inside a property.
    PropertyMethodForm,
    FreeFunctionForm,
    ConstructorDestructorForm,
    ParameterName,
    ParameterType,
    LocalVariableName,
    LocalVariableType,
    ReturnExpression,
    FunctionCallName,
    FunctionCallArgList,
    MethodCallName,
    MethodCallArgList,
    ConstructorCallName,
    ConstructorCallArgList,
    /// The declared name of a variable whose initializer is a `new` call.
    NewAssignName,
    /// CPP-only: the `const` specifier on a method.
    ConstSpecifier,
    /// Non-comment statements directly inside the method body (used only
    /// for the count, §4.3 step 14).
    NonCommentStatement,
    /// A plain name appearing in an expression (not a call name).
    ExpressionName,
    /// A name immediately followed by an assignment operator, or
    /// immediately preceded/followed by `++`/`--`.
    ExpressionNameModified,
}

/// The compile-time-built, per-language query table (C1).
#[derive(Debug, Clone)]
pub struct PathQueries {
    table: FxHashMap<(Language, QueryName), PathExpr>,
}

impl PathQueries {
    /// Build the built-in table for all three languages.
    pub fn build() -> Self {
        let mut table = FxHashMap::default();
        for lang in Language::ALL {
            for (name, expr) in entries_for(lang) {
                table.insert((lang, name), PathExpr::from(expr));
            }
        }
        Self { table }
    }

    /// Look up the path expression for a query in a language.
    ///
    /// Per §7, an absent entry is not an error condition callers need to
    /// handle specially — every `(language, query)` pair this crate issues
    /// is populated by `build()`. This returns `Option` only so a caller
    /// holding a hand-rolled table (e.g. in a test) can leave entries out.
    pub fn get(&self, lang: Language, name: QueryName) -> Option<&PathExpr> {
        self.table.get(&(lang, name))
    }
}

fn entries_for(lang: Language) -> Vec<(QueryName, &'static str)> {
    use QueryName::*;
    match lang {
        Language::Cpp => vec![
            (ClassForm, "//*[self::class or self::struct or self::union[name]][not(ancestor::class or ancestor::struct or ancestor::union)]"),
            (ClassName, "/unit/*[self::class or self::struct or self::union]/name"),
            (ClassKind, "/unit/*[self::class or self::struct or self::union]/text()[1]"),
            (ParentListEntry, "/unit/*[self::class or self::struct or self::union]/super_list/super"),
            (FieldName, "//decl_stmt[not(ancestor::function) and count(ancestor::class|ancestor::struct|ancestor::union)=1]/decl/name[preceding-sibling::*[1][self::type]]"),
            (FieldType, "//decl_stmt[not(ancestor::function) and count(ancestor::class|ancestor::struct|ancestor::union)=1]/decl/type[following-sibling::*[1][self::name]]"),
            (FieldNameNonPrivate, "//decl_stmt[not(ancestor::function) and (ancestor::class[public or protected] or ancestor::struct[not(private)])]/decl/name"),
            (FieldTypeNonPrivate, "//decl_stmt[not(ancestor::function) and (ancestor::class[public or protected] or ancestor::struct[not(private)])]/decl/type"),
            (MethodForm, "//*[(self::function or self::constructor or self::destructor) and not(specifier='static') and count(ancestor::class|ancestor::struct|ancestor::union)=1 and not(ancestor::function[not(descendant::class|descendant::struct|descendant::union)])]"),
            (MethodName, "/unit/function/name"),
            (ParameterList, "/unit/function/parameter_list"),
            (MethodReturnType, "/unit/function/type//text()[not(ancestor::parameter_list)]"),
            (PropertyForm, ""),
            (PropertyType, ""),
            (PropertyMethodForm, ""),
            (FreeFunctionForm, "//*[(self::function or self::constructor or self::destructor) and (not(ancestor::class or ancestor::struct or ancestor::union) or specifier='static')]"),
            (ConstructorDestructorForm, "/unit/*[self::constructor or self::destructor]"),
            (ParameterName, "/unit/function/parameter_list/parameter/decl/name"),
            (ParameterType, "/unit/function/parameter_list/parameter/decl/type"),
            (LocalVariableName, "//decl_stmt/decl/name[preceding-sibling::*[1][self::type]]|//control/init/decl/name"),
            (LocalVariableType, "//decl_stmt/decl/type[following-sibling::*[1][self::name]]|//control/init/decl/type"),
            (ReturnExpression, "//return/expr"),
            (FunctionCallName, "//call[not(name/operator='->') and not(name/operator='.') and not(preceding-sibling::*[1][self::operator='new'])]/name"),
            (FunctionCallArgList, "//call[not(name/operator='->') and not(name/operator='.') and not(preceding-sibling::*[1][self::operator='new'])]/argument_list"),
            (MethodCallName, "//call[(name/operator='->' or name/operator='.') and not(preceding-sibling::*[1][self::operator='new'])]/name"),
            (MethodCallArgList, "//call[(name/operator='->' or name/operator='.') and not(preceding-sibling::*[1][self::operator='new'])]/argument_list"),
            (ConstructorCallName, "//call[preceding-sibling::*[1][self::operator='new']]/name"),
            (ConstructorCallArgList, "//call[preceding-sibling::*[1][self::operator='new']]/argument_list"),
            (NewAssignName, "//decl_stmt/decl[init/expr/operator='new']/name|//expr_stmt[count(ancestor::function)=1]/expr[operator='new']/name"),
            (ConstSpecifier, "/unit/function/specifier[.='const']"),
            (NonCommentStatement, "//block_content[1][*[not(self::comment)][1]]"),
            (ExpressionName, "//expr[not(ancestor::call)]/name"),
            (ExpressionNameModified, "//expr/name[following-sibling::*[1][self::operator='='] or preceding-sibling::*[1][self::operator='++' or self::operator='--']]"),
        ],
        Language::CSharp => vec![
            (ClassForm, "//*[self::class or self::struct or self::interface][not(specifier='static')][not(ancestor::class or ancestor::struct or ancestor::interface)]"),
            (ClassName, "/unit/*[self::class or self::struct or self::interface]/name"),
            (ClassKind, "/unit/*[self::class or self::struct or self::interface]/text()[1]"),
            (ParentListEntry, "/unit/*[self::class or self::struct or self::interface]/super_list/super/name"),
            (FieldName, "//decl_stmt[not(ancestor::function) and count(ancestor::class|ancestor::struct|ancestor::interface)=1]/decl/name|//property[not(descendant::function)]/name"),
            (FieldType, "//decl_stmt[not(ancestor::function) and count(ancestor::class|ancestor::struct|ancestor::interface)=1]/decl/type|//property[not(descendant::function)]/type"),
            (FieldNameNonPrivate, "//decl_stmt[ancestor::class[type/specifier[not(.='private')]] or ancestor::struct or ancestor::interface]/decl/name"),
            (FieldTypeNonPrivate, "//decl_stmt[ancestor::class[type/specifier[not(.='private')]] or ancestor::struct or ancestor::interface]/decl/type"),
            (MethodForm, "//*[(self::function or self::constructor or self::destructor) and count(ancestor::class|ancestor::struct|ancestor::interface)=1 and not(specifier='static') and not(ancestor::function) and not(ancestor::property)]"),
            (MethodName, "/unit/function/name"),
            (ParameterList, "/unit/function/parameter_list"),
            (MethodReturnType, "/unit/function/type//text()[not(ancestor::parameter_list)]"),
            (PropertyForm, "//property[count(ancestor::class|ancestor::struct|ancestor::interface)=1 and not(specifier='static')]"),
            (PropertyType, "//property/type"),
            (PropertyMethodForm, "//property/function[not(ancestor::function)]"),
            (FreeFunctionForm, "//*[(self::function or self::constructor or self::destructor) and specifier='static']"),
            (ConstructorDestructorForm, "/unit/*[self::constructor or self::destructor]"),
            (ParameterName, "/unit/function/parameter_list/parameter/decl/name"),
            (ParameterType, "/unit/function/parameter_list/parameter/decl/type"),
            (LocalVariableName, "//decl_stmt[count(ancestor::function)=1]/decl/name|//control/init/decl/name"),
            (LocalVariableType, "//decl_stmt[count(ancestor::function)=1]/decl/type|//control/init/decl/type"),
            (ReturnExpression, "//return[count(ancestor::function)=1]/expr"),
            (FunctionCallName, "//call[count(ancestor::function)=1 and not(name/operator='->') and not(name/operator='.') and not(preceding-sibling::*[1][self::operator='new'])]/name"),
            (FunctionCallArgList, "//call[count(ancestor::function)=1 and not(name/operator='->') and not(name/operator='.') and not(preceding-sibling::*[1][self::operator='new'])]/argument_list"),
            (MethodCallName, "//call[count(ancestor::function)=1 and (name/operator='->' or name/operator='.') and not(preceding-sibling::*[1][self::operator='new'])]/name"),
            (MethodCallArgList, "//call[count(ancestor::function)=1 and (name/operator='->' or name/operator='.') and not(preceding-sibling::*[1][self::operator='new'])]/argument_list"),
            (ConstructorCallName, "//call[preceding-sibling::*[1][self::operator='new']]/name"),
            (ConstructorCallArgList, "//call[preceding-sibling::*[1][self::operator='new']]/argument_list"),
            (NewAssignName, "//decl_stmt/decl[init/expr/operator='new']/name"),
            (ConstSpecifier, ""),
            (NonCommentStatement, "//block_content[1][*[not(self::comment)][1]]"),
            (ExpressionName, "//expr[not(ancestor::call)]/name"),
            (ExpressionNameModified, "//expr/name[following-sibling::*[1][self::operator='=' or self::operator='??='] or preceding-sibling::*[1][self::operator='++' or self::operator='--']]"),
        ],
        Language::Java => vec![
            (ClassForm, "//*[self::class or self::interface or self::enum][not(ancestor::class or ancestor::interface or ancestor::enum)]"),
            (ClassName, "/unit/*[self::class or self::interface or self::enum]/name"),
            (ClassKind, "/unit/*[self::class or self::interface or self::enum]/text()[1]"),
            (ParentListEntry, "/unit/*[self::class or self::interface or self::enum]/super_list/super/name"),
            (FieldName, "//decl_stmt[not(ancestor::function) and count(ancestor::class|ancestor::interface|ancestor::enum)=1]/decl/name"),
            (FieldType, "//decl_stmt[not(ancestor::function) and count(ancestor::class|ancestor::interface|ancestor::enum)=1]/decl/type"),
            (FieldNameNonPrivate, "//decl_stmt[not(specifier='private')]/decl/name"),
            (FieldTypeNonPrivate, "//decl_stmt[not(specifier='private')]/decl/type"),
            (MethodForm, "//*[(self::function or self::constructor or self::destructor) and count(ancestor::class|ancestor::interface|ancestor::enum)=1 and not(specifier='static') and not(ancestor::function)]"),
            (MethodName, "/unit/function/name"),
            (ParameterList, "/unit/function/parameter_list"),
            (MethodReturnType, "/unit/function/type//text()[not(ancestor::parameter_list)]"),
            (PropertyForm, ""),
            (PropertyType, ""),
            (PropertyMethodForm, ""),
            (FreeFunctionForm, "//*[(self::function or self::constructor or self::destructor) and specifier='static']"),
            (ConstructorDestructorForm, "/unit/*[self::constructor or self::destructor]"),
            (ParameterName, "/unit/function/parameter_list/parameter/decl/name"),
            (ParameterType, "/unit/function/parameter_list/parameter/decl/type"),
            (LocalVariableName, "//decl_stmt[count(ancestor::function)=1]/decl/name|//control/init/decl/name"),
            (LocalVariableType, "//decl_stmt[count(ancestor::function)=1]/decl/type|//control/init/decl/type"),
            (ReturnExpression, "//return[count(ancestor::function)=1]/expr"),
            (FunctionCallName, "//call[count(ancestor::function)=1 and not(name/operator='.') and not(preceding-sibling::*[1][self::operator='new'])]/name"),
            (FunctionCallArgList, "//call[count(ancestor::function)=1 and not(name/operator='.') and not(preceding-sibling::*[1][self::operator='new'])]/argument_list"),
            (MethodCallName, "//call[count(ancestor::function)=1 and name/operator='.' and not(preceding-sibling::*[1][self::operator='new'])]/name"),
            (MethodCallArgList, "//call[count(ancestor::function)=1 and name/operator='.' and not(preceding-sibling::*[1][self::operator='new'])]/argument_list"),
            (ConstructorCallName, "//call[preceding-sibling::*[1][self::operator='new']]/name"),
            (ConstructorCallArgList, "//call[preceding-sibling::*[1][self::operator='new']]/argument_list"),
            (NewAssignName, "//decl_stmt/decl[init/expr/operator='new']/name"),
            (ConstSpecifier, ""),
            (NonCommentStatement, "//block_content[1][*[not(self::comment)][1]]"),
            (ExpressionName, "//expr[not(ancestor::call)]/name"),
            (ExpressionNameModified, "//expr/name[following-sibling::*[1][self::operator='='] or preceding-sibling::*[1][self::operator='++' or self::operator='--']]"),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_language_has_a_class_form_query() {
        let queries = PathQueries::build();
        for lang in Language::ALL {
            assert!(queries.get(lang, QueryName::ClassForm).is_some());
        }
    }

    #[test]
    fn csh_is_the_only_language_with_property_queries() {
        let queries = PathQueries::build();
        assert!(!queries.get(Language::CSharp, QueryName::PropertyForm).unwrap().as_str().is_empty());
        assert!(queries.get(Language::Cpp, QueryName::PropertyForm).unwrap().as_str().is_empty());
        assert!(queries.get(Language::Java, QueryName::PropertyForm).unwrap().as_str().is_empty());
    }
}
