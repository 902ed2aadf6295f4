//! The expression-to-variable rule (§4.7), shared by extraction (C3 steps
//! 11-13) and the call filter (C6).

use indexmap::IndexMap;
use rustc_hash::FxHashSet;

use crate::base::Name;
use crate::model::Variable;
use crate::tree::Language;

/// Which extraction step is asking — determines which side effects the
/// rule applies once a variable is resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExprMode {
    /// §4.3 step 12 (`find_variables_in_expressions`).
    Use,
    /// §4.3 step 11 (`find_returned_variables`).
    Return,
    /// §4.3 step 13 (`find_modified_variables`).
    Modify,
}

/// What the leading component of an expression resolved to.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Resolution {
    /// Resolved to none of the above — a global, a static, an unknown
    /// receiver, or an empty expression.
    #[default]
    None,
    Local(Name),
    Parameter(Name, usize),
    Field(Name),
}

/// Side effects the rule produced, applied by the caller onto whichever
/// mutable state (MethodModel accumulators) it owns.
#[derive(Debug, Clone, Default)]
pub struct RuleEffects {
    pub resolution: Resolution,
    pub is_reference_modification: bool,
    pub created_with_new: bool,
}

/// Apply the §4.7 rule to an expression's leading component(s).
///
/// `new_assigned_vars` is the method's running set of variable names
/// whose initializer was a `new` expression (only consulted in `Modify`/
/// `Use` callers that care about the factory-detection side effect;
/// harmless to pass for `Use`).
pub fn resolve_expression(
    expr: &str,
    lang: Language,
    mode: ExprMode,
    locals: &[Variable],
    parameters: &[Variable],
    fields: &IndexMap<Name, Variable>,
    new_assigned_vars: &FxHashSet<Name>,
) -> RuleEffects {
    let trimmed = strip_wrapping(expr, lang);
    let Some(candidates) = split_components(&trimmed, lang) else {
        return RuleEffects::default();
    };

    for candidate in candidates {
        let candidate = candidate.trim();
        if candidate.is_empty() {
            continue;
        }
        if let Some((idx, local)) = locals.iter().enumerate().find(|(_, v)| &*v.name == candidate) {
            let _ = idx;
            return RuleEffects {
                resolution: Resolution::Local(local.name.clone()),
                ..Default::default()
            };
        }
        if let Some(param) = parameters.iter().find(|v| &*v.name == candidate) {
            let is_reference = mode == ExprMode::Modify && is_reference_parameter(param, lang, candidate, expr);
            return RuleEffects {
                resolution: Resolution::Parameter(param.name.clone(), param.index.unwrap_or(0)),
                is_reference_modification: is_reference,
                ..Default::default()
            };
        }
        if let Some((name, _)) = fields.iter().find(|(n, _)| n.as_ref() == candidate) {
            return RuleEffects {
                resolution: Resolution::Field(name.clone()),
                created_with_new: new_assigned_vars.contains(name),
                ..Default::default()
            };
        }
    }

    RuleEffects::default()
}

/// Trim whitespace and balanced outer parentheses/braces; drop `[...]`
/// suffixes; drop a leading `*` (CPP/CSH); drop CSH's null-conditional
/// `?` occurrences.
fn strip_wrapping(expr: &str, lang: Language) -> String {
    let mut s = expr.trim().to_string();
    loop {
        let t = s.trim();
        if t.len() >= 2 {
            let bytes = t.as_bytes();
            let wrapped = (bytes[0] == b'(' && bytes[t.len() - 1] == b')')
                || (bytes[0] == b'{' && bytes[t.len() - 1] == b'}');
            if wrapped && balanced(t) {
                s = t[1..t.len() - 1].trim().to_string();
                continue;
            }
        }
        break;
    }
    if let Some(bracket) = s.find('[') {
        s.truncate(bracket);
    }
    if matches!(lang, Language::Cpp | Language::CSharp) {
        while let Some(rest) = s.strip_prefix('*') {
            s = rest.trim_start().to_string();
        }
    }
    if lang == Language::CSharp {
        s = s.replace('?', "");
    }
    s.trim().to_string()
}

fn balanced(s: &str) -> bool {
    let mut depth = 0i32;
    for (i, c) in s.char_indices() {
        match c {
            '(' | '{' => depth += 1,
            ')' | '}' => {
                depth -= 1;
                if depth == 0 && i != s.len() - 1 {
                    return false;
                }
            }
            _ => {}
        }
    }
    depth == 0
}

/// Split the first one-or-two components per the per-language regex in
/// §4.7, returning candidates in precedence order (the component before
/// the separator first, when there is one, otherwise the single token).
fn split_components(s: &str, lang: Language) -> Option<Vec<String>> {
    if s.is_empty() {
        return None;
    }
    match lang {
        Language::Cpp => {
            if let Some(rest) = s.strip_prefix("(*this).").or_else(|| s.strip_prefix("this->")) {
                return Some(vec![leading_ident(rest)]);
            }
            if let Some(pos) = find_separator(s, &["::", "->", "."]) {
                let (head, tail) = split_at_sep(s, pos);
                return Some(vec![head, leading_ident(tail)]);
            }
            Some(vec![leading_ident(s)])
        }
        Language::Java => {
            if let Some(rest) = s.strip_prefix("super.").or_else(|| s.strip_prefix("this.")) {
                return Some(vec![leading_ident(rest)]);
            }
            if let Some(pos) = find_separator(s, &["."]) {
                let (head, tail) = split_at_sep(s, pos);
                return Some(vec![head, leading_ident(tail)]);
            }
            Some(vec![leading_ident(s)])
        }
        Language::CSharp => {
            if let Some(rest) = s.strip_prefix("base.").or_else(|| s.strip_prefix("this.")) {
                return Some(vec![leading_ident(rest)]);
            }
            if let Some(pos) = find_separator(s, &[".", "->"]) {
                let (head, tail) = split_at_sep(s, pos);
                return Some(vec![head, leading_ident(tail)]);
            }
            Some(vec![leading_ident(s)])
        }
    }
}

fn find_separator(s: &str, seps: &[&str]) -> Option<(usize, usize)> {
    seps.iter()
        .filter_map(|sep| s.find(sep).map(|idx| (idx, sep.len())))
        .min_by_key(|(idx, _)| *idx)
}

fn split_at_sep(s: &str, (idx, len): (usize, usize)) -> (String, String) {
    (s[..idx].to_string(), s[idx + len..].to_string())
}

fn leading_ident(s: &str) -> String {
    s.chars()
        .take_while(|c| c.is_alphanumeric() || *c == '_')
        .collect()
}

/// True if, once wrapping is stripped, the expression is nothing but a
/// *single*-separator dotted/arrow identifier chain (`this->car`, `a.b`)
/// — no arithmetic, no call, no indexing, and no second separator left
/// over. Used to tell a simple return (`return a;`, `return this->car;`)
/// from a complex one (`return a + 1;`, `return f();`,
/// `return this->car.engine;`) for the §4.3 step 11 flags.
///
/// The cap at one separator mirrors the original's return-mode regex,
/// which is end-anchored so only the first component is ever consulted
/// — `this->car.engine` isn't `this->car`, so it falls through to a
/// complex return rather than silently resolving to `car` and dropping
/// `.engine` (SPEC_FULL.md §B.5).
pub fn is_simple_reference(expr: &str, lang: Language) -> bool {
    let reduced = strip_wrapping(expr, lang);
    if reduced.is_empty() || !reduced.chars().all(|c| c.is_alphanumeric() || matches!(c, '_' | '.' | ':' | '-' | '>')) {
        return false;
    }
    separator_count(&reduced, lang) <= 1
}

/// Count non-overlapping occurrences of this language's member-access
/// separators, scanning left to right so multi-char separators
/// (`::`, `->`) aren't double-counted against their own characters.
fn separator_count(s: &str, lang: Language) -> usize {
    let seps: &[&str] = match lang {
        Language::Cpp => &["::", "->", "."],
        Language::Java => &["."],
        Language::CSharp => &["->", "."],
    };
    let mut count = 0;
    let mut rest = s;
    while let Some((idx, len)) = seps.iter().filter_map(|sep| rest.find(sep).map(|i| (i, sep.len()))).min_by_key(|(i, _)| *i) {
        count += 1;
        rest = &rest[idx + len..];
    }
    count
}

/// Reference-aliasing sub-rule (§4.7), used in `Modify` mode when the
/// resolved variable is a parameter.
fn is_reference_parameter(param: &Variable, lang: Language, _access_component: &str, full_expr: &str) -> bool {
    let dotted_access = full_expr.contains('.') || full_expr.contains("->");
    match lang {
        Language::Cpp => {
            param.raw_type.contains('&') || param.raw_type.contains('*') || param.name.ends_with("[]")
        }
        Language::CSharp => {
            param.raw_type.contains("out")
                || param.raw_type.contains("ref")
                || param.raw_type.contains('*')
                || param.raw_type.contains("[]")
                || (param.non_primitive && dotted_access)
        }
        Language::Java => param.raw_type.contains("[]") || (param.non_primitive && dotted_access),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::base::Interner;

    fn field_table(names: &[&str]) -> IndexMap<Name, Variable> {
        let mut interner = Interner::new();
        let mut map = IndexMap::new();
        for n in names {
            let name = interner.intern(n);
            map.insert(name.clone(), Variable::new(name, "int", "int"));
        }
        map
    }

    #[test]
    fn resolves_plain_field_name() {
        let fields = field_table(&["x"]);
        let effects = resolve_expression(
            "x",
            Language::Cpp,
            ExprMode::Use,
            &[],
            &[],
            &fields,
            &FxHashSet::default(),
        );
        assert_eq!(effects.resolution, Resolution::Field(fields.keys().next().unwrap().clone()));
    }

    #[test]
    fn this_arrow_field_resolves_in_cpp() {
        let fields = field_table(&["count"]);
        let effects = resolve_expression(
            "this->count",
            Language::Cpp,
            ExprMode::Use,
            &[],
            &[],
            &fields,
            &FxHashSet::default(),
        );
        assert!(matches!(effects.resolution, Resolution::Field(_)));
    }

    #[test]
    fn local_takes_precedence_over_field() {
        let fields = field_table(&["x"]);
        let mut interner = Interner::new();
        let local = Variable::new(interner.intern("x"), "int", "int");
        let effects = resolve_expression(
            "x",
            Language::Cpp,
            ExprMode::Use,
            &[local],
            &[],
            &fields,
            &FxHashSet::default(),
        );
        assert!(matches!(effects.resolution, Resolution::Local(_)));
    }

    #[test]
    fn simple_reference_accepts_one_separator_rejects_arithmetic() {
        assert!(is_simple_reference("this->count", Language::Cpp));
        assert!(is_simple_reference("a.b", Language::Java));
        assert!(!is_simple_reference("a + 1", Language::Cpp));
        assert!(!is_simple_reference("compute()", Language::Cpp));
    }

    #[test]
    fn simple_reference_rejects_a_second_separator() {
        // this->car is a simple reference on its own, but this->car.engine
        // chains past it into a second field and must not be treated as a
        // plain field return.
        assert!(!is_simple_reference("this->car.engine", Language::Cpp));
        assert!(!is_simple_reference("a.b.c", Language::Java));
    }

    #[test]
    fn unresolved_global_yields_none() {
        let fields = field_table(&[]);
        let effects = resolve_expression(
            "globalCounter",
            Language::Java,
            ExprMode::Modify,
            &[],
            &[],
            &fields,
            &FxHashSet::default(),
        );
        assert!(matches!(effects.resolution, Resolution::None));
    }
}
