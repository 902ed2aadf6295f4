/// One observed call site (§3).
///
/// Appended during extraction; `signature` is populated at the same time
/// (name with namespaces removed, followed by a comma-count placeholder
/// such as `(,,)`) — arity-only, per the deliberate under-specification
/// in §9 ("Signature normalization").
#[derive(Debug, Clone)]
pub struct Call {
    /// The callee exactly as written, e.g. `engine.start` or `new Widget`.
    pub callee: String,
    /// The raw argument-list text, e.g. `(a, b)`.
    pub arguments: String,
    pub signature: String,
}

impl Call {
    pub fn new(callee: impl Into<String>, arguments: impl Into<String>) -> Self {
        let callee = callee.into();
        let arguments = arguments.into();
        let signature = build_signature(&callee, &arguments);
        Self {
            callee,
            arguments,
            signature,
        }
    }
}

/// `name-without-namespace + "(" + comma-count-placeholder + ")"`.
fn build_signature(callee: &str, arguments: &str) -> String {
    let name = crate::classify::trailing_name(callee);
    let comma_count = count_top_level_commas(arguments);
    let mut sig = String::with_capacity(name.len() + comma_count + 2);
    sig.push_str(name);
    sig.push('(');
    for _ in 0..comma_count {
        sig.push(',');
    }
    sig.push(')');
    sig
}

/// Counts commas at paren/bracket/brace depth zero inside an argument-list
/// string (which itself may still carry its own enclosing parens).
fn count_top_level_commas(arguments: &str) -> usize {
    let mut depth: i32 = 0;
    let mut commas = 0usize;
    for c in arguments.chars() {
        match c {
            '(' | '[' | '{' | '<' => depth += 1,
            ')' | ']' | '}' | '>' => depth -= 1,
            ',' if depth <= 1 => commas += 1,
            _ => {}
        }
    }
    commas
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signature_strips_namespace_and_counts_commas() {
        let call = Call::new("ns::Widget::resize", "(10, 20, true)");
        assert_eq!(call.signature, "resize(,,)");
    }

    #[test]
    fn signature_for_no_arg_call() {
        let call = Call::new("tick", "()");
        assert_eq!(call.signature, "tick()");
    }

    #[test]
    fn nested_parens_in_arguments_do_not_inflate_arity() {
        let call = Call::new("compute", "(f(a, b), c)");
        assert_eq!(call.signature, "compute(,)");
    }
}
