//! String interner for class/method/field names.
//!
//! Uses `Rc<str>` for cheap cloning (reference count increment instead of
//! allocation). The interner deduplicates strings so identical names share
//! the same allocation, which matters here since the same class name is
//! looked up repeatedly during inheritance resolution (§4.5).

use std::collections::HashSet;
use std::rc::Rc;

/// An interned string — cheap to clone (just an `Rc` increment).
pub type Name = Rc<str>;

/// Deduplicating string interner.
#[derive(Debug, Default, Clone)]
pub struct Interner {
    strings: HashSet<Rc<str>>,
}

impl Interner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Intern a string, returning a cheap-to-clone reference.
    pub fn intern(&mut self, s: &str) -> Name {
        if let Some(existing) = self.strings.get(s) {
            Rc::clone(existing)
        } else {
            let rc: Rc<str> = Rc::from(s);
            self.strings.insert(Rc::clone(&rc));
            rc
        }
    }

    pub fn intern_string(&mut self, s: String) -> Name {
        if let Some(existing) = self.strings.get(s.as_str()) {
            Rc::clone(existing)
        } else {
            let rc: Rc<str> = Rc::from(s);
            self.strings.insert(Rc::clone(&rc));
            rc
        }
    }

    pub fn get(&self, s: &str) -> Option<Name> {
        self.strings.get(s).cloned()
    }

    pub fn len(&self) -> usize {
        self.strings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn intern_returns_same_rc() {
        let mut interner = Interner::new();
        let a = interner.intern("Vehicle");
        let b = interner.intern("Vehicle");
        assert!(Rc::ptr_eq(&a, &b));
    }

    #[test]
    fn intern_different_strings_differ() {
        let mut interner = Interner::new();
        let a = interner.intern("Vehicle");
        let b = interner.intern("Engine");
        assert!(!Rc::ptr_eq(&a, &b));
    }
}
