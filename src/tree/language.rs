/// One of the three supported statically typed, class-based source
/// dialects (§1).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    /// Systems dialect: multiple inheritance, free pointers/references,
    /// templates, mutable/const methods, friend declarations, unions,
    /// externally defined (`Class::method`) methods.
    Cpp,
    /// Managed dialect: single class inheritance, multiple interface
    /// inheritance, properties, partial classes, `ref`/`out`/`?`/`??`.
    CSharp,
    /// Managed dialect: single class inheritance, multiple interface
    /// inheritance, enums with methods, no unsigned pointers.
    Java,
}

impl Language {
    pub const ALL: [Language; 3] = [Language::Cpp, Language::CSharp, Language::Java];

    /// The label the original stereotype catalogue uses for this language,
    /// e.g. in return-type comparisons ("bool" vs "Boolean" vs "boolean").
    pub fn label(self) -> &'static str {
        match self {
            Language::Cpp => "C++",
            Language::CSharp => "C#",
            Language::Java => "Java",
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
