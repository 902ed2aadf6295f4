//! Built-in per-language primitive/ignored-call/modifier tables.
//!
//! Values mirror the catalogue a real producer's standard library would
//! define for each dialect; kept as plain `&'static [&'static str]` slices
//! per the design note to treat these as data, not code.

use crate::tree::Language;

pub fn primitives(lang: Language) -> &'static [&'static str] {
    match lang {
        Language::Cpp => &[
            "short", "int", "int8_t", "int16_t", "int32_t", "int64_t", "uint8_t", "uint16_t",
            "uint32_t", "uint64_t", "long", "float", "double", "char", "byte", "string",
            "size_t", "wchar_t", "char16_t", "char32_t", "bool", "ptrdiff_t", "void",
        ],
        Language::CSharp => &[
            "bool", "byte", "sbyte", "char", "double", "float", "int", "uint", "long", "ulong",
            "short", "ushort", "decimal", "string", "void", "Boolean", "Byte", "SByte", "Char",
            "Double", "Single", "Int32", "UInt32", "Int64", "UInt64", "Int16", "UInt16",
            "Decimal", "String", "Void", "object", "Object",
        ],
        Language::Java => &[
            "boolean", "byte", "char", "double", "float", "int", "long", "short", "void",
            "String", "Boolean", "Byte", "Character", "Double", "Float", "Integer", "Long",
            "Short", "Void", "Object",
        ],
    }
}

pub fn ignored_calls(lang: Language) -> &'static [&'static str] {
    match lang {
        Language::Cpp => &["assert", "exit", "abort"],
        Language::CSharp => &["WriteLine", "Write", "Trace", "Assert", "Exit"],
        Language::Java => &["println", "print", "printf", "assert", "exit"],
    }
}

pub fn type_modifiers(lang: Language) -> &'static [&'static str] {
    match lang {
        Language::Cpp => &[
            "const", "volatile", "inline", "virtual", "friend", "extern", "&&", "&", "public",
            "private", "protected", "mutable", "static", "thread_local", "register",
            "constexpr", "explicit", "signed", "unsigned", "<", ">", "vector", "list", "set",
            "map", "unordered_map", "array", "multimap", "unordered_multimap", "forward_list",
            "stack", "queue", "priority_queue", "deque", "multiset", "unordered_set",
            "unordered_multiset", "pair", "*",
        ],
        Language::CSharp => &[
            "readonly", "ref", "out", "in", "unsafe", "internal", "params", "public", "private",
            "protected", "static", "virtual", "*", "volatile", "\\[.*\\]", "override",
            "abstract", "extern", "async", "partial", "explicit", "implicit", "sealed", "event",
            "const", "\\?", "\\?\\?", "<", ">", "List", "Dictionary", "HashSet", "Queue",
            "Stack", "SortedList", "LinkedList", "Tuple", "ValueTuple",
        ],
        Language::Java => &[
            "public", "private", "protected", "static", "final", "transient", "\\[.*\\]", "\\?",
            "@\\w+", "volatile", "synchronized", "native", "strictfp", "abstract", "default",
            "super", "extends", "\\.\\.\\.", "<", ">", "List", "ArrayList", "LinkedList", "Set",
            "HashSet", "LinkedHashSet", "SortedSet", "TreeSet", "Map", "HashMap", "Hashtable",
            "LinkedHashMap", "SortedMap", "TreeMap", "Deque", "ArrayDeque", "Queue",
            "PriorityQueue", "Vector", "Stack", "EnumSet", "EnumMap", "Iterator",
        ],
    }
}
