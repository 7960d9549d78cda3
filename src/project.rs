//! C# type expression → TypeScript type expression.
//!
//! Pure and total: every input string yields exactly one output string.
//! Rules are tried in order, first match wins, and each container rule
//! projects its captured parameters recursively:
//!
//! 1. nullable      `T?`                    → `T' | null`
//! 2. list          `List<T>` / `IList<T>`  → `T'[]` (or `(T')[]` when `T'` is a union)
//! 3. array suffix  `T[]`                   → `T'[]`
//! 4. map           `Dictionary<K, V>`      → `Record<K', V'>`
//! 5. primitive / special lookup
//! 6. anything else passes through unchanged (reference to a sibling declaration)
use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::Regex;

// ------------------------------- Tables ---------------------------------- //

const NULLABLE_MARKER: char = '?';
const UNION_SEPARATOR: char = '|';

/// Fixed primitive/special table. Built once, never mutated.
static PRIMITIVES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        // integer-like
        ("short", "number"),
        ("int", "number"),
        ("long", "number"),
        ("byte", "number"),
        // floating/decimal-like
        ("float", "number"),
        ("double", "number"),
        ("decimal", "number"),
        ("char", "string"),
        ("string", "string"),
        ("bool", "boolean"),
        ("boolean", "boolean"),
        // these serialize to strings in JSON
        ("DateTime", "string"),
        ("DateTimeOffset", "string"),
        ("Guid", "string"),
        ("dynamic", "any"),
        ("object", "any"),
        ("var", "any"),
        ("void", "void"),
    ])
});

static LIST_RX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:I)?List<(.+)>$").expect("list pattern is valid")
});

static ARRAY_RX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(.+)\[\]$").expect("array pattern is valid")
});

static DICTIONARY_RX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:I)?Dictionary<(.+),\s*(.+)>$").expect("dictionary pattern is valid")
});

// ------------------------------ Projection ------------------------------- //

pub fn project(source_type: &str) -> String {
    // 1) Nullable
    if let Some(base) = source_type.strip_suffix(NULLABLE_MARKER) {
        return format!("{} | null", project(base.trim()));
    }

    // 2) List<T> / IList<T>
    if let Some(caps) = LIST_RX.captures(source_type) {
        let inner = project(&caps[1]);
        return if inner.contains(UNION_SEPARATOR) {
            format!("({inner})[]")
        } else {
            format!("{inner}[]")
        };
    }

    // 3) T[]
    // NOTE: no parenthesization here, so `int?[]` becomes `number | null[]`.
    if let Some(caps) = ARRAY_RX.captures(source_type) {
        return format!("{}[]", project(&caps[1]));
    }

    // 4) Dictionary<K, V> / IDictionary<K, V>
    if let Some(caps) = DICTIONARY_RX.captures(source_type) {
        let key = project(&caps[1]);
        let value = project(&caps[2]);
        return format!("Record<{key}, {value}>");
    }

    // 5) Primitive lookup
    if let Some(mapped) = PRIMITIVES.get(source_type) {
        return (*mapped).to_string();
    }

    // 6) Custom type: refers to another generated interface
    source_type.to_string()
}

// ————————————————————————————————————————————————————————————————————————————
// TESTS
// ————————————————————————————————————————————————————————————————————————————
