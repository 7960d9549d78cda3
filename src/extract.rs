//! Structural extraction of C# DTO classes.
//!
//! Pattern recognition, not parsing: the class name is the first
//! `class <Identifier>` in the text, and properties are every
//! `public <Type> <Name> { get; set; }` auto-property found anywhere in it.
//! Brace nesting is never tracked, so an unclosed class body still yields its
//! properties and a nested class contributes to the outer descriptor.
use once_cell::sync::Lazy;
use regex::Regex;

use crate::ir::{ClassDescriptor, PropertyDescriptor};

static CLASS_RX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"class\s+(\w+)").expect("class pattern is valid")
});

// public\s+                 visibility
// (\w+(?:<[^>]+>)?\??)      type: base, one optional generic argument list, optional `?`
// \s+(\w+)                  property name
// \s*\{\s*get;\s*set;\s*\}  auto-property accessors, no bodies
static PROPERTY_RX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"public\s+(\w+(?:<[^>]+>)?\??)\s+(\w+)\s*\{\s*get;\s*set;\s*\}")
        .expect("property pattern is valid")
});

/// Recover one class descriptor from a compilation unit.
///
/// Returns `None` when the text declares no class, whether or not any
/// properties could be found.
pub fn extract(source: &str) -> Option<ClassDescriptor> {
    let name = class_name(source)?;
    let mut class = ClassDescriptor::new(name);
    class.properties = properties(source);
    Some(class)
}

fn class_name(source: &str) -> Option<String> {
    CLASS_RX.captures(source).map(|caps| caps[1].to_string())
}

fn properties(source: &str) -> Vec<PropertyDescriptor> {
    PROPERTY_RX
        .captures_iter(source)
        .map(|caps| PropertyDescriptor::new(&caps[2], &caps[1]))
        .collect()
}

// ————————————————————————————————————————————————————————————————————————————
// TESTS
// ————————————————————————————————————————————————————————————————————————————
