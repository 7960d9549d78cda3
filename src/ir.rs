// Recovered shape of one C# declaration. No source text here.

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassDescriptor {
    pub name: String,
    pub properties: Vec<PropertyDescriptor>, // source order, duplicates kept
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PropertyDescriptor {
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub ty: Option<String>,  // raw C# type expression, e.g. `List<int?>`
}

impl ClassDescriptor {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), properties: Vec::new() }
    }
    #[cfg(test)]
    pub fn with_property(mut self, name: &str, ty: &str) -> Self {
        self.properties.push(PropertyDescriptor::new(name, ty));
        self
    }
}

impl PropertyDescriptor {
    pub fn new(name: &str, ty: &str) -> Self {
        Self { name: Some(name.to_string()), ty: Some(ty.to_string()) }
    }
}
