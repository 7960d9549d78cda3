//! TypeScript `interface` emission from class descriptors.
use chrono::{SecondsFormat, Utc};

use crate::config::{GeneratorOptions, NamingConvention};
use crate::ir::{ClassDescriptor, PropertyDescriptor};
use crate::project::project;

const GENERATOR_IDENTITY: &str = "Auto-generated by dotnet-to-ts";
const UNTYPED: &str = "any";
const EMPTY_BODY_MARKER: &str = "// No properties";

pub struct Emitter {
    options: GeneratorOptions,
}

impl Emitter {
    pub fn new(options: GeneratorOptions) -> Self {
        Self { options }
    }

    /// Emit one declaration. Reads the clock only when `add_timestamp` is on.
    pub fn emit(&self, class: &ClassDescriptor) -> String {
        let stamp = self.options.add_timestamp.then(now_rfc3339);
        self.render(class, stamp.as_deref())
    }

    /// Emit every declaration in caller order, separated by a blank line.
    pub fn emit_all(&self, classes: &[ClassDescriptor]) -> String {
        let stamp = self.options.add_timestamp.then(now_rfc3339);
        classes
            .iter()
            .map(|class| self.render(class, stamp.as_deref()))
            .collect::<Vec<_>>()
            .join("\n\n")
    }

    fn render(&self, class: &ClassDescriptor, generated_on: Option<&str>) -> String {
        let indent = &self.options.indentation;
        let mut lines = Vec::<String>::new();

        if let Some(generated_on) = generated_on {
            lines.push("/**".to_string());
            lines.push(format!(" * {GENERATOR_IDENTITY}"));
            lines.push(format!(" * Generated on: {generated_on}"));
            lines.push(" * DO NOT EDIT MANUALLY".to_string());
            lines.push(" */".to_string());
        }

        let export = if self.options.export_interfaces { "export " } else { "" };
        lines.push(format!("{export}interface {} {{", class.name));

        let members = class
            .properties
            .iter()
            .filter_map(|property| self.render_property(property))
            .collect::<Vec<_>>();
        if members.is_empty() {
            lines.push(format!("{indent}{EMPTY_BODY_MARKER}"));
        } else {
            lines.extend(members.into_iter().map(|member| format!("{indent}{member}")));
        }

        lines.push("}".to_string());
        lines.join("\n")
    }

    // Nameless properties cannot be declared and are dropped.
    fn render_property(&self, property: &PropertyDescriptor) -> Option<String> {
        let name = property.name.as_deref()?;
        let name = self.options.property_naming_convention.apply(name);
        let ty = property.ty.as_deref().map(project).unwrap_or_else(|| UNTYPED.to_string());
        Some(format!("{name}: {ty};"))
    }
}

impl Default for Emitter {
    fn default() -> Self {
        Self::new(GeneratorOptions::default())
    }
}

impl NamingConvention {
    pub fn apply(self, name: &str) -> String {
        match self {
            NamingConvention::Preserve => name.to_string(),
            NamingConvention::CamelCase => map_first_char(name, |c| c.to_lowercase().collect()),
            NamingConvention::PascalCase => map_first_char(name, |c| c.to_uppercase().collect()),
        }
    }
}

// ————————————————————————————————————————————————————————————————————————————
// INTERNAL HELPERS
// ————————————————————————————————————————————————————————————————————————————

fn map_first_char(name: &str, f: impl FnOnce(char) -> String) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => f(first) + chars.as_str(),
        None => String::new(),
    }
}

fn now_rfc3339() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

// ————————————————————————————————————————————————————————————————————————————
// TESTS
// ————————————————————————————————————————————————————————————————————————————

#[cfg(test)]
mod tests {
    use super::*;

    fn untimed() -> Emitter {
        Emitter::new(GeneratorOptions { add_timestamp: false, ..GeneratorOptions::default() })
    }

    fn user_dto() -> ClassDescriptor {
        ClassDescriptor::new("UserDto").with_property("Id", "int")
    }

    #[test]
    fn default_options_exported_two_space_indent() {
        let out = untimed().emit(&user_dto());
        assert_eq!(out, "export interface UserDto {\n  Id: number;\n}");
    }

    #[test]
    fn maps_property_types() {
        let class = ClassDescriptor::new("TestDto")
            .with_property("IntProp", "int")
            .with_property("BoolProp", "bool")
            .with_property("DateProp", "DateTime")
            .with_property("Email", "string?")
            .with_property("Items", "List<string?>")
            .with_property("Data", "Dictionary<string, int>")
            .with_property("Entity", "EntityDto");
        let out = untimed().emit(&class);
        assert!(out.contains("  IntProp: number;"));
        assert!(out.contains("  BoolProp: boolean;"));
        assert!(out.contains("  DateProp: string;"));
        assert!(out.contains("  Email: string | null;"));
        assert!(out.contains("  Items: (string | null)[];"));
        assert!(out.contains("  Data: Record<string, number>;"));
        assert!(out.contains("  Entity: EntityDto;"));
    }

    #[test]
    fn missing_type_is_any() {
        let mut class = ClassDescriptor::new("UndefinedTypeDto");
        class.properties.push(PropertyDescriptor { name: Some("UnknownProp".into()), ty: None });
        assert!(untimed().emit(&class).contains("UnknownProp: any;"));
    }

    #[test]
    fn empty_class_gets_marker_only() {
        let out = untimed().emit(&ClassDescriptor::new("EmptyDto"));
        assert_eq!(out, "export interface EmptyDto {\n  // No properties\n}");
    }

    #[test]
    fn export_can_be_disabled() {
        let emitter = Emitter::new(GeneratorOptions {
            export_interfaces: false,
            add_timestamp: false,
            ..GeneratorOptions::default()
        });
        let out = emitter.emit(&user_dto());
        assert!(out.starts_with("interface UserDto {"));
        assert!(!out.contains("export"));
    }

    #[test]
    fn timestamp_block_on_by_default() {
        let out = Emitter::default().emit(&user_dto());
        assert!(out.starts_with("/**\n"));
        assert!(out.contains("Auto-generated by dotnet-to-ts"));
        assert!(out.contains("Generated on: "));
        assert!(out.contains("DO NOT EDIT MANUALLY"));
        assert!(out.contains(" */\nexport interface UserDto {"));

        let out = untimed().emit(&user_dto());
        assert!(!out.contains("Auto-generated"));
        assert!(!out.contains("Generated on:"));
    }

    #[test]
    fn custom_indentation() {
        for indent in ["    ", "\t"] {
            let emitter = Emitter::new(GeneratorOptions {
                indentation: indent.to_string(),
                add_timestamp: false,
                ..GeneratorOptions::default()
            });
            assert!(emitter.emit(&user_dto()).contains(&format!("\n{indent}Id: number;")));
        }
    }

    #[test]
    fn naming_conventions() {
        let class = ClassDescriptor::new("UserDto").with_property("FirstName", "string");
        let lower = ClassDescriptor::new("UserDto").with_property("firstName", "string");
        let with = |convention| Emitter::new(GeneratorOptions {
            property_naming_convention: convention,
            add_timestamp: false,
            ..GeneratorOptions::default()
        });
        assert!(with(NamingConvention::Preserve).emit(&class).contains("FirstName: string;"));
        assert!(with(NamingConvention::CamelCase).emit(&class).contains("firstName: string;"));
        assert!(with(NamingConvention::PascalCase).emit(&lower).contains("FirstName: string;"));
        assert_eq!(NamingConvention::CamelCase.apply(""), "");
    }

    #[test]
    fn emit_all_keeps_order_and_separates_with_blank_line() {
        let order = ClassDescriptor::new("OrderDto").with_property("OrderId", "int");
        let out = untimed().emit_all(&[user_dto(), order.clone()]);
        assert_eq!(
            out,
            "export interface UserDto {\n  Id: number;\n}\n\nexport interface OrderDto {\n  OrderId: number;\n}"
        );

        let timed = Emitter::default().emit_all(&[user_dto(), order]);
        assert!(timed.contains("}\n\n/**"));
        let user_at = timed.find("interface UserDto").unwrap();
        let order_at = timed.find("interface OrderDto").unwrap();
        assert!(user_at < order_at);
    }
}
