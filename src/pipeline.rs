//! source units → extract → emit, in caller order.
use crate::config::GeneratorOptions;
use crate::emit::Emitter;
use crate::files::ScanResult;
use crate::ir::ClassDescriptor;

/// One compilation unit: an identifier (usually a path) and its text.
#[derive(Debug, Clone)]
pub struct SourceUnit {
    pub id: String,
    pub text: String,
}

#[derive(Debug, Clone)]
pub struct Generation {
    pub output: String,
    pub classes: Vec<ClassDescriptor>,
    /// ids of units that declared no class
    pub unparsed: Vec<String>,
}

impl From<ScanResult> for SourceUnit {
    fn from(scan: ScanResult) -> Self {
        Self { id: scan.path.to_string_lossy().to_string(), text: scan.content }
    }
}

pub fn extract_all(units: &[SourceUnit]) -> (Vec<ClassDescriptor>, Vec<String>) {
    let mut classes = Vec::new();
    let mut unparsed = Vec::new();
    for unit in units {
        match crate::extract::extract(&unit.text) {
            Some(class) => classes.push(class),
            None => unparsed.push(unit.id.clone()),
        }
    }
    (classes, unparsed)
}

pub fn generate(units: &[SourceUnit], options: GeneratorOptions) -> Generation {
    let (classes, unparsed) = extract_all(units);
    let output = Emitter::new(options).emit_all(&classes);
    Generation { output, classes, unparsed }
}

// ————————————————————————————————————————————————————————————————————————————
// TESTS
// ————————————————————————————————————————————————————————————————————————————
