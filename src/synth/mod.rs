//! Type synthesizer: infer TypeScript declarations from a JSON sample.
//!
//! The engine always alphabetizes properties, names multi-type unions with
//! explicit `export type` aliases and emits declarations only, never runtime
//! converters.
//!
//! ```
//! use serde_json::json;
//!
//! let sample = json!({"name": "Ann", "id": 1});
//! let generated = api2ts::synth::synthesize(Some(&sample), "User").unwrap();
//! assert_eq!(generated.lines()[0], "export interface User {");
//! ```

pub mod render;
pub mod shape;

use crate::error::{Api2tsError, Result};
use render::Renderer;
use serde_json::Value;
use shape::Shape;

/// Rendered TypeScript source for one type name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedType {
    name: String,
    lines: Vec<String>,
}

impl GeneratedType {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// File contents: the lines joined by `\n`.
    pub fn source(&self) -> String {
        self.lines.join("\n")
    }
}

/// Generate declarations for `sample` under the type name `name`.
///
/// Fails with [`Api2tsError::EmptyResult`] when there is no sample or the
/// sample has no object shape to declare.
pub fn synthesize(sample: Option<&Value>, name: &str) -> Result<GeneratedType> {
    let sample = sample.ok_or(Api2tsError::EmptyResult)?;
    let shape = Shape::infer(sample);
    let lines = Renderer::new().render(&shape, name);

    if lines.is_empty() {
        return Err(Api2tsError::EmptyResult);
    }

    Ok(GeneratedType {
        name: name.to_string(),
        lines,
    })
}
