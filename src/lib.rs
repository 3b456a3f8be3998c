//! # api2ts — TypeScript types from a live API
//!
//! Fetch a JSON response, infer its structure, and save the result as a
//! `<Name>.ts` declaration file.
//!
//! ## Quick Example
//!
//! ```
//! use serde_json::json;
//!
//! let sample = json!({"id": 1, "name": "Ann"});
//! let generated = api2ts::synthesize(Some(&sample), "User")?;
//! assert_eq!(
//!     generated.source(),
//!     "export interface User {\n    id:   number;\n    name: string;\n}"
//! );
//! # Ok::<(), api2ts::error::Api2tsError>(())
//! ```
//!
//! ## Flow
//!
//! | Step       | Module     | Fails with     |
//! |------------|------------|----------------|
//! | Configure  | `prompt`   | `Validation`   |
//! | Fetch      | `fetch`    | `Fetch`, `Parse` |
//! | Synthesize | `synth`    | `EmptyResult`  |
//! | Write      | `writer`   | `Write`        |

pub mod app;
pub mod config;
pub mod editor;
pub mod error;
pub mod fetch;
pub mod logging;
pub mod paths;
pub mod progress;
pub mod prompt;
pub mod synth;
pub mod testing;
pub mod validate;
pub mod writer;

pub use synth::synthesize;

pub mod prelude {
    pub use crate::app::{App, Flags, Report, Stage};
    pub use crate::config::{Configuration, Settings};
    pub use crate::editor::Editor;
    pub use crate::error::*;
    pub use crate::fetch::{Fetcher, representative_sample};
    pub use crate::paths::SavePaths;
    pub use crate::prompt::{DialoguerTerminal, Prompter, Terminal};
    pub use crate::synth::{GeneratedType, synthesize};
    pub use crate::writer::write_types;
}
