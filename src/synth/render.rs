//! TypeScript rendering of inferred shapes.
//!
//! Output is declarations only: `export interface` for objects and
//! `export type` aliases for unions with more than one non-null member.

use super::shape::{ObjectShape, Shape};
use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

const INDENT: &str = "    ";

static IDENTIFIER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z_$][A-Za-z0-9_$]*$").expect("identifier pattern is valid")
});

enum Declaration {
    /// Reserved slot, filled once nested types have been declared.
    Pending,
    Interface {
        name: String,
        fields: Vec<Field>,
    },
    Alias {
        name: String,
        members: Vec<String>,
    },
}

struct Field {
    key: String,
    optional: bool,
    type_ref: String,
}

/// Collects declarations while walking a shape tree.
#[derive(Default)]
pub struct Renderer {
    declarations: Vec<Declaration>,
    used_names: HashSet<String>,
}

impl Renderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare the root shape under `name` and return the rendered lines.
    ///
    /// Primitive roots declare nothing, so the result may be empty.
    pub fn render(mut self, root: &Shape, name: &str) -> Vec<String> {
        self.declare_root(root, name);
        self.into_lines()
    }

    fn declare_root(&mut self, shape: &Shape, name: &str) {
        match shape {
            Shape::Object(object) => {
                let name = self.reserve(name);
                self.declare_interface(name, object);
            }
            Shape::Array(element) => self.declare_root(element, name),
            Shape::Union(members) => {
                let name = self.reserve(name);
                self.declare_alias(name, members);
            }
            Shape::Any | Shape::Null | Shape::Bool | Shape::Number | Shape::String => {}
        }
    }

    /// Render a type reference, declaring named types as needed.
    fn type_ref(&mut self, shape: &Shape, hint: &str) -> String {
        match shape {
            Shape::Any => "any".to_string(),
            Shape::Null => "null".to_string(),
            Shape::Bool => "boolean".to_string(),
            Shape::Number => "number".to_string(),
            Shape::String => "string".to_string(),
            Shape::Array(element) => {
                let inner = self.type_ref(element, &singular(hint));
                if inner.contains(' ') {
                    format!("({})[]", inner)
                } else {
                    format!("{}[]", inner)
                }
            }
            Shape::Object(object) => {
                let name = self.reserve(&pascal_case(hint));
                self.declare_interface(name.clone(), object);
                name
            }
            Shape::Union(members) => {
                let non_null: Vec<&Shape> = members.iter().filter(|m| !m.is_null()).collect();
                if let [only] = non_null.as_slice() {
                    let inner = self.type_ref(only, hint);
                    return format!("{} | null", inner);
                }
                let name = self.reserve(&pascal_case(hint));
                self.declare_alias(name.clone(), members);
                name
            }
        }
    }

    fn declare_interface(&mut self, name: String, object: &ObjectShape) {
        let slot = self.declarations.len();
        self.declarations.push(Declaration::Pending);

        let fields = object
            .properties
            .iter()
            .map(|(key, property)| Field {
                key: property_key(key),
                optional: property.optional,
                type_ref: self.type_ref(&property.shape, key),
            })
            .collect();

        self.declarations[slot] = Declaration::Interface { name, fields };
    }

    fn declare_alias(&mut self, name: String, members: &[Shape]) {
        let slot = self.declarations.len();
        self.declarations.push(Declaration::Pending);

        let object_hint = format!("{}Class", name);
        let members = members
            .iter()
            .map(|member| self.type_ref(member, &object_hint))
            .collect();

        self.declarations[slot] = Declaration::Alias { name, members };
    }

    /// Claim a type name, appending a counter on collision.
    fn reserve(&mut self, base: &str) -> String {
        let mut candidate = base.to_string();
        let mut counter = 2;
        while self.used_names.contains(&candidate) {
            candidate = format!("{}{}", base, counter);
            counter += 1;
        }
        self.used_names.insert(candidate.clone());
        candidate
    }

    fn into_lines(self) -> Vec<String> {
        let mut lines = Vec::new();
        for declaration in self.declarations {
            if matches!(declaration, Declaration::Pending) {
                continue;
            }
            if !lines.is_empty() {
                lines.push(String::new());
            }
            match declaration {
                Declaration::Pending => {}
                Declaration::Interface { name, fields } => {
                    lines.push(format!("export interface {} {{", name));
                    let labels: Vec<String> = fields
                        .iter()
                        .map(|f| format!("{}{}:", f.key, if f.optional { "?" } else { "" }))
                        .collect();
                    let width = labels.iter().map(|l| l.chars().count()).max().unwrap_or(0);
                    for (label, field) in labels.iter().zip(&fields) {
                        lines.push(format!(
                            "{}{:<width$} {};",
                            INDENT,
                            label,
                            field.type_ref,
                            width = width
                        ));
                    }
                    lines.push("}".to_string());
                }
                Declaration::Alias { name, members } => {
                    lines.push(format!("export type {} = {};", name, members.join(" | ")));
                }
            }
        }
        lines
    }
}

/// Quote keys that are not plain identifiers.
fn property_key(key: &str) -> String {
    if IDENTIFIER.is_match(key) {
        key.to_string()
    } else {
        serde_json::Value::String(key.to_string()).to_string()
    }
}

/// `user_address` / `user-address` / `userAddress` -> `UserAddress`.
pub(crate) fn pascal_case(input: &str) -> String {
    let mut out = String::new();
    for part in input.split(|c: char| !c.is_ascii_alphanumeric()) {
        let mut chars = part.chars();
        if let Some(first) = chars.next() {
            out.push(first.to_ascii_uppercase());
            out.extend(chars);
        }
    }
    if out.is_empty() {
        return "Type".to_string();
    }
    if out.starts_with(|c: char| c.is_ascii_digit()) {
        out.insert_str(0, "Type");
    }
    out
}

/// Best-effort English singular used to name array elements.
pub(crate) fn singular(word: &str) -> String {
    let lower = word.to_ascii_lowercase();
    let stem = if lower.ends_with("ies") && word.len() > 3 {
        Some(format!("{}y", &word[..word.len() - 3]))
    } else if ["sses", "xes", "ches", "shes"].iter().any(|s| lower.ends_with(s)) {
        Some(word[..word.len() - 2].to_string())
    } else if lower.ends_with('s') && !lower.ends_with("ss") && word.len() > 1 {
        Some(word[..word.len() - 1].to_string())
    } else {
        None
    };
    stem.unwrap_or_else(|| format!("{}Element", word))
}
