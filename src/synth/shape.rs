//! Shape inference: JSON values to a merged structural type.

use serde_json::Value;
use std::collections::BTreeMap;

/// Inferred structure of one or more JSON samples.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    /// No sample was seen (elements of an empty array).
    Any,
    Null,
    Bool,
    Number,
    String,
    Array(Box<Shape>),
    Object(ObjectShape),
    /// At least two members of distinct kinds, never nested.
    Union(Vec<Shape>),
}

/// Properties of an object shape, kept sorted by key.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ObjectShape {
    pub properties: BTreeMap<String, Property>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Property {
    pub shape: Shape,
    /// Absent from at least one merged sample.
    pub optional: bool,
}

impl Shape {
    /// Infer the shape of a single JSON value.
    pub fn infer(value: &Value) -> Self {
        match value {
            Value::Null => Shape::Null,
            Value::Bool(_) => Shape::Bool,
            Value::Number(_) => Shape::Number,
            Value::String(_) => Shape::String,
            Value::Array(items) => {
                let element = items
                    .iter()
                    .map(Shape::infer)
                    .fold(Shape::Any, Shape::merge);
                Shape::Array(Box::new(element))
            }
            Value::Object(map) => {
                let properties = map
                    .iter()
                    .map(|(key, value)| {
                        let property = Property {
                            shape: Shape::infer(value),
                            optional: false,
                        };
                        (key.clone(), property)
                    })
                    .collect();
                Shape::Object(ObjectShape { properties })
            }
        }
    }

    /// Combine two shapes into one that accepts both.
    pub fn merge(self, other: Shape) -> Shape {
        let mut members = Vec::new();
        add_member(&mut members, self);
        add_member(&mut members, other);
        match members.len() {
            0 => Shape::Any,
            1 => members.pop().unwrap_or(Shape::Any),
            _ => {
                members.sort_by_key(Shape::rank);
                Shape::Union(members)
            }
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Shape::Null)
    }

    /// Ordering of union members; `null` always comes last.
    fn rank(&self) -> u8 {
        match self {
            Shape::Bool => 0,
            Shape::Number => 1,
            Shape::String => 2,
            Shape::Array(_) => 3,
            Shape::Object(_) => 4,
            Shape::Any => 5,
            Shape::Union(_) => 6,
            Shape::Null => 7,
        }
    }
}

fn add_member(members: &mut Vec<Shape>, shape: Shape) {
    match shape {
        Shape::Any => {}
        Shape::Union(inner) => {
            for member in inner {
                add_member(members, member);
            }
        }
        shape => {
            let rank = shape.rank();
            match members.iter().position(|m| m.rank() == rank) {
                Some(index) => {
                    let existing = std::mem::replace(&mut members[index], Shape::Any);
                    members[index] = merge_same_kind(existing, shape);
                }
                None => members.push(shape),
            }
        }
    }
}

fn merge_same_kind(a: Shape, b: Shape) -> Shape {
    match (a, b) {
        (Shape::Array(x), Shape::Array(y)) => Shape::Array(Box::new((*x).merge(*y))),
        (Shape::Object(x), Shape::Object(y)) => Shape::Object(merge_objects(x, y)),
        (a, _) => a,
    }
}

fn merge_objects(mut a: ObjectShape, mut b: ObjectShape) -> ObjectShape {
    for (key, property) in a.properties.iter_mut() {
        match b.properties.remove(key) {
            Some(other) => {
                let shape = std::mem::replace(&mut property.shape, Shape::Any);
                property.shape = shape.merge(other.shape);
                property.optional |= other.optional;
            }
            None => property.optional = true,
        }
    }
    for (key, mut property) in b.properties {
        property.optional = true;
        a.properties.insert(key, property);
    }
    a
}
