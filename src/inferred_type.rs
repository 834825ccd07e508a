use crate::inferred_number::NumType;
use crate::naming::identifier_for;
use chrono::DateTime;
use serde_json::{Map, Value};

/// A leaf type in the generated declarations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scalar {
    /// Nulls and anything that could not be reconciled.
    Any,
    Bool,
    Number(NumType),
    String,
    /// A string that parses as an RFC 3339 date-time.
    Timestamp,
}

impl Scalar {
    fn widen(self, other: Self) -> Self {
        match (self, other) {
            (Scalar::Number(a), Scalar::Number(b)) => Scalar::Number(a.widen(b)),
            (a, b) if a == b => a,
            _ => Scalar::Any,
        }
    }

    /// The Go spelling of this scalar.
    pub fn keyword(self) -> &'static str {
        match self {
            Scalar::Any => "any",
            Scalar::Bool => "bool",
            Scalar::Number(NumType::Int) => "int",
            Scalar::Number(NumType::Int64) => "int64",
            Scalar::Number(NumType::Float64) => "float64",
            Scalar::String => "string",
            Scalar::Timestamp => "time.Time",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum InferredType {
    Scalar(Scalar),
    Slice(Box<InferredType>),
    Struct(Struct),
}

/// A record type with its fields in the order they were first seen.
///
/// `name` stays empty until the naming pass assigns one.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Struct {
    pub name: String,
    pub fields: Vec<Field>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    /// The JSON key exactly as it appeared in the input.
    pub key: String,
    pub ident: String,
    pub ty: InferredType,
    /// Set once the key is missing from at least one merged object.
    pub optional: bool,
    /// The first concrete scalar observed under this key, stringified.
    pub example: Option<String>,
}

impl InferredType {
    pub fn infer(value: &Value) -> Self {
        match value {
            Value::Null => InferredType::Scalar(Scalar::Any),
            Value::Bool(_) => InferredType::Scalar(Scalar::Bool),
            Value::Number(n) => {
                InferredType::Scalar(Scalar::Number(NumType::from_literal(&n.to_string())))
            }
            Value::String(s) => {
                if DateTime::parse_from_rfc3339(s).is_ok() {
                    InferredType::Scalar(Scalar::Timestamp)
                } else {
                    InferredType::Scalar(Scalar::String)
                }
            }
            Value::Array(vals) => {
                let element = vals
                    .iter()
                    .map(InferredType::infer)
                    .reduce(InferredType::merge)
                    .unwrap_or(InferredType::Scalar(Scalar::Any));

                InferredType::Slice(Box::new(element))
            }
            Value::Object(obj) => InferredType::Struct(Struct::infer(obj)),
        }
    }

    /// Unifies two inferred shapes, falling back to `any` when they cannot be
    /// reconciled.
    pub fn merge(self, other: Self) -> Self {
        self.try_merge(other)
            .unwrap_or(InferredType::Scalar(Scalar::Any))
    }

    // `None` means the shapes are structurally incompatible. Slices pass that
    // upward so that `[[1], [{}]]` collapses to `[]any` rather than `[][]any`.
    fn try_merge(self, other: Self) -> Option<Self> {
        match (self, other) {
            (InferredType::Scalar(a), InferredType::Scalar(b)) => {
                Some(InferredType::Scalar(a.widen(b)))
            }
            (InferredType::Slice(a), InferredType::Slice(b)) => {
                a.try_merge(*b).map(|element| InferredType::Slice(Box::new(element)))
            }
            (InferredType::Struct(a), InferredType::Struct(b)) => {
                Some(InferredType::Struct(a.merge(b)))
            }
            _ => None,
        }
    }
}

impl Struct {
    fn infer(obj: &Map<String, Value>) -> Self {
        Struct {
            name: String::new(),
            fields: obj.iter().map(|(k, v)| Field::infer(k, v)).collect(),
        }
    }

    /// Unions the fields of two structs.
    ///
    /// Fields of `self` keep their order and `other`'s extra fields are
    /// appended. A key missing from either side becomes optional.
    pub fn merge(mut self, other: Struct) -> Struct {
        let mut incoming = other.fields;

        for field in &mut self.fields {
            match incoming.iter().position(|f| f.key == field.key) {
                Some(i) => field.absorb(incoming.remove(i)),
                None => field.optional = true,
            }
        }

        for mut field in incoming {
            field.optional = true;
            self.fields.push(field);
        }

        self
    }

    pub fn field(&self, key: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.key == key)
    }
}

impl Field {
    fn infer(key: &str, value: &Value) -> Self {
        Field {
            key: key.to_owned(),
            ident: identifier_for(key),
            ty: InferredType::infer(value),
            optional: false,
            example: example_of(value),
        }
    }

    fn absorb(&mut self, other: Field) {
        let ty = std::mem::replace(&mut self.ty, InferredType::Scalar(Scalar::Any));
        self.ty = ty.merge(other.ty);
        self.optional |= other.optional;
        if self.example.is_none() {
            self.example = other.example;
        }
    }
}

fn example_of(value: &Value) -> Option<String> {
    match value {
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        Value::String(s) => Some(s.clone()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}
