//! Constraint expression trees.
//!
//! A field may declare relations between its arguments, e.g.
//! `XOR(name, street)`: exactly one of `name` and `street` is expected.
//! Operands are either argument names or nested relations, so a constraint
//! is a small binary tree. The relation name is an open label; `XOR`,
//! `WITH` and `THEN` are conventions, not a closed set.

use crate::{ConstraintError, ConstraintResult};
use serde::{Deserialize, Serialize};
use serde_json::Value as Json;
use std::fmt;

/// Maximum nesting accepted when decoding constraints from JSON.
pub const MAX_DECODE_DEPTH: usize = 128;

/// One side of a constraint relation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum Operand {
    /// Name of a sibling argument on the same field.
    Field(String),
    /// A nested relation.
    Nested(Box<ConstraintExpr>),
}

impl Operand {
    pub fn field(name: impl Into<String>) -> Self {
        Operand::Field(name.into())
    }

    pub fn nested(expr: ConstraintExpr) -> Self {
        Operand::Nested(Box::new(expr))
    }

    /// Get the argument name if this operand is a field reference.
    pub fn as_field(&self) -> Option<&str> {
        match self {
            Operand::Field(name) => Some(name),
            Operand::Nested(_) => None,
        }
    }

    /// Get the nested relation if this operand is one.
    pub fn as_nested(&self) -> Option<&ConstraintExpr> {
        match self {
            Operand::Field(_) => None,
            Operand::Nested(expr) => Some(expr),
        }
    }

    fn depth(&self) -> usize {
        match self {
            Operand::Field(_) => 0,
            Operand::Nested(expr) => expr.depth(),
        }
    }

    fn collect_refs<'a>(&'a self, out: &mut Vec<&'a str>) {
        match self {
            Operand::Field(name) => out.push(name),
            Operand::Nested(expr) => expr.collect_refs(out),
        }
    }

    fn decode(value: &Json, path: &str, depth: usize) -> ConstraintResult<Self> {
        match value {
            Json::String(name) => Ok(Operand::Field(name.clone())),
            Json::Object(_) => Ok(Operand::nested(ConstraintExpr::decode(
                value,
                path,
                depth + 1,
            )?)),
            other => Err(ConstraintError::type_mismatch(
                path,
                "argument name or nested constraint",
                json_kind(other),
            )),
        }
    }
}

impl From<&str> for Operand {
    fn from(name: &str) -> Self {
        Operand::Field(name.to_string())
    }
}

impl From<String> for Operand {
    fn from(name: String) -> Self {
        Operand::Field(name)
    }
}

impl From<ConstraintExpr> for Operand {
    fn from(expr: ConstraintExpr) -> Self {
        Operand::nested(expr)
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operand::Field(name) => write!(f, "{}", name),
            Operand::Nested(expr) => write!(f, "{}", expr),
        }
    }
}

/// A named relation over one or two operands.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "serde_json::Value")]
pub struct ConstraintExpr {
    /// Relation label, e.g. `XOR`.
    pub name: String,
    pub left_side: Operand,
    /// Absent for unary relations.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub right_side: Option<Operand>,
}

impl ConstraintExpr {
    /// Create a unary relation.
    pub fn new(name: impl Into<String>, left: impl Into<Operand>) -> Self {
        Self {
            name: name.into(),
            left_side: left.into(),
            right_side: None,
        }
    }

    /// Create a binary relation.
    pub fn binary(
        name: impl Into<String>,
        left: impl Into<Operand>,
        right: impl Into<Operand>,
    ) -> Self {
        Self {
            name: name.into(),
            left_side: left.into(),
            right_side: Some(right.into()),
        }
    }

    /// Nesting depth; a relation over plain argument names has depth 1.
    pub fn depth(&self) -> usize {
        let right = self.right_side.as_ref().map_or(0, Operand::depth);
        1 + self.left_side.depth().max(right)
    }

    /// Every argument name referenced in the tree, left to right.
    pub fn field_refs(&self) -> Vec<&str> {
        let mut out = Vec::new();
        self.collect_refs(&mut out);
        out
    }

    fn collect_refs<'a>(&'a self, out: &mut Vec<&'a str>) {
        self.left_side.collect_refs(out);
        if let Some(right) = &self.right_side {
            right.collect_refs(out);
        }
    }

    /// Decode a constraint from its JSON form
    /// (`{"name": .., "leftSide": .., "rightSide": ..}`).
    pub fn from_json(value: &Json) -> ConstraintResult<Self> {
        Self::from_json_at(value, "constraint")
    }

    /// Like [`ConstraintExpr::from_json`], reporting errors relative to `path`.
    pub fn from_json_at(value: &Json, path: &str) -> ConstraintResult<Self> {
        Self::decode(value, path, 1)
    }

    fn decode(value: &Json, path: &str, depth: usize) -> ConstraintResult<Self> {
        if depth > MAX_DECODE_DEPTH {
            return Err(ConstraintError::NestingTooDeep {
                max: MAX_DECODE_DEPTH,
            });
        }

        let Json::Object(map) = value else {
            return Err(ConstraintError::type_mismatch(
                path,
                "object",
                json_kind(value),
            ));
        };

        let name = match map.get("name") {
            None | Some(Json::Null) => return Err(ConstraintError::missing_field("name", path)),
            Some(Json::String(name)) if name.is_empty() => {
                return Err(ConstraintError::empty_name(path))
            }
            Some(Json::String(name)) => name.clone(),
            Some(other) => {
                return Err(ConstraintError::type_mismatch(
                    format!("{}.name", path),
                    "string",
                    json_kind(other),
                ))
            }
        };

        let left_side = match map.get("leftSide") {
            None | Some(Json::Null) => {
                return Err(ConstraintError::missing_field("leftSide", path))
            }
            Some(left) => Operand::decode(left, &format!("{}.leftSide", path), depth)?,
        };

        let right_side = match map.get("rightSide") {
            None | Some(Json::Null) => None,
            Some(right) => Some(Operand::decode(
                right,
                &format!("{}.rightSide", path),
                depth,
            )?),
        };

        Ok(Self {
            name,
            left_side,
            right_side,
        })
    }
}

impl TryFrom<&Json> for ConstraintExpr {
    type Error = ConstraintError;

    fn try_from(value: &Json) -> Result<Self, Self::Error> {
        Self::from_json(value)
    }
}

impl TryFrom<Json> for ConstraintExpr {
    type Error = ConstraintError;

    fn try_from(value: Json) -> Result<Self, Self::Error> {
        Self::from_json(&value)
    }
}

impl fmt::Display for ConstraintExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({}", self.name, self.left_side)?;
        if let Some(right) = &self.right_side {
            write!(f, ", {}", right)?;
        }
        write!(f, ")")
    }
}

fn json_kind(value: &Json) -> &'static str {
    match value {
        Json::Null => "null",
        Json::Bool(_) => "boolean",
        Json::Number(_) => "number",
        Json::String(_) => "string",
        Json::Array(_) => "array",
        Json::Object(_) => "object",
    }
}
