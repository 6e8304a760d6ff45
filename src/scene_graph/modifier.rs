use std::str::FromStr;

use glam::Vec3;

use crate::scene_graph::object3d::ObjectId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BooleanOperation {
    Intersect,
    Union,
    Difference,
}

impl BooleanOperation {
    pub fn as_str(&self) -> &'static str {
        match self {
            BooleanOperation::Intersect => "INTERSECT",
            BooleanOperation::Union => "UNION",
            BooleanOperation::Difference => "DIFFERENCE",
        }
    }
}

impl Default for BooleanOperation {
    fn default() -> Self {
        BooleanOperation::Difference
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownBooleanOperation(pub String);

impl FromStr for BooleanOperation {
    type Err = UnknownBooleanOperation;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "INTERSECT" => Ok(BooleanOperation::Intersect),
            "UNION" => Ok(BooleanOperation::Union),
            "DIFFERENCE" => Ok(BooleanOperation::Difference),
            _ => Err(UnknownBooleanOperation(s.to_string())),
        }
    }
}

/// One entry of a mesh's modifier stack.
#[derive(Debug, Clone, PartialEq)]
pub enum Modifier {
    Boolean {
        operation: BooleanOperation,
        object: Option<ObjectId>,
    },
    Array {
        constant_offset_displace: Vec3,
        count: u32,
    },
    /// Any modifier type the exporter has no extra fields for.
    Other(String),
}

impl Modifier {
    pub const BOOLEAN: &'static str = "BOOLEAN";
    pub const ARRAY: &'static str = "ARRAY";

    pub fn boolean(operation: BooleanOperation, object: ObjectId) -> Self {
        Modifier::Boolean {
            operation,
            object: Some(object),
        }
    }

    pub fn array(constant_offset_displace: Vec3, count: u32) -> Self {
        Modifier::Array {
            constant_offset_displace,
            count,
        }
    }

    pub fn type_name(&self) -> &str {
        match self {
            Modifier::Boolean { .. } => Self::BOOLEAN,
            Modifier::Array { .. } => Self::ARRAY,
            Modifier::Other(name) => name,
        }
    }
}
