use glam::{Quat, Vec3};
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::export::error::ExportError;
use crate::scene_graph::{EmptyData, MeshData, Modifier, Object3D, ObjectData};
use crate::source::SceneSource;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MeshRecord {
    pub name: String,
    pub scale: [f64; 3],
    pub rotation: [f64; 4],
    pub location: [f64; 3],
    pub render: bool,
    pub material: String,
    pub modifiers: Vec<ModifierRecord>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmptyRecord {
    pub name: String,
    pub scale: [f64; 3],
    pub rotation: [f64; 4],
    pub location: [f64; 3],
    pub render: bool,
    pub object: String,
}

/// One exported object. Serializes as a plain mapping, field order as
/// declared.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ExportRecord {
    Mesh(MeshRecord),
    Empty(EmptyRecord),
}

#[derive(Debug, Clone, PartialEq)]
pub enum ModifierRecord {
    Boolean { operation: String, object: String },
    Array { offset: [f64; 3], count: u32 },
    Other { type_name: String },
}

impl ModifierRecord {
    pub fn type_name(&self) -> &str {
        match self {
            ModifierRecord::Boolean { .. } => Modifier::BOOLEAN,
            ModifierRecord::Array { .. } => Modifier::ARRAY,
            ModifierRecord::Other { type_name } => type_name,
        }
    }
}

impl Serialize for ModifierRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("type", self.type_name())?;
        match self {
            ModifierRecord::Boolean { operation, object } => {
                map.serialize_entry("operation", operation)?;
                map.serialize_entry("object", object)?;
            }
            ModifierRecord::Array { offset, count } => {
                map.serialize_entry("offset", offset)?;
                map.serialize_entry("count", count)?;
            }
            ModifierRecord::Other { .. } => {}
        }
        map.end()
    }
}

/// Builds the record for one object. Unsupported object types give
/// `Ok(None)`. A record is either built completely or not at all.
pub fn build_record<S: SceneSource + ?Sized>(
    scene: &S,
    object: &Object3D,
    default_material: &str,
) -> Result<Option<ExportRecord>, ExportError> {
    match &object.data {
        ObjectData::Mesh(mesh) => build_mesh(scene, object, mesh, default_material)
            .map(|record| Some(ExportRecord::Mesh(record))),
        ObjectData::Empty(empty) => {
            build_empty(scene, object, empty).map(|record| Some(ExportRecord::Empty(record)))
        }
        ObjectData::Other(_) => Ok(None),
    }
}

fn build_mesh<S: SceneSource + ?Sized>(
    scene: &S,
    object: &Object3D,
    mesh: &MeshData,
    default_material: &str,
) -> Result<MeshRecord, ExportError> {
    let modifiers = mesh
        .modifiers
        .iter()
        .enumerate()
        .map(|(index, modifier)| build_modifier(scene, object, index, modifier))
        .collect::<Result<Vec<_>, _>>()?;

    let material = mesh
        .material
        .as_deref()
        .unwrap_or(default_material)
        .to_lowercase();

    Ok(MeshRecord {
        name: object.name.clone(),
        scale: vec3(object.transform.scale()),
        rotation: quat(object.transform.rotation()),
        location: vec3(object.transform.translation()),
        render: object.is_rendered(),
        material,
        modifiers,
    })
}

fn build_modifier<S: SceneSource + ?Sized>(
    scene: &S,
    object: &Object3D,
    index: usize,
    modifier: &Modifier,
) -> Result<ModifierRecord, ExportError> {
    match modifier {
        Modifier::Boolean {
            operation,
            object: target,
        } => {
            let target = target
                .and_then(|id| scene.object(id))
                .ok_or_else(|| ExportError::MissingBooleanTarget {
                    object: object.name.clone(),
                    index,
                })?;

            Ok(ModifierRecord::Boolean {
                operation: operation.as_str().to_string(),
                object: target.name.clone(),
            })
        }
        Modifier::Array {
            constant_offset_displace,
            count,
        } => Ok(ModifierRecord::Array {
            offset: vec3(*constant_offset_displace),
            count: *count,
        }),
        Modifier::Other(type_name) => Ok(ModifierRecord::Other {
            type_name: type_name.clone(),
        }),
    }
}

fn build_empty<S: SceneSource + ?Sized>(
    scene: &S,
    object: &Object3D,
    empty: &EmptyData,
) -> Result<EmptyRecord, ExportError> {
    let group = empty
        .dupli_group
        .and_then(|id| scene.group(id))
        .ok_or_else(|| ExportError::MissingDupliGroup {
            object: object.name.clone(),
        })?;

    let first = group
        .first_object()
        .and_then(|id| scene.object(id))
        .ok_or_else(|| ExportError::EmptyDupliGroup {
            object: object.name.clone(),
            group: group.name.clone(),
        })?;

    Ok(EmptyRecord {
        name: object.name.clone(),
        scale: vec3(object.transform.scale()),
        rotation: quat(object.transform.rotation()),
        location: vec3(object.transform.translation()),
        render: object.is_rendered(),
        object: first.name.clone(),
    })
}

fn vec3(v: Vec3) -> [f64; 3] {
    [f64::from(v.x), f64::from(v.y), f64::from(v.z)]
}

fn quat(q: Quat) -> [f64; 4] {
    [
        f64::from(q.x),
        f64::from(q.y),
        f64::from(q.z),
        f64::from(q.w),
    ]
}
