//! JSON scene descriptions: the snapshot a host-side script writes out
//! instead of printing the dump itself.

use std::path::Path;

use glam::Vec3;
use serde::Deserialize;

use crate::import::error::ImportError;
use crate::scene_graph::{
    BooleanOperation, GroupId, Modifier, Object3D, ObjectData, ObjectId, Scene, Transform,
    LAYER_COUNT,
};

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SceneDescription {
    #[serde(default)]
    pub objects: Vec<ObjectDescription>,
    #[serde(default)]
    pub groups: Vec<GroupDescription>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ObjectDescription {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default = "default_scale")]
    pub scale: [f32; 3],
    /// x, y, z, w
    #[serde(default = "default_rotation")]
    pub rotation: [f32; 4],
    #[serde(default)]
    pub location: [f32; 3],
    #[serde(default = "default_layers")]
    pub layers: Vec<bool>,
    #[serde(default)]
    pub material: Option<String>,
    #[serde(default)]
    pub modifiers: Vec<ModifierDescription>,
    #[serde(default)]
    pub dupli_group: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ModifierDescription {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub operation: Option<String>,
    #[serde(default)]
    pub object: Option<String>,
    #[serde(default = "default_offset", alias = "constant_offset_displace")]
    pub offset: [f32; 3],
    #[serde(default = "default_count")]
    pub count: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GroupDescription {
    pub name: String,
    #[serde(default)]
    pub objects: Vec<String>,
}

fn default_scale() -> [f32; 3] {
    [1.0, 1.0, 1.0]
}

fn default_rotation() -> [f32; 4] {
    [0.0, 0.0, 0.0, 1.0]
}

fn default_layers() -> Vec<bool> {
    vec![true]
}

fn default_offset() -> [f32; 3] {
    [1.0, 0.0, 0.0]
}

fn default_count() -> u32 {
    2
}

/// References that can only be resolved once every object exists.
pub(crate) struct PendingReferences {
    pub object: ObjectId,
    pub modifiers: Vec<ModifierDescription>,
    pub dupli_group: Option<String>,
}

impl SceneDescription {
    pub fn from_json_str(source: &str) -> Result<Self, ImportError> {
        Ok(serde_json::from_str(source)?)
    }

    pub fn into_scene(self) -> Result<Scene, ImportError> {
        let mut scene = Scene::new();
        let mut pending = Vec::with_capacity(self.objects.len());

        for description in self.objects {
            let object = description.to_object()?;
            let id = scene.add_object(object);
            pending.push(PendingReferences {
                object: id,
                modifiers: description.modifiers,
                dupli_group: description.dupli_group,
            });
        }

        for group in self.groups {
            let group_id = scene.get_or_add_group(&group.name);
            for member in &group.objects {
                match scene.get_object_by_name(member) {
                    Some(object_id) => {
                        scene.add_to_group(group_id, object_id);
                    }
                    None => log::warn!(
                        "Group '{}' lists unknown object '{}', ignoring it",
                        group.name,
                        member
                    ),
                }
            }
        }

        resolve_references(&mut scene, pending)?;

        Ok(scene)
    }
}

impl ObjectDescription {
    fn to_object(&self) -> Result<Object3D, ImportError> {
        if self.layers.len() > LAYER_COUNT {
            return Err(ImportError::TooManyLayers {
                object: self.name.clone(),
                count: self.layers.len(),
                max: LAYER_COUNT,
            });
        }

        let mut object = match self.kind.as_str() {
            "MESH" => Object3D::mesh(&self.name),
            "EMPTY" => Object3D::empty(&self.name),
            other => Object3D::other(&self.name, other),
        };

        if let Some(material) = &self.material {
            object = object.with_material(material);
        }

        object.transform = Transform::from_arrays(self.location, self.rotation, self.scale);
        object.layers = [false; LAYER_COUNT];
        object.layers[..self.layers.len()].copy_from_slice(&self.layers);

        Ok(object)
    }
}

impl ModifierDescription {
    /// Converts to a modifier, looking up the boolean target by name. An
    /// unknown target leaves the reference empty.
    pub(crate) fn to_modifier(&self, scene: &Scene, owner: &str) -> Result<Modifier, ImportError> {
        match self.kind.as_str() {
            Modifier::BOOLEAN => {
                let operation = match &self.operation {
                    Some(operation) => operation.parse::<BooleanOperation>().map_err(|_| {
                        ImportError::UnknownBooleanOperation {
                            object: owner.to_string(),
                            operation: operation.clone(),
                        }
                    })?,
                    None => BooleanOperation::default(),
                };

                let object = self.object.as_deref().and_then(|name| {
                    let id = scene.get_object_by_name(name);
                    if id.is_none() {
                        log::warn!(
                            "Boolean modifier on '{}' targets unknown object '{}'",
                            owner,
                            name
                        );
                    }
                    id
                });

                Ok(Modifier::Boolean { operation, object })
            }
            Modifier::ARRAY => Ok(Modifier::array(Vec3::from(self.offset), self.count)),
            other => Ok(Modifier::Other(other.to_string())),
        }
    }
}

fn find_group(scene: &Scene, owner: &str, name: &str) -> Option<GroupId> {
    let group = scene.get_group_by_name(name);
    if group.is_none() {
        log::warn!("Empty '{}' references unknown group '{}'", owner, name);
    }
    group
}

/// Fills in modifiers and duplication groups once the whole scene is loaded.
pub(crate) fn resolve_references(
    scene: &mut Scene,
    pending: Vec<PendingReferences>,
) -> Result<(), ImportError> {
    for references in pending {
        let lookup: &Scene = scene;
        let Some(owner) = lookup.get_object(references.object) else {
            continue;
        };

        // Modifiers only matter on meshes, duplication groups only on empties.
        match &owner.data {
            ObjectData::Mesh(_) => {
                let modifiers = references
                    .modifiers
                    .iter()
                    .map(|modifier| modifier.to_modifier(lookup, &owner.name))
                    .collect::<Result<Vec<_>, _>>()?;
                if let Some(ObjectData::Mesh(mesh)) = scene
                    .get_object_mut(references.object)
                    .map(|object| &mut object.data)
                {
                    mesh.modifiers.extend(modifiers);
                }
            }
            ObjectData::Empty(_) => {
                let dupli_group = references
                    .dupli_group
                    .as_deref()
                    .and_then(|name| find_group(lookup, &owner.name, name));
                if let Some(ObjectData::Empty(empty)) = scene
                    .get_object_mut(references.object)
                    .map(|object| &mut object.data)
                {
                    empty.dupli_group = dupli_group;
                }
            }
            ObjectData::Other(_) => {}
        }
    }

    Ok(())
}

pub fn load_description(path: impl AsRef<Path>) -> Result<Scene, ImportError> {
    let source = std::fs::read_to_string(path)?;
    SceneDescription::from_json_str(&source)?.into_scene()
}
