use id_arena::Id;

use crate::scene_graph::group::GroupId;
use crate::scene_graph::modifier::Modifier;
use crate::scene_graph::transform::Transform;

pub type ObjectId = Id<Object3D>;

/// Number of scene layers an object can be on. Layer 0 doubles as the
/// render flag.
pub const LAYER_COUNT: usize = 20;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeshData {
    pub material: Option<String>,
    pub modifiers: Vec<Modifier>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct EmptyData {
    pub dupli_group: Option<GroupId>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ObjectData {
    Mesh(MeshData),
    Empty(EmptyData),
    /// Cameras, lamps, curves... carried so ordering stays faithful, never exported.
    Other(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Object3D {
    pub name: String,
    pub transform: Transform,
    pub layers: [bool; LAYER_COUNT],
    pub data: ObjectData,
}

impl Object3D {
    pub fn new(name: impl Into<String>, data: ObjectData) -> Self {
        let mut layers = [false; LAYER_COUNT];
        layers[0] = true;

        Self {
            name: name.into(),
            transform: Transform::IDENTITY,
            layers,
            data,
        }
    }

    pub fn mesh(name: impl Into<String>) -> Self {
        Self::new(name, ObjectData::Mesh(MeshData::default()))
    }

    pub fn empty(name: impl Into<String>) -> Self {
        Self::new(name, ObjectData::Empty(EmptyData::default()))
    }

    pub fn other(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self::new(name, ObjectData::Other(type_name.into()))
    }

    pub fn with_transform(mut self, transform: Transform) -> Self {
        self.transform = transform;
        self
    }

    pub fn with_material(mut self, material: impl Into<String>) -> Self {
        if let ObjectData::Mesh(mesh) = &mut self.data {
            mesh.material = Some(material.into());
        }
        self
    }

    pub fn with_modifier(mut self, modifier: Modifier) -> Self {
        if let ObjectData::Mesh(mesh) = &mut self.data {
            mesh.modifiers.push(modifier);
        }
        self
    }

    pub fn with_dupli_group(mut self, group: GroupId) -> Self {
        if let ObjectData::Empty(empty) = &mut self.data {
            empty.dupli_group = Some(group);
        }
        self
    }

    pub fn with_render(mut self, render: bool) -> Self {
        self.layers[0] = render;
        self
    }

    pub fn type_name(&self) -> &str {
        match &self.data {
            ObjectData::Mesh(_) => "MESH",
            ObjectData::Empty(_) => "EMPTY",
            ObjectData::Other(type_name) => type_name,
        }
    }

    pub fn is_rendered(&self) -> bool {
        self.layers[0]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_object_is_on_first_layer_only() {
        let object = Object3D::mesh("Cube");
        assert!(object.is_rendered());
        assert_eq!(object.layers.iter().filter(|on| **on).count(), 1);
    }

    #[test]
    fn test_builders_ignore_mismatched_data() {
        let empty = Object3D::empty("Spawner").with_material("Steel");
        assert_eq!(empty.data, ObjectData::Empty(EmptyData::default()));

        let camera = Object3D::other("Camera", "CAMERA").with_render(false);
        assert_eq!(camera.type_name(), "CAMERA");
        assert!(!camera.is_rendered());
    }
}
