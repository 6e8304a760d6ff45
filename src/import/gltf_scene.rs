//! Builds a scene snapshot from a glTF document. Host-only data (modifiers,
//! duplication groups, render flag) travels in node extras.

use std::path::Path;

use serde::Deserialize;

use crate::import::description::{resolve_references, ModifierDescription, PendingReferences};
use crate::import::error::ImportError;
use crate::scene_graph::{Object3D, ObjectId, Scene, Transform};

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct NodeExtras {
    render: Option<bool>,
    modifiers: Vec<ModifierDescription>,
    dupli_group: Option<String>,
    groups: Vec<String>,
}

pub fn load_gltf(path: impl AsRef<Path>) -> Result<Scene, ImportError> {
    let gltf = gltf::Gltf::open(path)?;
    scene_from_gltf(&gltf.document)
}

/// Uses the document's default scene, falling back to the first one.
pub fn scene_from_gltf(document: &gltf::Document) -> Result<Scene, ImportError> {
    let gltf_scene = document
        .default_scene()
        .or_else(|| document.scenes().next())
        .ok_or(ImportError::NoScene)?;

    let mut scene = Scene::new();
    let mut pending = Vec::new();
    scene.spawn_gltf_scene(&gltf_scene, &mut pending)?;
    resolve_references(&mut scene, pending)?;

    Ok(scene)
}

impl Scene {
    fn spawn_gltf_scene(
        &mut self,
        scene: &gltf::Scene,
        pending: &mut Vec<PendingReferences>,
    ) -> Result<(), ImportError> {
        for node in scene.nodes() {
            self.spawn_gltf_node(&node, pending)?;
        }
        Ok(())
    }

    fn spawn_gltf_node(
        &mut self,
        node: &gltf::Node,
        pending: &mut Vec<PendingReferences>,
    ) -> Result<ObjectId, ImportError> {
        let node_name = node.name().unwrap_or("Unnamed").to_string();
        let extras = parse_extras(node, &node_name)?;

        let mut object = if let Some(mesh) = node.mesh() {
            let material = mesh
                .primitives()
                .find_map(|primitive| primitive.material().name().map(String::from));
            match material {
                Some(material) => Object3D::mesh(&node_name).with_material(material),
                None => Object3D::mesh(&node_name),
            }
        } else if node.camera().is_some() {
            Object3D::other(&node_name, "CAMERA")
        } else {
            Object3D::empty(&node_name)
        };

        let (translation, rotation, scale) = node.transform().decomposed();
        object.transform = Transform::from_arrays(translation, rotation, scale);

        if let Some(render) = extras.render {
            object = object.with_render(render);
        }

        let object_id = self.add_object(object);

        for group_name in &extras.groups {
            let group_id = self.get_or_add_group(group_name);
            self.add_to_group(group_id, object_id);
        }

        pending.push(PendingReferences {
            object: object_id,
            modifiers: extras.modifiers,
            dupli_group: extras.dupli_group,
        });

        for child in node.children() {
            self.spawn_gltf_node(&child, pending)?;
        }

        Ok(object_id)
    }
}

fn parse_extras(node: &gltf::Node, node_name: &str) -> Result<NodeExtras, ImportError> {
    match node.extras() {
        Some(raw) => serde_json::from_str(raw.get()).map_err(|source| ImportError::InvalidExtras {
            node: node_name.to_string(),
            source,
        }),
        None => Ok(NodeExtras::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene_graph::{BooleanOperation, Modifier, ObjectData};
    use crate::source::SceneSource;
    use glam::{Quat, Vec3};

    const DOCUMENT: &str = r#"{
        "asset": { "version": "2.0" },
        "scene": 0,
        "scenes": [{ "nodes": [0, 3] }],
        "nodes": [
            {
                "name": "Spawner",
                "translation": [0, 0, 2],
                "children": [1, 2],
                "extras": { "dupli_group": "Props" }
            },
            {
                "name": "Prop_A",
                "scale": [2, 1, 1],
                "extras": { "groups": ["Props"], "render": false }
            },
            { "name": "Prop_B", "extras": { "groups": ["Props"] } },
            {
                "name": "Cube",
                "mesh": 0,
                "rotation": [0, 0, 1, 0],
                "extras": {
                    "modifiers": [
                        { "type": "BOOLEAN", "operation": "UNION", "object": "Prop_B" }
                    ],
                    "custom_property": 42
                }
            },
            { "name": "Camera", "camera": 0 }
        ],
        "cameras": [{ "type": "perspective", "perspective": { "yfov": 0.8, "znear": 0.1 } }],
        "meshes": [{ "primitives": [{ "attributes": { "POSITION": 0 }, "material": 0 }] }],
        "materials": [{ "name": "Brushed_Steel" }],
        "accessors": [{
            "bufferView": 0, "componentType": 5126, "count": 1, "type": "VEC3",
            "min": [0, 0, 0], "max": [0, 0, 0]
        }],
        "bufferViews": [{ "buffer": 0, "byteLength": 12 }],
        "buffers": [{ "byteLength": 12, "uri": "data:application/octet-stream;base64,AAAAAAAAAAAAAAAA" }]
    }"#;

    fn load() -> Scene {
        let gltf = gltf::Gltf::from_slice(DOCUMENT.as_bytes()).unwrap();
        scene_from_gltf(&gltf.document).unwrap()
    }

    #[test]
    fn test_depth_first_order() {
        let scene = load();
        let names: Vec<&str> = scene.objects().map(|o| o.name.as_str()).collect();
        // The camera node is not part of the scene's node tree.
        assert_eq!(names, ["Spawner", "Prop_A", "Prop_B", "Cube"]);
    }

    #[test]
    fn test_node_kinds_and_transforms() {
        let scene = load();

        let spawner = scene.get_object(scene.get_object_by_name("Spawner").unwrap()).unwrap();
        assert_eq!(spawner.type_name(), "EMPTY");
        assert_eq!(spawner.transform.translation(), Vec3::new(0.0, 0.0, 2.0));

        let prop_a = scene.get_object(scene.get_object_by_name("Prop_A").unwrap()).unwrap();
        assert_eq!(prop_a.transform.scale(), Vec3::new(2.0, 1.0, 1.0));
        assert!(!prop_a.is_rendered());

        let cube = scene.get_object(scene.get_object_by_name("Cube").unwrap()).unwrap();
        assert_eq!(cube.transform.rotation(), Quat::from_xyzw(0.0, 0.0, 1.0, 0.0));
        let ObjectData::Mesh(mesh) = &cube.data else {
            panic!("Cube should be a mesh");
        };
        assert_eq!(mesh.material.as_deref(), Some("Brushed_Steel"));
        assert_eq!(
            mesh.modifiers,
            vec![Modifier::boolean(
                BooleanOperation::Union,
                scene.get_object_by_name("Prop_B").unwrap()
            )]
        );
    }

    #[test]
    fn test_group_membership_from_extras() {
        let scene = load();
        let spawner = scene.get_object(scene.get_object_by_name("Spawner").unwrap()).unwrap();
        let ObjectData::Empty(empty) = &spawner.data else {
            panic!("Spawner should be an empty");
        };

        let group = scene.get_group(empty.dupli_group.unwrap()).unwrap();
        assert_eq!(group.first_object(), scene.get_object_by_name("Prop_A"));
        assert_eq!(group.objects.len(), 2);
    }

    #[test]
    fn test_camera_nodes() {
        let document = r#"{
            "asset": { "version": "2.0" },
            "scenes": [{ "nodes": [0] }],
            "nodes": [{ "camera": 0 }],
            "cameras": [{ "type": "perspective", "perspective": { "yfov": 0.8, "znear": 0.1 } }]
        }"#;
        let gltf = gltf::Gltf::from_slice(document.as_bytes()).unwrap();
        let scene = scene_from_gltf(&gltf.document).unwrap();

        let camera = scene.objects().next().unwrap();
        assert_eq!(camera.name, "Unnamed");
        assert_eq!(camera.type_name(), "CAMERA");
    }

    #[test]
    fn test_document_without_scene() {
        let gltf = gltf::Gltf::from_slice(br#"{ "asset": { "version": "2.0" } }"#).unwrap();
        assert!(matches!(scene_from_gltf(&gltf.document), Err(ImportError::NoScene)));
    }
}
