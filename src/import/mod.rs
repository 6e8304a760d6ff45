pub mod description;
pub mod error;
pub mod gltf_scene;

use std::path::Path;

use crate::scene_graph::Scene;

pub use description::SceneDescription;
pub use error::ImportError;
pub use gltf_scene::{load_gltf, scene_from_gltf};

/// Loads a scene snapshot, picking the importer from the file extension.
pub fn load_scene(path: impl AsRef<Path>) -> Result<Scene, ImportError> {
    let path = path.as_ref();
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);

    let scene = match extension.as_deref() {
        Some("json") => description::load_description(path)?,
        Some("gltf" | "glb") => load_gltf(path)?,
        _ => return Err(ImportError::UnsupportedFormat(path.display().to_string())),
    };

    log::info!(
        "Loaded {} objects and {} groups from {}",
        scene.object_count(),
        scene.groups.len(),
        path.display()
    );

    Ok(scene)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_unknown_extension() {
        assert!(matches!(
            load_scene("level.blend"),
            Err(ImportError::UnsupportedFormat(_))
        ));
        assert!(matches!(load_scene("level"), Err(ImportError::UnsupportedFormat(_))));
    }

    #[test]
    fn test_loads_description_file() {
        use crate::source::SceneSource;

        let dir = tempfile::TempDir::new().expect("failed to create temp dir");
        let path = dir.path().join("level.JSON");
        std::fs::write(
            &path,
            r#"{
                "objects": [
                    { "name": "Floor", "type": "MESH" },
                    { "name": "Sun", "type": "LAMP" },
                    { "name": "Spawner", "type": "EMPTY", "dupli_group": "Props" }
                ],
                "groups": [{ "name": "Props", "objects": ["Floor"] }]
            }"#,
        )
        .unwrap();

        let scene = load_scene(&path).unwrap();
        assert_eq!(scene.object_count(), 3);
        assert_eq!(scene.groups.len(), 1);
        let names: Vec<&str> = scene.objects().map(|o| o.name.as_str()).collect();
        assert_eq!(names, ["Floor", "Sun", "Spawner"]);
    }

    #[test]
    fn test_loads_gltf_file() {
        use crate::source::SceneSource;

        let dir = tempfile::TempDir::new().expect("failed to create temp dir");
        let path = dir.path().join("level.gltf");
        std::fs::write(
            &path,
            r#"{
                "asset": { "version": "2.0" },
                "scenes": [{ "nodes": [0, 1] }],
                "nodes": [{ "name": "Marker" }, { "name": "Anchor" }]
            }"#,
        )
        .unwrap();

        let scene = load_scene(&path).unwrap();
        let names: Vec<&str> = scene.objects().map(|o| o.name.as_str()).collect();
        assert_eq!(names, ["Marker", "Anchor"]);
        assert!(scene.objects().all(|o| o.type_name() == "EMPTY"));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        assert!(matches!(
            load_scene("does/not/exist.json"),
            Err(ImportError::Io(_))
        ));
    }
}
