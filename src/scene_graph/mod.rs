pub mod group;
pub mod modifier;
pub mod object3d;
pub mod scene;
pub mod transform;

// Re-export main types for convenience
pub use group::{DupliGroup, GroupId};
pub use modifier::{BooleanOperation, Modifier};
pub use object3d::{EmptyData, MeshData, Object3D, ObjectData, ObjectId, LAYER_COUNT};
pub use scene::Scene;
pub use transform::Transform;
