use crate::scene_graph::{DupliGroup, GroupId, Object3D, ObjectId};

/// Read-only view of a host scene. The exporter only ever iterates the
/// objects once and follows references through the lookups.
pub trait SceneSource {
    /// Every object, in the order the host lists them.
    fn objects(&self) -> Box<dyn Iterator<Item = &Object3D> + '_>;

    fn object(&self, id: ObjectId) -> Option<&Object3D>;

    fn group(&self, id: GroupId) -> Option<&DupliGroup>;
}
