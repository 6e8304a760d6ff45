use id_arena::Id;

use crate::scene_graph::object3d::ObjectId;

pub type GroupId = Id<DupliGroup>;

/// Named collection of objects an empty instantiates at its transform.
#[derive(Debug, Clone, PartialEq)]
pub struct DupliGroup {
    pub name: String,
    pub objects: Vec<ObjectId>,
}

impl DupliGroup {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            objects: Vec::new(),
        }
    }

    pub fn first_object(&self) -> Option<ObjectId> {
        self.objects.first().copied()
    }
}
