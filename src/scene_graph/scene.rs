use id_arena::Arena;

use crate::scene_graph::group::{DupliGroup, GroupId};
use crate::scene_graph::object3d::{Object3D, ObjectId};
use crate::source::SceneSource;

/// Owned snapshot of a host scene. Objects keep their insertion order, which
/// is the order the host listed them in.
#[derive(Debug)]
pub struct Scene {
    pub objects: Arena<Object3D>,
    pub groups: Arena<DupliGroup>,
}

impl Scene {
    pub fn new() -> Self {
        Self {
            objects: Arena::new(),
            groups: Arena::new(),
        }
    }

    pub fn add_object(&mut self, object: Object3D) -> ObjectId {
        self.objects.alloc(object)
    }

    pub fn get_object(&self, id: ObjectId) -> Option<&Object3D> {
        self.objects.get(id)
    }

    pub fn get_object_mut(&mut self, id: ObjectId) -> Option<&mut Object3D> {
        self.objects.get_mut(id)
    }

    /// First object with the given name. Host names are unique, so first is
    /// also only.
    pub fn get_object_by_name(&self, name: &str) -> Option<ObjectId> {
        self.objects
            .iter()
            .find(|(_, object)| object.name == name)
            .map(|(id, _)| id)
    }

    pub fn object_count(&self) -> usize {
        self.objects.len()
    }

    pub fn add_group(&mut self, group: DupliGroup) -> GroupId {
        self.groups.alloc(group)
    }

    pub fn get_group(&self, id: GroupId) -> Option<&DupliGroup> {
        self.groups.get(id)
    }

    pub fn get_group_by_name(&self, name: &str) -> Option<GroupId> {
        self.groups
            .iter()
            .find(|(_, group)| group.name == name)
            .map(|(id, _)| id)
    }

    /// Returns the group with this name, creating an empty one if needed.
    pub fn get_or_add_group(&mut self, name: &str) -> GroupId {
        match self.get_group_by_name(name) {
            Some(id) => id,
            None => self.add_group(DupliGroup::new(name)),
        }
    }

    /// Appends an object to a group's member list. Returns false if the
    /// group does not exist.
    pub fn add_to_group(&mut self, group_id: GroupId, object_id: ObjectId) -> bool {
        match self.groups.get_mut(group_id) {
            Some(group) => {
                group.objects.push(object_id);
                true
            }
            None => false,
        }
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

impl SceneSource for Scene {
    fn objects(&self) -> Box<dyn Iterator<Item = &Object3D> + '_> {
        Box::new(self.objects.iter().map(|(_, object)| object))
    }

    fn object(&self, id: ObjectId) -> Option<&Object3D> {
        self.get_object(id)
    }

    fn group(&self, id: GroupId) -> Option<&DupliGroup> {
        self.get_group(id)
    }
}
