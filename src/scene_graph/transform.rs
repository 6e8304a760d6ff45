use glam::{Quat, Vec3};

/// Local transform of a scene object, as the host stores it: location,
/// quaternion rotation and per-axis scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    translation: Vec3,
    rotation: Quat,
    scale: Vec3,
}

impl Transform {
    pub const IDENTITY: Self = Self {
        translation: Vec3::ZERO,
        rotation: Quat::IDENTITY,
        scale: Vec3::ONE,
    };

    pub fn new(translation: Vec3, rotation: Quat, scale: Vec3) -> Self {
        Self {
            translation,
            rotation,
            scale,
        }
    }

    /// Builds a transform from the raw arrays a glTF node or a scene
    /// description carries. Rotation is in x, y, z, w order.
    pub fn from_arrays(translation: [f32; 3], rotation: [f32; 4], scale: [f32; 3]) -> Self {
        Self::new(
            Vec3::from(translation),
            Quat::from_array(rotation),
            Vec3::from(scale),
        )
    }

    pub fn translation(&self) -> Vec3 {
        self.translation
    }

    pub fn rotation(&self) -> Quat {
        self.rotation
    }

    pub fn scale(&self) -> Vec3 {
        self.scale
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_identity() {
        let transform = Transform::default();
        assert_eq!(transform.translation(), Vec3::ZERO);
        assert_eq!(transform.rotation(), Quat::IDENTITY);
        assert_eq!(transform.scale(), Vec3::ONE);
    }

    #[test]
    fn test_from_arrays_keeps_xyzw_order() {
        let transform = Transform::from_arrays([1.0, 2.0, 3.0], [0.1, 0.2, 0.3, 0.9], [2.0, 1.0, 0.5]);
        let rotation = transform.rotation();
        assert_eq!([rotation.x, rotation.y, rotation.z, rotation.w], [0.1, 0.2, 0.3, 0.9]);
        assert_eq!(transform.scale(), Vec3::new(2.0, 1.0, 0.5));
    }
}
