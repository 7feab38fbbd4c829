use bytemuck::{Pod, Zeroable};
use crate::components::body::{Body, BodyKind};

/// Per-body render data read by the JavaScript renderer each frame.
/// Must match the JS protocol: 8 floats = 32 bytes stride.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct BodyInstance {
    /// BodyId as f32; the renderer maps it to a mesh.
    pub id: f32,
    pub x: f32,
    pub y: f32,
    pub z: f32,
    /// Bounding-sphere radius in scene units.
    pub radius: f32,
    /// 1.0 if this body is the current selection.
    pub selected: f32,
    /// 0.0 star, 1.0 planet.
    pub kind: f32,
    pub _pad: f32,
}

impl BodyInstance {
    pub const FLOATS: usize = 8;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;

    pub fn from_body(body: &Body, selected: bool) -> Self {
        Self {
            id: body.id.0 as f32,
            x: body.pos.x,
            y: body.pos.y,
            z: body.pos.z,
            radius: body.radius,
            selected: if selected { 1.0 } else { 0.0 },
            kind: match body.kind {
                BodyKind::Star => 0.0,
                BodyKind::Planet => 1.0,
            },
            _pad: 0.0,
        }
    }
}

/// Instance buffer rebuilt every frame from the scene.
pub struct InstanceBuffer {
    pub instances: Vec<BodyInstance>,
}

impl InstanceBuffer {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            instances: Vec::with_capacity(capacity),
        }
    }

    pub fn clear(&mut self) {
        self.instances.clear();
    }

    pub fn push(&mut self, instance: BodyInstance) {
        self.instances.push(instance);
    }

    pub fn instance_count(&self) -> u32 {
        self.instances.len() as u32
    }

    /// Raw pointer to instance data for JS reads out of WASM memory.
    pub fn instances_ptr(&self) -> *const f32 {
        self.instances.as_ptr() as *const f32
    }
}

impl Default for InstanceBuffer {
    fn default() -> Self {
        Self::with_capacity(64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::BodyId;

    #[test]
    fn body_instance_is_8_floats() {
        assert_eq!(std::mem::size_of::<BodyInstance>(), BodyInstance::STRIDE_BYTES);
    }

    #[test]
    fn from_body_copies_position_and_flags() {
        let body = Body::planet(BodyId(4), "Mars", 0.3, 25.0, 0.008);
        let inst = BodyInstance::from_body(&body, true);
        assert_eq!(inst.id, 4.0);
        assert_eq!(inst.x, 25.0);
        assert_eq!(inst.selected, 1.0);
        assert_eq!(inst.kind, 1.0);
    }
}
