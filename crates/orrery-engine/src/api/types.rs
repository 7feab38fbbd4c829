use bytemuck::{Pod, Zeroable};
use serde::Serialize;

/// Unique identifier for a body in the scene.
/// This is the handle JavaScript uses to find the matching mesh.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct BodyId(pub u32);

impl BodyId {
    /// Wire encoding: ids are written as f32 into shared buffers, -1 means "none".
    pub fn encode(id: Option<BodyId>) -> f32 {
        id.map(|id| id.0 as f32).unwrap_or(-1.0)
    }
}

/// A game event communicated from Rust to JavaScript.
/// Generic container: `kind` identifies the event, `a/b/c` carry payload.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct GameEvent {
    pub kind: f32,
    pub a: f32,
    pub b: f32,
    pub c: f32,
}

impl GameEvent {
    pub const FLOATS: usize = 4;

    pub fn new(kind: f32, a: f32, b: f32, c: f32) -> Self {
        Self { kind, a, b, c }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_none_is_negative() {
        assert_eq!(BodyId::encode(None), -1.0);
        assert_eq!(BodyId::encode(Some(BodyId(7))), 7.0);
    }

    #[test]
    fn game_event_is_4_floats() {
        assert_eq!(std::mem::size_of::<GameEvent>(), GameEvent::FLOATS * 4);
    }
}
