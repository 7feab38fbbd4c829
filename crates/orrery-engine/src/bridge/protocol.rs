/// Shared buffer layout between the wasm module and the JavaScript view.
/// Must stay in sync with the view's `protocol.js`.
///
/// Layout (all values in f32 / 4 bytes):
/// ```text
/// [Header: 16 floats]
/// [Camera: 8 floats]
/// [Instances: max_instances × 8 floats]
/// [Events: max_events × 4 floats]
/// ```
///
/// Capacities are written once into the header at init.
/// JavaScript reads them from the header to compute offsets dynamically.

use crate::api::game::GameConfig;

/// Number of floats in the header section.
pub const HEADER_FLOATS: usize = 16;

/// Header field indices.
pub const HEADER_FRAME_COUNTER: usize = 0;
pub const HEADER_PROTOCOL_VERSION: usize = 1;
pub const HEADER_MAX_INSTANCES: usize = 2;
pub const HEADER_INSTANCE_COUNT: usize = 3;
pub const HEADER_MAX_EVENTS: usize = 4;
pub const HEADER_EVENT_COUNT: usize = 5;
/// Bumped on every teardown; the view rebuilds its meshes from the manifest.
pub const HEADER_SCENE_GENERATION: usize = 6;
/// Bumped on every info-panel change; the view re-reads the panel JSON.
pub const HEADER_PANEL_REVISION: usize = 7;
/// Selected body id, or -1.
pub const HEADER_SELECTED_ID: usize = 8;
/// 1.0 while orbits are advancing, 0.0 when paused.
pub const HEADER_PLAYING: usize = 9;
// 10..16 reserved.

/// The frame counter wraps here: every integer below 2^24 is exact in f32.
pub const FRAME_COUNTER_WRAP: u64 = 1 << 24;

/// Frame counter as written into the header. Wraps instead of stalling.
pub fn encode_frame_counter(frames: u64) -> f32 {
    (frames % FRAME_COUNTER_WRAP) as f32
}

/// Protocol version written into the header.
pub const PROTOCOL_VERSION: f32 = 1.0;

/// Floats in the camera section: position xyz, target xyz, fov, aspect.
pub const CAMERA_FLOATS: usize = 8;

/// Floats per body instance: id, x, y, z, radius, selected, kind, pad.
pub const INSTANCE_FLOATS: usize = 8;

/// Floats per game event: kind, a, b, c.
pub const EVENT_FLOATS: usize = 4;

/// Runtime-computed buffer layout.
#[derive(Debug, Clone, PartialEq)]
pub struct ProtocolLayout {
    pub max_instances: usize,
    pub max_events: usize,

    pub instance_data_floats: usize,
    pub event_data_floats: usize,

    pub camera_offset: usize,
    pub instance_data_offset: usize,
    pub event_data_offset: usize,

    pub buffer_total_floats: usize,
    pub buffer_total_bytes: usize,
}

impl ProtocolLayout {
    pub fn new(max_instances: usize, max_events: usize) -> Self {
        let instance_data_floats = max_instances * INSTANCE_FLOATS;
        let event_data_floats = max_events * EVENT_FLOATS;

        let camera_offset = HEADER_FLOATS;
        let instance_data_offset = camera_offset + CAMERA_FLOATS;
        let event_data_offset = instance_data_offset + instance_data_floats;

        let buffer_total_floats = event_data_offset + event_data_floats;

        Self {
            max_instances,
            max_events,
            instance_data_floats,
            event_data_floats,
            camera_offset,
            instance_data_offset,
            event_data_offset,
            buffer_total_floats,
            buffer_total_bytes: buffer_total_floats * 4,
        }
    }

    pub fn from_config(config: &GameConfig) -> Self {
        Self::new(config.max_instances, config.max_events)
    }
}
