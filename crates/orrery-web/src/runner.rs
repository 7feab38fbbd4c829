use orrery_engine::{
    Game, GameConfig, EngineContext, InputEvent, InputQueue, InstanceBuffer,
    ProtocolLayout, CameraState, BodyId, build_instance_buffer,
};
use orrery_engine::bridge::protocol::{
    HEADER_FLOATS, HEADER_FRAME_COUNTER, HEADER_PROTOCOL_VERSION, HEADER_MAX_INSTANCES,
    HEADER_INSTANCE_COUNT, HEADER_MAX_EVENTS, HEADER_EVENT_COUNT, HEADER_SCENE_GENERATION,
    HEADER_PANEL_REVISION, HEADER_SELECTED_ID, HEADER_PLAYING, PROTOCOL_VERSION,
    encode_frame_counter,
};

/// Generic scene runner that wires up the engine loop.
///
/// Each concrete demo creates a `thread_local!` SceneRunner and exports free
/// functions via `#[wasm_bindgen]`, because wasm-bindgen cannot export
/// generic structs directly.
pub struct SceneRunner<G: Game> {
    game: G,
    ctx: EngineContext,
    input: InputQueue,
    instances: InstanceBuffer,
    camera: CameraState,
    header: [f32; HEADER_FLOATS],
    config: GameConfig,
    layout: ProtocolLayout,
    /// Events the previous tick published; JavaScript reads them after `scene_tick`.
    delivered_events: usize,
    initialized: bool,
}

impl<G: Game> SceneRunner<G> {
    pub fn new(game: G) -> Self {
        let config = game.config();
        let layout = ProtocolLayout::from_config(&config);
        let ctx = EngineContext::new(&config);
        let camera = ctx.camera.state();

        Self {
            game,
            ctx,
            input: InputQueue::new(),
            instances: InstanceBuffer::with_capacity(config.max_instances),
            camera,
            header: [0.0; HEADER_FLOATS],
            layout,
            config,
            delivered_events: 0,
            initialized: false,
        }
    }

    /// Initialize the scene. Call once after construction.
    pub fn init(&mut self) {
        self.game.init(&mut self.ctx);
        self.initialized = true;
        self.publish();
    }

    /// Push an input event into the queue.
    pub fn push_input(&mut self, event: InputEvent) {
        self.input.push(event);
    }

    /// Run one animation frame: input, orbits, camera easing, then publish buffers.
    pub fn tick(&mut self) {
        if !self.initialized {
            return;
        }

        // Events from init, data loads or text submits since the last tick
        // are kept and go out with this frame.
        self.ctx.retire_events(self.delivered_events);

        for event in self.input.iter() {
            if let InputEvent::Resize { width, height } = *event {
                self.ctx.camera.resize(width, height);
            }
        }

        self.game.update(&mut self.ctx, &self.input);
        self.input.drain();

        self.ctx.advance();
        self.ctx.step_focus();

        if self.ctx.events.len() > self.config.max_events {
            log::warn!(
                "dropping {} game events over capacity {}",
                self.ctx.events.len() - self.config.max_events,
                self.config.max_events
            );
            self.ctx.events.truncate(self.config.max_events);
        }

        self.publish();
        self.delivered_events = self.ctx.events.len();
    }

    /// Hand a fetched JSON document to the scene. Parse errors leave the scene untouched.
    pub fn load_data(&mut self, json: &str) -> bool {
        match self.game.load_data(&mut self.ctx, json) {
            Ok(()) => {
                self.publish();
                true
            }
            Err(err) => {
                log::error!("failed to load scene data: {err}");
                false
            }
        }
    }

    pub fn submit_text(&mut self, text: &str) {
        self.game.submit_text(&mut self.ctx, text);
        self.publish();
    }

    fn publish(&mut self) {
        build_instance_buffer(
            &self.ctx.scene,
            &self.ctx.selection,
            &mut self.instances,
            self.config.max_instances,
        );
        self.camera = self.ctx.camera.state();

        let h = &mut self.header;
        h[HEADER_FRAME_COUNTER] = encode_frame_counter(self.ctx.frames());
        h[HEADER_PROTOCOL_VERSION] = PROTOCOL_VERSION;
        h[HEADER_MAX_INSTANCES] = self.layout.max_instances as f32;
        h[HEADER_INSTANCE_COUNT] = self.instances.instance_count() as f32;
        h[HEADER_MAX_EVENTS] = self.layout.max_events as f32;
        h[HEADER_EVENT_COUNT] = self.ctx.events.len().min(self.layout.max_events) as f32;
        h[HEADER_SCENE_GENERATION] = self.ctx.scene.generation() as f32;
        h[HEADER_PANEL_REVISION] = self.ctx.panel.revision() as f32;
        h[HEADER_SELECTED_ID] = BodyId::encode(self.ctx.selection.get());
        h[HEADER_PLAYING] = self.ctx.playback.encode();
    }

    pub fn context(&self) -> &EngineContext {
        &self.ctx
    }

    // ---- Pointer accessors for buffer reads ----

    pub fn header(&self) -> &[f32; HEADER_FLOATS] {
        &self.header
    }

    pub fn header_ptr(&self) -> *const f32 {
        self.header.as_ptr()
    }

    pub fn camera_ptr(&self) -> *const f32 {
        &self.camera as *const CameraState as *const f32
    }

    pub fn instances_ptr(&self) -> *const f32 {
        self.instances.instances_ptr()
    }

    pub fn instance_count(&self) -> u32 {
        self.instances.instance_count()
    }

    pub fn game_events_ptr(&self) -> *const f32 {
        self.ctx.events.as_ptr() as *const f32
    }

    pub fn game_events_len(&self) -> u32 {
        self.ctx.events.len().min(self.layout.max_events) as u32
    }

    // ---- JSON accessors, re-read when the header counters change ----

    pub fn scene_manifest_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.ctx.scene.manifest())
    }

    pub fn info_panel_json(&self) -> Result<String, serde_json::Error> {
        self.ctx.panel.to_json()
    }

    // ---- Capacity accessors ----

    pub fn max_instances(&self) -> u32 {
        self.layout.max_instances as u32
    }

    pub fn max_events(&self) -> u32 {
        self.layout.max_events as u32
    }

    pub fn buffer_total_floats(&self) -> u32 {
        self.layout.buffer_total_floats as u32
    }
}
