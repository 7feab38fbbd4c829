use glam::{Vec2, Vec3};
use crate::api::panel::{InfoPanel, PanelContent};
use crate::api::types::{BodyId, GameEvent};
use crate::components::body::Body;
use crate::core::playback::Playback;
use crate::core::scene::Scene;
use crate::input::queue::InputQueue;
use crate::picking::{self, Hit, Selection};
use crate::renderer::camera::Camera3D;
use crate::renderer::focus::{focus_offset, CameraFocus, DEFAULT_FOCUS_SMOOTHING};
use crate::systems::orbit::{advance_orbits, place_on_orbit};

/// Configuration for the engine, provided by the scene.
#[derive(Debug, Clone, PartialEq)]
pub struct GameConfig {
    /// Vertical field of view in degrees (default: 75).
    pub fov_y_degrees: f32,
    /// Near clip plane (default: 0.1).
    pub near: f32,
    /// Far clip plane (default: 1000).
    pub far: f32,
    /// Initial viewport size in CSS pixels, until the first resize event.
    pub viewport_width: f32,
    pub viewport_height: f32,
    /// Initial camera position, looking at the origin.
    pub camera_position: Vec3,
    /// Camera easing factor per frame (default: 0.05).
    pub focus_smoothing: f32,
    /// Maximum number of body instances written per frame (default: 64).
    pub max_instances: usize,
    /// Maximum number of game events per frame (default: 32).
    pub max_events: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            fov_y_degrees: 75.0,
            near: 0.1,
            far: 1000.0,
            viewport_width: 800.0,
            viewport_height: 600.0,
            camera_position: Vec3::new(0.0, 0.0, 100.0),
            focus_smoothing: DEFAULT_FOCUS_SMOOTHING,
            max_instances: 64,
            max_events: 32,
        }
    }
}

/// The contract every scene must fulfill.
pub trait Game {
    /// Return engine configuration. Called once before init.
    fn config(&self) -> GameConfig {
        GameConfig::default()
    }

    /// Spawn the initial bodies and fill the info panel.
    fn init(&mut self, ctx: &mut EngineContext);

    /// Per-frame input handling. Orbital advancement and camera easing
    /// run after this, driven by the runner.
    fn update(&mut self, ctx: &mut EngineContext, input: &InputQueue);

    /// Receive a JSON document fetched by the page (catalogs, metadata).
    fn load_data(&mut self, _ctx: &mut EngineContext, _json: &str) -> Result<(), serde_json::Error> {
        Ok(())
    }

    /// Receive free text typed into the page (e.g. a star-name search box).
    fn submit_text(&mut self, _ctx: &mut EngineContext, _text: &str) {}
}

/// Explicit scene context: everything a scene mutates, passed to every `Game` hook.
pub struct EngineContext {
    pub scene: Scene,
    pub camera: Camera3D,
    pub focus: CameraFocus,
    pub selection: Selection,
    pub playback: Playback,
    pub panel: InfoPanel,
    pub events: Vec<GameEvent>,
    /// Number of advancement steps executed so far.
    frames: u64,
    next_id: u32,
}

impl EngineContext {
    pub fn new(config: &GameConfig) -> Self {
        let mut camera = Camera3D::new(
            config.fov_y_degrees,
            config.near,
            config.far,
            Vec2::new(config.viewport_width, config.viewport_height),
        );
        camera.look_from(config.camera_position, Vec3::ZERO);
        Self {
            scene: Scene::new(),
            camera,
            focus: CameraFocus::new(config.focus_smoothing),
            selection: Selection::default(),
            playback: Playback::default(),
            panel: InfoPanel::default(),
            events: Vec::new(),
            frames: 0,
            next_id: 1,
        }
    }

    /// Generate the next unique body ID. IDs are never reused across teardowns.
    pub fn next_id(&mut self) -> BodyId {
        let id = BodyId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Add a body, placing it on its orbit first. Returns its id.
    pub fn spawn(&mut self, mut body: Body) -> BodyId {
        place_on_orbit(&mut body);
        let id = body.id;
        self.scene.spawn(body);
        id
    }

    /// Destroy every body (system switch). Selection and focus go with them.
    pub fn teardown(&mut self) {
        self.scene.clear();
        self.selection.clear();
        self.focus.release();
    }

    /// One frame of orbital advancement, if playing. Returns whether it ran.
    pub fn advance(&mut self) -> bool {
        if !self.playback.is_playing() {
            return false;
        }
        advance_orbits(&mut self.scene);
        self.frames += 1;
        true
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Nearest body under a pointer position in viewport pixels.
    pub fn pick_at(&self, pointer: Vec2) -> Option<Hit> {
        let ray = self.camera.ray_from_pointer(pointer);
        picking::pick(&self.scene, &ray)
    }

    /// Select a body and start easing the camera toward it.
    /// Returns false (and changes nothing) if the id is not in the scene.
    pub fn select(&mut self, id: BodyId) -> bool {
        let Some(body) = self.scene.get(id) else {
            return false;
        };
        let goal = body.pos + focus_offset(body.radius);
        log::info!("selected {} (id {})", body.name, id.0);
        self.selection.select(id);
        self.focus.aim(goal);
        true
    }

    /// Resize and/or retexture the selected body, keeping its orbit.
    /// Bumps the scene generation so the renderer rebuilds the mesh, and
    /// re-aims the camera for the new radius. Returns false with no selection.
    pub fn restyle_selected(&mut self, radius: Option<f32>, texture: Option<&str>) -> bool {
        let Some(id) = self.selection.get() else {
            return false;
        };
        let Some(body) = self.scene.get_mut(id) else {
            return false;
        };
        if let Some(radius) = radius {
            body.radius = radius;
        }
        if let Some(texture) = texture {
            body.texture = texture.to_string();
        }
        let goal = body.pos + focus_offset(body.radius);
        log::info!("restyled {} (radius {}, texture {})", body.name, body.radius, body.texture);

        self.scene.invalidate();
        self.focus.aim(goal);
        true
    }

    /// Drop the selection and snap the camera back to `home`, looking at the origin.
    pub fn reset_view(&mut self, home: Vec3) {
        self.selection.clear();
        self.focus.release();
        self.camera.look_from(home, Vec3::ZERO);
    }

    /// One frame of camera easing toward the selected body, if any.
    pub fn step_focus(&mut self) {
        if let Some(body) = self.selection.resolve(&self.scene) {
            self.focus.step(&mut self.camera, body.pos);
        }
    }

    pub fn show_panel(&mut self, content: PanelContent) {
        self.panel.show(content);
    }

    /// Emit a game event to be forwarded to JavaScript.
    pub fn emit_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Drop the first `delivered` events, the ones JavaScript has already read.
    /// Events emitted after that (by data loads or text submits) stay queued.
    pub fn retire_events(&mut self, delivered: usize) {
        let n = delivered.min(self.events.len());
        self.events.drain(..n);
    }
}

impl Default for EngineContext {
    fn default() -> Self {
        Self::new(&GameConfig::default())
    }
}
