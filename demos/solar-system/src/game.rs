/// Solar System: an orrery with clickable bodies and two preset systems.
///
/// Orbits advance once per frame in the engine; this scene handles
/// selection, the info panel and preset switching.

use orrery_engine::*;
use glam::{Vec2, Vec3};

use crate::bodies::{Preset, SystemPreset};
use crate::metadata::{format_value, BodyCatalog};

// ── Custom event kinds from the page ─────────────────────────────────

const CUSTOM_SWITCH_PRESET: u32 = 1;
const CUSTOM_TOGGLE_PAUSE: u32 = 2;
const CUSTOM_RESET_VIEW: u32 = 3;

// ── Game event kinds to the page ─────────────────────────────────────

const EVENT_SELECTION: f32 = 1.0;
const EVENT_PRESET: f32 = 2.0;

const OVERVIEW_NOTE: &str = "Click on any planet to see its information.";

pub struct SolarSystem {
    preset: Preset,
    /// Camera home for the current preset; Escape snaps back here.
    home: Vec3,
    catalog: Option<BodyCatalog>,
}

impl SolarSystem {
    pub fn new() -> Self {
        Self {
            preset: Preset::Sol,
            home: Vec3::new(0.0, 0.0, crate::bodies::SOL_CAMERA_Z),
            catalog: None,
        }
    }

    pub fn preset(&self) -> Preset {
        self.preset
    }

    /// Tear the scene down and spawn `preset` from scratch.
    fn build(&mut self, ctx: &mut EngineContext, preset: Preset) {
        let system: SystemPreset = preset.build();
        ctx.teardown();

        let star = ctx.next_id();
        ctx.spawn(Body::star(star, system.star_name, system.star_radius).with_texture(system.star_texture));

        for planet in &system.planets {
            let id = ctx.next_id();
            ctx.spawn(
                Body::planet(id, planet.name.as_str(), planet.radius, planet.distance, planet.speed)
                    .with_texture(planet.texture.as_str()),
            );
        }

        self.preset = preset;
        self.home = Vec3::new(0.0, 0.0, system.camera_z);
        ctx.reset_view(self.home);
        ctx.show_panel(PanelContent::new(system.title).note(OVERVIEW_NOTE));
        ctx.emit_event(GameEvent::new(EVENT_PRESET, preset.index(), 0.0, 0.0));
        log::info!("built {} ({} bodies)", system.title, ctx.scene.len());
    }

    fn reset(&mut self, ctx: &mut EngineContext) {
        ctx.reset_view(self.home);
        let title = self.preset.build().title;
        ctx.show_panel(PanelContent::new(title).note(OVERVIEW_NOTE));
        ctx.emit_event(GameEvent::new(EVENT_SELECTION, -1.0, 0.0, 0.0));
    }

    fn click(&mut self, ctx: &mut EngineContext, pointer: Vec2) {
        let Some(hit) = ctx.pick_at(pointer) else {
            log::debug!("click at ({}, {}) hit nothing", pointer.x, pointer.y);
            return;
        };
        if ctx.select(hit.id) {
            self.show_selected(ctx);
            ctx.emit_event(GameEvent::new(EVENT_SELECTION, hit.id.0 as f32, 0.0, 0.0));
        }
    }

    /// Fill the info panel for the selected body from the metadata catalog.
    fn show_selected(&self, ctx: &mut EngineContext) {
        let Some(body) = ctx.selection.resolve(&ctx.scene) else {
            return;
        };
        let content = match &self.catalog {
            None => PanelContent::new(body.name.as_str()).note("Loading data..."),
            Some(catalog) => match catalog.find(&body.name) {
                None => {
                    log::warn!("no metadata for {}", body.name);
                    PanelContent::new(body.name.as_str()).note("No data available.")
                }
                Some(record) => {
                    let mut content = PanelContent::new(record.english_name.as_str())
                        .row("Mass", format_value(record.earth_masses(), "Earth masses"))
                        .row("Diameter", format_value(record.diameter_km(), "km"));
                    if record.semimajor_au().is_some() {
                        content = content.row("Distance", format_value(record.semimajor_au(), "AU"));
                    }
                    content.note(if record.is_planet {
                        "This is a planet."
                    } else {
                        "This is not a planet."
                    })
                }
            },
        };
        ctx.show_panel(content);
    }
}

impl Game for SolarSystem {
    fn config(&self) -> GameConfig {
        GameConfig {
            camera_position: self.home,
            ..GameConfig::default()
        }
    }

    fn init(&mut self, ctx: &mut EngineContext) {
        self.build(ctx, self.preset);
    }

    fn update(&mut self, ctx: &mut EngineContext, input: &InputQueue) {
        for event in input.iter() {
            match *event {
                InputEvent::Click { x, y } => self.click(ctx, Vec2::new(x, y)),
                InputEvent::KeyUp { key_code: keys::ESCAPE } => self.reset(ctx),
                InputEvent::KeyUp { key_code: keys::SPACE } => ctx.playback.toggle(),
                InputEvent::Custom { kind, a, .. } => match kind {
                    CUSTOM_SWITCH_PRESET => match Preset::from_index(a) {
                        Some(preset) => self.build(ctx, preset),
                        None => log::warn!("unknown preset index {a}"),
                    },
                    CUSTOM_TOGGLE_PAUSE => ctx.playback.toggle(),
                    CUSTOM_RESET_VIEW => self.reset(ctx),
                    _ => {}
                },
                _ => {}
            }
        }
    }

    fn load_data(&mut self, ctx: &mut EngineContext, json: &str) -> Result<(), serde_json::Error> {
        let catalog = BodyCatalog::parse(json)?;
        log::info!("loaded metadata for {} bodies", catalog.len());
        self.catalog = Some(catalog);
        self.show_selected(ctx);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const METADATA: &str = r#"{ "bodies": [
        { "englishName": "Sun", "isPlanet": false, "meanRadius": 696342, "semimajorAxis": 0,
          "mass": { "massValue": 1.989, "massExponent": 30 } }
    ] }"#;

    fn setup() -> (SolarSystem, EngineContext) {
        let mut game = SolarSystem::new();
        let mut ctx = EngineContext::new(&game.config());
        game.init(&mut ctx);
        (game, ctx)
    }

    fn run(game: &mut SolarSystem, ctx: &mut EngineContext, events: &[InputEvent]) {
        let mut input = InputQueue::new();
        for e in events {
            input.push(*e);
        }
        game.update(ctx, &input);
    }

    const CENTER: InputEvent = InputEvent::Click { x: 400.0, y: 300.0 };

    #[test]
    fn init_spawns_sol() {
        let (_, ctx) = setup();
        assert_eq!(ctx.scene.len(), 9);
        assert_eq!(ctx.scene.star().unwrap().name, "Sun");
        assert_eq!(ctx.panel.content().heading, "Solar System");
        assert_eq!(ctx.camera.position, Vec3::new(0.0, 0.0, 100.0));
    }

    #[test]
    fn click_on_sun_selects_it() {
        let (mut game, mut ctx) = setup();
        run(&mut game, &mut ctx, &[CENTER]);
        let sun = ctx.scene.star().unwrap().id;
        assert_eq!(ctx.selection.get(), Some(sun));
        assert_eq!(ctx.panel.content().note.as_deref(), Some("Loading data..."));
    }

    #[test]
    fn miss_keeps_selection() {
        let (mut game, mut ctx) = setup();
        run(&mut game, &mut ctx, &[CENTER]);
        let goal = ctx.focus.goal();
        run(&mut game, &mut ctx, &[InputEvent::Click { x: 2.0, y: 2.0 }]);
        assert!(ctx.selection.get().is_some());
        assert_eq!(ctx.focus.goal(), goal);
    }

    #[test]
    fn metadata_fills_panel_for_selection() {
        let (mut game, mut ctx) = setup();
        run(&mut game, &mut ctx, &[CENTER]);
        game.load_data(&mut ctx, METADATA).unwrap();
        let panel = ctx.panel.content();
        assert_eq!(panel.heading, "Sun");
        assert_eq!(panel.rows[0].value, "333054.25 Earth masses");
        assert_eq!(panel.rows[1].value, "1392684.00 km");
        assert_eq!(panel.rows.len(), 2);
        assert_eq!(panel.note.as_deref(), Some("This is not a planet."));
    }

    #[test]
    fn bad_metadata_is_an_error() {
        let (mut game, mut ctx) = setup();
        assert!(game.load_data(&mut ctx, "[]").is_err());
        assert!(game.catalog.is_none());
    }

    #[test]
    fn escape_resets_view() {
        let (mut game, mut ctx) = setup();
        run(&mut game, &mut ctx, &[CENTER]);
        ctx.step_focus();
        run(&mut game, &mut ctx, &[InputEvent::KeyUp { key_code: keys::ESCAPE }]);
        assert!(ctx.selection.get().is_none());
        assert_eq!(ctx.camera.position, Vec3::new(0.0, 0.0, 100.0));
        assert_eq!(ctx.panel.content().heading, "Solar System");
    }

    #[test]
    fn space_toggles_playback() {
        let (mut game, mut ctx) = setup();
        run(&mut game, &mut ctx, &[InputEvent::KeyUp { key_code: keys::SPACE }]);
        assert!(!ctx.playback.is_playing());
        assert!(!ctx.advance());
    }

    #[test]
    fn switching_preset_rebuilds_scene() {
        let (mut game, mut ctx) = setup();
        run(&mut game, &mut ctx, &[CENTER]);
        let generation = ctx.scene.generation();
        run(&mut game, &mut ctx, &[InputEvent::Custom { kind: CUSTOM_SWITCH_PRESET, a: 1.0, b: 0.0, c: 0.0 }]);
        assert_eq!(game.preset(), Preset::Trappist1);
        assert_eq!(ctx.scene.len(), 8);
        assert!(ctx.scene.generation() > generation);
        assert!(ctx.selection.get().is_none());
        assert_eq!(ctx.camera.position, Vec3::new(0.0, 0.0, 60.0));
        assert!(ctx.scene.find_by_name("trappist-1 e").is_some());
    }

    #[test]
    fn unknown_preset_is_ignored() {
        let (mut game, mut ctx) = setup();
        run(&mut game, &mut ctx, &[InputEvent::Custom { kind: CUSTOM_SWITCH_PRESET, a: 9.0, b: 0.0, c: 0.0 }]);
        assert_eq!(game.preset(), Preset::Sol);
        assert_eq!(ctx.scene.len(), 9);
    }
}
