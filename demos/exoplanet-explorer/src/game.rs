/// Exoplanet explorer: type a host-star name, get its system in orbit.
///
/// The page fetches the catalog JSON and passes it to `load_data`; searches
/// arrive through `submit_text`. Image-service replies for the customization
/// form come back through `load_data` as well.

use orrery_engine::*;
use glam::{Vec2, Vec3};
use serde::Deserialize;

use crate::catalog::{Catalog, PlanetRecord, StarSummary, StarSystem};
use crate::climate::name_hash;
use crate::customize::{valid_size, GeneratedImage};

/// Scene units per solar radius.
const STAR_SCALE: f64 = 150.0;
/// Scene units per Earth radius.
const PLANET_SCALE: f64 = 5.0;
/// Orbit gap per planet, in rendered planet radii.
const ORBIT_SPACING: f64 = 6.0;
/// Angular speed of the innermost planet; each next one is half as fast.
const BASE_SPEED: f32 = 0.01;
const STAR_TEXTURES: u32 = 8;

// ── Custom event kinds from the page ─────────────────────────────────

const CUSTOM_TOGGLE_PAUSE: u32 = 1;
const CUSTOM_RESET_VIEW: u32 = 2;
/// `a` = new rendered radius of the selected body.
const CUSTOM_RESIZE_SELECTED: u32 = 3;

// ── Game event kinds to the page ─────────────────────────────────────

const EVENT_SELECTION: f32 = 1.0;
const EVENT_SYSTEM_LOADED: f32 = 2.0;
const EVENT_SEARCH_MISS: f32 = 3.0;
/// `a` = id of the body whose size or texture changed.
const EVENT_RESTYLED: f32 = 4.0;

const TITLE: &str = "Exoplanetary System";

/// Orbit radius of the planet at `index` around a star of rendered radius `star_radius`.
pub fn orbit_distance(star_radius: f32, index: usize, planet_radius_earth: f64) -> f32 {
    star_radius * 2.0 + (index as f64 * planet_radius_earth * PLANET_SCALE * ORBIT_SPACING) as f32
}

pub fn orbit_speed(index: usize) -> f32 {
    BASE_SPEED / 2f32.powi(index as i32)
}

fn star_panel(star: &StarSummary) -> PanelContent {
    let content = PanelContent::new(star.star_name.as_str())
        .row("Star Radius", format!("{} Solar radii", star.star_radius))
        .row("Star Mass", format!("{} Solar masses", star.star_mass))
        .row("Star Temperature", format!("{} K", star.star_temperature));
    match star.distance {
        Some(pc) => content.row("Distance", format!("{pc} pc")),
        None => content,
    }
}

fn planet_panel(planet: &PlanetRecord) -> PanelContent {
    let temperature = match (planet.planet_temperature, planet.temperature()) {
        (Some(t), _) => format!("{t} K"),
        (None, Some(t)) => format!("{t:.0} K (estimated)"),
        (None, None) => String::from("N/A"),
    };
    let mass = planet
        .planet_mass
        .map(|m| format!("{m} Earth masses"))
        .unwrap_or_else(|| String::from("N/A"));

    PanelContent::new(planet.planet_name.as_str())
        .row("Planet Radius", format!("{} Earth radii", planet.planet_radius))
        .row("Planet Mass", mass)
        .row("Temperature", temperature)
        .row("Type", planet.class().label())
        .row("Star Temperature", format!("{} K", planet.star_temperature))
        .row("Star Radius", format!("{} Solar radii", planet.star_radius))
}

/// Documents the page hands to `load_data`.
#[derive(Deserialize)]
#[serde(untagged)]
enum Document {
    Catalog(Vec<PlanetRecord>),
    Image(GeneratedImage),
}

fn announce_restyle(ctx: &mut EngineContext) {
    let id = BodyId::encode(ctx.selection.get());
    ctx.emit_event(GameEvent::new(EVENT_RESTYLED, id, 0.0, 0.0));
}

pub struct ExoplanetExplorer {
    catalog: Option<Catalog>,
    /// Host star of the system on screen.
    current: Option<String>,
    /// Escape returns the camera here.
    home: Vec3,
}

impl ExoplanetExplorer {
    pub fn new() -> Self {
        Self {
            catalog: None,
            current: None,
            home: GameConfig::default().camera_position,
        }
    }

    pub fn current_system(&self) -> Option<&str> {
        self.current.as_deref()
    }

    /// Replace whatever is on screen with `system`.
    fn setup_system(&mut self, ctx: &mut EngineContext, system: &StarSystem) {
        let Some(star) = system.star() else {
            return;
        };
        ctx.teardown();

        let star_radius = (star.star_radius * STAR_SCALE) as f32;
        let star_id = ctx.next_id();
        let star_texture = format!("assets/stars/star{}.jpg", name_hash(&star.star_name) % STAR_TEXTURES + 1);
        ctx.spawn(Body::star(star_id, star.star_name.as_str(), star_radius).with_texture(star_texture));

        for (i, planet) in system.planets.iter().enumerate() {
            let id = ctx.next_id();
            let distance = orbit_distance(star_radius, i, planet.planet_radius);
            let radius = (planet.planet_radius * PLANET_SCALE) as f32;
            let texture = planet.class().texture_for(&planet.planet_name);
            ctx.spawn(
                Body::planet(id, planet.planet_name.as_str(), radius, distance, orbit_speed(i))
                    .with_texture(texture),
            );
        }

        ctx.camera.look_from(Vec3::new(0.0, 0.0, star_radius * 6.0), Vec3::ZERO);
        self.home = Vec3::new(0.0, star_radius * 2.0, star_radius * 6.0);
        self.current = Some(star.star_name.clone());

        ctx.show_panel(
            PanelContent::new(format!("System: {} system", star.star_name))
                .note("Click on any planet to see its information."),
        );
        ctx.emit_event(GameEvent::new(EVENT_SYSTEM_LOADED, system.planets.len() as f32, 0.0, 0.0));
        log::info!("showing {} with {} planets", star.star_name, system.planets.len());
    }

    fn click(&mut self, ctx: &mut EngineContext, pointer: Vec2) {
        let Some(hit) = ctx.pick_at(pointer) else {
            return;
        };
        let Some(body) = ctx.scene.get(hit.id) else {
            return;
        };
        let Some(catalog) = &self.catalog else {
            return;
        };

        let content = if body.is_star() {
            catalog.star(&body.name).map(|star| star_panel(&star))
        } else {
            catalog.planet(&body.name).map(planet_panel)
        };
        let Some(content) = content else {
            log::warn!("no catalog entry for {}", body.name);
            return;
        };

        // A hit always resumes the orbits.
        ctx.playback.play();
        ctx.select(hit.id);
        ctx.show_panel(content);
        ctx.emit_event(GameEvent::new(EVENT_SELECTION, hit.id.0 as f32, 0.0, 0.0));
    }

    fn resize_selected(&mut self, ctx: &mut EngineContext, size: f32) {
        let Some(radius) = valid_size(size) else {
            log::warn!("ignoring planet size {size}");
            return;
        };
        if ctx.restyle_selected(Some(radius), None) {
            announce_restyle(ctx);
        }
    }

    fn retexture_selected(&mut self, ctx: &mut EngineContext, image: &GeneratedImage) {
        if ctx.restyle_selected(None, Some(&image.img_url)) {
            announce_restyle(ctx);
        } else {
            log::warn!("generated texture arrived with nothing selected");
        }
    }

    fn reset(&mut self, ctx: &mut EngineContext) {
        ctx.reset_view(self.home);
        ctx.show_panel(PanelContent::new(TITLE).note("Click on a planet to see its information"));
        ctx.emit_event(GameEvent::new(EVENT_SELECTION, -1.0, 0.0, 0.0));
    }
}

impl Game for ExoplanetExplorer {
    fn config(&self) -> GameConfig {
        GameConfig {
            far: 100_000.0,
            ..GameConfig::default()
        }
    }

    fn init(&mut self, ctx: &mut EngineContext) {
        ctx.show_panel(PanelContent::new(TITLE).note("Loading catalog..."));
    }

    fn update(&mut self, ctx: &mut EngineContext, input: &InputQueue) {
        for event in input.iter() {
            match *event {
                InputEvent::Click { x, y } => self.click(ctx, Vec2::new(x, y)),
                InputEvent::KeyUp { key_code: keys::ESCAPE } => self.reset(ctx),
                InputEvent::KeyUp { key_code: keys::SPACE } => ctx.playback.toggle(),
                InputEvent::Custom { kind: CUSTOM_TOGGLE_PAUSE, .. } => ctx.playback.toggle(),
                InputEvent::Custom { kind: CUSTOM_RESET_VIEW, .. } => self.reset(ctx),
                InputEvent::Custom { kind: CUSTOM_RESIZE_SELECTED, a, .. } => self.resize_selected(ctx, a),
                _ => {}
            }
        }
    }

    fn load_data(&mut self, ctx: &mut EngineContext, json: &str) -> Result<(), serde_json::Error> {
        let records = match serde_json::from_str::<Document>(json)? {
            Document::Catalog(records) => records,
            Document::Image(image) => {
                self.retexture_selected(ctx, &image);
                return Ok(());
            }
        };
        let catalog = Catalog::from_records(records);
        log::info!("catalog loaded: {} systems", catalog.len());
        self.catalog = Some(catalog);
        if self.current.is_none() {
            ctx.show_panel(
                PanelContent::new(TITLE).note("Just type any exoplanet star name to display the system."),
            );
        }
        Ok(())
    }

    fn submit_text(&mut self, ctx: &mut EngineContext, text: &str) {
        let Some(catalog) = self.catalog.take() else {
            log::warn!("search for {text:?} before the catalog loaded");
            return;
        };
        match catalog.system(text) {
            Some(system) => self.setup_system(ctx, system),
            None => {
                log::warn!("system not found: {text:?}");
                let heading = ctx.panel.content().heading.clone();
                ctx.show_panel(PanelContent::new(heading).note("System not found."));
                ctx.emit_event(GameEvent::new(EVENT_SEARCH_MISS, 0.0, 0.0, 0.0));
            }
        }
        self.catalog = Some(catalog);
    }
}
