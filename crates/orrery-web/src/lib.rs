pub mod runner;

pub use runner::SceneRunner;

/// Generate all `#[wasm_bindgen]` exports for a scene.
///
/// Generates:
/// - `thread_local!` storage for the SceneRunner
/// - `with_runner()` helper function
/// - All wasm-bindgen exports (scene_init, scene_tick, input handlers, data accessors)
///
/// # Usage
///
/// ```ignore
/// use wasm_bindgen::prelude::*;
/// use orrery_engine::*;
///
/// mod game;
/// use game::MyScene;
///
/// orrery_web::export_scene!(MyScene, "my-scene");
/// ```
///
/// The scene type must provide `fn new() -> Self`. The calling crate needs
/// `wasm_bindgen`, `console_log`, `console_error_panic_hook` and `log` as
/// dependencies.
#[macro_export]
macro_rules! export_scene {
    ($game_type:ty, $game_name:literal) => {
        use std::cell::RefCell;

        thread_local! {
            static RUNNER: RefCell<Option<$crate::SceneRunner<$game_type>>> = RefCell::new(None);
        }

        fn with_runner<R>(f: impl FnOnce(&mut $crate::SceneRunner<$game_type>) -> R) -> R {
            RUNNER.with(|cell| {
                let mut borrow = cell.borrow_mut();
                let runner = borrow.as_mut().expect("Scene not initialized. Call scene_init() first.");
                f(runner)
            })
        }

        #[wasm_bindgen]
        pub fn scene_init() {
            console_error_panic_hook::set_once();
            let _ = console_log::init_with_level(log::Level::Info);

            let game = <$game_type>::new();
            let runner = $crate::SceneRunner::new(game);

            RUNNER.with(|cell| {
                *cell.borrow_mut() = Some(runner);
            });

            with_runner(|r| r.init());
            log::info!("{}: initialized", $game_name);
        }

        /// Called once per `requestAnimationFrame`.
        #[wasm_bindgen]
        pub fn scene_tick() {
            with_runner(|r| r.tick());
        }

        #[wasm_bindgen]
        pub fn scene_click(x: f32, y: f32) {
            with_runner(|r| r.push_input(InputEvent::Click { x, y }));
        }

        #[wasm_bindgen]
        pub fn scene_key_up(key_code: u32) {
            with_runner(|r| r.push_input(InputEvent::KeyUp { key_code }));
        }

        #[wasm_bindgen]
        pub fn scene_resize(width: f32, height: f32) {
            with_runner(|r| r.push_input(InputEvent::Resize { width, height }));
        }

        #[wasm_bindgen]
        pub fn scene_custom_event(kind: u32, a: f32, b: f32, c: f32) {
            with_runner(|r| r.push_input(InputEvent::Custom { kind, a, b, c }));
        }

        #[wasm_bindgen]
        pub fn scene_load_data(json: &str) -> bool {
            with_runner(|r| r.load_data(json))
        }

        #[wasm_bindgen]
        pub fn scene_submit_text(text: &str) {
            with_runner(|r| r.submit_text(text));
        }

        // ---- Data accessors ----

        #[wasm_bindgen]
        pub fn get_header_ptr() -> *const f32 {
            with_runner(|r| r.header_ptr())
        }

        #[wasm_bindgen]
        pub fn get_camera_ptr() -> *const f32 {
            with_runner(|r| r.camera_ptr())
        }

        #[wasm_bindgen]
        pub fn get_instances_ptr() -> *const f32 {
            with_runner(|r| r.instances_ptr())
        }

        #[wasm_bindgen]
        pub fn get_instance_count() -> u32 {
            with_runner(|r| r.instance_count())
        }

        #[wasm_bindgen]
        pub fn get_game_events_ptr() -> *const f32 {
            with_runner(|r| r.game_events_ptr())
        }

        #[wasm_bindgen]
        pub fn get_game_events_len() -> u32 {
            with_runner(|r| r.game_events_len())
        }

        #[wasm_bindgen]
        pub fn get_scene_manifest() -> String {
            with_runner(|r| r.scene_manifest_json()).unwrap_or_else(|err| {
                log::error!("scene manifest serialization failed: {err}");
                String::from("{}")
            })
        }

        #[wasm_bindgen]
        pub fn get_info_panel() -> String {
            with_runner(|r| r.info_panel_json()).unwrap_or_else(|err| {
                log::error!("info panel serialization failed: {err}");
                String::from("{}")
            })
        }

        // ---- Capacity accessors ----

        #[wasm_bindgen]
        pub fn get_max_instances() -> u32 {
            with_runner(|r| r.max_instances())
        }

        #[wasm_bindgen]
        pub fn get_max_events() -> u32 {
            with_runner(|r| r.max_events())
        }

        #[wasm_bindgen]
        pub fn get_buffer_total_floats() -> u32 {
            with_runner(|r| r.buffer_total_floats())
        }
    };
}
