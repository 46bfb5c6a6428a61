//! Bubble Pop entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;

    use glam::Vec2;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, KeyboardEvent, MouseEvent, TouchEvent};

    use bubble_pop::Settings;
    use bubble_pop::audio::{AudioManager, SoundEffect};
    use bubble_pop::consts::*;
    use bubble_pop::input::{InputState, PointerEvent, to_surface_coords, touch_release};
    use bubble_pop::renderer::CanvasSurface;
    use bubble_pop::sim::{GameState, tick};

    /// Game instance holding all state
    struct Game {
        state: GameState,
        input: InputState,
        surface: CanvasSurface,
        audio: AudioManager,
        settings: Settings,
        /// Muted because the window lost focus
        blur_muted: bool,
    }

    impl Game {
        fn new(seed: u64, surface: CanvasSurface, settings: Settings) -> Self {
            let mut audio = AudioManager::new();
            audio.set_master_volume(settings.master_volume);
            audio.set_sfx_volume(settings.sfx_volume);
            audio.set_muted(settings.muted);
            Self {
                state: GameState::new(seed),
                input: settings.input_state(),
                surface,
                audio,
                settings,
                blur_muted: false,
            }
        }

        /// Run one frame and play its sounds
        fn frame(&mut self) {
            let events = tick(&mut self.state, &self.input, &mut self.surface);
            for event in &events {
                if let Some(effect) = SoundEffect::for_event(event) {
                    self.audio.play(effect);
                }
            }
        }

        fn pointer(&mut self, event: PointerEvent) {
            self.input.apply(event);
        }

        fn sync_mute(&mut self) {
            self.audio.set_muted(self.settings.muted || self.blur_muted);
        }

        fn toggle_mute(&mut self) {
            self.settings.muted = !self.settings.muted;
            self.sync_mute();
            self.settings.save();
            log::info!("Muted: {}", self.settings.muted);
        }

        fn set_focused(&mut self, focused: bool) {
            if self.settings.mute_on_blur {
                self.blur_muted = !focused;
                self.sync_mute();
            }
        }
    }

    /// Client coordinates to logical surface coordinates
    fn surface_point(canvas: &HtmlCanvasElement, client_x: i32, client_y: i32) -> Vec2 {
        let rect = canvas.get_bounding_client_rect();
        let local = Vec2::new(
            client_x as f32 - rect.left() as f32,
            client_y as f32 - rect.top() as f32,
        );
        to_surface_coords(local, Vec2::new(rect.width() as f32, rect.height() as f32))
    }

    pub fn run() -> Result<(), JsValue> {
        log::info!("Bubble Pop starting...");

        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("no document"))?;

        // Hide loading indicator
        if let Some(loading) = document.get_element_by_id("loading") {
            let _ = loading.set_attribute("class", "hidden");
        }

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas1")
            .ok_or_else(|| JsValue::from_str("no canvas"))?
            .dyn_into()?;
        canvas.set_width(SURFACE_WIDTH as u32);
        canvas.set_height(SURFACE_HEIGHT as u32);

        let surface = CanvasSurface::new(&canvas)?;
        let settings = Settings::load();

        let seed = js_sys::Date::now() as u64;
        let game = Rc::new(RefCell::new(Game::new(seed, surface, settings)));
        log::info!("Game initialized with seed: {}", seed);

        setup_input_handlers(&canvas, game.clone())?;
        setup_focus_handlers(game.clone())?;

        // Start game loop
        request_animation_frame(game);

        log::info!("Bubble Pop running!");
        Ok(())
    }

    fn setup_input_handlers(
        canvas: &HtmlCanvasElement,
        game: Rc<RefCell<Game>>,
    ) -> Result<(), JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;

        // Mouse down - set target, show guide line
        {
            let game = game.clone();
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let pos = surface_point(&canvas_clone, event.client_x(), event.client_y());
                let mut g = game.borrow_mut();
                g.audio.resume();
                g.pointer(PointerEvent::Down { x: pos.x, y: pos.y });
            });
            canvas.add_event_listener_with_callback("mousedown", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        // Mouse move - steers only while pressed
        {
            let game = game.clone();
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let pos = surface_point(&canvas_clone, event.client_x(), event.client_y());
                game.borrow_mut()
                    .pointer(PointerEvent::Move { x: pos.x, y: pos.y });
            });
            canvas.add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        // Mouse up on the window so releases outside the canvas count
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                game.borrow_mut().pointer(PointerEvent::Up);
            });
            window.add_event_listener_with_callback("mouseup", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        // Touch start / move
        for name in ["touchstart", "touchmove"] {
            let game = game.clone();
            let canvas_clone = canvas.clone();
            let is_start = name == "touchstart";
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                if let Some(touch) = event.touches().get(0) {
                    let pos = surface_point(&canvas_clone, touch.client_x(), touch.client_y());
                    let mut g = game.borrow_mut();
                    if is_start {
                        g.audio.resume();
                        g.pointer(PointerEvent::Down { x: pos.x, y: pos.y });
                    } else {
                        g.pointer(PointerEvent::Move { x: pos.x, y: pos.y });
                    }
                }
            });
            canvas.add_event_listener_with_callback(name, closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        // Touch end / cancel
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                if let Some(release) = touch_release(event.touches().length()) {
                    game.borrow_mut().pointer(release);
                }
            });
            for name in ["touchend", "touchcancel"] {
                canvas.add_event_listener_with_callback(name, closure.as_ref().unchecked_ref())?;
            }
            closure.forget();
        }

        // Keyboard
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if matches!(event.key().as_str(), "m" | "M") {
                    game.borrow_mut().toggle_mute();
                }
            });
            window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        Ok(())
    }

    fn setup_focus_handlers(game: Rc<RefCell<Game>>) -> Result<(), JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;

        for (name, focused) in [("blur", false), ("focus", true)] {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::FocusEvent| {
                game.borrow_mut().set_focused(focused);
            });
            window.add_event_listener_with_callback(name, closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        Ok(())
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            log::error!("No window - game loop stopped");
            return;
        };
        let closure = Closure::once(move |_time: f64| {
            game_loop(game);
        });
        if let Err(e) = window.request_animation_frame(closure.as_ref().unchecked_ref()) {
            log::error!("requestAnimationFrame failed: {:?}", e);
        }
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>) {
        game.borrow_mut().frame();
        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Info) {
        web_sys::console::error_1(&JsValue::from_str(&e.to_string()));
    }

    if let Err(e) = wasm_game::run() {
        log::error!("Failed to start: {:?}", e);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Bubble Pop (native) starting...");
    log::info!("Native mode runs headless - run with `trunk serve` for the web version");

    let summary = headless::run(headless::SEED, headless::TICKS);
    match serde_json::to_string_pretty(&summary) {
        Ok(json) => println!("{}", json),
        Err(e) => log::error!("Failed to serialize summary: {}", e),
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Scripted session against a recording surface
#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use glam::Vec2;
    use serde::Serialize;

    use bubble_pop::Settings;
    use bubble_pop::audio::SoundEffect;
    use bubble_pop::input::PointerEvent;
    use bubble_pop::renderer::RecordingSurface;
    use bubble_pop::sim::{GameState, tick};

    pub const SEED: u64 = 42;
    pub const TICKS: u64 = 3000;

    /// Pointer script: (tick, event)
    const SCRIPT: &[(u64, PointerEvent)] = &[
        (0, PointerEvent::Down { x: 430.0, y: 450.0 }),
        (60, PointerEvent::Up),
        (400, PointerEvent::Down { x: 200.0, y: 400.0 }),
        (450, PointerEvent::Move { x: 650.0, y: 350.0 }),
        (500, PointerEvent::Up),
        (1200, PointerEvent::Down { x: 300.0, y: 250.0 }),
        (1300, PointerEvent::Up),
        (2000, PointerEvent::Down { x: 600.0, y: 500.0 }),
        (2100, PointerEvent::Up),
    ];

    #[derive(Debug, Serialize)]
    pub struct RunSummary {
        pub seed: u64,
        pub ticks: u64,
        pub score: u64,
        pub sounds_played: u64,
        pub live_bubbles: usize,
        pub player: Vec2,
        pub draw_calls: usize,
    }

    pub fn run(seed: u64, ticks: u64) -> RunSummary {
        let settings = Settings::load();
        let mut state = GameState::new(seed);
        let mut input = settings.input_state();
        let mut surface = RecordingSurface::new();
        let mut draw_calls = 0;
        let mut sounds_played = 0;

        for frame in 0..ticks {
            for (_, event) in SCRIPT.iter().filter(|(at, _)| *at == frame) {
                input.apply(*event);
            }

            let events = tick(&mut state, &input, &mut surface);
            sounds_played += events
                .iter()
                .filter_map(SoundEffect::for_event)
                .count() as u64;
            draw_calls += surface.take().len();
        }

        log::info!(
            "Headless run finished: score {} after {} ticks",
            state.score(),
            state.frame()
        );

        RunSummary {
            seed,
            ticks: state.frame(),
            score: state.score(),
            sounds_played,
            live_bubbles: state.bubbles().len(),
            player: state.player().pos,
            draw_calls,
        }
    }

}
