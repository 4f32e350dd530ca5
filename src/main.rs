//! Capy Hop entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, KeyboardEvent, MouseEvent, TouchEvent};

    use capy_hop::GameConfig;
    use capy_hop::audio::AudioCues;
    use capy_hop::render::CanvasRenderer;
    use capy_hop::settings::Settings;
    use capy_hop::sim::{GameEvent, GameState, TickInput, tick};

    /// Game instance holding all state
    struct Game {
        state: GameState,
        renderer: CanvasRenderer,
        audio: AudioCues,
        settings: Settings,
        input: TickInput,
        events: Vec<GameEvent>,
        // FPS tracking
        frame_times: [f64; 60],
        frame_index: usize,
        fps: u32,
    }

    impl Game {
        fn new(state: GameState, renderer: CanvasRenderer) -> Self {
            let settings = Settings::load();
            let audio = AudioCues::new();
            audio.apply_settings(&settings);
            Self {
                state,
                renderer,
                audio,
                settings,
                input: TickInput::default(),
                events: Vec::new(),
                frame_times: [0.0; 60],
                frame_index: 0,
                fps: 0,
            }
        }

        /// One sim tick per animation frame
        fn update(&mut self, time: f64) {
            self.events.clear();
            let input = self.input;
            tick(&mut self.state, &input, &mut self.events);
            // Activate is a one-shot input
            self.input.activate = false;

            self.handle_events();
            self.track_fps(time);
        }

        fn handle_events(&mut self) {
            for event in &self.events {
                match event {
                    GameEvent::Started => {
                        log::info!("Run started");
                        self.audio.enter_running();
                    }
                    GameEvent::GameOver { score } => {
                        log::info!("Game over, score {score}");
                        self.audio.game_over();
                    }
                    GameEvent::Flapped | GameEvent::PipeCleared { .. } => {}
                }
            }
        }

        fn track_fps(&mut self, time: f64) {
            self.frame_times[self.frame_index] = time;
            self.frame_index = (self.frame_index + 1) % 60;

            let oldest_time = self.frame_times[self.frame_index];
            if oldest_time > 0.0 {
                let elapsed = time - oldest_time;
                if elapsed > 0.0 {
                    self.fps = (60000.0 / elapsed).round() as u32;
                }
            }
        }

        fn render(&self) {
            let fps = self.settings.show_fps.then_some(self.fps);
            self.renderer.render(&self.state, fps);
        }

        fn toggle_mute(&mut self) {
            self.settings.muted = !self.settings.muted;
            self.settings.save();
            self.audio.apply_settings(&self.settings);
            log::info!("Muted: {}", self.settings.muted);
        }

        fn toggle_fps(&mut self) {
            self.settings.show_fps = !self.settings.show_fps;
            self.settings.save();
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Capy Hop starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        let config = GameConfig::default();
        canvas.set_width(config.field_width as u32);
        canvas.set_height(config.field_height as u32);

        let ctx = canvas
            .get_context("2d")
            .expect("2d context unavailable")
            .expect("2d context missing")
            .dyn_into::<web_sys::CanvasRenderingContext2d>()
            .expect("not a 2d context");

        let seed = js_sys::Date::now() as u64;
        let state = GameState::new(config, seed).expect("invalid game configuration");
        log::info!("Session initialized with seed: {seed}");

        let game = Rc::new(RefCell::new(Game::new(state, CanvasRenderer::new(ctx))));
        game.borrow().audio.enter_idle();

        setup_input_handlers(&canvas, game.clone());

        request_animation_frame(game);

        log::info!("Capy Hop running!");
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, game: Rc<RefCell<Game>>) {
        // Mouse press
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                game.borrow_mut().input.activate = true;
            });
            let _ = canvas
                .add_event_listener_with_callback("mousedown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch press
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                game.borrow_mut().input.activate = true;
            });
            let _ = canvas
                .add_event_listener_with_callback("touchstart", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Keyboard
        {
            let window = web_sys::window().unwrap();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let mut g = game.borrow_mut();
                match event.key().as_str() {
                    " " | "Enter" | "ArrowUp" => g.input.activate = true,
                    "m" | "M" => g.toggle_mute(),
                    "f" | "F" => g.toggle_fps(),
                    _ => {}
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        {
            let mut g = game.borrow_mut();
            g.update(time);
            g.render();
        }

        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use std::time::{SystemTime, UNIX_EPOCH};

    use capy_hop::GameConfig;
    use capy_hop::sim::{GameEvent, GameState, TickInput, tick};

    env_logger::init();
    log::info!("Capy Hop (native) starting...");
    log::info!("Headless smoke run - build for wasm32 to play in the browser");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(1);
    let mut state =
        GameState::new(GameConfig::default(), seed).expect("invalid game configuration");
    log::info!("Session initialized with seed: {seed}");

    // Scripted run: flap on a fixed cadence and report what happens
    let mut events = Vec::new();
    let mut best = 0u32;
    for frame in 0u64..3600 {
        let input = TickInput {
            activate: frame % 35 == 0,
        };
        events.clear();
        tick(&mut state, &input, &mut events);
        for event in &events {
            match event {
                GameEvent::PipeCleared { score } => best = best.max(*score),
                GameEvent::GameOver { score } => log::info!("Game over at score {score}"),
                _ => {}
            }
        }
    }
    log::info!("Smoke run finished, best score {best}");
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
