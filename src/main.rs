//! Canvas SHMUP entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    use wasm_bindgen::prelude::*;
    use web_sys::{KeyboardEvent, Performance, Window};

    use canvas_shmup::ShmupError;
    use canvas_shmup::consts::TICK_INTERVAL_MS;
    use canvas_shmup::platform::Game;
    use canvas_shmup::renderer::CanvasSurface;
    use canvas_shmup::settings::Settings;

    const CANVAS_ID: &str = "canvas";

    pub fn run() -> Result<(), ShmupError> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info)
            .map_err(|e| ShmupError::Logger(e.to_string()))?;

        log::info!("Canvas SHMUP starting...");

        let window = web_sys::window().ok_or(ShmupError::MissingWindow)?;
        let document = window.document().ok_or(ShmupError::MissingDocument)?;
        let performance = window.performance().ok_or(ShmupError::MissingClock)?;

        let settings = Settings::load();
        let surface = CanvasSurface::attach(&document, CANVAS_ID, settings.scale)?;
        let game = Rc::new(RefCell::new(Game::new(settings)));

        setup_input_handlers(&window, game.clone())?;
        start_ticker(&window, game, surface, performance)?;

        log::info!("Canvas SHMUP running!");
        Ok(())
    }

    fn setup_input_handlers(window: &Window, game: Rc<RefCell<Game>>) -> Result<(), ShmupError> {
        // Key down
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if game.borrow_mut().key_down(&event.code()).is_some() {
                    // Keep arrows from scrolling the page
                    event.prevent_default();
                }
            });
            window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        // Key up
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                game.borrow_mut().key_up(&event.code());
            });
            window.add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        // Window blur: key-ups for held keys are lost
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::FocusEvent| {
                game.borrow_mut().release_all();
                log::info!("Input released (window blur)");
            });
            window.add_event_listener_with_callback("blur", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        Ok(())
    }

    fn start_ticker(
        window: &Window,
        game: Rc<RefCell<Game>>,
        mut surface: CanvasSurface,
        performance: Performance,
    ) -> Result<(), ShmupError> {
        let handle: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));

        let handle_in_tick = handle.clone();
        let closure = Closure::<dyn FnMut()>::new(move || {
            let now = performance.now();
            if game.borrow_mut().frame(now, &mut surface) {
                return;
            }
            if let Some(id) = handle_in_tick.take() {
                if let Some(window) = web_sys::window() {
                    window.clear_interval_with_handle(id);
                }
                log::info!("No game state left, loop stopped");
            }
        });

        let id = window.set_interval_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            TICK_INTERVAL_MS.round() as i32,
        )?;
        handle.set(Some(id));
        closure.forget();

        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() -> Result<(), JsValue> {
    wasm_game::run().map_err(|e| JsValue::from_str(&e.to_string()))
}

#[cfg(not(target_arch = "wasm32"))]
mod native_game {
    use std::time::{Duration, Instant};

    use canvas_shmup::consts::{TICK_INTERVAL_MS, TICK_RATE_HZ};
    use canvas_shmup::platform::Game;
    use canvas_shmup::renderer::RecordingSurface;
    use canvas_shmup::settings::Settings;

    /// Scripted key timeline: (tick, key code, pressed)
    const SCRIPT: &[(u32, &str, bool)] = &[
        (0, "KeyZ", true),
        (0, "ArrowRight", true),
        (60, "ArrowRight", false),
        (60, "ArrowLeft", true),
        (60, "ShiftLeft", true),
        (90, "ArrowUp", true),
        (120, "KeyZ", false),
        (150, "ArrowLeft", false),
        (150, "ShiftLeft", false),
        (150, "ArrowUp", false),
    ];

    /// Headless run: the real loop with a recording surface and fixed pacing
    pub fn run(seconds: u32) {
        let settings = Settings::load();
        let mut surface = RecordingSurface::new(settings.scale);
        let mut game = Game::new(settings);

        let frame = Duration::from_secs_f64(TICK_INTERVAL_MS / 1000.0);
        let start = Instant::now();

        for tick in 0..seconds * TICK_RATE_HZ {
            let frame_start = Instant::now();

            for (_, code, pressed) in SCRIPT.iter().filter(|(at, _, _)| *at == tick) {
                if *pressed {
                    game.key_down(code);
                } else {
                    game.key_up(code);
                }
            }

            surface.clear();
            let now_ms = start.elapsed().as_secs_f64() * 1000.0;
            if !game.frame(now_ms, &mut surface) {
                log::info!("No game state left, loop stopped");
                break;
            }

            if tick % TICK_RATE_HZ == 0 {
                if let Some(state) = game.active_state() {
                    log::info!(
                        "t={}s actors={} projectiles={} player={:?}",
                        tick / TICK_RATE_HZ,
                        state.actors.len(),
                        state.projectile_count(),
                        state.player().map(|p| p.body.pos)
                    );
                }
            }

            let elapsed = frame_start.elapsed();
            if elapsed < frame {
                std::thread::sleep(frame - elapsed);
            }
        }

        println!(
            "Ran {} frames in {:.2}s, last frame issued {} draw calls",
            game.frames(),
            start.elapsed().as_secs_f64(),
            surface.commands.len()
        );
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Canvas SHMUP (native) starting...");
    log::info!("Native mode runs headless - build for wasm32 to play in a browser");

    native_game::run(4);
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
