//! Canvas 2D browser client for Pong
//!
//! Mouse drives the left paddle, the AI drives the right one. The simulation
//! lives in `game_core`; this crate only wires it to the page.
//! Note: only compiled for the wasm32 target

#![cfg(target_arch = "wasm32")]

mod input;
mod renderer;
mod scheduler;

use std::cell::RefCell;
use std::rc::Rc;

use game_core::{Config, FrameLoop, Game, GameRng};
use renderer::Renderer;
use scheduler::RafScheduler;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlCanvasElement;

/// Everything the frame and input callbacks share
pub struct App {
    pub game: Game,
    renderer: Renderer,
    frame_loop: FrameLoop<RafScheduler>,
}

impl App {
    fn frame(&mut self) {
        self.frame_loop.tick(&mut self.game, &mut self.renderer);
    }
}

/// Handle returned to JS for inspecting a running game
#[wasm_bindgen]
pub struct PongHandle {
    app: Rc<RefCell<App>>,
}

#[wasm_bindgen]
impl PongHandle {
    #[wasm_bindgen(getter)]
    pub fn score_left(&self) -> u32 {
        self.app.borrow().game.score.left
    }

    #[wasm_bindgen(getter)]
    pub fn score_right(&self) -> u32 {
        self.app.borrow().game.score.right
    }

    /// Simulation ticks run so far
    #[wasm_bindgen(getter)]
    pub fn ticks(&self) -> f64 {
        self.app.borrow().game.ticks() as f64
    }
}

fn init_logging() {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    // Fails only when a logger is already installed (second start on the page)
    let _ = console_log::init_with_level(level);
}

/// Start a game on the canvas with the given element id
#[wasm_bindgen]
pub fn start(canvas_id: &str) -> Result<PongHandle, JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("No window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("No document"))?;
    let canvas = document
        .get_element_by_id(canvas_id)
        .ok_or_else(|| JsValue::from_str(&format!("No element with id '{}'", canvas_id)))?
        .dyn_into::<HtmlCanvasElement>()
        .map_err(|_| JsValue::from_str(&format!("Element '{}' is not a canvas", canvas_id)))?;

    start_on_canvas(canvas)
}

/// Start a game on an existing canvas element.
///
/// The first frame runs before this returns; later frames follow on every
/// animation frame until the page goes away.
#[wasm_bindgen]
pub fn start_on_canvas(canvas: HtmlCanvasElement) -> Result<PongHandle, JsValue> {
    init_logging();

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("No window"))?;
    let config = Config::for_board(canvas.width() as f32, canvas.height() as f32);
    config
        .validate()
        .map_err(|e| JsValue::from_str(&format!("Unplayable canvas: {}", e)))?;

    let renderer = Renderer::new(&canvas)?;
    let scheduler = RafScheduler::new(window);
    let callback = scheduler.callback();

    let app = Rc::new(RefCell::new(App {
        game: Game::new(config, GameRng::from_entropy()),
        renderer,
        frame_loop: FrameLoop::new(scheduler),
    }));

    input::listen_mouse_move(&canvas, app.clone())?;

    let frame_app = app.clone();
    *callback.borrow_mut() = Some(Closure::new(move || frame_app.borrow_mut().frame()));

    log::info!(
        "Pong started on {}x{} canvas",
        canvas.width(),
        canvas.height()
    );
    app.borrow_mut().frame();

    Ok(PongHandle { app })
}
