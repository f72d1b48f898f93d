#![cfg(target_arch = "wasm32")]

use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::HtmlCanvasElement;

wasm_bindgen_test_configure!(run_in_browser);

fn mount_canvas(id: &str, width: u32, height: u32) -> HtmlCanvasElement {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .expect("document");
    let canvas = document
        .create_element("canvas")
        .expect("create canvas")
        .dyn_into::<HtmlCanvasElement>()
        .expect("canvas element");
    canvas.set_id(id);
    canvas.set_width(width);
    canvas.set_height(height);
    document
        .body()
        .expect("body")
        .append_child(&canvas)
        .expect("append canvas");
    canvas
}

#[wasm_bindgen_test]
fn test_start_runs_first_frame() {
    mount_canvas("pong", 800, 480);

    let handle = client_wasm::start("pong").expect("game starts");

    assert_eq!(handle.ticks(), 1.0);
    assert_eq!(handle.score_left() + handle.score_right(), 0);
}

#[wasm_bindgen_test]
fn test_start_rejects_missing_canvas() {
    assert!(client_wasm::start("no-such-canvas").is_err());
}

#[wasm_bindgen_test]
fn test_start_rejects_unplayable_canvas() {
    let canvas = mount_canvas("tiny", 20, 20);
    assert!(client_wasm::start_on_canvas(canvas).is_err());
}
