//! Mouse input handling

use std::cell::RefCell;
use std::rc::Rc;

use game_core::PointerMove;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{HtmlCanvasElement, MouseEvent};

use crate::App;

/// Convert a mouse event to board space using the canvas' on-screen position
pub fn pointer_from_event(canvas: &HtmlCanvasElement, event: &MouseEvent) -> PointerMove {
    let top = canvas.get_bounding_client_rect().top();
    PointerMove::new(event.client_y() as f32, top as f32)
}

/// Drive the left paddle from `mousemove` on the canvas.
/// The listener lives as long as the page.
pub fn listen_mouse_move(canvas: &HtmlCanvasElement, app: Rc<RefCell<App>>) -> Result<(), JsValue> {
    let target = canvas.clone();
    let on_move = Closure::<dyn FnMut(MouseEvent)>::new(move |event: MouseEvent| {
        let pointer = pointer_from_event(&target, &event);
        app.borrow_mut().game.pointer_moved(pointer);
    });

    canvas
        .add_event_listener_with_callback("mousemove", on_move.as_ref().unchecked_ref())
        .map_err(|e| JsValue::from_str(&format!("Failed to listen for mousemove: {:?}", e)))?;
    on_move.forget();
    Ok(())
}
