//! `requestAnimationFrame` scheduling

use std::cell::RefCell;
use std::rc::Rc;

use game_core::Scheduler;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Window;

/// Slot for the frame callback, filled once the app exists
pub type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

pub struct RafScheduler {
    window: Window,
    callback: FrameCallback,
}

impl RafScheduler {
    pub fn new(window: Window) -> Self {
        Self {
            window,
            callback: Rc::new(RefCell::new(None)),
        }
    }

    pub fn callback(&self) -> FrameCallback {
        self.callback.clone()
    }
}

impl Scheduler for RafScheduler {
    fn schedule_next(&mut self) {
        let callback = self.callback.borrow();
        let Some(closure) = callback.as_ref() else {
            log::warn!("Frame requested before the callback was installed");
            return;
        };
        let function: &js_sys::Function = closure.as_ref().unchecked_ref();
        if let Err(e) = self.window.request_animation_frame(function) {
            log::error!("requestAnimationFrame failed: {:?}", e);
        }
    }
}
