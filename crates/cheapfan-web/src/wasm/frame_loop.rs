//! `requestAnimationFrame` loop with at most one pending request.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::Window;

pub struct FrameLoop {
    window: Window,
    pending: Cell<bool>,
    callback: RefCell<Option<Closure<dyn FnMut(f64)>>>,
}

impl FrameLoop {
    /// `on_frame` runs once per frame and returns whether to keep going.
    pub fn new<F>(window: Window, mut on_frame: F) -> Rc<Self>
    where
        F: FnMut() -> bool + 'static,
    {
        let this = Rc::new(Self {
            window,
            pending: Cell::new(false),
            callback: RefCell::new(None),
        });
        let weak = Rc::downgrade(&this);
        let closure = Closure::<dyn FnMut(f64)>::new(move |_timestamp: f64| {
            let Some(this) = weak.upgrade() else {
                return;
            };
            this.pending.set(false);
            if on_frame() {
                this.request();
            }
        });
        *this.callback.borrow_mut() = Some(closure);
        this
    }

    /// Schedule the next frame unless one is already scheduled.
    pub fn request(&self) {
        if self.pending.replace(true) {
            return;
        }
        let callback = self.callback.borrow();
        let Some(callback) = callback.as_ref() else {
            self.pending.set(false);
            return;
        };
        if let Err(err) = self
            .window
            .request_animation_frame(callback.as_ref().unchecked_ref())
        {
            self.pending.set(false);
            tracing::warn!(error = ?err, "requestAnimationFrame failed");
        }
    }
}
