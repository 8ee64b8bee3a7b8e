//! Settle timers and resize hooks
//!
//! Pagination must be recomputed after asynchronous content (images)
//! finishes affecting layout, and on viewport resize. Both are modeled as
//! explicit handles with deterministic cancellation: a pending callback
//! is cancelled when the handle is rescheduled, cancelled explicitly, or
//! dropped, so no callback can ever run against torn-down state.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

/// Delay before re-measuring after content mounts, long enough for
/// late-arriving images to land
pub const SETTLE_DELAY_MS: i32 = 300;

/// A single deferred re-measurement slot backed by `setTimeout`.
///
/// At most one callback is pending at a time; scheduling again cancels
/// the previous one first.
#[derive(Default)]
pub struct SettleTimer {
    handle: Option<i32>,
    // Keeps the JS closure alive until it is cancelled or replaced
    callback: Option<Closure<dyn FnMut()>>,
}

impl SettleTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `callback` after `delay_ms`, cancelling any pending one.
    /// Returns false when no window is available to schedule against.
    pub fn schedule(&mut self, callback: js_sys::Function, delay_ms: i32) -> bool {
        self.cancel();

        let window = match web_sys::window() {
            Some(w) => w,
            None => return false,
        };

        let closure = Closure::<dyn FnMut()>::new(move || {
            if let Err(e) = callback.call0(&JsValue::NULL) {
                log::warn!("settle callback threw: {:?}", e);
            }
        });

        match window.set_timeout_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            delay_ms,
        ) {
            Ok(handle) => {
                self.handle = Some(handle);
                self.callback = Some(closure);
                true
            }
            Err(e) => {
                log::warn!("failed to schedule settle timer: {:?}", e);
                false
            }
        }
    }

    /// Cancel the pending callback, if any. Idempotent; cancelling an
    /// already-fired timer is harmless.
    pub fn cancel(&mut self) {
        if let Some(handle) = self.handle.take() {
            if let Some(window) = web_sys::window() {
                window.clear_timeout_with_handle(handle);
            }
        }
        self.callback = None;
    }

    /// Whether a callback has been scheduled and not yet cancelled
    pub fn is_scheduled(&self) -> bool {
        self.handle.is_some()
    }
}

impl Drop for SettleTimer {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// A window `resize` listener with deterministic detach.
#[derive(Default)]
pub struct ResizeHook {
    listener: Option<Closure<dyn FnMut()>>,
}

impl ResizeHook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `callback` for window resize events, replacing any
    /// previously attached one. Returns false when no window is available.
    pub fn attach(&mut self, callback: js_sys::Function) -> bool {
        self.detach();

        let window = match web_sys::window() {
            Some(w) => w,
            None => return false,
        };

        let closure = Closure::<dyn FnMut()>::new(move || {
            if let Err(e) = callback.call0(&JsValue::NULL) {
                log::warn!("resize callback threw: {:?}", e);
            }
        });

        match window
            .add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref())
        {
            Ok(()) => {
                self.listener = Some(closure);
                true
            }
            Err(e) => {
                log::warn!("failed to attach resize listener: {:?}", e);
                false
            }
        }
    }

    /// Unregister the listener, if any. Idempotent.
    pub fn detach(&mut self) {
        if let Some(closure) = self.listener.take() {
            if let Some(window) = web_sys::window() {
                let _ = window
                    .remove_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
            }
        }
    }

    /// Whether a listener is currently attached
    pub fn is_attached(&self) -> bool {
        self.listener.is_some()
    }
}

impl Drop for ResizeHook {
    fn drop(&mut self) {
        self.detach();
    }
}
