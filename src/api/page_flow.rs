//! Page flow handle: pagination bindings for the preview surface
//!
//! Owns the pagination estimator together with its probe and settle
//! state. The host measures break-marker offsets (it already has the
//! rendered elements in hand) and feeds them in; Rust decides the filler
//! heights. Teardown cancels any pending timer and detaches the resize
//! listener so no callback can fire against unmounted content.

use wasm_bindgen::prelude::*;

use crate::layout::{
    measure_page_height_px, PaginationEstimator, ResizeHook, SettleTimer, SETTLE_DELAY_MS,
};
use crate::wasm_log;

/// Pagination controller for one preview surface.
#[wasm_bindgen]
pub struct PageFlow {
    estimator: PaginationEstimator,
    settle: SettleTimer,
    resize: ResizeHook,
}

#[wasm_bindgen]
impl PageFlow {
    /// Create a page flow, probing the live page height (fixed-conversion
    /// fallback when probing is unavailable)
    #[wasm_bindgen(constructor)]
    pub fn new() -> PageFlow {
        let page_height = measure_page_height_px();
        wasm_log!("PageFlow created, page height {}px", page_height);
        PageFlow {
            estimator: PaginationEstimator::new(page_height),
            settle: SettleTimer::new(),
            resize: ResizeHook::new(),
        }
    }

    /// Page height currently paginated against, in CSS pixels
    #[wasm_bindgen(js_name = pageHeightPx)]
    pub fn page_height_px(&self) -> f64 {
        self.estimator.page_height()
    }

    /// Re-probe the page height (viewport density may have changed);
    /// returns the new value
    #[wasm_bindgen(js_name = remeasurePageHeight)]
    pub fn remeasure_page_height(&mut self) -> f64 {
        let page_height = measure_page_height_px();
        self.estimator.set_page_height(page_height);
        self.estimator.page_height()
    }

    /// Recompute filler heights from measured break-marker offsets (tops
    /// of the markers, in flow order, against the currently applied
    /// spacers). Returns one filler height per marker.
    #[wasm_bindgen(js_name = computeFillers)]
    pub fn compute_fillers(&mut self, marker_offsets: Vec<f64>) -> Vec<f64> {
        self.estimator.update(&marker_offsets)
    }

    /// Filler heights from the last computation
    pub fn fillers(&self) -> Vec<f64> {
        self.estimator.fillers().to_vec()
    }

    /// Forget applied fillers after the content was replaced wholesale
    #[wasm_bindgen(js_name = resetFillers)]
    pub fn reset_fillers(&mut self) {
        self.estimator.reset();
    }

    // ========================================================================
    // Settle / resize scheduling
    // ========================================================================

    /// Schedule `callback` after the settle delay (or a custom one),
    /// cancelling any pending settle first. Returns false when scheduling
    /// is unavailable.
    #[wasm_bindgen(js_name = scheduleSettle)]
    pub fn schedule_settle(&mut self, callback: js_sys::Function, delay_ms: Option<i32>) -> bool {
        self.settle
            .schedule(callback, delay_ms.unwrap_or(SETTLE_DELAY_MS))
    }

    /// Cancel a pending settle callback, if any
    #[wasm_bindgen(js_name = cancelSettle)]
    pub fn cancel_settle(&mut self) {
        self.settle.cancel();
    }

    /// Register a viewport resize callback, replacing any previous one
    #[wasm_bindgen(js_name = onResize)]
    pub fn on_resize(&mut self, callback: js_sys::Function) -> bool {
        self.resize.attach(callback)
    }

    /// Unregister the resize callback
    #[wasm_bindgen(js_name = detachResize)]
    pub fn detach_resize(&mut self) {
        self.resize.detach();
    }

    /// Release all timers and listeners; call when the preview unmounts
    pub fn dispose(&mut self) {
        self.settle.cancel();
        self.resize.detach();
        wasm_log!("PageFlow disposed");
    }
}

impl Default for PageFlow {
    fn default() -> Self {
        Self::new()
    }
}
