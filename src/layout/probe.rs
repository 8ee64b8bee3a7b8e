//! Physical page height probe
//!
//! The on-screen pixel height of an A4 page depends on the host's
//! physical-to-pixel density, which is not statically knowable. The probe
//! renders an invisible element sized in millimeters and reads back its
//! rendered pixel height. When probing is unavailable (no window, DOM
//! failure, zero height) the fixed CSS conversion constant is used
//! instead, so pagination degrades to an approximation rather than
//! disappearing.

use thiserror::Error;

/// A4 page height
pub const A4_HEIGHT_MM: f64 = 297.0;

/// A4 page width
pub const A4_WIDTH_MM: f64 = 210.0;

/// CSS reference pixel density
pub const CSS_PX_PER_IN: f64 = 96.0;

/// Millimeters per inch
pub const MM_PER_IN: f64 = 25.4;

#[derive(Error, Debug)]
pub enum ProbeError {
    #[error("no window available")]
    NoWindow,

    #[error("no document available")]
    NoDocument,

    #[error("no document body to mount the probe under")]
    NoBody,

    #[error("probe DOM operation failed: {0}")]
    Dom(String),

    #[error("probe measured a non-positive height")]
    ZeroHeight,
}

/// Fixed-conversion page height: `297mm * 96px/in / 25.4mm/in`
pub fn fallback_page_height_px() -> f64 {
    A4_HEIGHT_MM * CSS_PX_PER_IN / MM_PER_IN
}

/// On-screen pixel height of one A4 page.
///
/// Probes the live DOM and falls back to the fixed conversion constant
/// on any failure. Never fails.
pub fn measure_page_height_px() -> f64 {
    match probe_page_height_px() {
        Ok(px) => px,
        Err(e) => {
            log::warn!(
                "page height probe unavailable ({}), using {}px fallback",
                e,
                fallback_page_height_px()
            );
            fallback_page_height_px()
        }
    }
}

/// Mount an invisible `height: 297mm` element, read its rendered pixel
/// height, and unmount it again. Outside the browser there is nothing to
/// probe; native builds report the window as missing.
#[cfg(not(target_arch = "wasm32"))]
pub fn probe_page_height_px() -> Result<f64, ProbeError> {
    Err(ProbeError::NoWindow)
}

#[cfg(target_arch = "wasm32")]
pub fn probe_page_height_px() -> Result<f64, ProbeError> {
    let window = web_sys::window().ok_or(ProbeError::NoWindow)?;
    let document = window.document().ok_or(ProbeError::NoDocument)?;
    let body = document.body().ok_or(ProbeError::NoBody)?;

    let probe = document
        .create_element("div")
        .map_err(|e| ProbeError::Dom(format!("{:?}", e)))?;
    probe
        .set_attribute(
            "style",
            &format!(
                "position:absolute;visibility:hidden;pointer-events:none;width:0;height:{}mm",
                A4_HEIGHT_MM
            ),
        )
        .map_err(|e| ProbeError::Dom(format!("{:?}", e)))?;

    body.append_child(&probe)
        .map_err(|e| ProbeError::Dom(format!("{:?}", e)))?;
    let height = probe.get_bounding_client_rect().height();
    probe.remove();

    if height > 0.0 {
        Ok(height)
    } else {
        Err(ProbeError::ZeroHeight)
    }
}
