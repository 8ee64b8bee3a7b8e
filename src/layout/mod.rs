//! Pagination layout engine
//!
//! Reconciles a continuous, reflow-driven screen layout with the
//! discrete, fixed-size pages the print engine produces. The math is
//! pure and host-independent; the DOM probe and settle/resize hooks are
//! the only pieces that talk to the browser.

pub mod pagination;
pub mod probe;
pub mod settle;

pub use pagination::{filler_for, PaginationEstimator, FILLER_TOLERANCE_PX};
pub use probe::{fallback_page_height_px, measure_page_height_px, A4_HEIGHT_MM, A4_WIDTH_MM};
pub use settle::{ResizeHook, SettleTimer, SETTLE_DELAY_MS};
