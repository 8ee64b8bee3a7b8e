//! Pagination math
//!
//! Pure filler-height computation that makes the on-screen reflowing
//! layout visually agree with where the print engine cuts pages. No DOM
//! access here; measured offsets come in from the caller (the `PageFlow`
//! binding feeds it host measurements, tests feed it numbers).
//!
//! The DOM protocol this models: every break marker carries a spacer
//! element directly above it, sized to the marker's filler height and
//! hidden in print. Marker offsets are measured at the marker itself, so
//! a measurement includes all upstream spacers plus the marker's own
//! current spacer, which must be subtracted before recomputing.

use serde::{Deserialize, Serialize};

/// Differences at or below this are treated as unchanged layout, so a
/// re-measurement pass can never oscillate over sub-pixel jitter.
pub const FILLER_TOLERANCE_PX: f64 = 1.0;

/// Filler height needed to push content after `offset` to the next page
/// boundary. Zero when the offset already sits exactly on a boundary.
pub fn filler_for(offset: f64, page_height: f64) -> f64 {
    if page_height <= 0.0 {
        return 0.0;
    }
    let space_used = offset.rem_euclid(page_height);
    if space_used > 0.0 {
        page_height - space_used
    } else {
        0.0
    }
}

/// Stateful filler computation across re-measurement passes.
///
/// Holds the filler heights currently applied to the document, one per
/// break marker in flow order. Each `update` pass recomputes them from
/// fresh marker offsets and keeps any previous value that is within
/// [`FILLER_TOLERANCE_PX`] of the recomputed one.
///
/// Markers are processed top-down and each one only ever reads its own
/// remembered spacer; a changed filler shifts the measured offsets of
/// later markers on the *next* pass, never of earlier ones.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct PaginationEstimator {
    page_height: f64,
    fillers: Vec<f64>,
}

impl PaginationEstimator {
    /// Create an estimator for a given page height in CSS pixels
    pub fn new(page_height: f64) -> Self {
        Self {
            page_height,
            fillers: Vec::new(),
        }
    }

    /// Page height this estimator paginates against
    pub fn page_height(&self) -> f64 {
        self.page_height
    }

    /// Adopt a re-probed page height. A change beyond the tolerance
    /// discards remembered fillers; the next pass recomputes from scratch.
    pub fn set_page_height(&mut self, page_height: f64) {
        if (page_height - self.page_height).abs() > FILLER_TOLERANCE_PX {
            self.page_height = page_height;
            self.fillers.clear();
        }
    }

    /// Currently applied filler heights, one per marker
    pub fn fillers(&self) -> &[f64] {
        &self.fillers
    }

    /// Recompute filler heights from measured marker offsets.
    ///
    /// `marker_offsets` are the vertical offsets of each break marker from
    /// the top of the document flow, in flow order, measured against the
    /// currently applied spacers. Returns the new filler heights (also
    /// remembered for the next pass).
    ///
    /// Measurements predate this pass's spacer changes, so each marker's
    /// effective offset folds in the net spacer change of the markers
    /// above it (`upstream_delta`). Downstream offsets shifting is
    /// expected; upstream fillers are never revisited within a pass.
    pub fn update(&mut self, marker_offsets: &[f64]) -> Vec<f64> {
        let mut next = Vec::with_capacity(marker_offsets.len());
        let mut upstream_delta = 0.0;

        for (i, &measured) in marker_offsets.iter().enumerate() {
            // A marker that did not exist last pass has no applied spacer
            let own = self.fillers.get(i).copied().unwrap_or(0.0);
            let raw = (measured - own + upstream_delta).max(0.0);
            let wanted = filler_for(raw, self.page_height);

            let kept = if (wanted - own).abs() <= FILLER_TOLERANCE_PX {
                own
            } else {
                wanted
            };
            upstream_delta += kept - own;
            next.push(kept);
        }

        self.fillers = next;
        self.fillers.clone()
    }

    /// Drop all remembered fillers (content was replaced wholesale)
    pub fn reset(&mut self) {
        self.fillers.clear();
    }
}
