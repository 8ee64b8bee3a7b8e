// Pagination estimator: filler stability across re-measurement passes,
// boundary behavior, and the fixed-conversion fallback.

use resume_editor_wasm::layout::{
    fallback_page_height_px, filler_for, measure_page_height_px, PaginationEstimator,
};

const PAGE: f64 = 1122.5;

/// Simulate the host applying fillers and re-measuring: each marker's new
/// offset is its raw offset plus every spacer at or above it.
fn remeasure(raw_offsets: &[f64], fillers: &[f64]) -> Vec<f64> {
    let mut measured = Vec::with_capacity(raw_offsets.len());
    let mut above = 0.0;
    for (i, &raw) in raw_offsets.iter().enumerate() {
        let own = fillers.get(i).copied().unwrap_or(0.0);
        measured.push(raw + above + own);
        above += own;
    }
    measured
}

#[test]
fn repeated_passes_are_stable_within_tolerance() {
    let raw = [483.2, 1210.7, 2905.4];
    let mut est = PaginationEstimator::new(PAGE);

    let first = est.update(&raw);
    let mut offsets = remeasure(&raw, &first);

    // Five settle passes over unchanged content: nothing may drift
    for _ in 0..5 {
        let next = est.update(&offsets);
        assert_eq!(next, first);
        offsets = remeasure(&raw, &next);
    }
}

#[test]
fn settled_markers_sit_on_page_boundaries() {
    let raw = [483.2, 1210.7];
    let mut est = PaginationEstimator::new(PAGE);

    let fillers = est.update(&raw);
    let settled = remeasure(&raw, &fillers);

    for offset in settled {
        let remainder = offset.rem_euclid(PAGE);
        assert!(
            remainder < 1e-9 || (PAGE - remainder) < 1e-9,
            "marker settled off-boundary at {} (remainder {})",
            offset,
            remainder
        );
    }
}

#[test]
fn marker_at_document_top_needs_no_filler() {
    let mut est = PaginationEstimator::new(PAGE);
    let fillers = est.update(&[0.0]);
    assert_eq!(fillers, vec![0.0]);
}

#[test]
fn marker_on_exact_boundary_needs_no_filler() {
    assert_eq!(filler_for(PAGE, PAGE), 0.0);
    assert_eq!(filler_for(2.0 * PAGE, PAGE), 0.0);

    let mut est = PaginationEstimator::new(PAGE);
    let fillers = est.update(&[PAGE]);
    assert_eq!(fillers, vec![0.0]);
}

#[test]
fn subpixel_jitter_never_retriggers() {
    let mut est = PaginationEstimator::new(PAGE);
    let first = est.update(&[400.0]);
    let settled = 400.0 + first[0];

    for jitter in [-0.9, -0.3, 0.0, 0.4, 1.0] {
        let next = est.update(&[settled + jitter]);
        assert_eq!(next, first, "jitter {} changed the filler", jitter);
    }
}

#[test]
fn growing_content_shifts_downstream_markers_only() {
    let raw = [400.0, 1500.0];
    let mut est = PaginationEstimator::new(PAGE);
    let first = est.update(&raw);

    // Content between the markers grows by 200px; marker 0 is untouched
    let grown = [400.0, 1700.0];
    let measured = remeasure(&grown, &first);
    let next = est.update(&measured);

    assert_eq!(next[0], first[0]);
    assert_ne!(next[1], first[1]);
}

#[test]
fn fallback_page_height_is_a4_at_96dpi() {
    let expected = 297.0 * 96.0 / 25.4;
    assert!((fallback_page_height_px() - expected).abs() < 1e-9);

    // Without a browser the probe cannot run; measurement must equal the
    // fallback rather than failing
    assert_eq!(measure_page_height_px(), fallback_page_height_px());
}

#[test]
fn degenerate_page_height_yields_no_fillers() {
    let mut est = PaginationEstimator::new(0.0);
    assert_eq!(est.update(&[100.0, 900.0]), vec![0.0, 0.0]);
}
