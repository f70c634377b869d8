//! Fixed drawing constants for ring diagrams.

/// Arrowhead marker referenced by both pointer arrows
pub struct ArrowHead;

impl ArrowHead {
    pub const ID: &'static str = "arrow";
    pub const WIDTH: f64 = 10.0;
    pub const HEIGHT: f64 = 10.0;
    pub const REF_X: f64 = 0.0;
    pub const REF_Y: f64 = 1.0;
    pub const PATH: &'static str = "M0,0 L0,2 L3,1 z";
}

/// Radial placement of text, as a fraction of ring thickness from the inner edge
pub struct LabelFractions;

impl LabelFractions {
    pub const CONTENTS: f64 = 0.2;
    pub const INDICES: f64 = 1.2;
    pub const POINTER: f64 = 2.1;
    pub const LAST_INDEX: f64 = 1.2;
}

/// Annotation strings
pub struct Labels;

impl Labels {
    pub const NEXT_READ: &'static str = "next read";
    pub const NEXT_WRITE: &'static str = "next write";
    pub const LAST_INDEX: &'static str = "N-1";
    /// Slot numbers with gaps where the pointer labels cross the band
    pub const INDEX_BAND: &'static str = "0123  6789. ...";
}

/// Pulls each band character back from its cell start so the glyph lands mid-cell.
pub fn band_offset(segment_count: usize) -> f64 {
    crate::geometry::segment_width(segment_count) - 0.2
}

/// Position of the "N-1" label, tucked just before the last cell.
pub fn last_index_position(segment_count: usize) -> f64 {
    let n = segment_count as f64;
    (n - 1.0) - 2.2 * std::f64::consts::PI / n
}
