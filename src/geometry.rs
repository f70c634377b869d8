//! Polar geometry for ring diagrams.
//!
//! Angles are in radians, measured clockwise in SVG screen space (y grows
//! downwards). Segment 0 starts at the top of the ring.

use std::f64::consts::PI;

use crate::types::{Point, RingGeometry};

/// Sweep of the curved part of a pointer arrow
pub const POINTER_SWEEP: f64 = PI / 8.0;

/// How far around the circle a label's guide path runs
const LABEL_GUIDE_SWEEP: f64 = 1.9 * PI;

pub fn polar_to_cartesian(center: Point, radius: f64, angle: f64) -> Point {
    Point {
        x: center.x + radius * angle.cos(),
        y: center.y + radius * angle.sin(),
    }
}

/// Angular width of one segment
pub fn segment_width(segment_count: usize) -> f64 {
    2.0 * PI / segment_count as f64
}

/// Angle where segment `index` starts
pub fn segment_start_angle(index: usize, segment_count: usize) -> f64 {
    index as f64 * segment_width(segment_count) - PI / 2.0
}

/// The four corners of an annular wedge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Wedge {
    pub index: usize,
    pub outer_start: Point,
    pub outer_end: Point,
    pub inner_end: Point,
    pub inner_start: Point,
}

impl Wedge {
    pub fn corners(&self) -> [Point; 4] {
        [self.outer_start, self.outer_end, self.inner_end, self.inner_start]
    }
}

pub fn wedge_corners(ring: &RingGeometry, index: usize) -> Wedge {
    let start = segment_start_angle(index, ring.segment_count);
    let end = start + segment_width(ring.segment_count);
    Wedge {
        index,
        outer_start: polar_to_cartesian(ring.center, ring.outer_radius, start),
        outer_end: polar_to_cartesian(ring.center, ring.outer_radius, end),
        inner_end: polar_to_cartesian(ring.center, ring.inner_radius, end),
        inner_start: polar_to_cartesian(ring.center, ring.inner_radius, start),
    }
}

/// Closed path: outer arc, radial line in, inner arc back, close.
pub fn wedge_path(ring: &RingGeometry, wedge: &Wedge) -> String {
    let r1 = ring.outer_radius;
    let r2 = ring.inner_radius;
    format!(
        "M {} {} A {} {} 0 0 1 {} {} L {} {} A {} {} 0 0 0 {} {} Z",
        wedge.outer_start.x, wedge.outer_start.y,
        r1, r1, wedge.outer_end.x, wedge.outer_end.y,
        wedge.inner_end.x, wedge.inner_end.y,
        r2, r2, wedge.inner_start.x, wedge.inner_start.y
    )
}

/// Segments holding data, from the read slot up to and including the write slot.
///
/// When `write_index + 1 == read_index` the range is empty: that is the
/// empty-buffer state.
pub fn live_segments(read_index: usize, write_index: usize, segment_count: usize) -> Vec<usize> {
    let mut fill_end = write_index + 1;
    if fill_end < read_index {
        fill_end += segment_count;
    }
    (read_index..fill_end).map(|i| i % segment_count).collect()
}

/// Extra radial offset for the "next write" label when it would collide with
/// "next read".
pub fn pointer_nudge(read_index: usize, write_index: usize) -> f64 {
    if write_index + 1 == read_index || write_index + 2 == read_index {
        1.0
    } else {
        0.0
    }
}

/// Mid angle of the cell at fractional `position`
pub fn label_angle(position: f64, segment_count: usize) -> f64 {
    let n = segment_count as f64;
    position * 2.0 * PI / n + PI / n - PI / 2.0
}

/// Radius at `fraction` of the ring thickness, measured outwards from the
/// inner edge. Fractions above 1 land outside the ring.
pub fn label_radius(ring: &RingGeometry, fraction: f64) -> f64 {
    ring.inner_radius + fraction * ring.thickness()
}

/// Guide circle for text placed at `position`, nearly closed so the text runs
/// clockwise from the start point.
pub fn label_arc_path(ring: &RingGeometry, position: f64, fraction: f64) -> String {
    let r = label_radius(ring, fraction);
    let angle = label_angle(position, ring.segment_count);
    let a = polar_to_cartesian(ring.center, r, angle);
    let b = polar_to_cartesian(ring.center, r, angle + LABEL_GUIDE_SWEEP);
    format!("M {} {} A {} {} 0 1 1 {} {} Z", a.x, a.y, r, r, b.x, b.y)
}

/// Coordinates of a pointer arrow at segment `index`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerGeometry {
    /// Radial line start (outermost)
    pub tail: Point,
    /// Radial line end, where the arrowhead sits
    pub head: Point,
    pub arc_radius: f64,
    pub arc_start: Point,
    pub arc_end: Point,
}

pub fn pointer_geometry(ring: &RingGeometry, index: usize) -> PointerGeometry {
    let angle = label_angle(index as f64, ring.segment_count);
    let dr = ring.thickness();
    let near = ring.outer_radius + 0.5 * dr;
    let far = ring.outer_radius + dr;
    let arc_radius = (near + far) / 2.0;
    PointerGeometry {
        tail: polar_to_cartesian(ring.center, far, angle),
        head: polar_to_cartesian(ring.center, near, angle),
        arc_radius,
        arc_start: polar_to_cartesian(ring.center, arc_radius, angle),
        arc_end: polar_to_cartesian(ring.center, arc_radius, angle + POINTER_SWEEP),
    }
}
