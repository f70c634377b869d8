//! Type definitions for ring diagrams

use serde::{Deserialize, Serialize};

/// A 2D point
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point
    pub fn distance(&self, other: &Point) -> f64 {
        ((other.x - self.x).powi(2) + (other.y - self.y).powi(2)).sqrt()
    }
}

/// Placement and size of the ring on the canvas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RingGeometry {
    pub center: Point,
    #[serde(rename = "outerRadius")]
    pub outer_radius: f64,
    #[serde(rename = "innerRadius")]
    pub inner_radius: f64,
    #[serde(rename = "segmentCount")]
    pub segment_count: usize,
}

impl Default for RingGeometry {
    fn default() -> Self {
        Self {
            center: Point::new(300.0, 300.0),
            outer_radius: 70.0,
            inner_radius: 50.0,
            segment_count: 16,
        }
    }
}

impl RingGeometry {
    /// Radial thickness of the ring
    pub fn thickness(&self) -> f64 {
        self.outer_radius - self.inner_radius
    }
}

/// One ring-buffer state to draw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RingDiagram {
    /// Slot the next read comes from
    pub read_index: usize,
    /// Slot of the last write; the next write goes to `write_index + 1`
    pub write_index: usize,
    /// Letters drawn inside the slots, one per segment starting at slot 0.
    /// `None` draws the ring without a contents band.
    pub contents: Option<String>,
}

impl RingDiagram {
    pub fn new(read_index: usize, write_index: usize) -> Self {
        Self {
            read_index,
            write_index,
            contents: None,
        }
    }

    pub fn with_contents(mut self, contents: impl Into<String>) -> Self {
        self.contents = Some(contents.into());
        self
    }
}

/// A diagram paired with the file it is written to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagramJob {
    pub output: String,
    pub diagram: RingDiagram,
}

/// The three documentation diagrams: partially filled, empty and full.
pub fn standard_jobs() -> Vec<DiagramJob> {
    vec![
        DiagramJob {
            output: "RingBuffer.svg".to_string(),
            diagram: RingDiagram::new(4, 10).with_contents("ABCDEFGHIJK"),
        },
        DiagramJob {
            output: "EmptyRingBuffer.svg".to_string(),
            diagram: RingDiagram::new(2, 1),
        },
        DiagramJob {
            output: "FullRingBuffer.svg".to_string(),
            diagram: RingDiagram::new(2, 0).with_contents("Q CDEFGHIJKLMNOP"),
        },
    ]
}
