//! SVG renderer - turns a ring-buffer state into an SVG string.
//!
//! Drawing functions produce `Element` records; `SvgDocument::to_svg` does the
//! string building.

mod document;
mod ring;
mod styles;
mod theme;

pub use document::{escape_xml, DocumentBuilder, Element, Marker, Paint, SvgDocument};
pub use ring::{
    arrow_marker, render_arc_label, render_diagram, render_pointer_arrow, render_ring,
    render_text_band,
};
pub use styles::{ArrowHead, LabelFractions, Labels};
pub use theme::{RingConfig, RingStyle};
