//! Ring diagram drawing.
//!
//! Draw order: ring wedges, read pointer and its label, write pointer and
//! its label, contents band, index band, "N-1" label.

use tracing::debug;

use super::document::{DocumentBuilder, Element, Marker, Paint, SvgDocument};
use super::styles::{band_offset, last_index_position, ArrowHead, LabelFractions, Labels};
use super::theme::RingConfig;
use crate::geometry::{
    label_arc_path, live_segments, pointer_geometry, pointer_nudge, wedge_corners, wedge_path,
};
use crate::types::RingDiagram;

/// One wedge per segment, filled with the live or dead opacity.
pub fn render_ring(config: &RingConfig, live: &[usize]) -> Element {
    let ring = &config.geometry;
    let style = &config.style;

    let wedges = (0..ring.segment_count)
        .map(|i| {
            let is_live = live.contains(&i);
            let opacity = if is_live { style.live_opacity } else { style.dead_opacity };
            let wedge = wedge_corners(ring, i);
            Element::Path {
                id: None,
                class: Some(if is_live { "wedge live" } else { "wedge dead" }.to_string()),
                d: wedge_path(ring, &wedge),
                paint: Paint::stroke(&style.stroke_color, style.stroke_width)
                    .fill(&style.stroke_color, opacity),
                marker_end: None,
            }
        })
        .collect();

    Element::group("ring", wedges)
}

/// Register the shared arrowhead and return its id.
pub fn arrow_marker(doc: &mut DocumentBuilder, config: &RingConfig) -> String {
    doc.marker(Marker {
        id: ArrowHead::ID.to_string(),
        width: ArrowHead::WIDTH,
        height: ArrowHead::HEIGHT,
        ref_x: ArrowHead::REF_X,
        ref_y: ArrowHead::REF_Y,
        path: ArrowHead::PATH.to_string(),
        fill: config.style.arrow_color.clone(),
    })
}

/// Radial arrow into the ring plus a short clockwise arc, both arrow-tipped.
pub fn render_pointer_arrow(
    doc: &mut DocumentBuilder,
    config: &RingConfig,
    segment_index: usize,
    name: &str,
) -> Element {
    let marker = arrow_marker(doc, config);
    let style = &config.style;
    let p = pointer_geometry(&config.geometry, segment_index);

    let line = Element::Line {
        start: p.tail,
        end: p.head,
        paint: Paint::stroke(&style.arrow_color, style.stroke_width),
        marker_end: Some(marker.clone()),
    };
    let arc = Element::Path {
        id: None,
        class: None,
        d: format!(
            "M {} {} A {} {} 0 0 1 {} {}",
            p.arc_start.x, p.arc_start.y, p.arc_radius, p.arc_radius, p.arc_end.x, p.arc_end.y
        ),
        paint: Paint::stroke(&style.arrow_color, style.stroke_width).fill_opacity(0.0),
        marker_end: Some(marker),
    };

    Element::Group {
        class: "pointer".to_string(),
        id: Some(format!("{}-pointer", name)),
        children: vec![line, arc],
    }
}

/// Text running clockwise along a circle of radius `inner + fraction * thickness`,
/// starting at the middle of cell `position`.
pub fn render_arc_label(
    doc: &mut DocumentBuilder,
    config: &RingConfig,
    text: &str,
    position: f64,
    fraction: f64,
) -> Element {
    let id = doc.fresh_id("arc");
    let guide = Element::Path {
        id: Some(id.clone()),
        class: None,
        d: label_arc_path(&config.geometry, position, fraction),
        paint: Paint::stroke(&config.style.stroke_color, 0.0).fill_opacity(0.0),
        marker_end: None,
    };
    let text = Element::TextPath {
        href: id,
        text: text.to_string(),
        font_family: config.style.font_family.clone(),
    };
    Element::group("label", vec![guide, text])
}

/// One character per segment, starting at segment 0.
pub fn render_text_band(
    doc: &mut DocumentBuilder,
    config: &RingConfig,
    fraction: f64,
    text: &str,
    class: &str,
) -> Element {
    let offset = band_offset(config.geometry.segment_count);
    let labels = text
        .chars()
        .enumerate()
        .map(|(i, ch)| {
            render_arc_label(doc, config, &ch.to_string(), i as f64 - offset, fraction)
        })
        .collect();
    Element::group(&format!("band {}", class), labels)
}

/// Assemble the complete drawing for one ring-buffer state.
pub fn render_diagram(diagram: &RingDiagram, config: &RingConfig) -> SvgDocument {
    let n = config.geometry.segment_count;
    let read = diagram.read_index;
    let next_write = diagram.write_index + 1;

    let live = live_segments(read, diagram.write_index, n);
    debug!(read, write = diagram.write_index, live = live.len(), "rendering ring diagram");

    let (width, height) = config.canvas_size();
    let mut doc = DocumentBuilder::new(width, height);

    doc.push(render_ring(config, &live));

    let read_arrow = render_pointer_arrow(&mut doc, config, read, "read");
    doc.push(read_arrow);
    let read_label =
        render_arc_label(&mut doc, config, Labels::NEXT_READ, read as f64, LabelFractions::POINTER);
    doc.push(read_label);

    let nudge = pointer_nudge(read, diagram.write_index);
    let write_arrow = render_pointer_arrow(&mut doc, config, next_write % n, "write");
    doc.push(write_arrow);
    let write_label = render_arc_label(
        &mut doc,
        config,
        Labels::NEXT_WRITE,
        next_write as f64,
        LabelFractions::POINTER + nudge,
    );
    doc.push(write_label);

    if let Some(ref contents) = diagram.contents {
        let band = render_text_band(&mut doc, config, LabelFractions::CONTENTS, contents, "contents");
        doc.push(band);
    }

    let indices = render_text_band(
        &mut doc,
        config,
        LabelFractions::INDICES,
        Labels::INDEX_BAND,
        "indices",
    );
    doc.push(indices);

    let last = render_arc_label(
        &mut doc,
        config,
        Labels::LAST_INDEX,
        last_index_position(n),
        LabelFractions::LAST_INDEX,
    );
    doc.push(last);

    doc.finish()
}
