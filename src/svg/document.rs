//! SVG document builder.
//!
//! Drawing code pushes immutable `Element` records into a `DocumentBuilder`;
//! `finish()` freezes them into an `SvgDocument`, and `to_svg()` is the only
//! place markup is produced. Element ids come from a counter, so the same
//! sequence of pushes always yields the same bytes.

use crate::types::Point;

/// A reusable marker definition, placed in `<defs>`.
#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    pub id: String,
    pub width: f64,
    pub height: f64,
    pub ref_x: f64,
    pub ref_y: f64,
    pub path: String,
    pub fill: String,
}

/// Stroke and fill shared by paths and lines
#[derive(Debug, Clone, PartialEq)]
pub struct Paint {
    pub stroke: String,
    pub stroke_width: f64,
    pub fill: Option<String>,
    pub fill_opacity: Option<f64>,
}

impl Paint {
    pub fn stroke(color: &str, width: f64) -> Self {
        Self {
            stroke: color.to_string(),
            stroke_width: width,
            fill: None,
            fill_opacity: None,
        }
    }

    pub fn fill(mut self, color: &str, opacity: f64) -> Self {
        self.fill = Some(color.to_string());
        self.fill_opacity = Some(opacity);
        self
    }

    pub fn fill_opacity(mut self, opacity: f64) -> Self {
        self.fill_opacity = Some(opacity);
        self
    }
}

/// One drawing primitive.
#[derive(Debug, Clone, PartialEq)]
pub enum Element {
    Path {
        id: Option<String>,
        class: Option<String>,
        d: String,
        paint: Paint,
        /// Marker id placed at the path end
        marker_end: Option<String>,
    },
    Line {
        start: Point,
        end: Point,
        paint: Paint,
        marker_end: Option<String>,
    },
    /// Text laid along the path with id `href`
    TextPath {
        href: String,
        text: String,
        font_family: String,
    },
    Group {
        class: String,
        id: Option<String>,
        children: Vec<Element>,
    },
}

impl Element {
    pub fn group(class: &str, children: Vec<Element>) -> Self {
        Element::Group {
            class: class.to_string(),
            id: None,
            children,
        }
    }

    fn write(&self, out: &mut Vec<String>, depth: usize) {
        let indent = "  ".repeat(depth);
        match self {
            Element::Path { id, class, d, paint, marker_end } => {
                let mut attrs = String::new();
                if let Some(id) = id {
                    attrs.push_str(&format!(r#" id="{}""#, escape_xml(id)));
                }
                if let Some(class) = class {
                    attrs.push_str(&format!(r#" class="{}""#, escape_xml(class)));
                }
                out.push(format!(
                    r#"{}<path{} d="{}"{}{} />"#,
                    indent,
                    attrs,
                    d,
                    paint_attrs(paint),
                    marker_attr(marker_end)
                ));
            }
            Element::Line { start, end, paint, marker_end } => {
                out.push(format!(
                    r#"{}<line x1="{}" y1="{}" x2="{}" y2="{}"{}{} />"#,
                    indent,
                    start.x,
                    start.y,
                    end.x,
                    end.y,
                    paint_attrs(paint),
                    marker_attr(marker_end)
                ));
            }
            Element::TextPath { href, text, font_family } => {
                out.push(format!(
                    r##"{}<text><textPath xlink:href="#{}" font-family="{}" method="align" spacing="exact">{}</textPath></text>"##,
                    indent,
                    escape_xml(href),
                    escape_xml(font_family),
                    escape_xml(text)
                ));
            }
            Element::Group { class, id, children } => {
                let id_attr = id
                    .as_ref()
                    .map(|id| format!(r#" id="{}""#, escape_xml(id)))
                    .unwrap_or_default();
                out.push(format!(r#"{}<g class="{}"{}>"#, indent, escape_xml(class), id_attr));
                for child in children {
                    child.write(out, depth + 1);
                }
                out.push(format!("{}</g>", indent));
            }
        }
    }
}

fn paint_attrs(paint: &Paint) -> String {
    let mut s = format!(r#" stroke="{}" stroke-width="{}""#, paint.stroke, paint.stroke_width);
    if let Some(ref fill) = paint.fill {
        s.push_str(&format!(r#" fill="{}""#, fill));
    }
    if let Some(opacity) = paint.fill_opacity {
        s.push_str(&format!(r#" fill-opacity="{}""#, opacity));
    }
    s
}

fn marker_attr(marker_end: &Option<String>) -> String {
    match marker_end {
        Some(id) => format!(r#" marker-end="url(#{})""#, id),
        None => String::new(),
    }
}

/// Accumulates markers and elements in drawing order.
#[derive(Debug, Default)]
pub struct DocumentBuilder {
    width: f64,
    height: f64,
    markers: Vec<Marker>,
    elements: Vec<Element>,
    next_id: usize,
}

impl DocumentBuilder {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            ..Default::default()
        }
    }

    /// Register a marker; registering the same id twice keeps the first.
    pub fn marker(&mut self, marker: Marker) -> String {
        let id = marker.id.clone();
        if !self.markers.iter().any(|m| m.id == id) {
            self.markers.push(marker);
        }
        id
    }

    /// A document-unique id with the given prefix
    pub fn fresh_id(&mut self, prefix: &str) -> String {
        self.next_id += 1;
        format!("{}{}", prefix, self.next_id)
    }

    pub fn push(&mut self, element: Element) {
        self.elements.push(element);
    }

    pub fn finish(self) -> SvgDocument {
        SvgDocument {
            width: self.width,
            height: self.height,
            markers: self.markers,
            elements: self.elements,
        }
    }
}

/// A finished drawing.
#[derive(Debug, Clone, PartialEq)]
pub struct SvgDocument {
    pub width: f64,
    pub height: f64,
    pub markers: Vec<Marker>,
    pub elements: Vec<Element>,
}

impl SvgDocument {
    pub fn to_svg(&self) -> String {
        let mut parts: Vec<String> = Vec::new();

        parts.push(format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" xmlns:xlink="http://www.w3.org/1999/xlink" version="1.1" viewBox="0 0 {w} {h}" width="{w}" height="{h}">"#,
            w = self.width,
            h = self.height
        ));

        parts.push("<defs>".to_string());
        for m in &self.markers {
            parts.push(format!(
                r#"  <marker id="{}" markerWidth="{}" markerHeight="{}" refX="{}" refY="{}" orient="auto" markerUnits="strokeWidth">"#,
                escape_xml(&m.id),
                m.width,
                m.height,
                m.ref_x,
                m.ref_y
            ));
            parts.push(format!(r#"    <path d="{}" fill="{}" />"#, m.path, m.fill));
            parts.push("  </marker>".to_string());
        }
        parts.push("</defs>".to_string());

        for element in &self.elements {
            element.write(&mut parts, 0);
        }

        parts.push("</svg>".to_string());
        parts.join("\n")
    }
}

/// Escape special XML characters in text content
pub fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
