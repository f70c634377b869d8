//! ringsvg - Draw ring-buffer diagrams as SVG
//!
//! Renders a 16-slot ring with read and write pointers, optional slot
//! contents and index labels. Used to produce the full, empty and partially
//! filled ring-buffer illustrations for documentation.
//!
//! # Example
//!
//! ```rust
//! use ringsvg::{render_to_svg, RingConfig, RingDiagram};
//!
//! let diagram = RingDiagram::new(4, 10).with_contents("ABCDEFGHIJK");
//! let svg = render_to_svg(&diagram, &RingConfig::default()).unwrap();
//! assert!(svg.starts_with("<svg"));
//! ```

pub mod types;
pub mod geometry;
pub mod parser;
pub mod svg;

use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

pub use parser::{parse_job, parse_jobs};
pub use svg::{RingConfig, RingStyle};
pub use types::*;

/// Render a ring diagram to SVG text.
///
/// Fails when either pointer index is outside the ring.
pub fn render_to_svg(diagram: &RingDiagram, config: &RingConfig) -> Result<String, String> {
    config.validate()?;
    let n = config.geometry.segment_count;
    if diagram.read_index >= n {
        return Err(format!("read index {} is outside a ring of {} segments", diagram.read_index, n));
    }
    if diagram.write_index >= n {
        return Err(format!("write index {} is outside a ring of {} segments", diagram.write_index, n));
    }
    Ok(svg::render_diagram(diagram, config).to_svg())
}

/// Render a ring diagram and write it to `output_path`.
pub fn make_diagram(diagram: &RingDiagram, config: &RingConfig, output_path: &Path) -> Result<(), String> {
    let svg = render_to_svg(diagram, config)?;
    fs::write(output_path, svg)
        .map_err(|e| format!("Failed to write {}: {}", output_path.display(), e))?;
    info!(path = %output_path.display(), "wrote diagram");
    Ok(())
}

/// Run each job, writing its file under `out_dir`. Returns the written paths.
pub fn run_jobs(jobs: &[DiagramJob], config: &RingConfig, out_dir: &Path) -> Result<Vec<PathBuf>, String> {
    fs::create_dir_all(out_dir)
        .map_err(|e| format!("Failed to create {}: {}", out_dir.display(), e))?;
    let mut written = Vec::with_capacity(jobs.len());
    for job in jobs {
        let path = out_dir.join(&job.output);
        make_diagram(&job.diagram, config, &path)?;
        written.push(path);
    }
    Ok(written)
}

/// Write `RingBuffer.svg`, `EmptyRingBuffer.svg` and `FullRingBuffer.svg`.
pub fn make_standard_diagrams(config: &RingConfig, out_dir: &Path) -> Result<Vec<PathBuf>, String> {
    run_jobs(&standard_jobs(), config, out_dir)
}
