//! Integration tests for the generated diagrams
//!
//! Each standard diagram gets its own set of structural checks, parsed back
//! with roxmltree. Run all tests with: cargo test

use std::fs;

use ringsvg::{
    make_diagram, make_standard_diagrams, render_to_svg, run_jobs, parse_jobs, standard_jobs,
    RingConfig, RingDiagram,
};

/// Facts about one rendered SVG
struct Summary {
    wedges: usize,
    live_wedges: Vec<usize>,
    pointers: usize,
    markers: usize,
    contents_band: Option<String>,
    index_band: String,
    labels: Vec<String>,
}

fn has_class(node: &roxmltree::Node, class: &str) -> bool {
    node.attribute("class")
        .map(|c| c.split_whitespace().any(|part| part == class))
        .unwrap_or(false)
}

fn band_text(doc: &roxmltree::Document, class: &str) -> Option<String> {
    doc.descendants()
        .find(|n| n.has_tag_name("g") && has_class(n, "band") && has_class(n, class))
        .map(|band| {
            band.descendants()
                .filter(|n| n.has_tag_name("textPath"))
                .map(|n| n.text().unwrap_or(""))
                .collect()
        })
}

fn summarize(svg: &str) -> Summary {
    let doc = roxmltree::Document::parse(svg)
        .unwrap_or_else(|e| panic!("Generated SVG is not well-formed: {}", e));

    let ring = doc
        .descendants()
        .find(|n| n.has_tag_name("g") && has_class(n, "ring"))
        .expect("missing ring group");
    let wedges: Vec<_> = ring.children().filter(|n| n.has_tag_name("path")).collect();
    let live_wedges = wedges
        .iter()
        .enumerate()
        .filter(|(_, n)| has_class(n, "live"))
        .map(|(i, _)| i)
        .collect();

    let pointers = doc
        .descendants()
        .filter(|n| n.has_tag_name("g") && has_class(n, "pointer"))
        .count();
    let markers = doc.descendants().filter(|n| n.has_tag_name("marker")).count();

    let labels = doc
        .root_element()
        .children()
        .filter(|n| n.has_tag_name("g") && has_class(n, "label"))
        .flat_map(|g| g.descendants().filter(|n| n.has_tag_name("textPath")))
        .map(|n| n.text().unwrap_or("").to_string())
        .collect();

    Summary {
        wedges: wedges.len(),
        live_wedges,
        pointers,
        markers,
        contents_band: band_text(&doc, "contents"),
        index_band: band_text(&doc, "indices").expect("missing index band"),
        labels,
    }
}

/// Every textPath must point at a path that exists in the document
fn assert_text_paths_resolve(svg: &str) {
    let doc = roxmltree::Document::parse(svg).unwrap();
    let xlink = "http://www.w3.org/1999/xlink";
    for tp in doc.descendants().filter(|n| n.has_tag_name("textPath")) {
        let href = tp.attribute((xlink, "href")).expect("textPath without href");
        let id = href.trim_start_matches('#');
        assert!(
            doc.descendants().any(|n| n.has_tag_name("path") && n.attribute("id") == Some(id)),
            "dangling textPath reference {}",
            href
        );
    }
}

fn standard_svg(index: usize) -> String {
    let job = &standard_jobs()[index];
    render_to_svg(&job.diagram, &RingConfig::default()).unwrap()
}

macro_rules! diagram_tests {
    ($name:ident, $index:expr, live: $live:expr, contents: $contents:expr) => {
        paste::paste! {
            #[test]
            fn [<$name _has_ring_and_two_pointers>]() {
                let s = summarize(&standard_svg($index));
                assert_eq!(s.wedges, 16);
                assert_eq!(s.pointers, 2);
                assert_eq!(s.markers, 1);
            }

            #[test]
            fn [<$name _live_segments>]() {
                let s = summarize(&standard_svg($index));
                let mut expected: Vec<usize> = $live;
                expected.sort();
                assert_eq!(s.live_wedges, expected);
            }

            #[test]
            fn [<$name _bands_and_labels>]() {
                let s = summarize(&standard_svg($index));
                let contents: Option<&str> = $contents;
                assert_eq!(s.contents_band.as_deref(), contents);
                assert_eq!(s.index_band, "0123  6789. ...");
                assert_eq!(s.labels, ["next read", "next write", "N-1"]);
            }

            #[test]
            fn [<$name _text_paths_resolve>]() {
                assert_text_paths_resolve(&standard_svg($index));
            }

            #[test]
            fn [<$name _is_deterministic>]() {
                assert_eq!(standard_svg($index), standard_svg($index));
            }
        }
    };
}

diagram_tests!(partial, 0, live: (4..=10).collect(), contents: Some("ABCDEFGHIJK"));
diagram_tests!(empty, 1, live: Vec::new(), contents: None);
diagram_tests!(full, 2, live: (0..16).filter(|i| *i != 1).collect(), contents: Some("Q CDEFGHIJKLMNOP"));

#[test]
fn standard_diagrams_are_written_to_disk() {
    let dir = tempfile::tempdir().unwrap();
    let written = make_standard_diagrams(&RingConfig::default(), dir.path()).unwrap();
    assert_eq!(written.len(), 3);
    for (path, job) in written.iter().zip(standard_jobs()) {
        assert_eq!(path.file_name().unwrap().to_str().unwrap(), job.output);
        let content = fs::read_to_string(path).unwrap();
        assert!(!content.is_empty());
        assert_eq!(content, render_to_svg(&job.diagram, &RingConfig::default()).unwrap());
    }
}

#[test]
fn rewriting_same_file_is_byte_identical() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("RingBuffer.svg");
    let diagram = RingDiagram::new(4, 10).with_contents("ABCDEFGHIJK");
    make_diagram(&diagram, &RingConfig::default(), &path).unwrap();
    let first = fs::read(&path).unwrap();
    make_diagram(&diagram, &RingConfig::default(), &path).unwrap();
    assert_eq!(first, fs::read(&path).unwrap());
}

#[test]
fn out_dir_is_created() {
    let dir = tempfile::tempdir().unwrap();
    let nested = dir.path().join("docs").join("img");
    let jobs = parse_jobs("Half.svg read=0 write=7 contents=\"ABCDEFGH\"").unwrap();
    let written = run_jobs(&jobs, &RingConfig::default(), &nested).unwrap();
    assert!(written[0].exists());
    let s = summarize(&fs::read_to_string(&written[0]).unwrap());
    assert_eq!(s.live_wedges, (0..8).collect::<Vec<_>>());
}

#[test]
fn write_failure_is_reported_with_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("x.svg");
    let err = make_diagram(&RingDiagram::new(0, 0), &RingConfig::default(), &path).unwrap_err();
    assert!(err.contains("x.svg"), "{}", err);
}

#[test]
fn out_of_range_pointer_is_rejected() {
    let err = render_to_svg(&RingDiagram::new(16, 0), &RingConfig::default()).unwrap_err();
    assert!(err.contains("read index 16"), "{}", err);
    let err = render_to_svg(&RingDiagram::new(0, 20), &RingConfig::default()).unwrap_err();
    assert!(err.contains("write index 20"), "{}", err);
}

#[test]
fn custom_config_changes_ring() {
    let config = RingConfig::from_json(
        r##"{"geometry": {"segmentCount": 8, "center": {"x": 100, "y": 100}}, "style": {"strokeColor": "#123456"}}"##,
    )
    .unwrap();
    let svg = render_to_svg(&RingDiagram::new(1, 3), &config).unwrap();
    assert!(svg.contains(r#"viewBox="0 0 200 200""#));
    assert!(svg.contains("#123456"));
    let s = summarize(&svg);
    assert_eq!(s.wedges, 8);
    assert_eq!(s.live_wedges, vec![1, 2, 3]);
}
