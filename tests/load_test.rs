//! Integration tests for loading documents from JSON files.

use std::io::Write;

use basichtml::{export_file, load_file, BasicHtml, Error, ExportOptions};
use tempfile::NamedTempFile;

const SAMPLE: &str = r##"{
    "default_font": {"family": "serif", "size": {"points": 11.0}},
    "lists": [{"format": {"style": "decimal"}}],
    "root": {"children": [
        {"node": "block", "runs": [
            {"type": "text", "text": "Title", "format": {"font_size_adjustment": 3}}
        ]},
        {"node": "block", "list": 0, "runs": [{"type": "text", "text": "first"}]},
        {"node": "block", "list": 0, "runs": [
            {"type": "text", "text": "second", "format": {"font_italic": true}}
        ]},
        {"node": "frame", "kind": {"type": "text"}, "children": [
            {"node": "block", "runs": [
                {"type": "object", "object": {"kind": "image", "name": "logo.png"}}
            ]},
            {"node": "block"}
        ]},
        {"node": "block", "format": {"alignment": "right"}, "runs": [
            {"type": "text", "text": "a & b", "format": {"foreground": {"style": "solid_pattern", "color": "#00ff00"}}}
        ]}
    ]}
}"##;

fn sample_file() -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(SAMPLE.as_bytes()).unwrap();
    file
}

#[test]
fn test_load_file_indexes_document() {
    let file = sample_file();
    let doc = load_file(file.path()).unwrap();

    assert_eq!(doc.block_count(), 6);
    assert_eq!(doc.lists().len(), 1);
    assert_eq!(doc.lists()[0].count(), 2);
    assert_eq!(doc.default_font().family, "serif");
}

#[test]
fn test_export_file_attribute_strategy() {
    let file = sample_file();
    let html = export_file(file.path(), &ExportOptions::default()).unwrap();

    assert_eq!(
        html,
        "<p><span style=\" font-size:xx-large;\">Title</span></p>\n\
         <ol><li>first</li>\n\
         <li><span style=\" font-style:italic;\">second</span></li></ol>\n\
         <table>\n<tr>\n<td>\n<p><img src=\"logo.png\" /></p></td></tr></table>\n\
         <p align=\"right\"><span style=\" color:#00ff00;\">a &amp; b</span></p>"
    );
}

#[test]
fn test_export_file_semantic_strategy() {
    let file = sample_file();
    let html = BasicHtml::new().semantic_tags().export_file(file.path()).unwrap();

    assert!(html.starts_with("<h1>Title</h1>\n<ol><li><p>first</p></li>"));
    assert!(html.contains("<li><p><em>second</em></p></li></ol>"));
    assert!(html.ends_with("<p>a &amp; b</p>"));
}

#[test]
fn test_load_file_rejects_malformed_json() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(b"{\"root\": ").unwrap();

    assert!(matches!(load_file(file.path()), Err(Error::Json(_))));
}

#[test]
fn test_load_file_rejects_empty_file() {
    let file = NamedTempFile::new().unwrap();
    assert!(matches!(
        load_file(file.path()),
        Err(Error::InvalidDocument(_))
    ));
}
