use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use serde_json::Value;
use tempfile::TempDir;

const PAGE: &str = "<html><head><title>Demo</title></head><body></body></html>";

fn run(cwd: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_iconset"))
        .current_dir(cwd)
        .env_remove("ICONSET_CONFIG")
        .env_remove("RUST_LOG")
        .args(args)
        .output()
        .unwrap()
}

fn setup() -> TempDir {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("logo.svg"), "<svg/>").unwrap();
    fs::write(tmp.path().join("index.html"), PAGE).unwrap();
    tmp
}

#[test]
fn compact_injection_prints_escaped_tags() {
    let tmp = setup();

    let output = run(tmp.path(), &["inject", "index.html", "logo.svg", "--compact"]);
    assert!(output.status.success());

    let text = String::from_utf8_lossy(&output.stdout);
    assert!(text.starts_with("<html><head><title>Demo</title><link rel=\\\"icon\\\""));
    assert!(text.contains("href=\\\"/logo.svg\\\""));
    assert!(text.trim_end().ends_with("</head><body></body></html>"));
    // Nothing is written without --write.
    assert_eq!(fs::read_to_string(tmp.path().join("index.html")).unwrap(), PAGE);
}

#[test]
fn expanded_injection_uses_marker_comments() {
    let tmp = setup();

    let output = run(tmp.path(), &["inject", "index.html", "logo.svg", "--expanded"]);
    assert!(output.status.success());

    let text = String::from_utf8_lossy(&output.stdout);
    assert!(text.contains("\\n\\n<!-- iconset v"));
    assert!(text.contains("\\n<!-- iconset -->\\n\\t</head>"));
}

#[test]
fn write_flag_rewrites_document() {
    let tmp = setup();

    let output = run(tmp.path(), &["inject", "index.html", "logo.svg", "--write"]);
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).starts_with("INJECTED "));

    let rewritten = fs::read_to_string(tmp.path().join("index.html")).unwrap();
    assert!(rewritten.contains("rel=\\\"manifest\\\""));
    assert!(rewritten.ends_with("</head><body></body></html>"));
}

#[test]
fn document_without_head_is_unchanged() {
    let tmp = setup();
    fs::write(tmp.path().join("frag.html"), "<p>hi</p>").unwrap();

    let output = run(tmp.path(), &["inject", "frag.html", "logo.svg"]);
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "<p>hi</p>\n");
}

#[test]
fn missing_document_is_io_refusal() {
    let tmp = setup();

    let output = run(tmp.path(), &["inject", "absent.html", "logo.svg"]);
    assert_eq!(output.status.code(), Some(2));

    let envelope: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(envelope["refusal"]["code"], "E_IO");
    assert_eq!(envelope["refusal"]["detail"]["operation"], "read");
}

#[test]
fn resolve_broadcasts_single_source() {
    let tmp = TempDir::new().unwrap();

    let output = run(tmp.path(), &["resolve", "a.svg"]);
    assert!(output.status.success());

    let resolved: Value = serde_json::from_slice(&output.stdout).unwrap();
    let map = resolved.as_object().unwrap();
    assert_eq!(map.len(), 6);
    for value in map.values() {
        assert_eq!(value, "a.svg");
    }
}

#[test]
fn resolve_partial_config_fills_with_union() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join("iconset.toml"),
        "[input]\nandroid = \"a.svg\"\nwindows = \"b.png\"\n",
    )
    .unwrap();

    let output = run(tmp.path(), &["resolve"]);
    assert!(output.status.success());

    let resolved: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(resolved["android"], "a.svg");
    assert_eq!(resolved["windows"], "b.png");
    assert_eq!(resolved["favicons"], serde_json::json!(["a.svg", "b.png"]));
    assert_eq!(resolved["appleStartup"], serde_json::json!(["a.svg", "b.png"]));
}

#[test]
fn resolve_without_input_uses_default() {
    let tmp = TempDir::new().unwrap();

    let output = run(tmp.path(), &["resolve"]);
    let resolved: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(resolved["yandex"], "public/favicon.svg");
}
