//! Integration tests for the manifest-driven flow behind the CLI commands.
//!
//! These tests exercise the library functions that back each command,
//! using the public API from the featgate crate.

use featgate::config::{load_document, ConfigError, Manifest};
use featgate::output::json::JsonRenderer;
use featgate::output::terminal::TerminalRenderer;
use featgate::output::OutputRenderer;
use featgate::Env;
use serde_json::{json, Value};

const MANIFEST: &str = r#"
features = [
  "widgets",
  { key = "existing", description = "a feature" },
]
"#;

fn write(dir: &tempfile::TempDir, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, content).unwrap();
    path
}

// ---------------------------------------------------------------------------
// resolve
// ---------------------------------------------------------------------------

#[test]
fn resolve_manifest_against_json_document() {
    let dir = tempfile::tempdir().unwrap();
    let manifest_path = write(&dir, "featgate.toml", MANIFEST);
    let doc_path = write(&dir, "app.json", r#"{"features": {"existing": true}, "port": 3000}"#);

    let manifest = Manifest::load(&manifest_path).unwrap();
    let transformer = manifest.transformer(manifest.options()).unwrap();
    let document = load_document(&doc_path).unwrap();
    let env = Env::from_vars([("CONFIG_FEATURES_WIDGETS", "true")]);

    let out = transformer.transform(&document, &env).unwrap();
    assert_eq!(
        Value::Object(out.into_config()),
        json!({ "features": { "existing": true, "widgets": true }, "port": 3000 })
    );
}

#[test]
fn resolve_manifest_against_toml_document_with_custom_key() {
    let dir = tempfile::tempdir().unwrap();
    let manifest_path = write(
        &dir,
        "featgate.toml",
        "config_key = \"flags\"\nfeatures = [\"beta\"]\n",
    );
    let doc_path = write(&dir, "app.toml", "[flags]\nbeta = true\n");

    let manifest = Manifest::load(&manifest_path).unwrap();
    let transformer = manifest.transformer(manifest.options()).unwrap();
    let out = transformer
        .transform(&load_document(&doc_path).unwrap(), &Env::empty())
        .unwrap();
    assert_eq!(out.config()["flags"]["beta"], json!(true));
    assert_eq!(
        transformer.registry().get("beta").unwrap().env_key,
        "CONFIG_FLAGS_BETA"
    );
}

#[test]
fn manifest_can_disable_validation() {
    let dir = tempfile::tempdir().unwrap();
    let manifest_path = write(&dir, "featgate.toml", "validate = false\nfeatures = [\"a\"]\n");
    let doc_path = write(&dir, "app.json", r#"{"features": {"a": "later", "b": 1}}"#);

    let manifest = Manifest::load(&manifest_path).unwrap();
    let transformer = manifest.transformer(manifest.options()).unwrap();
    let out = transformer
        .transform(&load_document(&doc_path).unwrap(), &Env::empty())
        .unwrap();
    assert_eq!(out.config()["features"], json!({ "a": "later", "b": 1 }));
}

#[test]
fn duplicate_manifest_entries_are_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = write(&dir, "featgate.toml", "features = [\"a\", { key = \"a\" }]\n");
    let manifest = Manifest::load(&path).unwrap();
    let err = manifest.transformer(manifest.options()).unwrap_err();
    assert!(err.to_string().contains("previously defined"));
}

#[test]
fn missing_document_is_a_read_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_document(&dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, ConfigError::ReadFile { .. }));
}

// ---------------------------------------------------------------------------
// list
// ---------------------------------------------------------------------------

#[test]
fn list_renders_resolved_features() {
    let dir = tempfile::tempdir().unwrap();
    let manifest = Manifest::load(&write(&dir, "featgate.toml", MANIFEST)).unwrap();
    let transformer = manifest.transformer(manifest.options()).unwrap();
    let env = Env::from_vars([("CONFIG_FEATURES_EXISTING", "true")]);
    let out = transformer.transform(&serde_json::Map::new(), &env).unwrap();

    let json_out: Value =
        serde_json::from_str(&JsonRenderer.render(out.features().describe())).unwrap();
    assert_eq!(json_out["summary"]["enabled"], 1);
    assert_eq!(json_out["summary"]["disabled"], 1);
    assert_eq!(json_out["features"][0]["key"], "existing");
    assert_eq!(json_out["features"][0]["value"], true);

    let terminal_out = TerminalRenderer.render(out.features().describe());
    assert!(terminal_out.contains("a feature"));
    assert!(terminal_out.contains("CONFIG_FEATURES_WIDGETS"));
}

// ---------------------------------------------------------------------------
// env
// ---------------------------------------------------------------------------

#[test]
fn env_lists_override_variables_in_key_order() {
    let manifest: Manifest = toml::from_str(MANIFEST).unwrap();
    let transformer = manifest
        .transformer(manifest.options_with(Some("app"), false))
        .unwrap();
    let names: Vec<_> = transformer
        .registry()
        .features()
        .map(|f| f.env_key.as_str())
        .collect();
    assert_eq!(names, vec!["CONFIG_APP_EXISTING", "CONFIG_APP_WIDGETS"]);
}
