//! Declared dependencies, read from the crate manifest at compile time.

use once_cell::sync::Lazy;

const MANIFEST: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/Cargo.toml"));

static DEPENDENCIES: Lazy<Vec<String>> = Lazy::new(|| parse_dependency_names(MANIFEST));

/// Names under `[dependencies]`, sorted.
pub fn dependency_names() -> &'static [String] {
    &DEPENDENCIES
}

pub fn dependency_count() -> usize {
    DEPENDENCIES.len()
}

fn parse_dependency_names(manifest: &str) -> Vec<String> {
    let table = match manifest.parse::<toml::Table>() {
        Ok(table) => table,
        Err(e) => {
            tracing::warn!(error = %e, "could not parse embedded manifest");
            return Vec::new();
        }
    };

    table
        .get("dependencies")
        .and_then(toml::Value::as_table)
        .map(|deps| deps.keys().cloned().collect())
        .unwrap_or_default()
}
