//! Test fixture loading and generation

use std::path::PathBuf;

/// Directory holding the JavaScript fixtures
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

/// Content of `tests/fixtures/<name>`
pub fn load_fixture(name: &str) -> String {
    let path = fixtures_dir().join(name);
    std::fs::read_to_string(&path)
        .unwrap_or_else(|err| panic!("failed to read fixture {}: {err}", path.display()))
}

/// A module with `n` distinct `require` calls
pub fn fixture_n_requires(n: usize) -> String {
    (0..n)
        .map(|i| format!("var m{i} = require('./module_{i}');\n"))
        .collect()
}

/// `require` calls nested `depth` functions deep
pub fn fixture_nested_require(depth: usize, name: &str) -> String {
    let open: String = (0..depth).map(|i| format!("function f{i}() {{\n")).collect();
    let close: String = "}\n".repeat(depth);
    format!("{open}require('{name}');\n{close}")
}
