//! Source hygiene for the `roomplan` crate.
//!
//! Scans `src/` (production files only, `*_test.rs` excluded) for patterns
//! that crash the engine mid-gesture, swallow errors, or paper over float
//! comparisons. Budgets only ever go down.

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

// Crashes.
const MAX_UNWRAP: usize = 0;
const MAX_EXPECT: usize = 0;
const MAX_PANIC: usize = 0;
const MAX_UNREACHABLE: usize = 0;
const MAX_TODO: usize = 0;
const MAX_UNIMPLEMENTED: usize = 0;

// Swallowed errors. The one `.ok()` is `config::read_var`.
const MAX_SILENT_DISCARD: usize = 0;
const MAX_DOT_OK: usize = 1;

// Geometry. Exact float equality is allowed only for change detection
// (`patch_between`, feature drag/resize, `clamp_feature`).
const MAX_ALLOW_FLOAT_CMP: usize = 4;
const MAX_LOSSY_CAST: usize = 0;

const MAX_ALLOW_DEAD_CODE: usize = 0;

/// Files that are crate roots rather than modules.
const CRATE_ROOTS: [&str; 2] = ["lib.rs", "main.rs"];

struct SourceFile {
    name: String,
    content: String,
}

fn production_files() -> Vec<SourceFile> {
    let Ok(entries) = fs::read_dir(Path::new("src")) else {
        return Vec::new();
    };
    let mut files: Vec<SourceFile> = entries
        .flatten()
        .map(|e| e.path())
        .filter(|p| p.extension().is_some_and(|e| e == "rs"))
        .filter_map(|p| {
            let name = p.file_name()?.to_string_lossy().to_string();
            if name.ends_with("_test.rs") {
                return None;
            }
            let content = fs::read_to_string(&p).ok()?;
            Some(SourceFile { name, content })
        })
        .collect();
    files.sort_by(|a, b| a.name.cmp(&b.name));
    files
}

/// Lines matching `pred`, as `file:line` locations.
fn hits(files: &[SourceFile], pred: impl Fn(&str) -> bool) -> Vec<String> {
    let mut found = Vec::new();
    for f in files {
        for (i, line) in f.content.lines().enumerate() {
            if pred(line) {
                found.push(format!("{}:{}", f.name, i + 1));
            }
        }
    }
    found
}

fn assert_budget(what: &str, found: &[String], max: usize) {
    assert!(
        found.len() <= max,
        "{what}: found {}, budget {max}\n  {}",
        found.len(),
        found.join("\n  ")
    );
}

fn contains(pattern: &'static str) -> impl Fn(&str) -> bool {
    move |line| line.contains(pattern)
}

// =============================================================
// Crashes
// =============================================================

#[test]
fn no_unwrap() {
    assert_budget(".unwrap()", &hits(&production_files(), contains(".unwrap()")), MAX_UNWRAP);
}

#[test]
fn no_expect() {
    assert_budget(".expect(", &hits(&production_files(), contains(".expect(")), MAX_EXPECT);
}

#[test]
fn no_panic() {
    assert_budget("panic!", &hits(&production_files(), contains("panic!(")), MAX_PANIC);
}

#[test]
fn no_unreachable() {
    assert_budget("unreachable!", &hits(&production_files(), contains("unreachable!(")), MAX_UNREACHABLE);
}

#[test]
fn no_todo_or_unimplemented() {
    let files = production_files();
    assert_budget("todo!", &hits(&files, contains("todo!(")), MAX_TODO);
    assert_budget("unimplemented!", &hits(&files, contains("unimplemented!(")), MAX_UNIMPLEMENTED);
}

// =============================================================
// Swallowed errors
// =============================================================

#[test]
fn silent_discard_budget() {
    assert_budget("let _ =", &hits(&production_files(), contains("let _ =")), MAX_SILENT_DISCARD);
}

#[test]
fn dot_ok_budget() {
    assert_budget(".ok()", &hits(&production_files(), contains(".ok()")), MAX_DOT_OK);
}

// =============================================================
// Geometry
// =============================================================

#[test]
fn float_cmp_allow_budget() {
    let found = hits(&production_files(), contains("allow(clippy::float_cmp)"));
    assert_budget("#[allow(clippy::float_cmp)]", &found, MAX_ALLOW_FLOAT_CMP);
}

#[test]
fn no_lossy_numeric_casts() {
    const TARGETS: [&str; 8] = ["f32", "f64", "usize", "isize", "i32", "i64", "u32", "u64"];
    let found = hits(&production_files(), |line| {
        let code = line.split("//").next().unwrap_or_default();
        TARGETS.iter().any(|t| {
            code.match_indices(&format!(" as {t}"))
                .any(|(i, m)| !code[i + m.len()..].starts_with(|c: char| c.is_alphanumeric() || c == '_'))
        })
    });
    assert_budget("numeric `as` cast", &found, MAX_LOSSY_CAST);
}

// =============================================================
// Structure
// =============================================================

#[test]
fn allow_dead_code_budget() {
    let found = hits(&production_files(), contains("#[allow(dead_code)]"));
    assert_budget("#[allow(dead_code)]", &found, MAX_ALLOW_DEAD_CODE);
}

#[test]
fn every_module_is_declared_in_lib() {
    let files = production_files();
    let lib = files.iter().find(|f| f.name == "lib.rs").map(|f| f.content.as_str()).unwrap_or_default();
    let declared: BTreeSet<&str> = lib
        .lines()
        .filter_map(|l| l.trim().strip_prefix("pub mod ")?.strip_suffix(';'))
        .collect();

    let missing: Vec<String> = files
        .iter()
        .filter(|f| !CRATE_ROOTS.contains(&f.name.as_str()))
        .filter_map(|f| f.name.strip_suffix(".rs"))
        .filter(|m| !declared.contains(m))
        .map(str::to_string)
        .collect();
    assert!(missing.is_empty(), "modules not declared in lib.rs: {missing:?}");
}

#[test]
fn every_test_file_is_wired_to_its_module() {
    let Ok(entries) = fs::read_dir(Path::new("src")) else {
        return;
    };
    let files = production_files();
    let unwired: Vec<String> = entries
        .flatten()
        .filter_map(|e| e.file_name().to_str().map(str::to_string))
        .filter_map(|name| {
            let module = name.strip_suffix("_test.rs")?;
            let owner = files.iter().find(|f| f.name == format!("{module}.rs"));
            let wired = owner.is_some_and(|f| f.content.contains(&format!("#[path = \"{name}\"]")));
            (!wired).then_some(name)
        })
        .collect();
    assert!(unwired.is_empty(), "test files not wired with #[path]: {unwired:?}");
}
