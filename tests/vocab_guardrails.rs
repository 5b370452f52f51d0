use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use actiongen_core::conventions;
use actiongen_core::dart;

/// Guardrail against reintroducing stringly-typed convention checks.
///
/// This is intentionally a **coarse** safety net. It looks for suspicious patterns like `== "ActionDispatcher"`,
/// `"ReduxActions" => ...` or `.starts_with("Builder")` in Rust source files where we expect callers to go through
/// `actiongen_core` constants and helpers instead.
///
/// Notes:
/// - We allow occurrences in `crates/actiongen_core/src/**` (the conventions themselves) and in tests/fixtures.
/// - This is not meant to be perfect; it’s meant to catch “oops I added a string match”.
#[test]
fn no_new_stringly_convention_checks_in_rust_sources() {
    let root = repo_root();
    let spellings = convention_spellings();
    let mut offenders: Vec<(PathBuf, usize, String)> = Vec::new();

    let targets = [root.join("src"), root.join("crates")];
    for dir in targets {
        if dir.exists() {
            scan_dir(&root, &dir, &spellings, &mut offenders);
        }
    }

    if !offenders.is_empty() {
        let mut msg = String::new();
        msg.push_str("Found potential stringly-typed convention checks. Prefer actiongen_core::conventions.\n\n");
        for (path, line_no, line) in offenders.into_iter().take(80) {
            msg.push_str(&format!(
                "- {}:{}: {}\n",
                path.strip_prefix(&root).unwrap_or(&path).display(),
                line_no,
                line.trim()
            ));
        }
        panic!("{msg}");
    }
}

fn repo_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
}

fn convention_spellings() -> Vec<&'static str> {
    let mut set: BTreeSet<&'static str> = BTreeSet::new();

    for marker in conventions::MARKERS {
        set.insert(marker.spelling);
    }
    set.insert(conventions::GENERATED_PREFIX);
    set.insert(conventions::VALUE_BOUND_PREFIX);
    set.insert(conventions::BUILDER_BOUND_PREFIX);
    set.insert(conventions::BUILDER_SUFFIX);
    set.insert(dart::DYNAMIC);

    set.into_iter().collect()
}

fn is_allowed_file(root: &Path, path: &Path) -> bool {
    let rel = path.strip_prefix(root).unwrap_or(path).to_string_lossy();
    if !rel.ends_with(".rs") {
        return true;
    }
    // The conventions crate defines the spellings; allow it.
    if rel.starts_with("crates/actiongen_core/src/") {
        return true;
    }
    // Tests can mention spellings directly.
    if rel.starts_with("tests/") || rel.starts_with("crates/actiongen_core/tests/") {
        return true;
    }
    false
}

fn scan_dir(root: &Path, dir: &Path, spellings: &[&'static str], offenders: &mut Vec<(PathBuf, usize, String)>) {
    let Ok(entries) = fs::read_dir(dir) else { return };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            scan_dir(root, &path, spellings, offenders);
            continue;
        }
        if is_allowed_file(root, &path) {
            continue;
        }
        let Ok(contents) = fs::read_to_string(&path) else {
            continue;
        };
        for (idx, line) in contents.lines().enumerate() {
            if is_suspicious_line(line, spellings) {
                offenders.push((path.clone(), idx + 1, line.to_string()));
            }
        }
    }
}

fn is_suspicious_line(line: &str, spellings: &[&'static str]) -> bool {
    // Avoid false positives in comments/docstrings.
    let trimmed = line.trim_start();
    if trimmed.starts_with("//") {
        return false;
    }

    // Only flag explicit equality checks, match arms and prefix tests for known convention spellings.
    for s in spellings {
        let eq = format!("== \"{s}\"");
        let arm = format!("\"{s}\" =>");
        let prefix = format!("starts_with(\"{s}\")");
        if line.contains(&eq) || line.contains(&arm) || line.contains(&prefix) {
            return true;
        }
    }

    false
}

#[test]
fn suspicious_line_detection() {
    let spellings = convention_spellings();
    assert!(is_suspicious_line(r#"if name == "ReduxActions" {"#, &spellings));
    assert!(is_suspicious_line(r#"    "ActionDispatcher" => true,"#, &spellings));
    assert!(is_suspicious_line(r#"bound.starts_with("Builder")"#, &spellings));
    assert!(!is_suspicious_line(r#"// name == "ReduxActions""#, &spellings));
    assert!(!is_suspicious_line("if conventions::is_builder_bound(name) {", &spellings));
}
