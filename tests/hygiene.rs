//! Hygiene: source-level budgets for the editor crate.
//!
//! Production files under `src/` (sibling `*_test.rs` files excluded) are
//! scanned for patterns the crate keeps out: panicking shortcuts, silently
//! discarded results, ad-hoc printing instead of `tracing`, and threading or
//! `unsafe` in a component that runs on one logical thread. Budgets only go down.

use std::fs;
use std::path::Path;

struct Budget {
    pattern: &'static str,
    max: usize,
    why: &'static str,
}

const BUDGETS: &[Budget] = &[
    // Panics.
    Budget { pattern: ".unwrap()", max: 0, why: "propagate or handle instead" },
    Budget { pattern: ".expect(", max: 0, why: "propagate or handle instead" },
    Budget { pattern: "panic!(", max: 0, why: "editor input must never crash the host" },
    Budget { pattern: "unreachable!(", max: 0, why: "model the state so the arm cannot exist" },
    Budget { pattern: "todo!(", max: 0, why: "no stubs in shipped code" },
    Budget { pattern: "unimplemented!(", max: 0, why: "no stubs in shipped code" },
    // Silent loss.
    Budget { pattern: "let _ =", max: 0, why: "inspect the value or log it" },
    Budget { pattern: ".ok()", max: 0, why: "map the error instead of dropping it" },
    // Output goes through tracing.
    Budget { pattern: "println!(", max: 0, why: "use tracing" },
    Budget { pattern: "eprintln!(", max: 0, why: "use tracing" },
    Budget { pattern: "dbg!(", max: 0, why: "use tracing" },
    // Single logical thread.
    Budget { pattern: "std::thread", max: 0, why: "editor state is owned by one thread" },
    Budget { pattern: "Mutex<", max: 0, why: "editor state is owned by one thread" },
    Budget { pattern: "unsafe ", max: 0, why: "nothing here needs it" },
    // Style.
    Budget { pattern: "#[allow(dead_code)]", max: 0, why: "delete unused code" },
];

struct SourceFile {
    path: String,
    content: String,
}

fn source_files() -> Vec<SourceFile> {
    let mut files = Vec::new();
    collect(Path::new("src"), &mut files);
    files
}

fn collect(dir: &Path, out: &mut Vec<SourceFile>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for path in entries.flatten().map(|e| e.path()) {
        if path.is_dir() {
            collect(&path, out);
            continue;
        }
        let path_str = path.to_string_lossy().to_string();
        if !path_str.ends_with(".rs") || path_str.ends_with("_test.rs") {
            continue;
        }
        if let Ok(content) = fs::read_to_string(&path) {
            out.push(SourceFile { path: path_str, content });
        }
    }
}

fn hits(files: &[SourceFile], pattern: &str) -> Vec<(String, usize)> {
    files
        .iter()
        .map(|f| (f.path.clone(), f.content.lines().filter(|l| l.contains(pattern)).count()))
        .filter(|(_, n)| *n > 0)
        .collect()
}

#[test]
fn sources_found() {
    let files = source_files();
    assert!(files.iter().any(|f| f.path.ends_with("editor.rs")), "scan did not reach src/editor.rs");
}

#[test]
fn budgets_hold() {
    let files = source_files();
    let mut failures = Vec::new();
    for budget in BUDGETS {
        let found = hits(&files, budget.pattern);
        let count: usize = found.iter().map(|(_, n)| n).sum();
        if count > budget.max {
            let detail = found.iter().map(|(p, n)| format!("    {p}: {n}")).collect::<Vec<_>>().join("\n");
            failures.push(format!(
                "`{}` budget exceeded: found {count}, max {} ({})\n{detail}",
                budget.pattern, budget.max, budget.why
            ));
        }
    }
    assert!(failures.is_empty(), "{}", failures.join("\n"));
}
