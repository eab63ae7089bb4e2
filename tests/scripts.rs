use std::{fs, path::Path};

use linea::{execute, interpreter::evaluator::core::Config};
use walkdir::WalkDir;

fn scripts_in(dir: &str) -> Vec<std::path::PathBuf> {
    WalkDir::new(dir).into_iter()
                     .filter_map(Result::ok)
                     .filter(|e| e.path().extension().is_some_and(|ext| ext == "ln"))
                     .map(|e| e.path().to_path_buf())
                     .collect()
}

fn run_script(path: &Path) -> Result<(), linea::error::Error> {
    let source =
        fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));
    let config = Config { strict: true, ..Config::default() };
    execute(&source, config, Vec::new()).map(|_| ())
}

#[test]
fn passing_scripts_succeed() {
    let scripts = scripts_in("tests/scripts/pass");
    assert!(!scripts.is_empty(), "No scripts found in tests/scripts/pass");

    for path in scripts {
        if let Err(e) = run_script(&path) {
            panic!("Script {path:?} failed:\nError: {e}");
        }
    }
}

#[test]
fn failing_scripts_fail() {
    let scripts = scripts_in("tests/scripts/fail");
    assert!(!scripts.is_empty(), "No scripts found in tests/scripts/fail");

    for path in scripts {
        assert!(run_script(&path).is_err(), "Script {path:?} succeeded but was expected to fail");
    }
}
