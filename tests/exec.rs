// tests/exec.rs

//! Run-in-directory test. Kept in its own test binary because it changes the
//! working directory of the whole process.

#![cfg(unix)]

use std::fs;
use std::path::Path;
use std::time::{Duration, Instant};

use ime_build_tools::exec::{DEFAULT_INTERPRETER, run_in_dir};

fn wait_for(path: &Path) -> bool {
    let deadline = Instant::now() + Duration::from_secs(10);
    while Instant::now() < deadline {
        if path.exists() {
            return true;
        }
        std::thread::sleep(Duration::from_millis(20));
    }
    false
}

#[test]
fn test_runs_in_target_directory() {
    let dir = tempfile::tempdir().unwrap();
    let command: Vec<String> = ["sh", "-c", "echo ran > marker.txt"]
        .iter()
        .map(|s| s.to_string())
        .collect();

    let mut child = run_in_dir(dir.path(), DEFAULT_INTERPRETER, &command).unwrap();
    child.wait().unwrap();

    let marker = dir.path().join("marker.txt");
    assert!(wait_for(&marker));
    assert_eq!(fs::read_to_string(&marker).unwrap(), "ran\n");
    assert_eq!(
        std::env::current_dir().unwrap().canonicalize().unwrap(),
        dir.path().canonicalize().unwrap()
    );
}
