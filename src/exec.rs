// src/exec.rs

//! Run a program from another working directory

use crate::error::{Error, Result};
use std::env;
use std::ffi::OsString;
use std::path::Path;
use std::process::{Child, Command, Stdio};
use tracing::info;

/// Interpreter used for script programs unless overridden
pub const DEFAULT_INTERPRETER: &str = "python3";

/// File extensions that are run through the interpreter
pub const SCRIPT_EXTENSIONS: &[&str] = &[".py"];

/// Whether `program` names a script rather than an executable
pub fn is_script(program: &str) -> bool {
    SCRIPT_EXTENSIONS.iter().any(|ext| program.ends_with(ext))
}

/// Build the argv to launch: scripts get the interpreter in front
pub fn command_line(interpreter: &str, command: &[String]) -> Result<Vec<OsString>> {
    let (program, _) = command
        .split_first()
        .ok_or_else(|| Error::InvalidArgument("no program given".to_string()))?;

    let mut argv = Vec::with_capacity(command.len() + 1);
    if is_script(program) {
        argv.push(OsString::from(interpreter));
    }
    argv.extend(command.iter().map(OsString::from));
    Ok(argv)
}

/// Change the process working directory to `dir`, then spawn `command`
///
/// Standard output and error are inherited. The child is returned unwaited;
/// dropping it leaves the process running on its own.
pub fn run_in_dir(dir: &Path, interpreter: &str, command: &[String]) -> Result<Child> {
    let argv = command_line(interpreter, command)?;
    env::set_current_dir(dir)?;
    info!("Running {:?} in {}", argv, dir.display());

    let child = Command::new(&argv[0])
        .args(&argv[1..])
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .spawn()?;
    Ok(child)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(args: &[&str]) -> Vec<String> {
        args.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_script_detection() {
        assert!(is_script("gen_data.py"));
        assert!(is_script("../tools/build.py"));
        assert!(!is_script("protoc"));
        assert!(!is_script("script.pyc"));
    }

    #[test]
    fn test_script_gets_interpreter() {
        let argv = command_line("python3", &strings(&["gen.py", "--out", "x"])).unwrap();
        assert_eq!(argv, vec!["python3", "gen.py", "--out", "x"]);
    }

    #[test]
    fn test_binary_runs_directly() {
        let argv = command_line("python3", &strings(&["make", "-j4"])).unwrap();
        assert_eq!(argv, vec!["make", "-j4"]);
    }

    #[test]
    fn test_empty_command() {
        assert!(matches!(
            command_line("python3", &[]),
            Err(Error::InvalidArgument(_))
        ));
    }
}
