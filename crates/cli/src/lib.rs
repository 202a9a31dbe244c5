//! Command implementations for the `shieldgen` binary.
//!
//! Each command exposes a clap `Args` struct and a `run` function returning
//! the process exit code.

pub mod generate;
pub mod render;
pub mod request;

/// Run a fallible command body, printing its error and mapping the result to
/// an exit code.
pub fn run_cli<F>(f: F) -> i32
where
    F: FnOnce() -> Result<(), String>,
{
    match f() {
        Ok(()) => 0,
        Err(err) => {
            eprintln!("{err}");
            1
        }
    }
}
