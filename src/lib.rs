pub mod config;
pub mod logging;
pub mod substitution;

pub(crate) mod cli;

pub use cli::hook::HookError;
pub use substitution::{substitute, SubstitutionError, SubstitutionMap};

/// Run the hook: rewrite `commit_msg_file` using the JSON `substitutions`.
///
/// This is the binary entry point. It exists to bridge the binary crate (`main.rs`)
/// to the library without exposing `cli` internals. Library callers after the
/// substitution logic alone should use [`SubstitutionMap::from_json`] and
/// [`substitute`] directly.
pub fn run_hook(
    substitutions: &str,
    commit_msg_file: &std::path::Path,
    config_path: Option<&std::path::Path>,
) -> Result<(), HookError> {
    cli::hook::run(substitutions, commit_msg_file, config_path)
}
