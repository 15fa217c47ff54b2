use std::path::{Path, PathBuf};

use crate::config::{Config, ConfigError};
use crate::substitution::{SubstitutionError, SubstitutionMap};

/// Everything that can stop the hook from rewriting the commit message.
#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum HookError {
    #[error("failed to read commit message file {}", path.display())]
    #[diagnostic(code(message_shorthand::read))]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to write commit message file {}", path.display())]
    #[diagnostic(code(message_shorthand::write))]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    #[diagnostic(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    #[diagnostic(transparent)]
    Substitution(#[from] SubstitutionError),
}

/// Execute the hook: read the message file, validate, substitute, write back.
///
/// The file is only written once every earlier step has succeeded, so any
/// error leaves the original message in place.
pub fn run(
    substitutions: &str,
    commit_msg_file: &Path,
    config_path: Option<&Path>,
) -> Result<(), HookError> {
    let message = std::fs::read_to_string(commit_msg_file).map_err(|source| HookError::Read {
        path: commit_msg_file.to_path_buf(),
        source,
    })?;

    let map = build_map(substitutions, config_path)?;
    tracing::debug!(
        path = %commit_msg_file.display(),
        rules = map.len(),
        "applying substitutions"
    );

    let rewritten = map.apply(&message);
    if rewritten == message {
        tracing::debug!("no substitution matched");
    }

    std::fs::write(commit_msg_file, rewritten).map_err(|source| HookError::Write {
        path: commit_msg_file.to_path_buf(),
        source,
    })
}

/// Config rules first, then command-line rules in their JSON order.
///
/// A config rule whose pattern is also given on the command line is dropped,
/// so the command-line ordering is never rearranged by the config file.
fn build_map(
    substitutions: &str,
    config_path: Option<&Path>,
) -> Result<SubstitutionMap, HookError> {
    let mut map = match config_path {
        Some(path) => Config::load(path)?.substitutions,
        None => SubstitutionMap::new(),
    };

    let cli_rules = SubstitutionMap::from_json(substitutions).inspect_err(|e| {
        tracing::debug!(error = ?e, "rejected substitutions argument");
    })?;
    map.retain(|rule| cli_rules.get(&rule.pattern).is_none());
    map.extend(
        cli_rules
            .iter()
            .map(|r| (r.pattern.as_str(), r.replacement.as_str())),
    );
    Ok(map)
}
