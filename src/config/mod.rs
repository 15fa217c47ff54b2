mod kdl;

use std::path::{Path, PathBuf};

use crate::substitution::SubstitutionMap;
use self::kdl::{KdlParse, ParseNode};

/// Project-wide settings loaded from a KDL file.
///
/// ```kdl
/// substitutions {
///     replace "WIP" "Work in progress"
/// }
/// ```
#[derive(Debug, Default)]
pub struct Config {
    /// Rules applied before those given on the command line.
    pub substitutions: SubstitutionMap,
}

/// Errors that can occur when loading or parsing a config file.
#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum ConfigError {
    #[error("config file not found: {}", .0.display())]
    #[diagnostic(code(message_shorthand::config::not_found))]
    NotFound(PathBuf),
    #[error("failed to read config: {0}")]
    #[diagnostic(code(message_shorthand::config::read))]
    ReadError(#[from] std::io::Error),
    #[error("invalid KDL syntax: {0}")]
    #[diagnostic(code(message_shorthand::config::syntax))]
    ParseError(String),
    #[error("invalid config: {0}")]
    #[diagnostic(
        code(message_shorthand::config::invalid),
        help("rules look like `substitutions {{ replace \"WIP\" \"Work in progress\" }}`")
    )]
    ValidationError(String),
}

impl Config {
    /// Load a config from a KDL file at the given path.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ConfigError::NotFound(path.to_path_buf())
            } else {
                ConfigError::ReadError(e)
            }
        })?;
        let config = Self::parse(&content)?;
        tracing::debug!(
            path = %path.display(),
            rules = config.substitutions.len(),
            "loaded config"
        );
        Ok(config)
    }

    /// Parse a KDL string into a Config.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let doc = KdlParse::parse(content)?;
        Self::from_document(&KdlParse::new(&doc, content))
    }

    fn from_document(doc: &KdlParse<'_>) -> Result<Self, ConfigError> {
        let mut config = Config::default();
        for node in doc.nodes() {
            match node.name() {
                "substitutions" => {
                    if let Some(children) = node.children() {
                        collect_rules(&children, &mut config.substitutions)?;
                    }
                }
                other => {
                    return Err(ConfigError::ValidationError(format!(
                        "line {}: unknown section `{other}`",
                        node.line()
                    )))
                }
            }
        }
        Ok(config)
    }
}

/// Append every `replace "pattern" "replacement"` node to `map`, in source order.
fn collect_rules(doc: &KdlParse<'_>, map: &mut SubstitutionMap) -> Result<(), ConfigError> {
    for node in doc.nodes() {
        let (pattern, replacement) = parse_replace(&node)
            .map_err(|msg| ConfigError::ValidationError(format!("line {}: {msg}", node.line())))?;
        map.insert(pattern, replacement);
    }
    Ok(())
}

fn parse_replace<'a>(node: &ParseNode<'a>) -> Result<(&'a str, &'a str), String> {
    if node.name() != "replace" {
        return Err(format!("expected `replace`, found `{}`", node.name()));
    }
    if node.has_properties() || node.children().is_some() {
        return Err("`replace` takes only two string arguments".to_string());
    }
    match node.arguments().as_slice() {
        [Some(pattern), Some(replacement)] => Ok((*pattern, *replacement)),
        [_, _] => Err("`replace` arguments must be strings".to_string()),
        args => Err(format!(
            "`replace` expects 2 arguments, found {}",
            args.len()
        )),
    }
}
