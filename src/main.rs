use clap::Parser;
use std::path::PathBuf;

/// Expand shorthand in a commit message. Meant to run as a git `commit-msg` hook.
#[derive(Debug, Parser)]
#[command(name = "message-shorthand", version, about)]
struct Cli {
    /// JSON object mapping each shorthand to its expansion, applied in order
    substitutions: String,

    /// Commit message file to rewrite in place
    #[arg(value_parser = existing_file)]
    commit_msg_file: PathBuf,

    /// Path to a KDL config file with extra substitution rules
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log debug output to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn existing_file(raw: &str) -> Result<PathBuf, String> {
    let path = PathBuf::from(raw);
    if path.is_file() {
        Ok(path)
    } else if path.is_dir() {
        Err(format!("File '{raw}' is a directory."))
    } else {
        Err(format!("File '{raw}' does not exist."))
    }
}

fn main() -> miette::Result<()> {
    let cli = Cli::parse();
    message_shorthand::logging::init(cli.verbose);

    message_shorthand::run_hook(
        &cli.substitutions,
        &cli.commit_msg_file,
        cli.config.as_deref(),
    )?;
    Ok(())
}
