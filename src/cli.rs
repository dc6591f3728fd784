use std::path::PathBuf;

use clap::Parser;

/// Scaffold a new project from the go-jimu template archive.
#[derive(Parser, Debug)]
#[command(name = "jimu-new", version, about = "Scaffold a go-jimu project")]
pub struct Cli {
    /// Directory to scaffold into (defaults to the current directory).
    #[arg(short = 'C', long = "chdir")]
    pub chdir: Option<PathBuf>,
    /// Module path, e.g. `github.com/acme/widget`. Prompted for when absent.
    #[arg(short = 'm', long = "module")]
    pub module: Option<String>,
    /// Binary name substituted into the Dockerfile. Prompted for when absent.
    #[arg(short = 'b', long = "binary")]
    pub binary: Option<String>,
    /// Skip the confirmation prompt.
    #[arg(short = 'y', long = "yes")]
    pub yes: bool,
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Helper entry point so `main` can stay minimal.
pub fn parse() -> Cli {
    Cli::parse()
}
