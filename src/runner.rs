use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result, anyhow};
use camino::{Utf8Path, Utf8PathBuf};
use tracing::info;

use crate::cli::Cli;
use crate::config::ScaffoldConfig;
use crate::scaffold::{self, fetch::ArchiveSource, fetch::HttpSource};
use crate::settings::{self, Confirmation, Presets};

/// How a run ended when no error occurred.
#[derive(Debug, Eq, PartialEq)]
pub enum Outcome {
    Completed(Utf8PathBuf),
    Cancelled,
}

impl Outcome {
    pub fn exit_code(&self) -> ExitCode {
        match self {
            Outcome::Completed(_) => ExitCode::SUCCESS,
            Outcome::Cancelled => ExitCode::from(1),
        }
    }
}

#[derive(Clone, Debug)]
struct CliContext {
    chdir: Option<PathBuf>,
    presets: Presets,
}

impl CliContext {
    /// Directory the template is extracted into.
    fn resolve_workdir(&self) -> Result<Utf8PathBuf> {
        let cwd = current_working_dir()?;
        match &self.chdir {
            Some(path) => {
                let path = Utf8PathBuf::from_path_buf(path.clone())
                    .map_err(|_| anyhow!("working directory must be valid UTF-8"))?;
                Ok(cwd.join(path))
            }
            None => Ok(cwd),
        }
    }
}

impl From<Cli> for CliContext {
    fn from(cli: Cli) -> Self {
        Self {
            chdir: cli.chdir,
            presets: Presets {
                module: cli.module,
                binary_name: cli.binary,
                assume_yes: cli.yes,
            },
        }
    }
}

pub fn run(cli: Cli) -> Result<ExitCode> {
    let ctx = CliContext::from(cli);
    let workdir = ctx.resolve_workdir()?;
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();

    let outcome = execute(
        ctx.presets,
        &mut input,
        &mut output,
        &ScaffoldConfig::default(),
        &HttpSource::default(),
        &workdir,
        &std::env::temp_dir(),
    )?;
    Ok(outcome.exit_code())
}

/// Collect settings, then scaffold unless the user declined.
fn execute<R, W, S>(
    presets: Presets,
    input: &mut R,
    output: &mut W,
    config: &ScaffoldConfig,
    source: &S,
    workdir: &Utf8Path,
    temp_dir: &Path,
) -> Result<Outcome>
where
    R: BufRead,
    W: Write,
    S: ArchiveSource + ?Sized,
{
    let confirmation = settings::collect(input, output, presets)
        .context("collecting project settings")?;
    let settings = match confirmation {
        Confirmation::Accepted(settings) => settings,
        Confirmation::Declined => {
            info!("scaffolding cancelled");
            return Ok(Outcome::Cancelled);
        }
    };

    let project = scaffold::scaffold(config, source, workdir, temp_dir, &settings)?;
    info!("project ready at {}", project);
    Ok(Outcome::Completed(project))
}

fn current_working_dir() -> Result<Utf8PathBuf> {
    let cwd = std::env::current_dir().context("determining current directory")?;
    Utf8PathBuf::from_path_buf(cwd).map_err(|_| anyhow!("current directory is not valid UTF-8"))
}
