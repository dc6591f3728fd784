mod cli;
mod config;
mod logging;
mod runner;
mod scaffold;
mod settings;
mod util;

use std::process::ExitCode;

fn main() -> anyhow::Result<ExitCode> {
    let app = cli::parse();
    logging::init(app.verbose);
    runner::run(app)
}
