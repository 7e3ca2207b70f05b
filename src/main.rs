use anyhow::Result;
use std::io;
use std::process;

use web_s::cli::{self, Args};
use web_s::config::ConfigStore;
use web_s::error::{WebsError, exit_code_for};
use web_s::opener::SystemBrowser;
use web_s::output::{self, OutputConfig};
use web_s::ui::Style;

fn main() {
    let args = Args::try_parse_argv(std::env::args_os()).unwrap_or_else(|e| e.exit());
    output::init(OutputConfig::default());

    if let Err(err) = run(&args) {
        // WebsError messages already include their cause
        let message = err
            .downcast_ref::<WebsError>()
            .map_or_else(|| format!("{err:#}"), ToString::to_string);
        eprintln!("{} {message}", Style::error("ERROR:"));
        process::exit(exit_code_for(&err));
    }
}

fn run(args: &Args) -> Result<()> {
    let store = ConfigStore::new()?;
    let mut stdout = io::stdout().lock();

    cli::run(&args.args, &store, &SystemBrowser, &mut stdout)
}
