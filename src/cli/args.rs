use clap::Parser;
use std::ffi::OsString;

/// Raw command line.
///
/// Provider flags are defined by the config file, so clap only collects the
/// tokens; [`crate::cli::dispatch`] decides what they mean. `-h`/`--help` are
/// left to the dispatcher so the help text can list the configured providers.
#[derive(Parser, Debug)]
#[command(name = "web-s")]
#[command(about = "Open web searches from the command line")]
#[command(version, disable_help_flag = true)]
pub struct Args {
    /// Optional provider flag (-<shortHand> or --<name>) followed by the search string
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub args: Vec<String>,
}

impl Args {
    /// Parses `argv` (program name first) and keeps every following token.
    ///
    /// clap still handles `--version`, but it consumes a `--` separator,
    /// while `--` is ordinary query text here. The tokens are therefore
    /// taken from `argv` itself rather than from clap's matches.
    pub fn try_parse_argv<I, T>(argv: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let argv: Vec<OsString> = argv.into_iter().map(Into::into).collect();
        let mut parsed = Self::try_parse_from(&argv)?;

        parsed.args = argv
            .iter()
            .skip(1)
            .map(|token| token.to_string_lossy().into_owned())
            .collect();

        Ok(parsed)
    }
}
