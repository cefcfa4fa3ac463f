use clap::error::ContextKind;
use clap::{ArgAction, ColorChoice, CommandFactory, Parser};
use std::ffi::{OsStr, OsString};
use std::path::PathBuf;

use crate::error::TreeError;
use crate::models::Options;

/// Every token the parser treats as a switch, in any position.
const SWITCHES: [&str; 4] = ["-a", "-d", "-i", "-h"];

#[derive(Parser, Debug)]
#[command(name = "tree")]
#[command(about = "List the contents of a directory hierarchy as an indented tree", long_about = None)]
#[command(override_usage = "tree [OPTIONS] [DIRECTORY]")]
#[command(disable_help_flag = true, args_override_self = true, color = ColorChoice::Never)]
pub struct Cli {
    /// Show all files, including files starting with .
    #[arg(short = 'a')]
    pub all_files: bool,

    /// Show directories only
    #[arg(short = 'd')]
    pub dirs_only: bool,

    /// No indentation
    #[arg(short = 'i')]
    pub no_indentation: bool,

    /// Show this help screen and exit
    #[arg(short = 'h', action = ArgAction::Help)]
    help: Option<bool>,

    /// Directory to list (defaults to the current directory)
    #[arg(value_name = "DIRECTORY")]
    pub directory: Option<PathBuf>,
}

/// What the command line asks for.
#[derive(Debug, Eq, PartialEq)]
pub enum Invocation {
    /// `-h` was given; the rendered usage text.
    Help(String),
    List { options: Options, directory: PathBuf },
}

impl Cli {
    pub fn options(&self) -> Options {
        Options {
            all_files: self.all_files,
            dirs_only: self.dirs_only,
            no_indentation: self.no_indentation,
        }
    }

    pub fn usage() -> String {
        Self::command().render_help().to_string()
    }
}

/// Parse a full argument vector, program name first.
///
/// Tokens are checked left to right: `-a`, `-d`, `-i` and `-h` are switches
/// wherever they appear, `-h` ends parsing, and anything else must be the
/// final token, which names the directory. A final token that looks like an
/// unknown switch is rejected as well.
pub fn parse_args<I, T>(args: I) -> Result<Invocation, TreeError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let args: Vec<OsString> = args.into_iter().map(Into::into).collect();
    let tokens = args.get(1..).unwrap_or_default();

    for (index, token) in tokens.iter().enumerate() {
        if token == "-h" {
            return Ok(Invocation::Help(Cli::usage()));
        }
        if is_switch(token) {
            continue;
        }
        if index + 1 != tokens.len() || looks_like_switch(token) {
            return Err(TreeError::InvalidArgument(
                token.to_string_lossy().into_owned(),
            ));
        }
    }

    let cli = Cli::try_parse_from(args.iter().cloned())
        .map_err(|err| TreeError::InvalidArgument(offending_token(&err)))?;

    Ok(Invocation::List {
        options: cli.options(),
        directory: cli.directory.unwrap_or_else(|| PathBuf::from(".")),
    })
}

fn is_switch(token: &OsStr) -> bool {
    SWITCHES.iter().any(|switch| token == *switch)
}

/// `-x`, `--`, `-ad`; a lone `-` is a plain name.
fn looks_like_switch(token: &OsStr) -> bool {
    let bytes = token.as_encoded_bytes();
    bytes.len() > 1 && bytes[0] == b'-'
}

fn offending_token(err: &clap::Error) -> String {
    err.get(ContextKind::InvalidArg)
        .map(ToString::to_string)
        .unwrap_or_else(|| err.kind().to_string())
}
