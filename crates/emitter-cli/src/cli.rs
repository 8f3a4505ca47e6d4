//! CLI argument parsing using clap derive

use std::ffi::{OsStr, OsString};
use std::path::PathBuf;

use clap::error::ErrorKind;
use clap::{Parser, ValueEnum};
use emitter_core::LineEnding;

/// Config Emitter - Write the auto-generated configuration file
#[derive(Parser, Debug)]
#[command(name = "config-emitter")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Line terminator for the generated file
    #[arg(
        long,
        value_enum,
        env = "CONFIG_EMITTER_LINE_ENDING",
        default_value_t = LineEndingArg::Lf
    )]
    pub line_ending: LineEndingArg,

    /// File to create or overwrite
    pub output_file: PathBuf,
}

/// Command-line spelling of [`LineEnding`]
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineEndingArg {
    Lf,
    Crlf,
}

impl From<LineEndingArg> for LineEnding {
    fn from(arg: LineEndingArg) -> Self {
        match arg {
            LineEndingArg::Lf => LineEnding::Lf,
            LineEndingArg::Crlf => LineEnding::CrLf,
        }
    }
}

/// Flags that may appear as the only argument.
const LONE_FLAGS: &[&str] = &["-h", "--help", "-V", "--version", "-v", "--verbose"];

/// Mark a lone `-`-prefixed argument as the output path.
///
/// `config-emitter -out.cfg` names a file, not a flag. Inserting `--` keeps
/// clap from reading it as options.
pub fn separate_lone_path(mut args: Vec<OsString>) -> Vec<OsString> {
    let lone_path = matches!(
        args.as_slice(),
        [_, only] if starts_with_dash(only) && !LONE_FLAGS.iter().any(|flag| only == OsStr::new(flag))
    );
    if lone_path {
        args.insert(1, OsString::from("--"));
    }
    args
}

fn starts_with_dash(arg: &OsStr) -> bool {
    arg.as_encoded_bytes().first() == Some(&b'-')
}

/// Whether a parse error means the positional argument count was wrong.
pub fn is_argument_count_error(kind: ErrorKind) -> bool {
    matches!(
        kind,
        ErrorKind::MissingRequiredArgument
            | ErrorKind::UnknownArgument
            | ErrorKind::TooManyValues
            | ErrorKind::WrongNumberOfValues
    )
}

/// Whether clap wants to print help or version and exit successfully.
pub fn is_informational(kind: ErrorKind) -> bool {
    matches!(kind, ErrorKind::DisplayHelp | ErrorKind::DisplayVersion)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(std::iter::once("config-emitter").chain(args.iter().copied()))
    }

    #[test]
    fn test_single_positional() {
        let cli = parse(&["out.cfg"]).unwrap();
        assert_eq!(cli.output_file, PathBuf::from("out.cfg"));
        assert!(!cli.verbose);
    }

    #[test]
    fn test_missing_positional_is_count_error() {
        let err = parse(&[]).unwrap_err();
        assert!(is_argument_count_error(err.kind()), "{:?}", err.kind());
    }

    #[test]
    fn test_extra_positional_is_count_error() {
        let err = parse(&["a.cfg", "b.cfg"]).unwrap_err();
        assert!(is_argument_count_error(err.kind()), "{:?}", err.kind());
    }

    #[test]
    fn test_help_is_informational() {
        let err = parse(&["--help"]).unwrap_err();
        assert!(is_informational(err.kind()));
    }

    #[test]
    fn test_invalid_line_ending_is_not_count_error() {
        let err = parse(&["--line-ending", "cr", "out.cfg"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidValue);
        assert!(!is_argument_count_error(err.kind()));
    }

    fn os_args(list: &[&str]) -> Vec<OsString> {
        list.iter().map(OsString::from).collect()
    }

    #[test]
    fn test_lone_dash_path_is_separated() {
        let args = separate_lone_path(os_args(&["gen", "-out.cfg"]));
        assert_eq!(args, os_args(&["gen", "--", "-out.cfg"]));

        let cli = Cli::try_parse_from(&args).unwrap();
        assert_eq!(cli.output_file, PathBuf::from("-out.cfg"));
    }

    #[test]
    fn test_lone_flags_are_left_alone() {
        for flag in LONE_FLAGS {
            let args = os_args(&["gen", *flag]);
            assert_eq!(separate_lone_path(args.clone()), args);
        }
    }

    #[test]
    fn test_plain_path_and_multiple_args_are_left_alone() {
        let single = os_args(&["gen", "out.cfg"]);
        assert_eq!(separate_lone_path(single.clone()), single);

        let several = os_args(&["gen", "-v", "-out.cfg"]);
        assert_eq!(separate_lone_path(several.clone()), several);
    }

    #[test]
    fn test_crlf_flag_maps_to_line_ending() {
        let cli = parse(&["--line-ending", "crlf", "-v", "out.cfg"]).unwrap();
        assert_eq!(LineEnding::from(cli.line_ending), LineEnding::CrLf);
        assert!(cli.verbose);
    }
}
