//! CLI argument definitions using clap derive macros.

use std::path::PathBuf;

use clap::{ArgGroup, Parser};

/// Download image data from the Digital Archive of the Finnish National Archives.
///
/// Selectors pick what to download and can be repeated and combined: bare
/// sections land directly in the output directory, items and series
/// recreate the archive hierarchy as subdirectories.
#[derive(Parser, Debug)]
#[command(name = "narc-fetch")]
#[command(author, version, about)]
#[command(group(
    ArgGroup::new("selectors")
        .required(true)
        .multiple(true)
        .args(["sections", "items", "series"]),
))]
pub struct Args {
    /// Section identifier to download (repeatable)
    #[arg(short = 'x', long = "section", value_name = "ID")]
    pub sections: Vec<String>,

    /// Item identifier to download (repeatable)
    #[arg(short = 'i', long = "item", value_name = "ID")]
    pub items: Vec<String>,

    /// Series identifier to download (repeatable)
    #[arg(short = 's', long = "series", visible_alias = "serie", value_name = "ID")]
    pub series: Vec<String>,

    /// Use section identifiers as file names instead of running page numbers
    #[arg(long)]
    pub identifiers_as_names: bool,

    /// Parent directory for downloaded images (defaults to the working directory)
    #[arg(short = 'd', long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Overwrite existing files instead of skipping them
    #[arg(short = 'o', long)]
    pub overwrite: bool,

    /// Seconds to wait between downloads
    #[arg(short = 'w', long, value_name = "SECONDS", default_value_t = 0.5)]
    pub wait: f64,

    /// Suppress informational output (errors remain visible)
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase output verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_requires_at_least_one_selector() {
        let result = Args::try_parse_from(["narc-fetch"]);
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn test_cli_single_section_selector() {
        let args = Args::try_parse_from(["narc-fetch", "-x", "77"]).unwrap();
        assert_eq!(args.sections, vec!["77"]);
        assert!(args.items.is_empty());
        assert!(args.series.is_empty());
    }

    #[test]
    fn test_cli_selectors_append_on_repeat() {
        let args = Args::try_parse_from(["narc-fetch", "-i", "1234", "--item", "5.6"]).unwrap();
        assert_eq!(args.items, vec!["1234", "5.6"]);
    }

    #[test]
    fn test_cli_selector_kinds_combine() {
        let args =
            Args::try_parse_from(["narc-fetch", "-s", "S1", "-i", "1234", "-x", "77"]).unwrap();
        assert_eq!(args.series, vec!["S1"]);
        assert_eq!(args.items, vec!["1234"]);
        assert_eq!(args.sections, vec!["77"]);
    }

    #[test]
    fn test_cli_serie_alias_accepted() {
        let args = Args::try_parse_from(["narc-fetch", "--serie", "S1"]).unwrap();
        assert_eq!(args.series, vec!["S1"]);
    }

    #[test]
    fn test_cli_defaults() {
        let args = Args::try_parse_from(["narc-fetch", "-x", "1"]).unwrap();
        assert!(!args.overwrite);
        assert!(!args.identifiers_as_names);
        assert!(!args.quiet);
        assert_eq!(args.verbose, 0);
        assert!(args.output_dir.is_none());
        assert!((args.wait - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_cli_wait_accepts_fractional_seconds() {
        let args = Args::try_parse_from(["narc-fetch", "-x", "1", "-w", "1.25"]).unwrap();
        assert!((args.wait - 1.25).abs() < f64::EPSILON);
    }

    #[test]
    fn test_cli_output_dir_flag() {
        let args = Args::try_parse_from(["narc-fetch", "-x", "1", "-d", "/tmp/images"]).unwrap();
        assert_eq!(args.output_dir, Some(PathBuf::from("/tmp/images")));
    }

    #[test]
    fn test_cli_overwrite_and_identifiers_as_names() {
        let args =
            Args::try_parse_from(["narc-fetch", "-i", "5", "-o", "--identifiers-as-names"])
                .unwrap();
        assert!(args.overwrite);
        assert!(args.identifiers_as_names);
    }

    #[test]
    fn test_cli_quiet_and_verbose_flags() {
        let args = Args::try_parse_from(["narc-fetch", "-x", "1", "-q"]).unwrap();
        assert!(args.quiet);

        let args = Args::try_parse_from(["narc-fetch", "-x", "1", "-vv"]).unwrap();
        assert_eq!(args.verbose, 2);
    }

    #[test]
    fn test_cli_help_flag_shows_usage() {
        let result = Args::try_parse_from(["narc-fetch", "--help"]);
        assert!(result.is_err());
        assert_eq!(
            result.unwrap_err().kind(),
            clap::error::ErrorKind::DisplayHelp
        );
    }

    #[test]
    fn test_cli_invalid_flag_returns_error() {
        let result = Args::try_parse_from(["narc-fetch", "--invalid-flag"]);
        assert!(result.is_err());
        assert_eq!(
            result.unwrap_err().kind(),
            clap::error::ErrorKind::UnknownArgument
        );
    }
}
