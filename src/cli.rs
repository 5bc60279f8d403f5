//! Command line parsing, and turning the parsed arguments into a [`Config`].

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use clap::{ArgGroup, Parser};

use crate::area::{AreaSpec, Insets, ParseAreaError, Rectangle};
use crate::error::{Error, Result};

/// Suffix of every file we write.
pub const OUTPUT_SUFFIX: &str = ".9.png";

// Area values stay strings here and get parsed in `Config::from_args`, so that a malformed value
// doesn't stop `--help` from working.
#[derive(Parser, Debug)]
#[command(
    version,
    about,
    group(
        ArgGroup::new("stretch")
            .required(true)
            .args(["stretch_insets", "stretch_rect"])
    ),
    group(ArgGroup::new("content").args(["content_insets", "content_rect"])),
)]
pub struct Args {
    /// The image to convert.
    #[arg(short, long, value_name = "PATH")]
    pub input: PathBuf,

    /// Base name of the output file, which gets `.9.png` appended. Defaults to the input path
    /// without its extension.
    #[arg(short, long, value_name = "BASENAME")]
    pub output: Option<PathBuf>,

    /// Stretchable area, as insets from the top, right, bottom and left edges.
    #[arg(short = 's', long, value_name = "T-R-B-L")]
    pub stretch_insets: Option<String>,

    /// Stretchable area, as a rectangle.
    #[arg(short = 'S', long, value_name = "X-Y-W-H")]
    pub stretch_rect: Option<String>,

    /// Content area, as insets from the top, right, bottom and left edges. Defaults to the
    /// stretchable area.
    #[arg(short = 'c', long, value_name = "T-R-B-L")]
    pub content_insets: Option<String>,

    /// Content area, as a rectangle. Defaults to the stretchable area.
    #[arg(short = 'C', long, value_name = "X-Y-W-H")]
    pub content_rect: Option<String>,

    /// Log the derived areas.
    #[arg(short, long)]
    pub verbose: bool,
}

/// Everything one conversion needs, checked and with defaults filled in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub input: PathBuf,
    pub output: PathBuf,
    pub stretch: AreaSpec,
    pub content: AreaSpec,
    pub verbose: bool,
}

fn parse_value<T>(flag: &str, value: &str) -> Result<T>
where
    T: std::str::FromStr<Err = ParseAreaError>,
{
    value
        .parse()
        .map_err(|err| Error::Usage(format!("invalid value '{value}' for '{flag}': {err}")))
}

fn area_spec(
    name: &str,
    insets: Option<String>,
    rect: Option<String>,
) -> Result<Option<AreaSpec>> {
    match (insets, rect) {
        (Some(_), Some(_)) => Err(Error::Usage(format!(
            "the {name} area can be given either as insets or as a rectangle, not both"
        ))),
        (Some(insets), None) => Ok(Some(AreaSpec::Insets(parse_value::<Insets>(
            &format!("--{name}-insets"),
            &insets,
        )?))),
        (None, Some(rect)) => Ok(Some(AreaSpec::Rect(parse_value::<Rectangle>(
            &format!("--{name}-rect"),
            &rect,
        )?))),
        (None, None) => Ok(None),
    }
}

/// `<basename>.9.png`, where the basename defaults to the input path minus its extension.
pub fn output_path(input: &Path, basename: Option<&Path>) -> PathBuf {
    let mut name: OsString = match basename {
        Some(basename) => basename.into(),
        None => input.with_extension("").into(),
    };
    name.push(OUTPUT_SUFFIX);
    name.into()
}

impl Config {
    pub fn from_args(args: Args) -> Result<Config> {
        let stretch = area_spec("stretch", args.stretch_insets, args.stretch_rect)?
            .ok_or_else(|| {
                Error::Usage("a stretchable area is required (-s or -S)".to_owned())
            })?;
        let content =
            area_spec("content", args.content_insets, args.content_rect)?.unwrap_or(stretch);

        if !args.input.is_file() {
            return Err(Error::FileNotFound(args.input));
        }

        Ok(Config {
            output: output_path(&args.input, args.output.as_deref()),
            input: args.input,
            stretch,
            content,
            verbose: args.verbose,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;
    use clap::CommandFactory;

    fn parse(args: &[&str]) -> std::result::Result<Args, clap::Error> {
        Args::try_parse_from(std::iter::once("ninepatchify").chain(args.iter().copied()))
    }

    #[test]
    fn command_is_well_formed() {
        Args::command().debug_assert();
    }

    #[test]
    fn both_stretch_forms_conflict() {
        let err = parse(&["-i", "a.png", "-s", "1-1-1-1", "-S", "0-0-1-1"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ArgumentConflict);
    }

    #[test]
    fn both_content_forms_conflict() {
        let err = parse(&[
            "-i", "a.png", "-s", "1-1-1-1", "-c", "1-1-1-1", "-C", "0-0-1-1",
        ])
        .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ArgumentConflict);
    }

    #[test]
    fn stretch_is_required() {
        let err = parse(&["-i", "a.png", "-c", "1-1-1-1"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn input_is_required() {
        let err = parse(&["-s", "1-1-1-1"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn bad_values_and_flags() {
        let args = parse(&["-i", "a.png", "-s", "1-1-1"]).unwrap();
        let err = Config::from_args(args).unwrap_err();
        assert!(err.wants_usage());
        assert_eq!(
            err.to_string(),
            "invalid value '1-1-1' for '--stretch-insets': \
             expected four numbers separated by '-', got 3 part(s)"
        );

        let args = parse(&["-i", "a.png", "-s", "1-1-1-1", "-C", "0-0-x-1"]).unwrap();
        let err = Config::from_args(args).unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid value '0-0-x-1' for '--content-rect': 'x' is not a non-negative integer"
        );

        let err = parse(&["-i", "a.png", "-s", "1-1-1-1", "-x"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownArgument);

        let err = parse(&["-i", "a.png", "-s"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidValue);
    }

    #[test]
    fn help_short_circuits() {
        // No input and no stretchable area, but help wins.
        let err = parse(&["-h"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DisplayHelp);

        // Malformed area values are only checked later.
        let err = parse(&["-s", "1-1", "-h"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DisplayHelp);
    }

    #[test]
    fn content_defaults_to_stretch_spec() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("button.png");
        std::fs::write(&input, b"").unwrap();

        let args = parse(&["-i", input.to_str().unwrap(), "-S", "1-2-3-4", "-v"]).unwrap();
        let config = Config::from_args(args).unwrap();
        let spec = AreaSpec::Rect(Rectangle {
            x: 1,
            y: 2,
            width: 3,
            height: 4,
        });
        assert_eq!(config.stretch, spec);
        assert_eq!(config.content, spec);
        assert_eq!(config.output, dir.path().join("button.9.png"));
        assert!(config.verbose);
    }

    #[test]
    fn missing_input_file() {
        let args = parse(&["-i", "definitely/not/here.png", "-s", "1-1-1-1"]).unwrap();
        let err = Config::from_args(args).unwrap_err();
        assert!(matches!(err, Error::FileNotFound(path) if path == Path::new("definitely/not/here.png")));
    }

    #[test]
    fn conflicts_are_usage_errors_without_clap() {
        let args = Args {
            input: "a.png".into(),
            output: None,
            stretch_insets: Some("1-1-1-1".to_owned()),
            stretch_rect: Some("0-0-1-1".to_owned()),
            content_insets: None,
            content_rect: None,
            verbose: false,
        };
        assert!(Config::from_args(args).unwrap_err().wants_usage());

        let args = Args {
            input: "a.png".into(),
            output: None,
            stretch_insets: None,
            stretch_rect: None,
            content_insets: None,
            content_rect: None,
            verbose: false,
        };
        assert!(Config::from_args(args).unwrap_err().wants_usage());
    }

    #[test]
    fn output_names() {
        assert_eq!(
            output_path(Path::new("img/button.png"), None),
            PathBuf::from("img/button.9.png")
        );
        assert_eq!(
            output_path(Path::new("button"), None),
            PathBuf::from("button.9.png")
        );
        assert_eq!(
            output_path(Path::new("img/button.png"), Some(Path::new("out/panel"))),
            PathBuf::from("out/panel.9.png")
        );
    }
}
