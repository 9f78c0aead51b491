use std::{path::PathBuf, str::FromStr};

use clap::{Parser, Subcommand};

use crate::{locale::Locale, output::Format};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Count item types, authors, keywords, years, languages, journals and tags in a report
    Report {
        /// HTML report exported from the reference manager
        #[arg(value_name = "INPUT")]
        input: PathBuf,
        /// Where to write the statistics; `-` for stdout
        #[arg(short, long, value_name = "OUTPUT", default_value = "-")]
        output: Destination,
        #[arg(short, long, value_enum, default_value_t)]
        format: Format,
        /// Language the report was exported in; also used for the output headings
        #[arg(short, long, value_enum, default_value_t)]
        locale: Locale,
    },
    /// Print the raw fields found in each item, one JSON object per line
    Inspect {
        #[arg(value_name = "INPUT")]
        input: PathBuf,
        #[arg(short, long, value_enum, default_value_t)]
        locale: Locale,
    },
}

#[derive(Clone, Debug, PartialEq, Eq)]
/// Where the rendered statistics go: standard output, or a file that is replaced atomically.
pub enum Destination {
    Stdout,
    File(PathBuf),
}

impl Destination {
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            Destination::Stdout => None,
            Destination::File(p) => Some(p.as_path()),
        }
    }
}

impl FromStr for Destination {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "" => Err("output path is empty".to_string()),
            "-" => Ok(Destination::Stdout),
            _ => Ok(Destination::File(PathBuf::from(s))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dash_means_stdout() {
        assert_eq!(Destination::from_str("-").unwrap(), Destination::Stdout);
        assert_eq!(Destination::Stdout.path(), None);
        assert!(Destination::from_str("  ").is_err());
    }

    #[test]
    fn anything_else_is_a_file() {
        proptest::proptest!(|(s in "[A-Za-z0-9._/-]{2,32}")| {
            let dest = Destination::from_str(&s).expect("parse");
            match dest {
                Destination::File(p) => proptest::prop_assert_eq!(p, PathBuf::from(&s)),
                Destination::Stdout => proptest::prop_assert!(false, "should be a file"),
            }
        })
    }

    #[test]
    fn report_defaults() {
        let cli = Cli::try_parse_from(["bibstat", "report", "in.html"]).expect("parse");
        match cli.command {
            Command::Report {
                input,
                output,
                format,
                locale,
            } => {
                assert_eq!(input, PathBuf::from("in.html"));
                assert_eq!(output, Destination::Stdout);
                assert_eq!(format, Format::Csv);
                assert_eq!(locale, Locale::En);
            }
            _ => panic!("expected report"),
        }
    }

    #[test]
    fn report_options() {
        let cli = Cli::try_parse_from([
            "bibstat", "report", "in.html", "-o", "out.json", "--format", "json", "--locale", "pt",
        ])
        .expect("parse");
        match cli.command {
            Command::Report {
                output,
                format,
                locale,
                ..
            } => {
                assert_eq!(output, Destination::File(PathBuf::from("out.json")));
                assert_eq!(format, Format::Json);
                assert_eq!(locale, Locale::Pt);
            }
            _ => panic!("expected report"),
        }
    }
}
