use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "iconset",
    about = "Resolve icon sources per platform, write generated favicon artifacts, and inject their HTML tags.",
    version
)]
pub struct Cli {
    /// Print compiled operator.json and exit.
    #[arg(long, global = true)]
    pub describe: bool,

    /// Increase log verbosity on stderr (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate and write all artifacts, then print the build summary.
    Build {
        /// Source references used for every platform (overrides config input).
        sources: Vec<String>,

        /// Config file (default: $ICONSET_CONFIG or ./iconset.toml).
        #[arg(long)]
        config: Option<PathBuf>,

        /// Output root (overrides outDir).
        #[arg(long)]
        out: Option<PathBuf>,

        /// Subdirectory under the output root (overrides path).
        #[arg(long)]
        path: Option<String>,

        /// Output as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Print the resolved per-platform source mapping as JSON.
    Resolve {
        /// Source references used for every platform (overrides config input).
        sources: Vec<String>,

        /// Config file (default: $ICONSET_CONFIG or ./iconset.toml).
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Insert generated tags before </head> of an HTML document.
    Inject {
        /// HTML document to transform.
        html: PathBuf,

        /// Source references used for every platform (overrides config input).
        sources: Vec<String>,

        /// Config file (default: $ICONSET_CONFIG or ./iconset.toml).
        #[arg(long)]
        config: Option<PathBuf>,

        /// Single-line tag block.
        #[arg(long, conflicts_with = "expanded")]
        compact: bool,

        /// Commented, multi-line tag block.
        #[arg(long)]
        expanded: bool,

        /// Write the result back to the document instead of stdout.
        #[arg(long)]
        write: bool,
    },

    /// Normalize a destination path (or URL) and print it.
    Normalize {
        /// Raw path; absent normalizes to the root.
        raw: Option<String>,

        /// Treat an absolute URL as its path component.
        #[arg(long)]
        url: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_build_overrides() {
        let cli = Cli::try_parse_from([
            "iconset", "-vv", "build", "a.svg", "b.png", "--out", "site", "--path", "icons",
            "--json",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);
        match cli.command {
            Some(Command::Build {
                sources,
                out,
                path,
                json,
                config,
            }) => {
                assert_eq!(sources, vec!["a.svg", "b.png"]);
                assert_eq!(out, Some(PathBuf::from("site")));
                assert_eq!(path.as_deref(), Some("icons"));
                assert!(json);
                assert!(config.is_none());
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn compact_and_expanded_conflict() {
        let result = Cli::try_parse_from([
            "iconset",
            "inject",
            "index.html",
            "--compact",
            "--expanded",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn describe_needs_no_command() {
        let cli = Cli::try_parse_from(["iconset", "--describe"]).unwrap();
        assert!(cli.describe);
        assert!(cli.command.is_none());
    }
}
