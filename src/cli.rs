//! Command line configuration and logger setup.

use std::path::PathBuf;

use clap::{ArgAction, Parser};
use color_eyre::eyre::{Report, Result};
use log::LevelFilter;

/// Command line arguments of the solver.
///
/// This structure holds everything a single run needs to know: where the maze comes from, where the
/// solved maze goes and how the result is presented.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Maze description to solve.
    #[arg(default_value = "maze.txt")]
    pub input: PathBuf,
    /// File the solved maze is written to.
    #[arg(short, long, default_value = "result.txt")]
    pub output: PathBuf,
    /// Do not print the solved maze to standard output.
    #[arg(short, long)]
    pub quiet: bool,
    /// Browse the solved maze in an interactive terminal view after saving it.
    #[arg(long)]
    pub view: bool,
    /// Raise the log level; repeat for more detail.
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Returns the log level selected by the verbosity flags.
    #[must_use]
    pub const fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}

/// Installs the global logger.
///
/// Messages at or above `level` reach standard error; a `RUST_LOG` environment variable takes
/// precedence over the level.
///
/// # Errors
///
/// Returns an error if a global logger has already been installed.
pub fn init_logging(level: LevelFilter) -> Result<()> {
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .try_init()?;

    Ok(())
}

/// Renders a fatal error as the single diagnostic line shown to the user.
///
/// Only the outermost message is kept, since the maze errors already carry their cause inline, and
/// any line breaks inside it are folded into spaces.
#[must_use]
pub fn diagnostic(report: &Report) -> String {
    let message = report
        .to_string()
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(" ");

    format!("error: {message}")
}

#[cfg(test)]
mod tests {
    use std::io;

    use super::*;
    use crate::MazeError;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::try_parse_from(["maze-astar"]).expect("no arguments are required");

        assert_eq!(cli.input, PathBuf::from("maze.txt"));
        assert_eq!(cli.output, PathBuf::from("result.txt"));
        assert!(!cli.quiet, "printing is on by default");
        assert!(!cli.view, "the viewer is off by default");
        assert_eq!(cli.log_level(), LevelFilter::Warn);
    }

    #[test]
    fn test_cli_explicit_arguments() {
        let cli = Cli::try_parse_from([
            "maze-astar",
            "labyrinth.txt",
            "--output",
            "solved.txt",
            "--quiet",
            "--view",
        ])
        .expect("arguments should parse");

        assert_eq!(cli.input, PathBuf::from("labyrinth.txt"));
        assert_eq!(cli.output, PathBuf::from("solved.txt"));
        assert!(cli.quiet, "quiet flag given");
        assert!(cli.view, "view flag given");
    }

    #[test]
    fn test_cli_verbosity_levels() {
        let level = |args: &[&str]| {
            Cli::try_parse_from(args)
                .expect("arguments should parse")
                .log_level()
        };

        assert_eq!(level(&["maze-astar", "-v"]), LevelFilter::Info);
        assert_eq!(level(&["maze-astar", "-vv"]), LevelFilter::Debug);
        assert_eq!(level(&["maze-astar", "-vvv"]), LevelFilter::Trace);
        assert_eq!(level(&["maze-astar", "-vvvvv"]), LevelFilter::Trace);
    }

    #[test]
    fn test_cli_rejects_unknown_flag() {
        assert!(
            Cli::try_parse_from(["maze-astar", "--diagonal"]).is_err(),
            "unknown flags should be rejected"
        );
    }

    #[test]
    fn test_diagnostic_is_single_line() {
        let report = Report::new(MazeError::MissingGoal);

        assert_eq!(diagnostic(&report), "error: maze has no goal cell ('3')");
    }

    #[test]
    fn test_diagnostic_keeps_io_cause_inline() {
        let report = Report::new(MazeError::Io {
            path: PathBuf::from("maze.txt"),
            source: io::Error::new(io::ErrorKind::NotFound, "no such file"),
        });

        let line = diagnostic(&report);

        assert!(!line.contains('\n'), "diagnostic should fit on one line");
        assert!(line.starts_with("error: "), "diagnostic should be labelled");
        assert!(line.contains("maze.txt") && line.contains("no such file"));
    }

    #[test]
    fn test_diagnostic_folds_line_breaks() {
        let report = Report::new(MazeError::Format("row 1 has 2 cells,\n expected 3".to_owned()));

        let line = diagnostic(&report);

        assert_eq!(line.lines().count(), 1);
        assert!(line.ends_with("row 1 has 2 cells, expected 3"));
    }
}
