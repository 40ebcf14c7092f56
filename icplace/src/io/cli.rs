use std::path::PathBuf;

use clap::Parser;
use log::LevelFilter;

use crate::policy::DecisionMakerKind;

#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Placement request (JSON) with a `TopLayer` and/or `BottomLayer`
    #[arg(short, long, value_name = "FILE")]
    pub input_file: PathBuf,
    /// Folder the solution json and svgs are written to, created if missing
    #[arg(short, long, value_name = "FOLDER")]
    pub solution_folder: PathBuf,
    /// Placement config (JSON), defaults are used if absent
    #[arg(short, long, value_name = "FILE")]
    pub config_file: Option<PathBuf>,
    /// Maximum log level
    #[arg(
        short,
        long,
        value_name = "[off, error, warn, info, debug, trace]",
        default_value = "info"
    )]
    pub log_level: LevelFilter,
    /// Overrides the decision maker of the config
    #[arg(short, long, value_enum)]
    pub decision_maker: Option<DecisionMakerKind>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_all_arguments() {
        let cli = Cli::try_parse_from([
            "icplace", "-i", "req.json", "-s", "out", "-c", "cfg.json", "-l", "debug", "-d", "greedy",
        ])
        .unwrap();
        assert_eq!(cli.input_file, PathBuf::from("req.json"));
        assert_eq!(cli.solution_folder, PathBuf::from("out"));
        assert_eq!(cli.config_file, Some(PathBuf::from("cfg.json")));
        assert_eq!(cli.log_level, LevelFilter::Debug);
        assert_eq!(cli.decision_maker, Some(DecisionMakerKind::Greedy));
    }

    #[test]
    fn optional_arguments_default() {
        let cli = Cli::try_parse_from(["icplace", "--input-file", "req.json", "--solution-folder", "out"]).unwrap();
        assert_eq!(cli.config_file, None);
        assert_eq!(cli.log_level, LevelFilter::Info);
        assert_eq!(cli.decision_maker, None);
    }
}
