use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Swatch: pick a color, preview the background.
#[derive(Parser, Debug)]
#[command(name = "swatch", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log level override (a tracing filter directive, e.g. `swatch=debug`).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Seed for the candidate generator.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Number of random candidates.
    #[arg(long)]
    pub count: Option<u32>,

    /// Select a candidate by index or a custom color by hex. Repeatable.
    #[arg(short = 's', long = "select", value_name = "INDEX|HEX")]
    pub select: Vec<String>,

    /// Preview output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

pub fn parse() -> Args {
    Args::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let args = Args::parse_from(["swatch"]);
        assert!(args.config.is_none());
        assert!(args.select.is_empty());
        assert_eq!(args.format, OutputFormat::Text);
    }

    #[test]
    fn repeated_select_keeps_order() {
        let args = Args::parse_from(["swatch", "-s", "3", "--select", "#ffa500", "--format", "json"]);
        assert_eq!(args.select, ["3", "#ffa500"]);
        assert_eq!(args.format, OutputFormat::Json);
    }

    #[test]
    fn seed_and_count() {
        let args = Args::parse_from(["swatch", "--seed", "42", "--count", "4"]);
        assert_eq!(args.seed, Some(42));
        assert_eq!(args.count, Some(4));
    }
}
