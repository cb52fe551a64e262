use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "apidrift",
    about = "Schema drift and migration risk between two JSON API responses",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,

    /// Request timeout in seconds for URL sources
    #[arg(long, global = true, default_value = "30")]
    pub timeout: u64,
}

#[derive(Clone, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Command {
    /// Schema diff, risk score, and line diff in one view
    Report(CompareArgs),
    /// Schema diff and risk score only
    Schema(CompareArgs),
    /// Line diff of the pretty-printed documents only
    Lines(CompareArgs),
}

/// The two documents to compare.
#[derive(Args)]
pub struct CompareArgs {
    /// Old document: file path or http(s) URL
    pub old: String,
    /// New document: file path or http(s) URL
    pub new: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_report() {
        let cli = Cli::try_parse_from(["apidrift", "report", "old.json", "new.json"]).unwrap();
        if let Command::Report(args) = cli.command {
            assert_eq!(args.old, "old.json");
            assert_eq!(args.new, "new.json");
        } else {
            panic!("wrong command");
        }
    }

    #[test]
    fn parse_schema() {
        let cli = Cli::try_parse_from(["apidrift", "schema", "a", "b"]).unwrap();
        assert!(matches!(cli.command, Command::Schema(_)));
    }

    #[test]
    fn parse_lines() {
        let cli = Cli::try_parse_from(["apidrift", "lines", "a", "b"]).unwrap();
        assert!(matches!(cli.command, Command::Lines(_)));
    }

    #[test]
    fn parse_url_sources() {
        let cli = Cli::try_parse_from([
            "apidrift",
            "schema",
            "https://api.example.com/v1",
            "https://api.example.com/v2",
        ])
        .unwrap();
        if let Command::Schema(args) = cli.command {
            assert!(args.old.starts_with("https://"));
        } else {
            panic!("wrong command");
        }
    }

    #[test]
    fn parse_json_format() {
        let cli = Cli::try_parse_from(["apidrift", "--format", "json", "report", "a", "b"]).unwrap();
        assert!(matches!(cli.format, OutputFormat::Json));
    }

    #[test]
    fn format_defaults_to_text() {
        let cli = Cli::try_parse_from(["apidrift", "report", "a", "b"]).unwrap();
        assert!(matches!(cli.format, OutputFormat::Text));
    }

    #[test]
    fn parse_timeout() {
        let cli = Cli::try_parse_from(["apidrift", "--timeout", "5", "report", "a", "b"]).unwrap();
        assert_eq!(cli.timeout, 5);
    }

    #[test]
    fn timeout_defaults_to_thirty_seconds() {
        let cli = Cli::try_parse_from(["apidrift", "report", "a", "b"]).unwrap();
        assert_eq!(cli.timeout, 30);
    }

    #[test]
    fn parse_verbose() {
        let cli = Cli::try_parse_from(["apidrift", "--verbose", "lines", "a", "b"]).unwrap();
        assert!(cli.verbose);
    }

    #[test]
    fn missing_document_is_an_error() {
        assert!(Cli::try_parse_from(["apidrift", "report", "only-one"]).is_err());
    }
}
