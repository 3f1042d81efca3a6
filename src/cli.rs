use clap::Parser;

/// Compare the composite trapezoidal rule with Romberg integration on
/// f(x) = exp(-x^2).
#[derive(Debug, Parser)]
#[command(name = "quadcomp")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Lower integration bound; prompted for when omitted
    #[arg(short = 'a', long, allow_hyphen_values = true)]
    pub lower: Option<f64>,

    /// Upper integration bound; prompted for when omitted
    #[arg(short = 'b', long, allow_hyphen_values = true)]
    pub upper: Option<f64>,

    /// JSON settings file (reference_level, max_level, decimals)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Deepest level shown in the table
    #[arg(long)]
    pub max_level: Option<usize>,

    /// Romberg level of the reference value
    #[arg(long)]
    pub reference_level: Option<usize>,

    /// Read Romberg rows from one retained table instead of recomputing them
    #[arg(long)]
    pub incremental: bool,

    /// Print the comparison as JSON; needs both bounds so stdout carries
    /// nothing but the document
    #[arg(long, requires_all = ["lower", "upper"])]
    pub json: bool,

    /// Log debug events to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_negative_bounds() {
        let cli = Cli::parse_from(["quadcomp", "-a", "-1.5", "--upper", "2", "--json"]);
        assert_eq!(cli.lower, Some(-1.5));
        assert_eq!(cli.upper, Some(2.0));
        assert!(cli.json);
        assert!(!cli.incremental);
    }

    #[test]
    fn json_output_requires_both_bounds() {
        assert!(Cli::try_parse_from(["quadcomp", "--json"]).is_err());
        assert!(Cli::try_parse_from(["quadcomp", "--json", "-a", "0"]).is_err());
        assert!(Cli::try_parse_from(["quadcomp", "--json", "-a", "0", "-b", "1"]).is_ok());
    }

    #[test]
    fn level_overrides_are_optional() {
        let cli = Cli::parse_from(["quadcomp", "--max-level", "4"]);
        assert_eq!(cli.max_level, Some(4));
        assert_eq!(cli.reference_level, None);
        assert_eq!(cli.config, None);
    }
}
