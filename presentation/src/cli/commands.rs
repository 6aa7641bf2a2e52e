//! CLI command definitions

use clap::{Parser, ValueEnum};

/// Output format for quiz results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Results banners only
    #[default]
    Text,
    /// Results banners followed by a per-quiz and overall summary
    Summary,
    /// Also print every quiz report as JSON once all quizzes are done
    Json,
}

/// CLI arguments for quizrun
#[derive(Parser, Debug)]
#[command(name = "quizrun")]
#[command(author, version, about = "Interactive terminal quiz runner")]
#[command(long_about = r#"
quizrun asks the questions of one or more built-in quizzes on the terminal,
validates every answer and reports a score per quiz.

Question formats:
1. Yes/no: answer with y or n
2. Multiple choice: answer with the number of a listed choice
3. Placeholder: any answer counts

Invalid answers are rejected and the question is asked again.

Example:
  quizrun
  quizrun --quiz math
  quizrun --list
  quizrun -q biology --max-attempts 3 --output json
  quizrun --output summary
"#)]
pub struct Cli {
    /// Built-in quiz to run (can be specified multiple times; default: all)
    #[arg(short, long, value_name = "NAME")]
    pub quiz: Vec<String>,

    /// List the built-in quizzes and exit
    #[arg(long)]
    pub list: bool,

    /// Give up on a question after this many invalid answers
    #[arg(long, value_name = "N")]
    pub max_attempts: Option<u32>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub output: OutputFormat,

    /// Show a progress header before every question (on stderr)
    #[arg(long)]
    pub progress: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["quizrun"]);
        assert!(cli.quiz.is_empty());
        assert!(!cli.list);
        assert_eq!(cli.max_attempts, None);
        assert_eq!(cli.output, OutputFormat::Text);
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn test_summary_output_is_opt_in() {
        let cli = Cli::parse_from(["quizrun", "--output", "summary"]);
        assert_eq!(cli.output, OutputFormat::Summary);
    }

    #[test]
    fn test_repeated_quiz_and_flags() {
        let cli = Cli::parse_from([
            "quizrun",
            "-q",
            "math",
            "--quiz",
            "biology",
            "--max-attempts",
            "3",
            "-o",
            "json",
            "-vv",
            "--progress",
            "--no-color",
        ]);
        assert_eq!(cli.quiz, vec!["math", "biology"]);
        assert_eq!(cli.max_attempts, Some(3));
        assert_eq!(cli.output, OutputFormat::Json);
        assert_eq!(cli.verbose, 2);
        assert!(cli.progress);
        assert!(cli.no_color);
    }
}
