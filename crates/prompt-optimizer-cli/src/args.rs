use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "prompt-optimizer")]
#[command(about = "Turn rough prompts into structured instruction documents")]
#[command(version)]
pub struct Cli {
    /// Verbose output (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Quiet output (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Base directory (default: ~/.prompt-optimizer)
    #[arg(long, global = true)]
    pub base_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
#[allow(clippy::enum_variant_names)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

/// Where the prompt text comes from
#[derive(Args, Debug)]
pub struct PromptInput {
    /// Prompt text (reads stdin when neither TEXT nor --file is given)
    pub text: Option<String>,

    /// Read the prompt from a file
    #[arg(short, long, conflicts_with = "text")]
    pub file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Optimize a prompt into a structured document
    Optimize {
        #[command(flatten)]
        input: PromptInput,

        /// Print the full result as JSON
        #[arg(long)]
        json: bool,

        /// Don't print the length/hint summary
        #[arg(long)]
        no_metadata: bool,

        /// Write the document to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show the detected task category
    Classify {
        #[command(flatten)]
        input: PromptInput,

        /// Show per-category scores and matched keywords
        #[arg(long)]
        explain: bool,
    },

    /// Show detected structural hints (length, tone, format, example)
    Hints {
        #[command(flatten)]
        input: PromptInput,
    },

    /// List the task categories and their keywords
    Categories,

    /// Optimize prompts interactively (empty line submits, :quit exits)
    Repl,

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Get a config value
    Get {
        /// Config key (e.g., output.format)
        key: String,
    },

    /// Set a config value
    Set {
        /// Config key (e.g., output.format)
        key: String,
        /// Value to set
        value: String,
    },

    /// List all config values
    List,

    /// Show config file path
    Path,

    /// Create config file with defaults
    Init,
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
    fn test_parse_optimize_with_text() {
        let cli = Cli::parse_from(["prompt-optimizer", "optimize", "write a poem", "--json"]);
        match cli.command {
            Some(Commands::Optimize { input, json, .. }) => {
                assert_eq!(input.text.as_deref(), Some("write a poem"));
                assert!(json);
            }
            _ => panic!("expected optimize"),
        }
    }

    #[test]
    fn test_text_and_file_conflict() {
        let result = Cli::try_parse_from([
            "prompt-optimizer",
            "classify",
            "some text",
            "--file",
            "prompt.txt",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::parse_from(["prompt-optimizer", "categories", "-v"]);
        assert!(cli.verbose);
    }
}
