use std::fs;
use std::io::{self, IsTerminal, Read};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use clap_complete::generate;
use colored::Colorize;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use prompt_optimizer_core::config::{Config, OutputFormat};
use prompt_optimizer_core::{classify_with_score, extract_hints, optimize, OptimizerError, Result};

mod args;
mod output;
mod repl;

use args::{Cli, Commands, ConfigAction, PromptInput, Shell};

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(&cli);

    let base_dir = resolve_base_dir(cli.base_dir.clone());
    let config = Config::load(&base_dir).unwrap_or_else(|e| {
        eprintln!("{} {} (using defaults)", "[WARN]".yellow().bold(), e);
        Config::default()
    });
    if !config.output.color {
        colored::control::set_override(false);
    }

    let result = match cli.command {
        Some(Commands::Optimize {
            input,
            json,
            no_metadata,
            output,
        }) => handle_optimize(
            &config,
            &input,
            json,
            no_metadata || cli.quiet,
            output.as_deref(),
            cli.quiet,
        ),
        Some(Commands::Classify { input, explain }) => handle_classify(&input, explain),
        Some(Commands::Hints { input }) => handle_hints(&input),
        Some(Commands::Categories) => {
            output::print_categories();
            Ok(())
        }
        Some(Commands::Repl) => handle_repl(cli.quiet),
        Some(Commands::Config { action }) => handle_config(action, &base_dir),
        Some(Commands::Completions { shell }) => {
            handle_completions(shell);
            Ok(())
        }
        None => {
            Cli::command().print_help().ok();
            Ok(())
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            report_error(&e);
            ExitCode::from(e.exit_code() as u8)
        }
    }
}

fn init_tracing(cli: &Cli) {
    if cli.quiet {
        return;
    }

    let filter = if cli.verbose {
        "warn,prompt_optimizer_core=debug,prompt_optimizer=debug"
    } else {
        "warn"
    };
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_writer(io::stderr))
        .init();
}

fn report_error(e: &OptimizerError) {
    if e.is_validation() {
        eprintln!("{} {}", "[WARN]".yellow().bold(), e);
        if let Some(hint) = e.hint() {
            eprintln!("       {}", hint.dimmed());
        }
    } else {
        eprintln!("{} {}", "[ERROR]".red().bold(), e);
    }
}

fn handle_completions(shell: Shell) {
    let mut cmd = Cli::command();
    let shell = match shell {
        Shell::Bash => clap_complete::Shell::Bash,
        Shell::Zsh => clap_complete::Shell::Zsh,
        Shell::Fish => clap_complete::Shell::Fish,
        Shell::PowerShell => clap_complete::Shell::PowerShell,
        Shell::Elvish => clap_complete::Shell::Elvish,
    };
    generate(shell, &mut cmd, "prompt-optimizer", &mut io::stdout());
}

fn resolve_base_dir(cli_base: Option<PathBuf>) -> PathBuf {
    if let Some(base) = cli_base {
        return base;
    }

    if let Ok(base) = std::env::var("PROMPT_OPTIMIZER_BASE") {
        return PathBuf::from(base);
    }

    dirs::home_dir()
        .map(|h| h.join(".prompt-optimizer"))
        .unwrap_or_else(|| PathBuf::from(".prompt-optimizer"))
}

/// Prompt text from the argument, a file, or stdin
fn read_prompt(input: &PromptInput) -> Result<String> {
    if let Some(text) = &input.text {
        return Ok(text.clone());
    }

    if let Some(path) = &input.file {
        return Ok(fs::read_to_string(path)?);
    }

    let mut stdin = io::stdin();
    if stdin.is_terminal() {
        eprintln!("{}", "Reading prompt from stdin (Ctrl-D to finish)...".dimmed());
    }
    let mut text = String::new();
    stdin.read_to_string(&mut text)?;
    Ok(text)
}

fn handle_optimize(
    config: &Config,
    input: &PromptInput,
    json: bool,
    hide_metadata: bool,
    output_path: Option<&Path>,
    quiet: bool,
) -> Result<()> {
    let raw = read_prompt(input)?;
    let result = optimize(&raw)?;

    let format = if json {
        OutputFormat::Json
    } else {
        config.output.format
    };

    let rendered = match format {
        OutputFormat::Json => format!("{}\n", serde_json::to_string_pretty(&result)?),
        OutputFormat::Text => result.optimized.clone(),
    };

    match output_path {
        Some(path) => {
            fs::write(path, &rendered)?;
            if !quiet {
                eprintln!("{} {}", "Written:".green(), path.display());
            }
        }
        None => print!("{}", rendered),
    }

    if format == OutputFormat::Text && config.output.show_metadata && !hide_metadata {
        output::print_metadata(&result);
    }

    if !quiet {
        eprintln!("{} Prompt optimized successfully!", "[OK]".green().bold());
    }

    Ok(())
}

fn handle_classify(input: &PromptInput, explain: bool) -> Result<()> {
    let text = read_prompt(input)?;
    let result = classify_with_score(&text);

    output::print_classification(&result);
    if explain {
        output::print_explanation(&text);
    }

    Ok(())
}

fn handle_hints(input: &PromptInput) -> Result<()> {
    let text = read_prompt(input)?;
    output::print_hints(&extract_hints(&text));
    Ok(())
}

fn handle_repl(quiet: bool) -> Result<()> {
    if !quiet {
        eprintln!(
            "{}",
            "Enter a prompt, then an empty line to optimize it. :quit to exit.".dimmed()
        );
    }

    let stdin = io::stdin();
    let count = repl::run(stdin.lock(), io::stdout())?;

    if !quiet {
        eprintln!("{} {} optimized", "[OK]".green().bold(), count);
    }
    Ok(())
}

fn handle_config(action: ConfigAction, base_dir: &Path) -> Result<()> {
    match action {
        ConfigAction::Get { key } => {
            let config = Config::load(base_dir)?;
            match config.get(&key) {
                Some(value) => {
                    println!("{}", value);
                }
                None => {
                    return Err(OptimizerError::ConfigKeyNotFound { key });
                }
            }
        }
        ConfigAction::Set { key, value } => {
            let mut config = Config::load(base_dir)?;
            config.set(&key, &value)?;
            config.save(base_dir)?;
            println!("{} {} = {}", "Set:".green(), key, value);
        }
        ConfigAction::List => {
            let config = Config::load(base_dir)?;
            println!();
            for (key, value) in config.list() {
                println!("{} = {}", key.cyan(), value);
            }
            println!();
        }
        ConfigAction::Path => {
            let path = Config::path(base_dir);
            println!("{}", path.display());
        }
        ConfigAction::Init => {
            let path = Config::init(base_dir)?;
            println!("{} {}", "Initialized:".green(), path.display());
        }
    }

    Ok(())
}
