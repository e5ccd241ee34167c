use std::path::{Path, PathBuf};
use std::process;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use wordlens_core::analyze::{analyze_word, build_report};
use wordlens_core::classify::LetterClassifier;
use wordlens_core::config::Config;
use wordlens_core::types::OutputFormat;
use wordlens_core::wordlist;

use wordlens_report::{json, markdown, text};

#[derive(Parser)]
#[command(name = "wordlens")]
#[command(about = "Analyze words: letter classification and palindrome checking")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze words and print a full report
    Analyze {
        /// Words to analyze
        words: Vec<String>,
        /// Read words from a file instead (one per line)
        #[arg(long, conflicts_with = "words")]
        file: Option<PathBuf>,
        /// Output format: text, json, or markdown
        #[arg(short, long)]
        format: Option<String>,
        /// Config file path (defaults to .wordlens.toml discovery)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// Count vowels and consonants in a single word
    Classify {
        /// The word to classify
        word: String,
        /// Config file path
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// Check a word and exit with code 0 (palindrome) or 1 (not)
    Check {
        /// The word to check
        word: String,
        /// Output format: text, json, or markdown
        #[arg(short, long)]
        format: Option<String>,
        /// Config file path
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// Create a default .wordlens.toml configuration file
    Init {
        /// Overwrite existing config
        #[arg(long)]
        force: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Analyze {
            words,
            file,
            format,
            config,
        } => cmd_analyze(&words, file.as_deref(), format.as_deref(), config.as_deref()),
        Commands::Classify { word, config } => cmd_classify(&word, config.as_deref()),
        Commands::Check {
            word,
            format,
            config,
        } => cmd_check(&word, format.as_deref(), config.as_deref()),
        Commands::Init { force } => cmd_init(force),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(2);
    }
}

fn cmd_analyze(
    words: &[String],
    file: Option<&Path>,
    format: Option<&str>,
    config_path: Option<&Path>,
) -> Result<()> {
    let config = load_config(config_path)?;
    let format = resolve_format(format, &config)?;
    apply_color(&config);

    let words: Vec<String> = match file {
        Some(path) => wordlist::read_words(path)?,
        None => words.to_vec(),
    };
    if words.is_empty() {
        anyhow::bail!("no words to analyze. Pass words as arguments or use --file");
    }

    let classifier = LetterClassifier::new(&config.letters);
    let report = build_report(&classifier, &words);

    let rendered = match format {
        OutputFormat::Text => text::format_report(&report),
        OutputFormat::Json => json::format_report(&report, false),
        OutputFormat::Markdown => markdown::format_report(&report),
    };
    print!("{rendered}");
    if format == OutputFormat::Json {
        println!();
    }
    Ok(())
}

fn cmd_classify(word: &str, config_path: Option<&Path>) -> Result<()> {
    let config = load_config(config_path)?;
    let classifier = LetterClassifier::new(&config.letters);
    let counts = classifier.count_letters(word);
    println!(
        "Word '{word}' has {} vowels and {} consonants",
        counts.vowels, counts.consonants
    );
    Ok(())
}

fn cmd_check(word: &str, format: Option<&str>, config_path: Option<&Path>) -> Result<()> {
    let config = load_config(config_path)?;
    let format = resolve_format(format, &config)?;
    apply_color(&config);

    let classifier = LetterClassifier::new(&config.letters);
    let analysis = analyze_word(&classifier, word);

    let (rendered, passed) = match format {
        OutputFormat::Text => text::format_check(&analysis),
        OutputFormat::Json => json::format_check(&analysis, false),
        OutputFormat::Markdown => markdown::format_check(&analysis),
    };
    print!("{rendered}");
    if format == OutputFormat::Json {
        println!();
    }
    if !passed {
        process::exit(1);
    }
    Ok(())
}

fn cmd_init(force: bool) -> Result<()> {
    let target = PathBuf::from(".wordlens.toml");
    if target.exists() && !force {
        anyhow::bail!(".wordlens.toml already exists. Use --force to overwrite.");
    }
    std::fs::write(&target, Config::default_toml())
        .context("failed to write .wordlens.toml")?;
    println!("Created .wordlens.toml with default configuration.");
    Ok(())
}

fn load_config(config_path: Option<&Path>) -> Result<Config> {
    match config_path {
        Some(p) => Ok(Config::load(p)?),
        None => Ok(Config::load_or_default(Path::new("."))),
    }
}

/// CLI flag wins over the config file default.
fn resolve_format(flag: Option<&str>, config: &Config) -> Result<OutputFormat> {
    match flag {
        Some(s) => s.parse(),
        None => Ok(config.output.format),
    }
}

fn apply_color(config: &Config) {
    if !config.output.color {
        colored::control::set_override(false);
    }
}
