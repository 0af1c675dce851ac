// Copyright (c) 2025 Lanai Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Lanai - Main entrypoint.
//!
//! Loads configuration, initializes logging, and runs trie queries against
//! the configured dictionary.

use std::path::{Path, PathBuf};
use std::process;

use anyhow::{ensure, Context};
use clap::{Parser, Subcommand};
use lanai_lib::config::{ConfigLoader, LanaiConfig, LogConfig, ENV_PREFIX};
use lanai_lib::error::{LanaiError, LanaiResult};
use lanai_lib::{LongestCommonPrefixFinder, SuffixCounter, Trie};
use serde::Serialize;
use tracing::info;
use tracing_error::ErrorLayer;
use tracing_subscriber::{fmt, layer::SubscriberExt, EnvFilter, Layer};

/// Command line arguments for Lanai.
#[derive(Parser, Debug)]
#[clap(name = "Lanai", version, author, about)]
struct Args {
    /// Path to configuration file
    #[clap(short, long, value_parser)]
    config: Option<PathBuf>,

    /// Command to execute
    #[clap(subcommand)]
    command: Option<Command>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Command {
    /// Run the reference scenarios and check their results
    Demo,

    /// Print the payload stored for a dictionary word
    Lookup {
        /// Word to look up
        word: String,
    },

    /// Check whether any dictionary word starts with a prefix
    HasPrefix {
        /// Prefix to check
        prefix: String,
    },

    /// Count dictionary words ending with a pattern
    CountSuffix {
        /// Suffix pattern
        pattern: String,
    },

    /// Print every dictionary word with its payload as JSON
    Words,

    /// Longest common prefix of a JSON array of strings
    Lcp {
        /// JSON value, e.g. '["flower","flow","flight"]'
        strings: String,
    },

    /// Validate the configuration file
    Validate,

    /// Generate a default configuration file
    GenConfig {
        /// Path to output configuration file
        #[clap(short, long, value_parser)]
        output: PathBuf,
    },
}

/// One stored word, as printed by the `words` subcommand.
#[derive(Serialize)]
struct WordEntry<'a> {
    word: String,
    value: &'a usize,
}

/// Initialize the logging system.
///
/// `RUST_LOG` takes precedence over the configured level. Logs go to stderr,
/// query results to stdout.
fn init_logging(log: &LogConfig) -> LanaiResult<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&log.level))
        .map_err(|e| LanaiError::Custom(format!("Invalid log filter: {e}")))?;

    let fmt_layer = if log.json {
        fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .with_file(log.source_location)
            .with_line_number(log.source_location)
            .boxed()
    } else {
        fmt::layer()
            .pretty()
            .with_writer(std::io::stderr)
            .with_file(log.source_location)
            .with_line_number(log.source_location)
            .with_thread_names(true)
            .boxed()
    };

    let subscriber = tracing_subscriber::registry()
        .with(fmt_layer)
        .with(filter)
        .with(ErrorLayer::default());

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| LanaiError::Custom(format!("Failed to set global tracing subscriber: {e}")))
}

/// Runs the reference scenarios, failing on the first mismatch.
fn run_demo() -> anyhow::Result<()> {
    info!("Starting trie demo");

    let trie: Trie<usize> = ["apple", "application", "banana", "cat"]
        .into_iter()
        .enumerate()
        .map(|(i, w)| (w, i))
        .collect();
    let counter = SuffixCounter::new(&trie);

    for (pattern, expected) in [("e", 1), ("ion", 1), ("a", 1), ("at", 1)] {
        let count = counter.count_words_with_suffix(pattern);
        info!(pattern, count, "Suffix count");
        ensure!(count == expected, "suffix {pattern:?}: expected {expected}, got {count}");
    }

    for (prefix, expected) in [("app", true), ("bat", false), ("ban", true), ("ca", true)] {
        let found = trie.has_prefix(prefix);
        info!(prefix, found, "Prefix check");
        ensure!(found == expected, "prefix {prefix:?}: expected {expected}, got {found}");
    }

    let finder = LongestCommonPrefixFinder::new();
    let batches = [
        (serde_json::json!(["flower", "flow", "flight"]), "fl"),
        (serde_json::json!(["interspecies", "interstellar", "interstate"]), "inters"),
        (serde_json::json!(["dog", "racecar", "car"]), ""),
        (serde_json::json!([]), ""),
        (serde_json::Value::Null, ""),
        (serde_json::json!(["abc", 123, "abd"]), ""),
    ];
    for (strings, expected) in &batches {
        let prefix = finder.find_longest_common_prefix_value(strings);
        info!(%strings, %prefix, "Longest common prefix");
        ensure!(
            prefix == *expected,
            "lcp {strings}: expected {expected:?}, got {prefix:?}"
        );
    }

    info!("All demo scenarios passed");
    Ok(())
}

/// Writes the default configuration as TOML.
fn gen_config(output: &Path) -> anyhow::Result<()> {
    info!("Generating default configuration");
    let toml = LanaiConfig::default().to_toml()?;

    // Create parent directories if they don't exist
    if let Some(parent) = output.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("creating {}", parent.display()))?;
    }

    std::fs::write(output, toml).with_context(|| format!("writing {}", output.display()))?;
    info!("Default configuration written to {:?}", output);
    Ok(())
}

/// Loads the configuration and brings up logging, exiting on a bad config.
///
/// Logging comes up before the error is reported, using defaults if needed.
fn load_config(loader: &ConfigLoader) -> anyhow::Result<LanaiConfig> {
    let loaded = loader.load();

    let default_log = LogConfig::default();
    init_logging(loaded.as_ref().map_or(&default_log, |config| &config.log))?;

    match loaded {
        Ok(config) => Ok(config),
        Err(e) => {
            tracing::error!("Configuration error: {}", e);
            process::exit(1);
        }
    }
}

/// Main entry point for the application.
fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let loader = ConfigLoader::new(args.config.as_deref(), ENV_PREFIX);

    match args.command.unwrap_or(Command::Demo) {
        Command::Demo => {
            load_config(&loader)?;
            run_demo()
        }
        Command::Lookup { word } => {
            let trie = load_config(&loader)?.dictionary.build_trie();
            match trie.lookup(&word) {
                Some(value) => println!("{value}"),
                None => println!("not found"),
            }
            Ok(())
        }
        Command::HasPrefix { prefix } => {
            let trie = load_config(&loader)?.dictionary.build_trie();
            println!("{}", trie.has_prefix(&prefix));
            Ok(())
        }
        Command::CountSuffix { pattern } => {
            let trie = load_config(&loader)?.dictionary.build_trie();
            println!("{}", SuffixCounter::new(&trie).count_words_with_suffix(&pattern));
            Ok(())
        }
        Command::Words => {
            let trie = load_config(&loader)?.dictionary.build_trie();
            let mut entries: Vec<WordEntry<'_>> = trie
                .enumerate()
                .map(|(word, value)| WordEntry { word, value })
                .collect();
            entries.sort_by_key(|entry| *entry.value);
            println!("{}", serde_json::to_string_pretty(&entries)?);
            Ok(())
        }
        Command::Lcp { strings } => {
            load_config(&loader)?;
            let strings: serde_json::Value =
                serde_json::from_str(&strings).context("parsing lcp input as JSON")?;
            println!(
                "{}",
                LongestCommonPrefixFinder::new().find_longest_common_prefix_value(&strings)
            );
            Ok(())
        }
        Command::Validate => {
            load_config(&loader)?;
            info!("Configuration validated successfully");
            Ok(())
        }
        Command::GenConfig { output } => {
            init_logging(&LogConfig::default())?;
            gen_config(&output)
        }
    }
}
