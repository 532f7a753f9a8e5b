//! debbot CLI: Deb Barman's portfolio assistant in the terminal

use clap::{Parser, Subcommand};
use debbot_engine::{Config, GeminiGenerator, Panel, Profile, API_KEY_ENV};
use std::path::{Path, PathBuf};

/// Portfolio assistant chat with TUI
#[derive(Parser)]
#[command(name = "debbot")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the TUI (default when no command specified)
    Tui,

    /// Ask the assistant a single question and print the reply
    Ask {
        /// The question to ask
        question: String,

        /// Print the full transcript as JSON
        #[arg(long)]
        json: bool,
    },

    /// Initialize .debbot/ directory and config
    Init,

    /// Print configuration diagnostics
    Doctor {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

const DEBBOT_DIR: &str = ".debbot";

fn config_path() -> PathBuf {
    Path::new(DEBBOT_DIR).join("config.json")
}

/// Load config, falling back to defaults when no file exists.
fn load_config() -> Config {
    let path = config_path();
    if path.exists() {
        match Config::load(&path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Error loading {}: {e}", path.display());
                std::process::exit(1);
            }
        }
    } else {
        Config::default()
    }
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        None | Some(Commands::Tui) => {
            // Default: open TUI
            let config = load_config();
            let rt = tokio::runtime::Runtime::new().expect("Failed to create tokio runtime");
            if let Err(e) = rt.block_on(debbot_tui::run_tui(config)) {
                eprintln!("Error: {e}");
                std::process::exit(1);
            }
        }
        Some(Commands::Ask { question, json }) => {
            tracing_subscriber::fmt::init();
            let config = load_config();
            let rt = tokio::runtime::Runtime::new().expect("Failed to create tokio runtime");
            rt.block_on(cmd_ask(config, question, json));
        }
        Some(Commands::Init) => {
            cmd_init();
        }
        Some(Commands::Doctor { json }) => {
            cmd_doctor(json);
        }
    }
}

/// Drive one submission through a fresh panel and print the reply.
async fn cmd_ask(config: Config, question: String, json: bool) {
    let profile = Profile::default();
    let generator = match GeminiGenerator::new(config, &profile) {
        Ok(g) => g,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    let mut panel = Panel::new();
    panel.set_draft(question);
    if !panel.submit(&generator).await {
        eprintln!("Error: question must not be empty");
        std::process::exit(1);
    }

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(panel.transcript().messages())
                .expect("failed to serialize")
        );
        return;
    }

    let reply = panel
        .transcript()
        .last()
        .expect("transcript never empty");
    println!("{}", reply.content);
}

fn cmd_init() {
    let path = config_path();
    if path.exists() {
        println!("Config already exists at {}", path.display());
        return;
    }

    let config = Config::default();
    match config.save(&path) {
        Ok(()) => {
            println!("Created {}", path.display());
            println!("Set {API_KEY_ENV} (or add api_key to the config) to enable live replies");
        }
        Err(e) => {
            eprintln!("Failed to write config: {e}");
            std::process::exit(1);
        }
    }
}

fn cmd_doctor(json: bool) {
    let path = config_path();
    let config_exists = path.exists();
    let config = load_config();
    let api_key = config.resolve_api_key();
    let key_from_env = std::env::var(API_KEY_ENV)
        .ok()
        .is_some_and(|k| !k.trim().is_empty());

    if json {
        let output = serde_json::json!({
            "config_path": path.display().to_string(),
            "config_exists": config_exists,
            "model": config.model,
            "api_key_present": api_key.is_some(),
            "api_key_source": if key_from_env {
                "environment"
            } else if api_key.is_some() {
                "config"
            } else {
                "none"
            },
            "timeout_seconds": config.timeout_seconds,
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&output).expect("failed to serialize")
        );
        return;
    }

    println!("debbot diagnostics\n");

    if config_exists {
        println!("  Config: {}", path.display());
    } else {
        println!("  Config: not found (using defaults, run `debbot init`)");
    }
    println!("  Model: {}", config.model);
    println!("  Timeout: {}s", config.timeout_seconds);

    match (api_key.is_some(), key_from_env) {
        (true, true) => println!("  API key: set ({API_KEY_ENV})"),
        (true, false) => println!("  API key: set (config file)"),
        (false, _) => {
            println!("  API key: missing");
            println!("    The assistant will answer every question with the fallback reply.");
            println!("    Set {API_KEY_ENV} or add api_key to the config.");
        }
    }
}
