//! Configurer - local/global TOML configuration store
//!
//! Usage:
//!   configurer set local server.port 8080
//!   configurer get -a server.port
//!   configurer remove global server.port
//!   configurer init must_two_texts true

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use configurer_core::config::ConfigValue;
use configurer_core::settings::SettingsStore;
use configurer_core::types::ConfigScope;
use configurer_core::Configurer;

#[derive(Parser)]
#[command(name = "configurer")]
#[command(about = "Local/global TOML configuration store", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Set a config value
    Set {
        /// Configuration scope (local or global)
        scope: String,
        /// Dotted config name, e.g. server.port
        name: String,
        /// Value to store ("true"/"false" are stored as booleans)
        value: String,
    },

    /// Get a config value
    ///
    /// Without a scope flag, local values take precedence over global ones.
    /// The name `all` prints the whole document.
    Get {
        /// Dotted config name, e.g. server.port
        name: String,

        #[command(flatten)]
        scope: ScopeFlags,

        /// Value printed when the name is not set
        #[arg(short, long)]
        default: Option<String>,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,
    },

    /// Remove a config value
    #[command(alias = "rm")]
    Remove {
        /// Configuration scope (local or global)
        scope: String,
        /// Dotted config name, e.g. server.port
        name: String,
    },

    /// Update and persist an init setting
    ///
    /// Known settings: local_config_path, global_config_path, must_two_texts,
    /// Case-sensitive, default_config_type
    Init {
        /// Setting name
        key: String,
        /// Setting value
        value: String,
    },

    /// Print the config file path for a scope
    Path {
        #[command(flatten)]
        scope: ScopeFlags,
    },
}

#[derive(Args)]
#[group(multiple = false)]
struct ScopeFlags {
    /// Use the local (current directory) config
    #[arg(short, long)]
    local: bool,

    /// Use the global (home directory) config
    #[arg(short, long)]
    global: bool,

    /// Use local values over global values
    #[arg(short, long)]
    all: bool,
}

impl ScopeFlags {
    fn resolve(&self, fallback: ConfigScope) -> ConfigScope {
        if self.local {
            ConfigScope::Local
        } else if self.global {
            ConfigScope::Global
        } else if self.all {
            ConfigScope::All
        } else {
            fallback
        }
    }
}

#[derive(Clone, Copy, ValueEnum, Default)]
enum OutputFormat {
    /// Plain value, TOML for tables
    #[default]
    Text,
    /// Machine-readable JSON
    Json,
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "configurer=info,configurer_core=info,warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    run_cli(cli.command)
}

fn run_cli(command: Commands) -> Result<()> {
    match command {
        Commands::Set { scope, name, value } => {
            let scope = parse_write_scope(&scope)?;
            let configurer = load_configurer()?;
            configurer.set(&name, ConfigValue::from_cli_text(&value), scope)?;
            println!("✓ Set {scope} '{name}'");
        }
        Commands::Get {
            name,
            scope,
            default,
            format,
        } => {
            run_get(&name, &scope, default.as_deref(), format)?;
        }
        Commands::Remove { scope, name } => {
            let scope = parse_write_scope(&scope)?;
            let configurer = load_configurer()?;
            configurer.remove(&name, scope)?;
            println!("✓ Removed {scope} '{name}'");
        }
        Commands::Init { key, value } => {
            run_init(&key, &value)?;
        }
        Commands::Path { scope } => {
            let configurer = load_configurer()?;
            let scope = scope.resolve(configurer.default_scope());
            println!("{}", configurer.config_path(scope)?.display());
        }
    }
    Ok(())
}

/// Parse a scope argument for commands that write a single document.
fn parse_write_scope(text: &str) -> configurer_core::Result<ConfigScope> {
    text.parse::<ConfigScope>()?.require_writable()
}

fn load_configurer() -> Result<Configurer> {
    let store = SettingsStore::with_defaults()?;
    let settings = store
        .load()
        .with_context(|| format!("Failed to load init settings: {}", store.path().display()))?;
    Ok(Configurer::new(settings)?)
}

fn run_get(
    name: &str,
    scope: &ScopeFlags,
    default: Option<&str>,
    format: OutputFormat,
) -> Result<()> {
    let configurer = load_configurer()?;
    let scope = scope.resolve(ConfigScope::All);
    let default = default.map(ConfigValue::from_cli_text);

    let Some(value) = configurer.get(name, default, scope)? else {
        tracing::debug!(name, %scope, "config value not set");
        std::process::exit(1);
    };

    match format {
        OutputFormat::Text => match &value {
            ConfigValue::Mapping(doc) => print!("{}", doc.to_toml_string()?),
            other => println!("{other}"),
        },
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&value.to_json())?);
        }
    }

    Ok(())
}

fn run_init(key: &str, value: &str) -> Result<()> {
    let store = SettingsStore::with_defaults()?;
    let mut settings = store
        .load()
        .with_context(|| format!("Failed to load init settings: {}", store.path().display()))?;

    settings.init(key, value)?;
    store.save(&settings)?;

    println!("✓ Set init setting {key} = {value}");
    println!("  Saved to {}", store.path().display());
    Ok(())
}
