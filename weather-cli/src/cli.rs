use anyhow::{Context, bail};
use clap::{Parser, Subcommand};
use inquire::{CustomType, Select, Text};
use weatherwise_core::{
    Config, EndpointId, LookupProvider, ViewState,
    config::BASE_URL_ENV,
    info::SITE_INFO,
    provider::provider_from_config,
    run_lookup,
};

use crate::render::{render_info, render_view};

/// Terminal width in columns at or below which output is compact.
const DEFAULT_TERMINAL_BREAKPOINT: u32 = 100;
const DEFAULT_TERMINAL_WIDTH: u32 = 80;
const NO_RESULT_NOTICE: &str = "Look up a location first.";

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weatherwise", version, about = "Weather Wise: current conditions for a location")]
pub struct Cli {
    /// Log requests and responses to stderr.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Layout width in columns; defaults to $COLUMNS.
    #[arg(long, global = true)]
    pub width: Option<u32>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Choose the lookup endpoint and display settings.
    Configure,

    /// Show current weather for a location.
    Show {
        /// Location name, e.g. "Dublin".
        location: String,
    },

    /// Look up a location, then request its weekly forecast (not available yet).
    Forecast {
        /// Location name, e.g. "Dublin".
        location: String,
    },

    /// Show site information and credits.
    Info,

    /// Prompt for locations until `:quit`.
    Interactive,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        let mut config = Config::load()?;
        config.apply_env_override(std::env::var(BASE_URL_ENV).ok());
        tracing::debug!(?config, "configuration loaded");

        let mut view = ViewState::new(config.breakpoint_or(DEFAULT_TERMINAL_BREAKPOINT));
        view.resize(self.width.unwrap_or_else(terminal_width));

        tracing::debug!(command = ?self.command, layout = ?view.layout(), "dispatching command");
        match self.command {
            Command::Configure => configure(config)?,
            Command::Show { location } => {
                let provider = provider_from_config(&config)?;
                view.set_query(location);
                let found = run_lookup(&mut view, provider.as_ref()).await;
                print!("{}", render_view(&view));
                if !found {
                    bail!("lookup did not return weather");
                }
            }
            Command::Forecast { location } => {
                let provider = provider_from_config(&config)?;
                view.set_query(location);
                let found = run_lookup(&mut view, provider.as_ref()).await;
                print!("{}", render_view(&view));
                if !found {
                    bail!("lookup did not return weather");
                }
                if let Some(notice) = weekly_forecast_notice(&view) {
                    bail!(notice);
                }
            }
            Command::Info => {
                view.toggle_info();
                print!("{}", render_info(&SITE_INFO, view.layout()));
            }
            Command::Interactive => {
                let provider = provider_from_config(&config)?;
                interactive(&mut view, provider.as_ref()).await?;
            }
        }

        Ok(())
    }
}

async fn interactive(view: &mut ViewState, provider: &dyn LookupProvider) -> anyhow::Result<()> {
    println!("Type a location, or :info, :forecast, :quit.");

    loop {
        let line = Text::new("Location:")
            .with_initial_value(view.query())
            .prompt()
            .context("Failed to read location")?;

        match line.trim() {
            ":quit" | ":q" => break,
            ":info" => {
                if view.toggle_info() {
                    print!("{}", render_info(&SITE_INFO, view.layout()));
                }
            }
            ":forecast" => {
                if let Some(notice) = weekly_forecast_notice(view) {
                    println!("{notice}");
                }
            }
            _ => {
                view.set_query(line);
                run_lookup(view, provider).await;
                print!("{}", render_view(view));
            }
        }
    }

    Ok(())
}

/// Message for a weekly forecast request, or `None` when it succeeded.
fn weekly_forecast_notice(view: &ViewState) -> Option<String> {
    if !view.weekly_forecast_offered() {
        return Some(NO_RESULT_NOTICE.to_string());
    }
    view.weekly_forecast().err().map(|err| err.user_message())
}

fn configure(mut config: Config) -> anyhow::Result<()> {
    let current = config.endpoint_id().unwrap_or_default();
    let start = EndpointId::all().iter().position(|id| *id == current).unwrap_or(0);

    let endpoint = Select::new("Lookup endpoint:", EndpointId::all().to_vec())
        .with_starting_cursor(start)
        .prompt()
        .context("Failed to read endpoint")?;
    config.set_endpoint(endpoint);

    let base_url = Text::new("Base URL override (empty for none):")
        .with_initial_value(config.base_url.as_deref().unwrap_or_default())
        .prompt()
        .context("Failed to read base URL")?;
    config.base_url = Some(base_url.trim().to_string()).filter(|s| !s.is_empty());

    config.breakpoint = Some(
        CustomType::<u32>::new("Compact layout at or below width (columns):")
            .with_default(config.breakpoint_or(DEFAULT_TERMINAL_BREAKPOINT))
            .prompt()
            .context("Failed to read breakpoint")?,
    );

    let timeout = CustomType::<u64>::new("Request timeout in seconds (0 for none):")
        .with_default(config.timeout_secs.unwrap_or(0))
        .prompt()
        .context("Failed to read timeout")?;
    config.timeout_secs = Some(timeout).filter(|t| *t > 0);

    config.resolved_base_url()?;
    config.save()?;

    println!("Saved configuration to {}", Config::config_file_path()?.display());
    Ok(())
}

fn terminal_width() -> u32 {
    parse_width(std::env::var("COLUMNS").ok().as_deref())
}

fn parse_width(value: Option<&str>) -> u32 {
    value
        .and_then(|v| v.trim().parse().ok())
        .filter(|w| *w > 0)
        .unwrap_or(DEFAULT_TERMINAL_WIDTH)
}
