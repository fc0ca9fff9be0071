mod page;

use anyhow::{Context, Result};
use benchview_client::{ApiClient, DetailsSurface, Presenter};
use benchview_core::{BenchviewConfig, RunRecord, SuiteDetail};
use benchview_render::{render_run_details, render_suite_detail};
use clap::{Args, Parser, Subcommand};
use page::StaticPage;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "benchview")]
#[command(about = "BenchView - benchmark run and suite detail viewer", long_about = None)]
struct Cli {
    /// Benchmark API base URL (overrides config and BENCHVIEW_API_BASE)
    #[arg(long, global = true)]
    api_base: Option<String>,

    /// JSON config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Id of the modal root element
    #[arg(long, global = true)]
    modal_id: Option<String>,

    /// Id of the element that receives the rendered details
    #[arg(long, global = true)]
    content_id: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch a benchmark run and show it in a modal page
    Run {
        /// Benchmark run id
        id: u64,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Fetch a suite and show its overview and run tabs in a modal page
    Suite {
        /// Suite id
        id: u64,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Render a benchmark run JSON file without contacting the API
    RenderRun {
        /// Path to a run payload
        file: PathBuf,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Render a suite JSON file without contacting the API
    RenderSuite {
        /// Path to a suite payload
        file: PathBuf,

        #[command(flatten)]
        output: OutputArgs,
    },
}

#[derive(Args, Debug, Clone, Default)]
struct OutputArgs {
    /// Write to a file instead of stdout
    #[arg(short, long)]
    out: Option<PathBuf>,

    /// Emit only the rendered fragment, not the full modal page
    #[arg(long)]
    fragment: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new("benchview_cli=info,benchview_client=info,benchview_render=info")
        }))
        .init();

    let cli = Cli::parse();
    let config = load_config(&cli)?;

    match &cli.command {
        Commands::Run { id, output } => cmd_show_run(&config, *id, output).await?,
        Commands::Suite { id, output } => cmd_show_suite(&config, *id, output).await?,
        Commands::RenderRun { file, output } => cmd_render_run(&config, file, output)?,
        Commands::RenderSuite { file, output } => cmd_render_suite(&config, file, output)?,
    }

    Ok(())
}

fn load_config(cli: &Cli) -> Result<BenchviewConfig> {
    let mut config = match &cli.config {
        Some(path) => BenchviewConfig::from_file(path)?,
        None => BenchviewConfig::default(),
    };
    config.apply_env()?;

    if let Some(base) = &cli.api_base {
        config.api.base_url = base.clone();
    }
    if let Some(id) = &cli.modal_id {
        config.modal.modal_id = id.clone();
    }
    if let Some(id) = &cli.content_id {
        config.modal.content_id = id.clone();
    }

    tracing::debug!("Using API at {}", config.api.base_url);
    Ok(config)
}

async fn cmd_show_run(config: &BenchviewConfig, id: u64, output: &OutputArgs) -> Result<()> {
    let targets = config.modal.targets();
    let client = ApiClient::from_config(&config.api)?;
    let mut presenter = Presenter::new(client, StaticPage::new(&targets))
        .with_error_message(&config.modal.error_message);

    let outcome = presenter.show_run(id, &targets).await;
    let page = presenter.into_surface();
    outcome
        .into_result()
        .with_context(|| format!("Failed to show benchmark run {}", id))?;

    write_output(&page, &format!("Benchmark Run {}", id), output)
}

async fn cmd_show_suite(config: &BenchviewConfig, id: u64, output: &OutputArgs) -> Result<()> {
    let targets = config.modal.targets();
    let client = ApiClient::from_config(&config.api)?;
    let mut presenter = Presenter::new(client, StaticPage::new(&targets))
        .with_error_message(&config.modal.error_message);

    let outcome = presenter.show_suite(id, &targets).await;
    let page = presenter.into_surface();
    outcome
        .into_result()
        .with_context(|| format!("Failed to show suite {}", id))?;

    write_output(&page, &format!("Suite {}", id), output)
}

fn cmd_render_run(config: &BenchviewConfig, file: &Path, output: &OutputArgs) -> Result<()> {
    let run: RunRecord = read_json(file)?;
    let page = page_with(config, &render_run_details(&run))?;
    write_output(&page, &format!("Benchmark Run: {}", run.model_name), output)
}

fn cmd_render_suite(config: &BenchviewConfig, file: &Path, output: &OutputArgs) -> Result<()> {
    let detail: SuiteDetail = read_json(file)?;
    let page = page_with(config, &render_suite_detail(&detail))?;
    write_output(&page, &format!("Suite: {}", detail.suite.prompt_name), output)
}

fn read_json<T: serde::de::DeserializeOwned>(file: &Path) -> Result<T> {
    let raw = std::fs::read_to_string(file)
        .with_context(|| format!("Failed to read {}", file.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("Failed to parse {}", file.display()))
}

fn page_with(config: &BenchviewConfig, html: &str) -> Result<StaticPage> {
    let targets = config.modal.targets();
    let mut page = StaticPage::new(&targets);
    page.set_content(&targets.content_id, html)?;
    page.show_modal(&targets.modal_id)?;
    Ok(page)
}

fn write_output(page: &StaticPage, title: &str, output: &OutputArgs) -> Result<()> {
    let body = if output.fragment {
        page.content().to_string()
    } else {
        page.to_document(title)
    };

    match &output.out {
        Some(path) => {
            std::fs::write(path, body)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            tracing::info!("Wrote {}", path.display());
        }
        None => println!("{}", body),
    }
    Ok(())
}
