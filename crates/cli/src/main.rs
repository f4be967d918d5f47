use std::{
    fs::{self, File},
    path::{Path, PathBuf},
    sync::Mutex,
};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use folio_engine::ActiveSectionTracker;
use folio_registry::{FolioConfig, Portfolio, SectionId};
use folio_tui::{has_renderer, layout_for_terminal};
use folio_types::SectionBounds;
use folio_util::app_config_dir;
use serde::Serialize;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

const LOG_FILE_NAME: &str = "folio.log";

/// Terminal portfolio with scroll-tracked section navigation.
#[derive(Parser, Debug)]
#[command(name = "folio", version, about)]
struct Cli {
    /// Content file (JSON or YAML) rendered instead of the embedded sample
    #[arg(long, global = true)]
    content: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the registered sections in document order
    Sections {
        /// Print the registry as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the section that is active at a scroll offset
    Locate {
        /// Scroll offset in rows from the top of the document
        #[arg(long)]
        offset: u32,
        /// Terminal width used for the layout
        #[arg(long, default_value_t = 100)]
        width: u16,
        /// Terminal height used for the layout
        #[arg(long, default_value_t = 30)]
        height: u16,
        /// Rows between the viewport top and the reference point
        #[arg(long)]
        fixed_offset: Option<u32>,
        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Check that a content file loads and every section can be drawn
    Validate {
        /// Content file (JSON or YAML)
        path: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    // Config loading may warn, so the subscriber has to exist first.
    init_tracing(if cli.command.is_none() { LogTarget::File } else { LogTarget::Stderr });
    let mut config = FolioConfig::load();
    if let Some(path) = cli.content {
        config.content_path = Some(path);
    }

    let Some(command) = cli.command else {
        let portfolio = load_portfolio(&config)?;
        return folio_tui::run(portfolio, config).await;
    };

    match command {
        Command::Sections { json } => {
            let portfolio = load_portfolio(&config)?;
            println!("{}", render_sections(&portfolio, json)?);
        }
        Command::Locate {
            offset,
            width,
            height,
            fixed_offset,
            json,
        } => {
            let portfolio = load_portfolio(&config)?;
            let fixed_offset = fixed_offset.unwrap_or(config.fixed_offset);
            let report = locate(&portfolio, offset, width, height, fixed_offset);
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!("{}", report.summary());
            }
        }
        Command::Validate { path } => {
            let report = validate(&path)?;
            println!("{report}");
        }
    }
    Ok(())
}

enum LogTarget {
    Stderr,
    /// The TUI owns stdout/stderr; logs go to a file in the config dir.
    File,
}

fn init_tracing(target: LogTarget) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    let _ = match target {
        LogTarget::Stderr => builder.with_writer(std::io::stderr).try_init(),
        LogTarget::File => match open_log_file() {
            Some(file) => builder.with_ansi(false).with_writer(Mutex::new(file)).try_init(),
            None => builder.with_writer(std::io::sink).try_init(),
        },
    };
}

fn open_log_file() -> Option<File> {
    let dir = app_config_dir();
    fs::create_dir_all(&dir).ok()?;
    File::options().create(true).append(true).open(dir.join(LOG_FILE_NAME)).ok()
}

fn load_portfolio(config: &FolioConfig) -> Result<Portfolio> {
    let path = config.content_path.as_deref();
    debug!(content = ?path, "loading portfolio");
    Portfolio::load(path).with_context(|| match path {
        Some(path) => format!("failed to load content from {}", path.display()),
        None => "failed to load the embedded portfolio".to_string(),
    })
}

fn render_sections(portfolio: &Portfolio, json: bool) -> Result<String> {
    if json {
        return Ok(serde_json::to_string_pretty(portfolio.registry.as_slice())?);
    }
    let width = portfolio.registry.ids().map(|id| id.as_str().len()).max().unwrap_or(0);
    let rows: Vec<String> = portfolio
        .registry
        .iter()
        .enumerate()
        .map(|(index, section)| format!("{:>2}. {:<width$}  {}", index + 1, section.id.as_str(), section.label))
        .collect();
    Ok(rows.join("\n"))
}

/// Outcome of a headless tracker lookup.
#[derive(Debug, Serialize)]
struct LocateReport {
    offset: u32,
    reference_point: u32,
    content_height: u32,
    active_section: Option<SectionId>,
    /// Whether a section span contains the reference point.
    matched: bool,
    bounds: Option<SectionBounds>,
}

impl LocateReport {
    fn summary(&self) -> String {
        let active = self.active_section.as_ref().map_or("none", SectionId::as_str);
        if self.matched {
            active.to_string()
        } else {
            format!("{active} (reference point {} is outside every section)", self.reference_point)
        }
    }
}

fn locate(portfolio: &Portfolio, offset: u32, width: u16, height: u16, fixed_offset: u32) -> LocateReport {
    let layout = layout_for_terminal(portfolio, width, height);
    let mut tracker = ActiveSectionTracker::new(&portfolio.registry, fixed_offset);
    let _subscription = tracker.attach();
    tracker.on_scroll(offset, &layout);

    let reference_point = tracker.reference_point(offset);
    let active_section = tracker.active_section().cloned();
    let bounds = active_section.as_ref().and_then(|id| layout.bounds().get(id).copied());
    LocateReport {
        offset,
        reference_point,
        content_height: layout.content_height(),
        matched: bounds.is_some_and(|bounds| bounds.contains(reference_point)),
        active_section,
        bounds,
    }
}

fn validate(path: &Path) -> Result<String> {
    let portfolio = Portfolio::from_path(path).with_context(|| format!("{} is not valid", path.display()))?;
    let missing: Vec<&str> = portfolio
        .registry
        .ids()
        .map(SectionId::as_str)
        .filter(|id| !has_renderer(id))
        .collect();

    let mut report = format!("{}: {} sections", path.display(), portfolio.registry.len());
    if !missing.is_empty() {
        warn!(sections = ?missing, "sections without a renderer");
        report.push_str(&format!("\nnot rendered (no layout for these ids): {}", missing.join(", ")));
    }
    Ok(report)
}
