use std::{io::Write, sync::mpsc, thread};

use anyhow::{anyhow, Context, Result};
use choroselect::{
    fetch_sequence, open_boundary, open_metrics, AppConfig, AppController, BoundaryConfig, Event, HttpConfig,
    MetricQuery, MetricsConfig, Palette, RecordingEmbed,
};
use serde_json::json;
use tracing::{info, warn};

use crate::cli::StylesArgs;

/// Config file (if any) with command-line overrides applied.
fn resolve_config(args: &StylesArgs) -> Result<AppConfig> {
    let mut config = match &args.config {
        Some(path) => AppConfig::from_path(path)
            .with_context(|| format!("load config {}", path.display()))?,
        None => AppConfig {
            boundary: BoundaryConfig {
                url: args.boundary.clone().context("--boundary is required without --config")?,
            },
            metrics: MetricsConfig {
                endpoint: args.metrics.clone().context("--metrics is required without --config")?,
                query: String::new(),
                dataset: String::new(),
            },
            filter_field: args.field.clone().context("--field is required without --config")?,
            palette: Palette::default(),
            http: HttpConfig::default(),
        },
    };

    if let Some(url) = &args.boundary { config.boundary.url = url.clone() }
    if let Some(endpoint) = &args.metrics { config.metrics.endpoint = endpoint.clone() }
    if let Some(query) = &args.query { config.metrics.query = query.clone() }
    if let Some(dataset) = &args.dataset { config.metrics.dataset = dataset.clone() }
    if let Some(field) = &args.field { config.filter_field = field.clone() }

    config.validate().context("invalid session config")?;
    Ok(config)
}

pub fn run(_cli: &crate::cli::Cli, args: &StylesArgs) -> Result<()> {
    let config = resolve_config(args)?;

    let boundary = open_boundary(&config.boundary.url, &config.http)
        .with_context(|| format!("open boundary source {}", config.boundary.url))?;
    let metrics = open_metrics(&config.metrics.endpoint, &config.http)
        .with_context(|| format!("open metric source {}", config.metrics.endpoint))?;
    let query = MetricQuery::from(&config.metrics);

    let mut app = AppController::from_config(&config, RecordingEmbed::ready());

    // Fetch off the event loop; results come back as events in order.
    let session = app.begin_load();
    let (tx, rx) = mpsc::channel();
    let worker = thread::spawn(move || {
        fetch_sequence(session, &*boundary, &*metrics, &query, |event| { tx.send(event).ok(); });
    });
    for event in rx {
        app.handle(event);
    }
    worker.join().map_err(|_| anyhow!("fetch worker panicked"))?;

    if app.boundary().is_none() {
        warn!("no boundary loaded; nothing to draw");
    }

    for region in &args.clicks {
        app.handle(Event::RegionClicked(region.as_str().into()));
    }
    if args.explore { app.handle(Event::ExploreClicked) }
    if args.close { app.handle(Event::CloseClicked) }

    info!(selected = app.selection().len(), commands = app.embed().commands.len(), "session replayed");

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    for (region, style) in app.styles() {
        writeln!(out, "{}", json!({ "region": region, "style": style }))?;
    }
    writeln!(out, "{}", json!({
        "selection": app.selection().list(),
        "label": app.selection_label(),
        "explore_visible": app.explore_visible(),
        "panel_raised": app.panel_raised(),
    }))?;
    for command in &app.embed().commands {
        writeln!(out, "{}", json!({ "command": command }))?;
    }
    out.flush()?;

    Ok(())
}
