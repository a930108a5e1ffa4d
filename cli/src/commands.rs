use std::collections::HashMap;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use gauge_core::render::FixedStatistics;
use gauge_core::{
    ConfigError, GaugeSettings, RenderContext, compose_style, load_raw_config,
    load_state_snapshot, normalize, resolve_gauge,
};
use gauge_types::{CssColor, TextStyle};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CommandError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("failed to read statistics from {path}")]
    ReadStatistics {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse statistics in {path}")]
    ParseStatistics {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to encode output")]
    Encode(#[source] serde_json::Error),
}

/// Error message followed by each of its sources
pub fn error_chain(err: &dyn std::error::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}

pub fn show_normalized(config: &Path) -> Result<(), CommandError> {
    let settings = GaugeSettings::load()?;
    let raw = load_raw_config(config)?;

    let resolved = normalize(&raw, &settings.theme);
    tracing::debug!(entities = resolved.entities.len(), "Config normalized");
    print_json(&resolved)
}

pub fn show_render_plan(
    config: &Path,
    states: &Path,
    statistics: Option<&Path>,
    now: Option<DateTime<Utc>>,
) -> Result<(), CommandError> {
    let settings = GaugeSettings::load()?;
    let raw = load_raw_config(config)?;
    let snapshot = load_state_snapshot(states)?;
    let provider = statistics.map(load_statistics).transpose()?;

    let resolved = normalize(&raw, &settings.theme);

    let mut ctx = RenderContext::new(&snapshot, &settings.theme);
    if let Some(provider) = &provider {
        ctx = ctx.with_statistics(provider);
    }
    if let Some(now) = now {
        ctx = ctx.at(now);
    }

    let render = resolve_gauge(&resolved, &ctx);
    print_json(&render)
}

pub fn show_style(flags: &[TextStyle], color: Option<&str>, css: bool) -> Result<(), CommandError> {
    let base = color.map(CssColor::from);
    let style = compose_style(flags, base.as_ref());

    if css {
        println!("{}", style.to_css());
        Ok(())
    } else {
        print_json(&style)
    }
}

pub fn show_theme() -> Result<(), CommandError> {
    let settings = GaugeSettings::load()?;
    for (name, value) in settings.theme.iter() {
        println!("--{name}: {value}");
    }
    Ok(())
}

pub fn set_theme_variable(name: &str, value: &str) -> Result<(), CommandError> {
    let mut settings = GaugeSettings::load()?;
    settings.set_theme_variable(name, value);
    settings.save()?;
    tracing::info!(name, value, "Theme variable saved");
    Ok(())
}

pub fn reset_theme() -> Result<(), CommandError> {
    GaugeSettings::default().save()?;
    Ok(())
}

fn load_statistics(path: &Path) -> Result<FixedStatistics, CommandError> {
    let content = std::fs::read_to_string(path).map_err(|source| CommandError::ReadStatistics {
        path: path.to_path_buf(),
        source,
    })?;
    let baselines: HashMap<String, f64> =
        serde_json::from_str(&content).map_err(|source| CommandError::ParseStatistics {
            path: path.to_path_buf(),
            source,
        })?;
    Ok(baselines.into_iter().collect())
}

fn print_json(value: &impl Serialize) -> Result<(), CommandError> {
    let text = serde_json::to_string_pretty(value).map_err(CommandError::Encode)?;
    println!("{text}");
    Ok(())
}
