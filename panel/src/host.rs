use std::{io::ErrorKind, path::Path, sync::Arc};

use anyhow::Context;
use tokio::{
    io::{AsyncBufReadExt, BufReader},
    sync::Mutex,
};
use tracing::{info, warn};

use panel_common::{Input, PanelConfig};

use crate::{
    app::Panel,
    console::{ConsoleAction, ConsoleView, Page, HELP},
};

pub async fn run() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let config = load_config().await;
    info!("panel connected to {}", config.base_url);

    let view = Arc::new(Mutex::new(ConsoleView::new(Page::Ac)));
    let panel = Panel::new(&config, view.clone()).context("failed to build http client")?;
    let _poll = panel.start().await;

    println!("{HELP}");
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines
        .next_line()
        .await
        .context("failed to read console input")?
    {
        if line.trim().is_empty() {
            continue;
        }

        let action = match line.parse::<ConsoleAction>() {
            Ok(action) => action,
            Err(err) => {
                println!("{err}");
                continue;
            }
        };

        match action {
            ConsoleAction::Send(command) => {
                panel.spawn_send(command);
            }
            ConsoleAction::SetTimerFromInput => {
                panel.ac_set_timer().await;
            }
            ConsoleAction::TypeMins(value) => {
                if !view.lock().await.type_into(Input::Mins, &value) {
                    println!("no minutes field on this page");
                }
            }
            ConsoleAction::Toast(text) => {
                panel.toast(&text).await;
            }
            ConsoleAction::Navigate(page) => {
                view.lock().await.navigate(page);
                info!("showing {page:?} page");
            }
            ConsoleAction::Show => println!("{}", view.lock().await.snapshot()),
            ConsoleAction::Help => println!("{HELP}"),
            ConsoleAction::Quit => break,
        }
    }

    Ok(())
}

async fn load_config() -> PanelConfig {
    load_config_from(|key| std::env::var(key).ok()).await
}

/// Config file first, then env overrides, then `sanitize()`. An unreadable or
/// malformed file falls back to defaults.
async fn load_config_from(env: impl Fn(&str) -> Option<String>) -> PanelConfig {
    let mut config = match env("PANEL_CONFIG") {
        Some(path) => read_config_file(Path::new(&path))
            .await
            .unwrap_or_else(|err| {
                warn!("failed to load panel config from {path}: {err:#}");
                PanelConfig::default()
            }),
        None => PanelConfig::default(),
    };

    apply_overrides(&mut config, env);
    config.sanitize();
    config
}

fn apply_overrides(config: &mut PanelConfig, env: impl Fn(&str) -> Option<String>) {
    if let Some(base_url) = env("PANEL_BASE_URL") {
        config.base_url = base_url;
    }
    match env("PANEL_POLL_MS").map(|value| value.trim().parse::<u64>()) {
        Some(Ok(poll_ms)) => config.poll_interval_ms = poll_ms,
        Some(Err(err)) => warn!("ignoring PANEL_POLL_MS: {err}"),
        None => {}
    }
}

async fn read_config_file(path: &Path) -> anyhow::Result<PanelConfig> {
    match tokio::fs::read(path).await {
        Ok(raw) => serde_json::from_slice::<PanelConfig>(&raw)
            .with_context(|| format!("invalid panel config {}", path.display())),
        Err(err) if err.kind() == ErrorKind::NotFound => Ok(PanelConfig::default()),
        Err(err) => Err(err.into()),
    }
}
