// Copyright 2025 Chris Custine
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

mod config;
mod page_template;
mod status_view;

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use log::{info, warn};
use netstatus_client::{HttpFetcher, PollerState, StatusPoller};

use config::AppConfig;
use status_view::StatusView;

/// Live network interface status panel
#[derive(Debug, Parser)]
#[command(name = "netstatus-panel", version, about)]
struct Cli {
    /// Status server base URL (e.g. http://192.168.1.1)
    #[arg(long)]
    base_url: Option<String>,

    /// Milliseconds between polls
    #[arg(long)]
    interval_ms: Option<u64>,

    /// Interface to display; repeat for several (replaces the configured list)
    #[arg(long = "interface", value_name = "NAME")]
    interfaces: Vec<String>,

    /// Use this config file instead of the default location
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Run a single poll cycle, print the result and exit
    #[arg(long)]
    once: bool,

    /// Render the page without its status container (polling stays inactive)
    #[arg(long)]
    no_container: bool,
}

impl Cli {
    fn apply_overrides(&self, config: &mut AppConfig) {
        if let Some(base_url) = &self.base_url {
            config.base_url.clone_from(base_url);
        }
        if let Some(interval_ms) = self.interval_ms {
            config.poll_interval_ms = interval_ms;
        }
        if !self.interfaces.is_empty() {
            config.interfaces.clone_from(&self.interfaces);
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => AppConfig::load_from(path)?,
        None => {
            if let Ok(path) = AppConfig::get_config_path() {
                info!("Using config file {}", path.display());
            }
            AppConfig::load()?
        }
    };
    cli.apply_overrides(&mut config);
    config.validate()?;

    let page = Arc::new(page_template::render(&config, !cli.no_container));
    let fetcher = HttpFetcher::new(config.fetcher_config())?;
    info!("Polling {}", fetcher.url());

    let view = StatusView::new(config.interfaces.clone());
    let mut poller = StatusPoller::new(fetcher, Arc::clone(&page), config.poller_config());

    if cli.once {
        let report = poller.run_cycle().await?;
        for id in &report.missing_elements {
            warn!("Status reported for element #{} which this panel does not show", id);
        }
        print!("{}", view.render_table(&page));
        return Ok(());
    }

    if poller.start() == PollerState::Inactive {
        println!("Network status container not present; nothing to poll.");
        return Ok(());
    }

    let mut refresh = tokio::time::interval(config.poll_interval());
    loop {
        tokio::select! {
            _ = refresh.tick() => {
                println!("{}{}", view.render_table(&page), StatusView::render_footer(&poller.stats()));
            }
            result = tokio::signal::ctrl_c() => {
                if let Err(e) = result {
                    warn!("Failed to listen for Ctrl-C: {}", e);
                }
                break;
            }
        }
    }

    poller.stop();
    Ok(())
}
