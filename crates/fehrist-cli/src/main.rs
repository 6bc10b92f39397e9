//! Fehrist CLI Application
//!
//! Command-line interface for the Fehrist task planner: capture tasks
//! locally, request game plans from the configured scheduling service,
//! or run the HTTP relay for other frontends.

mod args;
mod cli;
mod loading;
mod proxy;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::{Cli, ListTasksArgs};
use fehrist_core::{PlanClient, TaskStoreBuilder};
use log::info;
use renderer::TerminalRenderer;
use Commands::*;

fn plan_client(backend_url: Option<String>) -> Result<PlanClient> {
    match backend_url {
        Some(url) => Ok(PlanClient::new(url)?),
        None => Ok(PlanClient::from_env()?),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        database_file,
        backend_url,
        no_color,
        command,
    } = Args::parse();

    let store = TaskStoreBuilder::new()
        .with_database_path(database_file)
        .build()
        .await
        .context("Failed to initialize task store")?;

    let renderer = TerminalRenderer::new(!no_color);

    info!("Fehrist started");

    match command {
        Some(Add(args)) => Cli::new(store, renderer).handle_add(args).await,
        Some(List(args)) => Cli::new(store, renderer).handle_list(args).await,
        Some(Toggle(args)) => Cli::new(store, renderer).handle_toggle(args).await,
        Some(Delete(args)) => Cli::new(store, renderer).handle_delete(args).await,
        Some(Purge(args)) => Cli::new(store, renderer).handle_purge(args).await,
        Some(Plan { command }) => {
            let client = plan_client(backend_url)?;
            Cli::new(store, renderer)
                .handle_plan_command(command, client)
                .await
        }
        Some(Serve(args)) => {
            let client = plan_client(backend_url)?;
            info!("Starting Fehrist relay server");
            proxy::run_serve(client, &args.bind, args.port)
                .await
                .context("Relay server failed")
        }
        None => {
            Cli::new(store, renderer)
                .handle_list(ListTasksArgs::default())
                .await
        }
    }
}
