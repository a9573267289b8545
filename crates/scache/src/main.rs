//! Session cache provisioning - Entry Point
//!
//! | Command | Description |
//! |---------|-------------|
//! | `scache plan --owner app.ear/module.war` | Print the provisioning plan |
//! | `scache provision --owner app.ear/module.war` | Run the plan against the configured environment |
//! | `scache providers` | List registered extension providers |

// Force-link scache-providers to ensure linkme registrations are included
extern crate scache_providers;

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use scache_application::{ProvisioningPlanComposer, list_provisioning_providers};
use scache_domain::{DeploymentUnit, StepDescriptor};
use scache_infrastructure::config::{AppConfig, ConfigLoader};
use scache_infrastructure::logging::init_logging;
use scache_infrastructure::supervisor::Supervisor;
use tracing::debug;

/// Command line interface for session cache provisioning
#[derive(Parser, Debug)]
#[command(name = "scache")]
#[command(about = "Session cache provisioning")]
#[command(version)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Compose and print the provisioning plan for a deployment unit
    Plan(Target),
    /// Compose the plan and run it against the configured environment
    Provision(Target),
    /// List registered extension providers
    Providers,
}

/// Cache to provision
#[derive(clap::Args, Debug)]
pub struct Target {
    /// Owning deployment unit, `name` or `parent/name`
    #[arg(long)]
    pub owner: String,

    /// Name of the cache factory
    #[arg(long, default_value = "default")]
    pub factory: String,
}

fn load_config(path: Option<&PathBuf>) -> anyhow::Result<AppConfig> {
    let loader = match path {
        Some(path) => ConfigLoader::new().with_config_path(path),
        None => ConfigLoader::new(),
    };
    loader.load().context("Failed to load configuration")
}

fn plan(config: &AppConfig, target: &Target) -> anyhow::Result<()> {
    let owner = DeploymentUnit::parse_path(&target.owner)?;
    let composer =
        ProvisioningPlanComposer::new(target.factory.as_str(), config.provisioning.clone());
    let steps = composer.compose(&owner.service_name())?.into_steps()?;
    let descriptors: Vec<StepDescriptor> = steps.iter().map(|step| step.describe()).collect();
    println!("{}", serde_json::to_string_pretty(&descriptors)?);
    Ok(())
}

fn provision(config: &AppConfig, target: &Target) -> anyhow::Result<()> {
    let owner = DeploymentUnit::parse_path(&target.owner)?;
    let composer =
        ProvisioningPlanComposer::new(target.factory.as_str(), config.provisioning.clone());
    let namespace = composer.namespace(&owner.service_name())?;
    debug!(owner = %owner, namespace = %namespace, "Provisioning");

    let mut supervisor = Supervisor::with_environment(&config.environment, &namespace, &owner);
    let report = supervisor
        .execute(composer.compose(&owner.service_name())?)
        .with_context(|| format!("Failed to provision {namespace}"))?;
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

fn providers() {
    for (name, description) in list_provisioning_providers() {
        println!("{name:<28} {description}");
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    match &cli.command {
        Command::Providers => {
            providers();
            Ok(())
        }
        Command::Plan(target) => {
            let config = load_config(cli.config.as_ref())?;
            init_logging(&config.logging)?;
            plan(&config, target)
        }
        Command::Provision(target) => {
            let config = load_config(cli.config.as_ref())?;
            init_logging(&config.logging)?;
            provision(&config, target)
        }
    }
}

fn main() -> anyhow::Result<()> {
    run(&Cli::parse())
}
