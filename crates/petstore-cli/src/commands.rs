use std::sync::Arc;

use colored::Colorize;

use petstore_server::{PetServer, ServerConfig};
use petstore_store::{InMemoryPetStore, PetStore};

use crate::cli::*;

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Command::Serve(args) => cmd_serve(args),
        Command::Config(args) => cmd_config(args),
    }
}

/// Merge the configuration file (if any) with command-line overrides.
fn resolve_config(args: &ServeArgs) -> anyhow::Result<ServerConfig> {
    let mut config = match &args.config {
        Some(path) => ServerConfig::load(path)?,
        None => ServerConfig::default(),
    };
    if let Some(bind) = args.bind {
        config.bind_addr = bind;
    }
    if args.no_seed {
        config.seed = false;
    }
    Ok(config)
}

fn cmd_serve(args: ServeArgs) -> anyhow::Result<()> {
    let config = resolve_config(&args)?;
    let store: Arc<dyn PetStore> = if config.seed {
        Arc::new(InMemoryPetStore::with_seed_data())
    } else {
        Arc::new(InMemoryPetStore::new())
    };
    let pets = store.len()?;

    let server = PetServer::new(config, store);
    println!(
        "{} Pet store on {} ({} pets)",
        "✓".green().bold(),
        server.config().bind_addr.to_string().bold(),
        pets.to_string().yellow(),
    );
    tokio::runtime::Runtime::new()?.block_on(server.serve())?;
    Ok(())
}

fn cmd_config(args: ConfigArgs) -> anyhow::Result<()> {
    let config = match &args.config {
        Some(path) => ServerConfig::load(path)?,
        None => ServerConfig::default(),
    };
    println!("{}", "Effective configuration:".bold());
    print!("{}", toml::to_string_pretty(&config)?);
    Ok(())
}
