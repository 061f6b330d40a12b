use clap::{value_parser, Arg, ArgAction, Command};
use ppm_provider::{serve, ProjectCatalog, ProviderConfig};
use std::path::PathBuf;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_env("PPM_LOG").unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true))
        .with(filter)
        .init();
}

async fn load_catalog(path: Option<&PathBuf>) -> anyhow::Result<ProjectCatalog> {
    let catalog = match path {
        Some(path) => ProjectCatalog::from_path(path).await?,
        None => ProjectCatalog::sample()?,
    };
    Ok(catalog)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let catalog_arg = Arg::new("catalog")
        .long("catalog")
        .value_parser(value_parser!(PathBuf))
        .help("JSON file with project records (defaults to the built-in sample)");

    let cli = Command::new("ppm-provider")
        .version(ppm_provider::VERSION)
        .about("Mock Clarity PPM REST API")
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Debug logging (overridden by PPM_LOG)"),
        )
        .subcommand(
            Command::new("serve")
                .about("Serve the portfolio over HTTP")
                .arg(
                    Arg::new("host")
                        .long("host")
                        .default_value("0.0.0.0")
                        .help("Interface to listen on"),
                )
                .arg(
                    Arg::new("port")
                        .long("port")
                        .default_value("5000")
                        .value_parser(value_parser!(u16))
                        .help("Port to listen on"),
                )
                .arg(catalog_arg.clone()),
        )
        .subcommand(
            Command::new("dump")
                .about("Print the catalog and its aggregates as JSON")
                .arg(catalog_arg),
        );

    let matches = cli.get_matches();
    init_tracing(matches.get_flag("verbose"));

    match matches.subcommand() {
        Some(("dump", args)) => {
            let catalog = load_catalog(args.get_one::<PathBuf>("catalog")).await?;
            let dump = serde_json::json!({
                "projects": catalog.projects(),
                "summary": catalog.summary(),
                "health": catalog.health(),
            });
            println!("{}", serde_json::to_string_pretty(&dump)?);
        }
        Some(("serve", args)) => {
            let mut config = ProviderConfig::new();
            if let Some(host) = args.get_one::<String>("host") {
                config = config.with_host(host);
            }
            if let Some(port) = args.get_one::<u16>("port") {
                config = config.with_port(*port);
            }
            if let Some(path) = args.get_one::<PathBuf>("catalog") {
                config = config.with_catalog_path(path);
            }
            let catalog = load_catalog(config.catalog_path.as_ref()).await?;
            serve(&config, catalog).await?;
        }
        _ => {
            let config = ProviderConfig::new();
            serve(&config, ProjectCatalog::sample()?).await?;
        }
    }

    Ok(())
}
