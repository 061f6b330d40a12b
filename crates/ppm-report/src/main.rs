use clap::{value_parser, Arg, ArgAction, Command};
use ppm_report::{render_summary, ProviderClient, ReportAssembler, ReportConfig, ReportWriter};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn init_tracing(quiet: bool) {
    let default = if quiet { "warn" } else { "info" };
    let filter = EnvFilter::try_from_env("PPM_LOG").unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false))
        .with(filter)
        .init();
}

fn build_config(matches: &clap::ArgMatches) -> anyhow::Result<ReportConfig> {
    let mut config = match matches.get_one::<PathBuf>("config") {
        Some(path) => ReportConfig::from_toml_file(path)?,
        None => ReportConfig::new(),
    };
    if let Some(api_base) = matches.get_one::<String>("api-base") {
        config = config.with_api_base(api_base);
    }
    if let Some(dir) = matches.get_one::<PathBuf>("output-dir") {
        config = config.with_output_dir(dir);
    }
    if let Some(secs) = matches.get_one::<u64>("timeout-secs") {
        config = config.with_timeout_secs(*secs);
    }
    config.validate()?;
    Ok(config)
}

async fn run(config: ReportConfig, quiet: bool) -> anyhow::Result<()> {
    let client = ProviderClient::new(&config)?;
    let assembler = ReportAssembler::new(client);

    let report = assembler.generate().await?;
    let written = ReportWriter::new(&config.output_dir).write(&report).await?;

    if !quiet {
        println!("{}", render_summary(&report.insights));
        println!("Report generated: {}", written.timestamped.display());
        println!("Latest report saved: {}", written.latest.display());
    }
    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    let matches = Command::new("ppm-report")
        .version(ppm_report::VERSION)
        .about("Generate the weekly executive portfolio health report")
        .arg(
            Arg::new("api-base")
                .long("api-base")
                .help("Provider API base URL (default http://localhost:5000/api)"),
        )
        .arg(
            Arg::new("output-dir")
                .long("output-dir")
                .short('o')
                .value_parser(value_parser!(PathBuf))
                .help("Directory for report files (default ./reports)"),
        )
        .arg(
            Arg::new("timeout-secs")
                .long("timeout-secs")
                .value_parser(value_parser!(u64))
                .help("Per-request timeout in seconds (default 10)"),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .value_parser(value_parser!(PathBuf))
                .help("TOML configuration file; flags override its values"),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .short('q')
                .action(ArgAction::SetTrue)
                .help("Skip the console summary"),
        )
        .get_matches();

    let quiet = matches.get_flag("quiet");
    init_tracing(quiet);

    let result = match build_config(&matches) {
        Ok(config) => run(config, quiet).await,
        Err(e) => Err(e),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("Report generation failed: {e:#}");
            if e
                .downcast_ref::<ppm_model::SourceError>()
                .is_some_and(ppm_model::SourceError::is_unavailable)
            {
                eprintln!("Cannot connect to the PPM API. Make sure the provider is running: ppm-provider serve");
            }
            ExitCode::FAILURE
        }
    }
}
