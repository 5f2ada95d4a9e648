use super::logging;
use super::print::print_report;
use super::setup::Cli;
use clap::Parser;
use ssm_render::api::RenderApi;
use ssm_render::config::{RenderConfig, REGION_ENV};
use ssm_render::error::Result;
use ssm_render::store::ssm::SsmStore;
use tracing::debug;

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let config = build_config(cli, std::env::var(REGION_ENV).ok());
    debug!(
        template = %config.template_path().display(),
        output = %config.output_path().display(),
        region = config.region().unwrap_or("<sdk default>"),
        "configuration"
    );

    let store = SsmStore::new(config.region.clone());
    let api = RenderApi::new(store, config);

    let report = api.run()?;
    print_report(&report);
    Ok(())
}

/// The environment is captured once by the caller and passed in here.
fn build_config(cli: Cli, env_region: Option<String>) -> RenderConfig {
    RenderConfig::from_sources(cli.template, cli.output, cli.aws_region, env_region)
}
