use clap::Parser;
use ssm_render::config::{DEFAULT_OUTPUT, DEFAULT_TEMPLATE};
use std::path::PathBuf;

/// Returns the version string, including git hash and commit date for non-release builds.
/// Format: "0.3.1" for releases, "0.3.1@abc1234 2024-01-15 14:30" for dev builds
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_COMMIT_DATE: &str = env!("GIT_COMMIT_DATE");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{} {}", VERSION, GIT_HASH, GIT_COMMIT_DATE)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "ssm-render", bin_name = "ssm-render", version = get_version())]
#[command(
    about = "Fill {{ <parameter name> }} placeholders from AWS SSM Parameter Store",
    long_about = None
)]
pub struct Cli {
    /// The template file to be used with format {{ <parameter name> }}
    #[arg(long, value_name = "PATH", default_value = DEFAULT_TEMPLATE)]
    pub template: PathBuf,

    /// Name of the output file
    #[arg(long, value_name = "PATH", default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// The AWS region where the parameters are stored [default: $AWS_DEFAULT_REGION]
    #[arg(long = "aws-region", value_name = "REGION")]
    pub aws_region: Option<String>,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long)]
    pub verbose: bool,
}
