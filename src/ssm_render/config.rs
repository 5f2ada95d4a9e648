use std::path::{Path, PathBuf};

pub const DEFAULT_TEMPLATE: &str = "template.txt";
pub const DEFAULT_OUTPUT: &str = "output.txt";

/// Environment variable supplying the region when no flag is given.
pub const REGION_ENV: &str = "AWS_DEFAULT_REGION";

/// Everything a run needs, resolved once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderConfig {
    /// Template file to read
    pub template_path: PathBuf,

    /// Destination for the rendered file
    pub output_path: PathBuf,

    /// Region for the parameter store; `None` defers to the SDK's own chain
    pub region: Option<String>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            template_path: PathBuf::from(DEFAULT_TEMPLATE),
            output_path: PathBuf::from(DEFAULT_OUTPUT),
            region: None,
        }
    }
}

impl RenderConfig {
    pub fn new(template_path: impl Into<PathBuf>, output_path: impl Into<PathBuf>) -> Self {
        Self {
            template_path: template_path.into(),
            output_path: output_path.into(),
            region: None,
        }
    }

    /// Combine command-line values with the captured environment.
    ///
    /// The region flag wins over the environment value. Blank values are
    /// treated as unset.
    pub fn from_sources(
        template_path: impl Into<PathBuf>,
        output_path: impl Into<PathBuf>,
        region_flag: Option<String>,
        env_region: Option<String>,
    ) -> Self {
        let region = normalize_region(region_flag).or_else(|| normalize_region(env_region));
        Self::new(template_path, output_path).with_region(region)
    }

    pub fn with_region(mut self, region: Option<String>) -> Self {
        self.region = normalize_region(region);
        self
    }

    pub fn template_path(&self) -> &Path {
        &self.template_path
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    pub fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }
}

fn normalize_region(region: Option<String>) -> Option<String> {
    region
        .map(|r| r.trim().to_string())
        .filter(|r| !r.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = RenderConfig::default();
        assert_eq!(config.template_path(), Path::new("template.txt"));
        assert_eq!(config.output_path(), Path::new("output.txt"));
        assert_eq!(config.region(), None);
    }

    #[test]
    fn test_flag_region_wins_over_env() {
        let config = RenderConfig::from_sources(
            "t.txt",
            "o.txt",
            Some("eu-west-1".into()),
            Some("us-east-1".into()),
        );
        assert_eq!(config.region(), Some("eu-west-1"));
    }

    #[test]
    fn test_env_region_used_without_flag() {
        let config = RenderConfig::from_sources("t.txt", "o.txt", None, Some("us-east-1".into()));
        assert_eq!(config.region(), Some("us-east-1"));
    }

    #[test]
    fn test_blank_region_is_unset() {
        let config = RenderConfig::from_sources("t.txt", "o.txt", Some("  ".into()), None);
        assert_eq!(config.region(), None);

        let config =
            RenderConfig::from_sources("t.txt", "o.txt", Some("".into()), Some("ap-south-1".into()));
        assert_eq!(config.region(), Some("ap-south-1"));
    }
}
