use super::ParameterStore;
use crate::error::{RenderError, Result};
use crate::model::{ParameterSet, Resolution};
use aws_config::BehaviorVersion;
use aws_sdk_ssm::config::Region;
use aws_sdk_ssm::error::DisplayErrorContext;
use aws_sdk_ssm::types::Parameter;
use aws_sdk_ssm::Client;
use tracing::{debug, info};

/// `GetParameters` rejects requests naming more than this many parameters.
pub const MAX_NAMES_PER_REQUEST: usize = 10;

/// AWS Systems Manager Parameter Store.
///
/// Creating the store does no I/O. The SDK session is built inside
/// [`ParameterStore::resolve`], so nothing touches AWS until there is
/// something to look up.
#[derive(Debug, Clone, Default)]
pub struct SsmStore {
    region: Option<String>,
}

impl SsmStore {
    /// `region` of `None` falls back to the SDK region chain (shared config, profile).
    pub fn new(region: Option<String>) -> Self {
        Self { region }
    }

    pub fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }

    async fn connect(&self) -> Result<Client> {
        let mut loader = aws_config::defaults(BehaviorVersion::latest());
        if let Some(region) = &self.region {
            loader = loader.region(Region::new(region.clone()));
        }
        let sdk_config = loader.load().await;

        let region = sdk_config.region().ok_or_else(|| {
            RenderError::SessionInit(
                "no AWS region configured (use --aws-region or AWS_DEFAULT_REGION)".to_string(),
            )
        })?;
        info!(region = %region, "Connected to SSM Parameter Store");

        Ok(Client::new(&sdk_config))
    }

    async fn fetch(&self, client: &Client, names: &ParameterSet) -> Result<Resolution> {
        let mut resolution = Resolution::new();

        for page in name_pages(names) {
            debug!(count = page.len(), "GetParameters");
            let output = client
                .get_parameters()
                .set_names(Some(page))
                .with_decryption(true)
                .send()
                .await
                .map_err(|e| RenderError::Lookup(DisplayErrorContext(&e).to_string()))?;

            let mut partial = Resolution::new();
            partial.found.extend(output.parameters().iter().filter_map(parameter_entry));
            partial.invalid = output.invalid_parameters().to_vec();
            resolution.merge(partial);
        }

        Ok(resolution)
    }
}

impl ParameterStore for SsmStore {
    fn resolve(&self, names: &ParameterSet) -> Result<Resolution> {
        // GetParameters requires at least one name.
        if names.is_empty() {
            return Ok(Resolution::new());
        }

        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| RenderError::SessionInit(e.to_string()))?;

        runtime.block_on(async {
            let client = self.connect().await?;
            self.fetch(&client, names).await
        })
    }
}

/// Key a returned parameter by the name it was requested under.
///
/// SSM strips a version or label selector from `Name` and reports it in
/// `Selector`, so `/app/x:3` comes back as `/app/x` plus `:3`.
fn parameter_entry(parameter: &Parameter) -> Option<(String, String)> {
    let name = parameter.name()?;
    let value = parameter.value()?;
    let key = format!("{}{}", name, parameter.selector().unwrap_or(""));
    Some((key, value.to_string()))
}

/// Split the sorted name set into request-sized pages.
fn name_pages(names: &ParameterSet) -> Vec<Vec<String>> {
    let all: Vec<String> = names.iter().cloned().collect();
    all.chunks(MAX_NAMES_PER_REQUEST)
        .map(|chunk| chunk.to_vec())
        .collect()
}
