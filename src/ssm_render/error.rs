use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("could not read template {}: {source}", path.display())]
    TemplateRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("could not create parameter store session: {0}")]
    SessionInit(String),

    #[error("parameter lookup failed: {0}")]
    Lookup(String),

    /// Names the store reported as not existing, sorted and deduplicated.
    #[error("Requested parameters do not exist on SSM.")]
    InvalidParameters(Vec<String>),

    #[error("could not write output {}: {source}", path.display())]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, RenderError>;
