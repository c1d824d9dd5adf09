use thiserror::Error;

#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("could not open manifest {path}: {source}")]
    Open {
        path:   String,
        #[source]
        source: std::io::Error,
    },

    #[error("manifest read error: {0}")]
    Csv(#[from] csv::Error),
}

pub type ManifestResult<T> = Result<T, ManifestError>;
