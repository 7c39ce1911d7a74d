#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid catalog: {0}")]
    Catalog(String),

    #[error("{0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl From<serde_json::Error> for Error {
    fn from(value: serde_json::Error) -> Self {
        Self::Catalog(value.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(value: toml::de::Error) -> Self {
        Self::Catalog(value.to_string())
    }
}
