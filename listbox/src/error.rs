use thiserror::Error;

/// Rejected list box configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("list box width must be at least 1 column")]
    ZeroWidth,
    #[error("list box height must be at least 1 row")]
    ZeroHeight,
}
