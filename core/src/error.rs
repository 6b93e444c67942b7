#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SiteError {
    #[error("request for {url} failed: {message}")]
    Network { url: String, message: String },
    #[error("request for {url} returned status {status}")]
    Status { url: String, status: u16 },
    #[error("failed to read body of {url}: {message}")]
    Body { url: String, message: String },
    #[error("directory listing contained no images")]
    EmptyListing,
    #[error("invalid site config: {0}")]
    Config(String),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ControllerUrlError {
    #[error("controller url is empty")]
    Empty,
    #[error("unsupported controller url scheme '{0}'")]
    UnsupportedScheme(String),
    #[error("invalid controller url: {0}")]
    Invalid(String),
}
