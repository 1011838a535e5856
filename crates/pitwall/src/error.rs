#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Pitwall API error [{status}]: {body}")]
    Api { status: u16, body: String },
}
