use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum IntacctError {
    #[error("Invalid argument: {0}")]
    #[diagnostic(code(intacct::invalid_argument))]
    InvalidArgument(String),
    #[error("XML error: {0}")]
    #[diagnostic(code(intacct::xml))]
    Xml(String),
    #[error("Malformed response: {0}")]
    #[diagnostic(code(intacct::malformed_response))]
    MalformedResponse(String),
    #[error("Transport error: {0}")]
    #[diagnostic(code(intacct::transport))]
    Transport(String),
    #[error("Configuration error: {0}")]
    #[diagnostic(code(intacct::config), help("set INTACCT_* variables or provide intacct.toml"))]
    Config(String),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<config::ConfigError> for IntacctError {
    fn from(err: config::ConfigError) -> Self {
        Self::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, IntacctError>;
