/// Errors raised around the fulfillment core: reading orders and loading configuration.
///
/// An order that runs out of pick attempts is not an error; it is reported
/// as [`OrderOutcome::Failed`](crate::core::events::OrderOutcome::Failed).
#[derive(Debug, thiserror::Error)]
pub enum FactoryError {
    /// Order log line that is not `<type>:<quantity>`.
    #[error("malformed order on line {line_number} ({line:?}): {reason}")]
    MalformedLine {
        line_number: usize,
        line: String,
        reason: String,
    },

    /// Configuration values the factory cannot run with.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// File-system failure while reading an order log or config file.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// Config file that is not valid JSON for [`FactoryConfig`](crate::core::config::FactoryConfig).
    #[error("config format error: {0}")]
    ConfigFormat(#[from] serde_json::Error),
}
