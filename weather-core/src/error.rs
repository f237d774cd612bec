use thiserror::Error;

/// Errors raised at the fallible edges of the core: text coming from the
/// data provider, the config file or the command line.
#[derive(Debug, Error)]
pub enum ForecastError {
    #[error("Invalid forecast timestamp '{value}': expected 'YYYY-MM-DD HH:MM:SS' (UTC)")]
    InvalidTimestamp {
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("Invalid day '{0}': expected 'YYYY-MM-DD'")]
    InvalidDayKey(String),

    #[error("Invalid UTC offset '{0}': expected e.g. '+02:00' or '-05:30'")]
    InvalidOffset(String),

    #[error("Unknown share platform '{0}'. Supported platforms: sms, whatsapp, facebook, twitter, telegram, copy.")]
    UnknownPlatform(String),
}
