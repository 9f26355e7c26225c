//! Application-wide constants

pub const DEFAULT_APP_NAME: &str = "platform";
pub const DEFAULT_APP_ENV: &str = "development";
pub const DEFAULT_LOG_FILTER: &str = "info";
pub const LOG_FILE_PREFIX: &str = "platform";
pub const ENV_PREFIX: &str = "PLATFORM";
