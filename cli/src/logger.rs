//! Logger setup
//!
//! Logs go to stderr or files only; stdout carries the report.

use crate::config::Config;
use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Root};
use log4rs::encode::pattern::PatternEncoder;
use snafu::prelude::*;
use std::path::Path;

const STDERR_PATTERN: &str = "{d(%Y-%m-%d %H:%M:%S)} | {h({l}):5.5} | {t} | {m}{n}";

/// Errors raised while starting the logger
#[derive(Debug, Snafu)]
pub enum LoggerError {
    #[snafu(display("Could not parse {path}: {reason}."))]
    ConfigFile { path: String, reason: String },

    #[snafu(display("Could not build the default log config: {reason}."))]
    DefaultConfig { reason: String },

    #[snafu(display("Could not install the logger: {source}."))]
    Install { source: log::SetLoggerError },
}

/// Starts log4rs from `config.log_config`, or logs warnings to stderr when
/// that file does not exist.
pub fn init(config: &Config) -> Result<(), LoggerError> {
    let path = config.log_config.as_str();
    if Path::new(path).exists() {
        return log4rs::init_file(path, Default::default()).map_err(|e| {
            LoggerError::ConfigFile {
                path: path.to_owned(),
                reason: e.to_string(),
            }
        });
    }

    log4rs::init_config(default_config()?).context(InstallSnafu)?;
    Ok(())
}

/// stderr only configuration, `warn` and above
pub fn default_config() -> Result<log4rs::config::Config, LoggerError> {
    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new(STDERR_PATTERN)))
        .build();

    log4rs::config::Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(LevelFilter::Warn))
        .map_err(|e| LoggerError::DefaultConfig {
            reason: e.to_string(),
        })
}
