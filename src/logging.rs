//! Logger setup for the command line tool.

use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;
use std::error::Error;
use std::path::Path;

/// Default log4rs configuration file, looked up in the working directory.
pub const LOG4RS_FILE: &str = "log4rs.yml";

const PATTERN: &str = "{d(%Y-%m-%d %H:%M:%S)} {h({l:<5})} {t} - {m}{n}";

/// Initialize log4rs from `log4rs.yml` if present, else log to stderr at `level`.
///
/// Logs always go to stderr so stdout carries only the results.
pub fn init_logging(level: LevelFilter) -> Result<(), Box<dyn Error>> {
    if Path::new(LOG4RS_FILE).exists() {
        log4rs::init_file(LOG4RS_FILE, Default::default())
            .map_err(|e| format!("Error initializing log4rs from {LOG4RS_FILE}: {e}"))?;
        log::debug!("Logging configured from {LOG4RS_FILE}");
        return Ok(());
    }

    log4rs::init_config(stderr_config(level)?)
        .map_err(|e| format!("Error initializing log4rs: {e}"))?;
    log::debug!("Logging to stderr at level {level}");
    Ok(())
}

/// Build a config with a single stderr appender.
fn stderr_config(level: LevelFilter) -> Result<Config, Box<dyn Error>> {
    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new(PATTERN)))
        .build();

    let config = Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(level))
        .map_err(|e| format!("Error building log4rs config: {e}"))?;
    Ok(config)
}
