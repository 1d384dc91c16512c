//! Writes statistics as `PREFIX NAME=VALUE` lines to a globally configured writer.
//!
//! Nothing is written until [`configure_statistic_logging`] has been called.

use std::fmt::Debug;
use std::fmt::Display;
use std::fmt::Formatter;
use std::io::stdout;
use std::io::Write;
use std::sync::Mutex;
use std::sync::OnceLock;

use convert_case::Case;
use convert_case::Casing;

/// Where and how statistics are written.
pub struct StatisticOptions {
    /// Written in front of every statistic line
    prefix: String,
    /// Written on its own line after a block of statistics
    postfix: Option<String>,
    /// Applied to the statistic names; names are written unchanged if [`None`]
    casing: Option<Case>,
    writer: Box<dyn Write + Send>,
}

impl StatisticOptions {
    fn write_statistic(&mut self, name: impl Display, value: impl Display) {
        let name = match self.casing {
            Some(casing) => name.to_string().to_case(casing),
            None => name.to_string(),
        };
        let _ = writeln!(self.writer, "{} {name}={value}", self.prefix);
    }

    fn write_postfix(&mut self) {
        if let Some(postfix) = &self.postfix {
            let _ = writeln!(self.writer, "{postfix}");
        }
    }
}

impl Debug for StatisticOptions {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StatisticOptions")
            .field("prefix", &self.prefix)
            .field("postfix", &self.postfix)
            .field("casing", &self.casing)
            .field("writer", &"<Writer>")
            .finish()
    }
}

static STATISTIC_OPTIONS: OnceLock<Mutex<StatisticOptions>> = OnceLock::new();

fn with_options(action: impl FnOnce(&mut StatisticOptions)) {
    if let Some(Ok(mut options)) = STATISTIC_OPTIONS.get().map(Mutex::lock) {
        action(&mut options);
    }
}

/// Configures the logging of statistics.
///
/// Every statistic is written as `{prefix} {name}={value}`, with `name` converted to `casing` if
/// provided. The optional `postfix` closes a block of statistics. If no writer is given, stdout is
/// used. Only the first call has an effect.
pub fn configure_statistic_logging(
    prefix: impl Into<String>,
    postfix: Option<&str>,
    casing: Option<Case>,
    writer: Option<Box<dyn Write + Send>>,
) {
    let _ = STATISTIC_OPTIONS.get_or_init(|| {
        Mutex::new(StatisticOptions {
            prefix: prefix.into(),
            postfix: postfix.map(str::to_owned),
            casing,
            writer: writer.unwrap_or_else(|| Box::new(stdout())),
        })
    });
}

/// Logs the statistic `name` with `value`.
pub fn log_statistic(name: impl Display, value: impl Display) {
    with_options(|options| options.write_statistic(name, value));
}

/// Logs the closing line of a block of statistics, if one has been configured.
pub fn log_statistic_postfix() {
    with_options(StatisticOptions::write_postfix);
}
