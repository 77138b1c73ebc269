//! Diagnostic recording of server-side failures.
//!
//! Server-side failures are logged with the full error chain and a captured
//! backtrace, then converted into a [`CoreError::Internal`]. Only the short
//! context string travels further up; the details stay in the log.
//!
//! Backtrace capture follows `RUST_BACKTRACE` / `RUST_LIB_BACKTRACE`.

use std::backtrace::Backtrace;
use std::error::Error;
use std::fmt;

use crate::error::CoreError;

/// Formats an error followed by each of its `source()`s, separated by `: `.
pub struct ErrorChain<'a>(pub &'a (dyn Error + 'static));

impl fmt::Display for ErrorChain<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)?;
        let mut source = self.0.source();
        while let Some(cause) = source {
            write!(f, ": {cause}")?;
            source = cause.source();
        }
        Ok(())
    }
}

/// Log `err` as a server-side failure and classify it as internal.
pub fn record_failure<E>(context: &'static str, err: &E) -> CoreError
where
    E: Error + 'static,
{
    let backtrace = Backtrace::capture();
    tracing::error!(
        context,
        error = %ErrorChain(err),
        %backtrace,
        "Server-side failure"
    );
    CoreError::Internal(context.to_string())
}
