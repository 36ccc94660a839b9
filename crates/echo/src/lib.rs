//! `primer-echo` — interactive read/echo loop over line-oriented I/O.
//!
//! The loop reads one line at a time from a [`LineSource`], writes it back to a
//! [`LineSink`] behind a fixed prefix, and says goodbye when the source runs
//! dry. Strictly synchronous: one reader, one writer, used alternately.

pub mod config;
pub mod error;
pub mod io;
pub mod session;

pub use config::EchoConfig;
pub use error::{EchoError, EchoResult};
pub use io::{LineSink, LineSource, strip_terminator};
pub use session::{EchoState, InteractiveEcho, run};
