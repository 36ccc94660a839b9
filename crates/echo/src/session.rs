//! The echo loop as an explicit state machine.
//!
//! ```text
//! AwaitingLine --line read--> Processing --line written--> AwaitingLine
//! AwaitingLine --end-of-stream--> Terminated (farewell written)
//! ```

use crate::config::EchoConfig;
use crate::error::EchoResult;
use crate::io::{LineSink, LineSource, strip_terminator};

/// Where the loop currently is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EchoState {
    AwaitingLine,
    /// A line (terminator already stripped) waiting to be echoed.
    Processing(String),
    Terminated,
}

/// Interactive echo session.
#[derive(Debug)]
pub struct InteractiveEcho {
    config: EchoConfig,
    state: EchoState,
    lines_echoed: u64,
}

impl InteractiveEcho {
    pub fn new(config: EchoConfig) -> Self {
        Self {
            config,
            state: EchoState::AwaitingLine,
            lines_echoed: 0,
        }
    }

    pub fn state(&self) -> &EchoState {
        &self.state
    }

    pub fn lines_echoed(&self) -> u64 {
        self.lines_echoed
    }

    pub fn is_terminated(&self) -> bool {
        self.state == EchoState::Terminated
    }

    /// Perform a single transition.
    ///
    /// Once `Terminated`, further steps do nothing.
    pub fn step<S, K>(&mut self, input: &mut S, output: &mut K) -> EchoResult<&EchoState>
    where
        S: LineSource + ?Sized,
        K: LineSink + ?Sized,
    {
        let next = match &self.state {
            EchoState::AwaitingLine => match input.next_line()? {
                Some(raw) => EchoState::Processing(strip_terminator(&raw).to_string()),
                None => {
                    output.write_line(&self.config.farewell)?;
                    tracing::info!(lines = self.lines_echoed, "end of input; echo terminated");
                    EchoState::Terminated
                }
            },
            EchoState::Processing(line) => {
                output.write_line(&format!("{}{}", self.config.prefix(), line))?;
                self.lines_echoed += 1;
                tracing::trace!(line = %line, "echoed");
                EchoState::AwaitingLine
            }
            EchoState::Terminated => EchoState::Terminated,
        };

        self.state = next;
        Ok(&self.state)
    }

    /// Write the prompt, then echo until `input` is exhausted.
    ///
    /// Blocks on each read. Returns once the farewell has been written.
    pub fn run<S, K>(&mut self, input: &mut S, output: &mut K) -> EchoResult<()>
    where
        S: LineSource + ?Sized,
        K: LineSink + ?Sized,
    {
        if self.is_terminated() {
            return Ok(());
        }

        tracing::debug!("echo session started");
        output.write_line(&self.config.prompt)?;

        while !self.is_terminated() {
            self.step(input, output)?;
        }
        Ok(())
    }
}

impl Default for InteractiveEcho {
    fn default() -> Self {
        Self::new(EchoConfig::default())
    }
}

/// Run a default-configured session over `input` and `output`.
pub fn run<S, K>(input: &mut S, output: &mut K) -> EchoResult<()>
where
    S: LineSource + ?Sized,
    K: LineSink + ?Sized,
{
    InteractiveEcho::default().run(input, output)
}
