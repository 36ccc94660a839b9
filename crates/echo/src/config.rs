//! Echo loop configuration.

/// Environment variable overriding [`EchoConfig::prompt`].
pub const PROMPT_VAR: &str = "PRIMER_ECHO_PROMPT";
/// Environment variable overriding [`EchoConfig::farewell`].
pub const FAREWELL_VAR: &str = "PRIMER_ECHO_FAREWELL";

/// Prefix placed before every echoed line. Not configurable.
pub const ECHO_PREFIX: &str = "You said: ";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EchoConfig {
    /// Printed once before the first read.
    pub prompt: String,
    /// Printed once after end-of-stream.
    pub farewell: String,
}

impl Default for EchoConfig {
    fn default() -> Self {
        Self {
            prompt: "Type something (Ctrl-D to quit):".to_string(),
            farewell: "Goodbye!".to_string(),
        }
    }
}

impl EchoConfig {
    /// Defaults, overridden by `PRIMER_ECHO_PROMPT` / `PRIMER_ECHO_FAREWELL`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults, overridden by whatever `lookup` returns for each variable.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        if let Some(prompt) = lookup(PROMPT_VAR) {
            tracing::debug!(prompt = %prompt, "prompt overridden from environment");
            config.prompt = prompt;
        }
        if let Some(farewell) = lookup(FAREWELL_VAR) {
            tracing::debug!(farewell = %farewell, "farewell overridden from environment");
            config.farewell = farewell;
        }
        config
    }

    pub fn prefix(&self) -> &'static str {
        ECHO_PREFIX
    }
}
