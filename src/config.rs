use anyhow::{Context, Result};
use derive_builder::Builder;
use std::env;
use tracing::Level;

/// Per-handler configuration. The message is the only thing that tells one
/// handler variant from another.
#[derive(Builder, Clone, PartialEq, Eq, Debug)]
#[builder(setter(into))]
pub struct HandlerConfig {
    message: String,
    #[builder(default)]
    log_invocation: bool,
}

impl HandlerConfig {
    /// Defaults of the `hello-world` handler.
    pub fn hello_world() -> Self {
        Self {
            message: "helloworld".to_string(),
            log_invocation: false,
        }
    }

    /// Defaults of the `hello-again` handler, which also logs every event.
    pub fn hello_again() -> Self {
        Self {
            message: "helloworld again and again".to_string(),
            log_invocation: true,
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub const fn log_invocation(&self) -> bool {
        self.log_invocation
    }
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Settings {
    pub handler: HandlerConfig,
    pub log_level: Level,
}

impl Settings {
    /// Applies `HANDLER_MESSAGE`, `HANDLER_LOG_INVOCATION` and `LOG_LEVEL`
    /// from the process environment on top of `defaults`.
    pub fn from_env(defaults: HandlerConfig) -> Result<Self> {
        Self::from_lookup(defaults, |key| env::var(key).ok())
    }

    pub fn from_lookup<F>(defaults: HandlerConfig, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let lookup = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let mut handler = defaults;

        if let Some(message) = lookup("HANDLER_MESSAGE") {
            handler.message = message;
        }

        if let Some(v) = lookup("HANDLER_LOG_INVOCATION") {
            handler.log_invocation = v
                .trim()
                .parse::<bool>()
                .with_context(|| format!("invalid HANDLER_LOG_INVOCATION: {:?}", v))?;
        }

        let log_level = lookup("LOG_LEVEL")
            .map(|v| {
                v.trim()
                    .parse::<Level>()
                    .with_context(|| format!("invalid LOG_LEVEL: {:?}", v))
            })
            .transpose()?
            .unwrap_or(Level::INFO);

        Ok(Self { handler, log_level })
    }
}
