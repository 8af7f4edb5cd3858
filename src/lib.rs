#![deny(clippy::all, clippy::nursery)]
#![deny(nonstandard_style, rust_2018_idioms)]

//! Serverless handlers that answer every invocation with a fixed message and
//! an echo of the event they received.

pub mod config;
pub mod handler;
pub mod responder;

pub use config::{HandlerConfig, HandlerConfigBuilder, Settings};
pub use handler::{handle, run};
pub use responder::{InvocationError, InvocationResponse, Responder};
