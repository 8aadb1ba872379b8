//! Handlers that run around the relay handler.

mod logging;

pub use logging::LoggingHandler;
