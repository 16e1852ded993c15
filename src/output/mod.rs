//! Output module
//!
//! Protocol messages and the sinks that deliver them to the host.
//!
//! # Overview
//!
//! This module provides:
//! - `Message` - The line-delimited JSON messages understood by the host
//! - `Emitter` - The sink trait used by every lifecycle operation
//! - `WriterEmitter` - Writes messages to stdout or any other writer
//! - `MemoryEmitter` - Collects messages in memory

mod emitter;
mod message;

pub use emitter::{Emitter, MemoryEmitter, WriterEmitter};
pub use message::{ConnectionStatus, LogMessage, Message, RecordMessage, StateMessage, Status};
