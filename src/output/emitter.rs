//! Message sinks
//!
//! Messages are delivered in the order the emitter methods are called.

use super::message::{LogMessage, Message, RecordMessage};
use crate::error::Result;
use crate::types::{JsonValue, LogLevel};
use std::io::{self, Stdout, Write};

/// Sink for the messages produced by a lifecycle operation
pub trait Emitter: Send {
    /// Deliver one message
    fn emit(&mut self, message: Message) -> Result<()>;

    /// Emit a record tagged with its stream and namespace
    fn record(&mut self, data: JsonValue, stream: &str, namespace: &str) -> Result<()> {
        self.emit(Message::record(stream, namespace, data))
    }

    /// Emit a state checkpoint
    fn state(&mut self, data: JsonValue) -> Result<()> {
        self.emit(Message::state(data))
    }

    /// Emit a log line for the host
    fn log(&mut self, level: LogLevel, message: &str) -> Result<()> {
        self.emit(Message::log(level, message))
    }
}

// ============================================================================
// Writer Emitter
// ============================================================================

/// Writes one JSON message per line
#[derive(Debug)]
pub struct WriterEmitter<W: Write + Send> {
    writer: W,
    pretty: bool,
}

impl WriterEmitter<Stdout> {
    /// Emitter writing to stdout
    pub fn stdout(pretty: bool) -> Self {
        Self::new(io::stdout(), pretty)
    }
}

impl<W: Write + Send> WriterEmitter<W> {
    /// Emitter writing to the given writer
    pub fn new(writer: W, pretty: bool) -> Self {
        Self { writer, pretty }
    }

    /// Consume the emitter and return the writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write + Send> Emitter for WriterEmitter<W> {
    fn emit(&mut self, message: Message) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, &message)?;
        } else {
            serde_json::to_writer(&mut self.writer, &message)?;
        }
        self.writer.write_all(b"\n")?;
        self.writer.flush()?;
        Ok(())
    }
}

// ============================================================================
// Memory Emitter
// ============================================================================

/// Collects messages in memory
#[derive(Debug, Default)]
pub struct MemoryEmitter {
    messages: Vec<Message>,
}

impl MemoryEmitter {
    /// Create an empty emitter
    pub fn new() -> Self {
        Self::default()
    }

    /// All messages in emission order
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Record messages in emission order
    pub fn records(&self) -> Vec<&RecordMessage> {
        self.messages
            .iter()
            .filter_map(|m| match m {
                Message::Record { record } => Some(record),
                _ => None,
            })
            .collect()
    }

    /// Record messages of one stream
    pub fn records_for(&self, stream: &str) -> Vec<&RecordMessage> {
        self.records()
            .into_iter()
            .filter(|r| r.stream == stream)
            .collect()
    }

    /// Log messages in emission order
    pub fn logs(&self) -> Vec<&LogMessage> {
        self.messages
            .iter()
            .filter_map(|m| match m {
                Message::Log { log } => Some(log),
                _ => None,
            })
            .collect()
    }
}

impl Emitter for MemoryEmitter {
    fn emit(&mut self, message: Message) -> Result<()> {
        self.messages.push(message);
        Ok(())
    }
}
