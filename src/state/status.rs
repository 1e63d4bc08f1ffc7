// Status messages shown in the status bar.
// Keeps a short history of load outcomes and user-facing notices.

use chrono::{DateTime, Utc};

/// Status message level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Warn,
    Error,
}

/// A timestamped status message.
#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub level: StatusLevel,
    pub message: String,
    pub timestamp: DateTime<Utc>,
}

impl StatusMessage {
    pub fn info(message: impl Into<String>) -> Self {
        Self::new(StatusLevel::Info, message)
    }

    pub fn warn(message: impl Into<String>) -> Self {
        Self::new(StatusLevel::Warn, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(StatusLevel::Error, message)
    }

    fn new(level: StatusLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            timestamp: Utc::now(),
        }
    }
}

/// Bounded history of status messages, newest last.
#[derive(Debug, Default)]
pub struct StatusLog {
    messages: Vec<StatusMessage>,
}

impl StatusLog {
    const CAPACITY: usize = 32;

    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, message: StatusMessage) {
        match message.level {
            StatusLevel::Info => tracing::info!(message = %message.message, "status"),
            StatusLevel::Warn => tracing::warn!(message = %message.message, "status"),
            StatusLevel::Error => tracing::error!(message = %message.message, "status"),
        }
        self.messages.push(message);
        if self.messages.len() > Self::CAPACITY {
            self.messages.remove(0);
        }
    }

    pub fn latest(&self) -> Option<&StatusMessage> {
        self.messages.last()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }
}
