//! The `Logger` capability surface and its two backends.
//!
//! Backends implement a single primitive, [`Logger::emit`]; the per-severity
//! methods and `log` are provided on top of it so both backends expose the
//! same surface. Implementations must never fail or panic: degraded inputs
//! (unknown levels, unserializable payloads) still produce output.

mod builder;
mod color_console;
mod from_config;
mod plain_console;

pub use builder::ColorConsoleBuilder;
pub use color_console::{ColorConsole, ColorMode};
pub use plain_console::{Channel, PlainConsole};

use crate::context::Context;
use crate::fmt::Payload;
use crate::level::Level;
use crate::message::Message;
use serde::Serialize;
use std::sync::Arc;

/// One log call, built per call and consumed by [`Logger::emit`].
#[derive(Debug)]
pub struct LogEvent<'a> {
    /// Raw level name; names outside the registry are allowed.
    pub level: &'a str,
    pub message: Message,
    /// `None` behaves like an empty context.
    pub context: Option<&'a Context>,
    /// `None` means no additional data was supplied.
    pub payload: Option<Payload>,
}

impl<'a> LogEvent<'a> {
    #[must_use]
    pub fn new(level: &'a str, message: impl Into<Message>) -> Self {
        Self {
            level,
            message: message.into(),
            context: None,
            payload: None,
        }
    }

    #[must_use]
    pub const fn with_context(mut self, context: &'a Context) -> Self {
        self.context = Some(context);
        self
    }

    /// Attaches additional data, converting it to JSON immediately.
    #[must_use]
    pub fn with_data<T: Serialize + ?Sized>(mut self, data: &T) -> Self {
        self.payload = Some(Payload::new(data));
        self
    }

    /// `None` leaves the event without a payload.
    #[must_use]
    pub fn with_optional_data<T: Serialize + ?Sized>(self, data: Option<&T>) -> Self {
        match data {
            Some(data) => self.with_data(data),
            None => self,
        }
    }

    #[must_use]
    pub fn with_payload(mut self, payload: Payload) -> Self {
        self.payload = Some(payload);
        self
    }
}

/// Leveled logging facade.
///
/// The generic convenience methods require `Self: Sized`; trait objects get
/// them through the `Box`, `Arc` and reference impls below.
pub trait Logger: Send + Sync {
    /// Formats and writes one event.
    fn emit(&self, event: LogEvent<'_>);

    /// Logs with an arbitrary level name.
    fn log<M: Into<Message>>(&self, level: &str, message: M, context: &Context)
    where
        Self: Sized,
    {
        self.emit(LogEvent::new(level, message).with_context(context));
    }

    /// Logs with an arbitrary level name and additional data.
    fn log_with<M: Into<Message>, T: Serialize + ?Sized>(
        &self,
        level: &str,
        message: M,
        context: &Context,
        data: &T,
    ) where
        Self: Sized,
    {
        self.emit(
            LogEvent::new(level, message)
                .with_context(context)
                .with_data(data),
        );
    }

    /// System is unusable.
    fn emergency<M: Into<Message>>(&self, message: M, context: &Context)
    where
        Self: Sized,
    {
        self.log(Level::Emergency.as_str(), message, context);
    }

    /// Action must be taken immediately.
    fn alert<M: Into<Message>>(&self, message: M, context: &Context)
    where
        Self: Sized,
    {
        self.log(Level::Alert.as_str(), message, context);
    }

    /// Critical conditions.
    fn critical<M: Into<Message>>(&self, message: M, context: &Context)
    where
        Self: Sized,
    {
        self.log(Level::Critical.as_str(), message, context);
    }

    /// Runtime errors that do not require immediate action.
    fn error<M: Into<Message>>(&self, message: M, context: &Context)
    where
        Self: Sized,
    {
        self.log(Level::Error.as_str(), message, context);
    }

    /// Exceptional occurrences that are not errors.
    fn warning<M: Into<Message>>(&self, message: M, context: &Context)
    where
        Self: Sized,
    {
        self.log(Level::Warning.as_str(), message, context);
    }

    /// Normal but significant events.
    fn notice<M: Into<Message>>(&self, message: M, context: &Context)
    where
        Self: Sized,
    {
        self.log(Level::Notice.as_str(), message, context);
    }

    /// Interesting events.
    fn info<M: Into<Message>>(&self, message: M, context: &Context)
    where
        Self: Sized,
    {
        self.log(Level::Info.as_str(), message, context);
    }

    /// Detailed debug information.
    fn debug<M: Into<Message>>(&self, message: M, context: &Context)
    where
        Self: Sized,
    {
        self.log(Level::Debug.as_str(), message, context);
    }

    /// Flushes any buffered sink. Errors are ignored like write errors.
    fn flush(&self) {}
}

impl<L: Logger + ?Sized> Logger for &L {
    fn emit(&self, event: LogEvent<'_>) {
        (**self).emit(event);
    }

    fn flush(&self) {
        (**self).flush();
    }
}

impl<L: Logger + ?Sized> Logger for Box<L> {
    fn emit(&self, event: LogEvent<'_>) {
        (**self).emit(event);
    }

    fn flush(&self) {
        (**self).flush();
    }
}

impl<L: Logger + ?Sized> Logger for Arc<L> {
    fn emit(&self, event: LogEvent<'_>) {
        (**self).emit(event);
    }

    fn flush(&self) {
        (**self).flush();
    }
}
