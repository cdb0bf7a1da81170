//! Event system: widget events, commands, local dispatch.

pub mod command;
pub mod handler;
pub mod message;

pub use command::{Command, TaskSlot};
pub use handler::EventDispatcher;
pub use message::{Envelope, WidgetEvent};
