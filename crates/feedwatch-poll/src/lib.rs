//! Timed polling loop and its record source / notifier collaborators

mod driver;
mod error;
pub mod notify;
pub mod render;
pub mod source;

pub use driver::{CycleReport, Poller};
pub use error::{NotifyError, PollError, SourceError};
pub use notify::{JsonLinesNotifier, Notifier, WebhookNotifier};
pub use render::{render, Notification};
pub use source::{FileSource, HttpSource, RecordSource};
