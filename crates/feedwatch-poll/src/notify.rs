//! Consumers of newly seen records

use async_trait::async_trait;
use feedwatch_core::Record;
use std::io::Write;

use crate::error::NotifyError;
use crate::render::render;

/// Delivers one new record downstream; records arrive in fetch order
#[async_trait]
pub trait Notifier: Send {
    fn name(&self) -> &str;

    async fn notify(&mut self, record: &Record) -> Result<(), NotifyError>;
}

/// Writes each rendered notification as one JSON line
pub struct JsonLinesNotifier<W> {
    writer: W,
}

impl JsonLinesNotifier<std::io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write + Send> JsonLinesNotifier<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

#[async_trait]
impl<W: Write + Send> Notifier for JsonLinesNotifier<W> {
    fn name(&self) -> &str {
        "stdout"
    }

    async fn notify(&mut self, record: &Record) -> Result<(), NotifyError> {
        let line = serde_json::to_string(&render(record))?;
        writeln!(self.writer, "{}", line)?;
        self.writer.flush()?;
        Ok(())
    }
}

/// Posts each notification as a single embed to a Discord-compatible webhook
#[derive(Debug, Clone)]
pub struct WebhookNotifier {
    client: reqwest::Client,
    url: String,
}

impl WebhookNotifier {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: url.into(),
        }
    }
}

#[async_trait]
impl Notifier for WebhookNotifier {
    fn name(&self) -> &str {
        "webhook"
    }

    async fn notify(&mut self, record: &Record) -> Result<(), NotifyError> {
        let payload = serde_json::json!({ "embeds": [render(record)] });
        let response = self.client.post(&self.url).json(&payload).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(NotifyError::Status(status.as_u16()));
        }
        Ok(())
    }
}
