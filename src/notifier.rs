//! Handing exported messages to the notification service.
//!
//! The crate does not talk to the network itself. A [`Transport`] does the
//! delivery; the [`Notifier`] exports the message, builds the outgoing request
//! from configuration and gives an optional [`RequestAlter`] hook one chance
//! to rewrite it before the transport is called.

use std::collections::BTreeMap;
use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::message::MessageEnvelope;

/// Options passed along with the request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestOptions {
    pub headers: BTreeMap<String, String>,
    pub timeout: Duration,
}

/// Where and how a payload is about to be sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundRequest {
    pub url: String,
    pub options: RequestOptions,
}

impl OutboundRequest {
    /// Request for `config`: JSON content type and the configured timeout.
    pub fn from_config(config: &Config) -> Self {
        let mut headers = BTreeMap::new();
        headers.insert("Content-Type".to_string(), "application/json".to_string());

        Self {
            url: config.service_url.clone(),
            options: RequestOptions {
                headers,
                timeout: config.request_timeout,
            },
        }
    }
}

/// Hook that may rewrite the request right before it is sent.
pub trait RequestAlter: Send + Sync {
    fn alter(&self, request: &mut OutboundRequest);
}

impl<F> RequestAlter for F
where
    F: Fn(&mut OutboundRequest) + Send + Sync,
{
    fn alter(&self, request: &mut OutboundRequest) {
        self(request)
    }
}

/// Delivers a serialized message.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: &OutboundRequest, payload: &str, recipients: &[String]) -> Result<()>;
}

/// Sends messages through a transport.
pub struct Notifier<T: Transport> {
    config: Config,
    transport: T,
    request_alter: Option<Box<dyn RequestAlter>>,
}

impl<T: Transport> Notifier<T> {
    pub fn new(config: Config, transport: T) -> Self {
        Self {
            config,
            transport,
            request_alter: None,
        }
    }

    /// Install the request-alteration hook, replacing any previous one.
    pub fn with_request_alter(mut self, hook: impl RequestAlter + 'static) -> Self {
        self.request_alter = Some(Box::new(hook));
        self
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Export `message` and hand it to the transport.
    ///
    /// The hook runs exactly once, after a successful export and before the
    /// transport is called. A failed export stops here: neither the hook nor
    /// the transport is invoked.
    pub async fn send(&self, message: &MessageEnvelope) -> Result<()> {
        let payload = message.export().context("Failed to export message")?;
        debug!("Exported message ({} bytes)", payload.len());

        let mut request = OutboundRequest::from_config(&self.config);
        if let Some(hook) = &self.request_alter {
            hook.alter(&mut request);
            debug!("Request altered, sending to {}", request.url);
        }

        let recipients = message.recipients();
        if recipients.is_empty() {
            warn!("Sending message from '{}' with no recipients", message.source());
        }

        self.transport
            .send(&request, &payload, recipients)
            .await
            .with_context(|| format!("Failed to deliver message to {}", request.url))?;

        info!(
            "Message from '{}' sent to {} recipient(s)",
            message.source(),
            recipients.len()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::SupportedLanguages;
    use crate::i18n::MultilingualValue;
    use crate::message::EnvelopeOptions;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    #[derive(Default)]
    struct RecordingTransport {
        sent: Mutex<Vec<(OutboundRequest, String, Vec<String>)>>,
    }

    #[async_trait]
    impl Transport for RecordingTransport {
        async fn send(&self, request: &OutboundRequest, payload: &str, recipients: &[String]) -> Result<()> {
            self.sent
                .lock()
                .unwrap()
                .push((request.clone(), payload.to_string(), recipients.to_vec()));
            Ok(())
        }
    }

    struct FailingTransport;

    #[async_trait]
    impl Transport for FailingTransport {
        async fn send(&self, _: &OutboundRequest, _: &str, _: &[String]) -> Result<()> {
            anyhow::bail!("connection refused")
        }
    }

    fn config() -> Config {
        Config {
            service_url: "https://mece.example.com/messages".to_string(),
            request_timeout: Duration::from_secs(30),
            supported_languages: SupportedLanguages::default(),
        }
    }

    fn message() -> MessageEnvelope {
        MessageEnvelope::new(vec!["user1".into(), "user2".into()], "src", EnvelopeOptions::default())
    }

    #[test]
    fn test_request_from_config() {
        let request = OutboundRequest::from_config(&config());
        assert_eq!(request.url, "https://mece.example.com/messages");
        assert_eq!(request.options.timeout, Duration::from_secs(30));
        assert_eq!(
            request.options.headers.get("Content-Type").map(String::as_str),
            Some("application/json")
        );
    }

    #[tokio::test]
    async fn test_send_hands_payload_to_transport() {
        let notifier = Notifier::new(config(), RecordingTransport::default());
        let message = message();

        notifier.send(&message).await.expect("Should send");

        let sent = notifier.transport().sent.lock().unwrap();
        assert_eq!(sent.len(), 1);
        let (request, payload, recipients) = &sent[0];
        assert_eq!(request, &OutboundRequest::from_config(&config()));
        assert_eq!(payload, &message.export().unwrap());
        assert_eq!(recipients, &vec!["user1".to_string(), "user2".to_string()]);
    }

    #[tokio::test]
    async fn test_hook_alters_request_once() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);

        let notifier = Notifier::new(config(), RecordingTransport::default()).with_request_alter(
            move |request: &mut OutboundRequest| {
                counter.fetch_add(1, Ordering::SeqCst);
                request.url = format!("{}/hi", request.url);
                request
                    .options
                    .headers
                    .insert("X-CustomHeader".to_string(), "Hello".to_string());
                request.options.timeout = Duration::from_secs(600);
            },
        );

        notifier.send(&message()).await.expect("Should send");

        assert_eq!(calls.load(Ordering::SeqCst), 1);
        let sent = notifier.transport().sent.lock().unwrap();
        let (request, _, _) = &sent[0];
        assert_eq!(request.url, "https://mece.example.com/messages/hi");
        assert_eq!(request.options.timeout, Duration::from_secs(600));
        assert_eq!(
            request.options.headers.get("X-CustomHeader").map(String::as_str),
            Some("Hello")
        );
    }

    #[tokio::test]
    async fn test_export_failure_skips_hook_and_transport() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let notifier = Notifier::new(config(), RecordingTransport::default()).with_request_alter(
            move |_: &mut OutboundRequest| {
                counter.fetch_add(1, Ordering::SeqCst);
            },
        );

        let mut message = message();
        message.set_heading(MultilingualValue::with_languages(SupportedLanguages::new(["fi"])));

        let err = notifier.send(&message).await.unwrap_err();
        assert!(err.to_string().contains("Failed to export message"));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
        assert!(notifier.transport().sent.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_transport_error_is_propagated_with_context() {
        let notifier = Notifier::new(config(), FailingTransport);
        let err = notifier.send(&message()).await.unwrap_err();
        assert!(err.to_string().contains("https://mece.example.com/messages"));
        assert!(format!("{:#}", err).contains("connection refused"));
    }
}
