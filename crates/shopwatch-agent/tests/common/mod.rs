//! Shared fixtures for the agent integration tests.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;

use shopwatch_agent::{AgentConfig, ErrorReport, PageInfo, Transport, TransportError};

/// Transport double that records every delivered report as its wire JSON.
#[derive(Default)]
pub struct RecordingTransport {
    sent: Mutex<Vec<(String, serde_json::Value)>>,
}

impl RecordingTransport {
    /// (collector URL, JSON body) pairs in delivery order.
    pub fn sent(&self) -> Vec<(String, serde_json::Value)> {
        self.sent.lock().unwrap().clone()
    }

    pub fn sent_count(&self) -> usize {
        self.sent.lock().unwrap().len()
    }
}

#[async_trait]
impl Transport for RecordingTransport {
    async fn post_json(&self, url: &str, report: &ErrorReport) -> Result<u16, TransportError> {
        let body = serde_json::to_value(report).expect("report serializes");
        self.sent.lock().unwrap().push((url.to_string(), body));
        Ok(200)
    }
}

/// Poll until `condition` holds or a one-second deadline passes.
pub async fn wait_until(condition: impl Fn() -> bool) {
    for _ in 0..100 {
        if condition() {
            return;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    panic!("condition not met within 1s");
}

/// Let in-flight observer tasks drain, then return.
pub async fn settle() {
    tokio::time::sleep(Duration::from_millis(100)).await;
}

pub fn test_page() -> PageInfo {
    PageInfo::new("shop.test", "https://shop.test/checkout/", "test-agent/1.0")
}

pub fn active_config(collector_url: &str) -> AgentConfig {
    AgentConfig {
        collector_url: collector_url.to_string(),
        page_eligible: true,
        ..Default::default()
    }
}

pub fn transport() -> Arc<RecordingTransport> {
    Arc::new(RecordingTransport::default())
}
