//! Mock implementations of MetricCollector for testing.

use crate::model::{MetricCollector, MetricDescs, Observation};
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// A mock metric collector that can be configured to succeed or fail.
pub struct MockMetricCollector {
    should_fail: bool,
    error_message: String,
    create_data: Box<dyn Fn() -> Vec<Observation> + Send + Sync>,
}

impl MockMetricCollector {
    /// Creates a new mock collector that succeeds with one offset observation.
    pub fn new_success() -> Self {
        Self {
            should_fail: false,
            error_message: String::new(),
            create_data: Box::new(|| {
                let descs = MetricDescs::new();
                vec![Observation::new(
                    &descs.sensor_offset_temperature,
                    vec![
                        "device-mock".to_string(),
                        "Mock Remo".to_string(),
                        "1W000000MOCK".to_string(),
                    ],
                    0.5,
                )]
            }),
        }
    }

    /// Creates a new mock collector that fails with the given error message.
    pub fn new_failure(error_message: impl Into<String>) -> Self {
        Self {
            should_fail: true,
            error_message: error_message.into(),
            create_data: Box::new(|| Vec::new()),
        }
    }
}

#[async_trait]
impl MetricCollector for MockMetricCollector {
    async fn collect(&self) -> anyhow::Result<Vec<Observation>> {
        if self.should_fail {
            anyhow::bail!(self.error_message.clone())
        } else {
            Ok((self.create_data)())
        }
    }
}

/// A mock collector that tracks the number of times it has been called.
pub struct CountingMockCollector {
    call_count: Arc<AtomicUsize>,
}

impl CountingMockCollector {
    /// Creates a new counting mock collector sharing the given counter.
    pub fn new(call_count: Arc<AtomicUsize>) -> Self {
        Self { call_count }
    }
}

#[async_trait]
impl MetricCollector for CountingMockCollector {
    async fn collect(&self) -> anyhow::Result<Vec<Observation>> {
        self.call_count.fetch_add(1, Ordering::SeqCst);
        Ok(Vec::new())
    }
}

/// A mock collector that takes a fixed time to answer.
pub struct SlowMockCollector {
    delay: std::time::Duration,
}

impl SlowMockCollector {
    /// Creates a new mock collector that answers after `delay`.
    pub fn new(delay: std::time::Duration) -> Self {
        Self { delay }
    }
}

#[async_trait]
impl MetricCollector for SlowMockCollector {
    async fn collect(&self) -> anyhow::Result<Vec<Observation>> {
        tokio::time::sleep(self.delay).await;
        Ok(Vec::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_success_collector() {
        let collector = MockMetricCollector::new_success();
        let data = collector.collect().await.unwrap();
        assert_eq!(data.len(), 1);
        assert_eq!(data[0].name(), "natureremo_sensor_offset_temperature");
    }

    #[tokio::test]
    async fn test_mock_failure_collector() {
        let collector = MockMetricCollector::new_failure("Test error");
        let result = collector.collect().await;
        assert!(result.unwrap_err().to_string().contains("Test error"));
    }

    #[tokio::test]
    async fn test_counting_mock_collector() {
        let count = Arc::new(AtomicUsize::new(0));
        let collector = CountingMockCollector::new(Arc::clone(&count));

        let _ = collector.collect().await;
        let _ = collector.collect().await;
        assert_eq!(count.load(Ordering::SeqCst), 2);
    }
}
