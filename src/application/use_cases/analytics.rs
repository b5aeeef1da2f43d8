use serde::Serialize;
use std::sync::{Arc, Mutex, PoisonError};
use tracing::info;

use crate::domain::analytics::AnalyticsEvent;
use crate::domain::processing::ProductType;

pub const DEFAULT_MAX_EVENTS: usize = 100;

pub trait AnalyticsSink: Send + Sync {
    fn track(&self, event: AnalyticsEvent);
}

#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct AnalyticsSummary {
    pub total_events: usize,
    pub quick_count: usize,
    pub deep_count: usize,
}

/// Bounded event log; the oldest events are dropped once `max_entries` is reached.
pub struct AnalyticsLog {
    events: Vec<AnalyticsEvent>,
    max_entries: usize,
}

impl AnalyticsLog {
    pub fn new(max_entries: usize) -> Self {
        Self {
            events: Vec::new(),
            max_entries,
        }
    }

    pub fn push(&mut self, event: AnalyticsEvent) {
        self.events.push(event);
        if self.events.len() > self.max_entries {
            let overflow = self.events.len() - self.max_entries;
            self.events.drain(0..overflow);
        }
    }

    /// Newest first.
    pub fn recent_events(&self, limit: usize) -> Vec<AnalyticsEvent> {
        self.events.iter().rev().take(limit).cloned().collect()
    }

    pub fn summary(&self) -> AnalyticsSummary {
        let mut summary = AnalyticsSummary {
            total_events: self.events.len(),
            ..Default::default()
        };
        for event in &self.events {
            match event.product_type {
                ProductType::Quick => summary.quick_count += 1,
                ProductType::Deep => summary.deep_count += 1,
            }
        }
        summary
    }
}

/// Thread-safe handle to an [`AnalyticsLog`] that also emits every event to `tracing`.
#[derive(Clone)]
pub struct SharedAnalyticsLog {
    inner: Arc<Mutex<AnalyticsLog>>,
}

impl SharedAnalyticsLog {
    pub fn new(max_entries: usize) -> Self {
        Self {
            inner: Arc::new(Mutex::new(AnalyticsLog::new(max_entries))),
        }
    }

    pub fn recent_events(&self, limit: usize) -> Vec<AnalyticsEvent> {
        self.lock().recent_events(limit)
    }

    pub fn summary(&self) -> AnalyticsSummary {
        self.lock().summary()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, AnalyticsLog> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for SharedAnalyticsLog {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_EVENTS)
    }
}

impl AnalyticsSink for SharedAnalyticsLog {
    fn track(&self, event: AnalyticsEvent) {
        info!(
            target: "analytics",
            event = %event.name,
            product_type = %event.product_type,
            mount_id = %event.mount_id,
            "Analytics event tracked"
        );
        self.lock().push(event);
    }
}
