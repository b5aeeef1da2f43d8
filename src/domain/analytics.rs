use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::processing::ProductType;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsEvent {
    pub name: String,
    pub product_type: ProductType,
    /// Correlates the event with a single page mount.
    pub mount_id: Uuid,
    pub occurred_at: DateTime<Utc>,
}

impl AnalyticsEvent {
    pub fn new(name: &str, product_type: ProductType) -> Self {
        Self {
            name: name.to_string(),
            product_type,
            mount_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
        }
    }
}
