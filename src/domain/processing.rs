use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

use crate::domain::analytics::AnalyticsEvent;

pub const PRE_RESULT_ROUTE: &str = "/pre-result";
pub const PROCESSING_STARTED_EVENT: &str = "processing_started";

const QUICK_DURATION_MS: u64 = 4000;
const DEEP_DURATION_MS: u64 = 6000;

const QUICK_STAGES: &[&str] = &[
    "Leyendo tus respuestas...",
    "Buscando patrones en tu relación...",
    "Calculando tu puntuación...",
    "Preparando tu diagnóstico...",
];

const DEEP_STAGES: &[&str] = &[
    "Procesando tus respuestas en detalle...",
    "Comparando con miles de casos similares...",
    "Evaluando señales de compromiso...",
    "Midiendo la compatibilidad emocional...",
    "Identificando puntos de mejora...",
    "Redactando tu análisis profundo...",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductType {
    Quick,
    Deep,
}

impl ProductType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProductType::Quick => "quick",
            ProductType::Deep => "deep",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "quick" => Some(ProductType::Quick),
            "deep" => Some(ProductType::Deep),
            _ => None,
        }
    }
}

impl fmt::Display for ProductType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A timed sequence of stage labels that ends in a navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessingFlow {
    pub product: ProductType,
    pub stages: Vec<String>,
    pub duration: Duration,
    pub next_route: String,
}

impl ProcessingFlow {
    pub fn quick() -> Self {
        Self::new(ProductType::Quick, QUICK_STAGES, QUICK_DURATION_MS)
    }

    pub fn deep() -> Self {
        Self::new(ProductType::Deep, DEEP_STAGES, DEEP_DURATION_MS)
    }

    pub fn for_product(product: ProductType) -> Self {
        match product {
            ProductType::Quick => Self::quick(),
            ProductType::Deep => Self::deep(),
        }
    }

    fn new(product: ProductType, stages: &[&str], duration_ms: u64) -> Self {
        Self {
            product,
            stages: stages.iter().map(|stage| stage.to_string()).collect(),
            duration: Duration::from_millis(duration_ms),
            next_route: PRE_RESULT_ROUTE.to_string(),
        }
    }

    /// Time each stage stays on screen.
    pub fn stage_interval(&self) -> Duration {
        let count = self.stages.len().max(1) as u32;
        self.duration / count
    }

    /// Index of the stage visible at `elapsed`. The last stage holds once the flow completes.
    pub fn stage_at(&self, elapsed: Duration) -> usize {
        let last = self.stages.len().saturating_sub(1);
        let interval = self.stage_interval().as_millis();
        if interval == 0 {
            return last;
        }
        let index = (elapsed.as_millis() / interval) as usize;
        index.min(last)
    }

    /// Whole percent of the duration elapsed, capped at 100.
    pub fn progress_at(&self, elapsed: Duration) -> u8 {
        let total = self.duration.as_millis();
        if total == 0 {
            return 100;
        }
        let percent = elapsed.as_millis().saturating_mul(100) / total;
        percent.min(100) as u8
    }

    /// Next route with the incoming raw query string appended untouched.
    pub fn destination(&self, raw_query: &str) -> String {
        let query = raw_query.strip_prefix('?').unwrap_or(raw_query);
        if query.is_empty() {
            self.next_route.clone()
        } else {
            format!("{}?{}", self.next_route, query)
        }
    }

    pub fn mount_event(&self) -> AnalyticsEvent {
        AnalyticsEvent::new(PROCESSING_STARTED_EVENT, self.product)
    }
}
