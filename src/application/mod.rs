pub mod use_cases;

pub use use_cases::admin_gate::{authorize, GateDecision};
pub use use_cases::analytics::{AnalyticsSink, SharedAnalyticsLog};
pub use use_cases::processing_flow::{ProcessingPage, ProcessingSession};
pub use use_cases::robots::RobotsPolicy;
