pub mod admin_gate;
pub mod analytics;
pub mod processing_flow;
pub mod robots;
