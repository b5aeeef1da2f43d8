pub mod analytics;
pub mod credentials;
pub mod error;
pub mod markup;
pub mod processing;
pub mod site;
pub mod theme;
