pub mod gas;
pub mod messages;
pub mod metrics;
