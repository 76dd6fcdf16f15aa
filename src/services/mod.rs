pub mod gas;
pub mod messages;
pub mod metrics;
pub mod rate_limit;
pub mod security;
