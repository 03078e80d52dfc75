mod health;

pub use health::{HealthStatus, SERVICE_NAME};
