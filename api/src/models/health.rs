use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;

/// Identifier reported in the `service` field of every health payload.
pub const SERVICE_NAME: &str = "squeegee-samurai-backend";

/// Liveness payload returned by `GET /` and `GET /health`.
///
/// Built fresh for each request and dropped once serialized. Field order
/// here is the field order on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    pub service: &'static str,
    pub timestamp: String,
}

impl HealthStatus {
    /// Status stamped with the current wall-clock time.
    pub fn now() -> Self {
        Self::at(Utc::now())
    }

    /// Status stamped with `instant`.
    ///
    /// The fraction is dropped when zero and otherwise printed as 3, 6 or 9
    /// digits, e.g. `2024-01-15T10:30:00.123456Z`.
    pub fn at(instant: DateTime<Utc>) -> Self {
        Self {
            status: "ok",
            service: SERVICE_NAME,
            timestamp: instant.to_rfc3339_opts(SecondsFormat::AutoSi, true),
        }
    }
}
