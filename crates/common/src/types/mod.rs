use serde::Serialize;

/// Uniform success envelope: `{ success: true, message?, data }`.
#[derive(Serialize, Debug, Clone)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub data: T,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self { success: true, message: None, data }
    }

    pub fn with_message(data: T, message: impl Into<String>) -> Self {
        Self { success: true, message: Some(message.into()), data }
    }
}

/// Liveness payload for `/api/health`.
#[derive(Serialize, Debug, Clone)]
pub struct Health {
    pub success: bool,
    pub message: &'static str,
    pub timestamp: String,
    pub version: &'static str,
    pub environment: String,
}

#[derive(Serialize, Debug, Clone)]
pub struct ServiceStatus {
    pub api: &'static str,
    pub database: &'static str,
}

/// Readiness payload for `/api/health/ready`.
#[derive(Serialize, Debug, Clone)]
pub struct Readiness {
    pub success: bool,
    pub ready: bool,
    pub services: ServiceStatus,
}

impl Readiness {
    // No backing store exists, so the database is always reported as not connected.
    pub fn current() -> Self {
        Self {
            success: true,
            ready: true,
            services: ServiceStatus { api: "healthy", database: "not_connected" },
        }
    }
}
