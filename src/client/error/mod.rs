//! Error types for the console client.
//!
//! Every failure is scoped to the view that triggered it: list views turn errors into an
//! inline alert, actions into a modal alert, and the login form into a blocking alert.
//! Nothing here is fatal to the application.

pub mod config;

use thiserror::Error;

pub use config::ConfigError;

/// Main error type for console operations.
///
/// Variants map onto the four failure families the views distinguish: a missing session
/// (detected before any request), transport failures, non-success responses from the API,
/// and local validation failures.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ClientError {
    /// No session token is available; the request was never sent.
    #[error("Authentication required, please log in again")]
    SessionRequired,
    /// The request could not be sent or no response was received.
    #[error("Failed to send request: {0}")]
    Request(String),
    /// The API answered with a non-success status.
    #[error("Request failed with status {status}: {message}")]
    Status { status: u16, message: String },
    /// The response body did not match the expected shape.
    #[error("Failed to parse response: {0}")]
    Parse(String),
    /// Local validation rejected the input before any request was issued.
    #[error("{0}")]
    Validation(String),
}

impl ClientError {
    /// Whether the API rejected the credentials or the session token.
    pub fn is_unauthorized(&self) -> bool {
        matches!(
            self,
            Self::SessionRequired | Self::Status { status: 401, .. }
        )
    }

    /// Message shown to the viewer in alerts.
    pub fn user_message(&self) -> String {
        match self {
            Self::SessionRequired => "Sesión expirada, inicie sesión nuevamente".to_string(),
            Self::Request(_) => "No se pudo conectar con el servidor".to_string(),
            Self::Status { status: 401, .. } => "Credenciales inválidas".to_string(),
            Self::Status { status: 403, .. } => "No tiene permisos para esta acción".to_string(),
            Self::Status { message, .. } => message.clone(),
            Self::Parse(_) => "Respuesta inesperada del servidor".to_string(),
            Self::Validation(message) => message.clone(),
        }
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err.to_string())
    }
}
