//! Error type shared by all Tenantdesk crates

use axum::{
	Json,
	http::StatusCode,
	response::{IntoResponse, Response},
};

pub type ClResult<T> = std::result::Result<T, Error>;

#[derive(Debug)]
pub enum Error {
	NotFound,
	PermissionDenied,
	Unauthorized,
	ValidationError(String),
	ConfigError(String),
	NetworkError(String),
	Timeout,
	Internal(String),

	// externals
	Io(std::io::Error),
	Json(serde_json::Error),
}

impl Error {
	pub fn status(&self) -> StatusCode {
		match self {
			Error::NotFound => StatusCode::NOT_FOUND,
			Error::PermissionDenied => StatusCode::FORBIDDEN,
			Error::Unauthorized => StatusCode::UNAUTHORIZED,
			Error::ValidationError(_) | Error::Json(_) => StatusCode::BAD_REQUEST,
			Error::NetworkError(_) => StatusCode::BAD_GATEWAY,
			Error::Timeout => StatusCode::GATEWAY_TIMEOUT,
			Error::ConfigError(_) | Error::Internal(_) | Error::Io(_) => {
				StatusCode::INTERNAL_SERVER_ERROR
			}
		}
	}

	/// Stable error code used in the JSON error envelope
	pub fn code(&self) -> &'static str {
		match self {
			Error::NotFound => "E-CORE-NOTFOUND",
			Error::PermissionDenied => "E-AUTH-NOPERM",
			Error::Unauthorized => "E-AUTH-UNAUTH",
			Error::ValidationError(_) => "E-VAL-INVALID",
			Error::Json(_) => "E-VAL-PARSE",
			Error::NetworkError(_) => "E-NET-UPSTREAM",
			Error::Timeout => "E-NET-TIMEOUT",
			Error::ConfigError(_) | Error::Internal(_) | Error::Io(_) => "E-CORE-INTERNAL",
		}
	}
}

impl std::fmt::Display for Error {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Error::NotFound => write!(f, "not found"),
			Error::PermissionDenied => write!(f, "permission denied"),
			Error::Unauthorized => write!(f, "unauthorized"),
			Error::ValidationError(msg) => write!(f, "validation error: {}", msg),
			Error::ConfigError(msg) => write!(f, "configuration error: {}", msg),
			Error::NetworkError(msg) => write!(f, "network error: {}", msg),
			Error::Timeout => write!(f, "timeout"),
			Error::Internal(msg) => write!(f, "internal error: {}", msg),
			Error::Io(e) => write!(f, "io error: {}", e),
			Error::Json(e) => write!(f, "json error: {}", e),
		}
	}
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
	fn from(err: std::io::Error) -> Self {
		Self::Io(err)
	}
}

impl From<serde_json::Error> for Error {
	fn from(err: serde_json::Error) -> Self {
		Self::Json(err)
	}
}

impl IntoResponse for Error {
	fn into_response(self) -> Response {
		let status = self.status();
		if status.is_server_error() {
			tracing::error!("{}", self);
		}
		// Internal details stay in the log
		let message = match &self {
			Error::ConfigError(_) | Error::Internal(_) | Error::Io(_) => {
				"Internal server error".to_string()
			}
			other => other.to_string(),
		};
		let body = serde_json::json!({
			"error": {
				"code": self.code(),
				"message": message,
			}
		});
		(status, Json(body)).into_response()
	}
}


// vim: ts=4
