//! Error types for the Awqat Salah API client.
//!
//! # Design
//! The taxonomy follows the four ways a call can fail: the network itself
//! (`Transport`), the body (`Decode`), the server saying no with a decodable
//! envelope (`Api`), and a status code outside the recognized sets
//! (`UnexpectedStatus`). `Api` keeps the envelope's `success` flag and
//! `message` text so callers can inspect exactly what the server said.

use std::fmt;

/// Errors returned by `AwqatClient` operations.
#[derive(Debug)]
pub enum ApiError {
    /// Connection, DNS, or timeout failure before a response arrived.
    Transport(String),

    /// A body failed JSON conversion: the response was not valid JSON, did
    /// not match the expected shape, or a success envelope arrived without
    /// its `data` field.
    Decode(String),

    /// The server answered with a recognized error status
    /// (400/401/403/404/415/500) and a decodable envelope.
    Api {
        status: u16,
        success: bool,
        message: String,
    },

    /// The server answered with a status outside {200, 400, 401, 403, 404,
    /// 415, 500}. The body is never read for these.
    UnexpectedStatus(u16),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Transport(msg) => write!(f, "transport error: {msg}"),
            ApiError::Decode(msg) => write!(f, "decode error: {msg}"),
            ApiError::Api {
                status,
                success,
                message,
            } => {
                write!(f, "API error (HTTP {status}, success={success}): {message}")
            }
            ApiError::UnexpectedStatus(code) => {
                write!(f, "unexpected HTTP response status code: {code}")
            }
        }
    }
}

impl std::error::Error for ApiError {}
