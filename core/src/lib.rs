//! Synchronous client for the Awqat Salah prayer-times API.
//!
//! # Overview
//! Authenticates with email/password at construction, then exposes typed
//! accessors for the place, daily-content, and prayer-time endpoints. Every
//! response arrives in the API's uniform `{data, success, message}` envelope;
//! accessors unwrap `data` and surface everything else as [`ApiError`].
//!
//! # Design
//! - Construction performs the login POST, so an `AwqatClient` that exists
//!   always holds a valid bearer token. The token is write-once: the client
//!   is effectively immutable after construction and safe to share across
//!   threads for read-only use.
//! - All calls block until the round-trip finishes or a one-minute deadline
//!   elapses. No retries, no caching, no token refresh.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod client;
pub mod error;
pub mod http;
pub mod types;

pub use client::{AwqatClient, DEFAULT_BASE_URL};
pub use error::ApiError;
pub use http::Method;
pub use types::{
    AuthResponse, AwqatResponse, Credentials, DailyContent, Location, PrayerTime, PrayerTimeEid,
};
