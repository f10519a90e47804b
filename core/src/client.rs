//! Authenticated client and request executor for the Awqat Salah API.
//!
//! # Design
//! `AwqatClient` owns the base URL, the credentials, the bearer token, and a
//! blocking `ureq` agent. Construction performs the login exchange, so a
//! client value that exists always holds a valid token. Every accessor funnels
//! through `execute`, the single place HTTP semantics live: URL construction,
//! header injection, and status-driven envelope decoding. The token is
//! written exactly once during login and never mutated afterwards, which
//! makes a constructed client safe to share for concurrent read-only use.

use std::fmt;
use std::time::Duration;

use serde::de::DeserializeOwned;
use serde::Serialize;
use ureq::Agent;

use crate::error::ApiError;
use crate::http::{join_url, Method};
use crate::types::{
    AuthResponse, AwqatResponse, Credentials, DailyContent, Location, PrayerTime, PrayerTimeEid,
};

/// Production address of the Awqat Salah API.
pub const DEFAULT_BASE_URL: &str = "https://awqatsalah.diyanet.gov.tr/";

/// Per-request deadline applied to the whole round-trip.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// Synchronous client for the Awqat Salah prayer-times API.
///
/// Logs in at construction and attaches `Authorization: Bearer <token>` to
/// every subsequent request. All accessors block the calling thread until
/// the round-trip completes or the one-minute timeout elapses; there is no
/// retry, caching, or token refresh.
#[derive(Clone)]
pub struct AwqatClient {
    base_url: String,
    credentials: Credentials,
    access_token: String,
    agent: Agent,
}

// Credentials and token stay out of debug output.
impl fmt::Debug for AwqatClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AwqatClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl AwqatClient {
    /// Log in against the production API and return a ready client.
    ///
    /// Fails if the network call fails or the server rejects the
    /// credentials; no client value (and no token) exists on failure.
    pub fn new(credentials: Credentials) -> Result<Self, ApiError> {
        Self::with_base_url(DEFAULT_BASE_URL, credentials)
    }

    /// Like [`AwqatClient::new`] but against an arbitrary base address.
    pub fn with_base_url(base_url: &str, credentials: Credentials) -> Result<Self, ApiError> {
        // 4xx/5xx and redirects must arrive as data so execute can interpret
        // the status itself rather than seeing a transport error or the
        // response of a followed Location.
        let agent = Agent::config_builder()
            .http_status_as_error(false)
            .max_redirects(0)
            .timeout_global(Some(REQUEST_TIMEOUT))
            .build()
            .new_agent();

        let mut client = Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            credentials,
            access_token: String::new(),
            agent,
        };
        client.login()?;
        Ok(client)
    }

    /// One-time login exchange. The only write to `access_token`.
    fn login(&mut self) -> Result<(), ApiError> {
        let envelope: AwqatResponse<AuthResponse> =
            self.execute(Method::Post, "auth/login", "", Some(&self.credentials))?;
        let auth = into_data(envelope)?;
        // The refresh token is discarded; this client never refreshes.
        self.access_token = auth.access_token;
        Ok(())
    }

    /// All countries known to the API.
    pub fn countries(&self) -> Result<Vec<Location>, ApiError> {
        self.get("api/place/countries", "")
    }

    /// All states, across every country.
    pub fn states(&self) -> Result<Vec<Location>, ApiError> {
        self.get("api/place/states", "")
    }

    /// All cities, across every state.
    pub fn cities(&self) -> Result<Vec<Location>, ApiError> {
        self.get("api/place/cities", "")
    }

    /// States belonging to one country.
    pub fn states_by_country_id(&self, country_id: &str) -> Result<Vec<Location>, ApiError> {
        self.get("api/place/states", country_id)
    }

    /// Cities belonging to one state.
    pub fn cities_by_state_id(&self, state_id: &str) -> Result<Vec<Location>, ApiError> {
        self.get("api/place/cities", state_id)
    }

    /// The verse, hadith, and prayer of the day.
    pub fn daily_content(&self) -> Result<DailyContent, ApiError> {
        self.get("api/DailyContent", "")
    }

    /// Today's prayer schedule for a city.
    pub fn prayer_time_daily_by_city_id(&self, city_id: &str) -> Result<Vec<PrayerTime>, ApiError> {
        self.get("api/PrayerTime/Daily", city_id)
    }

    /// Prayer schedules for the coming week.
    pub fn prayer_time_weekly_by_city_id(
        &self,
        city_id: &str,
    ) -> Result<Vec<PrayerTime>, ApiError> {
        self.get("api/PrayerTime/Weekly", city_id)
    }

    /// Prayer schedules for the coming month.
    pub fn prayer_time_monthly_by_city_id(
        &self,
        city_id: &str,
    ) -> Result<Vec<PrayerTime>, ApiError> {
        self.get("api/PrayerTime/Monthly", city_id)
    }

    /// Eid al-Adha and Eid al-Fitr schedule for a city.
    pub fn prayer_time_eid_by_city_id(&self, city_id: &str) -> Result<PrayerTimeEid, ApiError> {
        self.get("api/PrayerTime/Eid", city_id)
    }

    /// Prayer schedules for the month of Ramadan.
    pub fn prayer_time_ramadan_by_city_id(
        &self,
        city_id: &str,
    ) -> Result<Vec<PrayerTime>, ApiError> {
        self.get("api/PrayerTime/Ramadan", city_id)
    }

    /// GET an endpoint and unwrap the envelope's `data` field.
    fn get<T: DeserializeOwned>(&self, endpoint: &str, path_suffix: &str) -> Result<T, ApiError> {
        let envelope = self.execute(Method::Get, endpoint, path_suffix, None::<&()>)?;
        into_data(envelope)
    }

    /// Single chokepoint for every network call.
    ///
    /// Builds the URL (the path suffix joins for GET only; POST endpoints
    /// never take one), serializes the body (POST only), attaches the bearer
    /// token when one is held plus the JSON content headers, sends the
    /// request, and decodes the response by status code: 200 decodes into
    /// the typed envelope, the recognized error statuses decode into an
    /// untyped envelope surfaced as [`ApiError::Api`], and anything else is
    /// [`ApiError::UnexpectedStatus`] with the body left unread.
    fn execute<T: DeserializeOwned>(
        &self,
        method: Method,
        endpoint: &str,
        path_suffix: &str,
        body: Option<&impl Serialize>,
    ) -> Result<AwqatResponse<T>, ApiError> {
        let result = match method {
            Method::Get => {
                let url = join_url(&self.base_url, endpoint, path_suffix);
                let mut req = self.agent.get(&url);
                if !self.access_token.is_empty() {
                    req = req.header("Authorization", format!("Bearer {}", self.access_token));
                }
                req.header("Content-Type", "application/json")
                    .header("Accept", "application/json")
                    .call()
            }
            Method::Post => {
                // The path suffix is a GET-only parameter; POST endpoints
                // never take one.
                let url = join_url(&self.base_url, endpoint, "");
                let payload = match body {
                    Some(value) => serde_json::to_string(value)
                        .map_err(|e| ApiError::Decode(e.to_string()))?,
                    None => String::new(),
                };
                let mut req = self.agent.post(&url);
                if !self.access_token.is_empty() {
                    req = req.header("Authorization", format!("Bearer {}", self.access_token));
                }
                req.header("Content-Type", "application/json")
                    .header("Accept", "application/json")
                    .send(payload.as_bytes())
            }
        };

        let mut response = result.map_err(|e| ApiError::Transport(e.to_string()))?;
        let status = response.status().as_u16();

        match status {
            200 => {
                let body = response
                    .body_mut()
                    .read_to_string()
                    .map_err(|e| ApiError::Transport(e.to_string()))?;
                serde_json::from_str(&body).map_err(|e| ApiError::Decode(e.to_string()))
            }
            400 | 401 | 403 | 404 | 415 | 500 => {
                let body = response
                    .body_mut()
                    .read_to_string()
                    .map_err(|e| ApiError::Transport(e.to_string()))?;
                let envelope: AwqatResponse<serde_json::Value> =
                    serde_json::from_str(&body).map_err(|e| ApiError::Decode(e.to_string()))?;
                Err(ApiError::Api {
                    status,
                    success: envelope.success,
                    message: envelope.message,
                })
            }
            other => Err(ApiError::UnexpectedStatus(other)),
        }
    }
}

/// Extract `data` from a success envelope, enforcing the envelope invariant
/// that a successful response always carries a payload.
fn into_data<T>(envelope: AwqatResponse<T>) -> Result<T, ApiError> {
    envelope
        .data
        .ok_or_else(|| ApiError::Decode("success envelope is missing its data field".to_string()))
}
