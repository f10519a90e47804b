//! Domain DTOs for the Awqat Salah API.
//!
//! # Design
//! These types mirror the remote API's JSON schema (camelCase field names on
//! the wire) but are defined independently from the mock-server crate.
//! Integration tests catch any schema drift between the two. All fields are
//! owned values; payloads belong to the caller once an accessor returns.

use serde::{Deserialize, Serialize};

/// Login credentials, sent as the JSON body of `POST auth/login`.
///
/// Supplied once at client construction and never mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// The uniform envelope wrapping every API response body.
///
/// When `success` is true, `data` carries the payload; when false, `data`
/// is absent and `message` explains the failure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AwqatResponse<T> {
    pub data: Option<T>,
    pub success: bool,
    pub message: String,
}

/// Token pair returned by the login endpoint.
///
/// Only the access token is retained by the client; the refresh token is
/// discarded (this client performs no token refresh).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub access_token: String,
    pub refresh_token: String,
}

/// A country, state, or city as served by the place endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub id: i64,
    pub code: String,
    pub name: String,
}

/// Daily religious content: a verse, a hadith, and a prayer with sources.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DailyContent {
    pub id: i64,
    pub day_of_year: i64,
    pub verse: String,
    pub verse_source: String,
    pub hadith: String,
    pub hadith_source: String,
    pub pray: String,
    pub pray_source: String,
}

/// One day's prayer schedule for a city.
///
/// The API reports every field as a preformatted string: the five daily
/// prayer times, sunrise, astronomical twilight, Qibla time, and hijri and
/// Gregorian dates in short/long and ISO 8601 variants.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PrayerTime {
    pub shape_moon_url: String,
    pub fajr: String,
    pub sunrise: String,
    pub dhuhr: String,
    pub asr: String,
    pub maghrib: String,
    pub isha: String,
    pub astronomical_sunset: String,
    pub astronomical_sunrise: String,
    pub hijri_date_short: String,
    pub hijri_date_short_iso8601: String,
    pub hijri_date_long_iso8601: String,
    pub hijri_date_long: String,
    pub qibla_time: String,
    pub gregorian_date_short: String,
    pub gregorian_date_short_iso8601: String,
    pub gregorian_date_long: String,
    pub gregorian_date_long_iso8601: String,
}

/// Eid al-Adha and Eid al-Fitr prayer schedule for a city.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PrayerTimeEid {
    pub eid_al_adha_hijri: String,
    pub eid_al_adha_time: String,
    pub eid_al_adha_date: String,
    pub eid_al_fitr_hijri: String,
    pub eid_al_fitr_time: String,
    pub eid_al_fitr_date: String,
}
