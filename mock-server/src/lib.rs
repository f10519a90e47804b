use axum::{
    extract::Path,
    http::{header, HeaderMap, StatusCode},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;

/// Credentials the mock server accepts at `POST /auth/login`.
pub const TEST_EMAIL: &str = "api@example.com";
pub const TEST_PASSWORD: &str = "correct-horse";

/// Tokens issued on a successful login. Every `/api` route requires
/// `Authorization: Bearer ACCESS_TOKEN`; the refresh token is never checked.
pub const ACCESS_TOKEN: &str = "mock-access-token";
pub const REFRESH_TOKEN: &str = "mock-refresh-token";

/// The uniform `{data, success, message}` wrapper around every response.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub data: Option<T>,
    pub success: bool,
    pub message: String,
}

#[derive(Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthBody {
    pub access_token: String,
    pub refresh_token: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub id: i64,
    pub code: String,
    pub name: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
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

#[derive(Clone, Debug, Serialize, Deserialize)]
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

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrayerTimeEid {
    pub eid_al_adha_hijri: String,
    pub eid_al_adha_time: String,
    pub eid_al_adha_date: String,
    pub eid_al_fitr_hijri: String,
    pub eid_al_fitr_time: String,
    pub eid_al_fitr_date: String,
}

type ErrorReply = (StatusCode, Json<Envelope<serde_json::Value>>);

pub fn app() -> Router {
    Router::new()
        .route("/auth/login", post(login))
        .route("/api/place/countries", get(countries))
        .route("/api/place/states", get(states))
        .route("/api/place/states/{country_id}", get(states_by_country))
        .route("/api/place/cities", get(cities))
        .route("/api/place/cities/{state_id}", get(cities_by_state))
        .route("/api/DailyContent", get(daily_content))
        .route("/api/PrayerTime/Daily/{city_id}", get(prayer_daily))
        .route("/api/PrayerTime/Weekly/{city_id}", get(prayer_weekly))
        .route("/api/PrayerTime/Monthly/{city_id}", get(prayer_monthly))
        .route("/api/PrayerTime/Ramadan/{city_id}", get(prayer_ramadan))
        .route("/api/PrayerTime/Eid/{city_id}", get(prayer_eid))
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

fn ok<T>(data: T) -> Json<Envelope<T>> {
    Json(Envelope {
        data: Some(data),
        success: true,
        message: String::new(),
    })
}

fn fail(status: StatusCode, message: &str) -> ErrorReply {
    (
        status,
        Json(Envelope {
            data: None,
            success: false,
            message: message.to_string(),
        }),
    )
}

/// Reject any `/api` request that does not carry the issued bearer token.
fn authorize(headers: &HeaderMap) -> Result<(), ErrorReply> {
    let expected = format!("Bearer {ACCESS_TOKEN}");
    match headers.get(header::AUTHORIZATION) {
        Some(value) if value.to_str().ok() == Some(expected.as_str()) => Ok(()),
        _ => Err(fail(StatusCode::UNAUTHORIZED, "invalid token")),
    }
}

async fn login(Json(input): Json<LoginRequest>) -> Result<Json<Envelope<AuthBody>>, ErrorReply> {
    if input.email == TEST_EMAIL && input.password == TEST_PASSWORD {
        Ok(ok(AuthBody {
            access_token: ACCESS_TOKEN.to_string(),
            refresh_token: REFRESH_TOKEN.to_string(),
        }))
    } else {
        Err(fail(
            StatusCode::BAD_REQUEST,
            "email or password is incorrect",
        ))
    }
}

async fn countries(headers: HeaderMap) -> Result<Json<Envelope<Vec<Location>>>, ErrorReply> {
    authorize(&headers)?;
    Ok(ok(all_countries()))
}

async fn states(headers: HeaderMap) -> Result<Json<Envelope<Vec<Location>>>, ErrorReply> {
    authorize(&headers)?;
    Ok(ok(all_states().into_iter().map(|(_, s)| s).collect()))
}

async fn states_by_country(
    headers: HeaderMap,
    Path(country_id): Path<i64>,
) -> Result<Json<Envelope<Vec<Location>>>, ErrorReply> {
    authorize(&headers)?;
    Ok(ok(all_states()
        .into_iter()
        .filter(|(parent, _)| *parent == country_id)
        .map(|(_, s)| s)
        .collect()))
}

async fn cities(headers: HeaderMap) -> Result<Json<Envelope<Vec<Location>>>, ErrorReply> {
    authorize(&headers)?;
    Ok(ok(all_cities().into_iter().map(|(_, c)| c).collect()))
}

async fn cities_by_state(
    headers: HeaderMap,
    Path(state_id): Path<i64>,
) -> Result<Json<Envelope<Vec<Location>>>, ErrorReply> {
    authorize(&headers)?;
    Ok(ok(all_cities()
        .into_iter()
        .filter(|(parent, _)| *parent == state_id)
        .map(|(_, c)| c)
        .collect()))
}

async fn daily_content(headers: HeaderMap) -> Result<Json<Envelope<DailyContent>>, ErrorReply> {
    authorize(&headers)?;
    Ok(ok(DailyContent {
        id: 241,
        day_of_year: 241,
        verse: "Indeed, prayer has been decreed upon the believers a decree of specified times."
            .to_string(),
        verse_source: "An-Nisa, 103".to_string(),
        hadith: "The key to Paradise is prayer.".to_string(),
        hadith_source: "Tirmidhi, Taharah, 1".to_string(),
        pray: "O Allah, help me remember You, to be grateful to You, and to worship You well."
            .to_string(),
        pray_source: "Abu Dawud, Witr, 26".to_string(),
    }))
}

async fn prayer_daily(
    headers: HeaderMap,
    Path(city_id): Path<i64>,
) -> Result<Json<Envelope<Vec<PrayerTime>>>, ErrorReply> {
    authorize(&headers)?;
    prayer_times(city_id, 1).map(ok)
}

async fn prayer_weekly(
    headers: HeaderMap,
    Path(city_id): Path<i64>,
) -> Result<Json<Envelope<Vec<PrayerTime>>>, ErrorReply> {
    authorize(&headers)?;
    prayer_times(city_id, 7).map(ok)
}

async fn prayer_monthly(
    headers: HeaderMap,
    Path(city_id): Path<i64>,
) -> Result<Json<Envelope<Vec<PrayerTime>>>, ErrorReply> {
    authorize(&headers)?;
    prayer_times(city_id, 30).map(ok)
}

async fn prayer_ramadan(
    headers: HeaderMap,
    Path(city_id): Path<i64>,
) -> Result<Json<Envelope<Vec<PrayerTime>>>, ErrorReply> {
    authorize(&headers)?;
    prayer_times(city_id, 30).map(ok)
}

async fn prayer_eid(
    headers: HeaderMap,
    Path(city_id): Path<i64>,
) -> Result<Json<Envelope<PrayerTimeEid>>, ErrorReply> {
    authorize(&headers)?;
    if !known_city(city_id) {
        return Err(fail(StatusCode::NOT_FOUND, "city not found"));
    }
    Ok(ok(PrayerTimeEid {
        eid_al_adha_hijri: "10 Dhu al-Hijjah 1447".to_string(),
        eid_al_adha_time: "06:58".to_string(),
        eid_al_adha_date: "27.05.2026".to_string(),
        eid_al_fitr_hijri: "1 Shawwal 1447".to_string(),
        eid_al_fitr_time: "07:12".to_string(),
        eid_al_fitr_date: "20.03.2026".to_string(),
    }))
}

fn all_countries() -> Vec<Location> {
    vec![
        Location {
            id: 1,
            code: "TR".to_string(),
            name: "Turkey".to_string(),
        },
        Location {
            id: 2,
            code: "DE".to_string(),
            name: "Germany".to_string(),
        },
    ]
}

/// States paired with the id of the country they belong to.
fn all_states() -> Vec<(i64, Location)> {
    vec![
        (
            1,
            Location {
                id: 506,
                code: "06".to_string(),
                name: "Ankara".to_string(),
            },
        ),
        (
            1,
            Location {
                id: 539,
                code: "34".to_string(),
                name: "Istanbul".to_string(),
            },
        ),
        (
            2,
            Location {
                id: 276,
                code: "BE".to_string(),
                name: "Berlin".to_string(),
            },
        ),
    ]
}

/// Cities paired with the id of the state they belong to.
fn all_cities() -> Vec<(i64, Location)> {
    vec![
        (
            506,
            Location {
                id: 9206,
                code: "ANK".to_string(),
                name: "Ankara".to_string(),
            },
        ),
        (
            539,
            Location {
                id: 9541,
                code: "IST".to_string(),
                name: "Istanbul".to_string(),
            },
        ),
        (
            276,
            Location {
                id: 11003,
                code: "BER".to_string(),
                name: "Berlin".to_string(),
            },
        ),
    ]
}

fn known_city(city_id: i64) -> bool {
    all_cities().iter().any(|(_, c)| c.id == city_id)
}

/// Deterministic prayer-time records for a known city, one per day.
fn prayer_times(city_id: i64, days: u32) -> Result<Vec<PrayerTime>, ErrorReply> {
    if !known_city(city_id) {
        return Err(fail(StatusCode::NOT_FOUND, "city not found"));
    }
    Ok((1..=days)
        .map(|day| PrayerTime {
            shape_moon_url: format!("https://awqatsalah.diyanet.gov.tr/images/moon/{day}.png"),
            fajr: "05:12".to_string(),
            sunrise: "06:41".to_string(),
            dhuhr: "13:04".to_string(),
            asr: "16:38".to_string(),
            maghrib: "19:17".to_string(),
            isha: "20:40".to_string(),
            astronomical_sunset: "20:55".to_string(),
            astronomical_sunrise: "05:03".to_string(),
            hijri_date_short: format!("{day}.03.1447"),
            hijri_date_short_iso8601: format!("1447-03-{day:02}"),
            hijri_date_long_iso8601: format!("1447-03-{day:02}"),
            hijri_date_long: format!("{day} Rabi al-Awwal 1447"),
            qibla_time: "12:26".to_string(),
            gregorian_date_short: format!("{day:02}.09.2025"),
            gregorian_date_short_iso8601: format!("2025-09-{day:02}"),
            gregorian_date_long: format!("{day} September 2025"),
            gregorian_date_long_iso8601: format!("2025-09-{day:02}"),
        })
        .collect())
}
