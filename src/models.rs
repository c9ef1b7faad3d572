use std::collections::HashMap;

use serde::{Deserialize, Deserializer, Serialize};
use utoipa::{IntoParams, ToSchema};

/// Accepts an explicit JSON `null` wherever a missing field would be accepted.
///
/// Collections are `Option` instead: an unset list renders as `null`, an
/// empty one as `[]`.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, ToSchema)]
#[serde(default)]
pub struct Location {
    #[serde(deserialize_with = "null_as_default")]
    #[schema(example = 50.0386)]
    pub lat: f64,
    #[serde(deserialize_with = "null_as_default")]
    #[schema(example = 22.0026)]
    pub lng: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub address: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, ToSchema)]
#[serde(default)]
pub struct Sport {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    #[schema(example = "Basketball")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, ToSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct User {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub email: String,
    #[serde(deserialize_with = "null_as_default")]
    pub avatar: String,
    #[serde(deserialize_with = "null_as_default")]
    pub location: Location,
    pub sports: Option<Vec<Sport>>,
    /// Sport name to skill-level label, e.g. `"Tennis": "Intermediate"`.
    pub skill_levels: Option<HashMap<String, String>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, ToSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct Event {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(deserialize_with = "null_as_default")]
    pub sport: Sport,
    #[serde(deserialize_with = "null_as_default")]
    pub location: Location,
    #[serde(rename = "datetime", deserialize_with = "null_as_default")]
    #[schema(example = "2025-06-14T18:00:00Z")]
    pub date_time: String,
    #[serde(deserialize_with = "null_as_default")]
    pub max_players: i64,
    pub players: Option<Vec<User>>,
    #[serde(deserialize_with = "null_as_default")]
    #[schema(example = "open")]
    pub status: String,
}

#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(default)]
pub struct Credentials {
    #[serde(deserialize_with = "null_as_default")]
    pub email: String,
    #[serde(deserialize_with = "null_as_default")]
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, ToSchema)]
pub struct VerifyResponse {
    pub valid: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

/// Coordinates are kept as raw strings; the search does not use them yet.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct NearbyQuery {
    /// Latitude of the search center
    pub lat: Option<String>,
    /// Longitude of the search center
    pub lng: Option<String>,
}
