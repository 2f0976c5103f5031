use super::*;
use pke_core::Unique;
use serde::Deserialize;
use serde::Serialize;

#[derive(Deserialize)]
pub struct SubmitRequest {
    #[serde(rename = "eventId")]
    pub event_id: String,
    pub selection: String,
    pub line: f64,
}

#[derive(Deserialize)]
pub struct StatusQuery {
    pub season: Option<i32>,
    pub week: Option<i32>,
}

/// Response contract for the status endpoint: `{loggedIn, hasPick}`.
#[derive(Debug, PartialEq, Serialize)]
pub struct Status {
    #[serde(rename = "loggedIn")]
    pub logged_in: bool,
    #[serde(rename = "hasPick")]
    pub has_pick: bool,
}

#[derive(Serialize)]
pub struct PickInfo {
    pub id: String,
    pub season: i32,
    pub week: i32,
    #[serde(rename = "eventId")]
    pub event_id: String,
    pub selection: String,
    pub line: f64,
}

impl From<&Pick> for PickInfo {
    fn from(pick: &Pick) -> Self {
        Self {
            id: pick.id().to_string(),
            season: pick.season(),
            week: pick.week(),
            event_id: pick.event_id().to_string(),
            selection: pick.selection().to_string(),
            line: pick.line(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn status_serializes_with_camel_case_keys() {
        let status = Status {
            logged_in: false,
            has_pick: false,
        };
        let json = serde_json::to_string(&status).unwrap();
        assert_eq!(json, r#"{"loggedIn":false,"hasPick":false}"#);
    }
}
