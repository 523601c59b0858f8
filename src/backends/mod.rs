//! Concrete backend adapters for the remote reprojection services.

pub mod epsg_io;
pub mod twcc;

pub use epsg_io::EpsgIo;
pub use twcc::Twcc;

use crate::domain::model::Coord;
use crate::utils::error::{ProjError, Result};
use reqwest::{header, Client};
use serde_json::Value;
use std::time::Duration;
use url::Url;

/// Deadline for lightweight calls (ping, search, WKT lookup).
pub(crate) const DEFAULT_TIMEOUT: Duration = Duration::from_secs(2);
/// Deadline for reprojection calls; cross-datum transforms can be slow.
pub(crate) const REPROJ_TIMEOUT: Duration = Duration::from_secs(60);

/// One GET, one response, body returned as text. Transport failures map to
/// `Network`, non-2xx statuses to `Service`.
pub(crate) async fn get_text(
    client: &Client,
    user_agent: &str,
    url: &Url,
    timeout: Duration,
) -> Result<String> {
    tracing::debug!(%url, "GET");
    let response = client
        .get(url.clone())
        .header(header::USER_AGENT, user_agent)
        .timeout(timeout)
        .send()
        .await
        .map_err(|source| ProjError::Network {
            url: url.to_string(),
            source,
        })?;
    let status = response.status();
    if !status.is_success() {
        return Err(ProjError::Service {
            url: url.to_string(),
            status,
        });
    }
    response.text().await.map_err(|source| ProjError::Network {
        url: url.to_string(),
        source,
    })
}

pub(crate) fn parse_json(url: &Url, body: &str) -> Result<Value> {
    serde_json::from_str(body).map_err(|err| ProjError::InvalidResponse {
        url: url.to_string(),
        reason: err.to_string(),
    })
}

/// Coordinate values arrive either as JSON numbers or as numeric strings,
/// depending on the backend.
pub(crate) fn coord_value(v: &Value) -> Option<f64> {
    match v {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Parse a JSON object carrying `x` and `y` fields into a [`Coord`].
pub(crate) fn parse_coord_obj(url: &Url, v: &Value) -> Result<Coord> {
    let x = v.get("x").and_then(coord_value);
    let y = v.get("y").and_then(coord_value);
    match (x, y) {
        (Some(x), Some(y)) => Ok(Coord { x, y }),
        _ => Err(ProjError::InvalidResponse {
            url: url.to_string(),
            reason: format!("missing or non-numeric x/y fields in {v}"),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn coord_value_accepts_numbers_and_numeric_strings() {
        assert_eq!(coord_value(&json!(652709.4)), Some(652709.4));
        assert_eq!(coord_value(&json!("652709.4")), Some(652709.4));
        assert_eq!(coord_value(&json!(" 12 ")), Some(12.0));
        assert_eq!(coord_value(&json!("not a number")), None);
        assert_eq!(coord_value(&json!(null)), None);
        assert_eq!(coord_value(&json!([1.0])), None);
    }

    #[test]
    fn parse_coord_obj_requires_both_fields() {
        let url = Url::parse("http://example.test/trans").unwrap();
        let ok = parse_coord_obj(&url, &json!({"x": "1.5", "y": 2})).unwrap();
        assert_eq!(ok, Coord::new(1.5, 2.0));
        assert!(parse_coord_obj(&url, &json!({"x": 1.0})).is_err());
        assert!(parse_coord_obj(&url, &json!({"x": "a", "y": "b"})).is_err());
    }
}
