//! Primary backend: the epsg.io transform service plus the MapTiler
//! Coordinates API for keyed search. See https://github.com/klokantech/epsg.io

use crate::backends::{get_text, parse_coord_obj, parse_json, DEFAULT_TIMEOUT, REPROJ_TIMEOUT};
use crate::core::chunk::{chunk_points, URL_DATA_BUDGET};
use crate::domain::model::{Coord, SearchResult};
use crate::domain::ports::ReprojectionBackend;
use crate::utils::error::{ProjError, Result};
use crate::ClientConfig;
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use url::Url;

/// Field-name fallback chains for search responses. The search backends have
/// shipped several response schemas over time; each logical field is resolved
/// by trying these candidates in order. Undocumented, observed behavior --
/// keep the tables as-is rather than deriving a cleaner contract.
const RESULT_LIST_KEYS: [&str; 3] = ["results", "crs", "coordinateSystems"];
const CODE_KEYS: [&str; 3] = ["code", "epsg", "identifier"];
const NAME_KEYS: [&str; 2] = ["name", "title"];

pub struct EpsgIo {
    client: Client,
    config: ClientConfig,
}

impl EpsgIo {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    /// Reachability probe. `true` iff a minimal GET completes without a
    /// network or HTTP-status error; failures are logged, never raised, so an
    /// interactive caller can poll freely.
    pub async fn ping(&self) -> bool {
        let url = match &self.config.api_key {
            Some(key) => self.maptiler_search_url("4326", key).map(|mut u| {
                u.query_pairs_mut().append_pair("limit", "1");
                u
            }),
            None => Url::parse(&self.config.epsg_io_url).map_err(ProjError::from),
        };
        let url = match url {
            Ok(url) => url,
            Err(err) => {
                tracing::error!("cannot build ping URL: {err}");
                return false;
            }
        };
        match get_text(&self.client, &self.config.user_agent, &url, DEFAULT_TIMEOUT).await {
            Ok(_) => true,
            Err(err) => {
                tracing::error!("cannot ping {url} web service: {err}");
                false
            }
        }
    }

    /// Free-text CRS search. Best effort: every expected failure class
    /// (transport, HTTP status, malformed or HTML body) degrades to an empty
    /// result list with an error log, so search-as-you-type callers never see
    /// an error.
    pub async fn search(&self, query: &str) -> Vec<SearchResult> {
        let url = match self.search_url(query) {
            Ok(url) => url,
            Err(err) => {
                tracing::error!("cannot build search URL: {err}");
                return Vec::new();
            }
        };
        tracing::debug!(%url, "searching CRS");

        let body = match get_text(&self.client, &self.config.user_agent, &url, DEFAULT_TIMEOUT).await
        {
            Ok(body) => body,
            Err(err) => {
                tracing::error!("http request failed, {err}");
                return Vec::new();
            }
        };

        if body.trim().is_empty() {
            tracing::error!("http request to {url} returned an empty response");
            return Vec::new();
        }
        // An HTML body is usually an auth or redirect page, not a schema change.
        if body.trim_start().starts_with('<') {
            if self.config.api_key.is_some() {
                tracing::error!(
                    "unexpected HTML response from {url}, \
                     please verify your MapTiler API key and connectivity"
                );
            } else {
                tracing::error!(
                    "got an HTML response from {url}; EPSG search endpoints now redirect to \
                     the MapTiler Coordinates API, please provide a MapTiler API key"
                );
            }
            return Vec::new();
        }

        let obj: Value = match serde_json::from_str(&body) {
            Ok(obj) => obj,
            Err(_) => {
                let snippet: String = body.chars().take(500).collect();
                tracing::error!("unable to decode response from {url}: {snippet}");
                return Vec::new();
            }
        };

        let results = normalize_results(&obj);
        tracing::debug!(?results, "search results");
        results
    }

    /// Fetch the ESRI WKT definition for a CRS code. Raw text body; transport
    /// failures propagate since callers build transform pipelines from this.
    pub async fn lookup_wkt(&self, code: u32) -> Result<String> {
        let url = Url::parse(&self.config.epsg_io_url)?.join(&format!("{code}.esriwkt"))?;
        get_text(&self.client, &self.config.user_agent, &url, DEFAULT_TIMEOUT).await
    }

    fn trans_url(&self) -> Result<Url> {
        Ok(Url::parse(&self.config.epsg_io_url)?.join("trans")?)
    }

    fn search_url(&self, query: &str) -> Result<Url> {
        match &self.config.api_key {
            Some(key) => self.maptiler_search_url(query, key),
            None => {
                let mut url = Url::parse(&self.config.epsg_io_url)?;
                url.query_pairs_mut()
                    .append_pair("q", query)
                    .append_pair("format", "json");
                Ok(url)
            }
        }
    }

    /// Keyed search endpoint: the query is embedded in the path segment,
    /// `quote_plus`-encoded, with the key as a query parameter.
    fn maptiler_search_url(&self, query: &str, key: &str) -> Result<Url> {
        let url = format!(
            "{}/coordinates/search/{}.json?key={}",
            self.config.maptiler_url,
            quote_plus(query),
            quote_plus(key),
        );
        Ok(Url::parse(&url)?)
    }
}

#[async_trait]
impl ReprojectionBackend for EpsgIo {
    async fn reproject_point(&self, src: u32, dst: u32, x: f64, y: f64) -> Result<Coord> {
        let mut url = self.trans_url()?;
        url.set_query(Some(&format!("x={x}&y={y}&z=0&s_srs={src}&t_srs={dst}")));
        let body = get_text(&self.client, &self.config.user_agent, &url, REPROJ_TIMEOUT).await?;
        let obj = parse_json(&url, &body)?;
        parse_coord_obj(&url, &obj)
    }

    /// Batch reprojection. A single point delegates to the cheaper
    /// single-point endpoint; otherwise points are encoded, chunked to the URL
    /// budget, and sent as one sequential GET per chunk. Results concatenate
    /// in request order so `output[i]` corresponds to `points[i]`. Any chunk
    /// failure aborts the whole call without partial results.
    async fn reproject_points(&self, src: u32, dst: u32, points: &[Coord]) -> Result<Vec<Coord>> {
        if let [only] = points {
            return Ok(vec![self.reproject_point(src, dst, only.x, only.y).await?]);
        }

        let mut result = Vec::with_capacity(points.len());
        for data in chunk_points(points, URL_DATA_BUDGET) {
            let mut url = self.trans_url()?;
            url.set_query(Some(&format!("data={data}&s_srs={src}&t_srs={dst}")));
            let body =
                get_text(&self.client, &self.config.user_agent, &url, REPROJ_TIMEOUT).await?;
            let obj = parse_json(&url, &body)?;
            let items = obj.as_array().ok_or_else(|| ProjError::InvalidResponse {
                url: url.to_string(),
                reason: "expected a JSON array of points".to_string(),
            })?;
            for item in items {
                result.push(parse_coord_obj(&url, item)?);
            }
        }

        if result.len() != points.len() {
            return Err(ProjError::InvalidResponse {
                url: self.config.epsg_io_url.clone(),
                reason: format!("sent {} points, got {} back", points.len(), result.len()),
            });
        }
        Ok(result)
    }
}

/// `quote_plus` semantics: spaces become `+`, everything else outside the
/// unreserved set is percent-encoded.
fn quote_plus(s: &str) -> String {
    url::form_urlencoded::byte_serialize(s.as_bytes()).collect()
}

/// Normalize the heterogeneous search response shapes into `SearchResult`s,
/// skipping entries missing a usable code or name.
fn normalize_results(obj: &Value) -> Vec<SearchResult> {
    let items = RESULT_LIST_KEYS
        .iter()
        .find_map(|key| obj.get(key).and_then(Value::as_array).filter(|a| !a.is_empty()));
    let Some(items) = items else {
        return Vec::new();
    };

    items
        .iter()
        .filter_map(|item| {
            let code = CODE_KEYS.iter().find_map(|key| field_string(item.get(*key)?))?;
            let name = NAME_KEYS.iter().find_map(|key| field_string(item.get(*key)?))?;
            Some(SearchResult { code, name })
        })
        .collect()
}

fn field_string(v: &Value) -> Option<String> {
    match v {
        Value::String(s) => {
            let trimmed = s.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        }
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn normalizes_canonical_fields() {
        let obj = json!({"results": [{"code": "4326", "name": "WGS 84"}]});
        assert_eq!(
            normalize_results(&obj),
            vec![SearchResult {
                code: "4326".to_string(),
                name: "WGS 84".to_string()
            }]
        );
    }

    #[test]
    fn normalizes_alternate_field_names() {
        for list_key in ["results", "crs", "coordinateSystems"] {
            for code_key in ["code", "epsg", "identifier"] {
                for name_key in ["name", "title"] {
                    let obj = json!({list_key: [{code_key: 2154, name_key: "RGF93 / Lambert-93"}]});
                    assert_eq!(
                        normalize_results(&obj),
                        vec![SearchResult {
                            code: "2154".to_string(),
                            name: "RGF93 / Lambert-93".to_string()
                        }],
                        "failed for {list_key}/{code_key}/{name_key}"
                    );
                }
            }
        }
    }

    #[test]
    fn skips_entries_missing_code_or_name() {
        let obj = json!({"results": [
            {"code": "4326"},
            {"name": "no code"},
            {"code": "", "name": "blank code"},
            {"code": "2154", "name": "RGF93 / Lambert-93"}
        ]});
        let results = normalize_results(&obj);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].code, "2154");
    }

    #[test]
    fn empty_list_falls_through_to_next_key() {
        let obj = json!({"results": [], "crs": [{"code": "4326", "name": "WGS 84"}]});
        assert_eq!(normalize_results(&obj).len(), 1);
    }

    #[test]
    fn no_recognized_list_yields_empty() {
        assert!(normalize_results(&json!({"items": [{"code": "1", "name": "x"}]})).is_empty());
        assert!(normalize_results(&json!("not an object")).is_empty());
    }

    #[test]
    fn quote_plus_encodes_spaces_and_reserved_chars() {
        assert_eq!(quote_plus("lambert 93"), "lambert+93");
        assert_eq!(quote_plus("RGF93 / Lambert"), "RGF93+%2F+Lambert");
    }
}
