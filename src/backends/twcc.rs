//! Alternate backend: the World Coordinate Converter.
//! See https://github.com/ClemRz/TWCC
//!
//! TWCC only exposes single-point transforms; batch reprojection falls back to
//! the trait's sequential per-point default.

use crate::backends::{get_text, parse_coord_obj, parse_json, REPROJ_TIMEOUT};
use crate::domain::model::Coord;
use crate::domain::ports::ReprojectionBackend;
use crate::utils::error::{ProjError, Result};
use crate::ClientConfig;
use async_trait::async_trait;
use reqwest::Client;
use url::Url;

pub struct Twcc {
    client: Client,
    config: ClientConfig,
}

impl Twcc {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }
}

#[async_trait]
impl ReprojectionBackend for Twcc {
    async fn reproject_point(&self, src: u32, dst: u32, x: f64, y: f64) -> Result<Coord> {
        let mut url = Url::parse(&self.config.twcc_url)?.join("en/ws/")?;
        url.set_query(Some(&format!(
            "fmt=json&x={x}&y={y}&in=EPSG:{src}&out=EPSG:{dst}"
        )));
        let body = get_text(&self.client, &self.config.user_agent, &url, REPROJ_TIMEOUT).await?;
        let obj = parse_json(&url, &body)?;
        let point = obj.get("point").ok_or_else(|| ProjError::InvalidResponse {
            url: url.to_string(),
            reason: "missing point object".to_string(),
        })?;
        parse_coord_obj(&url, point)
    }
}
