use crate::domain::model::Coord;
use crate::utils::error::Result;
use async_trait::async_trait;

/// A remote service that transforms coordinates between two EPSG-coded CRSs.
///
/// `reproject_points` must return one output per input, in input order.
#[async_trait]
pub trait ReprojectionBackend: Send + Sync {
    async fn reproject_point(&self, src: u32, dst: u32, x: f64, y: f64) -> Result<Coord>;

    /// Backends without a batch endpoint fall back to one request per point,
    /// issued sequentially so ordering is preserved.
    async fn reproject_points(&self, src: u32, dst: u32, points: &[Coord]) -> Result<Vec<Coord>> {
        let mut out = Vec::with_capacity(points.len());
        for p in points {
            out.push(self.reproject_point(src, dst, p.x, p.y).await?);
        }
        Ok(out)
    }
}
