//! Batch encoding for the `/trans?data=...` endpoint: points are serialized
//! as `"x,y;x,y;..."` and split into chunks small enough to fit in a URL.

use crate::domain::model::Coord;

/// Maximum length of one encoded chunk. The service rejects URLs whose data
/// segment exceeds roughly 4094 characters, so stay safely below that.
pub const URL_DATA_BUDGET: usize = 4000;

/// Number of decimal digits kept when encoding batch coordinates. Precision
/// loss is accepted to keep request URLs short.
const PRECISION: usize = 4;

/// Format a coordinate value with at most [`PRECISION`] decimals, trimming
/// trailing zeros (`1.234567` -> `"1.2346"`, `2.5` -> `"2.5"`, `1.0` -> `"1"`).
pub fn format_coord(v: f64) -> String {
    let s = format!("{:.prec$}", v, prec = PRECISION);
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        s
    }
}

/// Encode one point as `"x,y"`.
pub fn encode_point(p: &Coord) -> String {
    format!("{},{}", format_coord(p.x), format_coord(p.y))
}

/// Encode `points` into `;`-joined chunks, each strictly shorter than
/// `budget`. Points are never reordered, dropped or duplicated; a point whose
/// addition would overflow the current chunk starts the next one, and the
/// final chunk is flushed even when not full.
pub fn chunk_points(points: &[Coord], budget: usize) -> Vec<String> {
    let mut chunks = Vec::new();
    let mut part = String::new();
    for p in points {
        let encoded = encode_point(p);
        let joined_len = if part.is_empty() {
            encoded.len()
        } else {
            part.len() + 1 + encoded.len()
        };
        if joined_len < budget || part.is_empty() {
            if !part.is_empty() {
                part.push(';');
            }
            part.push_str(&encoded);
        } else {
            chunks.push(std::mem::replace(&mut part, encoded));
        }
    }
    if !part.is_empty() {
        chunks.push(part);
    }
    chunks
}
