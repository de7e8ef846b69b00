use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{Context, Result, bail};
use geojson::{FeatureCollection, GeoJson, Value};
use serde_json::Value as JsonValue;

use super::model::{AttrValue, Block, BlockModel};

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a block model from a file.  Dispatch by extension.
///
/// The one recognized container format is GeoJSON (`.geojson` / `.json`):
/// a `FeatureCollection` of `Point` features whose properties carry the
/// block attributes.
pub fn load_file(path: &Path) -> Result<BlockModel> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match ext.as_str() {
        "geojson" | "json" => {
            let text = std::fs::read_to_string(path).context("reading GeoJSON file")?;
            parse_geojson(&text)
        }
        other => bail!("Unsupported file extension: .{other}"),
    }
}

// ---------------------------------------------------------------------------
// GeoJSON parsing
// ---------------------------------------------------------------------------

/// Expected layout (one feature per block, 3-coordinate positions):
///
/// ```json
/// {
///   "type": "FeatureCollection",
///   "features": [
///     {
///       "type": "Feature",
///       "geometry": { "type": "Point", "coordinates": [10.0, 20.0, -5.0] },
///       "properties": { "grade": 1.2, "value": 100.0, "cost": 40.0 }
///     }
///   ]
/// }
/// ```
fn parse_geojson(text: &str) -> Result<BlockModel> {
    let geojson: GeoJson = text.parse().context("parsing GeoJSON")?;
    let collection =
        FeatureCollection::try_from(geojson).context("expected a FeatureCollection")?;

    let mut blocks = Vec::with_capacity(collection.features.len());

    for (i, feature) in collection.features.into_iter().enumerate() {
        let geometry = feature
            .geometry
            .with_context(|| format!("Feature {i}: missing geometry"))?;

        let position = match geometry.value {
            Value::Point(pos) => point_position(&pos, i)?,
            other => bail!(
                "Feature {i}: expected Point geometry, got {}",
                other.type_name()
            ),
        };

        let mut attributes = BTreeMap::new();
        for (key, val) in feature.properties.unwrap_or_default() {
            attributes.insert(key, json_to_attr(&val));
        }

        blocks.push(Block {
            position,
            attributes,
        });
    }

    Ok(BlockModel::from_blocks(blocks))
}

/// A block centroid needs all three coordinates; a 2D position is rejected
/// here so the renderer never sees z-less geometry.
fn point_position(pos: &[f64], row: usize) -> Result<[f64; 3]> {
    match pos {
        [x, y, z, ..] => Ok([*x, *y, *z]),
        _ => bail!(
            "Feature {row}: point has {} coordinates, need x, y and z",
            pos.len()
        ),
    }
}

fn json_to_attr(val: &JsonValue) -> AttrValue {
    match val {
        JsonValue::String(s) => AttrValue::String(s.clone()),
        JsonValue::Number(n) => {
            if let Some(i) = n.as_i64() {
                AttrValue::Integer(i)
            } else if let Some(f) = n.as_f64() {
                AttrValue::Float(f)
            } else {
                AttrValue::String(n.to_string())
            }
        }
        JsonValue::Bool(b) => AttrValue::Bool(*b),
        JsonValue::Null => AttrValue::Null,
        other => AttrValue::String(other.to_string()),
    }
}
