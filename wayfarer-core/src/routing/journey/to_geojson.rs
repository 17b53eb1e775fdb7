use geojson::{Feature, FeatureCollection, Geometry, Value as GeoJsonValue};
use serde_json::json;

use super::{Journey, RouteElement};
use crate::error::Error;

impl Journey {
    /// Converts the journey to a GeoJSON `FeatureCollection` with one
    /// feature per route element, for visual inspection of a route.
    pub fn to_geojson(&self) -> Result<FeatureCollection, Error> {
        let mut features = Vec::with_capacity(self.route.len());
        for (index, element) in self.route.iter().enumerate() {
            let feature = match element {
                RouteElement::Node { name, geom } => node_feature(name, geom)?,
                RouteElement::Path { mode, name, geom } => {
                    path_feature(index, u8::from(*mode), name, geom)?
                }
            };
            features.push(feature);
        }
        Ok(FeatureCollection {
            features,
            bbox: None,
            foreign_members: None,
        })
    }

    pub fn to_geojson_string(&self) -> Result<String, Error> {
        serde_json::to_string(&self.to_geojson()?).map_err(|e| Error::GeoJson(e.to_string()))
    }
}

/// GeoJSON positions are `[lon, lat]`, route element geometry is
/// `[lat, lon]`.
fn position(pair: [f32; 2]) -> Vec<f64> {
    vec![f64::from(pair[1]), f64::from(pair[0])]
}

fn node_feature(name: &str, geom: &[[f32; 2]]) -> Result<Feature, Error> {
    let point = geom.first().copied().unwrap_or_default();
    let geometry = Geometry::new(GeoJsonValue::Point(position(point)));
    let value = json!({
        "type": "Feature",
        "geometry": geometry,
        "properties": {
            "element_type": "node",
            "name": name
        }
    });
    Feature::from_json_value(value).map_err(|e| Error::GeoJson(e.to_string()))
}

fn path_feature(index: usize, mode: u8, name: &str, geom: &[[f32; 2]]) -> Result<Feature, Error> {
    let coordinates: Vec<Vec<f64>> = geom.iter().copied().map(position).collect();
    let geometry = Geometry::new(GeoJsonValue::LineString(coordinates));
    let value = json!({
        "type": "Feature",
        "geometry": geometry,
        "properties": {
            "element_type": "path",
            "element_index": index,
            "mode": mode,
            "name": name
        }
    });
    Feature::from_json_value(value).map_err(|e| Error::GeoJson(e.to_string()))
}
