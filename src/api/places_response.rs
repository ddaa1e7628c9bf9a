use crate::domain::{Coordinates, ResourceResult};
use serde::Deserialize;
use serde_json::Value;

// Shape of the places search relayed by the backend proxy. Entries are kept as raw values so a
// single malformed place does not discard the others.
#[derive(Debug, Deserialize)]
pub struct PlacesResponse {
    #[serde(default)]
    pub results: Option<Vec<Value>>,
}

#[derive(Debug, Deserialize)]
pub struct PlaceGet {
    pub name: String,
    #[serde(default)]
    pub vicinity: Option<String>,
    pub geometry: Geometry,
}

#[derive(Debug, Deserialize)]
pub struct Geometry {
    pub location: LatLng,
}

#[derive(Debug, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl TryFrom<Value> for ResourceResult {
    type Error = serde_json::Error;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        let place = serde_json::from_value::<PlaceGet>(value)?;
        Ok(ResourceResult {
            name: place.name,
            vicinity: place.vicinity.unwrap_or_default(),
            location: Coordinates::new(place.geometry.location.lat, place.geometry.location.lng),
        })
    }
}
