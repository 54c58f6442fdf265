//! Live map view model.
//!
//! One marker per officer with an assigned duty, colored by
//! [`shared::palette::color_for`] so the same officer gets the same color
//! everywhere.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use shared::palette::{color_for, PaletteIndex};

use super::{OfficerWithDuty, VerificationStatus};

/// Map center used when no officer has a duty.
pub const DEFAULT_CENTER: GeoPoint = GeoPoint {
    lat: 15.2993,
    lng: 74.124,
};

/// Zoom level of the live map.
pub const DEFAULT_ZOOM: u8 = 10;

/// A WGS-84 coordinate pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

impl GeoPoint {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

impl std::fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.6}, {:.6}", self.lat, self.lng)
    }
}

/// A rendered officer marker.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MapMarker {
    pub officer_id: String,
    pub empid: String,
    pub position: GeoPoint,
    pub radius: f64,
    pub location: String,
    pub color: PaletteIndex,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verification: Option<VerificationStatus>,
}

impl MapMarker {
    /// Popup text: officer code and duty label.
    pub fn popup(&self) -> String {
        format!("Officer ID: {}\nDuty at: {}", self.empid, self.location)
    }

    /// Round pin icon in the marker color.
    pub fn icon_svg(&self) -> String {
        let color = self.color.hex();
        format!(
            concat!(
                r#"<svg width="36" height="36" viewBox="0 0 36 36" fill="none" xmlns="http://www.w3.org/2000/svg">"#,
                r#"<path d="M18 0C8.06 0 0 8.06 0 18C0 27.94 8.06 36 18 36C27.94 36 36 27.94 36 18C36 8.06 27.94 0 18 0Z" fill="{}"/>"#,
                r#"<path d="M18 6C13.584 6 10 9.584 10 14C10 18.416 18 30 18 30C18 30 26 18.416 26 14C26 9.584 22.416 6 18 6ZM18 19C15.794 19 14 17.206 14 15C14 12.794 15.794 11 18 11C20.206 11 22 12.794 22 15C22 17.206 20.206 19 18 19Z" fill="white"/>"#,
                "</svg>"
            ),
            color
        )
    }
}

/// Everything needed to draw the live map.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapView {
    pub center: GeoPoint,
    pub zoom: u8,
    pub markers: Vec<MapMarker>,
}

impl MapView {
    /// Builds the map with [`DEFAULT_CENTER`] as the fallback center.
    pub fn from_roster(entries: &[OfficerWithDuty]) -> Self {
        Self::with_fallback(entries, DEFAULT_CENTER)
    }

    /// Builds the map, centering on the first marker or `fallback`.
    pub fn with_fallback(entries: &[OfficerWithDuty], fallback: GeoPoint) -> Self {
        let markers: Vec<MapMarker> = entries
            .iter()
            .filter_map(|entry| {
                let duty = entry.assigned_duty.as_ref()?;
                Some(MapMarker {
                    officer_id: entry.officer.id.clone(),
                    empid: entry.officer.empid.clone(),
                    position: GeoPoint::new(duty.latitude, duty.longitude),
                    radius: duty.radius,
                    location: duty.location.clone(),
                    color: color_for(&entry.officer.id),
                    verification: entry.verification.clone(),
                })
            })
            .collect();

        let center = markers.first().map(|m| m.position).unwrap_or(fallback);

        Self {
            center,
            zoom: DEFAULT_ZOOM,
            markers,
        }
    }

    /// Exports the markers as a GeoJSON `FeatureCollection`.
    ///
    /// GeoJSON positions are `[longitude, latitude]`.
    pub fn to_geojson(&self) -> Value {
        let features: Vec<Value> = self
            .markers
            .iter()
            .map(|m| {
                json!({
                    "type": "Feature",
                    "geometry": {
                        "type": "Point",
                        "coordinates": [m.position.lng, m.position.lat],
                    },
                    "properties": {
                        "officerId": m.officer_id,
                        "empid": m.empid,
                        "location": m.location,
                        "radius": m.radius,
                        "color": m.color.hex(),
                        "popup": m.popup(),
                        "icon": m.icon_svg(),
                        "faceVerified": m.verification.as_ref().map(|v| v.face_verified),
                        "locationVerified": m.verification.as_ref().map(|v| v.location_verified),
                    },
                })
            })
            .collect();

        json!({
            "type": "FeatureCollection",
            "features": features,
        })
    }
}
