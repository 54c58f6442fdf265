//! Single-marker point picker backing the assignment form's map.

use crate::models::GeoPoint;

/// How the current point was chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickSource {
    Tap,
    Drag,
}

/// Holds at most one picked point.
///
/// Any coordinate is accepted; range checks happen when the form is
/// submitted. Nothing survives a [`GeoPicker::reset`], which the form calls
/// whenever the modal opens or closes.
#[derive(Debug, Clone, Default)]
pub struct GeoPicker {
    marker: Option<(GeoPoint, PickSource)>,
}

impl GeoPicker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Places (or moves) the marker at a tapped point.
    pub fn pick(&mut self, lat: f64, lng: f64) -> GeoPoint {
        self.place(GeoPoint::new(lat, lng), PickSource::Tap)
    }

    /// Moves the marker to where it was dragged.
    ///
    /// Dragging with no marker on the map places one.
    pub fn drag_to(&mut self, lat: f64, lng: f64) -> GeoPoint {
        self.place(GeoPoint::new(lat, lng), PickSource::Drag)
    }

    fn place(&mut self, point: GeoPoint, source: PickSource) -> GeoPoint {
        tracing::debug!(lat = point.lat, lng = point.lng, ?source, "Picked point");
        self.marker = Some((point, source));
        point
    }

    pub fn current(&self) -> Option<GeoPoint> {
        self.marker.map(|(point, _)| point)
    }

    pub fn source(&self) -> Option<PickSource> {
        self.marker.map(|(_, source)| source)
    }

    pub fn reset(&mut self) {
        self.marker = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pick_then_drag_keeps_single_marker() {
        let mut picker = GeoPicker::new();
        assert!(picker.current().is_none());

        picker.pick(15.3, 74.0);
        picker.drag_to(15.31, 74.02);

        assert_eq!(picker.current(), Some(GeoPoint::new(15.31, 74.02)));
        assert_eq!(picker.source(), Some(PickSource::Drag));
    }

    #[test]
    fn test_drag_without_marker_places_one() {
        let mut picker = GeoPicker::new();
        let point = picker.drag_to(-33.9, 151.2);
        assert_eq!(picker.current(), Some(point));
    }

    #[test]
    fn test_reset_forgets_previous_pick() {
        let mut picker = GeoPicker::new();
        picker.pick(15.3, 74.0);
        picker.reset();
        assert!(picker.current().is_none());
        assert!(picker.source().is_none());
    }

    #[test]
    fn test_any_coordinate_is_accepted() {
        let mut picker = GeoPicker::new();
        assert_eq!(picker.pick(123.0, 500.0), GeoPoint::new(123.0, 500.0));
    }
}
