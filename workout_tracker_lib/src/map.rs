use crate::{display::MarkerPopup, workout::Coords};

/// The parts of an interactive map the tracker drives.
///
/// Creating the map and wiring its click events is left to the implementor,
/// since both depend on the rendering environment.
pub trait MapAdapter {
    type Marker;

    fn place_marker(&mut self, coords: Coords, popup: &MarkerPopup) -> Self::Marker;

    fn remove_marker(&mut self, marker: Self::Marker);

    fn recenter(&mut self, coords: Coords, zoom: f64, animate: bool);
}
