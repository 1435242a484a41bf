use const_format::concatcp;
use js_sys::{Object, Reflect};
use leaflet::{LatLng, Map, MapOptions, Marker, Popup, PopupOptions, TileLayer, TileLayerOptions};
use wasm_bindgen::{prelude::*, JsCast, JsValue};
use web_sys::HtmlElement;
use workout_tracker_lib::{
    display::{MarkerPopup, POPUP_MAX_WIDTH, POPUP_MIN_WIDTH},
    map::MapAdapter,
    workout::Coords,
};
use yew::Callback;

const MAPTILER_KEY: &str = match option_env!("MAPTILER_KEY") {
    Some(key) => key,
    None => "",
};
const MAPTILER_URL: &str = concatcp!("https://api.maptiler.com/maps/streets/256/{z}/{x}/{y}.png?key=", MAPTILER_KEY);
const MAPTILER_ATTRIBUTION: &str = "&copy; <a href=\"https://www.maptiler.com/\">MapTiler</a> &copy; OpenStreetMap contributors";
const OSM_URL: &str = "https://tile.openstreetmap.org/{z}/{x}/{y}.png";
const OSM_ATTRIBUTION: &str = "&copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors";

// Leaflet calls the bindings crate doesn't cover.
#[wasm_bindgen]
extern "C" {
    type LeafletMapExt;

    #[wasm_bindgen(method)]
    fn on(this: &LeafletMapExt, kind: &str, handler: &JsValue);

    #[wasm_bindgen(method, js_name = setView)]
    fn set_view_with_options(this: &LeafletMapExt, center: &LatLng, zoom: f64, options: &JsValue);
}

pub struct LeafletMap {
    map: Map,
    _click_handler: Option<Closure<dyn FnMut(JsValue)>>,
}

impl LeafletMap {
    /// Creates the map inside `container`, centered on the user's position.
    pub fn initialize(container: &HtmlElement, center: Coords, zoom: f64) -> Self {
        let map = Map::new_with_element(container, &MapOptions::default());
        map.set_view(&lat_lng(center), zoom);
        add_tile_layer(&map);
        add_position_marker(&map, center);

        Self { map, _click_handler: None }
    }

    pub fn on_click(&mut self, callback: Callback<Coords>) {
        let handler = Closure::<dyn FnMut(JsValue)>::new(move |event: JsValue| {
            let Ok(latlng) = Reflect::get(&event, &JsValue::from_str("latlng")) else {
                return;
            };
            let latlng: LatLng = latlng.unchecked_into();
            callback.emit(Coords(latlng.lat(), latlng.lng()));
        });

        self.ext().on("click", handler.as_ref());
        self._click_handler = Some(handler);
    }

    pub fn invalidate_size(&self) {
        self.map.invalidate_size(false);
    }

    fn ext(&self) -> &LeafletMapExt {
        self.map.unchecked_ref()
    }
}

impl MapAdapter for LeafletMap {
    type Marker = Marker;

    fn place_marker(&mut self, coords: Coords, popup: &MarkerPopup) -> Marker {
        let marker = Marker::new(&lat_lng(coords));
        marker.add_to(&self.map);
        marker.bind_popup(&sticky_popup(&popup.content, &popup.class_name, POPUP_MAX_WIDTH));
        marker.open_popup();
        marker
    }

    fn remove_marker(&mut self, marker: Marker) {
        marker.remove();
    }

    fn recenter(&mut self, coords: Coords, zoom: f64, animate: bool) {
        if !animate {
            self.map.set_view(&lat_lng(coords), zoom);
            return;
        }

        let pan = Object::new();
        let _ = Reflect::set(&pan, &"duration".into(), &JsValue::from_f64(1.0));
        let options = Object::new();
        let _ = Reflect::set(&options, &"animate".into(), &JsValue::TRUE);
        let _ = Reflect::set(&options, &"pan".into(), &pan);

        self.ext().set_view_with_options(&lat_lng(coords), zoom, &options);
    }
}

fn lat_lng(coords: Coords) -> LatLng {
    LatLng::new(coords.latitude(), coords.longitude())
}

// Stays open while other popups open and when the map is clicked.
fn sticky_popup(content: &str, class_name: &str, max_width: f64) -> Popup {
    let opts = PopupOptions::default();
    opts.set_max_width(max_width);
    opts.set_min_width(POPUP_MIN_WIDTH);
    opts.set_auto_close(false);
    opts.set_close_on_click(false);
    opts.set_class_name(class_name.to_owned());

    let popup = Popup::new(&opts, None);
    popup.set_content(&content.into());
    popup
}

fn add_position_marker(map: &Map, center: Coords) {
    let marker = Marker::new(&lat_lng(center));
    marker.add_to(map);
    marker.bind_popup(&sticky_popup("You are here", "default-popup", 200.));
    marker.open_popup();
}

fn add_tile_layer(map: &Map) {
    let (url, attribution) = if MAPTILER_KEY.is_empty() {
        (OSM_URL, OSM_ATTRIBUTION)
    } else {
        (MAPTILER_URL, MAPTILER_ATTRIBUTION)
    };

    let opts = TileLayerOptions::new();
    opts.set_update_when_idle(true);
    let _ = Reflect::set(&opts, &"attribution".into(), &attribution.into());
    TileLayer::new_options(url, &opts).add_to(map);
}
