use chrono::Local;
use gloo_console::{error, info};
use gloo_timers::callback::Timeout;
use gloo_utils::{document, window};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlElement, Node};
use workout_tracker_lib::{
    config::TrackerConfig,
    tracker::{FormReveal, WorkoutTracker},
    validation::RawWorkoutInput,
    workout::{Coords, WorkoutId},
};
use yew::prelude::*;

use crate::{
    components::{map_component::LeafletMap, panel::Panel},
    storage::BrowserStorage,
};

mod components;
mod geolocation;
mod storage;

const POSITION_ERROR: &str = "Could not get your position";

enum MainMsg {
    PositionFound(Coords),
    PositionUnavailable(String),
    MapClicked(Coords),
    RevealForm,
    Submit(RawWorkoutInput),
    CloseForm,
    Select(WorkoutId),
    Delete(WorkoutId),
    DeleteAll,
}

struct Model {
    tracker: WorkoutTracker<BrowserStorage, LeafletMap>,
    container: HtmlElement,
    form_visible: bool,
    reveal_timer: Option<Timeout>,
}

impl Model {
    fn render_map(&self) -> Html {
        let node: &Node = &self.container.clone().into();
        Html::VRef(node.clone())
    }
}

impl Component for Model {
    type Message = MainMsg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let storage = BrowserStorage::local().unwrap_or_else(|err| {
            error!(format!("{err}, workouts will not be kept"));
            BrowserStorage::ephemeral()
        });
        let tracker = WorkoutTracker::new(TrackerConfig::default(), storage);

        let container: HtmlElement = document()
            .create_element("div")
            .expect("document can create elements")
            .unchecked_into();
        container.set_id("map");
        container.set_class_name("map");

        let link = ctx.link().clone();
        spawn_local(async move {
            match geolocation::current_position().await {
                Ok(coords) => link.send_message(MainMsg::PositionFound(coords)),
                Err(err) => link.send_message(MainMsg::PositionUnavailable(err)),
            }
        });

        Self {
            tracker,
            container,
            form_visible: false,
            reveal_timer: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            MainMsg::PositionFound(coords) => {
                info!(format!("Position: {:?}", coords));
                let mut map = LeafletMap::initialize(&self.container, coords, self.tracker.config().zoom);
                map.on_click(ctx.link().callback(MainMsg::MapClicked));
                map.invalidate_size();
                self.tracker.attach_map(map);
                false
            }
            MainMsg::PositionUnavailable(err) => {
                error!(format!("Geolocation failed: {err}"));
                alert(POSITION_ERROR);
                false
            }
            MainMsg::MapClicked(coords) => {
                match self.tracker.map_clicked(coords) {
                    FormReveal::Immediate => self.form_visible = true,
                    FormReveal::Delayed(delay) => {
                        let link = ctx.link().clone();
                        self.reveal_timer = Some(Timeout::new(delay.as_millis() as u32, move || {
                            link.send_message(MainMsg::RevealForm)
                        }));
                    }
                }
                true
            }
            MainMsg::RevealForm => {
                self.reveal_timer = None;
                self.form_visible = self.tracker.is_form_open();
                true
            }
            MainMsg::Submit(raw) => match self.tracker.submit(&raw, Local::now().fixed_offset()) {
                Ok(_) => {
                    self.form_visible = false;
                    true
                }
                Err(err) => {
                    info!(format!("Rejected workout: {err}"));
                    alert(&err.user_message());
                    false
                }
            },
            MainMsg::CloseForm => {
                self.tracker.hide_form();
                self.form_visible = false;
                true
            }
            MainMsg::Select(id) => {
                if let Err(err) = self.tracker.select(&id) {
                    error!(format!("{err}"));
                }
                false
            }
            MainMsg::Delete(id) => match self.tracker.delete(&id) {
                Ok(_) => true,
                Err(err) => {
                    error!(format!("{err}"));
                    false
                }
            },
            MainMsg::DeleteAll => {
                self.tracker.delete_all();
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();

        html! {
            <>
                <Panel
                    rows={self.tracker.rows()}
                    form_visible={self.form_visible}
                    show_start_screen={self.tracker.show_start_screen()}
                    on_submit={link.callback(MainMsg::Submit)}
                    on_cancel={link.callback(|()| MainMsg::CloseForm)}
                    on_select={link.callback(MainMsg::Select)}
                    on_delete={link.callback(MainMsg::Delete)}
                    on_delete_all={link.callback(|()| MainMsg::DeleteAll)}
                />
                {self.render_map()}
            </>
        }
    }
}

fn alert(message: &str) {
    let _ = window().alert_with_message(message);
}

fn main() {
    // Routes the library's tracing events to the browser console.
    tracing_wasm::set_as_global_default();
    yew::Renderer::<Model>::new().render();
}
