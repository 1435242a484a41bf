use gloo_console::info;
use workout_tracker_lib::{
    display::WorkoutRow,
    validation::RawWorkoutInput,
    workout::WorkoutId,
};
use yew::prelude::*;

use super::{workout_form::WorkoutForm, workout_list::WorkoutList};

pub enum Msg {
    DeleteAll,
}

/// Sidebar with the start hint, the form and the workout list.
pub struct Panel;

#[derive(PartialEq, Properties, Clone)]
pub struct Props {
    pub rows: Vec<WorkoutRow>,
    pub form_visible: bool,
    pub show_start_screen: bool,
    pub on_submit: Callback<RawWorkoutInput>,
    pub on_cancel: Callback<()>,
    pub on_select: Callback<WorkoutId>,
    pub on_delete: Callback<WorkoutId>,
    pub on_delete_all: Callback<()>,
}

impl Component for Panel {
    type Message = Msg;
    type Properties = Props;

    fn create(_ctx: &Context<Self>) -> Self {
        Panel
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::DeleteAll => {
                info!(format!("Deleting {} workouts", ctx.props().rows.len()));
                ctx.props().on_delete_all.emit(());
            }
        }
        false
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let on_delete_all = ctx.link().callback(|_: MouseEvent| Msg::DeleteAll);

        html! {
            <div class="sidebar">
                <div class="sidebar__header">
                    <h1 class="logo">{"Workouts"}</h1>
                    <button
                        class={classes!("global__delete", (!props.rows.is_empty()).then_some("show-btn"))}
                        onclick={on_delete_all}
                    >
                        {"Delete all"}
                    </button>
                </div>
                <p class={classes!("start-screen", (!props.show_start_screen).then_some("hidden"))}>
                    {"Click on the map to log a workout"}
                </p>
                <WorkoutForm
                    visible={props.form_visible}
                    on_submit={props.on_submit.clone()}
                    on_cancel={props.on_cancel.clone()}
                />
                <WorkoutList
                    rows={props.rows.clone()}
                    on_select={props.on_select.clone()}
                    on_delete={props.on_delete.clone()}
                />
            </div>
        }
    }
}
