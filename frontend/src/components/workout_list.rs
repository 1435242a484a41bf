use workout_tracker_lib::{display::WorkoutRow, workout::WorkoutId};
use yew::prelude::*;

#[derive(PartialEq, Properties, Clone)]
pub struct WorkoutListProps {
    pub rows: Vec<WorkoutRow>,
    pub on_select: Callback<WorkoutId>,
    pub on_delete: Callback<WorkoutId>,
}

#[function_component]
pub fn WorkoutList(props: &WorkoutListProps) -> Html {
    html! {
        <ul class="workouts">
            { for props.rows.iter().map(|row| workout_item(row, &props.on_select, &props.on_delete)) }
        </ul>
    }
}

fn workout_item(row: &WorkoutRow, on_select: &Callback<WorkoutId>, on_delete: &Callback<WorkoutId>) -> Html {
    let onclick = {
        let id = row.id.clone();
        let on_select = on_select.clone();
        Callback::from(move |_: MouseEvent| on_select.emit(id.clone()))
    };

    // Deleting must not also recenter the map.
    let on_close = {
        let id = row.id.clone();
        let on_delete = on_delete.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            on_delete.emit(id.clone());
        })
    };

    html! {
        <li key={row.id.to_string()} class={classes!("workout", format!("workout--{}", row.kind.as_str()))} data-id={row.id.to_string()} {onclick}>
            <i class="ri-close-line close-btn" onclick={on_close}></i>
            <h2 class="workout__title">{row.title.clone()}</h2>
            { for row.details.iter().map(|detail| html! {
                <div class="workout__details">
                    <span class="workout__icon">{detail.icon}</span>
                    <span class="workout__value">{detail.value.clone()}</span>
                    <span class="workout__unit">{detail.unit}</span>
                </div>
            }) }
        </li>
    }
}
