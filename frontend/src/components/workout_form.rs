use web_sys::{HtmlInputElement, HtmlSelectElement};
use workout_tracker_lib::{validation::RawWorkoutInput, workout::WorkoutKind};
use yew::prelude::*;

#[derive(PartialEq, Properties, Clone)]
pub struct WorkoutFormProps {
    pub visible: bool,
    pub on_submit: Callback<RawWorkoutInput>,
    pub on_cancel: Callback<()>,
}

#[function_component]
pub fn WorkoutForm(props: &WorkoutFormProps) -> Html {
    let kind = use_state(|| WorkoutKind::Running);
    let distance = use_node_ref();
    let duration = use_node_ref();
    let cadence = use_node_ref();
    let elevation = use_node_ref();

    // Focus on open, clear the inputs on close.
    {
        let fields = [distance.clone(), duration.clone(), cadence.clone(), elevation.clone()];
        use_effect_with(props.visible, move |visible| {
            if *visible {
                if let Some(input) = fields[0].cast::<HtmlInputElement>() {
                    let _ = input.focus();
                }
            } else {
                for field in &fields {
                    if let Some(input) = field.cast::<HtmlInputElement>() {
                        input.set_value("");
                    }
                }
            }
        });
    }

    let on_kind_change = {
        let kind = kind.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            kind.set(WorkoutKind::parse(&select.value()).unwrap_or(WorkoutKind::Running));
        })
    };

    let onsubmit = {
        let kind = kind.clone();
        let (distance, duration, cadence, elevation) = (distance.clone(), duration.clone(), cadence.clone(), elevation.clone());
        let on_submit = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_submit.emit(RawWorkoutInput {
                kind: *kind,
                distance: value_of(&distance),
                duration: value_of(&duration),
                cadence: value_of(&cadence),
                elevation: value_of(&elevation),
            });
        })
    };

    let onkeydown = {
        let on_cancel = props.on_cancel.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Escape" {
                on_cancel.emit(());
            }
        })
    };

    let running = *kind == WorkoutKind::Running;
    let row = |hidden: bool| classes!("form__row", hidden.then_some("form__row--hidden"));

    html! {
        <form class={classes!("form", (!props.visible).then_some("hidden"))} {onsubmit} {onkeydown}>
            <div class="form__row">
                <label class="form__label">{"Type"}</label>
                <select class="form__input form__input--type" onchange={on_kind_change}>
                    <option value="running" selected={running}>{"Running"}</option>
                    <option value="cycling" selected={!running}>{"Cycling"}</option>
                </select>
            </div>
            <div class="form__row">
                <label class="form__label">{"Distance"}</label>
                <input ref={distance} type="number" step="any" class="form__input form__input--distance" placeholder="km" />
            </div>
            <div class="form__row">
                <label class="form__label">{"Duration"}</label>
                <input ref={duration} type="number" step="any" class="form__input form__input--duration" placeholder="min" />
            </div>
            <div class={row(!running)}>
                <label class="form__label">{"Cadence"}</label>
                <input ref={cadence} type="number" step="any" class="form__input form__input--cadence" placeholder="step/min" />
            </div>
            <div class={row(running)}>
                <label class="form__label">{"Elev Gain"}</label>
                <input ref={elevation} type="number" step="any" class="form__input form__input--elevation" placeholder="meters" />
            </div>
            <button class="form__btn">{"OK"}</button>
        </form>
    }
}

fn value_of(node: &NodeRef) -> String {
    node.cast::<HtmlInputElement>().map(|input| input.value()).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn props(visible: bool) -> WorkoutFormProps {
        WorkoutFormProps {
            visible,
            on_submit: Callback::from(|_: RawWorkoutInput| ()),
            on_cancel: Callback::from(|_: ()| ()),
        }
    }

    #[tokio::test]
    async fn inputs_are_numeric() {
        let html = yew::LocalServerRenderer::<WorkoutForm>::with_props(props(true)).render().await;

        assert_eq!(html.matches("<input").count(), 4);
        assert_eq!(html.matches(r#"type="number""#).count(), 4);
    }

    #[tokio::test]
    async fn cadence_shown_for_running() {
        let html = yew::LocalServerRenderer::<WorkoutForm>::with_props(props(false)).render().await;

        assert!(html.contains("form hidden"));
        assert_eq!(html.matches("form__row--hidden").count(), 1);
        let hidden_row = html.split("form__row--hidden").nth(1).unwrap();
        assert!(hidden_row.contains("form__input--elevation"));
        assert!(!hidden_row.contains("form__input--cadence"));
    }
}
