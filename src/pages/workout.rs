use std::collections::BTreeMap;

use leptos::*;
use serde_json::Value;

use crate::progress::normalize_text_weights;
use crate::types::{CardInfo, DayDefinition, Weights};

/// One open day: warmup and workout tables plus a max-weight input per
/// workout exercise. Save and Complete go back up to the dashboard.
#[component]
pub fn DayWorkout(
    card: CardInfo,
    day: DayDefinition,
    saved_weights: Weights,
    #[prop(into)] on_save: Callback<(usize, Value)>,
    #[prop(into)] on_complete: Callback<(usize, Value)>,
    #[prop(into)] can_complete: Callback<Weights, bool>,
    #[prop(into)] describe: Callback<String, Option<String>>,
) -> impl IntoView {
    let day_index = card.day_index;
    let (weights, set_weights) = create_signal(saved_weights.to_text_map());
    let (description, set_description) = create_signal(Option::<(String, Option<String>)>::None);

    let ready = create_memo(move |_| weights.with(|w| can_complete.call(normalize_text_weights(w))));

    let cleaned = move || weights.with_untracked(|w| normalize_text_weights(w).to_value());

    let show_description = move |name: String| {
        let text = describe.call(name.clone());
        set_description.set(Some((name, text)));
    };

    let warmup_rows = day.warmup.iter().enumerate().map(|(i, ex)| {
        let name = ex.name.clone();
        view! {
            <div class="exercise-name">
                <p>{format!("{}. {}", i + 1, ex.name)}</p>
                <button class="help-icon" on:click=move |_| show_description(name.clone())>
                    <i class="fa-solid fa-circle-question"></i>
                </button>
            </div>
            <p class="exercise-info">{ex.sets.clone()}</p>
            <p class="exercise-info">{ex.reps.clone()}</p>
            <input class="weight-input" placeholder="N/A" disabled=true />
        }
    }).collect_view();

    let workout_rows = day.workout.iter().enumerate().map(|(i, ex)| {
        let name = ex.name.clone();
        let key = ex.name.clone();
        let key_value = ex.name.clone();
        view! {
            <div class="exercise-name">
                <p>{format!("{}. {}", i + 1, ex.name)}</p>
                <button class="help-icon" on:click=move |_| show_description(name.clone())>
                    <i class="fa-solid fa-circle-question"></i>
                </button>
            </div>
            <p class="exercise-info">{ex.sets.clone()}</p>
            <p class="exercise-info">{ex.reps.clone()}</p>
            <input
                type="number"
                inputmode="decimal"
                min="0"
                step="any"
                class="weight-input"
                placeholder="Enter max weight"
                prop:value=move || weights.with(|w| w.get(&key_value).cloned().unwrap_or_default())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    set_weights.update(|w: &mut BTreeMap<String, String>| {
                        w.insert(key.clone(), value);
                    });
                }
            />
        }
    }).collect_view();

    view! {
        <div class="workout-container">
            {move || description.get().map(|(name, text)| view! {
                <ExerciseModal
                    name=name
                    description=text
                    on_close=Callback::new(move |_: ()| set_description.set(None))
                />
            })}

            <div class="workout-card card">
                <div class="plan-card-header">
                    <p>"Day " {card.day_num.clone()}</p>
                    <i class=card.icon()></i>
                </div>
                <div class="plan-card-header">
                    <h2><b>{card.label()} " Workout"</b></h2>
                </div>
            </div>

            <div class="workout-grid">
                <div class="exercise-name"><h4>"Warmup"</h4></div>
                <h6>"Sets"</h6>
                <h6>"Reps"</h6>
                <h6 class="weight-input">"Max Weight"</h6>
                {warmup_rows}
            </div>

            <div class="workout-grid">
                <div class="exercise-name"><h4>"Workout"</h4></div>
                <h6>"Sets"</h6>
                <h6>"Reps"</h6>
                <h6 class="weight-input">"Max Weight*"</h6>
                {workout_rows}
            </div>

            <p class="unlock-hint">
                "* To unlock the next day: enter Max Weight for every workout exercise, then press Complete."
            </p>
            <div class="workout-buttons">
                <button on:click=move |_| on_save.call((day_index, cleaned()))>"Save & Exit"</button>
                <button
                    on:click=move |_| on_complete.call((day_index, cleaned()))
                    disabled=move || !ready.get()
                >
                    "Complete"
                </button>
            </div>
        </div>
    }
}

#[component]
fn ExerciseModal(
    name: String,
    description: Option<String>,
    #[prop(into)] on_close: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="modal-container">
            <button class="modal-underlay" on:click=move |_| on_close.call(())></button>
            <div class="modal-content">
                <div>
                    <h6>"Name"</h6>
                    <h2 class="special-shadow">{name}</h2>
                </div>
                <div>
                    <h6>"Description"</h6>
                    <p>{description.unwrap_or_else(|| "No description available.".to_string())}</p>
                </div>
                <div>
                    <button on:click=move |_| on_close.call(())>"Close"</button>
                </div>
            </div>
        </div>
    }
}
