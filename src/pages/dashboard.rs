use leptos::*;
use serde_json::Value;

use crate::program::Catalog;
use crate::progress::ProgressTracker;
use crate::storage::LocalStorage;
use crate::types::{CardInfo, Outcome, SaveRequest, Weights};
use crate::pages::DayWorkout;

/// The grid of day cards. Owns the progress tracker; the open day only gets
/// snapshots and callbacks.
#[component]
pub fn Dashboard() -> impl IntoView {
    let tracker = create_rw_signal(ProgressTracker::open(Catalog::standard(), LocalStorage::default()));
    let (selected, set_selected) = create_signal(Option::<usize>::None);

    let cards = create_memo(move |_| tracker.with(|t| t.cards()));

    let on_select = Callback::new(move |day_index: usize| {
        let unlocked = tracker.with_untracked(|t| t.is_unlocked(day_index));
        if unlocked {
            set_selected.set(Some(day_index));
        }
    });

    let on_save = Callback::new(move |(day_index, weights): (usize, Value)| {
        tracker.update(|t| {
            t.save(day_index, SaveRequest::weights(weights));
        });
        set_selected.set(None);
    });

    let on_complete = Callback::new(move |(day_index, weights): (usize, Value)| {
        let outcome = tracker.try_update(|t| t.complete(day_index, &weights));
        if let Some(Outcome::Saved { .. }) = outcome {
            set_selected.set(None);
        }
    });

    let describe = Callback::new(move |name: String| {
        tracker.with_untracked(|t| t.catalog().description(&name).map(str::to_string))
    });

    view! {
        <div class="training-plan-grid">
            {move || {
                let open_day = selected.get();
                cards.get().into_iter().map(|card| {
                    if open_day == Some(card.day_index) {
                        let day_index = card.day_index;
                        let (day, saved_weights) = tracker.with_untracked(|t| {
                            (t.catalog().day(day_index).cloned().unwrap_or_default(), t.saved_weights(day_index))
                        });
                        let can_complete = Callback::new(move |weights: Weights| {
                            tracker.with_untracked(|t| t.can_complete(day_index, &weights))
                        });
                        view! {
                            <DayWorkout
                                card=card
                                day=day
                                saved_weights=saved_weights
                                on_save=on_save
                                on_complete=on_complete
                                can_complete=can_complete
                                describe=describe
                            />
                        }.into_view()
                    } else {
                        view! { <DayCard card=card on_select=on_select /> }.into_view()
                    }
                }).collect_view()
            }}
        </div>
    }
}

#[component]
fn DayCard(card: CardInfo, #[prop(into)] on_select: Callback<usize>) -> impl IntoView {
    let day_index = card.day_index;
    let class = if card.is_locked {
        "card plan-card inactive"
    } else if card.is_complete {
        "card plan-card complete"
    } else {
        "card plan-card"
    };

    view! {
        <button
            class=class
            on:click=move |_| on_select.call(day_index)
        >
            <div class="plan-card-header">
                <p>"Day " {card.day_num.clone()}</p>
                <i class=card.icon()></i>
            </div>
            <div class="plan-card-header">
                <h4><b>{card.label()}</b></h4>
            </div>
        </button>
    }
}
