use yew::prelude::*;

use super::DayCard;
use crate::itinerary::ItineraryDay;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub day_index: usize,
    pub day: ItineraryDay,
    pub on_hover_city: Callback<Option<String>>,
}

/// Shows the selected day. The wrapper is keyed by index so every day change
/// mounts a fresh card and replays the enter animation.
#[function_component(Timeline)]
pub fn timeline(p: &Props) -> Html {
    html! {
        <div class="relative w-full">
            <div class="relative flex flex-col items-center min-h-[400px]">
                <div key={p.day_index} class="w-full animate-card-enter">
                    <DayCard day={p.day.clone()} on_hover={p.on_hover_city.clone()} />
                </div>
            </div>
        </div>
    }
}
