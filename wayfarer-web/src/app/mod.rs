use std::sync::Arc;

use yew::prelude::*;

use crate::a11y::{day_status, visible_focus_css};
use crate::components::{Backdrop, DayNavigator, MapView, NavButton, NavDirection, Timeline};
use crate::itinerary::{Itinerary, Theme, load_itinerary, viewer_config};

pub mod state;

pub use state::{ViewerAction, ViewerStore};

/// Page background behind the decoration layers.
#[must_use]
pub fn page_background_class(theme: &Theme) -> &'static str {
    if !theme.is_photo() && theme.color.is_light() {
        "bg-white"
    } else {
        "bg-gray-900"
    }
}

#[must_use]
pub fn header_text_class(theme: &Theme) -> &'static str {
    if !theme.is_photo() && theme.color.is_light() {
        "text-gray-800"
    } else {
        "text-white"
    }
}

/// Keyframes for the backdrop crossfade and the card entrance.
#[must_use]
pub fn animation_css() -> &'static str {
    "@keyframes fade-in{from{opacity:0}to{opacity:1}}\
     @keyframes fade-out{from{opacity:1}to{opacity:0}}\
     @keyframes gentle-swoop-in{0%{opacity:0;transform:translateY(20px) scale(0.98)}100%{opacity:1;transform:translateY(0) scale(1)}}\
     .animate-fade-in{animation:fade-in 0.7s ease-in-out forwards}\
     .animate-fade-out{animation:fade-out 0.7s ease-in-out forwards}\
     .animate-card-enter{animation:gentle-swoop-in 0.6s cubic-bezier(0.25,0.46,0.45,0.94) forwards}"
}

#[function_component(App)]
pub fn app() -> Html {
    let loaded = use_memo((), |_| load_itinerary().map_err(|err| err.to_string()));

    {
        let loaded = loaded.clone();
        use_effect_with((), move |_| {
            if let Err(message) = loaded.as_ref() {
                crate::dom::console_error(&format!("failed to load itinerary: {message}"));
            }
        });
    }

    match loaded.as_ref() {
        Ok(itinerary) => html! { <ItineraryViewer itinerary={Arc::clone(itinerary)} /> },
        Err(message) => html! {
            <main class="min-h-screen flex items-center justify-center bg-gray-900 p-8">
                <div role="alert" class="max-w-md rounded-2xl bg-white p-6 shadow-lg">
                    <h1 class="text-xl font-bold text-gray-800">{ "Itinerary unavailable" }</h1>
                    <p class="mt-2 text-sm text-gray-500">{ message.clone() }</p>
                </div>
            </main>
        },
    }
}

#[derive(Properties, Clone)]
pub struct ViewerProps {
    pub itinerary: Arc<Itinerary>,
}

impl PartialEq for ViewerProps {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.itinerary, &other.itinerary)
    }
}

/// Timeline, navigator, map and backdrop wired to one shared view state.
#[function_component(ItineraryViewer)]
pub fn itinerary_viewer(p: &ViewerProps) -> Html {
    let store = {
        let itinerary = Arc::clone(&p.itinerary);
        use_reducer(move || ViewerStore::new(itinerary))
    };
    let session = &store.session;
    let state = session.view_state();
    let view_model = {
        let itinerary = Arc::clone(session.itinerary());
        use_memo(state, move |state| {
            crate::itinerary::ViewModel::derive(
                &itinerary,
                state.current_day_index,
                state.highlighted_city.as_deref(),
            )
        })
    };

    let selection = session.selection();
    let day = &view_model.active_day;
    let theme = view_model.theme();
    let status = day_status(day.day, selection.day_count(), &day.city, &day.title);

    let on_prev = {
        let store = store.clone();
        Callback::from(move |()| store.dispatch(ViewerAction::Prev))
    };
    let on_next = {
        let store = store.clone();
        Callback::from(move |()| store.dispatch(ViewerAction::Next))
    };
    let on_select_day = {
        let store = store.clone();
        Callback::from(move |index: usize| store.dispatch(ViewerAction::Select(index)))
    };
    let on_hover_city = {
        let store = store.clone();
        Callback::from(move |city: Option<String>| store.dispatch(ViewerAction::Hover(city)))
    };

    html! {
        <main class={classes!(
            "relative", "min-h-screen", "font-sans", "flex", "flex-col", "transition-colors",
            "duration-1000", page_background_class(&theme)
        )}>
            <style>{ visible_focus_css() }{ animation_css() }</style>
            <Backdrop theme={theme.clone()} fade_ms={viewer_config().fade_duration_ms()} />
            <div id="day-status" class="sr-only" aria-live="polite">{ status }</div>
            <div class="relative z-10 max-w-7xl mx-auto p-4 sm:p-8 w-full flex-grow flex flex-col">
                <header class="text-center mb-12 pt-8">
                    <h1 class={classes!(
                        "text-4xl", "md:text-6xl", "font-extrabold", "tracking-tight",
                        header_text_class(&theme)
                    )}>
                        { session.itinerary().title() }
                    </h1>
                </header>
                <div class="grid grid-cols-1 lg:grid-cols-2 lg:gap-16 xl:gap-24 flex-grow items-center">
                    <section class="flex flex-col items-center justify-center relative px-12 sm:px-16">
                        <NavButton direction={NavDirection::Prev} disabled={selection.is_first()} onclick={on_prev} />
                        <div class="w-full">
                            <Timeline
                                day_index={selection.index()}
                                day={day.clone()}
                                on_hover_city={on_hover_city}
                            />
                        </div>
                        <NavButton direction={NavDirection::Next} disabled={selection.is_last()} onclick={on_next} />
                        <DayNavigator
                            total_days={selection.day_count()}
                            current_index={selection.index()}
                            active_color={day.color.clone()}
                            on_select_day={on_select_day}
                        />
                    </section>
                    <aside class="lg:col-span-1 mt-8 lg:mt-0">
                        <div class="lg:sticky lg:top-8">
                            <MapView view_model={view_model.clone()} />
                        </div>
                    </aside>
                </div>
            </div>
        </main>
    }
}
