use std::rc::Rc;

use yew::prelude::*;

use crate::itinerary::{Emphasis, ViewModel};

#[derive(Properties, Clone)]
pub struct Props {
    pub view_model: Rc<ViewModel>,
}

impl PartialEq for Props {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.view_model, &other.view_model) || self.view_model == other.view_model
    }
}

fn emphasis_note(emphasis: Emphasis) -> &'static str {
    match emphasis {
        Emphasis::Active => " (current stop)",
        Emphasis::Highlighted => " (highlighted)",
        Emphasis::Default => "",
    }
}

/// Map panel. The Leaflet map is mounted into the container once and then
/// kept in step with each new view model; the city list mirrors the marker
/// states for screen readers.
#[function_component(MapView)]
pub fn map_view(p: &Props) -> Html {
    let container = use_node_ref();
    let tint = use_node_ref();

    #[cfg(target_arch = "wasm32")]
    {
        wasm::use_leaflet_sync(&container, &tint, &p.view_model);
    }

    let route_note = if p.view_model.has_route() {
        format!("Route to {}", p.view_model.active_city())
    } else {
        format!("Staying in {}", p.view_model.active_city())
    };

    html! {
        <div class="relative w-full aspect-square rounded-2xl shadow-lg border border-gray-200 overflow-hidden">
            <div ref={container} class="h-full w-full" role="region" aria-label="Itinerary map" />
            <div
                ref={tint}
                class="absolute top-0 left-0 h-full w-full transition-colors duration-1000 pointer-events-none"
                style="background-color: transparent; opacity: 0.15;"
            />
            <div class="sr-only">
                <p>{ route_note }</p>
                <ul aria-label="Cities">
                    { for p.view_model.marker_states().map(|(city, emphasis)| html! {
                        <li key={city.name.clone()}>{ format!("{}{}", city.name, emphasis_note(emphasis)) }</li>
                    }) }
                </ul>
            </div>
        </div>
    }
}

#[cfg(target_arch = "wasm32")]
mod wasm {
    use std::rc::Rc;

    use yew::prelude::*;

    use crate::itinerary::{MapAdapter, ViewModel, viewer_config};
    use crate::leaflet::LeafletRenderer;

    type Adapter = MapAdapter<LeafletRenderer>;

    #[hook]
    pub fn use_leaflet_sync(container: &NodeRef, tint: &NodeRef, view_model: &Rc<ViewModel>) {
        let adapter = use_mut_ref(|| None::<Adapter>);

        {
            let adapter = adapter.clone();
            let container = container.clone();
            let tint = tint.clone();
            use_effect_with((), move |_| {
                if let Some(el) = container.cast::<web_sys::HtmlElement>() {
                    let renderer = LeafletRenderer::new(el, tint.cast::<web_sys::HtmlElement>());
                    *adapter.borrow_mut() = Some(MapAdapter::new(renderer, viewer_config().clone()));
                }
                move || {
                    if let Some(adapter) = adapter.borrow_mut().take() {
                        adapter.into_renderer().destroy();
                    }
                }
            });
        }

        {
            let adapter = adapter.clone();
            use_effect_with(Rc::clone(view_model), move |vm| {
                if let Some(adapter) = adapter.borrow_mut().as_mut() {
                    adapter.renderer_mut().ensure_map();
                    let report = adapter.sync(vm);
                    log::debug!("map view: {report:?}");
                }
            });
        }
    }
}
