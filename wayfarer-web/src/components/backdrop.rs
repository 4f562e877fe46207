use std::cell::RefCell;
use std::rc::Rc;

use yew::prelude::*;

use super::{Pattern, PatternWeight};
use crate::itinerary::{DecorationController, Theme};
use crate::paths::image_url;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayerRole {
    /// The active theme, fading in while a transition runs.
    Incoming,
    /// The theme being replaced; only present mid-fade.
    Outgoing,
}

/// Layers to paint, bottom first.
#[must_use]
pub fn layers(controller: &DecorationController) -> Vec<(Theme, LayerRole)> {
    let mut out = Vec::with_capacity(2);
    if let Some(previous) = controller.previous() {
        out.push((previous.clone(), LayerRole::Outgoing));
    }
    out.push((controller.current().clone(), LayerRole::Incoming));
    out
}

fn layer_html(theme: &Theme, role: LayerRole, fading: bool, fade_ms: u32) -> Html {
    let animation = match (role, fading) {
        (LayerRole::Outgoing, _) => Some("animate-fade-out"),
        (LayerRole::Incoming, true) => Some("animate-fade-in"),
        (LayerRole::Incoming, false) => None,
    };
    let timing = format!("animation-duration: {fade_ms}ms;");
    let key = format!("{}-{}", theme.color, theme.image.as_deref().unwrap_or(""));

    match theme.image.as_deref() {
        Some(image) => {
            let style = format!("background-image: url('{}');", image_url(image));
            html! {
                <div key={key} class={classes!("absolute", "inset-0", animation)} style={timing}>
                    <div class="absolute inset-0 bg-cover bg-center bg-no-repeat" {style} />
                    <div class="absolute inset-0 bg-black/50" />
                </div>
            }
        }
        None => {
            let tone = if theme.color.is_light() { "text-gray-300" } else { "text-white" };
            html! {
                <div key={key} class={classes!("absolute", "inset-0", tone, animation)} style={timing}>
                    <Pattern
                        kind={theme.color.backdrop_pattern()}
                        weight={PatternWeight::Bold}
                        scope={format!("backdrop-{}", theme.color)}
                        class={classes!("absolute", "inset-0", "h-full", "w-full", "opacity-5")}
                    />
                </div>
            }
        }
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    /// Theme of the selected day.
    pub theme: Theme,
    pub fade_ms: u32,
}

/// Crossfading page background. Each theme change starts a fade timer; a
/// newer change drops the running timer and preload, so a late callback
/// carries a stale ticket and is ignored.
#[function_component(Backdrop)]
pub fn backdrop(p: &Props) -> Html {
    let controller = {
        let initial = p.theme.clone();
        let fade_ms = p.fade_ms;
        use_mut_ref(move || DecorationController::new(initial, fade_ms))
    };
    let force_update = use_force_update();

    {
        let controller = controller.clone();
        let force_update = force_update.clone();
        use_effect_with(p.theme.clone(), move |theme| {
            let pending = start_transition(&controller, theme.clone(), force_update);
            move || drop(pending)
        });
    }

    let state = controller.borrow();
    let fading = state.previous().is_some();
    let fade_ms = state.fade_ms();
    html! {
        <div class="absolute inset-0 overflow-hidden pointer-events-none" aria-hidden="true">
            { for layers(&state).iter().map(|(theme, role)| layer_html(theme, *role, fading, fade_ms)) }
        </div>
    }
}

/// Timer and preload backing one running fade. Dropping cancels both.
struct PendingFade {
    _timer: Option<crate::dom::Timeout>,
    _preload: Option<crate::dom::ImagePreload>,
}

fn start_transition(
    controller: &Rc<RefCell<DecorationController>>,
    theme: Theme,
    force_update: UseForceUpdateHandle,
) -> Option<PendingFade> {
    let (transition, repainted) = {
        let mut state = controller.borrow_mut();
        let before = state.current().clone();
        let transition = state.change_theme(theme, crate::dom::now_ms());
        let repainted = transition.is_some() || *state.current() != before;
        (transition, repainted)
    };
    if repainted {
        force_update.force_update();
    }
    let transition = transition?;

    let preload = transition
        .preload
        .as_deref()
        .and_then(|image| crate::dom::ImagePreload::start(&image_url(image)));
    let timer = {
        let controller = Rc::clone(controller);
        let ticket = transition.ticket;
        crate::dom::Timeout::schedule(transition.duration_ms, move || {
            if controller.borrow_mut().complete(ticket) {
                force_update.force_update();
            } else {
                log::debug!("backdrop: ignoring stale fade {ticket:?}");
            }
        })
    };
    Some(PendingFade {
        _timer: timer,
        _preload: preload,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    fn photo(color: &str, image: &str) -> Theme {
        Theme {
            color: color.into(),
            image: Some(image.to_string()),
        }
    }

    #[test]
    fn stable_controller_paints_one_layer() {
        let controller = DecorationController::new(Theme::pattern("rose"), 700);
        let painted = layers(&controller);
        assert_eq!(painted.len(), 1);
        assert_eq!(painted[0].1, LayerRole::Incoming);
    }

    #[test]
    fn fade_paints_old_under_new() {
        let mut controller = DecorationController::new(Theme::pattern("rose"), 700);
        controller.change_theme(photo("sky", "static/img/jodhpur.jpg"), 0);
        let painted = layers(&controller);
        assert_eq!(painted[0], (Theme::pattern("rose"), LayerRole::Outgoing));
        assert_eq!(painted[1].1, LayerRole::Incoming);
        assert!(painted[1].0.is_photo());
    }

    #[test]
    fn photo_layer_darkens_the_image() {
        let props = Props {
            theme: photo("emerald", "static/img/udaipur.jpg"),
            fade_ms: 700,
        };
        let html = block_on(LocalServerRenderer::<Backdrop>::with_props(props).render());
        assert!(html.contains("/static/img/udaipur.jpg"), "{html}");
        assert!(html.contains("bg-black/50"));
        assert!(!html.contains("animate-fade-out"));
    }

    #[test]
    fn pattern_layer_uses_backdrop_tile() {
        let props = Props {
            theme: Theme::pattern("emerald"),
            fade_ms: 700,
        };
        let html = block_on(LocalServerRenderer::<Backdrop>::with_props(props).render());
        assert!(html.contains("pattern-backdrop-emerald-waves"), "{html}");
    }
}
