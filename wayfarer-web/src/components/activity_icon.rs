use yew::prelude::*;

use crate::itinerary::ActivityKind;

/// Outline icon paths, 24x24 viewbox.
#[must_use]
pub const fn icon_paths(kind: ActivityKind) -> &'static [&'static str] {
    match kind {
        ActivityKind::TravelTrain => &[
            "M10.125 2.25h-4.5c-.621 0-1.125.504-1.125 1.125v17.25c0 .621.504 1.125 1.125 1.125h12.75c.621 0 1.125-.504 1.125-1.125v-9M10.125 2.25h.375a9 9 0 019 9v.375M10.125 2.25A3.375 3.375 0 0113.5 5.625v1.5c0 .621.504 1.125 1.125 1.125h1.5a3.375 3.375 0 013.375 3.375M9 15l2.25 2.25L15 12",
        ],
        ActivityKind::TravelBus => &[
            "M9 12h3.75M9 15h3.75M9 18h3.75m3 .75H18a2.25 2.25 0 002.25-2.25V6.108c0-1.135-.845-2.098-1.976-2.192a48.424 48.424 0 00-1.123-.08m-5.801 0c-.065.21-.1.433-.1.664 0 .414.336.75.75.75h4.5a.75.75 0 00.75-.75c0-.231-.035-.454-.1-.664M6.75 7.5h1.5",
        ],
        ActivityKind::TravelPlane => &[
            "M6 12L3.269 3.126A59.768 59.768 0 0121.485 12 59.77 59.77 0 013.27 20.876L5.999 12zm0 0h7.5",
        ],
        ActivityKind::Explore => &[
            "M15 10.5a3 3 0 11-6 0 3 3 0 016 0z",
            "M19.5 10.5c0 7.142-7.5 11.25-7.5 11.25S4.5 17.642 4.5 10.5a7.5 7.5 0 1115 0z",
        ],
        ActivityKind::Stay => &[
            "M8.25 21v-4.875c0-.621.504-1.125 1.125-1.125h2.25c.621 0 1.125.504 1.125 1.125V21m0 0h4.5V3.545M12.75 21h7.5V10.75M2.25 21h1.5m18 0h-1.5m-15-13.5H18",
        ],
        ActivityKind::Experience => &[
            "M11.48 3.499a.562.562 0 011.04 0l2.125 5.111a.563.563 0 00.475.345l5.518.442c.552.044.77.73.343 1.086l-4.194 3.603a.563.563 0 00-.182.557l1.285 5.385a.562.562 0 01-.84.61l-4.725-2.885a.563.563 0 00-.586 0L6.982 20.54a.562.562 0 01-.84-.61l1.285-5.386a.562.562 0 00-.182-.557l-4.194-3.603a.563.563 0 01.343-1.086l5.518-.442a.563.563 0 00.475-.345L11.48 3.5z",
        ],
        ActivityKind::Departure => &[
            "M15.75 9V5.25A2.25 2.25 0 0013.5 3h-6a2.25 2.25 0 00-2.25 2.25v13.5A2.25 2.25 0 007.5 21h6a2.25 2.25 0 002.25-2.25V15m3 0l3-3m0 0l-3-3m3 3H9",
        ],
        ActivityKind::Arrival => &[
            "M15.75 9V5.25A2.25 2.25 0 0013.5 3h-6a2.25 2.25 0 00-2.25 2.25v13.5A2.25 2.25 0 007.5 21h6a2.25 2.25 0 002.25-2.25V15M12 9l-3 3m0 0l3 3m-3-3h12.75",
        ],
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub kind: ActivityKind,
    /// Color class, usually the card's icon tint.
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(ActivityIcon)]
pub fn activity_icon(p: &Props) -> Html {
    let class = classes!("w-6", "h-6", p.class.clone());
    html! {
        <svg {class} fill="none" viewBox="0 0 24 24" stroke="currentColor" stroke-width="2"
            role="img" aria-label={p.kind.label()}>
            { for icon_paths(p.kind).iter().map(|d| html! {
                <path stroke-linecap="round" stroke-linejoin="round" d={*d} />
            }) }
        </svg>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    #[test]
    fn explore_draws_pin_and_dot() {
        assert_eq!(icon_paths(ActivityKind::Explore).len(), 2);
        assert_eq!(icon_paths(ActivityKind::Stay).len(), 1);
    }

    #[test]
    fn icon_carries_label_and_tint() {
        let props = Props {
            kind: ActivityKind::TravelPlane,
            class: classes!("text-sky-500"),
        };
        let html = block_on(LocalServerRenderer::<ActivityIcon>::with_props(props).render());
        assert!(html.contains("text-sky-500"), "{html}");
        assert!(html.contains(ActivityKind::TravelPlane.label()), "{html}");
    }
}
