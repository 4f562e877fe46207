use yew::prelude::*;

use super::{ActivityIcon, Pattern, PatternWeight};
use crate::itinerary::{Activity, ItineraryDay};

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub day: ItineraryDay,
    /// Emits the card's city on pointer enter and `None` on leave.
    pub on_hover: Callback<Option<String>>,
}

#[function_component(DayCard)]
pub fn day_card(p: &Props) -> Html {
    let style = p.day.color.card_style();

    let onmouseenter = {
        let on_hover = p.on_hover.clone();
        let city = p.day.city.clone();
        Callback::from(move |_: MouseEvent| on_hover.emit(Some(city.clone())))
    };
    let onmouseleave = {
        let on_hover = p.on_hover.clone();
        Callback::from(move |_: MouseEvent| on_hover.emit(None))
    };

    html! {
        <article class="relative w-full max-w-lg mx-auto" {onmouseenter} {onmouseleave}
            data-city={p.day.city.clone()}>
            <div class={classes!(
                "absolute", "left-0", "top-0", "-translate-x-1/2", "-translate-y-1/2", "w-10", "h-10",
                "rounded-full", "flex", "items-center", "justify-center", "text-white",
                "font-extrabold", "text-lg", "ring-8", "ring-white", "shadow", style.badge
            )} aria-hidden="true">
                { p.day.day }
            </div>
            <div class={classes!(
                "bg-white", "rounded-2xl", "shadow-lg", "border", "overflow-hidden",
                "transition-all", "duration-300", "hover:shadow-2xl", "hover:scale-[1.02]", style.border
            )}>
                <header class={classes!("relative", "p-5", "border-b", style.border, style.header)}>
                    <Pattern
                        kind={p.day.color.header_pattern()}
                        weight={PatternWeight::Fine}
                        scope={format!("day-{}", p.day.day)}
                        class={classes!("absolute", "inset-0", "h-full", "w-full", "opacity-10")}
                    />
                    <div class="relative">
                        <p class={classes!("text-xs", "font-bold", "uppercase", "tracking-wider", style.text)}>
                            { &p.day.city }
                        </p>
                        <h2 class="text-2xl font-bold text-gray-800 mt-1 font-serif">{ &p.day.title }</h2>
                        <p class="text-sm text-gray-500">{ &p.day.date }</p>
                    </div>
                </header>
                <div class="p-6 bg-white">
                    <ul class="space-y-4">
                        { for p.day.activities.iter().map(|a| activity_item(a, style.icon)) }
                    </ul>
                </div>
            </div>
        </article>
    }
}

fn activity_item(activity: &Activity, icon_class: &'static str) -> Html {
    html! {
        <li class="flex items-start gap-4">
            <div class="flex-shrink-0 pt-0.5">
                <ActivityIcon kind={activity.kind} class={classes!(icon_class)} />
            </div>
            <div>
                <p class="text-gray-800">{ &activity.description }</p>
                if let Some(time) = &activity.time {
                    <p class="text-sm text-gray-500">{ time }</p>
                }
            </div>
        </li>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::itinerary::{ActivityKind, Coords, ThemeColor};
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    fn day(color: &str) -> ItineraryDay {
        ItineraryDay {
            day: 4,
            date: "14 Dec".into(),
            title: "Blue lanes".into(),
            city: "Jodhpur".into(),
            color: ThemeColor::from(color),
            activities: vec![
                Activity {
                    kind: ActivityKind::Explore,
                    description: "Mehrangarh Fort".into(),
                    time: Some("Morning".into()),
                },
                Activity {
                    kind: ActivityKind::Stay,
                    description: "Haveli".into(),
                    time: None,
                },
            ],
            coords: Coords::new(26.24, 73.02),
            image: None,
        }
    }

    fn render(day: ItineraryDay) -> String {
        let props = Props {
            day,
            on_hover: Callback::noop(),
        };
        block_on(LocalServerRenderer::<DayCard>::with_props(props).render())
    }

    #[test]
    fn card_lists_every_activity() {
        let html = render(day("sky"));
        assert!(html.contains("Jodhpur") && html.contains("Blue lanes"), "{html}");
        assert!(html.contains("Mehrangarh Fort") && html.contains("Haveli"));
        assert!(html.contains("Morning"));
        assert!(html.contains("bg-sky-500") && html.contains("border-sky-300"));
    }

    #[test]
    fn unknown_color_uses_neutral_card() {
        let html = render(day("chartreuse"));
        assert!(html.contains("bg-gray-800"), "{html}");
        assert!(html.contains("pattern-day-4-lines"));
    }
}
