use yew::prelude::*;

use crate::a11y::go_to_day_label;
use crate::itinerary::ThemeColor;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub total_days: usize,
    pub current_index: usize,
    pub active_color: ThemeColor,
    pub on_select_day: Callback<usize>,
}

/// Row of dots, one per day; the active dot takes the day's color.
#[function_component(DayNavigator)]
pub fn day_navigator(p: &Props) -> Html {
    let active_bg = p.active_color.dot_class();
    let ring = p.active_color.focus_ring_class();

    html! {
        <nav class="flex justify-center items-center space-x-3 mt-8 py-4" aria-label="Days">
            { for (0..p.total_days).map(|index| {
                let is_active = index == p.current_index;
                let onclick = {
                    let on_select_day = p.on_select_day.clone();
                    Callback::from(move |_: MouseEvent| on_select_day.emit(index))
                };
                let state = if is_active {
                    classes!(active_bg, "scale-150")
                } else {
                    classes!("bg-gray-300", "hover:bg-gray-400", "hover:scale-110")
                };
                html! {
                    <button
                        key={index}
                        type="button"
                        {onclick}
                        class={classes!(
                            "w-4", "h-4", "rounded-full", "transition-all", "duration-300", "ease-in-out",
                            "focus:outline-none", "focus:ring-2", "focus:ring-offset-2", state, ring
                        )}
                        aria-label={go_to_day_label(index)}
                        aria-current={is_active.then_some("step")}
                    />
                }
            }) }
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    fn render(current_index: usize, color: &str) -> String {
        let props = Props {
            total_days: 4,
            current_index,
            active_color: ThemeColor::from(color),
            on_select_day: Callback::noop(),
        };
        block_on(LocalServerRenderer::<DayNavigator>::with_props(props).render())
    }

    #[test]
    fn one_dot_per_day_with_one_based_labels() {
        let html = render(0, "sky");
        assert_eq!(html.matches("<button").count(), 4);
        assert!(html.contains("Go to day 1") && html.contains("Go to day 4"));
        assert!(!html.contains("Go to day 0"));
    }

    #[test]
    fn only_active_dot_is_current_and_colored() {
        let html = render(2, "ivory");
        assert_eq!(html.matches("aria-current").count(), 1, "{html}");
        assert_eq!(html.matches("bg-amber-500").count(), 1);
        assert!(html.contains("focus:ring-amber-300"));
    }
}
