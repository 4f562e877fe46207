use yew::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavDirection {
    Prev,
    Next,
}

impl NavDirection {
    const fn label(self) -> &'static str {
        match self {
            Self::Prev => "Previous day",
            Self::Next => "Next day",
        }
    }

    const fn chevron(self) -> &'static str {
        match self {
            Self::Prev => "M15 19l-7-7 7-7",
            Self::Next => "M9 5l7 7-7 7",
        }
    }

    const fn side(self) -> &'static str {
        match self {
            Self::Prev => "left-0",
            Self::Next => "right-0",
        }
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub direction: NavDirection,
    /// Set at the matching boundary of the itinerary.
    #[prop_or_default]
    pub disabled: bool,
    pub onclick: Callback<()>,
}

#[function_component(NavButton)]
pub fn nav_button(p: &Props) -> Html {
    let onclick = {
        let cb = p.onclick.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };
    html! {
        <button
            type="button"
            {onclick}
            disabled={p.disabled}
            class={classes!(
                "absolute", p.direction.side(), "top-1/2", "-translate-y-1/2", "z-10", "bg-white/90",
                "p-3", "rounded-full", "shadow-md", "hover:bg-white", "disabled:opacity-50",
                "disabled:cursor-not-allowed", "transition-all", "hover:scale-110", "active:scale-95",
                "backdrop-blur-sm"
            )}
            aria-label={p.direction.label()}
        >
            <svg xmlns="http://www.w3.org/2000/svg" class="h-6 w-6 text-gray-600" fill="none"
                viewBox="0 0 24 24" stroke="currentColor" aria-hidden="true">
                <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2"
                    d={p.direction.chevron()} />
            </svg>
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    #[test]
    fn disabled_button_renders_disabled() {
        let props = Props {
            direction: NavDirection::Prev,
            disabled: true,
            onclick: Callback::noop(),
        };
        let html = block_on(LocalServerRenderer::<NavButton>::with_props(props).render());
        assert!(html.contains("disabled"), "{html}");
        assert!(html.contains("Previous day"));
    }

    #[test]
    fn enabled_next_button_points_right() {
        let props = Props {
            direction: NavDirection::Next,
            disabled: false,
            onclick: Callback::noop(),
        };
        let html = block_on(LocalServerRenderer::<NavButton>::with_props(props).render());
        assert!(html.contains("M9 5l7 7-7 7"));
        assert!(html.contains("right-0"));
    }
}
