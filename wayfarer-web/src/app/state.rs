use std::rc::Rc;
use std::sync::Arc;

use yew::prelude::*;

use crate::itinerary::{Itinerary, ViewerSession};

/// Presentation events fed back from the components.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewerAction {
    Select(usize),
    Next,
    Prev,
    Hover(Option<String>),
}

/// Reducer state wrapping the core session. Unchanged actions hand back the
/// same `Rc`, so nothing downstream re-renders.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewerStore {
    pub session: ViewerSession,
}

impl ViewerStore {
    #[must_use]
    pub fn new(itinerary: Arc<Itinerary>) -> Self {
        Self {
            session: ViewerSession::new(itinerary),
        }
    }
}

impl Reducible for ViewerStore {
    type Action = ViewerAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut session = self.session.clone();
        let changed = match &action {
            ViewerAction::Select(index) => {
                session.go_to(isize::try_from(*index).unwrap_or(isize::MAX))
            }
            ViewerAction::Next => session.next(),
            ViewerAction::Prev => session.prev(),
            ViewerAction::Hover(city) => session.hover(city.as_deref()),
        };
        if changed {
            log::debug!("viewer: {action:?} -> day index {}", session.current_index());
            Rc::new(Self { session })
        } else {
            self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> Rc<ViewerStore> {
        Rc::new(ViewerStore::new(crate::itinerary::load_itinerary().unwrap()))
    }

    #[test]
    fn boundary_actions_keep_the_same_state() {
        let start = store();
        let after = Rc::clone(&start).reduce(ViewerAction::Prev);
        assert!(Rc::ptr_eq(&start, &after));
    }

    #[test]
    fn select_clamps_and_next_advances() {
        let state = store().reduce(ViewerAction::Select(500));
        let last = state.session.itinerary().day_count() - 1;
        assert_eq!(state.session.current_index(), last);
        let state = state.reduce(ViewerAction::Select(0)).reduce(ViewerAction::Next);
        assert_eq!(state.session.current_index(), 1);
    }

    #[test]
    fn hover_is_tracked_and_cleared() {
        let state = store().reduce(ViewerAction::Hover(Some("Jaipur".into())));
        assert_eq!(state.session.hovered_city(), Some("Jaipur"));
        let state = state.reduce(ViewerAction::Hover(None));
        assert_eq!(state.session.hovered_city(), None);
    }
}
