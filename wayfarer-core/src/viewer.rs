//! Headless composition of session, map adapter and decoration
use std::sync::Arc;

use crate::config::ViewerConfig;
use crate::data::Itinerary;
use crate::decoration::{DecorationController, Theme, Transition, TransitionTicket};
use crate::map::{MapAdapter, MapRenderer, SyncReport};
use crate::session::ViewerSession;
use crate::view_model::ViewModel;

/// Outcome of one presentation event.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewerUpdate {
    /// Whether the view state moved at all.
    pub changed: bool,
    pub map: SyncReport,
    /// Crossfade the host must time, if the theme changed.
    pub transition: Option<Transition>,
}

/// Routes presentation events through the session and fans the recomputed
/// view model out to the map and the decoration layer.
pub struct Viewer<R: MapRenderer> {
    session: ViewerSession,
    map: MapAdapter<R>,
    decoration: DecorationController,
}

impl<R: MapRenderer> Viewer<R> {
    pub fn new(itinerary: Arc<Itinerary>, renderer: R, config: ViewerConfig) -> Self {
        let session = ViewerSession::new(itinerary);
        let decoration =
            DecorationController::from_config(Theme::of_day(session.active_day()), &config);
        Self {
            session,
            map: MapAdapter::new(renderer, config),
            decoration,
        }
    }

    /// Build a viewer over whatever `loader` provides.
    ///
    /// # Errors
    ///
    /// Returns the loader's error if the itinerary cannot be loaded.
    pub fn from_loader<L: crate::ItineraryLoader>(
        loader: &L,
        renderer: R,
        config: ViewerConfig,
    ) -> Result<Self, L::Error> {
        let itinerary = loader.load_itinerary()?;
        Ok(Self::new(Arc::new(itinerary), renderer, config))
    }

    pub const fn session(&self) -> &ViewerSession {
        &self.session
    }

    pub const fn map(&self) -> &MapAdapter<R> {
        &self.map
    }

    pub fn map_mut(&mut self) -> &mut MapAdapter<R> {
        &mut self.map
    }

    pub const fn decoration(&self) -> &DecorationController {
        &self.decoration
    }

    #[must_use]
    pub fn view_model(&self) -> ViewModel {
        self.session.view_model()
    }

    /// Initial sync once the renderer is mounted; safe to call repeatedly.
    pub fn refresh(&mut self) -> SyncReport {
        let vm = self.session.view_model();
        self.map.sync(&vm)
    }

    pub fn on_select_day(&mut self, index: isize, now_ms: u64) -> ViewerUpdate {
        let changed = self.session.go_to(index);
        self.after_day_change(changed, now_ms)
    }

    pub fn on_next(&mut self, now_ms: u64) -> ViewerUpdate {
        let changed = self.session.next();
        self.after_day_change(changed, now_ms)
    }

    pub fn on_prev(&mut self, now_ms: u64) -> ViewerUpdate {
        let changed = self.session.prev();
        self.after_day_change(changed, now_ms)
    }

    pub fn on_hover_city(&mut self, city: Option<&str>) -> ViewerUpdate {
        let changed = self.session.hover(city);
        let vm = self.session.view_model();
        ViewerUpdate {
            changed,
            map: self.map.sync(&vm),
            transition: None,
        }
    }

    /// Timer callback for a scheduled crossfade.
    pub fn on_transition_elapsed(&mut self, ticket: TransitionTicket) -> bool {
        self.decoration.complete(ticket)
    }

    /// Poll-driven alternative to [`Viewer::on_transition_elapsed`].
    pub fn tick(&mut self, now_ms: u64) -> bool {
        self.decoration.tick(now_ms)
    }

    fn after_day_change(&mut self, changed: bool, now_ms: u64) -> ViewerUpdate {
        let vm = self.session.view_model();
        let map = self.map.sync(&vm);
        let transition = if changed {
            self.decoration.change_theme(vm.theme(), now_ms)
        } else {
            None
        };
        if changed {
            log::debug!(
                "viewer: day {} ({}), route {}",
                vm.active_day.day,
                vm.active_city(),
                if vm.has_route() { "shown" } else { "hidden" }
            );
        }
        ViewerUpdate {
            changed,
            map,
            transition,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::fixtures::itinerary;
    use crate::decoration::DecorationPhase;
    use crate::recording::RecordingRenderer;

    fn viewer(cities: &[&str]) -> Viewer<RecordingRenderer> {
        Viewer::new(
            Arc::new(itinerary(cities)),
            RecordingRenderer::ready(),
            ViewerConfig::default(),
        )
    }

    #[test]
    fn next_drives_map_and_decoration() {
        let mut viewer = viewer(&["X", "Y"]);
        viewer.refresh();
        let update = viewer.on_next(0);
        assert!(update.changed);
        assert!(update.map.route_drawn);
        assert!(update.map.camera_moved);
        let transition = update.transition.unwrap();
        assert_eq!(viewer.decoration().phase(), DecorationPhase::Transitioning);
        assert!(viewer.on_transition_elapsed(transition.ticket));
    }

    #[test]
    fn boundary_navigation_changes_nothing() {
        let mut viewer = viewer(&["X", "Y"]);
        viewer.refresh();
        let update = viewer.on_prev(0);
        assert!(!update.changed);
        assert!(update.map.is_noop());
        assert!(update.transition.is_none());
    }

    #[test]
    fn same_color_stay_has_no_crossfade() {
        let mut viewer = viewer(&["X", "X"]);
        let update = viewer.on_next(0);
        assert!(update.changed);
        assert!(update.transition.is_none());
        assert_eq!(viewer.decoration().phase(), DecorationPhase::Stable);
    }

    #[test]
    fn same_color_day_with_photo_has_no_crossfade() {
        let mut days = itinerary(&["X", "X"]).days().to_vec();
        days[1].image = Some("img/a.jpg".into());
        let mut viewer = Viewer::new(
            Arc::new(Itinerary::new("photos", days).unwrap()),
            RecordingRenderer::ready(),
            ViewerConfig::default(),
        );
        let update = viewer.on_next(0);
        assert!(update.changed);
        assert!(update.transition.is_none());
        assert_eq!(viewer.decoration().phase(), DecorationPhase::Stable);
        assert_eq!(viewer.decoration().current().image.as_deref(), Some("img/a.jpg"));
    }

    #[test]
    fn hover_never_starts_a_crossfade() {
        let mut viewer = viewer(&["X", "Y"]);
        viewer.refresh();
        let update = viewer.on_hover_city(Some("Y"));
        assert!(update.changed);
        assert_eq!(update.map.emphasis_updates, 1);
        assert!(update.transition.is_none());
    }

    #[test]
    fn loader_errors_propagate() {
        struct Broken;
        impl crate::ItineraryLoader for Broken {
            type Error = crate::ItineraryError;
            fn load_itinerary(&self) -> Result<Itinerary, Self::Error> {
                Err(crate::ItineraryError::Empty)
            }
        }
        let result = Viewer::from_loader(&Broken, RecordingRenderer::ready(), ViewerConfig::default());
        assert!(result.is_err());
    }
}
