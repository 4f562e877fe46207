//! Background decoration crossfade between consecutive day themes.
//!
//! The controller is a two-state machine, `Stable` and `Transitioning`. The
//! host owns the clock: it either schedules a timer for each [`Transition`]
//! and reports back with [`DecorationController::complete`], or polls
//! [`DecorationController::tick`]. A ticket from a superseded transition is
//! stale and completing it does nothing.
use serde::Serialize;

use crate::config::{FADE_RANGE_MS, ViewerConfig};
use crate::data::ItineraryDay;
use crate::theme::ThemeColor;

/// What a day paints behind the page: its color pattern, or a photo.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Theme {
    pub color: ThemeColor,
    pub image: Option<String>,
}

impl Theme {
    #[must_use]
    pub fn of_day(day: &ItineraryDay) -> Self {
        Self {
            color: day.color.clone(),
            image: day.image().map(str::to_string),
        }
    }

    #[must_use]
    pub fn pattern(color: impl Into<ThemeColor>) -> Self {
        Self {
            color: color.into(),
            image: None,
        }
    }

    #[must_use]
    pub const fn is_photo(&self) -> bool {
        self.image.is_some()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct TransitionTicket(u64);

/// Work the host must schedule after a theme change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub ticket: TransitionTicket,
    pub duration_ms: u32,
    /// Image of the incoming theme, to be preloaded while the fade runs.
    pub preload: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DecorationPhase {
    Stable,
    Transitioning,
}

#[derive(Debug, Clone, PartialEq)]
struct Fade {
    from: Theme,
    ticket: TransitionTicket,
    deadline_ms: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DecorationController {
    current: Theme,
    fade: Option<Fade>,
    fade_ms: u32,
    generation: u64,
}

impl DecorationController {
    #[must_use]
    pub fn new(initial: Theme, fade_ms: u32) -> Self {
        Self {
            current: initial,
            fade: None,
            fade_ms: fade_ms.clamp(FADE_RANGE_MS.0, FADE_RANGE_MS.1),
            generation: 0,
        }
    }

    #[must_use]
    pub fn from_config(initial: Theme, config: &ViewerConfig) -> Self {
        Self::new(initial, config.fade_duration_ms())
    }

    #[must_use]
    pub const fn current(&self) -> &Theme {
        &self.current
    }

    /// Theme fading out, present only while transitioning.
    #[must_use]
    pub fn previous(&self) -> Option<&Theme> {
        self.fade.as_ref().map(|fade| &fade.from)
    }

    #[must_use]
    pub const fn phase(&self) -> DecorationPhase {
        if self.fade.is_some() {
            DecorationPhase::Transitioning
        } else {
            DecorationPhase::Stable
        }
    }

    #[must_use]
    pub const fn fade_ms(&self) -> u32 {
        self.fade_ms
    }

    #[must_use]
    pub fn deadline_ms(&self) -> Option<u64> {
        self.fade.as_ref().map(|fade| fade.deadline_ms)
    }

    /// Switch to `theme`. Returns the transition to schedule, or `None` when
    /// `theme` has the active color. A same-color theme still replaces the
    /// current one, so a new image shows up without a fade.
    ///
    /// Changing again mid-fade abandons the running fade: the theme that was
    /// fading out is dropped and the fade restarts from the theme that was
    /// active a moment ago.
    pub fn change_theme(&mut self, theme: Theme, now_ms: u64) -> Option<Transition> {
        if theme.color == self.current.color {
            self.current = theme;
            return None;
        }
        if let Some(stale) = &self.fade {
            log::debug!(
                "decoration: abandoning fade from {} (ticket {:?})",
                stale.from.color,
                stale.ticket
            );
        }
        self.generation += 1;
        let ticket = TransitionTicket(self.generation);
        let preload = theme.image.clone();
        let from = std::mem::replace(&mut self.current, theme);
        self.fade = Some(Fade {
            from,
            ticket,
            deadline_ms: now_ms.saturating_add(u64::from(self.fade_ms)),
        });
        Some(Transition {
            ticket,
            duration_ms: self.fade_ms,
            preload,
        })
    }

    /// Finish the fade identified by `ticket`. Returns false for stale tickets.
    pub fn complete(&mut self, ticket: TransitionTicket) -> bool {
        match &self.fade {
            Some(fade) if fade.ticket == ticket => {
                self.fade = None;
                true
            }
            _ => false,
        }
    }

    /// Finish the running fade once its deadline has passed.
    pub fn tick(&mut self, now_ms: u64) -> bool {
        match &self.fade {
            Some(fade) if now_ms >= fade.deadline_ms => {
                self.fade = None;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn controller() -> DecorationController {
        DecorationController::new(Theme::pattern("rose"), 600)
    }

    #[test]
    fn same_theme_does_not_transition() {
        let mut deco = controller();
        assert!(deco.change_theme(Theme::pattern("rose"), 0).is_none());
        assert_eq!(deco.phase(), DecorationPhase::Stable);
        assert!(deco.previous().is_none());
    }

    #[test]
    fn change_enters_transition_until_completed() {
        let mut deco = controller();
        let transition = deco.change_theme(Theme::pattern("sky"), 100).unwrap();
        assert_eq!(transition.duration_ms, 600);
        assert_eq!(deco.phase(), DecorationPhase::Transitioning);
        assert_eq!(deco.previous(), Some(&Theme::pattern("rose")));
        assert_eq!(deco.current(), &Theme::pattern("sky"));

        assert!(deco.complete(transition.ticket));
        assert_eq!(deco.phase(), DecorationPhase::Stable);
        assert!(deco.previous().is_none());
        assert!(!deco.complete(transition.ticket));
    }

    #[test]
    fn rapid_change_discards_original_old_theme() {
        let mut deco = controller();
        let first = deco.change_theme(Theme::pattern("sky"), 0).unwrap();
        let second = deco.change_theme(Theme::pattern("amber"), 200).unwrap();

        assert_ne!(first.ticket, second.ticket);
        assert_eq!(deco.previous(), Some(&Theme::pattern("sky")));
        assert_eq!(deco.current(), &Theme::pattern("amber"));

        assert!(!deco.complete(first.ticket));
        assert_eq!(deco.phase(), DecorationPhase::Transitioning);
        assert!(deco.complete(second.ticket));
        assert_eq!(deco.phase(), DecorationPhase::Stable);
    }

    #[test]
    fn tick_finishes_after_deadline() {
        let mut deco = controller();
        deco.change_theme(Theme::pattern("sky"), 1_000);
        assert_eq!(deco.deadline_ms(), Some(1_600));
        assert!(!deco.tick(1_599));
        assert_eq!(deco.phase(), DecorationPhase::Transitioning);
        assert!(deco.tick(1_600));
        assert_eq!(deco.phase(), DecorationPhase::Stable);
        assert!(!deco.tick(5_000));
    }

    #[test]
    fn restart_moves_deadline() {
        let mut deco = controller();
        deco.change_theme(Theme::pattern("sky"), 0);
        deco.change_theme(Theme::pattern("amber"), 500);
        assert!(!deco.tick(600));
        assert!(deco.tick(1_100));
    }

    #[test]
    fn returning_to_active_theme_mid_fade_is_a_no_op() {
        let mut deco = controller();
        let transition = deco.change_theme(Theme::pattern("sky"), 0).unwrap();
        assert!(deco.change_theme(Theme::pattern("sky"), 10).is_none());
        assert!(deco.complete(transition.ticket));
    }

    #[test]
    fn photo_theme_requests_preload() {
        let mut deco = controller();
        let photo = Theme {
            color: ThemeColor::from("sky"),
            image: Some("img/jodhpur.jpg".into()),
        };
        let transition = deco.change_theme(photo, 0).unwrap();
        assert_eq!(transition.preload.as_deref(), Some("img/jodhpur.jpg"));
    }

    #[test]
    fn same_color_with_new_image_swaps_without_fade() {
        let mut deco = controller();
        let photo = Theme {
            color: ThemeColor::from("rose"),
            image: Some("img/jaipur.jpg".into()),
        };
        assert!(deco.change_theme(photo.clone(), 0).is_none());
        assert_eq!(deco.phase(), DecorationPhase::Stable);
        assert!(deco.previous().is_none());
        assert_eq!(deco.current(), &photo);
    }

    #[test]
    fn same_color_image_swap_mid_fade_keeps_the_fade() {
        let mut deco = controller();
        let transition = deco.change_theme(Theme::pattern("sky"), 0).unwrap();
        let photo = Theme {
            color: ThemeColor::from("sky"),
            image: Some("img/jodhpur.jpg".into()),
        };
        assert!(deco.change_theme(photo.clone(), 100).is_none());
        assert_eq!(deco.current(), &photo);
        assert_eq!(deco.previous(), Some(&Theme::pattern("rose")));
        assert!(deco.complete(transition.ticket));
    }

    #[test]
    fn fade_duration_is_clamped() {
        assert_eq!(DecorationController::new(Theme::pattern("sky"), 10).fade_ms(), 500);
        assert_eq!(DecorationController::new(Theme::pattern("sky"), 9_000).fade_ms(), 1000);
    }
}
