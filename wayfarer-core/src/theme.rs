//! Theme color tags and the palette lookups derived from them
use std::fmt;

use serde::{Deserialize, Serialize};

/// Hex used for markers and routes when a tag has no entry of its own.
pub const FALLBACK_MAP_HEX: &str = "#374151";

/// A day's theme color tag, e.g. `"rose"` or `"sky"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct ThemeColor(String);

impl ThemeColor {
    #[must_use]
    pub fn new(tag: impl Into<String>) -> Self {
        Self(tag.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Light days render on a white page instead of the dark default.
    #[must_use]
    pub fn is_light(&self) -> bool {
        self.0 == "white"
    }

    /// Marker, route and tint color.
    #[must_use]
    pub fn map_hex(&self) -> &'static str {
        match self.0.as_str() {
            "white" => "#374151",
            "emerald" => "#34d399",
            "slate" => "#64748b",
            "rose" => "#fb7185",
            "red" => "#f87171",
            "amber" => "#fbbf24",
            "sky" => "#38bdf8",
            _ => FALLBACK_MAP_HEX,
        }
    }

    #[must_use]
    pub fn card_style(&self) -> CardStyle {
        CardStyle::for_hue(&self.0)
    }

    /// Background class of the active navigator dot.
    #[must_use]
    pub fn dot_class(&self) -> &'static str {
        match self.0.as_str() {
            "emerald" => "bg-emerald-500",
            "ivory" => "bg-amber-500",
            "rose" => "bg-rose-400",
            "orange" => "bg-orange-400",
            "yellow" => "bg-yellow-400",
            "sky" => "bg-sky-400",
            _ => "bg-gray-500",
        }
    }

    #[must_use]
    pub fn focus_ring_class(&self) -> &'static str {
        if self.0 == "ivory" {
            "focus:ring-amber-300"
        } else {
            "focus:ring-sky-300"
        }
    }

    /// Pattern tiled behind the whole page.
    #[must_use]
    pub fn backdrop_pattern(&self) -> PatternKind {
        match self.0.as_str() {
            "emerald" => PatternKind::Waves,
            "ivory" => PatternKind::Scales,
            "rose" => PatternKind::Corners,
            "orange" => PatternKind::Steps,
            "yellow" => PatternKind::Zigzag,
            "sky" => PatternKind::Swell,
            _ => PatternKind::Lines,
        }
    }

    /// Pattern drawn in a day card header.
    #[must_use]
    pub fn header_pattern(&self) -> PatternKind {
        match self.0.as_str() {
            "emerald" => PatternKind::Waves,
            "slate" => PatternKind::Scales,
            "rose" => PatternKind::Corners,
            "red" => PatternKind::Steps,
            "amber" => PatternKind::Zigzag,
            "sky" => PatternKind::Swell,
            _ => PatternKind::Lines,
        }
    }
}

impl From<&str> for ThemeColor {
    fn from(tag: &str) -> Self {
        Self::new(tag)
    }
}

impl fmt::Display for ThemeColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Tailwind classes for a themed day card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardStyle {
    pub border: &'static str,
    pub badge: &'static str,
    pub text: &'static str,
    pub icon: &'static str,
    pub header: &'static str,
}

impl CardStyle {
    pub const WHITE: Self = Self {
        border: "border-gray-200",
        badge: "bg-gray-800",
        text: "text-gray-700",
        icon: "text-gray-600",
        header: "bg-gray-50",
    };

    fn for_hue(hue: &str) -> Self {
        match hue {
            "emerald" => Self {
                border: "border-emerald-300",
                badge: "bg-emerald-500",
                text: "text-emerald-600",
                icon: "text-emerald-500",
                header: "bg-emerald-50",
            },
            "slate" => Self {
                border: "border-slate-300",
                badge: "bg-slate-500",
                text: "text-slate-600",
                icon: "text-slate-500",
                header: "bg-slate-50",
            },
            "rose" => Self {
                border: "border-rose-300",
                badge: "bg-rose-500",
                text: "text-rose-600",
                icon: "text-rose-500",
                header: "bg-rose-50",
            },
            "red" => Self {
                border: "border-red-300",
                badge: "bg-red-500",
                text: "text-red-600",
                icon: "text-red-500",
                header: "bg-red-50",
            },
            "amber" => Self {
                border: "border-amber-300",
                badge: "bg-amber-500",
                text: "text-amber-600",
                icon: "text-amber-500",
                header: "bg-amber-50",
            },
            "sky" => Self {
                border: "border-sky-300",
                badge: "bg-sky-500",
                text: "text-sky-600",
                icon: "text-sky-500",
                header: "bg-sky-50",
            },
            _ => Self::WHITE,
        }
    }
}

/// Decorative tile shapes used for backgrounds and card headers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PatternKind {
    Waves,
    Scales,
    Corners,
    Steps,
    Zigzag,
    Swell,
    Lines,
}

impl PatternKind {
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Waves => "waves",
            Self::Scales => "scales",
            Self::Corners => "corners",
            Self::Steps => "steps",
            Self::Zigzag => "zigzag",
            Self::Swell => "swell",
            Self::Lines => "lines",
        }
    }
}
