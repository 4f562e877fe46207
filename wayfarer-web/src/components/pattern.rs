use yew::prelude::*;

use crate::itinerary::PatternKind;

/// Stroke weight of a pattern tile: bold for the page backdrop, fine for
/// card headers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PatternWeight {
    #[default]
    Bold,
    Fine,
}

impl PatternWeight {
    const fn stroke_width(self, kind: PatternKind) -> &'static str {
        match (self, kind) {
            (Self::Fine, PatternKind::Lines) => "0.5",
            (Self::Fine, _) => "1",
            (Self::Bold, PatternKind::Swell) => "2.5",
            (Self::Bold, PatternKind::Lines) => "1.5",
            (Self::Bold, _) => "2",
        }
    }
}

/// SVG path data of one 50x50 tile.
#[must_use]
pub const fn tile_path(kind: PatternKind, weight: PatternWeight) -> &'static str {
    match kind {
        PatternKind::Waves => "M0 20 Q 25 0, 50 20 T 100 20",
        PatternKind::Scales => {
            "M-10 10.5 C-10 4.7 4.7-10 10.5-10 S31 4.7 31 10.5 16.3 31 10.5 31 -10 16.3 -10 10.5z \
             M30 20.5 C30 14.7 44.7 0 50.5 0 S71 14.7 71 20.5 56.3 41 50.5 41 30 26.3 30 20.5z"
        }
        PatternKind::Corners => match weight {
            PatternWeight::Bold => "M.5 50 V.5 H50",
            PatternWeight::Fine => "M.5 200V.5H200",
        },
        PatternKind::Steps => "M0 0 H 25 V 25 H 50 V 50 H 0 Z",
        PatternKind::Zigzag => "M10 0 L20 20 L0 8 H30 L10 28",
        PatternKind::Swell => "M-10 25 Q 15 0, 40 25 T 90 25",
        PatternKind::Lines => "M0 10h50 M0 20h50 M0 30h50 M0 40h50",
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub kind: PatternKind,
    #[prop_or_default]
    pub weight: PatternWeight,
    #[prop_or_default]
    pub class: Classes,
    /// Disambiguates the `<pattern>` id when several tiles share a page.
    #[prop_or_default]
    pub scope: AttrValue,
}

#[function_component(Pattern)]
pub fn pattern(p: &Props) -> Html {
    let id = if p.scope.is_empty() {
        format!("pattern-{}", p.kind.id())
    } else {
        format!("pattern-{}-{}", p.scope, p.kind.id())
    };
    let fill_url = format!("url(#{id})");
    let d = tile_path(p.kind, p.weight);
    let shape = if p.kind == PatternKind::Steps {
        html! { <path {d} fill="currentColor" fill-opacity="0.5" /> }
    } else {
        let stroke_width = p.weight.stroke_width(p.kind);
        html! { <path {d} fill="none" stroke="currentColor" stroke-width={stroke_width} /> }
    };
    html! {
        <svg aria-hidden="true" class={p.class.clone()}>
            <defs>
                <pattern {id} x="0" y="0" width="50" height="50"
                    patternUnits="userSpaceOnUse" patternTransform="translate(-1 -1)">
                    { shape }
                </pattern>
            </defs>
            <rect width="100%" height="100%" fill={fill_url} />
        </svg>
    }
}
