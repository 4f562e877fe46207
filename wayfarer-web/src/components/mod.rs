pub mod activity_icon;
pub mod backdrop;
pub mod day_card;
pub mod day_navigator;
pub mod map_view;
pub mod nav_button;
pub mod pattern;
pub mod timeline;

pub use activity_icon::ActivityIcon;
pub use backdrop::Backdrop;
pub use day_card::DayCard;
pub use day_navigator::DayNavigator;
pub use map_view::MapView;
pub use nav_button::{NavButton, NavDirection};
pub use pattern::{Pattern, PatternWeight};
pub use timeline::Timeline;
