//! Building blocks of the dashboard page.

mod feature_card;
mod hero;
mod section;
mod stats_grid;

pub use feature_card::FeatureCard;
pub use hero::Hero;
pub use section::{SectionContainer, SectionTitle};
pub use stats_grid::StatsGrid;
