//! Custom widget components

mod header;
mod legend;
mod pie_chart;
mod profile_form;
mod stats_card;

pub use header::{MainHeader, APP_SUBTITLE, APP_TITLE};
pub use legend::Legend;
pub use pie_chart::{PieChart, PieLayout, OUTER_RADIUS};
pub use profile_form::ProfileForm;
pub use stats_card::{StatsCard, LOADING_TEXT, SPINNER};
