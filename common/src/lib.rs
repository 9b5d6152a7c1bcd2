//! Types shared by the dashboard frontend: the gallery and dashboard models,
//! display resolution for table rows, and the static mock data.

pub mod display;
pub mod mock;
pub mod model;
