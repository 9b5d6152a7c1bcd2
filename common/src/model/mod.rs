pub mod dashboard;
pub mod gallery;
