pub mod layout;
pub mod recent_galleries;
