//! Render-ready view of a [`GallerySummary`].
//!
//! All display-time defaulting lives here so that the table component only
//! maps strings into markup:
//! - missing `photos` / `views` show as `0`
//! - `views` is grouped by thousands using the requested locale
//! - `status` is classified into a [`StatusTone`] on every call, never cached
//! - missing text fields render as empty strings

use num_format::{Locale, ToFormattedString};

use crate::model::gallery::GallerySummary;

/// Visual state of the status badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusTone {
    /// "Active" or "Published".
    Positive,
    /// Everything else, including a missing status.
    Neutral,
}

impl StatusTone {
    /// CSS class for the status badge.
    pub fn css_class(self) -> &'static str {
        match self {
            StatusTone::Positive => "status-active",
            StatusTone::Neutral => "status-draft",
        }
    }
}

/// Statuses rendered in the positive state. Exact, case-sensitive match.
const POSITIVE_STATUSES: [&str; 2] = ["Active", "Published"];

/// Classifies a raw status value.
pub fn classify_status(status: Option<&str>) -> StatusTone {
    match status {
        Some(s) if POSITIVE_STATUSES.contains(&s) => StatusTone::Positive,
        _ => StatusTone::Neutral,
    }
}

/// Formats a view count with the thousands separator of `locale`.
///
/// `None` uses US English grouping. A locale name that cannot be resolved
/// (first as given, then by its primary language subtag) yields the raw digits.
pub fn format_views(views: u64, locale: Option<&str>) -> String {
    match locale {
        None => views.to_formatted_string(&Locale::en),
        Some(name) => match resolve_locale(name) {
            Some(locale) => views.to_formatted_string(&locale),
            None => views.to_string(),
        },
    }
}

/// Looks up a `num_format` locale from a BCP 47 style tag such as `en-US`,
/// `de_DE` or `fr`.
fn resolve_locale(name: &str) -> Option<Locale> {
    let normalized = name.trim().replace('_', "-");
    if normalized.is_empty() {
        return None;
    }
    Locale::from_name(normalized.as_str()).ok().or_else(|| {
        let primary = normalized.split('-').next()?;
        Locale::from_name(primary).ok()
    })
}

/// Strings and tone for one table row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayRow {
    pub name: String,
    pub gallery_type: String,
    pub photos: String,
    pub views: String,
    pub status: String,
    pub status_tone: StatusTone,
    pub last_updated: String,
}

/// Resolves every display default for `gallery`.
///
/// Pure: the gallery is only read, and nothing is retained between calls.
pub fn resolve_display_values(gallery: &GallerySummary, locale: Option<&str>) -> DisplayRow {
    DisplayRow {
        name: gallery.name.clone(),
        gallery_type: gallery.gallery_type.clone().unwrap_or_default(),
        photos: gallery.photos.unwrap_or(0).to_string(),
        views: format_views(gallery.views.unwrap_or(0), locale),
        status: gallery.status.clone().unwrap_or_default(),
        status_tone: classify_status(gallery.status.as_deref()),
        last_updated: gallery.last_updated.clone().unwrap_or_default(),
    }
}
