use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a gallery as it arrives from the data layer.
///
/// Galleries coming from the mock data use numbers, but ids minted elsewhere
/// (slugs, UUIDs) are plain strings, so both shapes are accepted. The
/// `Display` output is what the table uses as the row key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GalleryId {
    Number(u64),
    Text(String),
}

impl fmt::Display for GalleryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GalleryId::Number(n) => write!(f, "{}", n),
            GalleryId::Text(s) => f.write_str(s),
        }
    }
}

impl From<u64> for GalleryId {
    fn from(value: u64) -> Self {
        GalleryId::Number(value)
    }
}

impl From<&str> for GalleryId {
    fn from(value: &str) -> Self {
        GalleryId::Text(value.to_string())
    }
}

/// Minimal description of a gallery shown in the recent galleries table.
///
/// Everything except `id` and `name` is optional. Missing values are not
/// filled in here; display defaults are resolved by
/// [`crate::display::resolve_display_values`] at render time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GallerySummary {
    /// Stable, unique id. Used as the row identity key.
    pub id: GalleryId,
    pub name: String,
    /// Free-form category ("Wedding", "Portrait", ...). Never validated.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub gallery_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photos: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub views: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Pre-formatted date string, rendered verbatim.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<String>,
}

impl GallerySummary {
    /// Creates a summary with a numeric id and only the required fields set.
    pub fn new(id: u64, name: impl Into<String>) -> Self {
        Self::with_id(GalleryId::Number(id), name)
    }

    /// Same as [`GallerySummary::new`] for galleries keyed by a string id.
    pub fn new_text(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self::with_id(GalleryId::Text(id.into()), name)
    }

    fn with_id(id: GalleryId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            gallery_type: None,
            photos: None,
            views: None,
            status: None,
            last_updated: None,
        }
    }

    pub fn with_type(mut self, gallery_type: impl Into<String>) -> Self {
        self.gallery_type = Some(gallery_type.into());
        self
    }

    pub fn with_photos(mut self, photos: u32) -> Self {
        self.photos = Some(photos);
        self
    }

    pub fn with_views(mut self, views: u64) -> Self {
        self.views = Some(views);
        self
    }

    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    pub fn with_last_updated(mut self, last_updated: impl Into<String>) -> Self {
        self.last_updated = Some(last_updated.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_sparse_gallery() {
        let gallery: GallerySummary =
            serde_json::from_str(r#"{"id": 1, "name": "Summer Wedding"}"#).unwrap();

        assert_eq!(gallery, GallerySummary::new(1, "Summer Wedding"));
    }

    #[test]
    fn deserializes_full_gallery_with_string_id() {
        let json = r#"{
            "id": "g-7",
            "name": "Corporate Headshots",
            "type": "Portrait",
            "photos": 18,
            "views": 640,
            "status": "Draft",
            "lastUpdated": "2 days ago"
        }"#;
        let gallery: GallerySummary = serde_json::from_str(json).unwrap();

        assert_eq!(gallery.id, GalleryId::Text("g-7".to_string()));
        assert_eq!(gallery.gallery_type.as_deref(), Some("Portrait"));
        assert_eq!(gallery.photos, Some(18));
        assert_eq!(gallery.views, Some(640));
        assert_eq!(gallery.status.as_deref(), Some("Draft"));
        assert_eq!(gallery.last_updated.as_deref(), Some("2 days ago"));
    }

    #[test]
    fn serialization_omits_absent_fields() {
        let gallery = GallerySummary::new(3, "Studio").with_views(10);
        let value = serde_json::to_value(&gallery).unwrap();

        assert_eq!(
            value,
            serde_json::json!({"id": 3, "name": "Studio", "views": 10})
        );
    }

    #[test]
    fn id_display_is_the_row_key() {
        assert_eq!(GalleryId::Number(42).to_string(), "42");
        assert_eq!(GalleryId::from("abc-1").to_string(), "abc-1");
    }
}
