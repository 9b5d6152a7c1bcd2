//! Properties for the `RecentGalleriesTable`.

use common::model::gallery::GallerySummary;
use yew::prelude::*;

use super::actions::GalleryAction;

/// Properties for the `RecentGalleriesTable`.
///
/// The table owns none of this data: it is re-read on every render and the
/// galleries are only ever handed back to the parent through the callbacks.
#[derive(Properties, PartialEq, Clone)]
pub struct RecentGalleriesTableProps {
    /// Galleries in display order. Empty renders the "No galleries found." row.
    #[prop_or_default]
    pub galleries: Vec<GallerySummary>,

    /// Extra classes merged into the wrapper element.
    #[prop_or_default]
    pub class: Classes,

    /// Locale used to group view counts (`"en-US"`, `"de"`, ...).
    ///
    /// - `None` groups with US English separators.
    /// - An unknown locale shows the raw digits.
    #[prop_or_default]
    pub locale: Option<AttrValue>,

    /// Invoked with the row's gallery when its view button is clicked.
    #[prop_or_default]
    pub on_view: Option<Callback<GallerySummary>>,

    /// Invoked with the row's gallery when its edit button is clicked.
    #[prop_or_default]
    pub on_edit: Option<Callback<GallerySummary>>,

    /// Invoked with the row's gallery when its delete button is clicked.
    #[prop_or_default]
    pub on_delete: Option<Callback<GallerySummary>>,
}

impl RecentGalleriesTableProps {
    /// The parent callback wired to `action`, if any.
    pub fn callback_for(&self, action: GalleryAction) -> Option<Callback<GallerySummary>> {
        match action {
            GalleryAction::View => self.on_view.clone(),
            GalleryAction::Edit => self.on_edit.clone(),
            GalleryAction::Delete => self.on_delete.clone(),
        }
    }
}
