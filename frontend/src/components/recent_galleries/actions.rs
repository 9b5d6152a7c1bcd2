//! Row actions of the recent galleries table and the dispatch of their clicks
//! to the parent's optional callbacks.

use common::model::gallery::GallerySummary;
use yew::Callback;

/// One of the three per-row action buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GalleryAction {
    View,
    Edit,
    Delete,
}

impl GalleryAction {
    /// Buttons in the order they appear in the Actions column.
    pub const ALL: [GalleryAction; 3] =
        [GalleryAction::View, GalleryAction::Edit, GalleryAction::Delete];

    /// Human readable name, also used as the button tooltip.
    pub fn label(self) -> &'static str {
        match self {
            GalleryAction::View => "View",
            GalleryAction::Edit => "Edit",
            GalleryAction::Delete => "Delete",
        }
    }

    /// Material icon ligature.
    pub fn icon(self) -> &'static str {
        match self {
            GalleryAction::View => "visibility",
            GalleryAction::Edit => "edit",
            GalleryAction::Delete => "delete",
        }
    }

    pub fn button_class(self) -> &'static str {
        match self {
            GalleryAction::View => "btn-icon",
            GalleryAction::Edit => "btn-icon btn-icon-success",
            GalleryAction::Delete => "btn-icon btn-icon-danger",
        }
    }

    /// Accessible name of the button for the gallery called `name`.
    pub fn aria_label(self, name: &str) -> String {
        format!("{} {}", self.label(), name)
    }
}

/// Forwards `gallery` to `callback`. A missing callback is a no-op.
pub fn dispatch(callback: Option<&Callback<GallerySummary>>, gallery: &GallerySummary) {
    if let Some(callback) = callback {
        callback.emit(gallery.clone());
    }
}

/// Builds the click handler of a single row button.
///
/// The handler only captures its own row's gallery; the event payload is ignored.
pub fn bind_action<E: 'static>(
    callback: Option<Callback<GallerySummary>>,
    gallery: GallerySummary,
) -> Callback<E> {
    Callback::from(move |_: E| dispatch(callback.as_ref(), &gallery))
}

#[cfg(test)]
mod tests {
    use super::super::props::RecentGalleriesTableProps;
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;
    use yew::Classes;

    type Log = Rc<RefCell<Vec<(&'static str, GallerySummary)>>>;

    fn recorder(log: &Log, tag: &'static str) -> Callback<GallerySummary> {
        let log = log.clone();
        Callback::from(move |gallery: GallerySummary| log.borrow_mut().push((tag, gallery)))
    }

    fn summer_wedding() -> GallerySummary {
        GallerySummary::new(1, "Summer Wedding")
            .with_status("Published")
            .with_photos(42)
            .with_views(1500)
    }

    #[test]
    fn each_button_calls_only_its_callback_once() {
        let log: Log = Rc::default();
        let gallery = summer_wedding();
        let props = RecentGalleriesTableProps {
            galleries: vec![gallery.clone()],
            class: Classes::new(),
            locale: None,
            on_view: Some(recorder(&log, "view")),
            on_edit: Some(recorder(&log, "edit")),
            on_delete: Some(recorder(&log, "delete")),
        };

        for (action, tag) in [
            (GalleryAction::View, "view"),
            (GalleryAction::Edit, "edit"),
            (GalleryAction::Delete, "delete"),
        ] {
            log.borrow_mut().clear();
            let on_click: Callback<()> = bind_action(props.callback_for(action), gallery.clone());
            on_click.emit(());

            assert_eq!(*log.borrow(), vec![(tag, gallery.clone())], "{:?}", action);
        }
    }

    #[test]
    fn rows_dispatch_their_own_gallery() {
        let log: Log = Rc::default();
        let first = summer_wedding();
        let second = GallerySummary::new_text("g-2", "Studio Portraits").with_status("Draft");
        let on_view = recorder(&log, "view");

        let first_click: Callback<()> = bind_action(Some(on_view.clone()), first.clone());
        let second_click: Callback<()> = bind_action(Some(on_view), second.clone());
        second_click.emit(());
        first_click.emit(());

        assert_eq!(*log.borrow(), vec![("view", second), ("view", first)]);
    }

    #[test]
    fn missing_callback_is_a_no_op() {
        let log: Log = Rc::default();
        let gallery = summer_wedding();

        let unbound: Callback<()> = bind_action(None, gallery.clone());
        unbound.emit(());
        dispatch(None, &gallery);

        let bound: Callback<()> = bind_action(Some(recorder(&log, "edit")), gallery.clone());
        bound.emit(());

        assert_eq!(*log.borrow(), vec![("edit", gallery)]);
    }

    #[test]
    fn labels_name_the_action_and_gallery() {
        assert_eq!(GalleryAction::View.aria_label("Summer Wedding"), "View Summer Wedding");
        assert_eq!(GalleryAction::Edit.aria_label("Summer Wedding"), "Edit Summer Wedding");
        assert_eq!(
            GalleryAction::Delete.aria_label("Summer Wedding"),
            "Delete Summer Wedding"
        );
    }
}
