//! Markup of the recent galleries table.
//!
//! Layout: a scrollable wrapper holding a fixed seven column table. Every row
//! is resolved through `common::display::resolve_display_values` and fades in
//! with a delay proportional to its index; the animation is CSS only
//! (`row-fade-in` keyframes in `styles/app.css`) and the buttons are
//! live from the first frame.

use common::display::{resolve_display_values, DisplayRow};
use common::model::gallery::GallerySummary;
use yew::prelude::*;

use super::actions::{bind_action, GalleryAction};
use super::props::RecentGalleriesTableProps;
use super::RecentGalleriesTable;

/// Header labels, in column order.
pub const COLUMNS: [&str; 7] = [
    "Gallery Name",
    "Type",
    "Photos",
    "Views",
    "Status",
    "Last Updated",
    "Actions",
];

pub const EMPTY_MESSAGE: &str = "No galleries found.";

/// Class list of a data row. Tests count rows by it.
const ROW_CLASS: &str = "table-row gallery-row border-t border-slate-100 dark:border-slate-700";

/// Extra delay added per row index.
const ENTRANCE_STAGGER_MS: u32 = 30;
const ENTRANCE_DURATION_MS: u32 = 220;

pub fn view(_component: &RecentGalleriesTable, ctx: &Context<RecentGalleriesTable>) -> Html {
    let props = ctx.props();

    html! {
        <div class={classes!("recent-galleries", "overflow-hidden", "rounded-xl", props.class.clone())}>
            <div class="overflow-x-auto">
                <table class="w-full min-w-[640px] table-fixed" role="table" aria-label="Recent galleries">
                    { build_header() }
                    <tbody>
                        {
                            if props.galleries.is_empty() {
                                build_empty_row()
                            } else {
                                props
                                    .galleries
                                    .iter()
                                    .enumerate()
                                    .map(|(index, gallery)| build_row(props, index, gallery))
                                    .collect::<Html>()
                            }
                        }
                    </tbody>
                </table>
            </div>
        </div>
    }
}

fn build_header() -> Html {
    html! {
        <thead class="bg-slate-50 dark:bg-slate-700">
            <tr>
                { for COLUMNS.iter().map(|title| html! {
                    <th class="text-left py-3 px-6 font-medium text-slate-700 dark:text-slate-300">{ *title }</th>
                }) }
            </tr>
        </thead>
    }
}

fn build_empty_row() -> Html {
    html! {
        <tr>
            <td colspan={COLUMNS.len().to_string()} class="py-6 px-6 text-center text-slate-600 dark:text-slate-400">
                { EMPTY_MESSAGE }
            </td>
        </tr>
    }
}

fn build_row(props: &RecentGalleriesTableProps, index: usize, gallery: &GallerySummary) -> Html {
    let DisplayRow {
        name,
        gallery_type,
        photos,
        views,
        status,
        status_tone,
        last_updated,
    } = resolve_display_values(gallery, props.locale.as_deref());

    html! {
        <tr
            key={gallery.id.to_string()}
            class={ROW_CLASS}
            style={entrance_style(index)}
        >
            <td class="py-4 px-6">
                <div class="font-medium text-slate-900 dark:text-white">{ name }</div>
            </td>
            <td class="py-4 px-6">
                <span class="text-slate-600 dark:text-slate-400">{ gallery_type }</span>
            </td>
            <td class="py-4 px-6 text-slate-600 dark:text-slate-400">{ photos }</td>
            <td class="py-4 px-6 text-slate-600 dark:text-slate-400">{ views }</td>
            <td class="py-4 px-6">
                <span class={classes!("status-badge", status_tone.css_class())}>{ status }</span>
            </td>
            <td class="py-4 px-6 text-slate-600 dark:text-slate-400">{ last_updated }</td>
            <td class="py-4 px-6">
                <div class="flex items-center gap-2">
                    {
                        for row_actions::<MouseEvent>(props, gallery)
                            .into_iter()
                            .map(|(action, onclick)| action_button(action, &gallery.name, onclick))
                    }
                </div>
            </td>
        </tr>
    }
}

/// Click handlers of one row, in button order, each bound to the parent
/// callback of its own action.
pub fn row_actions<E: 'static>(
    props: &RecentGalleriesTableProps,
    gallery: &GallerySummary,
) -> Vec<(GalleryAction, Callback<E>)> {
    GalleryAction::ALL
        .iter()
        .map(|action| (*action, bind_action(props.callback_for(*action), gallery.clone())))
        .collect()
}

fn action_button(action: GalleryAction, name: &str, onclick: Callback<MouseEvent>) -> Html {
    html! {
        <button
            type="button"
            class={action.button_class()}
            aria-label={action.aria_label(name)}
            title={action.label()}
            {onclick}
        >
            <i class="material-icons" aria-hidden="true">{ action.icon() }</i>
        </button>
    }
}

/// Delay before row `index` starts its entrance transition.
pub fn entrance_delay_ms(index: usize) -> u32 {
    u32::try_from(index)
        .unwrap_or(u32::MAX)
        .saturating_mul(ENTRANCE_STAGGER_MS)
}

/// Inline style running the entrance keyframes for row `index`.
pub fn entrance_style(index: usize) -> String {
    format!(
        "animation: row-fade-in {}ms ease-out {}ms both;",
        ENTRANCE_DURATION_MS,
        entrance_delay_ms(index)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use yew::ServerRenderer;

    async fn render_with(
        galleries: Vec<GallerySummary>,
        locale: Option<&'static str>,
        class: &'static str,
    ) -> String {
        ServerRenderer::<RecentGalleriesTable>::with_props(move || RecentGalleriesTableProps {
            galleries,
            class: Classes::from(class),
            locale: locale.map(AttrValue::from),
            on_view: None,
            on_edit: None,
            on_delete: None,
        })
        .hydratable(false)
        .render()
        .await
    }

    async fn render(galleries: Vec<GallerySummary>) -> String {
        render_with(galleries, None, "").await
    }

    fn summer_wedding() -> GallerySummary {
        GallerySummary::new(1, "Summer Wedding")
            .with_status("Published")
            .with_photos(42)
            .with_views(1500)
    }

    #[tokio::test]
    async fn renders_one_row_per_gallery_in_order() {
        let galleries = vec![
            summer_wedding(),
            GallerySummary::new(2, "Corporate Headshots").with_status("Draft"),
            GallerySummary::new_text("g-3", "Coastal Landscapes"),
        ];
        let html = render(galleries).await;

        // header row + three data rows
        assert_eq!(html.matches("<tr").count(), 4);
        assert_eq!(html.matches(&format!(r#"class="{}""#, ROW_CLASS)).count(), 3);
        assert!(!html.contains(EMPTY_MESSAGE));

        let first = html.find("Summer Wedding").unwrap();
        let second = html.find("Corporate Headshots").unwrap();
        let third = html.find("Coastal Landscapes").unwrap();
        assert!(first < second && second < third);
    }

    #[tokio::test]
    async fn empty_list_renders_header_and_placeholder() {
        let html = render(Vec::new()).await;

        assert_eq!(html.matches("<tr").count(), 2);
        assert_eq!(html.matches("</th>").count(), COLUMNS.len());
        assert!(html.contains(r#"colspan="7""#));
        assert!(html.contains(EMPTY_MESSAGE));
        assert!(!html.contains(ROW_CLASS));
    }

    #[tokio::test]
    async fn header_columns_are_fixed_and_ordered() {
        let html = render(vec![summer_wedding()]).await;

        let positions: Vec<usize> = COLUMNS
            .iter()
            .map(|title| html.find(&format!(">{}</th>", title)).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[tokio::test]
    async fn summer_wedding_scenario() {
        let html = render(vec![summer_wedding()]).await;

        assert!(html.contains("Summer Wedding"));
        assert!(html.contains(">42</td>"));
        assert!(html.contains(">1,500</td>"));
        assert!(html.contains(r#"class="status-badge status-active""#));
    }

    #[tokio::test]
    async fn missing_counts_render_zero_and_status_is_draft() {
        let html = render(vec![GallerySummary::new(9, "Bare")]).await;

        assert_eq!(html.matches(">0</td>").count(), 2);
        assert!(html.contains(r#"class="status-badge status-draft""#));
    }

    #[tokio::test]
    async fn large_view_counts_are_grouped() {
        let html = render(vec![GallerySummary::new(1, "Popular").with_views(1_234_567)]).await;

        assert!(html.contains("1,234,567"));
    }

    #[tokio::test]
    async fn view_grouping_follows_locale_prop() {
        let galleries = vec![GallerySummary::new(1, "Popular").with_views(1_234_567)];
        let html = render_with(galleries, Some("de"), "").await;

        assert!(html.contains("1.234.567"));
    }

    #[tokio::test]
    async fn table_and_buttons_are_labelled() {
        let html = render(vec![summer_wedding()]).await;

        assert!(html.contains(r#"role="table""#));
        assert!(html.contains(r#"aria-label="Recent galleries""#));
        for action in GalleryAction::ALL {
            assert!(html.contains(&format!(
                r#"aria-label="{}""#,
                action.aria_label("Summer Wedding")
            )));
            assert!(html.contains(&format!(r#"title="{}""#, action.label())));
        }
    }

    #[tokio::test]
    async fn buttons_render_without_callbacks() {
        let html = render(vec![summer_wedding()]).await;

        assert_eq!(html.matches("<button").count(), 3);
    }

    #[tokio::test]
    async fn class_hook_is_merged_into_wrapper() {
        let html = render_with(Vec::new(), None, "card-base").await;

        assert!(html.contains("card-base"));
        assert!(html.contains("recent-galleries"));
    }

    #[test]
    fn each_row_button_is_wired_to_its_own_callback() {
        use std::cell::RefCell;
        use std::rc::Rc;

        let log: Rc<RefCell<Vec<(&'static str, GallerySummary)>>> = Rc::default();
        let recorder = |tag: &'static str| {
            let log = log.clone();
            Callback::from(move |gallery: GallerySummary| log.borrow_mut().push((tag, gallery)))
        };
        let gallery = summer_wedding();
        let props = RecentGalleriesTableProps {
            galleries: vec![gallery.clone()],
            class: Classes::new(),
            locale: None,
            on_view: Some(recorder("view")),
            on_edit: Some(recorder("edit")),
            on_delete: Some(recorder("delete")),
        };

        let handlers = row_actions::<()>(&props, &gallery);
        let order: Vec<GalleryAction> = handlers.iter().map(|(action, _)| *action).collect();
        assert_eq!(order, GalleryAction::ALL.to_vec());

        for ((_, onclick), tag) in handlers.iter().zip(["view", "edit", "delete"]) {
            log.borrow_mut().clear();
            onclick.emit(());
            assert_eq!(*log.borrow(), vec![(tag, gallery.clone())]);
        }
    }

    #[test]
    fn row_buttons_without_callbacks_do_nothing() {
        let gallery = summer_wedding();
        let props = RecentGalleriesTableProps {
            galleries: vec![gallery.clone()],
            class: Classes::new(),
            locale: None,
            on_view: None,
            on_edit: None,
            on_delete: None,
        };

        for (_, onclick) in row_actions::<()>(&props, &gallery) {
            onclick.emit(());
        }
    }

    #[test]
    fn rows_cascade_in() {
        assert_eq!(entrance_delay_ms(0), 0);
        assert_eq!(entrance_delay_ms(1), 30);
        assert_eq!(entrance_delay_ms(10), 300);
        assert_eq!(
            entrance_style(2),
            "animation: row-fade-in 220ms ease-out 60ms both;"
        );
    }
}
