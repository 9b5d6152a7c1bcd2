//! Recent galleries table: the dashboard's list of latest galleries with
//! view/edit/delete buttons per row.
//!
//! Responsibilities
//! - Render the fixed column set and one row per `GallerySummary`, or a single
//!   "No galleries found." row when the list is empty.
//! - Forward button clicks to the parent's optional callbacks with the row's
//!   gallery. The table never mutates or stores galleries itself.
//!
//! The component is stateless; everything it shows is derived from its props on
//! each render.

use yew::prelude::*;

mod actions;
mod props;
mod view;

pub use props::RecentGalleriesTableProps;

pub struct RecentGalleriesTable;

impl Component for RecentGalleriesTable {
    type Message = ();
    type Properties = RecentGalleriesTableProps;

    fn create(_ctx: &Context<Self>) -> Self {
        RecentGalleriesTable
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}
