//! Admin dashboard: hero, stats overview, quick actions and the recent
//! galleries table, all fed from `common::mock`.
//!
//! The table actions are placeholders that only log the gallery to the
//! browser console.

use common::mock;
use common::model::dashboard::QuickAction;
use common::model::gallery::GallerySummary;
use gloo_console::log;
use yew::prelude::*;

use crate::components::layout::{FeatureCard, Hero, SectionContainer, SectionTitle, StatsGrid};
use crate::components::recent_galleries::RecentGalleriesTable;

#[derive(Properties, PartialEq, Clone)]
pub struct DashboardPageProps {
    /// Browser locale forwarded to the table for number grouping.
    #[prop_or_default]
    pub locale: Option<AttrValue>,
}

pub struct DashboardPage;

impl Component for DashboardPage {
    type Message = ();
    type Properties = DashboardPageProps;

    fn create(_ctx: &Context<Self>) -> Self {
        DashboardPage
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let quick_actions = mock::quick_actions();

        html! {
            <div class="page-gradient">
                <Hero
                    title="Admin Dashboard"
                    description="Manage your galleries, clients, and portfolio"
                />

                <SectionContainer>
                    <SectionTitle title="Stats Overview" class={classes!("mb-6")} />
                    <StatsGrid stats={mock::dashboard_stats()} />

                    <SectionTitle title="Quick Actions" />
                    <div class="quick-actions">
                        { for quick_actions.iter().map(quick_action_card) }
                    </div>

                    <SectionTitle title="Recent Galleries" view_all_link={AttrValue::from("/admin/galleries")} />
                    <div class="card-base overflow-hidden">
                        <RecentGalleriesTable
                            galleries={mock::recent_galleries()}
                            locale={ctx.props().locale.clone()}
                            on_view={log_action("view")}
                            on_edit={log_action("edit")}
                            on_delete={log_action("delete")}
                        />
                    </div>
                </SectionContainer>
            </div>
        }
    }
}

fn quick_action_card(action: &QuickAction) -> Html {
    let card = html! {
        <FeatureCard
            icon={action.icon.clone()}
            title={action.title.clone()}
            description={action.description.clone()}
            icon_color={classes!(action.icon_color.clone())}
        />
    };

    match &action.href {
        Some(href) => html! { <a class="block" href={href.clone()}>{ card }</a> },
        None => card,
    }
}

/// Console-logging stand-in for a real gallery action.
fn log_action(action: &'static str) -> Callback<GallerySummary> {
    Callback::from(move |gallery: GallerySummary| {
        match serde_json::to_string(&gallery) {
            Ok(json) => log!(action, json),
            Err(_) => log!(action, gallery.name),
        }
    })
}
