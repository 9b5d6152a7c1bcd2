use common::model::dashboard::{DashboardStats, StatCard};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct StatsGridProps {
    pub stats: DashboardStats,
}

/// One card per stat, laid out in a responsive grid.
#[function_component(StatsGrid)]
pub fn stats_grid(props: &StatsGridProps) -> Html {
    html! {
        <div class="stats-grid">
            { for props.stats.cards.iter().map(stat_card) }
        </div>
    }
}

fn stat_card(card: &StatCard) -> Html {
    html! {
        <div class="card-base stat-card">
            <p class="stat-label">{ card.label.clone() }</p>
            <p class="stat-value">{ card.value.clone() }</p>
            {
                match &card.change {
                    Some(change) => html! { <p class="stat-change">{ change.clone() }</p> },
                    None => html! {},
                }
            }
        </div>
    }
}
