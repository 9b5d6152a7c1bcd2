use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct FeatureCardProps {
    /// Material icon ligature, e.g. `"settings"`.
    pub icon: AttrValue,
    pub title: AttrValue,
    pub description: AttrValue,
    #[prop_or_default]
    pub icon_color: Classes,
}

#[function_component(FeatureCard)]
pub fn feature_card(props: &FeatureCardProps) -> Html {
    html! {
        <div class="card-base feature-card">
            <i class={classes!("material-icons", "feature-icon", props.icon_color.clone())} aria-hidden="true">
                { props.icon.clone() }
            </i>
            <h3 class="feature-title">{ props.title.clone() }</h3>
            <p class="feature-description">{ props.description.clone() }</p>
        </div>
    }
}
