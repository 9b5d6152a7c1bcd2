use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    pub title: AttrValue,
    pub description: AttrValue,
}

/// Page header with a large title and a one line description.
#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    html! {
        <header class="hero">
            <h1 class="hero-title">{ props.title.clone() }</h1>
            <p class="hero-description">{ props.description.clone() }</p>
        </header>
    }
}
