use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SectionContainerProps {
    #[prop_or_default]
    pub children: Html,
}

/// Centered, padded column holding the page sections.
#[function_component(SectionContainer)]
pub fn section_container(props: &SectionContainerProps) -> Html {
    html! {
        <main class="section-container">
            { props.children.clone() }
        </main>
    }
}

#[derive(Properties, PartialEq)]
pub struct SectionTitleProps {
    pub title: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    /// When set, a "View all" link to this target is shown next to the title.
    #[prop_or_default]
    pub view_all_link: Option<AttrValue>,
}

#[function_component(SectionTitle)]
pub fn section_title(props: &SectionTitleProps) -> Html {
    html! {
        <div class={classes!("section-title", props.class.clone())}>
            <h2>{ props.title.clone() }</h2>
            {
                match &props.view_all_link {
                    Some(href) => html! {
                        <a class="section-title-link" href={href.clone()}>{ "View all" }</a>
                    },
                    None => html! {},
                }
            }
        </div>
    }
}
