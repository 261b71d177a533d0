use yew::prelude::*;

use crate::hooks::use_in_view;

#[derive(Properties, PartialEq)]
pub struct RevealSectionProps {
    #[prop_or_default]
    pub id: Option<AttrValue>,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// A page `<section>` that fades in the first time it scrolls into view.
#[function_component(RevealSection)]
pub fn reveal_section(props: &RevealSectionProps) -> Html {
    let node = use_node_ref();
    let revealed = use_in_view(node.clone());

    html! {
        <section
            ref={node}
            id={props.id.clone()}
            class={classes!("page-section", "reveal", props.class.clone(), revealed.then(|| "revealed"))}
        >
            { for props.children.iter() }
        </section>
    }
}
