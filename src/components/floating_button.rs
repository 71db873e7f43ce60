use yew::prelude::*;

pub fn tooltip_style(visible: bool) -> &'static str {
    if visible {
        "opacity: 1; visibility: visible;"
    } else {
        "opacity: 0; visibility: hidden;"
    }
}

#[derive(Properties, PartialEq)]
pub struct FloatingButtonProps {
    pub href: AttrValue,
    pub icon: AttrValue,
    pub tooltip: AttrValue,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(FloatingButton)]
pub fn floating_button(props: &FloatingButtonProps) -> Html {
    let hovered = use_state(|| false);

    let onmouseenter = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(true))
    };
    let onmouseleave = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(false))
    };

    html! {
        <a
            href={props.href.clone()}
            class={classes!("floating-button", props.class.clone())}
            target="_blank"
            rel="noopener"
            {onmouseenter}
            {onmouseleave}
        >
            <span class="floating-icon">{props.icon.clone()}</span>
            <span class="tooltip" style={tooltip_style(*hovered)}>{props.tooltip.clone()}</span>
        </a>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tooltip_toggles_opacity_and_visibility() {
        assert_eq!(tooltip_style(true), "opacity: 1; visibility: visible;");
        assert_eq!(tooltip_style(false), "opacity: 0; visibility: hidden;");
    }
}
