use yew::prelude::*;

/// Which gesture a [`MicroInteraction`] responds to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Interaction {
    #[default]
    Hover,
    Tap,
    Focus,
}

impl Interaction {
    fn class(self) -> &'static str {
        match self {
            Interaction::Hover => "micro--hover",
            Interaction::Tap => "micro--tap",
            Interaction::Focus => "micro--focus",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct MicroInteractionProps {
    #[prop_or_default]
    pub kind: Interaction,
    #[prop_or_default]
    pub class: Classes,
    pub children: Children,
}

/// Small lift/press/glow feedback around its children. Pure CSS; see
/// `MICRO_CSS`.
#[function_component]
pub fn MicroInteraction(props: &MicroInteractionProps) -> Html {
    html! {
        <div class={classes!("micro", props.kind.class(), props.class.clone())}>
            { for props.children.iter() }
        </div>
    }
}

pub const MICRO_CSS: &str = r#"
    .micro {
        transition: transform 0.2s ease-out, box-shadow 0.2s ease;
    }
    .micro--hover:hover {
        transform: scale(1.02) translateY(-2px);
    }
    .micro--tap:active {
        transform: scale(0.98);
        transition-duration: 0.1s;
    }
    .micro--focus:focus-within {
        transform: scale(1.02);
        box-shadow: 0 0 0 3px rgba(59, 130, 246, 0.3);
        border-radius: 0.5rem;
    }
"#;
