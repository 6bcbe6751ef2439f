use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use super::state::{Platform, WaitlistAction, WaitlistForm};
use crate::components::micro::{Interaction, MicroInteraction};

#[derive(Properties, PartialEq)]
pub struct SignupFormProps {
    pub form: WaitlistForm,
    pub on_change: Callback<WaitlistAction>,
    pub on_submit: Callback<()>,
}

/// Email + platform capture. Stateless: the page owns the form state so the
/// hero and mid-page copies stay in sync.
#[function_component]
pub fn SignupForm(props: &SignupFormProps) -> Html {
    let oninput_email = {
        let on_change = props.on_change.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_change.emit(WaitlistAction::SetEmail(input.value()));
        })
    };
    let onchange_platform = {
        let on_change = props.on_change.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            on_change.emit(WaitlistAction::SetPlatform(Platform::from_value(&select.value())));
        })
    };
    let onsubmit = {
        let on_submit = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_submit.emit(());
        })
    };

    let form = &props.form;
    let submitting = form.is_submitting();

    html! {
        <MicroInteraction kind={Interaction::Hover}>
            <div class="signup-card">
                <h3>{"Ready to experience UMe?"}</h3>
                <form {onsubmit}>
                    <MicroInteraction kind={Interaction::Focus}>
                        <input
                            type="email"
                            placeholder="Your email"
                            aria-label="Your email"
                            value={form.email.clone()}
                            oninput={oninput_email}
                            required=true
                        />
                    </MicroInteraction>
                    <MicroInteraction kind={Interaction::Focus}>
                        <select aria-label="Platform" onchange={onchange_platform} required=true>
                            <option value="" disabled=true selected={form.platform.is_none()}>{"Platform"}</option>
                            { for Platform::ALL.iter().map(|platform| html! {
                                <option value={platform.as_str()} selected={form.platform == Some(*platform)}>
                                    { platform.as_str() }
                                </option>
                            }) }
                        </select>
                    </MicroInteraction>
                    <MicroInteraction kind={Interaction::Tap}>
                        <button type="submit" disabled={submitting}>
                            { if submitting { "Joining..." } else { "Get Early Access" } }
                        </button>
                    </MicroInteraction>
                    if let Some(err) = form.error() {
                        <p class="signup-card__error" role="alert">{ err.to_string() }</p>
                    }
                </form>
            </div>
        </MicroInteraction>
    }
}
