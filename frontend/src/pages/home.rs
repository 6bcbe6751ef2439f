use wasm_bindgen_futures::spawn_local;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions};
use yew::prelude::*;

use crate::components::micro::MICRO_CSS;
use crate::components::particles::FloatingParticles;
use crate::config;
use crate::hooks::use_in_view;
use crate::journey::Journey;
use crate::waitlist::{client, SignupForm, WaitlistAction, WaitlistForm};

fn scroll_to_demo() {
    let Some(section) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id("demo-section"))
    else {
        return;
    };
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    section.scroll_into_view_with_scroll_into_view_options(&options);
}

#[derive(Properties, PartialEq)]
struct SectionProps {
    form: WaitlistForm,
    on_change: Callback<WaitlistAction>,
    on_submit: Callback<()>,
}

#[function_component]
fn HeroSection(props: &SectionProps) -> Html {
    if props.form.submitted() {
        return html! {
            <section class="hero">
                <div class="hero__thanks">
                    <h1>{"Welcome to "}<span class="accent">{"UMe!"}</span></h1>
                    <p>{"Thanks for joining the waitlist! We’ll be in touch soon."}</p>
                </div>
            </section>
        };
    }

    html! {
        <section class="hero">
            <div class="hero__content">
                <h1 class="hero__title">
                    {"Stop swiping. "}
                    <span class="hero__gap"></span>
                    <span class="gradient-text">{"Start connecting"}</span>
                </h1>
                <p class="hero__subtitle">
                    {"Other apps show you endless profiles. UMe's AI "}
                    <span class="accent">{"finds matches for you."}</span>
                </p>
                <div class="hero__cta">
                    <SignupForm
                        form={props.form.clone()}
                        on_change={props.on_change.clone()}
                        on_submit={props.on_submit.clone()}
                    />
                    <button class="link-button" onclick={Callback::from(|_: MouseEvent| scroll_to_demo())}>
                        {"or see how it works first ↓"}
                    </button>
                </div>
            </div>
        </section>
    }
}

#[function_component]
fn DemoSection(props: &SectionProps) -> Html {
    let node = use_node_ref();
    let visible = use_in_view(node.clone(), config::DEMO_VISIBILITY_THRESHOLD);

    html! {
        <section id="demo-section" ref={node} class={classes!("demo", visible.then_some("demo--visible"))}>
            <div class="demo__intro">
                <h2>{"This is the difference"}</h2>
                <p>{"UMe guides you through your entire dating journey, from first conversation to a lasting partnership"}</p>
            </div>
            <div class="demo__journey">
                <Journey />
            </div>
            if !props.form.submitted() {
                <div class="demo__cta">
                    <SignupForm
                        form={props.form.clone()}
                        on_change={props.on_change.clone()}
                        on_submit={props.on_submit.clone()}
                    />
                </div>
            }
        </section>
    }
}

/// The whole site: hero with the waitlist form, then the product demo.
#[function_component]
pub fn Home() -> Html {
    let form = use_reducer(WaitlistForm::default);
    // Guards against a second click landing before the disabled button renders.
    let in_flight = use_mut_ref(|| false);

    let on_change = {
        let dispatcher = form.dispatcher();
        Callback::from(move |action: WaitlistAction| dispatcher.dispatch(action))
    };

    let on_submit = {
        let form = form.clone();
        let in_flight = in_flight.clone();
        Callback::from(move |_: ()| {
            if *in_flight.borrow() || !form.can_submit() {
                return;
            }
            let signup = match form.signup() {
                Ok(signup) => signup,
                Err(err) => {
                    form.dispatch(WaitlistAction::Failed(err));
                    return;
                }
            };
            form.dispatch(WaitlistAction::Submitting);
            *in_flight.borrow_mut() = true;
            let in_flight = in_flight.clone();
            let dispatcher = form.dispatcher();
            spawn_local(async move {
                let outcome = client::submit(&signup).await;
                *in_flight.borrow_mut() = false;
                match outcome {
                    Ok(()) => {
                        log::info!("waitlist signup accepted");
                        dispatcher.dispatch(WaitlistAction::Succeeded);
                    }
                    Err(err) => {
                        log::error!("waitlist signup failed: {:?}", err);
                        dispatcher.dispatch(WaitlistAction::Failed(err));
                    }
                }
            });
        })
    };

    html! {
        <main class="home">
            <style>{HOME_CSS}</style>
            <style>{MICRO_CSS}</style>
            <FloatingParticles />
            <HeroSection form={(*form).clone()} on_change={on_change.clone()} on_submit={on_submit.clone()} />
            <DemoSection form={(*form).clone()} {on_change} {on_submit} />
        </main>
    }
}

const HOME_CSS: &str = r#"
    .home {
        position: relative;
        min-height: 100vh;
        overflow: hidden;
        color: #fff;
        background: linear-gradient(to bottom right, #000, #111827, #1f2937);
    }
    .sr-only {
        position: absolute;
        width: 1px;
        height: 1px;
        padding: 0;
        margin: -1px;
        overflow: hidden;
        clip: rect(0, 0, 0, 0);
        white-space: nowrap;
        border: 0;
    }
    .hero {
        min-height: 100vh;
        display: flex;
        align-items: center;
        justify-content: center;
        padding: 1.5rem 1rem 0;
        position: relative;
        z-index: 1;
    }
    .hero__content,
    .hero__thanks {
        max-width: 56rem;
        margin: 0 auto;
        text-align: center;
        animation: rise 0.8s ease both;
    }
    .hero__thanks {
        padding: 2rem;
        border-radius: 1rem;
        background: rgba(255, 255, 255, 0.1);
        border: 1px solid rgba(255, 255, 255, 0.2);
    }
    .hero__title {
        font-size: clamp(2.25rem, 7vw, 4.5rem);
        font-weight: 700;
        margin-bottom: 2rem;
    }
    .hero__gap {
        display: block;
        height: 0.5rem;
    }
    .hero__subtitle {
        font-size: clamp(1.25rem, 2.5vw, 1.5rem);
        color: #d1d5db;
        margin-bottom: 3rem;
        line-height: 1.6;
        animation: rise 0.8s ease 0.2s both;
    }
    .hero__cta {
        max-width: 28rem;
        margin: 0 auto;
        animation: rise 0.8s ease 0.4s both;
    }
    .gradient-text {
        background: linear-gradient(to right, #d8b4fe, #a855f7);
        -webkit-background-clip: text;
        -webkit-text-fill-color: transparent;
    }
    .accent {
        color: #d8b4fe;
        font-weight: 500;
    }
    .link-button {
        margin-top: 1.5rem;
        background: none;
        border: none;
        color: rgba(255, 255, 255, 0.8);
        text-decoration: underline;
        cursor: pointer;
    }
    .link-button:hover {
        color: #fff;
    }
    .signup-card {
        padding: 1.5rem;
        border-radius: 1rem;
        border: 1px solid rgba(255, 255, 255, 0.2);
        background: linear-gradient(to bottom right, rgba(88, 28, 135, 0.4), rgba(126, 34, 206, 0.4));
    }
    .signup-card h3 {
        font-weight: 700;
        margin-bottom: 0.75rem;
    }
    .signup-card form {
        display: flex;
        flex-direction: column;
        gap: 0.75rem;
    }
    .signup-card input,
    .signup-card select {
        width: 100%;
        padding: 0.5rem 1rem;
        border-radius: 0.5rem;
        font-size: 0.875rem;
        color: #fff;
        background: rgba(255, 255, 255, 0.1);
        border: 1px solid rgba(255, 255, 255, 0.3);
    }
    .signup-card option {
        color: #000;
    }
    .signup-card button {
        width: 100%;
        padding: 0.5rem 1rem;
        border: none;
        border-radius: 0.5rem;
        font-weight: 500;
        color: #fff;
        background: linear-gradient(to right, #9333ea, #c084fc);
        cursor: pointer;
    }
    .signup-card button:disabled {
        opacity: 0.6;
        cursor: progress;
    }
    .signup-card__error {
        font-size: 0.875rem;
        color: #fca5a5;
    }
    .demo {
        min-height: 100vh;
        padding: 5rem 1rem;
        position: relative;
        z-index: 1;
        max-width: 72rem;
        margin: 0 auto;
    }
    .demo__intro,
    .demo__cta {
        text-align: center;
        opacity: 0;
        transform: translateY(50px);
        transition: opacity 0.8s ease, transform 0.8s ease;
    }
    .demo__intro {
        margin-bottom: 4rem;
    }
    .demo__intro h2 {
        font-size: clamp(2.25rem, 5vw, 3rem);
        font-weight: 700;
        margin-bottom: 1.5rem;
    }
    .demo__intro p {
        max-width: 42rem;
        margin: 0 auto 2rem;
        font-size: 1.125rem;
        color: #d1d5db;
    }
    .demo__journey {
        margin-bottom: 4rem;
    }
    .demo__cta {
        max-width: 28rem;
        margin: 0 auto;
        transition-delay: 0.5s;
    }
    .demo--visible .demo__intro,
    .demo--visible .demo__cta {
        opacity: 1;
        transform: none;
    }
    @keyframes rise {
        from { opacity: 0; transform: translateY(30px); }
        to { opacity: 1; transform: none; }
    }
"#;
