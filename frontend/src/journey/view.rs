use gloo_events::{EventListener, EventListenerOptions};
use gloo_timers::callback::Interval;
use wasm_bindgen::JsCast;
use web_sys::{Event, HtmlElement, KeyboardEvent};
use yew::prelude::*;

use super::controller::{action_for_key, keeps_own_keys, JourneyAction, PresentationState};
use super::phases::{Phase, Speaker, Visual, PHASES};
use crate::config;
use crate::hooks::use_in_view;

type Dispatcher = UseReducerDispatcher<PresentationState>;

const YOU_AVATAR: &str =
    "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=100&h=100&fit=crop&crop=face";
const PARTNER_AVATAR: &str =
    "https://images.unsplash.com/photo-1438761681033-6461ffad8d80?w=100&h=100&fit=crop&crop=face";
const MATCHES: [(&str, &str, &str); 3] = [
    (PARTNER_AVATAR, "Match 1", "94%"),
    (
        "https://images.unsplash.com/photo-1472099645785-5658abf4ff4e?w=100&h=100&fit=crop&crop=face",
        "Match 2",
        "89%",
    ),
    (
        "https://images.unsplash.com/photo-1507591064344-4c6ce005b128?w=100&h=100&fit=crop&crop=face",
        "Match 3",
        "92%",
    ),
];

/// Window-wide arrow/space handling for the demo. The returned listener is the
/// subscription: dropping it removes the handler.
fn keyboard_listener(window: &web_sys::Window, dispatcher: Dispatcher) -> EventListener {
    EventListener::new_with_options(
        window,
        "keydown",
        EventListenerOptions::enable_prevent_default(),
        move |event: &Event| {
            let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
                return;
            };
            let from_control = event
                .target()
                .and_then(|target| target.dyn_into::<HtmlElement>().ok())
                .map_or(false, |element| {
                    keeps_own_keys(&element.tag_name(), element.is_content_editable())
                });
            if from_control {
                return;
            }
            if let Some(action) = action_for_key(&event.key()) {
                event.prevent_default();
                dispatcher.dispatch(action);
            }
        },
    )
}

fn dispatch(dispatcher: &Dispatcher, action: JourneyAction) -> Callback<MouseEvent> {
    let dispatcher = dispatcher.clone();
    Callback::from(move |_| dispatcher.dispatch(action))
}

/// The guided product demo: four phases that autoplay every few seconds
/// once the section is on screen, until the viewer takes over.
#[function_component]
pub fn Journey() -> Html {
    let node = use_node_ref();
    let visible = use_in_view(node.clone(), config::DEMO_VISIBILITY_THRESHOLD);
    let state = use_reducer(PresentationState::default);

    // Autoplay interval, rebuilt whenever the schedule is cancelled or restarted.
    {
        let dispatcher = state.dispatcher();
        let running = state.timer_running(visible);
        let epoch = state.epoch();
        use_effect_with_deps(
            move |&(running, epoch): &(bool, u32)| {
                let interval = running.then(|| {
                    log::debug!("demo autoplay scheduled (epoch {})", epoch);
                    Interval::new(config::AUTOPLAY_INTERVAL_MS, move || {
                        dispatcher.dispatch(JourneyAction::Tick { epoch })
                    })
                });
                move || drop(interval)
            },
            (running, epoch),
        );
    }

    {
        let dispatcher = state.dispatcher();
        use_effect_with_deps(
            move |&visible: &bool| {
                let listener = if visible {
                    web_sys::window().map(|window| keyboard_listener(&window, dispatcher))
                } else {
                    None
                };
                move || drop(listener)
            },
            visible,
        );
    }

    let dispatcher = state.dispatcher();
    let current = state.current_index();
    let phase = PHASES[current];

    html! {
        <div ref={node} class={classes!("journey", visible.then_some("journey--visible"))}>
            <style>{JOURNEY_CSS}</style>
            <div class="sr-only">
                {"Use arrow keys to navigate between phases, spacebar to toggle auto-play."}
            </div>
            <div class="sr-only" aria-live="polite" aria-atomic="true">
                { state.announcement(phase.title) }
            </div>

            <div class="journey__panel" role="tabpanel" aria-label="AI Dating Journey Demonstration">
                <nav class="journey__timeline">
                    { for PHASES.iter().enumerate().map(|(index, item)| timeline_node(index, item, current, &dispatcher)) }
                </nav>

                <div class="journey__stage">
                    <div class="journey__header">
                        <div class="journey__logo">
                            <img src="/assets/ume_gradient.gif" alt="UMe" width="32" height="32" />
                        </div>
                        <div>
                            <h2>{ phase.title }</h2>
                            <p>{ phase.description }</p>
                        </div>
                    </div>

                    <div class="journey__grid" key={phase.id.to_string()}>
                        <div class="journey__chat">
                            { for phase.chat.iter().enumerate().map(|(i, line)| {
                                let side = match line.speaker {
                                    Speaker::User => "bubble bubble--user",
                                    Speaker::Ai => "bubble bubble--ai",
                                };
                                html! {
                                    <div class={side} style={format!("animation-delay: {}ms;", i * 400)}>
                                        <span>{ line.text }</span>
                                    </div>
                                }
                            }) }
                        </div>
                        <div class="journey__visual">
                            <div class="journey__visual-card">
                                { visual(phase.visual) }
                            </div>
                        </div>
                    </div>
                </div>
            </div>

            <div class="journey__mobile">
                <div class="journey__progress">
                    { for (0..state.phase_count()).map(|i| {
                        let step = if i == current {
                            "dot dot--current"
                        } else if i < current {
                            "dot dot--done"
                        } else {
                            "dot"
                        };
                        html! { <div class={step}></div> }
                    }) }
                </div>

                <div class="journey__controls">
                    <button
                        class="nav-button"
                        aria-label="Previous phase"
                        disabled={state.is_first()}
                        onclick={dispatch(&dispatcher, JourneyAction::Previous)}
                    >
                        {"‹"}
                    </button>
                    <div class="journey__position">
                        <div class="journey__position-title">{ phase.title }</div>
                        <div class="journey__position-count">
                            { format!("{} of {}", current + 1, state.phase_count()) }
                        </div>
                    </div>
                    <button
                        class="nav-button"
                        aria-label="Next phase"
                        disabled={state.is_last()}
                        onclick={dispatch(&dispatcher, JourneyAction::Next)}
                    >
                        {"›"}
                    </button>
                </div>

                <div class="journey__autoplay">
                    <button
                        class={classes!("autoplay-button", state.autoplay().then_some("autoplay-button--on"))}
                        aria-pressed={state.autoplay().to_string()}
                        onclick={dispatch(&dispatcher, JourneyAction::ToggleAutoplay)}
                    >
                        { if state.autoplay() { "Auto-play ON" } else { "Auto-play OFF" } }
                    </button>
                </div>
            </div>
        </div>
    }
}

fn timeline_node(index: usize, phase: &Phase, current: usize, dispatcher: &Dispatcher) -> Html {
    let active = index == current;
    html! {
        <button
            key={phase.id.to_string()}
            class={classes!("timeline-node", active.then_some("timeline-node--active"))}
            aria-label={format!("Go to phase {}: {}", index + 1, phase.title)}
            aria-pressed={active.to_string()}
            onclick={dispatch(dispatcher, JourneyAction::GoTo(index))}
        >
            <div class="timeline-node__marker">
                <div class="timeline-node__dot" role="presentation"></div>
                if index + 1 < PHASES.len() {
                    <div class="timeline-node__line" role="presentation"></div>
                }
            </div>
            <div class="timeline-node__label">{ phase.title }</div>
        </button>
    }
}

fn visual(kind: Visual) -> Html {
    let body = match kind {
        Visual::ProfileBuilding => html! {
            <>
                <div class="avatar avatar--large">
                    <img src={YOU_AVATAR} alt="User profile" width="64" height="64" />
                </div>
                <div class="bars">
                    <div class="bar" style="--bar-width: 100%; animation-delay: 500ms;"></div>
                    <div class="bar" style="--bar-width: 80%; animation-delay: 1000ms;"></div>
                    <div class="bar" style="--bar-width: 60%; animation-delay: 1500ms;"></div>
                </div>
            </>
        },
        Visual::Matching => html! {
            <>
                <div class="avatar avatar--large avatar--scanning">
                    <img src={YOU_AVATAR} alt="You" width="64" height="64" />
                </div>
                <div class="matches">
                    { for MATCHES.iter().map(|(src, alt, score)| html! {
                        <div class="match">
                            <div class="avatar"><img src={*src} alt={*alt} width="48" height="48" /></div>
                            <div class="match__score">{ *score }</div>
                        </div>
                    }) }
                </div>
                <div class="pulse-label">{"AI Analysing"}</div>
            </>
        },
        Visual::DatePlanning => html! {
            <>
                <div class="date-icon">{"📅"}</div>
                <div class="checklist">
                    { for ["Gallery", "Time", "Location", "Reminder"].iter().map(|item| html! {
                        <div class="checklist__item">{ format!("{} ✓", item) }</div>
                    }) }
                </div>
            </>
        },
        Visual::RelationshipSupport => html! {
            <>
                <div class="couple">
                    <div class="avatar"><img src={YOU_AVATAR} alt="Happy person 1" width="48" height="48" /></div>
                    <div class="couple__link"></div>
                    <div class="avatar"><img src={PARTNER_AVATAR} alt="Happy person 2" width="48" height="48" /></div>
                </div>
                <div class="connected">{"✓ Connected"}</div>
                <ul class="support-list">
                    <li>{"Conversation tips"}</li>
                    <li>{"Conflict resolution"}</li>
                    <li>{"Relationship guidance"}</li>
                </ul>
            </>
        },
    };
    html! {
        <div class="visual">
            { body }
            <p class="visual__caption">{ kind.caption() }</p>
        </div>
    }
}

const JOURNEY_CSS: &str = r#"
    .journey {
        max-width: 72rem;
        margin: 0 auto;
        padding: 1.5rem;
        background: rgba(17, 24, 39, 0.7);
        border: 1px solid rgba(168, 85, 247, 0.2);
        border-radius: 1.5rem;
        opacity: 0;
        transform: scale(0.9);
        transition: opacity 0.8s ease, transform 0.8s ease;
    }
    .journey--visible {
        opacity: 1;
        transform: scale(1);
    }
    .journey__panel {
        display: flex;
        gap: 2rem;
    }
    .journey__timeline {
        display: flex;
        flex-direction: column;
        gap: 1.5rem;
        margin-left: 1rem;
    }
    .timeline-node {
        display: flex;
        align-items: center;
        min-height: 48px;
        background: none;
        border: none;
        cursor: pointer;
        color: #9ca3af;
        transition: transform 0.2s ease;
    }
    .timeline-node:hover {
        transform: scale(1.05);
    }
    .timeline-node__marker {
        display: flex;
        flex-direction: column;
        align-items: center;
    }
    .timeline-node__dot {
        width: 1rem;
        height: 1rem;
        border-radius: 9999px;
        background: #4b5563;
        transition: transform 0.5s ease, background 0.3s ease;
    }
    .timeline-node--active .timeline-node__dot {
        background: #c084fc;
        transform: scale(1.4);
    }
    .timeline-node__line {
        width: 1px;
        height: 3rem;
        background: #374151;
    }
    .timeline-node__label {
        margin-left: 1rem;
    }
    .timeline-node--active .timeline-node__label {
        color: #d8b4fe;
        font-weight: 600;
    }
    .journey__stage {
        flex: 1;
    }
    .journey__header {
        display: flex;
        align-items: center;
        gap: 1rem;
        margin-bottom: 1.5rem;
    }
    .journey__header h2 {
        color: #fff;
        font-size: 1.5rem;
        font-weight: 700;
    }
    .journey__header p {
        color: #9ca3af;
        font-size: 0.875rem;
    }
    .journey__logo {
        width: 2rem;
        height: 2rem;
        border-radius: 9999px;
        overflow: hidden;
    }
    .journey__grid {
        display: grid;
        grid-template-columns: 1fr 1fr;
        gap: 1.5rem;
    }
    .journey__chat,
    .journey__visual-card {
        background: rgba(31, 41, 55, 0.5);
        border-radius: 1rem;
        padding: 1rem;
    }
    .journey__visual {
        display: flex;
        align-items: center;
        justify-content: center;
    }
    .journey__visual-card {
        width: 100%;
        max-width: 20rem;
    }
    .bubble {
        margin-bottom: 1rem;
        opacity: 0;
        animation: fade-in 0.4s ease forwards;
    }
    .bubble span {
        display: inline-block;
        padding: 0.5rem 0.75rem;
        border-radius: 0.75rem;
    }
    .bubble--user {
        text-align: right;
    }
    .bubble--user span {
        background: #9333ea;
        color: #fff;
    }
    .bubble--ai span {
        background: #374151;
        color: #e5e7eb;
        border: 1px solid rgba(192, 132, 252, 0.3);
    }
    .visual {
        display: flex;
        flex-direction: column;
        align-items: center;
        gap: 0.75rem;
        text-align: center;
    }
    .visual__caption {
        font-size: 0.75rem;
        color: #9ca3af;
    }
    .avatar {
        width: 3rem;
        height: 3rem;
        border-radius: 9999px;
        overflow: hidden;
    }
    .avatar img {
        width: 100%;
        height: 100%;
        object-fit: cover;
    }
    .avatar--large {
        width: 4rem;
        height: 4rem;
        border: 2px solid rgba(192, 132, 252, 0.6);
    }
    .avatar--scanning {
        animation: breathe 3s ease-in-out infinite;
    }
    .bars {
        width: 100%;
    }
    .bar {
        height: 0.5rem;
        margin-bottom: 0.5rem;
        width: 0;
        border-radius: 9999px;
        background: linear-gradient(to right, #c084fc, #ec4899);
        animation: grow 1s ease forwards;
    }
    .matches,
    .couple {
        display: flex;
        gap: 1rem;
        align-items: center;
    }
    .match__score {
        font-size: 0.75rem;
        color: #fbbf24;
    }
    .pulse-label {
        font-size: 0.75rem;
        color: #93c5fd;
        animation: pulse 2s ease-in-out infinite;
    }
    .date-icon {
        width: 4rem;
        height: 4rem;
        border-radius: 9999px;
        display: flex;
        align-items: center;
        justify-content: center;
        font-size: 1.25rem;
        background: linear-gradient(to bottom right, #4ade80, #3b82f6);
    }
    .checklist {
        display: grid;
        grid-template-columns: 1fr 1fr;
        gap: 0.5rem;
        width: 100%;
    }
    .checklist__item {
        padding: 0.5rem;
        border-radius: 0.5rem;
        font-size: 0.75rem;
        color: #bbf7d0;
        background: rgba(34, 197, 94, 0.15);
    }
    .couple__link {
        width: 2rem;
        height: 1px;
        background: linear-gradient(to right, #34d399, #60a5fa);
    }
    .connected {
        font-size: 0.75rem;
        color: #34d399;
    }
    .support-list {
        list-style: none;
        padding: 0;
        font-size: 0.75rem;
        color: #d1d5db;
    }
    .journey__mobile {
        display: none;
        margin-top: 2rem;
    }
    .journey__progress,
    .journey__controls,
    .journey__autoplay {
        display: flex;
        justify-content: center;
        align-items: center;
        gap: 0.5rem;
        margin-bottom: 1rem;
    }
    .dot {
        width: 0.5rem;
        height: 0.5rem;
        border-radius: 9999px;
        background: #4b5563;
        transition: all 0.3s ease;
    }
    .dot--done {
        background: rgba(147, 51, 234, 0.6);
    }
    .dot--current {
        width: 2rem;
        background: #c084fc;
    }
    .nav-button {
        width: 3rem;
        height: 3rem;
        border-radius: 9999px;
        border: none;
        font-size: 1.5rem;
        color: #fff;
        background: rgba(147, 51, 234, 0.8);
    }
    .nav-button:disabled {
        color: #6b7280;
        background: rgba(55, 65, 81, 0.5);
        cursor: not-allowed;
    }
    .journey__position {
        min-width: 120px;
        text-align: center;
    }
    .journey__position-title {
        color: #fff;
        font-weight: 600;
        font-size: 0.875rem;
    }
    .journey__position-count {
        color: #9ca3af;
        font-size: 0.75rem;
    }
    .autoplay-button {
        padding: 0.5rem 1rem;
        border-radius: 9999px;
        border: none;
        font-size: 0.875rem;
        color: #d1d5db;
        background: rgba(55, 65, 81, 0.8);
    }
    .autoplay-button--on {
        color: #fff;
        background: rgba(147, 51, 234, 0.8);
    }
    @keyframes fade-in {
        to { opacity: 1; }
    }
    @keyframes grow {
        to { width: var(--bar-width); }
    }
    @keyframes breathe {
        50% { transform: scale(1.08) translateY(-2px); }
    }
    @keyframes pulse {
        50% { opacity: 0.5; transform: scale(1.1); }
    }
    @media (max-width: 1024px) {
        .journey__timeline {
            display: none;
        }
        .journey__mobile {
            display: block;
        }
    }
    @media (max-width: 768px) {
        .journey__grid {
            grid-template-columns: 1fr;
        }
    }
"#;
