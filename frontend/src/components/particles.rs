use yew::prelude::*;

/// Deterministic pseudo-random value in `[0, 1)` so the background looks the
/// same on every load.
pub fn seeded_random(seed: f64) -> f64 {
    let x = seed.sin() * 10_000.0;
    x - x.floor()
}

#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub left: f64,
    pub top: f64,
    pub drift_x: f64,
    pub drift_y: f64,
    pub peak_scale: f64,
    pub duration: f64,
    pub delay: f64,
    pub small: bool,
}

impl Particle {
    fn style(&self) -> String {
        format!(
            "left: {:.2}%; top: {:.2}%; --drift-x: {:.1}px; --drift-y: {:.1}px; --peak-scale: {}; animation-duration: {:.2}s; animation-delay: {:.2}s;",
            self.left, self.top, self.drift_x, self.drift_y, self.peak_scale, self.duration, self.delay
        )
    }
}

/// Twelve primary-tinted dots followed by eight smaller tinted ones.
pub fn particles() -> Vec<Particle> {
    let large = (0..12u32).map(|i| {
        let i = f64::from(i);
        Particle {
            left: seeded_random(i * 7.0) * 100.0,
            top: seeded_random(i * 11.0) * 100.0,
            drift_x: seeded_random(i * 13.0) * 100.0 - 50.0,
            drift_y: seeded_random(i * 17.0) * 100.0 - 50.0,
            peak_scale: 1.2,
            duration: seeded_random(i * 19.0) * 8.0 + 6.0,
            delay: seeded_random(i * 23.0) * 4.0,
            small: false,
        }
    });
    let small = (0..8u32).map(|i| {
        let i = f64::from(i);
        Particle {
            left: seeded_random(i * 29.0 + 100.0) * 100.0,
            top: seeded_random(i * 31.0 + 100.0) * 100.0,
            drift_x: seeded_random(i * 37.0 + 100.0) * 80.0 - 40.0,
            drift_y: seeded_random(i * 41.0 + 100.0) * 80.0 - 40.0,
            peak_scale: 1.8,
            duration: seeded_random(i * 43.0 + 100.0) * 10.0 + 8.0,
            delay: seeded_random(i * 47.0 + 100.0) * 6.0,
            small: true,
        }
    });
    large.chain(small).collect()
}

#[function_component]
pub fn FloatingParticles() -> Html {
    let dots = use_memo(|_| particles(), ());
    html! {
        <div class="particles" aria-hidden="true">
            <style>{PARTICLES_CSS}</style>
            { for dots.iter().map(|particle| html! {
                <div
                    class={classes!("particle", particle.small.then_some("particle--small"))}
                    style={particle.style()}
                ></div>
            }) }
        </div>
    }
}

const PARTICLES_CSS: &str = r#"
    .particles {
        position: fixed;
        inset: 0;
        pointer-events: none;
        z-index: 0;
    }
    .particle {
        position: absolute;
        width: 0.5rem;
        height: 0.5rem;
        border-radius: 9999px;
        background-color: rgba(61, 33, 99, 0.6);
        opacity: 0;
        animation-name: drift;
        animation-iteration-count: infinite;
        animation-timing-function: ease-in-out;
    }
    .particle--small {
        width: 0.375rem;
        height: 0.375rem;
        background-color: rgba(107, 83, 140, 0.5);
    }
    @keyframes drift {
        0% { transform: translate(0, 0) scale(0); opacity: 0; }
        50% { transform: translate(calc(var(--drift-x) / 2), calc(var(--drift-y) / 2)) scale(var(--peak-scale)); opacity: 0.8; }
        100% { transform: translate(var(--drift-x), var(--drift-y)) scale(0); opacity: 0; }
    }
"#;
