pub const WEB3FORMS_URL: &str = "https://api.web3forms.com/submit";
pub const WAITLIST_SUBJECT: &str = "UMe Waitlist Registration";

/// How long each demo phase stays up while autoplaying.
pub const AUTOPLAY_INTERVAL_MS: u32 = 8_000;

/// Share of the demo section that must be on screen before it counts as seen.
pub const DEMO_VISIBILITY_THRESHOLD: f64 = 0.2;

/// Web3Forms access key, baked in at build time (`WEB3FORMS_KEY=... trunk build`).
pub fn get_web3forms_key() -> &'static str {
    option_env!("WEB3FORMS_KEY").unwrap_or("")
}
