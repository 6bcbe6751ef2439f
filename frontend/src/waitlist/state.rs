use std::rc::Rc;

use thiserror::Error;
use yew::Reducible;

use crate::config;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Platform {
    Android,
    Ios,
}

impl Platform {
    pub const ALL: [Platform; 2] = [Platform::Android, Platform::Ios];

    /// Value sent to Web3Forms and used as the `<option>` value.
    pub fn as_str(self) -> &'static str {
        match self {
            Platform::Android => "Android",
            Platform::Ios => "iOS",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|platform| platform.as_str() == value)
    }
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum WaitlistError {
    #[error("Please enter a valid email address.")]
    InvalidEmail,
    #[error("Please choose your platform.")]
    MissingPlatform,
    #[error("We couldn't reach the signup service. Please try again.")]
    Network(String),
    #[error("The signup service sent an unexpected reply. Please try again.")]
    Decode(String),
    #[error("Signup failed: {0}")]
    Rejected(String),
}

impl From<gloo_net::Error> for WaitlistError {
    fn from(err: gloo_net::Error) -> Self {
        match err {
            gloo_net::Error::SerdeError(e) => WaitlistError::Decode(e.to_string()),
            other => WaitlistError::Network(other.to_string()),
        }
    }
}

/// A validated waitlist entry, ready to send.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Signup {
    pub email: String,
    pub platform: Platform,
}

impl Signup {
    /// Form fields in the order Web3Forms receives them.
    pub fn form_fields(&self, access_key: &str) -> [(&'static str, String); 4] {
        [
            ("access_key", access_key.to_string()),
            ("subject", config::WAITLIST_SUBJECT.to_string()),
            ("email", self.email.clone()),
            ("platform", self.platform.as_str().to_string()),
        ]
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Submitting,
    Submitted,
    Failed(WaitlistError),
}

#[derive(Clone, Debug, PartialEq)]
pub enum WaitlistAction {
    SetEmail(String),
    SetPlatform(Option<Platform>),
    /// The request is on its way.
    Submitting,
    Succeeded,
    Failed(WaitlistError),
}

/// Signup form contents plus where the submission stands. Both forms on the
/// page share one instance.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct WaitlistForm {
    pub email: String,
    pub platform: Option<Platform>,
    pub status: SubmitStatus,
}

impl WaitlistForm {
    pub fn submitted(&self) -> bool {
        self.status == SubmitStatus::Submitted
    }

    pub fn is_submitting(&self) -> bool {
        self.status == SubmitStatus::Submitting
    }

    pub fn error(&self) -> Option<&WaitlistError> {
        match &self.status {
            SubmitStatus::Failed(err) => Some(err),
            _ => None,
        }
    }

    /// Whether a new submission may start right now.
    pub fn can_submit(&self) -> bool {
        !matches!(self.status, SubmitStatus::Submitting | SubmitStatus::Submitted)
    }

    pub fn signup(&self) -> Result<Signup, WaitlistError> {
        let email = self.email.trim();
        if !is_plausible_email(email) {
            return Err(WaitlistError::InvalidEmail);
        }
        let platform = self.platform.ok_or(WaitlistError::MissingPlatform)?;
        Ok(Signup {
            email: email.to_string(),
            platform,
        })
    }

    pub fn apply(&mut self, action: WaitlistAction) -> bool {
        match action {
            WaitlistAction::SetEmail(email) => {
                self.email = email;
                self.clear_error();
                true
            }
            WaitlistAction::SetPlatform(platform) => {
                self.platform = platform;
                self.clear_error();
                true
            }
            WaitlistAction::Submitting => {
                if !self.can_submit() {
                    return false;
                }
                self.status = SubmitStatus::Submitting;
                true
            }
            // Outcomes only count for a request that is still in flight.
            WaitlistAction::Succeeded => {
                if !self.is_submitting() {
                    return false;
                }
                self.status = SubmitStatus::Submitted;
                true
            }
            WaitlistAction::Failed(err) => {
                if self.submitted() {
                    return false;
                }
                self.status = SubmitStatus::Failed(err);
                true
            }
        }
    }

    fn clear_error(&mut self) {
        if matches!(self.status, SubmitStatus::Failed(_)) {
            self.status = SubmitStatus::Idle;
        }
    }
}

impl Reducible for WaitlistForm {
    type Action = WaitlistAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        if next.apply(action) {
            Rc::new(next)
        } else {
            self
        }
    }
}

/// One `@` with something on each side and no whitespace.
fn is_plausible_email(email: &str) -> bool {
    let mut parts = email.split('@');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) => {
            !local.is_empty() && !domain.is_empty() && !email.chars().any(char::is_whitespace)
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> WaitlistForm {
        WaitlistForm {
            email: " someone@example.com ".to_string(),
            platform: Some(Platform::Ios),
            status: SubmitStatus::Idle,
        }
    }

    #[test]
    fn platform_values_round_trip_through_option_values() {
        assert_eq!(Platform::from_value("iOS"), Some(Platform::Ios));
        assert_eq!(Platform::from_value("Android"), Some(Platform::Android));
        assert_eq!(Platform::from_value(""), None);
    }

    #[test]
    fn signup_trims_email() {
        let signup = filled().signup().unwrap();
        assert_eq!(signup.email, "someone@example.com");
        assert_eq!(signup.platform, Platform::Ios);
    }

    #[test]
    fn signup_rejects_bad_input() {
        let mut form = filled();
        form.email = "not-an-email".to_string();
        assert_eq!(form.signup(), Err(WaitlistError::InvalidEmail));

        for email in ["@example.com", "a@", "a@b@c.com", "a b@c.com", "", "   "] {
            form.email = email.to_string();
            assert_eq!(form.signup(), Err(WaitlistError::InvalidEmail), "{email}");
        }

        let mut form = filled();
        form.platform = None;
        assert_eq!(form.signup(), Err(WaitlistError::MissingPlatform));
    }

    #[test]
    fn single_label_domains_are_accepted() {
        let mut form = filled();
        form.email = "user@localhost".to_string();
        assert_eq!(form.signup().unwrap().email, "user@localhost");
    }

    #[test]
    fn transport_errors_map_to_network_and_bad_json_to_decode() {
        let err = WaitlistError::from(gloo_net::Error::GlooError("offline".to_string()));
        assert!(matches!(err, WaitlistError::Network(ref msg) if msg.contains("offline")));

        let bad_json = serde_json::from_str::<u8>("not json").unwrap_err();
        let err = WaitlistError::from(gloo_net::Error::SerdeError(bad_json));
        assert!(matches!(err, WaitlistError::Decode(_)));
    }

    #[test]
    fn form_fields_carry_subject_and_platform() {
        let fields = filled().signup().unwrap().form_fields("key-123");
        assert_eq!(fields[0], ("access_key", "key-123".to_string()));
        assert_eq!(fields[1], ("subject", "UMe Waitlist Registration".to_string()));
        assert_eq!(fields[2], ("email", "someone@example.com".to_string()));
        assert_eq!(fields[3], ("platform", "iOS".to_string()));
    }

    #[test]
    fn success_marks_submitted() {
        let mut form = filled();
        assert!(form.apply(WaitlistAction::Submitting));
        assert!(form.apply(WaitlistAction::Succeeded));
        assert!(form.submitted());
        assert!(!form.can_submit());
    }

    #[test]
    fn network_failure_leaves_form_retryable() {
        let mut form = filled();
        form.apply(WaitlistAction::Submitting);
        form.apply(WaitlistAction::Failed(WaitlistError::Network("offline".into())));

        assert!(!form.submitted());
        assert_eq!(form.email, " someone@example.com ");
        assert_eq!(form.platform, Some(Platform::Ios));
        assert!(matches!(form.error(), Some(WaitlistError::Network(_))));

        assert!(form.can_submit());
        assert!(form.apply(WaitlistAction::Submitting));
        assert!(form.apply(WaitlistAction::Succeeded));
        assert!(form.submitted());
    }

    #[test]
    fn second_submit_while_in_flight_is_ignored() {
        let mut form = filled();
        assert!(form.apply(WaitlistAction::Submitting));
        assert!(!form.apply(WaitlistAction::Submitting));
    }

    #[test]
    fn late_outcomes_do_not_override_success() {
        let mut form = filled();
        form.apply(WaitlistAction::Submitting);
        form.apply(WaitlistAction::Succeeded);
        assert!(!form.apply(WaitlistAction::Failed(WaitlistError::Network("late".into()))));
        assert!(!form.apply(WaitlistAction::Succeeded));
        assert!(form.submitted());
    }

    #[test]
    fn editing_clears_a_failure() {
        let mut form = filled();
        form.apply(WaitlistAction::Failed(WaitlistError::InvalidEmail));
        assert!(form.error().is_some());
        form.apply(WaitlistAction::SetEmail("someone@example.org".into()));
        assert_eq!(form.status, SubmitStatus::Idle);
    }

    #[test]
    fn success_without_a_request_is_ignored() {
        let mut form = filled();
        assert!(!form.apply(WaitlistAction::Succeeded));
        assert!(!form.submitted());
    }
}
