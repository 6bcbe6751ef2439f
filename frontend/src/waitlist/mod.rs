pub mod client;
pub mod form;
pub mod state;

pub use form::SignupForm;
pub use state::{WaitlistAction, WaitlistForm};
