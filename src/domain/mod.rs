mod contact_message;
mod form_data;
mod form_errors;
mod submission_state;

pub use contact_message::ContactMessage;
pub use form_data::{FormData, FormField};
pub use form_errors::FormErrors;
pub use submission_state::SubmissionState;
