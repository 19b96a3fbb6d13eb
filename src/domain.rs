mod registrant_email;
mod registration;

pub use registrant_email::RegistrantEmail;
pub use registration::Registration;
