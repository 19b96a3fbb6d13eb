#[derive(Debug)]
pub struct RegistrantEmail(String);

impl RegistrantEmail {
    /// Presence check only: the registration contract attempts delivery for
    /// any non-empty address and leaves syntax to the provider.
    pub fn parse(s: &str) -> Result<Self, String> {
        if s.is_empty() {
            Err("missing email address".to_string())
        } else {
            Ok(Self(s.to_string()))
        }
    }
}

impl AsRef<str> for RegistrantEmail {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
