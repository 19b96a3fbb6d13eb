use crate::domain::RegistrantEmail;

/// One form submission. Nothing here outlives the request.
#[derive(Debug)]
pub struct Registration {
    pub email: RegistrantEmail,
    pub first_name: String,
    pub last_name: String,
}

impl Registration {
    pub fn confirmation_html(&self) -> String {
        format!(
            "<strong>Hi {} {},<br><br>Thank you for subscribing to our mailing list!</strong>",
            self.first_name, self.last_name
        )
    }
}
