use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContactError {
    #[error("Please fill in your {0}.")]
    MissingField(&'static str),

    #[error("Please enter a valid email address.")]
    InvalidEmail,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Company,
    Message,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub company: String,
    pub message: String,
}

impl ContactFields {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Company => &self.company,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Company => self.company = value,
            Field::Message => self.message = value,
        }
    }

    /// Same rules the form's `required` / `type="email"` attributes express.
    pub fn validate(&self) -> Result<(), ContactError> {
        if self.name.trim().is_empty() {
            return Err(ContactError::MissingField("name"));
        }
        if self.email.trim().is_empty() {
            return Err(ContactError::MissingField("email address"));
        }
        if !looks_like_email(self.email.trim()) {
            return Err(ContactError::InvalidEmail);
        }
        if self.message.trim().is_empty() {
            return Err(ContactError::MissingField("message"));
        }
        Ok(())
    }
}

fn looks_like_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.is_empty()
                && !domain.contains('@')
                && !email.contains(char::is_whitespace)
        }
        None => false,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormStatus {
    #[default]
    Editing,
    Submitting,
    Submitted,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ContactForm {
    pub fields: ContactFields,
    pub status: FormStatus,
    pub error: Option<ContactError>,
}

impl ContactForm {
    pub fn update(&mut self, field: Field, value: String) {
        self.fields.set(field, value);
        self.error = None;
    }

    /// Validate and enter `Submitting`. `Ok(false)` means a submission is already in flight.
    pub fn submit(&mut self) -> Result<bool, ContactError> {
        if self.status == FormStatus::Submitting {
            return Ok(false);
        }
        if let Err(e) = self.fields.validate() {
            self.error = Some(e.clone());
            return Err(e);
        }
        self.error = None;
        self.status = FormStatus::Submitting;
        Ok(true)
    }

    pub fn complete(&mut self) {
        if self.status == FormStatus::Submitting {
            self.status = FormStatus::Submitted;
            self.fields = ContactFields::default();
        }
    }

    /// "Send Another Message".
    pub fn reset(&mut self) {
        self.status = FormStatus::Editing;
        self.error = None;
    }

    pub fn is_submitting(&self) -> bool {
        self.status == FormStatus::Submitting
    }
}
