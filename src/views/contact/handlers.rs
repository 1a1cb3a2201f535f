use crate::clock::{self, SharedClock};
use crate::common::StateCell;
use crate::views::contact::types::{ContactError, ContactForm};
use std::future::Future;
use std::time::Duration;

/// Validate and start the simulated submission. The returned future
/// completes it after `delay`; nothing is sent anywhere.
pub fn submit_contact<S>(
    clock: SharedClock,
    delay: Duration,
    mut form: S,
) -> Result<Option<impl Future<Output = ()>>, ContactError>
where
    S: StateCell<ContactForm> + 'static,
{
    if !form.apply(ContactForm::submit)? {
        return Ok(None);
    }
    tracing::info!("Contact form submitted");

    Ok(Some(clock::after(clock, delay, move || {
        form.apply(ContactForm::complete);
        tracing::debug!("Contact form submission completed");
    })))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::manual::Runtime;
    use crate::views::contact::types::{ContactFields, Field, FormStatus};
    use std::{cell::RefCell, rc::Rc};

    const DELAY: Duration = Duration::from_millis(1500);

    fn filled_form() -> Rc<RefCell<ContactForm>> {
        let mut form = ContactForm::default();
        form.update(Field::Name, "John Doe".into());
        form.update(Field::Email, "john@example.com".into());
        form.update(Field::Company, "Acme Architects".into());
        form.update(Field::Message, "Please send a quote.".into());
        Rc::new(RefCell::new(form))
    }

    #[test]
    fn test_submission_completes_after_delay_and_clears() {
        let mut rt = Runtime::new();
        let form = filled_form();
        let run = submit_contact(rt.clock(), DELAY, form.clone()).unwrap().unwrap();
        rt.spawn(run);
        assert!(form.borrow().is_submitting());

        rt.advance_ms(1499);
        assert_eq!(form.borrow().status, FormStatus::Submitting);
        assert_eq!(form.borrow().fields.get(Field::Company), "Acme Architects");

        rt.advance_ms(1);
        assert_eq!(form.borrow().status, FormStatus::Submitted);
        assert_eq!(form.borrow().fields, ContactFields::default());
    }

    #[test]
    fn test_double_submit_is_ignored() {
        let mut rt = Runtime::new();
        let form = filled_form();
        let run = submit_contact(rt.clock(), DELAY, form.clone()).unwrap().unwrap();
        rt.spawn(run);

        rt.advance_ms(500);
        assert!(submit_contact(rt.clock(), DELAY, form.clone()).unwrap().is_none());

        rt.advance_ms(1000);
        assert_eq!(form.borrow().status, FormStatus::Submitted);
    }

    #[test]
    fn test_invalid_form_never_submits() {
        let rt = Runtime::new();
        let form = Rc::new(RefCell::new(ContactForm::default()));
        let result = submit_contact(rt.clock(), DELAY, form.clone());

        assert!(matches!(result, Err(ContactError::MissingField("name"))));
        assert_eq!(form.borrow().status, FormStatus::Editing);
    }
}
