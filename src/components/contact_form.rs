//! Contact Form Component
//!
//! Name, email and message with inline validation. There is no backend: a
//! valid submission shows the success message and resets the form.

use dioxus::prelude::*;
use portfolio_core::{ContactField, ContactForm, FieldError, SUCCESS_MESSAGE};
use portfolio_ui::{Button, FormInput, FormTextArea};

fn error_for(errors: &[FieldError], field: ContactField) -> Option<String> {
    errors
        .iter()
        .find(|e| e.field == field)
        .map(|e| e.message.to_string())
}

#[component]
pub fn ContactFormView() -> Element {
    let mut form = use_signal(ContactForm::default);
    let mut errors: Signal<Vec<FieldError>> = use_signal(Vec::new);
    let mut success = use_signal(|| false);

    let on_submit = move |e: FormEvent| {
        e.prevent_default();
        success.set(false);

        let result = form.read().validate();
        match result {
            Ok(()) => {
                errors.set(Vec::new());
                form.write().reset();
                success.set(true);
                tracing::info!("Contact form submitted");
            }
            Err(found) => errors.set(found),
        }
    };

    let name_error = error_for(&errors.read(), ContactField::Name);
    let email_error = error_for(&errors.read(), ContactField::Email);
    let message_error = error_for(&errors.read(), ContactField::Message);

    rsx! {
        form { id: "contactForm", class: "contact-form", onsubmit: on_submit,
            FormInput {
                id: ContactField::Name.id().to_string(),
                label: "Name".to_string(),
                value: form.read().name.clone(),
                oninput: move |v| form.write().name = v,
                error: name_error,
            }
            FormInput {
                id: ContactField::Email.id().to_string(),
                label: "Email".to_string(),
                input_type: "email".to_string(),
                value: form.read().email.clone(),
                oninput: move |v| form.write().email = v,
                error: email_error,
            }
            FormTextArea {
                id: ContactField::Message.id().to_string(),
                label: "Message".to_string(),
                value: form.read().message.clone(),
                oninput: move |v| form.write().message = v,
                error: message_error,
            }

            Button { button_type: "submit".to_string(), "Send Message" }

            if success() {
                div { id: "formSuccess", class: "form-success", "{SUCCESS_MESSAGE}" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_for_picks_matching_field() {
        let errors = ContactForm::new("", "bad", "hi").validate().unwrap_err();
        assert_eq!(error_for(&errors, ContactField::Name).as_deref(), Some("Please enter your name"));
        assert_eq!(
            error_for(&errors, ContactField::Email).as_deref(),
            Some("Please enter a valid email address")
        );
        assert_eq!(error_for(&errors, ContactField::Message), None);
    }
}
