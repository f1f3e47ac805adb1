//! Form Field Components
//!
//! Labeled input and textarea with an inline error line. The error line is
//! only rendered when `error` is set, and the control gets the `error` class.

use dioxus::prelude::*;

use super::button::join_class;

/// Properties for the FormInput component
#[derive(Clone, PartialEq, Props)]
pub struct FormInputProps {
    /// Element id (also used for the label)
    pub id: String,
    pub label: String,
    pub value: String,
    pub oninput: EventHandler<String>,
    /// Input type (text, email, ...)
    #[props(default = "text".to_string())]
    pub input_type: String,
    #[props(default)]
    pub placeholder: Option<String>,
    /// Validation message for this field
    #[props(default)]
    pub error: Option<String>,
}

/// # Example
///
/// ```rust,ignore
/// let mut email = use_signal(String::new);
///
/// rsx! {
///     FormInput {
///         id: "email".to_string(),
///         label: "Email".to_string(),
///         input_type: "email".to_string(),
///         value: email(),
///         oninput: move |s| email.set(s),
///         error: email_error(),
///     }
/// }
/// ```
#[component]
pub fn FormInput(props: FormInputProps) -> Element {
    let class = field_class(props.error.is_some());

    rsx! {
        div { class: "form-group",
            label { r#for: "{props.id}", "{props.label}" }
            input {
                id: "{props.id}",
                class: "{class}",
                r#type: "{props.input_type}",
                value: "{props.value}",
                placeholder: props.placeholder.as_deref().unwrap_or(""),
                oninput: move |e| props.oninput.call(e.value()),
            }
            if let Some(err) = &props.error {
                span { class: "error-message", id: "{props.id}Error", "{err}" }
            }
        }
    }
}

/// Properties for the FormTextArea component
#[derive(Clone, PartialEq, Props)]
pub struct FormTextAreaProps {
    pub id: String,
    pub label: String,
    pub value: String,
    pub oninput: EventHandler<String>,
    #[props(default = 5)]
    pub rows: u32,
    #[props(default)]
    pub placeholder: Option<String>,
    #[props(default)]
    pub error: Option<String>,
}

#[component]
pub fn FormTextArea(props: FormTextAreaProps) -> Element {
    let class = field_class(props.error.is_some());

    rsx! {
        div { class: "form-group",
            label { r#for: "{props.id}", "{props.label}" }
            textarea {
                id: "{props.id}",
                class: "{class}",
                rows: "{props.rows}",
                placeholder: props.placeholder.as_deref().unwrap_or(""),
                value: "{props.value}",
                oninput: move |e| props.oninput.call(e.value()),
            }
            if let Some(err) = &props.error {
                span { class: "error-message", id: "{props.id}Error", "{err}" }
            }
        }
    }
}

fn field_class(has_error: bool) -> String {
    join_class("form-control", has_error.then_some("error"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_class_marks_errors() {
        assert_eq!(field_class(false), "form-control");
        assert_eq!(field_class(true), "form-control error");
    }
}
