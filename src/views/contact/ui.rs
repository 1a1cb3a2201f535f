use crate::catalog::links::{CONTACT_SOCIALS, OFFICE_HOURS};
use crate::catalog::PRODUCT;
use crate::components::SocialIcon;
use crate::services::Services;
use crate::views::contact::handlers::submit_contact;
use crate::views::contact::types::{ContactForm, Field, FormStatus};
use dioxus::prelude::*;
use dioxus_free_icons::{
    icons::fa_solid_icons::{FaCircleCheck, FaEnvelope, FaMessage, FaPaperPlane, FaSpinner},
    Icon,
};

#[component]
pub fn ContactSection() -> Element {
    let services = use_context::<Services>();
    let mut form = use_signal(ContactForm::default);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        match submit_contact(
            services.clock.clone(),
            services.config.contact_submit_delay,
            form,
        ) {
            Ok(Some(run)) => {
                spawn(run);
            }
            Ok(None) => {}
            Err(e) => tracing::debug!("Contact form rejected: {}", e),
        }
    };

    let form_body = if form().status == FormStatus::Submitted {
        rsx! {
            div { class: "flex flex-col items-center justify-center py-12 text-center",
                div { class: "w-16 h-16 rounded-full bg-green-900 bg-opacity-30 flex items-center justify-center mb-4",
                    Icon { icon: FaCircleCheck, width: 32, height: 32, class: "text-green-500" }
                }
                h3 { class: "text-2xl font-semibold text-text-primary mb-2", "Message Sent!" }
                p { class: "text-text-secondary mb-6",
                    "Thank you for reaching out. We've received your message and will respond shortly."
                }
                button {
                    class: "px-4 py-2 rounded-lg border border-border hover:bg-background-hover transition-colors",
                    onclick: move |_| form.write().reset(),
                    "Send Another Message"
                }
            }
        }
    } else {
        let submitting = form().is_submitting();
        let error = form().error.clone();
        rsx! {
            form { class: "space-y-4", "novalidate": "true", onsubmit: handle_submit,
                div { class: "grid grid-cols-1 md:grid-cols-2 gap-4",
                    TextField {
                        form: form,
                        field: Field::Name,
                        label: "Full Name",
                        placeholder: "John Doe",
                        input_type: "text",
                    }
                    TextField {
                        form: form,
                        field: Field::Email,
                        label: "Email Address",
                        placeholder: "john@example.com",
                        input_type: "email",
                    }
                }
                TextField {
                    form: form,
                    field: Field::Company,
                    label: "Company",
                    placeholder: "Your Company",
                    input_type: "text",
                }
                div { class: "space-y-2",
                    label { r#for: "message", class: "text-sm font-medium", "Message" }
                    textarea {
                        id: "message",
                        name: "message",
                        class: "w-full rounded-lg bg-background-medium border border-border px-3 py-2",
                        placeholder: "How can we help you?",
                        rows: "5",
                        required: true,
                        value: "{form().fields.get(Field::Message)}",
                        oninput: move |evt| form.write().update(Field::Message, evt.value()),
                    }
                }
                if let Some(err) = error {
                    p { class: "text-sm text-accent-rose", "{err}" }
                }
                button {
                    r#type: "submit",
                    class: "w-full flex items-center justify-center bg-primary-600 hover:bg-primary-500 text-text-primary font-semibold py-3 rounded-lg transition-colors disabled:opacity-60",
                    disabled: submitting,
                    if submitting {
                        Icon {
                            icon: FaSpinner,
                            width: 16,
                            height: 16,
                            class: "mr-2 animate-spin",
                        }
                        "Sending..."
                    } else {
                        Icon {
                            icon: FaPaperPlane,
                            width: 16,
                            height: 16,
                            class: "mr-2",
                        }
                        "Send Message"
                    }
                }
            }
        }
    };

    rsx! {
        section { id: "contact", class: "relative w-full py-24 bg-background-medium overflow-hidden",
            div { class: "container mx-auto px-4 md:px-6 relative",
                div { class: "text-center mb-16",
                    h2 { class: "text-3xl md:text-4xl font-bold mb-4 text-text-primary", "Get In Touch" }
                    p { class: "text-lg text-text-secondary max-w-3xl mx-auto",
                        "Have questions about our Revit plugin? Contact our team for support, demos, or custom solutions"
                    }
                }

                div { class: "grid grid-cols-1 lg:grid-cols-3 gap-8 max-w-6xl mx-auto",
                    ContactInfo {}
                    div { class: "lg:col-span-2 bg-background-card rounded-xl shadow-lg p-6",
                        h3 { class: "text-xl font-semibold text-text-primary", "Send Us a Message" }
                        p { class: "text-sm text-text-muted mb-6",
                            "Fill out the form below and we'll get back to you as soon as possible"
                        }
                        {form_body}
                    }
                }
            }
        }
    }
}

#[component]
fn TextField(
    mut form: Signal<ContactForm>,
    field: Field,
    label: &'static str,
    placeholder: &'static str,
    input_type: &'static str,
) -> Element {
    let id = match field {
        Field::Name => "name",
        Field::Email => "email",
        Field::Company => "company",
        Field::Message => "message",
    };
    let required = field != Field::Company;

    rsx! {
        div { class: "space-y-2",
            label { r#for: id, class: "text-sm font-medium", "{label}" }
            input {
                id: id,
                name: id,
                r#type: input_type,
                class: "w-full rounded-lg bg-background-medium border border-border px-3 py-2",
                placeholder: placeholder,
                required: required,
                value: "{form().fields.get(field)}",
                oninput: move |evt| form.write().update(field, evt.value()),
            }
        }
    }
}

#[component]
fn ContactInfo() -> Element {
    rsx! {
        div { class: "bg-background-card rounded-xl shadow-lg p-6 space-y-6",
            div {
                h3 { class: "text-xl font-semibold text-text-primary", "Contact Information" }
                p { class: "text-sm text-text-muted", "Reach out to us through any of these channels" }
            }

            div { class: "flex items-start gap-4",
                div { class: "w-10 h-10 rounded-full bg-primary-600 bg-opacity-20 flex items-center justify-center",
                    Icon { icon: FaEnvelope, width: 18, height: 18, class: "text-primary-400" }
                }
                div {
                    h4 { class: "font-medium", "Email Us" }
                    p { class: "text-sm text-text-muted", "Our team typically responds within 24 hours" }
                    a {
                        href: PRODUCT.support_mailto(),
                        class: "text-sm text-primary-400 hover:underline",
                        "{PRODUCT.support_email}"
                    }
                }
            }

            div { class: "flex items-start gap-4",
                div { class: "w-10 h-10 rounded-full bg-primary-600 bg-opacity-20 flex items-center justify-center",
                    Icon { icon: FaMessage, width: 18, height: 18, class: "text-primary-400" }
                }
                div {
                    h4 { class: "font-medium", "Live Chat" }
                    p { class: "text-sm text-text-muted", "Available Monday-Friday, 9am-5pm EST" }
                    a { href: "#contact", class: "text-sm text-primary-400 hover:underline",
                        "Start a conversation"
                    }
                }
            }

            div {
                h4 { class: "font-medium mb-2", "Office Hours" }
                div { class: "space-y-1 text-sm",
                    for slot in OFFICE_HOURS.iter() {
                        div { key: "{slot.days}", class: "flex justify-between",
                            span { class: "text-text-muted", "{slot.days}" }
                            span { "{slot.hours}" }
                        }
                    }
                }
            }

            div {
                h4 { class: "font-medium mb-2", "Follow Us" }
                div { class: "flex gap-3",
                    for social in CONTACT_SOCIALS.iter().copied() {
                        a {
                            key: "{social.label()}",
                            href: social.href(),
                            target: "_blank",
                            rel: "noopener noreferrer",
                            "aria-label": social.label(),
                            class: "w-9 h-9 rounded-full bg-background-medium flex items-center justify-center hover:bg-primary-600 transition-colors",
                            SocialIcon { social: social, size: 16 }
                        }
                    }
                }
            }
        }
    }
}
