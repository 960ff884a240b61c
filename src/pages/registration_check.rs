//! Registration check page - first step of the client.
//!
//! Collects name, birth date and zip code, writes them onto the session's
//! voter and asks the API whether that voter is registered.

use dioxus::prelude::*;
use votecheck_core::{CheckFlow, FieldName, FieldUpdate, FieldValue};
use votecheck_ui::{BirthdayInput, Button, ButtonVariant, ContentWrapper, ShortTextInput};

use crate::app::Route;
use crate::context::use_session;

const STATE_LOOKUP_URL: &str = "https://mvic.sos.state.mi.us/";

/// Registration check page component.
#[component]
pub fn RegistrationCheck() -> Element {
    let session = use_session();
    let navigator = use_navigator();
    let mut flow = use_signal(CheckFlow::new);

    let submit = move |event: FormEvent| {
        event.prevent_default();
        let Some(identity) = flow.write().begin_submit() else {
            return;
        };
        session.update(|voter| voter.apply_identity(identity));

        let session = session.clone();
        spawn(async move {
            let outcome = session.check_registration().await;
            if let Some(destination) = flow.write().settle(outcome) {
                navigator.push(Route::from(destination));
            }
        });
    };

    let state = flow();

    rsx! {
        ContentWrapper {
            div { class: "page-box",
                form { class: "page-form", onsubmit: submit,
                    h1 { class: "page-heading",
                        "First, let\u{2019}s check if you\u{2019}re registered to vote."
                    }

                    ShortTextInput {
                        label: FieldName::FirstName.label().to_string(),
                        value: state.first_name().to_string(),
                        errors: state.errors_for(FieldName::FirstName).to_vec(),
                        autocomplete: "given-name".to_string(),
                        autofocus: true,
                        on_change: move |value: FieldValue| {
                            flow.write().apply(FieldUpdate::FirstName(value.into_text()));
                        },
                    }

                    ShortTextInput {
                        label: FieldName::LastName.label().to_string(),
                        value: state.last_name().to_string(),
                        errors: state.errors_for(FieldName::LastName).to_vec(),
                        autocomplete: "family-name".to_string(),
                        on_change: move |value: FieldValue| {
                            flow.write().apply(FieldUpdate::LastName(value.into_text()));
                        },
                    }

                    BirthdayInput {
                        label: FieldName::BirthDate.label().to_string(),
                        value: state.birth_date(),
                        errors: state.errors_for(FieldName::BirthDate).to_vec(),
                        on_change: move |value: FieldValue| {
                            flow.write().apply(FieldUpdate::BirthDate(value.as_date()));
                        },
                    }

                    ShortTextInput {
                        label: FieldName::ZipCode.label().to_string(),
                        value: state.zip_code().to_string(),
                        errors: state.errors_for(FieldName::ZipCode).to_vec(),
                        autocomplete: "postal-code".to_string(),
                        on_change: move |value: FieldValue| {
                            flow.write().apply(FieldUpdate::ZipCode(value.into_text()));
                        },
                    }

                    div { class: "clearfix",
                        Button {
                            variant: ButtonVariant::Primary,
                            button_type: "submit".to_string(),
                            disabled: !state.can_submit(),
                            class: "float-right".to_string(),
                            "Check!"
                        }
                    }

                    div { class: "page-note",
                        p {
                            "You can also use the "
                            a { href: STATE_LOOKUP_URL, "Secretary of State\u{2019}s website" }
                        }
                        p {
                            "Already signed up? "
                            Link { to: Route::Login {}, "Log in" }
                        }
                    }
                }
            }
        }
    }
}
