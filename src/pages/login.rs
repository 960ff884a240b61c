//! Login page - request an emailed login link.

use dioxus::prelude::*;
use votecheck_core::{FieldName, FieldValue, LoginFlow};
use votecheck_ui::{Button, ButtonVariant, ContentWrapper, ShortTextInput};

use crate::app::Route;
use crate::context::use_session;

#[component]
pub fn Login() -> Element {
    let session = use_session();
    let navigator = use_navigator();
    let known_email = session.voter().email;
    let mut flow = use_signal(move || {
        let mut flow = LoginFlow::new();
        flow.set_email(known_email);
        flow
    });

    let submit = move |event: FormEvent| {
        event.prevent_default();
        let Some(email) = flow.write().begin_submit() else {
            return;
        };
        session.update(|voter| voter.email = email);

        let session = session.clone();
        spawn(async move {
            let outcome = session.send_login_email().await;
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
                    h1 { class: "page-heading", "Log in" }
                    p { "We\u{2019}ll email you a link to manage your reminders." }

                    ShortTextInput {
                        label: FieldName::Email.label().to_string(),
                        input_type: "email".to_string(),
                        value: state.email().to_string(),
                        errors: state.email_errors().to_vec(),
                        autocomplete: "email".to_string(),
                        autofocus: true,
                        required: true,
                        on_change: move |value: FieldValue| {
                            flow.write().set_email(value.into_text());
                        },
                    }

                    div { class: "button-row",
                        Link { class: "btn-transparent", to: Route::RegistrationCheck {}, "Back" }
                        Button {
                            variant: ButtonVariant::Primary,
                            button_type: "submit".to_string(),
                            disabled: !state.can_submit(),
                            "Send Link"
                        }
                    }
                }
            }
        }
    }
}
