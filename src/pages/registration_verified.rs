//! Registration verified page.
//!
//! Confirms the voter is registered and, unless they already opted in,
//! offers an email sign-up for election reminders.

use dioxus::prelude::*;
use votecheck_core::{FieldName, FieldValue, SignUpFlow};
use votecheck_ui::{Button, ButtonVariant, ContentWrapper, ShortTextInput, THEME};

use crate::app::Route;
use crate::context::use_session;

#[component]
pub fn RegistrationVerified() -> Element {
    let session = use_session();
    let navigator = use_navigator();
    let signed_up = session.signed_up();
    let mut flow = use_signal(move || SignUpFlow::new(signed_up));

    let submit = move |event: FormEvent| {
        event.prevent_default();
        let Some(email) = flow.write().begin_submit() else {
            return;
        };
        session.update(|voter| voter.email = email);

        let session = session.clone();
        spawn(async move {
            let outcome = session.sign_up().await;
            if let Some(destination) = flow.write().settle(outcome) {
                navigator.push(Route::from(destination));
            }
        });
    };

    let state = flow();

    rsx! {
        ContentWrapper { background: THEME.color.success.to_string(),
            div { class: "page-box",
                div { class: "result-icon", "\u{2713}" }
                h1 { class: "page-heading", "You\u{2019}re already registered to vote!" }

                if state.shows_sign_up_form() {
                    form { class: "page-form", onsubmit: submit,
                        p { "Sign up to be reminded to vote in local elections." }

                        ShortTextInput {
                            label: FieldName::Email.label().to_string(),
                            input_type: "email".to_string(),
                            value: state.email().to_string(),
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
                                variant: ButtonVariant::Success,
                                button_type: "submit".to_string(),
                                disabled: !state.can_submit(),
                                "Sign Up"
                            }
                        }
                    }
                } else {
                    p { class: "page-note",
                        "We\u{2019}ll remind you to get ready to vote before the next election."
                    }
                }
            }
        }
    }
}
