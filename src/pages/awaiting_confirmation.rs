//! Awaiting confirmation page - shown after an email was sent.

use dioxus::prelude::*;
use votecheck_ui::ContentWrapper;

use crate::app::Route;
use crate::context::use_session;

#[component]
pub fn AwaitingConfirmation() -> Element {
    let email = use_session().voter().email;

    rsx! {
        ContentWrapper {
            div { class: "page-box",
                div { class: "result-icon", "\u{2709}" }
                h1 { class: "page-heading", "Check your email" }
                if email.is_empty() {
                    p { "We sent you a confirmation link." }
                } else {
                    p { "We sent a confirmation link to " strong { "{email}" } "." }
                }
                p { class: "page-note",
                    "Wrong address? "
                    Link { to: Route::Login {}, "Send it again" }
                }
            }
        }
    }
}
