//! Not registered page - no matching registration was found.

use dioxus::prelude::*;
use votecheck_ui::{ContentWrapper, THEME};

use crate::app::Route;

const REGISTER_URL: &str = "https://www.michigan.gov/sos/elections/voting/register-to-vote";

#[component]
pub fn NotRegistered() -> Element {
    rsx! {
        ContentWrapper { background: THEME.color.warn.to_string(),
            div { class: "page-box",
                div { class: "result-icon result-warn", "!" }
                h1 { class: "page-heading", "We couldn\u{2019}t find your registration." }
                p {
                    "Double-check the spelling of your name and your zip code, or "
                    a { href: REGISTER_URL, "register to vote" }
                    "."
                }
                div { class: "button-row",
                    Link { class: "btn-primary", to: Route::RegistrationCheck {}, "Try Again" }
                }
            }
        }
    }
}
