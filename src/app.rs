use dioxus::prelude::*;
use votecheck_core::Destination;
use votecheck_ui::global_styles;

use crate::pages::{
    AwaitingConfirmation, Login, NotRegistered, RegistrationCheck, RegistrationVerified,
};

/// Application routes.
///
/// - `/` - Redirects to the registration check
/// - `/registration-check` - Name, birth date and zip code form
/// - `/registration-verified` - Registered; optional reminder sign-up
/// - `/not-registered` - No matching registration found
/// - `/login` - Request a login email
/// - `/awaiting-confirmation` - Check your inbox
#[derive(Clone, Debug, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[redirect("/", || Route::RegistrationCheck {})]
    #[route("/registration-check")]
    RegistrationCheck {},
    #[route("/registration-verified")]
    RegistrationVerified {},
    #[route("/not-registered")]
    NotRegistered {},
    #[route("/login")]
    Login {},
    #[route("/awaiting-confirmation")]
    AwaitingConfirmation {},
}

impl From<Destination> for Route {
    fn from(destination: Destination) -> Self {
        match destination {
            Destination::RegistrationCheck => Route::RegistrationCheck {},
            Destination::RegistrationVerified => Route::RegistrationVerified {},
            Destination::NotRegistered => Route::NotRegistered {},
            Destination::Login => Route::Login {},
            Destination::AwaitingConfirmation => Route::AwaitingConfirmation {},
        }
    }
}

/// Root application component.
///
/// Provides global styles and routing. The voter session is injected as
/// launch context by `main`.
#[component]
pub fn App() -> Element {
    let styles = use_hook(global_styles);

    rsx! {
        style { {styles} }
        Router::<Route> {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn routes_match_destination_paths() {
        for destination in Destination::all() {
            assert_eq!(Route::from(*destination).to_string(), destination.path());
        }
    }
}
