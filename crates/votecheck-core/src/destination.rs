//! Fixed navigation targets of the client

/// Where a finished flow sends the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Destination {
    RegistrationCheck,
    RegistrationVerified,
    NotRegistered,
    Login,
    AwaitingConfirmation,
}

impl Destination {
    /// Literal route path
    pub fn path(&self) -> &'static str {
        match self {
            Destination::RegistrationCheck => "/registration-check",
            Destination::RegistrationVerified => "/registration-verified",
            Destination::NotRegistered => "/not-registered",
            Destination::Login => "/login",
            Destination::AwaitingConfirmation => "/awaiting-confirmation",
        }
    }

    pub fn from_path(path: &str) -> Option<Self> {
        Self::all().iter().copied().find(|d| d.path() == path)
    }

    pub fn all() -> &'static [Destination] {
        &[
            Destination::RegistrationCheck,
            Destination::RegistrationVerified,
            Destination::NotRegistered,
            Destination::Login,
            Destination::AwaitingConfirmation,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_are_unique_and_resolvable() {
        for destination in Destination::all() {
            assert_eq!(Destination::from_path(destination.path()), Some(*destination));
        }
        assert_eq!(Destination::from_path("/"), None);
    }
}
