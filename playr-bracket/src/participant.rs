//! Participant - entrant identity as the engine sees it

use serde::{Deserialize, Serialize};

/// A tournament entrant.
///
/// The engine only reads the identity fields; the wider application
/// user model (rankings, avatars, contact data) stays with the caller.
/// Ids must be unique within one roster - that contract belongs to the
/// roster provider.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    /// Unique id within the roster
    pub id: String,
    /// Display name shown in bracket views
    pub name: String,
}

impl Participant {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_participant_new() {
        let p = Participant::new("u-7", "Carla");
        assert_eq!(p.id, "u-7");
        assert_eq!(p.name, "Carla");
    }
}
