//! Actions a client can request on an order.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt::Display;

/// A named lifecycle action.
///
/// The variant order is the order links are advertised in; `Ord` is derived
/// from it, so a [`PermittedActions`] set iterates `complete` before `cancel`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    Complete,
    Cancel,
}

impl Action {
    pub const ALL: [Action; 2] = [Action::Complete, Action::Cancel];

    /// The action name, also used as its link relation.
    pub fn name(&self) -> &'static str {
        match self {
            Action::Complete => "complete",
            Action::Cancel => "cancel",
        }
    }
}

impl Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Actions allowed from an order's current status, in declaration order.
pub type PermittedActions = BTreeSet<Action>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_iterates_in_declaration_order() {
        let set: PermittedActions = [Action::Cancel, Action::Complete].into_iter().collect();
        let names: Vec<_> = set.iter().map(Action::name).collect();
        assert_eq!(names, ["complete", "cancel"]);
    }

    #[test]
    fn test_wire_name_matches_relation_name() {
        for action in Action::ALL {
            assert_eq!(
                serde_json::to_value(action).unwrap(),
                serde_json::Value::String(action.name().to_string())
            );
        }
    }
}
