use crate::lifecycle::{Action, PermittedActions};
use crate::model::{Order, OrderId, Status};

/// Every allowed `(from, action, to)` edge. Anything not listed is rejected,
/// which makes `Completed` and `Cancelled` terminal.
const TRANSITIONS: &[(Status, Action, Status)] = &[
    (Status::InProgress, Action::Complete, Status::Completed),
    (Status::InProgress, Action::Cancel, Status::Cancelled),
];

/// A requested action is not permitted from the order's current status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("cannot {attempted_action} order {order_id} in status {current_status}")]
pub struct TransitionError {
    pub order_id: OrderId,
    pub attempted_action: Action,
    pub current_status: Status,
}

/// The order state machine.
///
/// Stateless: build one at startup and hand copies to whoever needs it (the
/// order store receives it as its context, the link policy holds one).
/// Both transition validation and link derivation go through
/// [`permitted_actions`](Self::permitted_actions), so an advertised link is
/// always an action that would succeed.
#[derive(Debug, Clone, Copy, Default)]
pub struct OrderLifecycle;

impl OrderLifecycle {
    pub fn new() -> Self {
        Self
    }

    /// `{complete, cancel}` for an order in progress, empty otherwise.
    pub fn permitted_actions(&self, order: &Order) -> PermittedActions {
        TRANSITIONS
            .iter()
            .filter(|(from, _, _)| *from == order.status)
            .map(|(_, action, _)| *action)
            .collect()
    }

    pub fn is_permitted(&self, order: &Order, action: Action) -> bool {
        self.permitted_actions(order).contains(&action)
    }

    /// Returns `order` moved to the status `action` leads to.
    ///
    /// Pure: the caller persists the returned order, and only on success.
    pub fn attempt_transition(
        &self,
        order: &Order,
        action: Action,
    ) -> Result<Order, TransitionError> {
        let rejected = TransitionError {
            order_id: order.id,
            attempted_action: action,
            current_status: order.status,
        };
        if !self.is_permitted(order, action) {
            return Err(rejected);
        }
        TRANSITIONS
            .iter()
            .find(|(from, edge, _)| *from == order.status && *edge == action)
            .map(|(_, _, to)| order.clone().with_status(*to))
            .ok_or(rejected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order(id: u64, status: Status) -> Order {
        Order::new(OrderId(id), "test order").with_status(status)
    }

    #[test]
    fn test_in_progress_permits_complete_and_cancel() {
        let actions = OrderLifecycle::new().permitted_actions(&order(1, Status::InProgress));
        assert_eq!(
            actions.into_iter().collect::<Vec<_>>(),
            vec![Action::Complete, Action::Cancel]
        );
    }

    #[test]
    fn test_terminal_states_permit_nothing() {
        let lifecycle = OrderLifecycle::new();
        for status in [Status::Completed, Status::Cancelled] {
            assert!(lifecycle.permitted_actions(&order(1, status)).is_empty());
        }
    }

    #[test]
    fn test_transition_succeeds_iff_action_is_permitted() {
        let lifecycle = OrderLifecycle::new();
        for status in Status::ALL {
            let o = order(9, status);
            for action in Action::ALL {
                assert_eq!(
                    lifecycle.attempt_transition(&o, action).is_ok(),
                    lifecycle.permitted_actions(&o).contains(&action),
                    "{status} / {action}"
                );
            }
        }
    }

    #[test]
    fn test_complete_moves_to_completed() {
        let done = OrderLifecycle::new()
            .attempt_transition(&order(2, Status::InProgress), Action::Complete)
            .unwrap();
        assert_eq!(done.status, Status::Completed);
        assert_eq!(done.id, OrderId(2));
        assert_eq!(done.description, "test order");
    }

    #[test]
    fn test_cancel_in_progress_order() {
        let cancelled = OrderLifecycle::new()
            .attempt_transition(&order(4, Status::InProgress), Action::Cancel)
            .unwrap();
        assert_eq!(cancelled.status, Status::Cancelled);
    }

    #[test]
    fn test_cancel_cancelled_order_is_rejected() {
        let err = OrderLifecycle::new()
            .attempt_transition(&order(4, Status::Cancelled), Action::Cancel)
            .unwrap_err();
        assert_eq!(
            err,
            TransitionError {
                order_id: OrderId(4),
                attempted_action: Action::Cancel,
                current_status: Status::Cancelled,
            }
        );
        assert_eq!(err.to_string(), "cannot cancel order 4 in status CANCELLED");
    }

    #[test]
    fn test_terminal_states_absorb_every_sequence() {
        let lifecycle = OrderLifecycle::new();
        for first in Action::ALL {
            let mut current = lifecycle
                .attempt_transition(&order(5, Status::InProgress), first)
                .unwrap();
            let settled = current.status;
            for next in [Action::Cancel, Action::Complete, Action::Complete, Action::Cancel] {
                let err = lifecycle.attempt_transition(&current, next).unwrap_err();
                assert_eq!(err.current_status, settled);
                current = lifecycle.attempt_transition(&current, next).unwrap_or(current);
                assert_eq!(current.status, settled);
            }
        }
    }
}
