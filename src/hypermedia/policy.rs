use crate::hypermedia::link::{LinkDescriptor, LinkTarget, Relation, EMPLOYEES, ORDERS};
use crate::lifecycle::OrderLifecycle;
use crate::model::{Employee, Order};

/// Decides which links a client receives for a resource.
///
/// Order action links come straight from
/// [`OrderLifecycle::permitted_actions`]; the policy never re-checks status
/// itself.
#[derive(Debug, Clone, Copy, Default)]
pub struct LinkPolicy {
    lifecycle: OrderLifecycle,
}

impl LinkPolicy {
    pub fn new(lifecycle: OrderLifecycle) -> Self {
        Self { lifecycle }
    }

    /// `self`, `collection`, then one link per permitted action in
    /// declaration order (`complete`, `cancel`).
    pub fn links_for(&self, order: &Order) -> Vec<LinkDescriptor> {
        let item = LinkTarget::Order(order.id);
        let mut links = vec![
            LinkDescriptor::new(Relation::SelfLink, item),
            LinkDescriptor::new(Relation::Collection, LinkTarget::Collection(ORDERS)),
        ];
        links.extend(
            self.lifecycle
                .permitted_actions(order)
                .into_iter()
                .map(|action| LinkDescriptor::new(Relation::Action(action), item)),
        );
        links
    }

    /// Employees have no lifecycle: `self` and `collection` only.
    pub fn employee_links(&self, employee: &Employee) -> Vec<LinkDescriptor> {
        vec![
            LinkDescriptor::new(Relation::SelfLink, LinkTarget::Employee(employee.id)),
            LinkDescriptor::new(Relation::Collection, LinkTarget::Collection(EMPLOYEES)),
        ]
    }

    /// The `self` link of a collection listing.
    pub fn collection_link(&self, name: &'static str) -> LinkDescriptor {
        LinkDescriptor::new(Relation::SelfLink, LinkTarget::Collection(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lifecycle::Action;
    use crate::model::{EmployeeId, OrderId, Status};

    fn order(id: u64, status: Status) -> Order {
        Order::new(OrderId(id), "test order").with_status(status)
    }

    fn pairs(links: &[LinkDescriptor]) -> Vec<(String, String)> {
        links
            .iter()
            .map(|l| (l.relation.to_string(), l.target.to_string()))
            .collect()
    }

    fn rel(a: &str, b: &str) -> (String, String) {
        (a.to_string(), b.to_string())
    }

    #[test]
    fn test_cancelled_order_gets_only_self_and_collection() {
        let links = LinkPolicy::default().links_for(&order(4, Status::Cancelled));
        assert_eq!(pairs(&links), vec![rel("self", "4"), rel("collection", "orders")]);
    }

    #[test]
    fn test_in_progress_order_gets_action_links_in_fixed_order() {
        let links = LinkPolicy::default().links_for(&order(7, Status::InProgress));
        assert_eq!(
            pairs(&links),
            vec![
                rel("self", "7"),
                rel("collection", "orders"),
                rel("complete", "7"),
                rel("cancel", "7"),
            ]
        );
    }

    #[test]
    fn test_completed_order_has_no_action_links() {
        let links = LinkPolicy::default().links_for(&order(1, Status::Completed));
        assert!(links
            .iter()
            .all(|l| !matches!(l.relation, Relation::Action(_))));
        assert_eq!(links.len(), 2);
    }

    #[test]
    fn test_action_links_match_permitted_actions() {
        let lifecycle = OrderLifecycle::new();
        let policy = LinkPolicy::new(lifecycle);
        for status in Status::ALL {
            let o = order(3, status);
            let advertised: Vec<Action> = policy
                .links_for(&o)
                .into_iter()
                .filter_map(|l| match l.relation {
                    Relation::Action(action) => Some(action),
                    _ => None,
                })
                .collect();
            let permitted: Vec<Action> = lifecycle.permitted_actions(&o).into_iter().collect();
            assert_eq!(advertised, permitted);
            for action in advertised {
                assert!(lifecycle.attempt_transition(&o, action).is_ok());
            }
        }
    }

    #[test]
    fn test_links_are_deterministic() {
        let policy = LinkPolicy::default();
        for status in Status::ALL {
            let o = order(11, status);
            assert_eq!(policy.links_for(&o), policy.links_for(&o.clone()));
        }
    }

    #[test]
    fn test_employee_links() {
        let employee = Employee::new(EmployeeId(2), "Frodo", "Baggins", "thief");
        let links = LinkPolicy::default().employee_links(&employee);
        let hrefs: Vec<_> = links.iter().map(LinkDescriptor::href).collect();
        assert_eq!(hrefs, ["/employees/2", "/employees"]);
    }
}
