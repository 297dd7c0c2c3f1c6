use crate::lifecycle::Action;
use crate::model::{EmployeeId, OrderId};
use std::fmt::Display;

/// Name of the order collection resource.
pub const ORDERS: &str = "orders";
/// Name of the employee collection resource.
pub const EMPLOYEES: &str = "employees";

/// The relation a link has to the resource carrying it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Relation {
    /// `self`: the resource itself.
    SelfLink,
    /// `collection`: the aggregate listing the resource belongs to.
    Collection,
    /// A follow-up lifecycle action, named after the action.
    Action(Action),
}

impl Relation {
    pub fn name(&self) -> &'static str {
        match self {
            Relation::SelfLink => "self",
            Relation::Collection => "collection",
            Relation::Action(action) => action.name(),
        }
    }
}

impl Display for Relation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// What a link points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkTarget {
    Order(OrderId),
    Employee(EmployeeId),
    Collection(&'static str),
}

impl Display for LinkTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LinkTarget::Order(id) => write!(f, "{}", id),
            LinkTarget::Employee(id) => write!(f, "{}", id),
            LinkTarget::Collection(name) => f.write_str(name),
        }
    }
}

/// A `{relation, target}` pair exposed to clients.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinkDescriptor {
    pub relation: Relation,
    pub target: LinkTarget,
}

impl LinkDescriptor {
    pub fn new(relation: Relation, target: LinkTarget) -> Self {
        Self { relation, target }
    }

    /// Server-relative URL of the link.
    ///
    /// Action links address the action under the item: `/orders/7/complete`.
    pub fn href(&self) -> String {
        let base = match self.target {
            LinkTarget::Order(id) => format!("/{}/{}", ORDERS, id),
            LinkTarget::Employee(id) => format!("/{}/{}", EMPLOYEES, id),
            LinkTarget::Collection(name) => format!("/{}", name),
        };
        match self.relation {
            Relation::Action(action) => format!("{}/{}", base, action.name()),
            Relation::SelfLink | Relation::Collection => base,
        }
    }
}
