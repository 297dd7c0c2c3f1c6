//! HAL-style JSON representations.
//!
//! ```json
//! {
//!   "id": 7, "description": "iPhone", "status": "IN_PROGRESS",
//!   "_links": {
//!     "self": { "href": "/orders/7" },
//!     "collection": { "href": "/orders" },
//!     "complete": { "href": "/orders/7/complete" },
//!     "cancel": { "href": "/orders/7/cancel" }
//!   }
//! }
//! ```
//!
//! Links are written in the order the policy produced them.

use crate::hypermedia::link::{LinkDescriptor, Relation};
use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

/// Ordered link list, serialized as `{ rel: { "href": … } }`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Links(pub Vec<LinkDescriptor>);

impl Serialize for Links {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        #[derive(Serialize)]
        struct Href {
            href: String,
        }

        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for link in &self.0 {
            map.serialize_entry(link.relation.name(), &Href { href: link.href() })?;
        }
        map.end()
    }
}

/// A single resource with its links.
#[derive(Debug, Clone, Serialize)]
pub struct EntityModel<T> {
    #[serde(flatten)]
    pub content: T,
    #[serde(rename = "_links")]
    pub links: Links,
}

impl<T> EntityModel<T> {
    pub fn new(content: T, links: Vec<LinkDescriptor>) -> Self {
        Self {
            content,
            links: Links(links),
        }
    }

    /// The `self` href, used for `Location` headers.
    pub fn self_href(&self) -> Option<String> {
        self.links
            .0
            .iter()
            .find(|l| l.relation == Relation::SelfLink)
            .map(LinkDescriptor::href)
    }
}

/// A listing: `{ "_embedded": { <name>: [...] }, "_links": { "self": … } }`.
#[derive(Debug, Clone)]
pub struct CollectionModel<T> {
    pub name: &'static str,
    pub items: Vec<EntityModel<T>>,
    pub links: Links,
}

impl<T> CollectionModel<T> {
    pub fn new(name: &'static str, items: Vec<EntityModel<T>>, links: Vec<LinkDescriptor>) -> Self {
        Self {
            name,
            items,
            links: Links(links),
        }
    }
}

impl<T: Serialize> Serialize for CollectionModel<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        struct Embedded<'a, T> {
            name: &'static str,
            items: &'a [EntityModel<T>],
        }

        impl<T: Serialize> Serialize for Embedded<'_, T> {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry(self.name, self.items)?;
                map.end()
            }
        }

        let mut map = serializer.serialize_map(Some(2))?;
        map.serialize_entry(
            "_embedded",
            &Embedded {
                name: self.name,
                items: &self.items,
            },
        )?;
        map.serialize_entry("_links", &self.links)?;
        map.end()
    }
}
