use order_service::config::Config;
use order_service::framework::ResourceHandle;
use order_service::hypermedia::LinkDescriptor;
use order_service::model::{EmployeeInput, OrderCreate, Status};
use order_service::runtime::{seed, ServiceSystem};

fn hrefs(links: &[LinkDescriptor]) -> Vec<(String, String)> {
    links
        .iter()
        .map(|l| (l.relation.to_string(), l.href()))
        .collect()
}

fn pairs(expected: &[(&str, &str)]) -> Vec<(String, String)> {
    expected
        .iter()
        .map(|(rel, href)| (rel.to_string(), href.to_string()))
        .collect()
}

/// Full end-to-end test with both real stores.
#[tokio::test]
async fn test_seeded_system() {
    let system = ServiceSystem::new(&Config::default());
    seed(&system).await.expect("Failed to seed");

    let employees = system.employee_client.list().await.unwrap();
    let names: Vec<String> = employees.iter().map(|e| e.name()).collect();
    assert_eq!(names, vec!["Bilbo Baggins", "Frodo Baggins"]);

    let orders = system.order_client.list().await.unwrap();
    let summary: Vec<(&str, Status)> = orders
        .iter()
        .map(|o| (o.description.as_str(), o.status))
        .collect();
    assert_eq!(
        summary,
        vec![("MacBook Pro", Status::Completed), ("iPhone", Status::InProgress)]
    );

    // The completed order offers no actions, the open one offers both.
    assert_eq!(
        hrefs(&system.link_policy.links_for(&orders[0])),
        pairs(&[("self", "/orders/1"), ("collection", "/orders")])
    );
    assert_eq!(
        hrefs(&system.link_policy.links_for(&orders[1])),
        pairs(&[
            ("self", "/orders/2"),
            ("collection", "/orders"),
            ("complete", "/orders/2/complete"),
            ("cancel", "/orders/2/cancel"),
        ])
    );

    system.shutdown().await.expect("Failed to shutdown system");
}

/// Links follow the stored status through a transition.
#[tokio::test]
async fn test_links_follow_transitions() {
    let system = ServiceSystem::new(&Config::default());

    let order = system
        .order_client
        .create_order(OrderCreate::new("Keyboard"))
        .await
        .unwrap();
    assert_eq!(system.link_policy.links_for(&order).len(), 4);

    let cancelled = system.order_client.cancel(order.id).await.unwrap();
    assert_eq!(
        hrefs(&system.link_policy.links_for(&cancelled)),
        pairs(&[("self", "/orders/1"), ("collection", "/orders")])
    );

    // Every advertised action is accepted by the store.
    let open = system
        .order_client
        .create_order(OrderCreate::new("Mouse"))
        .await
        .unwrap();
    for action in system.lifecycle.permitted_actions(&open) {
        let fresh = system
            .order_client
            .create_order(OrderCreate::new("Mouse"))
            .await
            .unwrap();
        assert!(system.order_client.transition(fresh.id, action).await.is_ok());
    }

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_employee_crud() {
    let system = ServiceSystem::new(&Config::default());
    let employees = &system.employee_client;

    let samwise = employees
        .create_employee(EmployeeInput::new("Samwise Gamgee", "gardener"))
        .await
        .unwrap();
    assert_eq!(samwise.first_name, "Samwise");
    assert_eq!(samwise.last_name, "Gamgee");

    let replaced = employees
        .replace_employee(samwise.id, EmployeeInput::new("Samwise Gamgee", "ring bearer"))
        .await
        .unwrap();
    assert_eq!(replaced.id, samwise.id);
    assert_eq!(replaced.role, "ring bearer");

    employees.delete(samwise.id).await.unwrap();
    assert!(employees.find(samwise.id).await.is_err());

    system.shutdown().await.unwrap();
}

/// Shutdown waits for stores only after every client clone is gone.
#[tokio::test]
async fn test_shutdown_after_clones_dropped() {
    let system = ServiceSystem::new(&Config::default());
    let extra = system.order_client.clone();
    extra
        .create_order(OrderCreate::new("Monitor"))
        .await
        .unwrap();
    drop(extra);

    system.shutdown().await.unwrap();
}
