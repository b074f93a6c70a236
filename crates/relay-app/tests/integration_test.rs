use relay_app::clients::RelayError;
use relay_app::lifecycle::{RelayConfig, RelaySystem, StartupError};
use relay_app::model::{DeliveryStatus, PrepStatus, Role};
use relay_app::shell::{Output, Shell, ShellCommand, QUEUE_FULL};
use relay_framework::ActorClient;

fn config(capacity: usize, auto_process: bool) -> RelayConfig {
    RelayConfig {
        capacity,
        auto_process,
        ..Default::default()
    }
}

/// Full end-to-end run of the three roles against a real actor.
#[tokio::test]
async fn test_order_flow_across_roles() {
    let system = RelaySystem::new(RelayConfig::default()).expect("Failed to start relay");
    let client = &system.client;

    // Customer places an order
    let reply = client.send(Role::Customer, "NEW").await.unwrap();
    assert_eq!(reply.as_deref(), Some("New order created: ORDER#1003"));

    // Restaurant prepares it, addressing it without the prefix
    let reply = client.send(Role::Restaurant, "1003").await.unwrap();
    assert_eq!(reply.as_deref(), Some("Order ORDER#1003 marked as Prepared"));

    // Partner delivers it
    let reply = client.send(Role::DeliveryPartner, "order#1003").await.unwrap();
    assert_eq!(reply.as_deref(), Some("Order ORDER#1003 marked as Delivered"));

    // Customer checks on it
    let reply = client.send(Role::Customer, "ORDER#1003").await.unwrap();
    assert_eq!(
        reply.as_deref(),
        Some(
            "Order ORDER#1003 Details:\n\
             Restaurant: Domino's\n\
             Status: Prepared\n\
             Delivery: Delivered\n\
             Items: Pizza"
        )
    );

    let order = client.order("1003").await.unwrap().expect("Order not found");
    assert_eq!(order.status, PrepStatus::Prepared);
    assert_eq!(order.delivery_status, DeliveryStatus::Delivered);

    assert_eq!(client.queue_depth().await.unwrap(), 0);
    assert_eq!(client.history_length().await.unwrap(), 4);

    system.shutdown().await.expect("Failed to shut down");
}

#[tokio::test]
async fn test_queue_capacity_scenario() {
    let system = RelaySystem::new(config(2, false)).unwrap();
    let client = &system.client;

    assert!(client.submit(Role::Customer, "A").await.unwrap());
    assert!(client.submit(Role::Customer, "B").await.unwrap());
    assert!(!client.submit(Role::Customer, "C").await.unwrap());
    assert_eq!(client.queue_depth().await.unwrap(), 2);

    // "A" is not an order id
    assert_eq!(client.drain_one().await.unwrap().as_deref(), Some("Order not found"));
    assert!(client.submit(Role::Customer, "C").await.unwrap());

    client.drain_one().await.unwrap();
    client.drain_one().await.unwrap();
    assert_eq!(client.drain_one().await.unwrap(), None);

    let history: Vec<String> = client
        .history()
        .await
        .unwrap()
        .into_iter()
        .map(|e| e.payload.content)
        .collect();
    assert_eq!(history, ["A", "B", "C"]);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_unknown_order_leaves_store_unchanged() {
    let system = RelaySystem::new(RelayConfig::default()).unwrap();
    let client = &system.client;
    let before = client.orders().await.unwrap();

    let reply = client.send(Role::Restaurant, "ORDER#9999").await.unwrap();
    assert_eq!(reply.as_deref(), Some("Invalid order ID"));
    let reply = client.send(Role::Customer, "9999").await.unwrap();
    assert_eq!(reply.as_deref(), Some("Order not found"));

    assert_eq!(client.orders().await.unwrap(), before);
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_catalog_queries() {
    let system = RelaySystem::new(RelayConfig::default()).unwrap();
    let client = &system.client;

    let orders = client.orders().await.unwrap();
    let ids: Vec<String> = orders.iter().map(|o| o.id.to_string()).collect();
    assert_eq!(ids, ["ORDER#1000", "ORDER#1001", "ORDER#1002"]);

    let restaurants = client.restaurants().await.unwrap();
    assert_eq!(restaurants.len(), 3);
    assert!(restaurants.iter().all(|r| r.is_open()));

    let partners = client.partners().await.unwrap();
    assert_eq!(partners[0].name, "John");

    assert!(client.order("ORDER#1002").await.unwrap().is_some());
    assert!(client.order("ORDER#4242").await.unwrap().is_none());

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_configured_defaults_drive_new_orders() {
    let config = RelayConfig {
        first_order_number: 500,
        default_restaurant: "Starbucks".into(),
        default_item: "Coffee".into(),
        ..Default::default()
    };
    let system = RelaySystem::new(config).unwrap();
    let client = &system.client;

    let reply = client.send(Role::Customer, "NEW").await.unwrap();
    assert_eq!(reply.as_deref(), Some("New order created: ORDER#503"));
    let order = client.order("503").await.unwrap().unwrap();
    assert_eq!(order.restaurant, "Starbucks");
    assert_eq!(order.items, ["Coffee"]);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_unknown_default_restaurant_reports_processing_error() {
    let config = RelayConfig {
        default_restaurant: "Pizza Hut".into(),
        ..Default::default()
    };
    let system = RelaySystem::new(config).unwrap();

    let reply = system.client.send(Role::Customer, "NEW").await.unwrap();
    assert_eq!(
        reply.as_deref(),
        Some("Error processing request: Unknown restaurant: Pizza Hut")
    );
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_startup_rejects_bad_config() {
    let result = RelaySystem::new(config(0, true));
    assert!(matches!(result, Err(StartupError::Config(_))));
}

#[tokio::test]
async fn test_huge_capacity_starts_and_serves() {
    let system = RelaySystem::new(config(1 << 40, true)).unwrap();

    let reply = system.client.send(Role::Customer, "NEW").await.unwrap();
    assert_eq!(reply.as_deref(), Some("New order created: ORDER#1003"));
    let status = system.client.status().await.unwrap();
    assert_eq!(status.capacity, 1 << 40);
    assert_eq!(status.depth, 0);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_shutdown_waits_for_client_clones() {
    let system = RelaySystem::new(RelayConfig::default()).unwrap();
    let client = system.client.clone();
    let shutdown = tokio::spawn(system.shutdown());

    // The clone keeps the actor serving until it is dropped.
    let reply = client.send(Role::Customer, "NEW").await.unwrap();
    assert_eq!(reply.as_deref(), Some("New order created: ORDER#1003"));
    drop(client);

    shutdown.await.unwrap().unwrap();
}

#[tokio::test]
async fn test_shell_session() {
    let system = RelaySystem::new(config(1, true)).unwrap();
    let mut shell = Shell::new(system.client.clone(), &system.config);

    let Output::Lines(lines) = shell.execute(ShellCommand::parse("NEW")).await.unwrap() else {
        panic!("expected lines");
    };
    assert!(lines[1].ends_with("System: New order created: ORDER#1003"));

    let Output::Lines(lines) = shell
        .execute(ShellCommand::parse("restaurant: ORDER#1003"))
        .await
        .unwrap()
    else {
        panic!("expected lines");
    };
    assert!(lines[0].ends_with("] Restaurant: ORDER#1003"));
    assert!(lines[1].ends_with("System: Order ORDER#1003 marked as Prepared"));

    let Output::Lines(lines) = shell.execute(ShellCommand::Status).await.unwrap() else {
        panic!("expected lines");
    };
    assert_eq!(
        lines,
        ["Messages in Queue: 0/1 | Current Role: Customer | Processed Messages: 2"]
    );

    let Output::Lines(lines) = shell.execute(ShellCommand::Export).await.unwrap() else {
        panic!("expected lines");
    };
    assert_eq!(lines.len(), 2);
    let first: serde_json::Value = serde_json::from_str(&lines[0]).unwrap();
    assert_eq!(first["payload"]["role"], "Customer");
    assert_eq!(first["payload"]["content"], "NEW");
    assert!(first["enqueued_at"].is_string());

    let Output::Lines(lines) = shell.execute(ShellCommand::Orders).await.unwrap() else {
        panic!("expected lines");
    };
    assert_eq!(lines.len(), 4);
    assert_eq!(lines[3], "ORDER#1003  Domino's  Prepared / Pending  Pizza");

    drop(shell);
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_manual_shell_keeps_messages_queued() {
    let system = RelaySystem::new(config(1, false)).unwrap();
    let mut shell = Shell::new(system.client.clone(), &system.config);

    let Output::Lines(lines) = shell.execute(ShellCommand::parse("NEW")).await.unwrap() else {
        panic!("expected lines");
    };
    assert_eq!(lines.len(), 1);

    let Output::Lines(lines) = shell.execute(ShellCommand::parse("NEW")).await.unwrap() else {
        panic!("expected lines");
    };
    assert_eq!(lines, [QUEUE_FULL]);

    let Output::Lines(lines) = shell.execute(ShellCommand::Process).await.unwrap() else {
        panic!("expected lines");
    };
    assert!(lines[0].ends_with("System: New order created: ORDER#1003"));

    drop(shell);
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_relay_error_display() {
    let err = RelayError::ActorCommunicationError("Actor closed".into());
    assert_eq!(err.to_string(), "Relay unavailable: Actor closed");
}
