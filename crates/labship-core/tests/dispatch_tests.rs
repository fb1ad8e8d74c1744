#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use common::*;
use labship_core::host::{LedgerStub, MemoryLedger, StaticIdentity};
use labship_core::{
    ContractConfig, Dispatcher, ExistingPackagePolicy, MutationReceipt, Package,
    SequentialStatusTransitionHook, TransitionMode,
};

fn stored(ledger: &MemoryLedger, package_id: &str) -> Package {
    serde_json::from_slice(ledger.raw(package_id).expect("package stored")).unwrap()
}

#[test]
fn test_custody_chain_end_to_end() {
    // Given: a supplier orders P1 to Paris
    let dispatcher = Dispatcher::default();
    let mut ledger = MemoryLedger::new();

    let ordered = run(
        &dispatcher,
        &mut ledger,
        &supplier(),
        &["OrderShipment", order_json("P1", "Paris").as_str()],
    );
    assert!(ordered.is_success(), "{}", ordered.message);

    // When: the carrier ships it
    let shipped = run(&dispatcher, &mut ledger, &carrier(), &["Ship", "P1", "SHIPMENT"]);
    assert!(shipped.is_success(), "{}", shipped.message);
    assert_eq!(stored(&ledger, "P1").status, "SHIPMENT");

    // Then: the consumer sees the new status
    let status = run(
        &dispatcher,
        &mut ledger,
        &consumer(),
        &["GetPackageStatus", "P1"],
    );
    assert!(status.is_success());
    assert_eq!(status.payload_str(), r#"{"PackageID":"P1","Status":"SHIPMENT"}"#);
}

#[test]
fn test_order_shipment_persists_ready_package() {
    let dispatcher = Dispatcher::default();
    let mut ledger = MemoryLedger::new();

    ledger.begin([
        "OrderShipment",
        r#"{"packageId":"P2","description":"lab samples","status":"DELIVERED","destination":"Lyon"}"#,
    ]);
    let tx_id = ledger.tx_id();
    let response = dispatcher.invoke(&mut ledger, &supplier());

    assert!(response.is_success());
    let receipt: MutationReceipt = serde_json::from_slice(&response.payload).unwrap();
    assert_eq!(receipt.txid, tx_id);
    assert!(!receipt.txid.is_empty());
    assert_eq!(receipt.err, None);
    assert_eq!(
        response.payload_str(),
        format!(r#"{{"txid":"{}","err":null}}"#, tx_id)
    );

    let pack = stored(&ledger, "P2");
    assert_eq!(pack.status, "READY");
    assert_eq!(pack.description, "lab samples");
    assert_eq!(pack.destination, "Lyon");
}

#[test]
fn test_order_shipment_without_destination_leaves_store_unchanged() {
    let dispatcher = Dispatcher::default();
    let mut ledger = MemoryLedger::new();

    let response = run(
        &dispatcher,
        &mut ledger,
        &supplier(),
        &["OrderShipment", order_json("P3", "").as_str()],
    );

    assert!(!response.is_success());
    assert_eq!(response.message, "Missing or empty attributes: Destination");
    assert!(ledger.state().is_empty());
    assert_eq!(ledger.write_count(), 0);
}

#[test]
fn test_order_shipment_with_malformed_payload() {
    let dispatcher = Dispatcher::default();
    let mut ledger = MemoryLedger::new();

    let response = run(
        &dispatcher,
        &mut ledger,
        &supplier(),
        &["OrderShipment", "{\"packageId\": "],
    );

    assert_eq!(response.message, "Failed to Unmarshal package input data");
    assert_eq!(ledger.write_count(), 0);
}

#[test]
fn test_authorization_precedes_payload_decoding() {
    let dispatcher = Dispatcher::default();
    let mut ledger = MemoryLedger::new();

    let response = run(
        &dispatcher,
        &mut ledger,
        &carrier(),
        &["OrderShipment", "not json at all"],
    );

    assert_eq!(response.message, "User not authorized");
}

#[test]
fn test_each_command_rejects_wrong_callers() {
    let dispatcher = Dispatcher::default();
    let mut ledger = MemoryLedger::new();
    seed_package(&dispatcher, &mut ledger, "P4");
    let writes_before = ledger.write_count();

    let order = order_json("P4", "Berlin");
    let cases: Vec<(StaticIdentity, Vec<&str>)> = vec![
        (carrier(), vec!["OrderShipment", order.as_str()]),
        (consumer(), vec!["OrderShipment", order.as_str()]),
        (supplier(), vec!["Ship", "P4", "SHIPMENT"]),
        (consumer(), vec!["Ship", "P4", "SHIPMENT"]),
        (supplier(), vec!["Acknowledgement", "P4", "DELIVERED"]),
        (carrier(), vec!["Acknowledgement", "P4", "DELIVERED"]),
        (
            StaticIdentity::new("org3").with_role("carrier"),
            vec!["GetPackageStatus", "P4"],
        ),
        (
            StaticIdentity::new("org2").with_role("consumer"),
            vec!["GetPackageStatus", "P4"],
        ),
        (StaticIdentity::anonymous(), vec!["GetPackageStatus", "P4"]),
    ];

    for (identity, args) in cases {
        let response = run(&dispatcher, &mut ledger, &identity, &args);
        assert!(!response.is_success(), "{:?} should be denied", args);
        assert_eq!(response.message, "User not authorized");
    }

    assert_eq!(ledger.write_count(), writes_before);
    assert_eq!(stored(&ledger, "P4").destination, "Paris");
}

#[test]
fn test_ship_unknown_package_is_read_error_without_write() {
    let dispatcher = Dispatcher::default();
    let mut ledger = MemoryLedger::new();

    let shipped = run(&dispatcher, &mut ledger, &carrier(), &["Ship", "P404", "SHIPMENT"]);
    let acked = run(
        &dispatcher,
        &mut ledger,
        &consumer(),
        &["Acknowledgement", "P404", "DELIVERED"],
    );

    assert_eq!(shipped.message, "Failed to get package P404");
    assert_eq!(acked.message, "Failed to get package P404");
    assert_eq!(ledger.write_count(), 0);
}

#[test]
fn test_acknowledgement_sets_supplied_status() {
    let dispatcher = Dispatcher::default();
    let mut ledger = MemoryLedger::new();
    seed_package(&dispatcher, &mut ledger, "P5");

    let response = run(
        &dispatcher,
        &mut ledger,
        &consumer(),
        &["Acknowledgement", "P5", "DELIVERED"],
    );

    assert!(response.is_success());
    assert_eq!(stored(&ledger, "P5").status, "DELIVERED");
}

#[test]
fn test_status_progression_is_not_enforced_by_default() {
    let dispatcher = Dispatcher::default();
    let mut ledger = MemoryLedger::new();
    seed_package(&dispatcher, &mut ledger, "P6");

    let response = run(&dispatcher, &mut ledger, &carrier(), &["Ship", "P6", "ANYWHERE"]);

    assert!(response.is_success());
    assert_eq!(stored(&ledger, "P6").status, "ANYWHERE");
}

#[test]
fn test_get_package_status_returns_only_id_and_status() {
    let dispatcher = Dispatcher::default();
    let mut ledger = MemoryLedger::new();
    seed_package(&dispatcher, &mut ledger, "P7");

    for identity in [supplier(), carrier(), consumer()] {
        let response = run(&dispatcher, &mut ledger, &identity, &["GetPackageStatus", "P7"]);
        let value: serde_json::Value = serde_json::from_slice(&response.payload).unwrap();
        let obj = value.as_object().unwrap();

        assert_eq!(obj.len(), 2);
        assert_eq!(obj["PackageID"], "P7");
        assert_eq!(obj["Status"], "READY");
    }
}

#[test]
fn test_unknown_and_missing_command() {
    let dispatcher = Dispatcher::default();
    let mut ledger = MemoryLedger::new();

    let unknown = run(&dispatcher, &mut ledger, &supplier(), &["OrderShippment", "{}"]);
    assert!(!unknown.is_success());
    assert_eq!(unknown.message, "Unknown function: OrderShippment");

    let empty = run(&dispatcher, &mut ledger, &supplier(), &[]);
    assert_eq!(empty.message, "No function name supplied");
}

#[test]
fn test_wrong_argument_count() {
    let dispatcher = Dispatcher::default();
    let mut ledger = MemoryLedger::new();

    let response = run(&dispatcher, &mut ledger, &carrier(), &["Ship", "P1"]);

    assert_eq!(
        response.message,
        "Incorrect number of arguments for Ship: expected 2, got 1"
    );
}

#[test]
fn test_corrupt_stored_package() {
    let dispatcher = Dispatcher::default();
    let mut ledger = MemoryLedger::new();
    ledger.insert_raw("P8", b"<xml/>".to_vec());

    let response = run(&dispatcher, &mut ledger, &carrier(), &["GetPackageStatus", "P8"]);

    assert_eq!(response.message, "Failed to Unmarshal package data P8");
}

#[test]
fn test_ledger_read_and_write_failures() {
    let dispatcher = Dispatcher::default();
    let mut seeded = MemoryLedger::new();
    seed_package(&dispatcher, &mut seeded, "P9");

    let mut ledger = FaultyLedger::new(seeded);
    ledger.inner.begin(["Ship", "P9", "SHIPMENT"]);

    ledger.fail_reads = true;
    let read_failure = dispatcher.invoke(&mut ledger, &carrier());
    assert_eq!(read_failure.message, "Failed to get package P9");

    ledger.fail_reads = false;
    ledger.fail_writes = true;
    let write_failure = dispatcher.invoke(&mut ledger, &carrier());
    assert_eq!(write_failure.message, "Failed to write package P9");
    assert_eq!(stored(&ledger.inner, "P9").status, "READY");
}

#[test]
fn test_order_shipment_replaces_existing_by_default() {
    let dispatcher = Dispatcher::default();
    let mut ledger = MemoryLedger::new();
    seed_package(&dispatcher, &mut ledger, "P10");
    run(&dispatcher, &mut ledger, &carrier(), &["Ship", "P10", "SHIPPED"]);

    let response = run(
        &dispatcher,
        &mut ledger,
        &supplier(),
        &["OrderShipment", order_json("P10", "Rome").as_str()],
    );

    assert!(response.is_success());
    let pack = stored(&ledger, "P10");
    assert_eq!(pack.destination, "Rome");
    assert_eq!(pack.status, "READY");
}

#[test]
fn test_order_shipment_reject_policy() {
    let config = ContractConfig {
        on_existing_package: ExistingPackagePolicy::Reject,
        ..ContractConfig::default()
    };
    let dispatcher = Dispatcher::new(config);
    let mut ledger = MemoryLedger::new();
    seed_package(&dispatcher, &mut ledger, "P11");
    let writes = ledger.write_count();

    let response = run(
        &dispatcher,
        &mut ledger,
        &supplier(),
        &["OrderShipment", order_json("P11", "Rome").as_str()],
    );

    assert_eq!(response.message, "Package P11 already exists");
    assert_eq!(ledger.write_count(), writes);
    assert_eq!(stored(&ledger, "P11").destination, "Paris");
}

#[test]
fn test_sequential_transitions_from_config() {
    let config = ContractConfig {
        transitions: TransitionMode::Sequential,
        ..ContractConfig::default()
    };
    let dispatcher = Dispatcher::new(config);
    let mut ledger = MemoryLedger::new();
    seed_package(&dispatcher, &mut ledger, "P12");

    let skipped = run(&dispatcher, &mut ledger, &carrier(), &["Ship", "P12", "SHIPPED"]);
    assert_eq!(
        skipped.message,
        "Illegal status transition for package P12: READY -> SHIPPED"
    );

    for (identity, status) in [
        (carrier(), "SHIPMENT"),
        (carrier(), "SHIPPED"),
        (consumer(), "DELIVERED"),
    ] {
        let command = if status == "DELIVERED" {
            "Acknowledgement"
        } else {
            "Ship"
        };
        let response = run(&dispatcher, &mut ledger, &identity, &[command, "P12", status]);
        assert!(response.is_success(), "{}", response.message);
    }
    assert_eq!(stored(&ledger, "P12").status, "DELIVERED");
}

#[test]
fn test_injected_transition_hook_overrides_config() {
    let dispatcher = Dispatcher::default()
        .with_transition_hook(Box::new(SequentialStatusTransitionHook));
    let mut ledger = MemoryLedger::new();
    seed_package(&dispatcher, &mut ledger, "P13");

    let response = run(&dispatcher, &mut ledger, &carrier(), &["Ship", "P13", "LOST"]);

    assert_eq!(response.message, "Unknown package status for package P13: LOST");
}

#[test]
fn test_custom_access_matrix() {
    let mut config = ContractConfig::default();
    config.access.ship = labship_core::AccessMatrix::new().allow("org3", ["courier"]);
    let dispatcher = Dispatcher::new(config);
    let mut ledger = MemoryLedger::new();
    seed_package(&dispatcher, &mut ledger, "P14");

    let default_carrier = run(&dispatcher, &mut ledger, &carrier(), &["Ship", "P14", "SHIPMENT"]);
    let courier = run(
        &dispatcher,
        &mut ledger,
        &StaticIdentity::new("org3").with_role("courier"),
        &["Ship", "P14", "SHIPMENT"],
    );

    assert_eq!(default_carrier.message, "User not authorized");
    assert!(courier.is_success());
}

#[test]
fn test_order_shipment_with_null_destination_is_validation_failure() {
    let dispatcher = Dispatcher::default();
    let mut ledger = MemoryLedger::new();

    let response = run(
        &dispatcher,
        &mut ledger,
        &supplier(),
        &["OrderShipment", r#"{"packageId":"P15","description":null,"destination":null}"#],
    );

    assert_eq!(response.message, "Missing or empty attributes: Destination");
    assert_eq!(ledger.write_count(), 0);
}
