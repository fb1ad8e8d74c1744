use std::cell::RefCell;

use labship_core::host::{ClientIdentity, HostError, LedgerStub, MemoryLedger, StaticIdentity};
use labship_core::{Dispatcher, Response};

#[allow(dead_code)]
pub fn supplier() -> StaticIdentity {
    StaticIdentity::new("org1")
        .with_id("x509::CN=supplier1")
        .with_role("supplier")
}

#[allow(dead_code)]
pub fn carrier() -> StaticIdentity {
    StaticIdentity::new("org2")
        .with_id("x509::CN=carrier1")
        .with_role("carrier")
}

#[allow(dead_code)]
pub fn consumer() -> StaticIdentity {
    StaticIdentity::new("org1")
        .with_id("x509::CN=consumer1")
        .with_role("consumer")
}

/// OrderShipment payload in wire format
#[allow(dead_code)]
pub fn order_json(package_id: &str, destination: &str) -> String {
    serde_json::json!({
        "packageId": package_id,
        "description": "test parcel",
        "status": "",
        "destination": destination,
    })
    .to_string()
}

/// Start an invocation on `ledger` and run it
#[allow(dead_code)]
pub fn run(
    dispatcher: &Dispatcher,
    ledger: &mut MemoryLedger,
    identity: &dyn ClientIdentity,
    args: &[&str],
) -> Response {
    ledger.begin(args.iter().copied());
    dispatcher.invoke(ledger, identity)
}

/// Order `package_id` as the default supplier
#[allow(dead_code)]
pub fn seed_package(dispatcher: &Dispatcher, ledger: &mut MemoryLedger, package_id: &str) {
    let response = run(
        dispatcher,
        ledger,
        &supplier(),
        &["OrderShipment", order_json(package_id, "Paris").as_str()],
    );
    assert!(response.is_success(), "seed failed: {}", response.message);
}

/// Identity that records every role assertion it is asked for
#[allow(dead_code)]
pub struct RecordingIdentity {
    inner: StaticIdentity,
    asserted: RefCell<Vec<String>>,
}

#[allow(dead_code)]
impl RecordingIdentity {
    pub fn new(inner: StaticIdentity) -> Self {
        Self {
            inner,
            asserted: RefCell::new(Vec::new()),
        }
    }

    pub fn asserted(&self) -> Vec<String> {
        self.asserted.borrow().clone()
    }
}

impl ClientIdentity for RecordingIdentity {
    fn msp_id(&self) -> Result<String, HostError> {
        self.inner.msp_id()
    }

    fn id(&self) -> Result<String, HostError> {
        self.inner.id()
    }

    fn assert_attribute_value(&self, name: &str, value: &str) -> Result<(), HostError> {
        self.asserted.borrow_mut().push(value.to_string());
        self.inner.assert_attribute_value(name, value)
    }

    fn attribute_value(&self, name: &str) -> Result<Option<String>, HostError> {
        self.inner.attribute_value(name)
    }
}

/// Ledger whose reads or writes fail on demand
#[allow(dead_code)]
pub struct FaultyLedger {
    pub inner: MemoryLedger,
    pub fail_reads: bool,
    pub fail_writes: bool,
}

#[allow(dead_code)]
impl FaultyLedger {
    pub fn new(inner: MemoryLedger) -> Self {
        Self {
            inner,
            fail_reads: false,
            fail_writes: false,
        }
    }
}

impl LedgerStub for FaultyLedger {
    fn args(&self) -> Vec<Vec<u8>> {
        self.inner.args()
    }

    fn get_state(&self, key: &str) -> Result<Option<Vec<u8>>, HostError> {
        if self.fail_reads {
            return Err(HostError::new("peer unavailable"));
        }
        self.inner.get_state(key)
    }

    fn put_state(&mut self, key: &str, value: Vec<u8>) -> Result<(), HostError> {
        if self.fail_writes {
            return Err(HostError::new("write set rejected"));
        }
        self.inner.put_state(key, value)
    }

    fn tx_id(&self) -> String {
        self.inner.tx_id()
    }
}
