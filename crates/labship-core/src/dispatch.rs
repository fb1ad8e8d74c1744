//! Invocation entry point
//!
//! [`Dispatcher::invoke`] is the single surface the host calls. For each
//! invocation it:
//!
//! 1. resolves `args[0]` through the command table
//! 2. checks the caller against that command's access matrix
//! 3. decodes the remaining arguments into a typed [`Command`]
//! 4. runs the handler against the package store
//! 5. encodes the success payload, or the failure message
//!
//! Every failure is converted to a flat message at the point it surfaces;
//! nothing is retried. Mutating handlers write at most once, as their last
//! step, so a failed invocation leaves no state behind.
//!
//! ## Example
//!
//! ```
//! use labship_core::{ContractConfig, Dispatcher};
//! use labship_core::host::{MemoryLedger, StaticIdentity};
//!
//! let dispatcher = Dispatcher::new(ContractConfig::default());
//! let mut ledger = MemoryLedger::new();
//! let supplier = StaticIdentity::new("org1").with_role("supplier");
//!
//! ledger.begin(["OrderShipment", r#"{"packageId":"P1","destination":"Paris"}"#]);
//! let response = dispatcher.invoke(&mut ledger, &supplier);
//! assert!(response.is_success());
//! ```

use std::sync::Arc;
use std::time::Instant;

use labship_core_types::schema::{FIELD_INVOCATION_ID, FIELD_PACKAGE_ID, FIELD_ROLE};
use labship_core_types::InvocationContext;

use crate::access_control::authorize;
use crate::commands::{Command, CommandKind};
use crate::config::ContractConfig;
use crate::errors::{ExError, LabshipError, Result};
use crate::host::{ClientIdentity, LedgerStub};
use crate::identity::CallerClaims;
use crate::logging_facility::{InvocationObserver, TracingObserver};
use crate::ops::{package_ops, PackageStore};
use crate::policy::StatusTransitionHook;
use crate::response::{CommandOutput, Response};

/// Routes invocations to command handlers
///
/// Holds only immutable configuration and injected capabilities, so one
/// dispatcher can serve any number of independent invocations.
pub struct Dispatcher {
    config: ContractConfig,
    transitions: Box<dyn StatusTransitionHook>,
    observer: Arc<dyn InvocationObserver>,
}

impl Dispatcher {
    /// Create a dispatcher reporting to [`TracingObserver`]
    pub fn new(config: ContractConfig) -> Self {
        let transitions = config.transitions.hook();
        Self {
            config,
            transitions,
            observer: Arc::new(TracingObserver),
        }
    }

    /// Replace the invocation observer
    pub fn with_observer(mut self, observer: Arc<dyn InvocationObserver>) -> Self {
        self.observer = observer;
        self
    }

    /// Replace the status transition hook chosen by the configuration
    pub fn with_transition_hook(mut self, hook: Box<dyn StatusTransitionHook>) -> Self {
        self.transitions = hook;
        self
    }

    pub fn config(&self) -> &ContractConfig {
        &self.config
    }

    /// Instantiation hook: succeeds with the contract version
    pub fn init(&self, stub: &mut dyn LedgerStub) -> Response {
        tracing::info!(
            version = %self.config.version,
            tx_id = %stub.tx_id(),
            "contract instantiated"
        );
        Response::success(self.config.version.as_bytes().to_vec())
    }

    /// Run one command invocation
    pub fn invoke(&self, stub: &mut dyn LedgerStub, identity: &dyn ClientIdentity) -> Response {
        let start = Instant::now();
        let args = stub.args();
        let ctx = InvocationContext::new().with_tx_id(stub.tx_id());

        let kind = match resolve(&args) {
            Ok(kind) => kind,
            Err(err) => {
                let err: ExError = err.into();
                self.observer
                    .on_error(&ctx, "invoke", &err, elapsed_ms(start));
                return Response::error(err.response_message());
            }
        };

        let op = kind.name();
        let _span = tracing::info_span!(
            "invoke",
            command = op,
            { FIELD_INVOCATION_ID } = ctx.invocation_id.as_str()
        )
        .entered();
        self.observer.on_start(&ctx, op);

        match self.execute(kind, &args[1..], stub, identity, &ctx) {
            Ok(payload) => {
                self.observer.on_end(&ctx, op, elapsed_ms(start));
                Response::success(payload)
            }
            Err(err) => {
                let err: ExError = err.into();
                self.observer.on_error(&ctx, op, &err, elapsed_ms(start));
                Response::error(err.response_message())
            }
        }
    }

    fn execute(
        &self,
        kind: CommandKind,
        args: &[Vec<u8>],
        stub: &mut dyn LedgerStub,
        identity: &dyn ClientIdentity,
        ctx: &InvocationContext,
    ) -> Result<Vec<u8>> {
        let claims = CallerClaims::new(identity);
        let role = authorize(&claims, self.config.access.matrix_for(kind))?;
        tracing::debug!(command = %kind, { FIELD_ROLE } = role.as_str(), "caller authorized");

        let command = kind.decode(args)?;
        tracing::debug!(
            command = command.kind().name(),
            { FIELD_PACKAGE_ID } = command.package_id(),
            mutating = kind.spec().mutating,
            "arguments decoded"
        );
        let mut store = PackageStore::new(stub);
        self.apply(&mut store, command, ctx.tx_id_or_empty())?
            .encode()
    }

    /// Run an already authorized and decoded command
    ///
    /// # Errors
    /// Any handler error; see [`package_ops`].
    pub fn apply(
        &self,
        store: &mut PackageStore<'_>,
        command: Command,
        tx_id: &str,
    ) -> Result<CommandOutput> {
        match command {
            Command::OrderShipment { package } => package_ops::order_shipment(
                store,
                package,
                self.config.on_existing_package,
                tx_id,
            )
            .map(CommandOutput::Receipt),

            Command::Ship { package_id, status }
            | Command::Acknowledgement { package_id, status } => package_ops::update_status(
                store,
                &package_id,
                status,
                self.transitions.as_ref(),
                tx_id,
            )
            .map(CommandOutput::Receipt),

            Command::GetPackageStatus { package_id } => {
                package_ops::get_package_status(store, &package_id).map(CommandOutput::Status)
            }
        }
    }
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::new(ContractConfig::default())
    }
}

/// Resolve `args[0]` to a command
fn resolve(args: &[Vec<u8>]) -> Result<CommandKind> {
    let name = args.first().ok_or(LabshipError::MissingCommand)?;
    let name = String::from_utf8_lossy(name);
    CommandKind::lookup(&name).ok_or_else(|| LabshipError::UnknownCommand {
        name: name.into_owned(),
    })
}

fn elapsed_ms(start: Instant) -> u64 {
    start.elapsed().as_millis() as u64
}
