//! Command inventory
//!
//! Each invocation names one of a closed set of commands. The name is
//! resolved through [`COMMAND_TABLE`], then the positional byte arguments are
//! decoded into the command's typed variant. Authorization happens between
//! those two steps, so argument decoding is never attempted for a caller who
//! may not run the command.

use crate::errors::{LabshipError, Result};
use crate::model::Package;

/// Names of the commands the contract accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandKind {
    OrderShipment,
    Ship,
    Acknowledgement,
    GetPackageStatus,
}

/// Entry of the command lookup table
#[derive(Debug, Clone, Copy)]
pub struct CommandSpec {
    pub name: &'static str,
    pub kind: CommandKind,
    /// Positional arguments after the command name
    pub arity: usize,
    /// Whether the command writes world state
    pub mutating: bool,
}

/// Command lookup table, matched by exact name
pub const COMMAND_TABLE: &[CommandSpec] = &[
    CommandSpec {
        name: "OrderShipment",
        kind: CommandKind::OrderShipment,
        arity: 1,
        mutating: true,
    },
    CommandSpec {
        name: "Ship",
        kind: CommandKind::Ship,
        arity: 2,
        mutating: true,
    },
    CommandSpec {
        name: "Acknowledgement",
        kind: CommandKind::Acknowledgement,
        arity: 2,
        mutating: true,
    },
    CommandSpec {
        name: "GetPackageStatus",
        kind: CommandKind::GetPackageStatus,
        arity: 1,
        mutating: false,
    },
];

impl CommandKind {
    /// Resolve a command name (exact, case-sensitive)
    pub fn lookup(name: &str) -> Option<CommandKind> {
        COMMAND_TABLE
            .iter()
            .find(|spec| spec.name == name)
            .map(|spec| spec.kind)
    }

    /// Table entry for this command
    pub fn spec(&self) -> &'static CommandSpec {
        let index = match self {
            CommandKind::OrderShipment => 0,
            CommandKind::Ship => 1,
            CommandKind::Acknowledgement => 2,
            CommandKind::GetPackageStatus => 3,
        };
        &COMMAND_TABLE[index]
    }

    pub fn name(&self) -> &'static str {
        self.spec().name
    }

    /// Decode positional arguments (excluding the command name)
    ///
    /// # Errors
    /// * `InvalidArguments` - wrong argument count
    /// * `InvalidArgumentEncoding` - an id or status is not UTF-8
    /// * `InvalidPayload` - the OrderShipment document does not decode
    pub fn decode(&self, args: &[Vec<u8>]) -> Result<Command> {
        let expected = self.spec().arity;
        if args.len() != expected {
            return Err(LabshipError::InvalidArguments {
                command: self.name().to_string(),
                expected,
                got: args.len(),
            });
        }

        match self {
            CommandKind::OrderShipment => {
                let package: Package = serde_json::from_slice(&args[0]).map_err(|e| {
                    LabshipError::InvalidPayload {
                        reason: e.to_string(),
                    }
                })?;
                Ok(Command::OrderShipment { package })
            }
            CommandKind::Ship => Ok(Command::Ship {
                package_id: self.text_arg(args, 0)?,
                status: self.text_arg(args, 1)?,
            }),
            CommandKind::Acknowledgement => Ok(Command::Acknowledgement {
                package_id: self.text_arg(args, 0)?,
                status: self.text_arg(args, 1)?,
            }),
            CommandKind::GetPackageStatus => Ok(Command::GetPackageStatus {
                package_id: self.text_arg(args, 0)?,
            }),
        }
    }

    fn text_arg(&self, args: &[Vec<u8>], index: usize) -> Result<String> {
        String::from_utf8(args[index].clone()).map_err(|_| LabshipError::InvalidArgumentEncoding {
            command: self.name().to_string(),
            position: index + 1,
        })
    }
}

impl std::fmt::Display for CommandKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A decoded command with its typed arguments
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Create or replace a package; status forced to READY
    OrderShipment { package: Package },

    /// Carrier updates the status of a package
    Ship { package_id: String, status: String },

    /// Consumer acknowledges reception by updating the status
    Acknowledgement { package_id: String, status: String },

    /// Read the status of a package
    GetPackageStatus { package_id: String },
}

impl Command {
    pub fn kind(&self) -> CommandKind {
        match self {
            Command::OrderShipment { .. } => CommandKind::OrderShipment,
            Command::Ship { .. } => CommandKind::Ship,
            Command::Acknowledgement { .. } => CommandKind::Acknowledgement,
            Command::GetPackageStatus { .. } => CommandKind::GetPackageStatus,
        }
    }

    /// Package the command targets
    pub fn package_id(&self) -> &str {
        match self {
            Command::OrderShipment { package } => &package.package_id,
            Command::Ship { package_id, .. }
            | Command::Acknowledgement { package_id, .. }
            | Command::GetPackageStatus { package_id } => package_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(values: &[&str]) -> Vec<Vec<u8>> {
        values.iter().map(|v| v.as_bytes().to_vec()).collect()
    }

    #[test]
    fn test_lookup_is_exact() {
        assert_eq!(CommandKind::lookup("Ship"), Some(CommandKind::Ship));
        assert_eq!(CommandKind::lookup("ship"), None);
        assert_eq!(CommandKind::lookup("OrderShippment"), None);
        assert_eq!(CommandKind::lookup(""), None);
    }

    #[test]
    fn test_table_and_names_agree() {
        for spec in COMMAND_TABLE {
            assert_eq!(spec.kind.spec().kind, spec.kind);
            assert_eq!(CommandKind::lookup(spec.name), Some(spec.kind));
        }
        assert!(!CommandKind::GetPackageStatus.spec().mutating);
    }

    #[test]
    fn test_decode_ship() {
        let cmd = CommandKind::Ship.decode(&args(&["P1", "SHIPMENT"])).unwrap();
        assert_eq!(
            cmd,
            Command::Ship {
                package_id: "P1".to_string(),
                status: "SHIPMENT".to_string()
            }
        );
        assert_eq!(cmd.package_id(), "P1");
        assert_eq!(cmd.kind(), CommandKind::Ship);
    }

    #[test]
    fn test_decode_order_shipment_payload() {
        let cmd = CommandKind::OrderShipment
            .decode(&args(&[r#"{"packageId":"P1","destination":"Paris"}"#]))
            .unwrap();
        match cmd {
            Command::OrderShipment { package } => {
                assert_eq!(package.package_id, "P1");
                assert_eq!(package.destination, "Paris");
            }
            _ => panic!("Wrong command variant"),
        }
    }

    #[test]
    fn test_decode_bad_payload() {
        let result = CommandKind::OrderShipment.decode(&args(&["{not json"]));
        assert!(matches!(result, Err(LabshipError::InvalidPayload { .. })));
    }

    #[test]
    fn test_decode_wrong_arity() {
        assert_eq!(
            CommandKind::Acknowledgement.decode(&args(&["P1"])),
            Err(LabshipError::InvalidArguments {
                command: "Acknowledgement".to_string(),
                expected: 2,
                got: 1
            })
        );
    }

    #[test]
    fn test_decode_non_utf8_id() {
        let result = CommandKind::GetPackageStatus.decode(&[vec![0xff, 0xfe]]);
        assert_eq!(
            result,
            Err(LabshipError::InvalidArgumentEncoding {
                command: "GetPackageStatus".to_string(),
                position: 1
            })
        );
    }
}
