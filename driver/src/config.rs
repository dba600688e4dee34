use error_stack::ResultExt;
use kernel::prelude::entity::MspId;
use kernel::prelude::policy::{self, RoleRegistry};
use kernel::KernelError;

use crate::error::ConvertError;
use crate::optional_env;

const MANUFACTURER_MSP_ID: &str = "MANUFACTURER_MSP_ID";
const DEALER_MSP_ID: &str = "DEALER_MSP_ID";
const REDIS_URL: &str = "REDIS_URL";
const SERVER_PORT: &str = "SERVER_PORT";

const DEFAULT_SERVER_PORT: u16 = 8080;

/// World state backend selected at startup.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum LedgerBackend {
    InMemory,
    Redis,
}

/// Role registry with `MANUFACTURER_MSP_ID` / `DEALER_MSP_ID` overriding the built-in ids.
pub fn role_registry() -> error_stack::Result<RoleRegistry, KernelError> {
    let manufacturer = optional_env(MANUFACTURER_MSP_ID)
        .convert_error()?
        .unwrap_or_else(|| policy::MANUFACTURER_MSP_ID.to_string());
    let dealer = optional_env(DEALER_MSP_ID)
        .convert_error()?
        .unwrap_or_else(|| policy::DEALER_MSP_ID.to_string());
    RoleRegistry::new(MspId::new(manufacturer), MspId::new(dealer))
}

pub fn ledger_backend() -> error_stack::Result<LedgerBackend, KernelError> {
    match optional_env(REDIS_URL).convert_error()? {
        Some(_) => Ok(LedgerBackend::Redis),
        None => Ok(LedgerBackend::InMemory),
    }
}

pub fn server_port() -> error_stack::Result<u16, KernelError> {
    let Some(port) = optional_env(SERVER_PORT).convert_error()? else {
        return Ok(DEFAULT_SERVER_PORT);
    };
    port.parse::<u16>()
        .convert_error()
        .attach_printable_lazy(|| format!("{SERVER_PORT} is not a valid port: {port}"))
}
