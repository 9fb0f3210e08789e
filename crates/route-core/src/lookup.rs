//! Account Lookup
//!
//! Search-by-contract used while assembling a route.

use crate::error::{RouteError, RouteResult};
use crate::transport::{AccountLookup, RouteTransport};

pub const CONTRACT_REQUIRED: &str = "Por favor ingrese un número de contrato";
pub const CONTRACT_NOT_FOUND: &str = "No se encontró ningún usuario con ese número de contrato";
pub const LOOKUP_FALLBACK: &str = "Ocurrió un error al buscar el usuario";

/// Trim the typed contract and look it up. Empty input never reaches the
/// network.
pub async fn search_account<T>(transport: &T, raw_contract: &str) -> RouteResult<AccountLookup>
where
    T: RouteTransport + ?Sized,
{
    let contract = raw_contract.trim();
    if contract.is_empty() {
        return Err(RouteError::Validation(CONTRACT_REQUIRED.to_string()));
    }

    transport.lookup_account(contract).await.map_err(|e| {
        log::warn!("[LOOKUP] contrato {} failed: {}", contract, e);
        RouteError::from(e)
    })
}
