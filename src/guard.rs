//! Native-fault guard.
//!
//! Faults of a native kind (see [`FaultKind::NATIVE`]) are never captured into
//! a result. The checks here turn them into `Err(Error::Native)` so they
//! propagate to the caller through `?`.

use tracing::warn;

use crate::types::{Fault, FaultKind, HttpError, Payload};
use crate::{Error, Result};

/// Fail with the fault if it belongs to the native set.
pub fn check_fault(fault: &Fault) -> Result<()> {
    if fault.is_native() {
        warn!(kind = %fault.kind, message = %fault.message, "native fault propagated");
        return Err(Error::Native(fault.clone()));
    }
    Ok(())
}

/// Fail if the payload is a native fault.
pub fn check_payload(payload: &Payload) -> Result<()> {
    match payload {
        Payload::Fault(f) => check_fault(f),
        _ => Ok(()),
    }
}

/// Fail if the error itself is a native fault.
pub fn check_error(error: &HttpError) -> Result<()> {
    match error.fault() {
        Some(f) => check_fault(&f),
        None => Ok(()),
    }
}

/// `true` when `kind` is in the native set.
#[inline]
pub fn is_native(kind: FaultKind) -> bool {
    FaultKind::NATIVE.contains(&kind)
}
