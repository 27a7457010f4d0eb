use crate::errors::Error;
use crate::types::{AppCall, Bundle, Operation, Payment};
use soroban_sdk::Env;

// ============================================================================
// Bundle shape checks
// ============================================================================
// All of these run before any state is touched.

/// The application call at the bundle's evaluated position.
pub fn current_call(bundle: &Bundle) -> Result<AppCall, Error> {
    match bundle.operations.get(bundle.position) {
        Some(Operation::Call(call)) => Ok(call),
        Some(Operation::Payment(_)) => Err(Error::NotAnApplicationCall),
        None => Err(Error::WrongGroupPosition),
    }
}

/// A call followed by a payment into this contract from the same sender.
/// Used by `start` and `bid`; returns the payment.
pub fn call_with_payment(env: &Env, bundle: &Bundle, call: &AppCall) -> Result<Payment, Error> {
    if bundle.operations.len() != 2 {
        return Err(Error::WrongGroupSize);
    }
    if bundle.position != 0 {
        return Err(Error::WrongGroupPosition);
    }

    let payment = match bundle.operations.get(1) {
        Some(Operation::Payment(payment)) => payment,
        _ => return Err(Error::NotAPayment),
    };

    if payment.receiver != env.current_contract_address() {
        return Err(Error::WrongPaymentReceiver);
    }
    if payment.sender != call.sender {
        return Err(Error::SenderMismatch);
    }

    Ok(payment)
}

/// A bundle holding nothing but the call. Used by `end` and deletion.
pub fn lone_call(bundle: &Bundle) -> Result<(), Error> {
    if bundle.operations.len() != 1 {
        return Err(Error::WrongGroupSize);
    }
    if bundle.position != 0 {
        return Err(Error::WrongGroupPosition);
    }
    Ok(())
}
