use crate::errors::Error;
use crate::events::PaymentIssuedEventData;
use crate::types::{LedgerConfig, Payment};
use soroban_sdk::{log, token, Address, Env};

/// Settles an incoming bundle payment into the contract's custody.
pub fn collect(env: &Env, ledger: &LedgerConfig, payment: &Payment) {
    let token_client = token::TokenClient::new(env, &ledger.asset);
    token_client.transfer(&payment.sender, &env.current_contract_address(), &payment.amount);
}

/// Originates a payment of `amount` from custody to `receiver`.
///
/// A failed transfer traps the host, which reverts the whole invocation, so
/// a payment is never observed without the state change that caused it.
pub fn pay(env: &Env, ledger: &LedgerConfig, receiver: &Address, amount: i128) {
    let token_client = token::TokenClient::new(env, &ledger.asset);
    token_client.transfer(&env.current_contract_address(), receiver, &amount);

    log!(env, "escrow payment of {} issued", amount);

    PaymentIssuedEventData {
        receiver: receiver.clone(),
        amount,
    }
    .publish(env);
}

/// The declared fee must cover `operations` times the runtime minimum.
pub fn require_fee(ledger: &LedgerConfig, declared: i128, operations: i128) -> Result<(), Error> {
    let required = ledger
        .min_fee
        .checked_mul(operations)
        .ok_or(Error::InsufficientFee)?;
    if declared < required {
        return Err(Error::InsufficientFee);
    }
    Ok(())
}
