use crate::auction;
use crate::bundle;
use crate::errors::Error;
use crate::lifecycle::{self, Step};
use crate::storage;
use crate::types::{Action, AppCall, Bundle, CreateParams, LedgerConfig, OnCompletion};
use soroban_sdk::{Address, Env};

/// Every request the contract understands.
pub enum Request {
    Create {
        creator: Address,
        ledger: LedgerConfig,
        params: CreateParams,
    },
    Start {
        call: AppCall,
        bundle: Bundle,
    },
    Bid {
        call: AppCall,
        bundle: Bundle,
        previous: Option<Address>,
    },
    End {
        call: AppCall,
        bundle: Bundle,
    },
    Delete {
        call: AppCall,
        bundle: Bundle,
    },
}

impl Request {
    /// Routes a bundle by the call at its evaluated position. A delete
    /// intent wins over whatever action the call carries.
    pub fn from_bundle(bundle: Bundle) -> Result<Request, Error> {
        let call = bundle::current_call(&bundle)?;

        match (call.on_completion, call.action.clone()) {
            (OnCompletion::DeleteApplication, _) => Ok(Request::Delete { call, bundle }),
            (OnCompletion::NoOp, Action::Start) => Ok(Request::Start { call, bundle }),
            (OnCompletion::NoOp, Action::Bid(previous)) => Ok(Request::Bid {
                call,
                bundle,
                previous,
            }),
            (OnCompletion::NoOp, Action::End) => Ok(Request::End { call, bundle }),
            (OnCompletion::NoOp, Action::Nothing) => Err(Error::MissingAction),
        }
    }

    pub fn step(&self) -> Step {
        match self {
            Request::Create { .. } => Step::Create,
            Request::Start { .. } => Step::Start,
            Request::Bid { .. } => Step::Bid,
            Request::End { .. } => Step::End,
            Request::Delete { .. } => Step::Delete,
        }
    }

    fn requester(&self) -> &Address {
        match self {
            Request::Create { creator, .. } => creator,
            Request::Start { call, .. }
            | Request::Bid { call, .. }
            | Request::End { call, .. }
            | Request::Delete { call, .. } => &call.sender,
        }
    }
}

/// Admits or rejects one request. Nothing is written unless every check
/// of the transition table and the handler passes.
pub fn dispatch(env: &Env, request: Request) -> Result<(), Error> {
    request.requester().require_auth();
    lifecycle::advance(storage::phase(env), request.step())?;

    match request {
        Request::Create {
            creator,
            ledger,
            params,
        } => auction::create(env, &creator, &ledger, &params),
        Request::Start { call, bundle } => auction::start(env, &call, &bundle),
        Request::Bid {
            call,
            bundle,
            previous,
        } => auction::bid(env, &call, &bundle, previous),
        Request::End { call, bundle } => auction::end(env, &call, &bundle),
        Request::Delete { call, bundle } => auction::delete(env, &call, &bundle),
    }
}
