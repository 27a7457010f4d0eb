
use crate::{
    Action, AppCall, Bundle, CreateParams, LedgerConfig, OnCompletion, Operation, Payment,
    SealedAuction, SealedAuctionClient, AUCTION_NOTE, START_DEPOSIT,
};
use soroban_sdk::{
    testutils::{Address as _, Events, Ledger, LedgerInfo},
    token, vec, Address, Bytes, Env, Event, Val, Vec,
};

pub const START_TIME: u64 = 1000;
pub const DURATION: u64 = 3600;
pub const STARTING_BID: i128 = 100;
pub const MIN_FEE: i128 = 1000;
pub const INITIAL_BALANCE: i128 = 10_000_000;

pub struct TestContext {
    pub env: Env,
    pub client: SealedAuctionClient<'static>,
    pub contract: Address,
    pub creator: Address,
    pub token: token::TokenClient<'static>,
    pub token_admin: token::StellarAssetClient<'static>,
    pub ledger: LedgerConfig,
}

impl TestContext {
    /// Fresh account holding `INITIAL_BALANCE` of the custody asset.
    pub fn funded_account(&self) -> Address {
        let account = Address::generate(&self.env);
        self.token_admin.mint(&account, &INITIAL_BALANCE);
        account
    }

    pub fn create_params(&self) -> CreateParams {
        CreateParams {
            note: Bytes::from_slice(&self.env, AUCTION_NOTE),
            duration: DURATION,
            item_name: Bytes::from_slice(&self.env, b"Vase"),
            item_image: Bytes::new(&self.env),
            item_description: Bytes::new(&self.env),
            starting_bid: STARTING_BID,
        }
    }

    pub fn create(&self) {
        self.client
            .create(&self.creator, &self.ledger, &self.create_params());
    }

    pub fn payment(&self, sender: &Address, amount: i128) -> Payment {
        Payment {
            sender: sender.clone(),
            receiver: self.contract.clone(),
            amount,
        }
    }

    pub fn start_bundle(&self, sender: &Address) -> Bundle {
        paired(
            &self.env,
            call(sender, MIN_FEE, Action::Start),
            self.payment(sender, START_DEPOSIT),
        )
    }

    pub fn bid_bundle(
        &self,
        bidder: &Address,
        amount: i128,
        previous: Option<Address>,
        fee: i128,
    ) -> Bundle {
        paired(
            &self.env,
            call(bidder, fee, Action::Bid(previous)),
            self.payment(bidder, amount),
        )
    }

    pub fn end_bundle(&self, sender: &Address, fee: i128) -> Bundle {
        lone(&self.env, call(sender, fee, Action::End))
    }

    pub fn delete_bundle(&self, sender: &Address) -> Bundle {
        lone(
            &self.env,
            AppCall {
                sender: sender.clone(),
                fee: MIN_FEE,
                on_completion: OnCompletion::DeleteApplication,
                action: Action::Nothing,
            },
        )
    }

    /// Events published by the auction contract during the last invocation.
    /// Token transfer events from the asset contract are left out.
    pub fn contract_events(&self) -> Vec<(Address, Vec<Val>, Val)> {
        let mut events = Vec::new(&self.env);
        for (contract, topics, data) in self.env.events().all().iter() {
            if contract == self.contract {
                events.push_back((contract, topics, data));
            }
        }
        events
    }

    /// `event` as it appears in `contract_events` once published.
    pub fn published(&self, event: &impl Event) -> (Address, Vec<Val>, Val) {
        (self.contract.clone(), event.topics(&self.env), event.data(&self.env))
    }

    /// Creates and starts the auction; the creator pays the deposit.
    pub fn create_and_start(&self) {
        self.create();
        self.client.execute(&self.start_bundle(&self.creator));
    }
}

pub fn call(sender: &Address, fee: i128, action: Action) -> AppCall {
    AppCall {
        sender: sender.clone(),
        fee,
        on_completion: OnCompletion::NoOp,
        action,
    }
}

pub fn paired(env: &Env, call: AppCall, payment: Payment) -> Bundle {
    Bundle {
        position: 0,
        operations: vec![env, Operation::Call(call), Operation::Payment(payment)],
    }
}

pub fn lone(env: &Env, call: AppCall) -> Bundle {
    Bundle {
        position: 0,
        operations: vec![env, Operation::Call(call)],
    }
}

pub fn setup_test() -> TestContext {
    let env = Env::default();
    env.mock_all_auths();

    env.ledger().set(LedgerInfo {
        timestamp: START_TIME,
        protocol_version: 23,
        sequence_number: 1,
        network_id: Default::default(),
        base_reserve: 10,
        min_temp_entry_ttl: 100,
        min_persistent_entry_ttl: 100,
        max_entry_ttl: 3110400,
    });

    let contract = env.register(SealedAuction, ());
    let client = SealedAuctionClient::new(&env, &contract);

    let token_admin_address = Address::generate(&env);
    let token_contract = env.register_stellar_asset_contract_v2(token_admin_address);
    let token_address = token_contract.address();
    let token = token::TokenClient::new(&env, &token_address);
    let token_admin = token::StellarAssetClient::new(&env, &token_address);

    let creator = Address::generate(&env);
    token_admin.mint(&creator, &INITIAL_BALANCE);

    let ledger = LedgerConfig {
        asset: token_address,
        min_fee: MIN_FEE,
    };

    TestContext {
        env,
        client,
        contract,
        creator,
        token,
        token_admin,
        ledger,
    }
}

pub fn advance_ledger(env: &Env, seconds: u64) {
    env.ledger().set(LedgerInfo {
        timestamp: env.ledger().timestamp() + seconds,
        protocol_version: 23,
        sequence_number: env.ledger().sequence(),
        network_id: Default::default(),
        base_reserve: 10,
        min_temp_entry_ttl: 100,
        min_persistent_entry_ttl: 100,
        max_entry_ttl: 3110400,
    });
}
