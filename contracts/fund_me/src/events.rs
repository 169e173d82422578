use soroban_sdk::{contracttype, symbol_short, Address, Env};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Initialized {
    pub owner: Address,
    pub price_feed: Address,
    pub native_asset: Address,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Funded {
    pub funder: Address,
    pub amount: i128,
    pub usd_value: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Withdrawn {
    pub owner: Address,
    pub amount: i128,
    pub funders_cleared: u32,
}

pub fn emit_initialized(env: &Env, owner: Address, price_feed: Address, native_asset: Address) {
    let topics = (symbol_short!("init"),);
    let data = Initialized {
        owner,
        price_feed,
        native_asset,
    };
    env.events().publish(topics, data);
}

pub fn emit_funded(env: &Env, funder: Address, amount: i128, usd_value: i128) {
    let topics = (symbol_short!("funded"), funder.clone());
    let data = Funded {
        funder,
        amount,
        usd_value,
    };
    env.events().publish(topics, data);
}

pub fn emit_withdrawn(env: &Env, owner: Address, amount: i128, funders_cleared: u32) {
    let topics = (symbol_short!("withdrawn"),);
    let data = Withdrawn {
        owner,
        amount,
        funders_cleared,
    };
    env.events().publish(topics, data);
}
