use crate::fund_me::create_fund_me;
use crate::hostile_token::create_hostile_token;
use crate::oracle::{create_mock_oracle, initial_price, list_assets};
use crate::token::create_native_token;
use fund_me::FundMeClient;
use mock_hostile_token::MockHostileTokenClient;
use sep_40_oracle::testutils::MockPriceOracleClient;
use soroban_sdk::testutils::{Address as _, Ledger, LedgerInfo};
use soroban_sdk::token::{StellarAssetClient, TokenClient};
use soroban_sdk::{vec as svec, Address, Env};

pub const SCALAR_7: i128 = 1_000_0000;

/// Native units minted to each generated user
pub const USER_BALANCE: i128 = 100 * SCALAR_7;

/// A ledger deployed against a hostile token and its own price feed
pub struct HostileFixture<'a> {
    pub fund_me: FundMeClient<'a>,
    pub token: MockHostileTokenClient<'a>,
    pub price_feed: Address,
}

pub struct TestFixture<'a> {
    pub env: Env,
    pub bombadil: Address,
    pub users: std::vec::Vec<Address>,
    pub fund_me: FundMeClient<'a>,
    pub price_feed: Address,
    pub token: TokenClient<'a>,
    pub token_admin: StellarAssetClient<'a>,
}

impl TestFixture<'_> {
    /// Create a new TestFixture with a fresh mock price feed
    ///
    /// Deploys the native token, a mock price feed quoting it at `INITIAL_ANSWER` USD with
    /// `DECIMALS` decimals, and an initialized ledger owned by `bombadil`.
    pub fn create<'a>() -> TestFixture<'a> {
        let e = Env::default();
        e.mock_all_auths();
        e.budget().reset_unlimited();

        TestFixture::deploy(e, None)
    }

    /// Deploy the native token and the ledger into `e`
    ///
    /// Uses `price_feed` if one is supplied, otherwise deploys the mock price feed.
    /// A supplied price feed must already quote the native token, or be configured to
    /// before anyone funds.
    pub fn deploy<'a>(e: Env, price_feed: Option<Address>) -> TestFixture<'a> {
        let bombadil = Address::generate(&e);

        e.ledger().set(LedgerInfo {
            timestamp: 1_700_000_000,
            protocol_version: 20,
            sequence_number: 100,
            network_id: Default::default(),
            base_reserve: 10,
            min_temp_entry_ttl: 500_000,
            min_persistent_entry_ttl: 500_000,
            max_entry_ttl: 3_110_400,
        });

        let (token, token_admin) = create_native_token(&e, &bombadil);

        let price_feed = match price_feed {
            Some(price_feed) => price_feed,
            None => {
                let (oracle_id, oracle_client) = create_mock_oracle(&e);
                list_assets(&e, &oracle_client, &[&token.address]);
                oracle_client.set_price_stable(&svec![&e, initial_price()]);
                oracle_id
            }
        };

        let (_, fund_me) = create_fund_me(&e);
        fund_me.initialize(&bombadil, &price_feed, &token.address);

        let mut users = std::vec::Vec::new();
        for _ in 0..5 {
            let user = Address::generate(&e);
            token_admin.mint(&user, &USER_BALANCE);
            users.push(user);
        }

        TestFixture {
            env: e,
            bombadil,
            users,
            fund_me,
            price_feed,
            token,
            token_admin,
        }
    }

    /// Fetch a client for the price feed, assuming it is the mock price feed
    pub fn oracle(&self) -> MockPriceOracleClient {
        MockPriceOracleClient::new(&self.env, &self.price_feed)
    }

    /// Report a new price for the native token, timestamped now
    pub fn set_price(&self, price: i128) {
        self.oracle().set_price_stable(&svec![&self.env, price]);
    }

    /// Deploy a second ledger, owned by `bombadil`, that holds a hostile token. Every user
    /// is minted `USER_BALANCE` of the hostile token.
    pub fn create_hostile_ledger(&self) -> HostileFixture {
        let (token_id, token) = create_hostile_token(&self.env);
        let (oracle_id, oracle_client) = create_mock_oracle(&self.env);
        list_assets(&self.env, &oracle_client, &[&token_id]);
        oracle_client.set_price_stable(&svec![&self.env, initial_price()]);

        let (fund_me_id, fund_me) = create_fund_me(&self.env);
        fund_me.initialize(&self.bombadil, &oracle_id, &token_id);
        token.set_target(&fund_me_id);
        for user in self.users.iter() {
            token.mint(user, &USER_BALANCE);
        }

        HostileFixture {
            fund_me,
            token,
            price_feed: oracle_id,
        }
    }

    /********** Chain Helpers ***********/

    pub fn jump(&self, time: u64) {
        let blocks = time / 5;
        self.env.ledger().set(LedgerInfo {
            timestamp: self.env.ledger().timestamp().saturating_add(time),
            protocol_version: 20,
            sequence_number: self.env.ledger().sequence().saturating_add(blocks as u32),
            network_id: Default::default(),
            base_reserve: 10,
            min_temp_entry_ttl: 500_000,
            min_persistent_entry_ttl: 500_000,
            max_entry_ttl: 3_110_400,
        });
    }
}
