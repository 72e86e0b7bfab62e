use multiversx_sc_scenario::imports::*;

use condominium::condominium_proxy::CondominiumProxy;
use condominium::errors::ERR_ONLY_ADAPTER;
use condominium::types::{Topic, TopicCategory, TopicStatus, VoteOption};
use condominium_adapter::condominium_adapter_proxy::CondominiumAdapterProxy;
use condominium_adapter::{ERR_NOT_UPGRADED, ERR_ONLY_OWNER};

const ADAPTER_CODE_PATH: MxscPath = MxscPath::new("output/condominium-adapter.mxsc.json");
const CONDOMINIUM_CODE_PATH: MxscPath = MxscPath::new("../output/condominium.mxsc.json");

const ADAPTER_ADDRESS: TestSCAddress = TestSCAddress::new("condominium-adapter");
const CONDOMINIUM_ADDRESS: TestSCAddress = TestSCAddress::new("condominium");
const NEXT_CONDOMINIUM_ADDRESS: TestSCAddress = TestSCAddress::new("condominium-v2");

const OWNER: TestAddress = TestAddress::new("owner");
const MANAGER: TestAddress = TestAddress::new("manager");
const OUTSIDER: TestAddress = TestAddress::new("outsider");
const RESIDENTS: [TestAddress; 3] = [
    TestAddress::new("resident-1"),
    TestAddress::new("resident-2"),
    TestAddress::new("resident-3"),
];

const INITIAL_BALANCE: u64 = 1_000_000;
const MONTHLY_QUOTA: u64 = 10_000;
const TOPIC: &str = "Adapter Topic";

fn world() -> ScenarioWorld {
    let mut blockchain = ScenarioWorld::new();
    blockchain.register_contract(ADAPTER_CODE_PATH, condominium_adapter::ContractBuilder);
    blockchain.register_contract(CONDOMINIUM_CODE_PATH, condominium::ContractBuilder);
    blockchain
}

fn residence(index: usize) -> u32 {
    10_101 + index as u32
}

struct AdapterTestState {
    world: ScenarioWorld,
}

impl AdapterTestState {
    fn new() -> Self {
        let mut world = world();
        world.current_block().block_timestamp(1_700_000_000);

        world.account(OWNER).nonce(1).balance(INITIAL_BALANCE);
        world.account(MANAGER).nonce(1).balance(INITIAL_BALANCE);
        world.account(OUTSIDER).nonce(1).balance(INITIAL_BALANCE);
        for resident in RESIDENTS {
            world.account(resident).nonce(1).balance(INITIAL_BALANCE);
        }

        world
            .tx()
            .from(OWNER)
            .typed(CondominiumAdapterProxy)
            .init()
            .code(ADAPTER_CODE_PATH)
            .new_address(ADAPTER_ADDRESS)
            .run();

        Self { world }
    }

    /// Deploys an implementation that trusts the adapter.
    fn deploy_implementation(&mut self, address: TestSCAddress) {
        self.world
            .tx()
            .from(MANAGER)
            .typed(CondominiumProxy)
            .init(MONTHLY_QUOTA)
            .code(CONDOMINIUM_CODE_PATH)
            .new_address(address)
            .run();

        self.world
            .tx()
            .from(MANAGER)
            .to(address)
            .typed(CondominiumProxy)
            .set_adapter(ADAPTER_ADDRESS)
            .run();
    }

    fn upgrade_to(&mut self, address: TestSCAddress) {
        self.world
            .tx()
            .from(OWNER)
            .to(ADAPTER_ADDRESS)
            .typed(CondominiumAdapterProxy)
            .set_implementation(address)
            .run();
    }

    fn deployed() -> Self {
        let mut state = Self::new();
        state.deploy_implementation(CONDOMINIUM_ADDRESS);
        state.upgrade_to(CONDOMINIUM_ADDRESS);
        state
    }

    fn add_resident(&mut self, index: usize) {
        self.world
            .tx()
            .from(MANAGER)
            .to(ADAPTER_ADDRESS)
            .typed(CondominiumAdapterProxy)
            .add_resident(RESIDENTS[index], residence(index))
            .run();
    }

    fn resident_count(&mut self, implementation: TestSCAddress) -> u64 {
        self.world
            .query()
            .to(implementation)
            .typed(CondominiumProxy)
            .get_resident_count()
            .returns(ReturnsResult)
            .run()
    }

    /// Adapter views read through `sync_call_readonly`, which the Rust
    /// VM does not run, so state is read from the implementation.
    fn topic(&mut self, implementation: TestSCAddress) -> Topic<StaticApi> {
        self.world
            .query()
            .to(implementation)
            .typed(CondominiumProxy)
            .get_topic(TOPIC)
            .returns(ReturnsResult)
            .run()
    }
}

#[test]
fn calls_fail_before_first_upgrade() {
    let mut state = AdapterTestState::new();

    state
        .world
        .query()
        .to(ADAPTER_ADDRESS)
        .typed(CondominiumAdapterProxy)
        .get_impl_address()
        .returns(ExpectValue(ManagedAddress::<StaticApi>::zero()))
        .run();

    state
        .world
        .tx()
        .from(MANAGER)
        .to(ADAPTER_ADDRESS)
        .typed(CondominiumAdapterProxy)
        .add_resident(RESIDENTS[0], residence(0))
        .returns(ExpectError(4, ERR_NOT_UPGRADED))
        .run();

    state
        .world
        .query()
        .to(ADAPTER_ADDRESS)
        .typed(CondominiumAdapterProxy)
        .get_manager()
        .returns(ExpectError(4, ERR_NOT_UPGRADED))
        .run();
}

#[test]
fn only_owner_can_upgrade() {
    let mut state = AdapterTestState::new();
    state.deploy_implementation(CONDOMINIUM_ADDRESS);

    state
        .world
        .tx()
        .from(MANAGER)
        .to(ADAPTER_ADDRESS)
        .typed(CondominiumAdapterProxy)
        .set_implementation(CONDOMINIUM_ADDRESS)
        .returns(ExpectError(4, ERR_ONLY_OWNER))
        .run();

    state.upgrade_to(CONDOMINIUM_ADDRESS);

    let implementation = state
        .world
        .query()
        .to(ADAPTER_ADDRESS)
        .typed(CondominiumAdapterProxy)
        .get_impl_address()
        .returns(ReturnsResult)
        .run();
    assert_eq!(implementation.to_address(), CONDOMINIUM_ADDRESS.to_address());
}

#[test]
fn forwarded_calls_act_as_original_caller() {
    let mut state = AdapterTestState::deployed();

    state.add_resident(0);

    assert_eq!(state.resident_count(CONDOMINIUM_ADDRESS), 1);
    state
        .world
        .query()
        .to(CONDOMINIUM_ADDRESS)
        .typed(CondominiumProxy)
        .is_resident(RESIDENTS[0])
        .returns(ExpectValue(true))
        .run();

    // a zero responsible falls back to the acting caller, not the adapter
    state
        .world
        .tx()
        .from(RESIDENTS[0])
        .to(ADAPTER_ADDRESS)
        .typed(CondominiumAdapterProxy)
        .create_topic(
            TOPIC,
            "Topic Content",
            TopicCategory::Decision as u8,
            0u64,
            ManagedAddress::<StaticApi>::zero(),
        )
        .run();

    let topic = state.topic(CONDOMINIUM_ADDRESS);
    assert_eq!(topic.responsible.to_address(), RESIDENTS[0].to_address());
}

#[test]
fn untrusted_adapter_cannot_forward() {
    let mut state = AdapterTestState::new();
    state.deploy_implementation(CONDOMINIUM_ADDRESS);
    state.upgrade_to(CONDOMINIUM_ADDRESS);

    state
        .world
        .tx()
        .from(MANAGER)
        .to(CONDOMINIUM_ADDRESS)
        .typed(CondominiumProxy)
        .set_adapter(ManagedAddress::<StaticApi>::zero())
        .run();

    state
        .world
        .tx()
        .from(MANAGER)
        .to(ADAPTER_ADDRESS)
        .typed(CondominiumAdapterProxy)
        .add_resident(RESIDENTS[0], residence(0))
        .returns(ExpectMessage(ERR_ONLY_ADAPTER))
        .run();
}

#[test]
fn pay_quota_funds_the_implementation() {
    let mut state = AdapterTestState::deployed();
    state.add_resident(0);

    state
        .world
        .tx()
        .from(RESIDENTS[0])
        .to(ADAPTER_ADDRESS)
        .typed(CondominiumAdapterProxy)
        .pay_quota(residence(0))
        .egld(MONTHLY_QUOTA)
        .run();

    state
        .world
        .check_account(CONDOMINIUM_ADDRESS)
        .balance(MONTHLY_QUOTA);
    state.world.check_account(ADAPTER_ADDRESS).balance(0u64);
    state
        .world
        .check_account(RESIDENTS[0])
        .balance(INITIAL_BALANCE - MONTHLY_QUOTA);
}

#[test]
fn spending_topic_through_the_adapter() {
    let mut state = AdapterTestState::deployed();
    for index in 0..3 {
        state.add_resident(index);
        state
            .world
            .tx()
            .from(RESIDENTS[index])
            .to(ADAPTER_ADDRESS)
            .typed(CondominiumAdapterProxy)
            .pay_quota(residence(index))
            .egld(MONTHLY_QUOTA)
            .run();
    }

    state
        .world
        .tx()
        .from(MANAGER)
        .to(ADAPTER_ADDRESS)
        .typed(CondominiumAdapterProxy)
        .create_topic(
            TOPIC,
            "Topic Content",
            TopicCategory::Spent as u8,
            MONTHLY_QUOTA,
            OUTSIDER,
        )
        .run();
    state
        .world
        .tx()
        .from(MANAGER)
        .to(ADAPTER_ADDRESS)
        .typed(CondominiumAdapterProxy)
        .open_voting(TOPIC)
        .run();
    for resident in RESIDENTS {
        state
            .world
            .tx()
            .from(resident)
            .to(ADAPTER_ADDRESS)
            .typed(CondominiumAdapterProxy)
            .vote(TOPIC, VoteOption::Yes)
            .run();
    }

    state
        .world
        .query()
        .to(CONDOMINIUM_ADDRESS)
        .typed(CondominiumProxy)
        .number_of_votes(TOPIC)
        .returns(ExpectValue(3u64))
        .run();

    let topic = state
        .world
        .tx()
        .from(MANAGER)
        .to(ADAPTER_ADDRESS)
        .typed(CondominiumAdapterProxy)
        .close_voting(TOPIC)
        .returns(ReturnsResult)
        .run();
    assert_eq!(topic.status, TopicStatus::Approved);

    state
        .world
        .tx()
        .from(MANAGER)
        .to(ADAPTER_ADDRESS)
        .typed(CondominiumAdapterProxy)
        .transfer(TOPIC, MONTHLY_QUOTA)
        .run();

    state
        .world
        .check_account(OUTSIDER)
        .balance(INITIAL_BALANCE + MONTHLY_QUOTA);
    state
        .world
        .check_account(CONDOMINIUM_ADDRESS)
        .balance(2 * MONTHLY_QUOTA);
    assert_eq!(state.topic(CONDOMINIUM_ADDRESS).status, TopicStatus::Spent);
}

#[test]
fn new_implementation_starts_empty() {
    let mut state = AdapterTestState::deployed();
    state.add_resident(0);

    state.deploy_implementation(NEXT_CONDOMINIUM_ADDRESS);
    state.upgrade_to(NEXT_CONDOMINIUM_ADDRESS);

    assert_eq!(state.resident_count(NEXT_CONDOMINIUM_ADDRESS), 0);

    state.add_resident(1);

    assert_eq!(state.resident_count(NEXT_CONDOMINIUM_ADDRESS), 1);
    assert_eq!(state.resident_count(CONDOMINIUM_ADDRESS), 1);
}

#[test]
fn zero_address_unsets_implementation() {
    let mut state = AdapterTestState::deployed();

    state
        .world
        .tx()
        .from(OWNER)
        .to(ADAPTER_ADDRESS)
        .typed(CondominiumAdapterProxy)
        .set_implementation(ManagedAddress::<StaticApi>::zero())
        .run();

    state
        .world
        .tx()
        .from(MANAGER)
        .to(ADAPTER_ADDRESS)
        .typed(CondominiumAdapterProxy)
        .set_manager(OUTSIDER)
        .returns(ExpectError(4, ERR_NOT_UPGRADED))
        .run();
}
