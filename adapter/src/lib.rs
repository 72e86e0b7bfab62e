#![no_std]

multiversx_sc::imports!();

pub mod condominium_adapter_proxy;

use condominium::condominium_proxy::CondominiumProxy;
use condominium::types::{
    Resident, ResidentPage, Resolution, Topic, TopicPage, TopicStatus, Vote, VoteOption,
};

// ============================================================
// Error messages
// ============================================================

pub const ERR_ONLY_OWNER: &str = "Only the owner can call this function";
pub const ERR_NOT_UPGRADED: &str = "You must upgrade first";

/// Stable entry point in front of a replaceable condominium contract.
///
/// The adapter holds no governance state. Each call is forwarded
/// synchronously to the current implementation with the original caller
/// appended, so the implementation can check permissions against the
/// real account. The implementation must trust this adapter through
/// `setAdapter` for forwarded calls to be accepted.
#[multiversx_sc::contract]
pub trait CondominiumAdapter {
    // ========================================================
    // Init / Upgrade
    // ========================================================

    #[init]
    fn init(&self) {
        let deployer = self.blockchain().get_caller();
        self.owner().set(&deployer);
    }

    #[upgrade]
    fn upgrade(&self) {}

    // ========================================================
    // ENDPOINT: setImplementation
    // Points the adapter at a new implementation. Zero unsets it.
    // ========================================================

    #[endpoint(setImplementation)]
    fn set_implementation(&self, address: ManagedAddress) {
        let caller = self.blockchain().get_caller();
        require!(caller == self.owner().get(), ERR_ONLY_OWNER);

        if address.is_zero() {
            self.implementation().clear();
        } else {
            self.implementation().set(&address);
        }

        self.implementation_changed_event(&address);
    }

    #[view(getImplAddress)]
    fn get_impl_address(&self) -> ManagedAddress {
        if self.implementation().is_empty() {
            return ManagedAddress::zero();
        }
        self.implementation().get()
    }

    #[view(getOwner)]
    fn get_owner(&self) -> ManagedAddress {
        self.owner().get()
    }

    // ========================================================
    // Residents & roles
    // ========================================================

    #[endpoint(addResident)]
    fn add_resident(&self, resident: ManagedAddress, residence_id: u32) {
        let implementation = self.require_implementation();
        let caller = self.blockchain().get_caller();

        self.tx()
            .to(&implementation)
            .typed(CondominiumProxy)
            .add_resident(resident, residence_id)
            .argument(&caller)
            .sync_call();
    }

    #[endpoint(removeResident)]
    fn remove_resident(&self, resident: ManagedAddress) {
        let implementation = self.require_implementation();
        let caller = self.blockchain().get_caller();

        self.tx()
            .to(&implementation)
            .typed(CondominiumProxy)
            .remove_resident(resident)
            .argument(&caller)
            .sync_call();
    }

    #[endpoint(addCounselor)]
    fn add_counselor(&self, counselor: ManagedAddress) {
        let implementation = self.require_implementation();
        let caller = self.blockchain().get_caller();

        self.tx()
            .to(&implementation)
            .typed(CondominiumProxy)
            .add_counselor(counselor)
            .argument(&caller)
            .sync_call();
    }

    #[endpoint(removeCounselor)]
    fn remove_counselor(&self, counselor: ManagedAddress) {
        let implementation = self.require_implementation();
        let caller = self.blockchain().get_caller();

        self.tx()
            .to(&implementation)
            .typed(CondominiumProxy)
            .remove_counselor(counselor)
            .argument(&caller)
            .sync_call();
    }

    #[endpoint(setManager)]
    fn set_manager(&self, new_manager: ManagedAddress) {
        let implementation = self.require_implementation();
        let caller = self.blockchain().get_caller();

        self.tx()
            .to(&implementation)
            .typed(CondominiumProxy)
            .set_manager(&new_manager)
            .argument(&caller)
            .sync_call();

        self.manager_changed_event(&new_manager);
    }

    // ========================================================
    // Quota
    // ========================================================

    /// The attached EGLD is passed on as is; the treasury lives in
    /// the implementation.
    #[endpoint(payQuota)]
    #[payable("EGLD")]
    fn pay_quota(&self, residence_id: u32) {
        let implementation = self.require_implementation();
        let caller = self.blockchain().get_caller();
        let payment = self.call_value().egld_value().clone_value();

        self.tx()
            .to(&implementation)
            .typed(CondominiumProxy)
            .pay_quota(residence_id)
            .egld(payment)
            .argument(&caller)
            .sync_call();
    }

    // ========================================================
    // Topics
    // ========================================================

    #[endpoint(createTopic)]
    fn create_topic(
        &self,
        title: ManagedBuffer,
        description: ManagedBuffer,
        category: u8,
        amount: BigUint,
        responsible: ManagedAddress,
    ) {
        let implementation = self.require_implementation();
        let caller = self.blockchain().get_caller();

        self.tx()
            .to(&implementation)
            .typed(CondominiumProxy)
            .create_topic(&title, description, category, amount, responsible)
            .argument(&caller)
            .sync_call();

        self.topic_changed_event(&title, TopicStatus::Idle);
    }

    #[endpoint(editTopic)]
    fn edit_topic(
        &self,
        title: ManagedBuffer,
        description: ManagedBuffer,
        amount: BigUint,
        responsible: ManagedAddress,
    ) {
        let implementation = self.require_implementation();
        let caller = self.blockchain().get_caller();

        self.tx()
            .to(&implementation)
            .typed(CondominiumProxy)
            .edit_topic(&title, description, amount, responsible)
            .argument(&caller)
            .sync_call();

        self.topic_changed_event(&title, TopicStatus::Idle);
    }

    #[endpoint(removeTopic)]
    fn remove_topic(&self, title: ManagedBuffer) {
        let implementation = self.require_implementation();
        let caller = self.blockchain().get_caller();

        self.tx()
            .to(&implementation)
            .typed(CondominiumProxy)
            .remove_topic(&title)
            .argument(&caller)
            .sync_call();

        self.topic_changed_event(&title, TopicStatus::Deleted);
    }

    // ========================================================
    // Voting
    // ========================================================

    #[endpoint(openVoting)]
    fn open_voting(&self, title: ManagedBuffer) {
        let implementation = self.require_implementation();
        let caller = self.blockchain().get_caller();

        self.tx()
            .to(&implementation)
            .typed(CondominiumProxy)
            .open_voting(&title)
            .argument(&caller)
            .sync_call();

        self.topic_changed_event(&title, TopicStatus::Voting);
    }

    #[endpoint(vote)]
    fn vote(&self, title: ManagedBuffer, option: VoteOption) {
        let implementation = self.require_implementation();
        let caller = self.blockchain().get_caller();

        self.tx()
            .to(&implementation)
            .typed(CondominiumProxy)
            .vote(title, option)
            .argument(&caller)
            .sync_call();
    }

    #[endpoint(closeVoting)]
    fn close_voting(&self, title: ManagedBuffer) -> Topic<Self::Api> {
        let implementation = self.require_implementation();
        let caller = self.blockchain().get_caller();

        let topic = self
            .tx()
            .to(&implementation)
            .typed(CondominiumProxy)
            .close_voting(&title)
            .argument(&caller)
            .returns(ReturnsResult)
            .sync_call();

        self.topic_changed_event(&title, topic.status);
        if topic.status == TopicStatus::Approved {
            match topic.resolution() {
                Resolution::ChangeManager(manager) => self.manager_changed_event(&manager),
                Resolution::ChangeQuota(monthly_quota) => self.quota_changed_event(&monthly_quota),
                Resolution::Decision | Resolution::Spend { .. } => {},
            }
        }

        topic
    }

    // ========================================================
    // Treasury
    // ========================================================

    #[endpoint(transfer)]
    fn transfer(&self, title: ManagedBuffer, amount: BigUint) -> Topic<Self::Api> {
        let implementation = self.require_implementation();
        let caller = self.blockchain().get_caller();

        let topic = self
            .tx()
            .to(&implementation)
            .typed(CondominiumProxy)
            .transfer(&title, &amount)
            .argument(&caller)
            .returns(ReturnsResult)
            .sync_call();

        self.transfer_event(&title, &topic.responsible, &amount);
        self.topic_changed_event(&title, topic.status);

        topic
    }

    // ========================================================
    // VIEWS (read-only pass-throughs)
    // ========================================================

    #[view(getManager)]
    fn get_manager(&self) -> ManagedAddress {
        let implementation = self.require_implementation();
        self.tx()
            .to(&implementation)
            .typed(CondominiumProxy)
            .get_manager()
            .returns(ReturnsResult)
            .sync_call_readonly()
    }

    #[view(getQuota)]
    fn get_quota(&self) -> BigUint {
        let implementation = self.require_implementation();
        self.tx()
            .to(&implementation)
            .typed(CondominiumProxy)
            .get_quota()
            .returns(ReturnsResult)
            .sync_call_readonly()
    }

    #[view(getResident)]
    fn get_resident(&self, address: ManagedAddress) -> Resident<Self::Api> {
        let implementation = self.require_implementation();
        self.tx()
            .to(&implementation)
            .typed(CondominiumProxy)
            .get_resident(address)
            .returns(ReturnsResult)
            .sync_call_readonly()
    }

    #[view(getResidents)]
    fn get_residents(&self, page: u64, size: u64) -> ResidentPage<Self::Api> {
        let implementation = self.require_implementation();
        self.tx()
            .to(&implementation)
            .typed(CondominiumProxy)
            .get_residents(page, size)
            .returns(ReturnsResult)
            .sync_call_readonly()
    }

    #[view(getTopic)]
    fn get_topic(&self, title: ManagedBuffer) -> Topic<Self::Api> {
        let implementation = self.require_implementation();
        self.tx()
            .to(&implementation)
            .typed(CondominiumProxy)
            .get_topic(title)
            .returns(ReturnsResult)
            .sync_call_readonly()
    }

    #[view(getTopics)]
    fn get_topics(&self, page: u64, size: u64) -> TopicPage<Self::Api> {
        let implementation = self.require_implementation();
        self.tx()
            .to(&implementation)
            .typed(CondominiumProxy)
            .get_topics(page, size)
            .returns(ReturnsResult)
            .sync_call_readonly()
    }

    #[view(getVotes)]
    fn get_votes(&self, title: ManagedBuffer) -> MultiValueEncoded<Vote<Self::Api>> {
        let implementation = self.require_implementation();
        self.tx()
            .to(&implementation)
            .typed(CondominiumProxy)
            .get_votes(title)
            .returns(ReturnsResult)
            .sync_call_readonly()
    }

    #[view(numberOfVotes)]
    fn number_of_votes(&self, title: ManagedBuffer) -> u64 {
        let implementation = self.require_implementation();
        self.tx()
            .to(&implementation)
            .typed(CondominiumProxy)
            .number_of_votes(title)
            .returns(ReturnsResult)
            .sync_call_readonly()
    }

    // ========================================================
    // INTERNAL
    // ========================================================

    fn require_implementation(&self) -> ManagedAddress {
        require!(!self.implementation().is_empty(), ERR_NOT_UPGRADED);
        self.implementation().get()
    }

    // ========================================================
    // EVENTS
    // ========================================================

    #[event("implementationChanged")]
    fn implementation_changed_event(&self, #[indexed] implementation: &ManagedAddress);

    #[event("topicChanged")]
    fn topic_changed_event(
        &self,
        #[indexed] title: &ManagedBuffer,
        #[indexed] status: TopicStatus,
    );

    #[event("managerChanged")]
    fn manager_changed_event(&self, #[indexed] manager: &ManagedAddress);

    #[event("quotaChanged")]
    fn quota_changed_event(&self, #[indexed] monthly_quota: &BigUint);

    #[event("transfer")]
    fn transfer_event(
        &self,
        #[indexed] title: &ManagedBuffer,
        #[indexed] to: &ManagedAddress,
        #[indexed] amount: &BigUint,
    );

    // ========================================================
    // STORAGE
    // ========================================================

    #[storage_mapper("owner")]
    fn owner(&self) -> SingleValueMapper<ManagedAddress>;

    #[storage_mapper("implementation")]
    fn implementation(&self) -> SingleValueMapper<ManagedAddress>;
}
