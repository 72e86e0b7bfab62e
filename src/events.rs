multiversx_sc::imports!();

use crate::types::{TopicStatus, VoteOption};

#[multiversx_sc::module]
pub trait EventsModule {
    #[event("residentAdded")]
    fn resident_added_event(
        &self,
        #[indexed] resident: &ManagedAddress,
        #[indexed] residence_id: u32,
    );

    #[event("residentRemoved")]
    fn resident_removed_event(
        &self,
        #[indexed] resident: &ManagedAddress,
        #[indexed] residence_id: u32,
    );

    #[event("counselorChanged")]
    fn counselor_changed_event(
        &self,
        #[indexed] resident: &ManagedAddress,
        #[indexed] is_counselor: bool,
    );

    #[event("managerChanged")]
    fn manager_changed_event(&self, #[indexed] manager: &ManagedAddress);

    #[event("quotaChanged")]
    fn quota_changed_event(&self, #[indexed] monthly_quota: &BigUint);

    #[event("quotaPaid")]
    fn quota_paid_event(
        &self,
        #[indexed] residence_id: u32,
        #[indexed] payer: &ManagedAddress,
        #[indexed] amount: &BigUint,
        next_payment: u64,
    );

    #[event("topicChanged")]
    fn topic_changed_event(
        &self,
        #[indexed] title: &ManagedBuffer,
        #[indexed] status: TopicStatus,
    );

    #[event("vote")]
    fn vote_event(
        &self,
        #[indexed] title: &ManagedBuffer,
        #[indexed] voter: &ManagedAddress,
        option: VoteOption,
    );

    #[event("transfer")]
    fn transfer_event(
        &self,
        #[indexed] title: &ManagedBuffer,
        #[indexed] to: &ManagedAddress,
        amount: &BigUint,
    );
}
