multiversx_sc::imports!();

use crate::errors::{ERR_AMOUNT_EXCEEDS_TOPIC, ERR_INSUFFICIENT_FUNDS, ERR_NOT_APPROVED_SPENT};
use crate::types::{Resolution, Topic, TopicStatus};

#[multiversx_sc::module]
pub trait TreasuryModule:
    crate::roles::RolesModule
    + crate::quota::QuotaModule
    + crate::residents::ResidentsModule
    + crate::topics::TopicsModule
    + crate::events::EventsModule
{
    // ========================================================
    // ENDPOINT: transfer
    // Pays out against an approved spending topic, at most once.
    // ========================================================

    #[endpoint(transfer)]
    fn transfer(
        &self,
        title: ManagedBuffer,
        amount: BigUint,
        on_behalf_of: OptionalValue<ManagedAddress>,
    ) -> Topic<Self::Api> {
        let caller = self.resolve_caller(on_behalf_of);
        self.require_manager(&caller);
        require!(self.get_balance() >= amount, ERR_INSUFFICIENT_FUNDS);

        let mut topic = self.require_topic(&title);
        require!(topic.status == TopicStatus::Approved, ERR_NOT_APPROVED_SPENT);

        let (authorized, responsible) = match topic.resolution() {
            Resolution::Spend {
                amount: authorized,
                responsible,
            } => (authorized, responsible),
            _ => sc_panic!(ERR_NOT_APPROVED_SPENT),
        };
        require!(amount <= authorized, ERR_AMOUNT_EXCEEDS_TOPIC);

        topic.status = TopicStatus::Spent;
        self.topics(&title).set(&topic);

        self.send().direct_egld(&responsible, &amount);
        self.transfer_event(&title, &responsible, &amount);
        self.topic_changed_event(&title, TopicStatus::Spent);

        topic
    }

    #[view(getBalance)]
    fn get_balance(&self) -> BigUint {
        self.blockchain()
            .get_sc_balance(&EgldOrEsdtTokenIdentifier::egld(), 0)
    }
}
