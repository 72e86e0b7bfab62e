multiversx_sc::imports!();

use crate::errors::{
    ERR_ALREADY_VOTED, ERR_INVALID_OPTION, ERR_NOT_ENOUGH_VOTES, ERR_TOPIC_NOT_IDLE,
    ERR_TOPIC_NOT_VOTING,
};
use crate::types::{Resolution, Topic, TopicStatus, Vote, VoteOption, VoteTally};

#[multiversx_sc::module]
pub trait VotingModule:
    crate::roles::RolesModule
    + crate::quota::QuotaModule
    + crate::residents::ResidentsModule
    + crate::topics::TopicsModule
    + crate::events::EventsModule
{
    // ========================================================
    // ENDPOINT: openVoting
    // ========================================================

    #[endpoint(openVoting)]
    fn open_voting(&self, title: ManagedBuffer, on_behalf_of: OptionalValue<ManagedAddress>) {
        let caller = self.resolve_caller(on_behalf_of);
        self.require_manager(&caller);

        let mut topic = self.require_topic(&title);
        require!(topic.status == TopicStatus::Idle, ERR_TOPIC_NOT_IDLE);

        topic.status = TopicStatus::Voting;
        topic.started_at = self.blockchain().get_block_timestamp();
        self.topics(&title).set(&topic);

        self.topic_changed_event(&title, TopicStatus::Voting);
    }

    // ========================================================
    // ENDPOINT: vote
    // One vote per (topic, voter). Votes are never changed.
    // ========================================================

    #[endpoint(vote)]
    fn vote(
        &self,
        title: ManagedBuffer,
        option: VoteOption,
        on_behalf_of: OptionalValue<ManagedAddress>,
    ) {
        let caller = self.resolve_caller(on_behalf_of);
        self.require_manager_or_resident(&caller);

        let topic = self.require_topic(&title);
        require!(topic.status == TopicStatus::Voting, ERR_TOPIC_NOT_VOTING);
        require!(option != VoteOption::Empty, ERR_INVALID_OPTION);
        require!(!self.has_voted(&title, &caller).get(), ERR_ALREADY_VOTED);

        let vote = Vote {
            title: title.clone(),
            voter: caller.clone(),
            option,
            timestamp: self.blockchain().get_block_timestamp(),
        };
        self.votes(&title).push(&vote);
        self.has_voted(&title, &caller).set(true);

        self.vote_event(&title, &caller, option);
    }

    // ========================================================
    // ENDPOINT: closeVoting
    // Quorum is a strict majority of the residents registered
    // right now. YES > NO approves, ties are denied.
    // ========================================================

    #[endpoint(closeVoting)]
    fn close_voting(
        &self,
        title: ManagedBuffer,
        on_behalf_of: OptionalValue<ManagedAddress>,
    ) -> Topic<Self::Api> {
        let caller = self.resolve_caller(on_behalf_of);
        self.require_manager(&caller);

        let mut topic = self.require_topic(&title);
        require!(topic.status == TopicStatus::Voting, ERR_TOPIC_NOT_VOTING);

        let tally = self.tally(&title);
        let resident_count = self.residents().len() as u64;
        require!(tally.cast() * 2 > resident_count, ERR_NOT_ENOUGH_VOTES);

        topic.ended_at = self.blockchain().get_block_timestamp();
        if tally.approves() {
            topic.status = TopicStatus::Approved;
            self.apply_resolution(&topic);
        } else {
            topic.status = TopicStatus::Denied;
        }
        self.topics(&title).set(&topic);

        self.topic_changed_event(&title, topic.status);
        topic
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(numberOfVotes)]
    fn number_of_votes(&self, title: ManagedBuffer) -> u64 {
        self.require_topic(&title);
        self.votes(&title).len() as u64
    }

    #[view(getVotes)]
    fn get_votes(&self, title: ManagedBuffer) -> MultiValueEncoded<Vote<Self::Api>> {
        let mut result = MultiValueEncoded::new();
        for vote in self.votes(&title).iter() {
            result.push(vote);
        }
        result
    }

    #[view(hasVoted)]
    fn has_address_voted(&self, title: ManagedBuffer, voter: ManagedAddress) -> bool {
        self.has_voted(&title, &voter).get()
    }

    // ========================================================
    // INTERNAL
    // ========================================================

    fn tally(&self, title: &ManagedBuffer) -> VoteTally {
        let mut tally = VoteTally::default();
        for vote in self.votes(title).iter() {
            tally.record(vote.option);
        }
        tally
    }

    /// Side effects of an approved topic. Spending topics stay
    /// approved until the treasury transfers their amount.
    fn apply_resolution(&self, topic: &Topic<Self::Api>) {
        match topic.resolution() {
            Resolution::Decision | Resolution::Spend { .. } => {},
            Resolution::ChangeQuota(monthly_quota) => self.change_quota(&monthly_quota),
            Resolution::ChangeManager(manager) => self.change_manager(&manager),
        }
    }

    // ========================================================
    // STORAGE
    // ========================================================

    #[storage_mapper("votes")]
    fn votes(&self, title: &ManagedBuffer) -> VecMapper<Vote<Self::Api>>;

    #[storage_mapper("hasVoted")]
    fn has_voted(&self, title: &ManagedBuffer, voter: &ManagedAddress) -> SingleValueMapper<bool>;
}
