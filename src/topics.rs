multiversx_sc::imports!();

use crate::errors::{
    ERR_EDIT_NOT_IDLE, ERR_EMPTY_TITLE, ERR_INVALID_QUOTA, ERR_TOPIC_EXISTS, ERR_TOPIC_NOT_FOUND,
    ERR_TOPIC_NOT_IDLE, ERR_WRONG_CATEGORY,
};
use crate::types::{page_bounds, Topic, TopicCategory, TopicPage, TopicStatus};

#[multiversx_sc::module]
pub trait TopicsModule:
    crate::roles::RolesModule
    + crate::quota::QuotaModule
    + crate::residents::ResidentsModule
    + crate::events::EventsModule
{
    // ========================================================
    // ENDPOINT: createTopic
    // Manager or any resident up to date with the quota.
    // ========================================================

    #[endpoint(createTopic)]
    fn create_topic(
        &self,
        title: ManagedBuffer,
        description: ManagedBuffer,
        category: u8,
        amount: BigUint,
        responsible: ManagedAddress,
        on_behalf_of: OptionalValue<ManagedAddress>,
    ) {
        let caller = self.resolve_caller(on_behalf_of);
        self.require_manager_or_resident(&caller);
        self.require_quota_paid(&caller);
        require!(!title.is_empty(), ERR_EMPTY_TITLE);
        require!(!self.topic_exists(&title), ERR_TOPIC_EXISTS);

        let category = match TopicCategory::from_u8(category) {
            Some(category) => category,
            None => sc_panic!(ERR_WRONG_CATEGORY),
        };
        self.require_amount_fits(category, &amount);
        // a quota topic must never resolve to a zero monthly quota
        require!(
            category != TopicCategory::ChangeQuota || amount > 0u64,
            ERR_INVALID_QUOTA
        );

        let responsible = if responsible.is_zero() {
            caller
        } else {
            responsible
        };

        let topic = Topic {
            title: title.clone(),
            description,
            category,
            amount,
            responsible,
            status: TopicStatus::Idle,
            created_at: self.blockchain().get_block_timestamp(),
            started_at: 0,
            ended_at: 0,
        };

        self.topic_titles().insert(title.clone());
        self.topics(&title).set(&topic);

        self.topic_changed_event(&title, TopicStatus::Idle);
    }

    // ========================================================
    // ENDPOINT: editTopic
    // Empty description, zero amount and zero responsible all
    // mean "keep the current value".
    // ========================================================

    #[endpoint(editTopic)]
    fn edit_topic(
        &self,
        title: ManagedBuffer,
        description: ManagedBuffer,
        amount: BigUint,
        responsible: ManagedAddress,
        on_behalf_of: OptionalValue<ManagedAddress>,
    ) {
        let caller = self.resolve_caller(on_behalf_of);
        self.require_manager(&caller);

        let mut topic = self.require_topic(&title);
        require!(topic.status == TopicStatus::Idle, ERR_EDIT_NOT_IDLE);

        if !description.is_empty() {
            topic.description = description;
        }
        if amount > 0u64 {
            self.require_amount_fits(topic.category, &amount);
            topic.amount = amount;
        }
        if !responsible.is_zero() {
            topic.responsible = responsible;
        }

        self.topics(&title).set(&topic);
        self.topic_changed_event(&title, topic.status);
    }

    // ========================================================
    // ENDPOINT: removeTopic
    // Purges an idle topic; the title becomes free again.
    // ========================================================

    #[endpoint(removeTopic)]
    fn remove_topic(&self, title: ManagedBuffer, on_behalf_of: OptionalValue<ManagedAddress>) {
        let caller = self.resolve_caller(on_behalf_of);
        self.require_manager(&caller);

        let topic = self.require_topic(&title);
        require!(topic.status == TopicStatus::Idle, ERR_TOPIC_NOT_IDLE);

        self.topic_titles().swap_remove(&title);
        self.topics(&title).clear();

        self.topic_changed_event(&title, TopicStatus::Deleted);
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(topicExists)]
    fn topic_exists(&self, title: &ManagedBuffer) -> bool {
        !self.topics(title).is_empty()
    }

    #[view(getTopic)]
    fn get_topic(&self, title: ManagedBuffer) -> Topic<Self::Api> {
        self.require_topic(&title)
    }

    #[view(getTopics)]
    fn get_topics(&self, page: u64, size: u64) -> TopicPage<Self::Api> {
        let total = self.topic_titles().len() as u64;
        let (start, end) = page_bounds(page, size, total);

        let mut topics = ManagedVec::new();
        for index in start..end {
            let title = self.topic_titles().get_by_index(index as usize + 1);
            topics.push(self.topics(&title).get());
        }

        TopicPage { topics, total }
    }

    // ========================================================
    // INTERNAL
    // ========================================================

    fn require_topic(&self, title: &ManagedBuffer) -> Topic<Self::Api> {
        require!(self.topic_exists(title), ERR_TOPIC_NOT_FOUND);
        self.topics(title).get()
    }

    fn require_amount_fits(&self, category: TopicCategory, amount: &BigUint) {
        require!(
            category.carries_amount() || *amount == 0u64,
            ERR_WRONG_CATEGORY
        );
    }

    // ========================================================
    // STORAGE
    // ========================================================

    #[storage_mapper("topicTitles")]
    fn topic_titles(&self) -> UnorderedSetMapper<ManagedBuffer>;

    #[storage_mapper("topics")]
    fn topics(&self, title: &ManagedBuffer) -> SingleValueMapper<Topic<Self::Api>>;
}
