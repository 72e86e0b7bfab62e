multiversx_sc::imports!();
multiversx_sc::derive_imports!();

// ============================================================
// Topic Category: decides what an approved topic resolves to
// ============================================================

#[type_abi]
#[derive(
    TopEncode, TopDecode, NestedEncode, NestedDecode, ManagedVecItem, Clone, Copy, PartialEq, Debug,
)]
pub enum TopicCategory {
    // Plain yes/no decision. Carries no amount.
    Decision,
    // Spending authorization, consumed once by `transfer`.
    Spent,
    // Approving sets the monthly quota to the topic amount.
    ChangeQuota,
    // Approving hands the manager role to the responsible address.
    ChangeManager,
}

impl TopicCategory {
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(TopicCategory::Decision),
            1 => Some(TopicCategory::Spent),
            2 => Some(TopicCategory::ChangeQuota),
            3 => Some(TopicCategory::ChangeManager),
            _ => None,
        }
    }

    /// Only spending and quota topics are allowed a non-zero amount.
    pub fn carries_amount(&self) -> bool {
        matches!(self, TopicCategory::Spent | TopicCategory::ChangeQuota)
    }
}

// ============================================================
// Topic Status: lifecycle states
// ============================================================

#[type_abi]
#[derive(
    TopEncode, TopDecode, NestedEncode, NestedDecode, ManagedVecItem, Clone, Copy, PartialEq, Debug,
)]
pub enum TopicStatus {
    // Created, still editable and removable.
    Idle,
    // Voting is open.
    Voting,
    // Closed with more YES than NO votes.
    Approved,
    // Closed with YES <= NO. Terminal.
    Denied,
    // Removed while idle. Only ever seen in events, the record is purged.
    Deleted,
    // Approved spending already transferred. Terminal.
    Spent,
}

// ============================================================
// Topic: the core governance record
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, ManagedVecItem, Clone, Debug)]
pub struct Topic<M: ManagedTypeApi> {
    pub title: ManagedBuffer<M>,
    pub description: ManagedBuffer<M>,
    pub category: TopicCategory,
    pub amount: BigUint<M>,
    pub responsible: ManagedAddress<M>,
    pub status: TopicStatus,
    pub created_at: u64,
    /// Block timestamp when voting opened (0 while idle)
    pub started_at: u64,
    /// Block timestamp when voting closed (0 until closed)
    pub ended_at: u64,
}

/// What an approved topic does to the condominium, carrying only the
/// fields that matter for its category.
pub enum Resolution<M: ManagedTypeApi> {
    Decision,
    Spend {
        amount: BigUint<M>,
        responsible: ManagedAddress<M>,
    },
    ChangeQuota(BigUint<M>),
    ChangeManager(ManagedAddress<M>),
}

impl<M: ManagedTypeApi> Topic<M> {
    pub fn resolution(&self) -> Resolution<M> {
        match self.category {
            TopicCategory::Decision => Resolution::Decision,
            TopicCategory::Spent => Resolution::Spend {
                amount: self.amount.clone(),
                responsible: self.responsible.clone(),
            },
            TopicCategory::ChangeQuota => Resolution::ChangeQuota(self.amount.clone()),
            TopicCategory::ChangeManager => Resolution::ChangeManager(self.responsible.clone()),
        }
    }
}

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct TopicPage<M: ManagedTypeApi> {
    pub topics: ManagedVec<M, Topic<M>>,
    pub total: u64,
}

// ============================================================
// Votes
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Debug)]
pub enum VoteOption {
    /// Absence of a vote. Never stored, rejected as input.
    Empty,
    Yes,
    No,
    Abstention,
}

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct Vote<M: ManagedTypeApi> {
    pub title: ManagedBuffer<M>,
    pub voter: ManagedAddress<M>,
    pub option: VoteOption,
    pub timestamp: u64,
}

#[derive(Default, Clone, Copy, PartialEq, Debug)]
pub struct VoteTally {
    pub yes: u64,
    pub no: u64,
    pub abstention: u64,
}

impl VoteTally {
    pub fn record(&mut self, option: VoteOption) {
        match option {
            VoteOption::Yes => self.yes += 1,
            VoteOption::No => self.no += 1,
            VoteOption::Abstention => self.abstention += 1,
            VoteOption::Empty => {}
        }
    }

    pub fn cast(&self) -> u64 {
        self.yes + self.no + self.abstention
    }

    /// Ties are denied.
    pub fn approves(&self) -> bool {
        self.yes > self.no
    }
}

// ============================================================
// Residents & quota ledger
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub struct ResidentRecord {
    pub residence: u32,
    pub is_counselor: bool,
}

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, ManagedVecItem, Clone, Debug)]
pub struct Resident<M: ManagedTypeApi> {
    pub wallet: ManagedAddress<M>,
    pub residence: u32,
    pub is_counselor: bool,
    pub next_payment: u64,
}

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct ResidentPage<M: ManagedTypeApi> {
    pub residents: ManagedVec<M, Resident<M>>,
    pub total: u64,
}

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub struct QuotaEntry {
    pub next_payment: u64,
    /// None until the first payment. The grace period given to a new
    /// resident is not a paid period.
    pub last_payment: Option<u64>,
}

impl QuotaEntry {
    pub fn is_current(&self, now: u64) -> bool {
        self.next_payment >= now
    }
}

/// Window `[skip, skip + size)` of a 1-based page over `total` items.
/// Page 0 is read as page 1.
pub fn page_bounds(page: u64, size: u64, total: u64) -> (u64, u64) {
    let skip = page.saturating_sub(1).saturating_mul(size);
    let start = core::cmp::min(skip, total);
    let end = core::cmp::min(start.saturating_add(size), total);
    (start, end)
}
