// Failure reasons. Clients match on these strings, keep them stable.

// ── Authorization ──
pub const ERR_ONLY_MANAGER: &str = "Only the manager can call this function";
pub const ERR_ONLY_MANAGER_OR_COUNSELOR: &str = "Only manager and counselor can call this function";
pub const ERR_ONLY_MANAGER_OR_RESIDENT: &str = "Only manager and residents can call this function";
pub const ERR_ONLY_ADAPTER: &str = "Only the adapter can forward calls";

// ── Validation ──
pub const ERR_INVALID_ADDRESS: &str = "Invalid Address";
pub const ERR_RESIDENCE_NOT_FOUND: &str = "Residence does not exist";
pub const ERR_WRONG_CATEGORY: &str = "Wrong Category";
pub const ERR_EMPTY_TITLE: &str = "Title cannot be empty";
pub const ERR_INVALID_OPTION: &str = "Option must be YES, NO or ABSTENTION";
pub const ERR_INVALID_QUOTA: &str = "Monthly quota must be positive";

// ── Existence ──
pub const ERR_RESIDENT_EXISTS: &str = "Resident already exists";
pub const ERR_RESIDENT_NOT_FOUND: &str = "Resident does not exist";
pub const ERR_COUNSELOR_NOT_RESIDENT: &str = "The counselor must be a resident";
pub const ERR_COUNSELOR_NOT_FOUND: &str = "Counselor does not exist";
pub const ERR_TOPIC_EXISTS: &str = "Topic already exists";
pub const ERR_TOPIC_NOT_FOUND: &str = "Topic does not exist";

// ── State ──
pub const ERR_TOPIC_NOT_IDLE: &str = "Topic is not IDLE";
pub const ERR_EDIT_NOT_IDLE: &str = "Topic status needs to be IDLE for edit";
pub const ERR_TOPIC_NOT_VOTING: &str = "Topic is not VOTING";
pub const ERR_ALREADY_VOTED: &str = "Resident already voted";

// ── Economic ──
pub const ERR_QUOTA_UNPAID: &str = "The quota must be paid";
pub const ERR_INSUFFICIENT_PAYMENT: &str = "Insufficient payment value";
pub const ERR_PAID_TWICE: &str = "You cannot pay twice in a month";
pub const ERR_NOT_ENOUGH_VOTES: &str = "Not enough votes";
pub const ERR_INSUFFICIENT_FUNDS: &str = "Insufficient funds";
pub const ERR_NOT_APPROVED_SPENT: &str = "Only approved spent topics can be used for transfers";
pub const ERR_AMOUNT_EXCEEDS_TOPIC: &str = "The amount must be up to topic amount";
