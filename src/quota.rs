multiversx_sc::imports!();

use crate::errors::{ERR_INSUFFICIENT_PAYMENT, ERR_PAID_TWICE, ERR_RESIDENCE_NOT_FOUND};
use crate::residents::is_valid_residence;
use crate::types::QuotaEntry;

/// Billing period: 30 days in seconds
pub const BILLING_PERIOD: u64 = 30 * 24 * 60 * 60;

#[multiversx_sc::module]
pub trait QuotaModule: crate::roles::RolesModule + crate::events::EventsModule {
    // ========================================================
    // ENDPOINT: payQuota
    // Pays one billing period for a residence. The EGLD stays
    // in the contract and funds the treasury.
    // ========================================================

    #[endpoint(payQuota)]
    #[payable("EGLD")]
    fn pay_quota(&self, residence_id: u32, on_behalf_of: OptionalValue<ManagedAddress>) {
        let payer = self.resolve_caller(on_behalf_of);
        require!(is_valid_residence(residence_id), ERR_RESIDENCE_NOT_FOUND);

        let payment = self.call_value().egld_value().clone_value();
        require!(payment >= self.monthly_quota().get(), ERR_INSUFFICIENT_PAYMENT);

        let now = self.blockchain().get_block_timestamp();
        let mut entry = self.quota_entry(residence_id, now);

        let period_start = match entry.last_payment {
            Some(_) => {
                require!(!entry.is_current(now), ERR_PAID_TWICE);
                // A lapsed due date restarts from now, debts do not stack
                core::cmp::max(now, entry.next_payment)
            },
            None => now,
        };

        entry.next_payment = period_start + BILLING_PERIOD;
        entry.last_payment = Some(now);
        self.ledger(residence_id).set(&entry);

        self.quota_paid_event(residence_id, &payer, &payment, entry.next_payment);
    }

    #[view(getQuota)]
    fn get_quota(&self) -> BigUint {
        self.monthly_quota().get()
    }

    // ========================================================
    // INTERNAL: ledger bookkeeping
    // ========================================================

    /// Ledger entry of a residence. A residence nobody ever paid for
    /// is due right away.
    fn quota_entry(&self, residence_id: u32, now: u64) -> QuotaEntry {
        if self.ledger(residence_id).is_empty() {
            return QuotaEntry {
                next_payment: now,
                last_payment: None,
            };
        }
        self.ledger(residence_id).get()
    }

    fn next_payment(&self, residence_id: u32) -> u64 {
        let now = self.blockchain().get_block_timestamp();
        self.quota_entry(residence_id, now).next_payment
    }

    fn is_defaulter(&self, residence_id: u32) -> bool {
        let now = self.blockchain().get_block_timestamp();
        !self.quota_entry(residence_id, now).is_current(now)
    }

    /// A new occupant moves in. The first occupant of a residence
    /// without payment history gets one billing period of grace.
    fn open_ledger(&self, residence_id: u32) {
        if self.ledger(residence_id).is_empty() {
            let now = self.blockchain().get_block_timestamp();
            self.ledger(residence_id).set(QuotaEntry {
                next_payment: now + BILLING_PERIOD,
                last_payment: None,
            });
        }
        self.residence_occupants(residence_id).update(|count| *count += 1);
    }

    /// An occupant leaves. The payment state goes with the last one.
    fn close_ledger(&self, residence_id: u32) {
        let remaining = self.residence_occupants(residence_id).update(|count| {
            *count = count.saturating_sub(1);
            *count
        });
        if remaining == 0 {
            self.residence_occupants(residence_id).clear();
            self.ledger(residence_id).clear();
        }
    }

    fn change_quota(&self, monthly_quota: &BigUint) {
        self.monthly_quota().set(monthly_quota);
        self.quota_changed_event(monthly_quota);
    }

    // ========================================================
    // STORAGE
    // ========================================================

    #[storage_mapper("monthlyQuota")]
    fn monthly_quota(&self) -> SingleValueMapper<BigUint>;

    #[storage_mapper("ledger")]
    fn ledger(&self, residence_id: u32) -> SingleValueMapper<QuotaEntry>;

    #[storage_mapper("residenceOccupants")]
    fn residence_occupants(&self, residence_id: u32) -> SingleValueMapper<u32>;
}
