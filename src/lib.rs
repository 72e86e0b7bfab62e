#![no_std]

multiversx_sc::imports!();

pub mod condominium_proxy;
pub mod errors;
pub mod events;
pub mod quota;
pub mod residents;
pub mod roles;
pub mod topics;
pub mod treasury;
pub mod types;
pub mod voting;

use errors::ERR_INVALID_QUOTA;

/// Self-governance of a residential complex: residents, monthly quota,
/// topics put to vote and a treasury spent only on approved topics.
///
/// Every state-changing endpoint takes a trailing optional
/// `on_behalf_of` address. Direct callers leave it out; the trusted
/// adapter (see `setAdapter`) fills it with its own caller.
#[multiversx_sc::contract]
pub trait Condominium:
    roles::RolesModule
    + quota::QuotaModule
    + residents::ResidentsModule
    + topics::TopicsModule
    + voting::VotingModule
    + treasury::TreasuryModule
    + events::EventsModule
{
    // ========================================================
    // Init / Upgrade
    // ========================================================

    #[init]
    fn init(&self, monthly_quota: BigUint) {
        require!(monthly_quota > 0u64, ERR_INVALID_QUOTA);

        let deployer = self.blockchain().get_caller();
        self.manager().set(&deployer);
        self.monthly_quota().set(&monthly_quota);
    }

    #[upgrade]
    fn upgrade(&self) {}
}
