multiversx_sc::imports!();

use crate::errors::{
    ERR_COUNSELOR_NOT_FOUND, ERR_COUNSELOR_NOT_RESIDENT, ERR_INVALID_ADDRESS,
    ERR_ONLY_MANAGER_OR_COUNSELOR, ERR_ONLY_MANAGER_OR_RESIDENT, ERR_QUOTA_UNPAID,
    ERR_RESIDENCE_NOT_FOUND, ERR_RESIDENT_EXISTS, ERR_RESIDENT_NOT_FOUND,
};
use crate::types::{page_bounds, Resident, ResidentPage, ResidentRecord};

// ============================================================
// Building topology: residence id = block * 10000 + floor * 100 + unit
// ============================================================

pub const BLOCKS: u32 = 3;
pub const FLOORS: u32 = 19;
pub const UNITS_PER_FLOOR: u32 = 4;

pub fn is_valid_residence(residence_id: u32) -> bool {
    let block = residence_id / 10_000;
    let floor = (residence_id % 10_000) / 100;
    let unit = residence_id % 100;

    (1..=BLOCKS).contains(&block)
        && (1..=FLOORS).contains(&floor)
        && (1..=UNITS_PER_FLOOR).contains(&unit)
}

#[multiversx_sc::module]
pub trait ResidentsModule:
    crate::roles::RolesModule + crate::quota::QuotaModule + crate::events::EventsModule
{
    // ========================================================
    // ENDPOINT: addResident
    // Manager or any counselor can register a resident.
    // ========================================================

    #[endpoint(addResident)]
    fn add_resident(
        &self,
        resident: ManagedAddress,
        residence_id: u32,
        on_behalf_of: OptionalValue<ManagedAddress>,
    ) {
        let caller = self.resolve_caller(on_behalf_of);
        require!(
            self.is_manager(&caller) || self.is_counselor(&caller),
            ERR_ONLY_MANAGER_OR_COUNSELOR
        );
        require!(is_valid_residence(residence_id), ERR_RESIDENCE_NOT_FOUND);
        require!(!resident.is_zero(), ERR_INVALID_ADDRESS);
        require!(!self.is_resident(&resident), ERR_RESIDENT_EXISTS);

        self.residents().insert(resident.clone());
        self.resident_records(&resident).set(ResidentRecord {
            residence: residence_id,
            is_counselor: false,
        });
        self.open_ledger(residence_id);

        self.resident_added_event(&resident, residence_id);
    }

    // ========================================================
    // ENDPOINT: removeResident
    // Drops the counselor flag with the record. swap_remove keeps
    // the enumeration dense, order is not preserved.
    // ========================================================

    #[endpoint(removeResident)]
    fn remove_resident(&self, resident: ManagedAddress, on_behalf_of: OptionalValue<ManagedAddress>) {
        let caller = self.resolve_caller(on_behalf_of);
        self.require_manager(&caller);
        require!(self.is_resident(&resident), ERR_RESIDENT_NOT_FOUND);

        let record = self.resident_records(&resident).get();
        self.residents().swap_remove(&resident);
        self.resident_records(&resident).clear();
        self.close_ledger(record.residence);

        if record.is_counselor {
            self.counselor_changed_event(&resident, false);
        }
        self.resident_removed_event(&resident, record.residence);
    }

    // ========================================================
    // ENDPOINTS: counselors
    // ========================================================

    #[endpoint(addCounselor)]
    fn add_counselor(&self, counselor: ManagedAddress, on_behalf_of: OptionalValue<ManagedAddress>) {
        let caller = self.resolve_caller(on_behalf_of);
        self.require_manager(&caller);
        require!(!counselor.is_zero(), ERR_INVALID_ADDRESS);
        require!(self.is_resident(&counselor), ERR_COUNSELOR_NOT_RESIDENT);

        self.resident_records(&counselor)
            .update(|record| record.is_counselor = true);
        self.counselor_changed_event(&counselor, true);
    }

    #[endpoint(removeCounselor)]
    fn remove_counselor(&self, counselor: ManagedAddress, on_behalf_of: OptionalValue<ManagedAddress>) {
        let caller = self.resolve_caller(on_behalf_of);
        self.require_manager(&caller);
        require!(!counselor.is_zero(), ERR_INVALID_ADDRESS);
        require!(self.is_counselor(&counselor), ERR_COUNSELOR_NOT_FOUND);

        self.resident_records(&counselor)
            .update(|record| record.is_counselor = false);
        self.counselor_changed_event(&counselor, false);
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(isResident)]
    fn is_resident(&self, address: &ManagedAddress) -> bool {
        self.residents().contains(address)
    }

    #[view(isCounselor)]
    fn is_counselor(&self, address: &ManagedAddress) -> bool {
        self.is_resident(address) && self.resident_records(address).get().is_counselor
    }

    #[view(residenceExists)]
    fn residence_exists(&self, residence_id: u32) -> bool {
        is_valid_residence(residence_id)
    }

    #[view(getResident)]
    fn get_resident(&self, address: ManagedAddress) -> Resident<Self::Api> {
        require!(self.is_resident(&address), ERR_RESIDENT_NOT_FOUND);
        self.load_resident(address)
    }

    #[view(getResidents)]
    fn get_residents(&self, page: u64, size: u64) -> ResidentPage<Self::Api> {
        let total = self.residents().len() as u64;
        let (start, end) = page_bounds(page, size, total);

        let mut residents = ManagedVec::new();
        for index in start..end {
            // UnorderedSetMapper indexes are 1-based
            let wallet = self.residents().get_by_index(index as usize + 1);
            residents.push(self.load_resident(wallet));
        }

        ResidentPage { residents, total }
    }

    #[view(getResidentCount)]
    fn get_resident_count(&self) -> u64 {
        self.residents().len() as u64
    }

    // ========================================================
    // INTERNAL: capability guards
    // ========================================================

    fn load_resident(&self, wallet: ManagedAddress) -> Resident<Self::Api> {
        let record = self.resident_records(&wallet).get();
        Resident {
            wallet,
            residence: record.residence,
            is_counselor: record.is_counselor,
            next_payment: self.next_payment(record.residence),
        }
    }

    fn require_manager_or_resident(&self, caller: &ManagedAddress) {
        require!(
            self.is_manager(caller) || self.is_resident(caller),
            ERR_ONLY_MANAGER_OR_RESIDENT
        );
    }

    /// Managers are exempt from the defaulter check.
    fn require_quota_paid(&self, caller: &ManagedAddress) {
        if self.is_manager(caller) {
            return;
        }
        let record = self.resident_records(caller).get();
        require!(!self.is_defaulter(record.residence), ERR_QUOTA_UNPAID);
    }

    // ========================================================
    // STORAGE
    // ========================================================

    #[storage_mapper("residents")]
    fn residents(&self) -> UnorderedSetMapper<ManagedAddress>;

    #[storage_mapper("residentRecords")]
    fn resident_records(&self, resident: &ManagedAddress) -> SingleValueMapper<ResidentRecord>;
}
