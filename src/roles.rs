multiversx_sc::imports!();

use crate::errors::{ERR_INVALID_ADDRESS, ERR_ONLY_ADAPTER, ERR_ONLY_MANAGER};

/// Manager role, adapter trust and the acting-caller rule every other
/// module builds its guards on.
#[multiversx_sc::module]
pub trait RolesModule: crate::events::EventsModule {
    // ========================================================
    // ENDPOINT: setManager
    // ========================================================

    #[endpoint(setManager)]
    fn set_manager(&self, new_manager: ManagedAddress, on_behalf_of: OptionalValue<ManagedAddress>) {
        let caller = self.resolve_caller(on_behalf_of);
        self.require_manager(&caller);
        require!(!new_manager.is_zero(), ERR_INVALID_ADDRESS);

        self.change_manager(&new_manager);
    }

    // ========================================================
    // ENDPOINT: setAdapter
    // The adapter is the only account allowed to act on behalf
    // of another caller. Zero revokes the trust.
    // ========================================================

    #[endpoint(setAdapter)]
    fn set_adapter(&self, adapter: ManagedAddress) {
        let caller = self.blockchain().get_caller();
        self.require_manager(&caller);

        if adapter.is_zero() {
            self.adapter_address().clear();
        } else {
            self.adapter_address().set(&adapter);
        }
    }

    #[view(getManager)]
    fn get_manager(&self) -> ManagedAddress {
        self.manager().get()
    }

    #[view(getAdapter)]
    fn get_adapter(&self) -> ManagedAddress {
        if self.adapter_address().is_empty() {
            return ManagedAddress::zero();
        }
        self.adapter_address().get()
    }

    // ========================================================
    // INTERNAL: caller resolution & guards
    // ========================================================

    /// The address an operation acts for. A forwarded identity is
    /// honoured only when the direct caller is the trusted adapter.
    fn resolve_caller(&self, on_behalf_of: OptionalValue<ManagedAddress>) -> ManagedAddress {
        let caller = self.blockchain().get_caller();
        match on_behalf_of {
            OptionalValue::Some(original_caller) => {
                require!(
                    !self.adapter_address().is_empty() && self.adapter_address().get() == caller,
                    ERR_ONLY_ADAPTER
                );
                original_caller
            },
            OptionalValue::None => caller,
        }
    }

    fn is_manager(&self, address: &ManagedAddress) -> bool {
        self.manager().get() == *address
    }

    fn require_manager(&self, caller: &ManagedAddress) {
        require!(self.is_manager(caller), ERR_ONLY_MANAGER);
    }

    fn change_manager(&self, new_manager: &ManagedAddress) {
        self.manager().set(new_manager);
        self.manager_changed_event(new_manager);
    }

    // ========================================================
    // STORAGE
    // ========================================================

    #[storage_mapper("manager")]
    fn manager(&self) -> SingleValueMapper<ManagedAddress>;

    #[storage_mapper("adapterAddress")]
    fn adapter_address(&self) -> SingleValueMapper<ManagedAddress>;
}
