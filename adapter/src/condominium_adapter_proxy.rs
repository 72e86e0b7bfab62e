use multiversx_sc::proxy_imports::*;

use condominium::types::{Resident, ResidentPage, Topic, TopicPage, Vote, VoteOption};

pub struct CondominiumAdapterProxy;

impl<Env, From, To, Gas> TxProxyTrait<Env, From, To, Gas> for CondominiumAdapterProxy
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    type TxProxyMethods = CondominiumAdapterProxyMethods<Env, From, To, Gas>;

    fn proxy_methods(self, tx: Tx<Env, From, To, (), Gas, (), ()>) -> Self::TxProxyMethods {
        CondominiumAdapterProxyMethods { wrapped_tx: tx }
    }
}

pub struct CondominiumAdapterProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    wrapped_tx: Tx<Env, From, To, (), Gas, (), ()>,
}

impl<Env, From, Gas> CondominiumAdapterProxyMethods<Env, From, (), Gas>
where
    Env: TxEnv,
    Env::Api: VMApi,
    From: TxFrom<Env>,
    Gas: TxGas<Env>,
{
    pub fn init(self) -> TxTypedDeploy<Env, From, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_deploy()
            .original_result()
    }
}

impl<Env, From, To, Gas> CondominiumAdapterProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    Env::Api: VMApi,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    pub fn upgrade(self) -> TxTypedUpgrade<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_upgrade()
            .original_result()
    }
}

impl<Env, From, To, Gas> CondominiumAdapterProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    Env::Api: VMApi,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    // ── Implementation pointer ──

    pub fn set_implementation<Arg0: ProxyArg<ManagedAddress<Env::Api>>>(
        self,
        address: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("setImplementation")
            .argument(&address)
            .original_result()
    }

    pub fn get_impl_address(self) -> TxTypedCall<Env, From, To, NotPayable, Gas, ManagedAddress<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getImplAddress")
            .original_result()
    }

    pub fn get_owner(self) -> TxTypedCall<Env, From, To, NotPayable, Gas, ManagedAddress<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getOwner")
            .original_result()
    }

    // ── Residents & roles ──

    pub fn add_resident<Arg0: ProxyArg<ManagedAddress<Env::Api>>, Arg1: ProxyArg<u32>>(
        self,
        resident: Arg0,
        residence_id: Arg1,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("addResident")
            .argument(&resident)
            .argument(&residence_id)
            .original_result()
    }

    pub fn remove_resident<Arg0: ProxyArg<ManagedAddress<Env::Api>>>(
        self,
        resident: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("removeResident")
            .argument(&resident)
            .original_result()
    }

    pub fn add_counselor<Arg0: ProxyArg<ManagedAddress<Env::Api>>>(
        self,
        counselor: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("addCounselor")
            .argument(&counselor)
            .original_result()
    }

    pub fn remove_counselor<Arg0: ProxyArg<ManagedAddress<Env::Api>>>(
        self,
        counselor: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("removeCounselor")
            .argument(&counselor)
            .original_result()
    }

    pub fn set_manager<Arg0: ProxyArg<ManagedAddress<Env::Api>>>(
        self,
        new_manager: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("setManager")
            .argument(&new_manager)
            .original_result()
    }

    // ── Quota ──

    pub fn pay_quota<Arg0: ProxyArg<u32>>(
        self,
        residence_id: Arg0,
    ) -> TxTypedCall<Env, From, To, (), Gas, ()> {
        self.wrapped_tx
            .raw_call("payQuota")
            .argument(&residence_id)
            .original_result()
    }

    // ── Topics ──

    pub fn create_topic<Arg0: ProxyArg<ManagedBuffer<Env::Api>>, Arg1: ProxyArg<ManagedBuffer<Env::Api>>, Arg2: ProxyArg<u8>, Arg3: ProxyArg<BigUint<Env::Api>>, Arg4: ProxyArg<ManagedAddress<Env::Api>>>(
        self,
        title: Arg0,
        description: Arg1,
        category: Arg2,
        amount: Arg3,
        responsible: Arg4,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("createTopic")
            .argument(&title)
            .argument(&description)
            .argument(&category)
            .argument(&amount)
            .argument(&responsible)
            .original_result()
    }

    pub fn edit_topic<Arg0: ProxyArg<ManagedBuffer<Env::Api>>, Arg1: ProxyArg<ManagedBuffer<Env::Api>>, Arg2: ProxyArg<BigUint<Env::Api>>, Arg3: ProxyArg<ManagedAddress<Env::Api>>>(
        self,
        title: Arg0,
        description: Arg1,
        amount: Arg2,
        responsible: Arg3,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("editTopic")
            .argument(&title)
            .argument(&description)
            .argument(&amount)
            .argument(&responsible)
            .original_result()
    }

    pub fn remove_topic<Arg0: ProxyArg<ManagedBuffer<Env::Api>>>(
        self,
        title: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("removeTopic")
            .argument(&title)
            .original_result()
    }

    // ── Voting ──

    pub fn open_voting<Arg0: ProxyArg<ManagedBuffer<Env::Api>>>(
        self,
        title: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("openVoting")
            .argument(&title)
            .original_result()
    }

    pub fn vote<Arg0: ProxyArg<ManagedBuffer<Env::Api>>, Arg1: ProxyArg<VoteOption>>(
        self,
        title: Arg0,
        option: Arg1,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("vote")
            .argument(&title)
            .argument(&option)
            .original_result()
    }

    pub fn close_voting<Arg0: ProxyArg<ManagedBuffer<Env::Api>>>(
        self,
        title: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, Topic<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("closeVoting")
            .argument(&title)
            .original_result()
    }

    // ── Treasury ──

    pub fn transfer<Arg0: ProxyArg<ManagedBuffer<Env::Api>>, Arg1: ProxyArg<BigUint<Env::Api>>>(
        self,
        title: Arg0,
        amount: Arg1,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, Topic<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("transfer")
            .argument(&title)
            .argument(&amount)
            .original_result()
    }

    // ── Views ──

    pub fn get_manager(self) -> TxTypedCall<Env, From, To, NotPayable, Gas, ManagedAddress<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getManager")
            .original_result()
    }

    pub fn get_quota(self) -> TxTypedCall<Env, From, To, NotPayable, Gas, BigUint<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getQuota")
            .original_result()
    }

    pub fn get_resident<Arg0: ProxyArg<ManagedAddress<Env::Api>>>(
        self,
        address: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, Resident<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getResident")
            .argument(&address)
            .original_result()
    }

    pub fn get_residents<Arg0: ProxyArg<u64>, Arg1: ProxyArg<u64>>(
        self,
        page: Arg0,
        size: Arg1,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ResidentPage<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getResidents")
            .argument(&page)
            .argument(&size)
            .original_result()
    }

    pub fn get_topic<Arg0: ProxyArg<ManagedBuffer<Env::Api>>>(
        self,
        title: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, Topic<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getTopic")
            .argument(&title)
            .original_result()
    }

    pub fn get_topics<Arg0: ProxyArg<u64>, Arg1: ProxyArg<u64>>(
        self,
        page: Arg0,
        size: Arg1,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, TopicPage<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getTopics")
            .argument(&page)
            .argument(&size)
            .original_result()
    }

    pub fn get_votes<Arg0: ProxyArg<ManagedBuffer<Env::Api>>>(
        self,
        title: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, MultiValueEncoded<Env::Api, Vote<Env::Api>>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getVotes")
            .argument(&title)
            .original_result()
    }

    pub fn number_of_votes<Arg0: ProxyArg<ManagedBuffer<Env::Api>>>(
        self,
        title: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, u64> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("numberOfVotes")
            .argument(&title)
            .original_result()
    }
}
