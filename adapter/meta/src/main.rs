fn main() {
    multiversx_sc_meta_lib::cli_main::<condominium_adapter::AbiProvider>();
}
