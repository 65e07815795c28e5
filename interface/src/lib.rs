//! Public interface layer for the `solbank` program: the program id and its interface document,
//! PDA seeds, instruction encoding, and account decoding for client integration.

pub mod error;
pub mod idl;
pub mod instructions;
pub mod seeds;
pub mod state;

pub mod program {
    use solana_address::Address;

    /// The deployed `solbank` program. Must match the `metadata.address` of the bundled IDL.
    pub const ID: Address = solana_pubkey::Pubkey::from_str_const(
        "G6Pz4JbpTfoErGeiNigc8prnumjyYkKatoo7jnaS2HUn",
    );
}

/// The system program id, required by `create` and `deposit`.
pub const SYSTEM_PROGRAM_ID: solana_address::Address =
    solana_pubkey::Pubkey::from_str_const("11111111111111111111111111111111");

/// Lamports per SOL, the ledger's base unit-scaling constant.
pub const LAMPORTS_PER_SOL: u64 = 1_000_000_000;
