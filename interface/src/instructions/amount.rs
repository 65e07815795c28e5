use borsh::BorshDeserialize;

use crate::error::SolbankError;

/// The instruction args shared by `deposit` and `withdraw`: a single lamport amount.
#[derive(Clone, Copy, Debug, PartialEq, Eq, BorshDeserialize)]
pub struct AmountInstructionData {
    /// The amount of lamports to deposit or withdraw.
    pub amount: u64,
}

impl AmountInstructionData {
    pub const LEN: usize = size_of::<u64>();

    pub fn new(amount: u64) -> Self {
        Self { amount }
    }

    pub fn pack(&self) -> [u8; Self::LEN] {
        self.amount.to_le_bytes()
    }

    pub fn unpack(args: &[u8]) -> Result<Self, SolbankError> {
        if args.len() < Self::LEN {
            return Err(SolbankError::InsufficientByteLength);
        }
        Self::try_from_slice(&args[..Self::LEN]).map_err(|_| SolbankError::InvalidInstructionData)
    }
}
