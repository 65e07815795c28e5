//! Instruction schemas for the `solbank` program, encoded the way Anchor programs expect them:
//! an 8-byte discriminator (`sha256("global:<name>")[..8]`) followed by the Borsh-encoded args.
//!
//! Each instruction has a typed accounts struct whose `create_instruction` method produces a
//! [`solana_instruction::Instruction`] with account metas in the program's declared order.

pub mod amount;
pub mod create;
pub mod deposit;
pub mod withdraw;

pub use amount::*;
pub use create::*;
pub use deposit::*;
pub use withdraw::*;

use crate::error::SolbankError;

pub const DISCRIMINATOR_LEN: usize = 8;

pub type Discriminator = [u8; DISCRIMINATOR_LEN];

#[derive(Clone, Copy, Debug, PartialEq, Eq, strum_macros::Display, strum_macros::EnumIter)]
#[strum(serialize_all = "snake_case")]
pub enum SolbankInstruction {
    Create,
    Deposit,
    Withdraw,
}

#[rustfmt::skip]
impl SolbankInstruction {
    pub const fn discriminator(&self) -> Discriminator {
        match self {
            SolbankInstruction::Create   => [0x18, 0x1e, 0xc8, 0x28, 0x05, 0x1c, 0x07, 0x77],
            SolbankInstruction::Deposit  => [0xf2, 0x23, 0xc6, 0x89, 0x52, 0xe1, 0xf2, 0xb6],
            SolbankInstruction::Withdraw => [0xb7, 0x12, 0x46, 0x9c, 0x94, 0x6d, 0xa1, 0x22],
        }
    }
}

impl SolbankInstruction {
    /// Splits raw instruction data into the instruction it targets and the remaining arg bytes.
    pub fn split_data(data: &[u8]) -> Result<(Self, &[u8]), SolbankError> {
        if data.len() < DISCRIMINATOR_LEN {
            return Err(SolbankError::InsufficientByteLength);
        }
        let (tag, args) = data.split_at(DISCRIMINATOR_LEN);
        let tag: Discriminator = tag
            .try_into()
            .map_err(|_| SolbankError::InsufficientByteLength)?;

        Ok((Self::try_from(tag)?, args))
    }
}

impl TryFrom<Discriminator> for SolbankInstruction {
    type Error = SolbankError;

    fn try_from(tag: Discriminator) -> Result<Self, Self::Error> {
        [
            SolbankInstruction::Create,
            SolbankInstruction::Deposit,
            SolbankInstruction::Withdraw,
        ]
        .into_iter()
        .find(|ixn| ixn.discriminator() == tag)
        .ok_or(SolbankError::InvalidInstructionTag)
    }
}

/// Prefixes packed args with the instruction's discriminator.
pub(crate) fn tagged(ixn: SolbankInstruction, args: &[u8]) -> Vec<u8> {
    [ixn.discriminator().as_slice(), args].concat()
}
