//! Common error types for decoding `solbank` data and for the error codes the program reports.

#[derive(Clone, Copy, Debug, Eq, PartialEq, strum_macros::FromRepr, strum_macros::EnumIter)]
#[repr(u8)]
pub enum SolbankError {
    InvalidInstructionTag,
    InsufficientByteLength,
    InvalidAccountDiscriminant,
    InvalidAccountData,
    InvalidInstructionData,
    AccountAlreadyInUse,
    AccountNotInitialized,
    BankOwnerMismatch,
    InsufficientFunds,
    AddressDerivationFailed,
    IncorrectProgramId,
    MissingRequiredSigner,
}

/// Program errors reach clients as `InstructionError::Custom(PROGRAM_ERROR_CODE_OFFSET + code)`,
/// the first code available to user-defined Anchor errors.
pub const PROGRAM_ERROR_CODE_OFFSET: u32 = 6000;

impl SolbankError {
    pub fn program_code(self) -> u32 {
        PROGRAM_ERROR_CODE_OFFSET + self as u32
    }

    /// Decodes a custom instruction error code. Codes below the offset belong to the runtime or
    /// the framework and aren't `solbank` errors.
    pub fn from_program_code(code: u32) -> Option<Self> {
        code.checked_sub(PROGRAM_ERROR_CODE_OFFSET)
            .and_then(|repr| u8::try_from(repr).ok())
            .and_then(Self::from_repr)
    }
}

impl From<SolbankError> for &'static str {
    fn from(value: SolbankError) -> Self {
        match value {
            SolbankError::InvalidInstructionTag => "Invalid instruction discriminator",
            SolbankError::InsufficientByteLength => "Not enough bytes passed",
            SolbankError::InvalidAccountDiscriminant => "Invalid account discriminator",
            SolbankError::InvalidAccountData => "Account data couldn't be decoded",
            SolbankError::InvalidInstructionData => "Instruction data is invalid",
            SolbankError::AccountAlreadyInUse => "Bank account is already in use",
            SolbankError::AccountNotInitialized => "Bank account hasn't been created",
            SolbankError::BankOwnerMismatch => "Signer doesn't own this bank",
            SolbankError::InsufficientFunds => "Insufficient funds",
            SolbankError::AddressDerivationFailed => "PDA derivation failed",
            SolbankError::IncorrectProgramId => "Instruction isn't for the solbank program",
            SolbankError::MissingRequiredSigner => "A required signer is missing",
        }
    }
}

impl core::fmt::Display for SolbankError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let msg: &'static str = (*self).into();
        write!(f, "{self:?}: {msg}")
    }
}

impl std::error::Error for SolbankError {}

pub type SolbankResult<T = ()> = Result<T, SolbankError>;
