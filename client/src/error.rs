//! The outcome type shared by every action: a [`BankErrorKind`] callers can match on plus the
//! underlying cause.

use solana_client::client_error::ClientError;
use solana_instruction::error::InstructionError;
use solana_sdk::transaction::TransactionError;
use solbank_interface::error::SolbankError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, strum_macros::Display)]
pub enum BankErrorKind {
    /// The wallet or cluster connection wasn't provided.
    ProviderUnavailable,
    /// The program or the cluster refused the transaction (duplicate bank, insufficient funds,
    /// not the bank's owner, ...).
    Rejected,
    /// Network or RPC failure.
    Rpc,
    /// The transaction couldn't be signed by the provider's wallet.
    Signing,
    /// An account was expected to exist but doesn't.
    AccountNotFound,
    /// Account data didn't decode as a bank, or instruction args didn't encode.
    Decode,
    /// The computed withdrawal amount was zero or would dip below rent exemption.
    NothingToWithdraw,
}

#[derive(Debug)]
pub struct BankError {
    kind: BankErrorKind,
    source: anyhow::Error,
}

impl BankError {
    pub fn new(kind: BankErrorKind, source: impl Into<anyhow::Error>) -> Self {
        Self {
            kind,
            source: source.into(),
        }
    }

    pub fn msg(kind: BankErrorKind, msg: impl core::fmt::Display) -> Self {
        Self::new(kind, anyhow::anyhow!("{msg}"))
    }

    pub fn kind(&self) -> BankErrorKind {
        self.kind
    }

    /// The program error code behind a rejection, if the cause was a [`SolbankError`].
    pub fn program_error(&self) -> Option<SolbankError> {
        self.source.downcast_ref::<SolbankError>().copied()
    }

    /// Splits RPC client failures into transactions the cluster rejected and everything else.
    /// A rejection carrying a `solbank` custom error code keeps the decoded [`SolbankError`] as
    /// context so [`Self::program_error`] finds it.
    pub fn from_client_error(error: ClientError) -> Self {
        match error.get_transaction_error() {
            Some(TransactionError::InstructionError(_, InstructionError::Custom(code))) => {
                match SolbankError::from_program_code(code) {
                    Some(program_error) => Self::new(
                        BankErrorKind::Rejected,
                        anyhow::Error::new(error).context(program_error),
                    ),
                    None => Self::new(BankErrorKind::Rejected, error),
                }
            }
            Some(_) => Self::new(BankErrorKind::Rejected, error),
            None => Self::new(BankErrorKind::Rpc, error),
        }
    }
}

impl core::fmt::Display for BankError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}: {:#}", self.kind, self.source)
    }
}

impl std::error::Error for BankError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        let source: &(dyn std::error::Error + 'static) = self.source.as_ref();
        Some(source)
    }
}

impl From<SolbankError> for BankError {
    fn from(error: SolbankError) -> Self {
        Self::new(BankErrorKind::Decode, error)
    }
}
