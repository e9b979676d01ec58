use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("unknown legal code {0:?} (expected one of IPC, BNS, CrPC, BNSS, IT Act, POCSO)")]
    UnknownCode(String),

    #[error("unknown mapping status {0:?} (expected replaced, amended or repealed)")]
    UnknownStatus(String),
}
