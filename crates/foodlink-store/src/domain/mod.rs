//! Domain logic for the donation store: view-list identities, the
//! mutation refresh plan, QR payload parsing, and error types.

pub mod errors;
pub mod lists;
pub mod mutation;
pub mod qr;

pub use errors::QrError;
pub use lists::ListKind;
pub use mutation::{ConfirmOutcome, MutationKind};
pub use qr::QrPayload;
