//! Store-side error types.

use thiserror::Error;

/// Local rejection of a scanned QR payload.
///
/// Detected entirely client-side; none of these ever reach the network.
/// The display strings are the exact user-facing notification texts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum QrError {
    /// The scanner produced no text.
    #[error("No QR data scanned.")]
    EmptyScan,

    /// Missing id or token segment around the first colon.
    #[error("Invalid QR code format.")]
    InvalidFormat,

    /// The scanned id matches nothing in the relevant cached list.
    ///
    /// A usability precondition, not a security boundary: the server
    /// still re-validates the token on confirmation.
    #[error("This QR does not match any of your assigned tasks.")]
    NoMatchingTask,
}
