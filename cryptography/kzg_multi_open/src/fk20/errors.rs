/// Errors that can occur while verifying an FK20 multi-opening proof.
#[derive(Debug)]
pub enum VerifierError {
    /// The proof failed verification.
    InvalidProof,
}
