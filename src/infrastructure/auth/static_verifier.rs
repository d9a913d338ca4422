use async_trait::async_trait;

use crate::application::ports::TokenVerifier;

/// Verifier that accepts a single configured bearer credential. Stands in for
/// an external token service; the gateway only sees the `TokenVerifier` port,
/// so swapping in a real verifier touches no pipeline code.
pub struct StaticTokenVerifier {
    expected: String,
}

impl StaticTokenVerifier {
    pub fn new(expected: String) -> Self {
        Self { expected }
    }
}

#[async_trait]
impl TokenVerifier for StaticTokenVerifier {
    async fn verify(&self, token: &str) -> bool {
        // Constant-time byte compare over equal-length inputs.
        if token.len() != self.expected.len() {
            return false;
        }
        token
            .bytes()
            .zip(self.expected.bytes())
            .fold(0u8, |acc, (a, b)| acc | (a ^ b))
            == 0
    }
}
