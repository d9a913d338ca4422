use async_trait::async_trait;

/// Accept/reject decision on an opaque bearer credential.
///
/// Token issuance lives outside this service; the gateway only consumes the
/// verdict.
#[async_trait]
pub trait TokenVerifier: Send + Sync {
    async fn verify(&self, token: &str) -> bool;
}
