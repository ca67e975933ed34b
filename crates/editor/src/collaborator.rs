use async_trait::async_trait;
use retouch_primitives::ImagePayload;
use thiserror::Error;

/// Failures reported by the image provider.
///
/// The session never retries these; the caller may resubmit the same
/// instruction by hand.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CollaboratorError {
	/// Transport-level failure reaching the provider.
	#[error("request failed: {0}")]
	Request(String),

	/// The provider refused the input or instruction.
	#[error("provider rejected the request: {0}")]
	Rejected(String),

	/// The provider answered without image data.
	#[error("provider returned no image")]
	EmptyResponse,
}

/// External image generation and editing provider.
#[async_trait]
pub trait ImageCollaborator: Send + Sync {
	/// Produces a new image from an uploaded source.
	async fn generate(&self, source: &ImagePayload) -> Result<ImagePayload, CollaboratorError>;

	/// Applies a text instruction to `source`.
	async fn edit(&self, source: &ImagePayload, instruction: &str) -> Result<ImagePayload, CollaboratorError>;
}
