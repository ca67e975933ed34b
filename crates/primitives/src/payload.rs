use std::fmt;
use std::sync::Arc;

use bytes::Bytes;

/// An encoded image as produced by an upload or returned by the provider.
///
/// The session never decodes the bytes; a payload is an atomic token that is
/// stored in history and handed back to the collaborator as-is. Cloning is
/// cheap since both fields are reference counted.
#[derive(Clone, PartialEq, Eq)]
pub struct ImagePayload {
	mime_type: Arc<str>,
	data: Bytes,
}

impl ImagePayload {
	pub fn new(mime_type: impl Into<Arc<str>>, data: impl Into<Bytes>) -> Self {
		Self {
			mime_type: mime_type.into(),
			data: data.into(),
		}
	}

	/// MIME type reported alongside the bytes, e.g. `image/png`.
	pub fn mime_type(&self) -> &str {
		&self.mime_type
	}

	pub fn data(&self) -> &Bytes {
		&self.data
	}

	pub fn len(&self) -> usize {
		self.data.len()
	}

	pub fn is_empty(&self) -> bool {
		self.data.is_empty()
	}
}

// Image bytes are never useful in logs.
impl fmt::Debug for ImagePayload {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("ImagePayload")
			.field("mime_type", &self.mime_type)
			.field("len", &self.data.len())
			.finish()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn debug_omits_bytes() {
		let payload = ImagePayload::new("image/png", vec![1u8, 2, 3]);
		assert_eq!(format!("{payload:?}"), r#"ImagePayload { mime_type: "image/png", len: 3 }"#);
	}

	#[test]
	fn clones_share_bytes() {
		let payload = ImagePayload::new("image/jpeg", Bytes::from_static(b"jpeg"));
		let copy = payload.clone();
		assert_eq!(payload, copy);
		assert_eq!(copy.data().as_ptr(), payload.data().as_ptr());
		assert_eq!(copy.len(), 4);
		assert!(!copy.is_empty());
	}
}
