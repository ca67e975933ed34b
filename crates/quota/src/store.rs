//! Storage capability for the quota record.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use parking_lot::Mutex;
use tempfile::NamedTempFile;

/// Single-slot durable byte store holding the quota record.
///
/// Implementations must report write failures: a silently dropped write
/// would let the in-memory count drift from what is durably recorded.
pub trait QuotaStore: Send + Sync {
	/// Returns the stored bytes, or `None` when nothing has been written.
	fn read(&self) -> io::Result<Option<Vec<u8>>>;

	/// Replaces the stored bytes.
	fn write(&self, bytes: &[u8]) -> io::Result<()>;
}

/// Record kept in a file, replaced atomically on every write.
#[derive(Debug, Clone)]
pub struct FileStore {
	path: PathBuf,
}

impl FileStore {
	pub fn new(path: impl Into<PathBuf>) -> Self {
		Self { path: path.into() }
	}

	/// `<data_local_dir>/retouch/quota.json`, if the platform has one.
	pub fn default_path() -> Option<PathBuf> {
		dirs::data_local_dir().map(|dir| dir.join("retouch").join("quota.json"))
	}

	pub fn path(&self) -> &Path {
		&self.path
	}
}

impl QuotaStore for FileStore {
	fn read(&self) -> io::Result<Option<Vec<u8>>> {
		match fs::read(&self.path) {
			Ok(bytes) => Ok(Some(bytes)),
			Err(error) if error.kind() == io::ErrorKind::NotFound => Ok(None),
			Err(error) => Err(error),
		}
	}

	fn write(&self, bytes: &[u8]) -> io::Result<()> {
		let dir = match self.path.parent() {
			Some(parent) if !parent.as_os_str().is_empty() => parent,
			_ => Path::new("."),
		};
		fs::create_dir_all(dir)?;

		// Readers in other processes see either the old or the new record.
		let mut tmp = NamedTempFile::new_in(dir)?;
		tmp.write_all(bytes)?;
		tmp.as_file().sync_all()?;
		tmp.persist(&self.path).map_err(|error| error.error)?;
		Ok(())
	}
}

#[derive(Debug, Default)]
struct MemorySlot {
	bytes: Option<Vec<u8>>,
	reads: usize,
	writes: usize,
	fail_reads: bool,
	fail_writes: bool,
}

/// In-memory store that counts accesses and can inject failures.
///
/// Clones share the same slot, so a test can keep one handle for assertions
/// while the tracker owns another.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
	slot: Arc<Mutex<MemorySlot>>,
}

impl MemoryStore {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_bytes(bytes: impl Into<Vec<u8>>) -> Self {
		let store = Self::default();
		store.slot.lock().bytes = Some(bytes.into());
		store
	}

	/// Current contents, without counting as a read.
	pub fn contents(&self) -> Option<Vec<u8>> {
		self.slot.lock().bytes.clone()
	}

	pub fn set_contents(&self, bytes: Option<Vec<u8>>) {
		self.slot.lock().bytes = bytes;
	}

	pub fn reads(&self) -> usize {
		self.slot.lock().reads
	}

	pub fn writes(&self) -> usize {
		self.slot.lock().writes
	}

	pub fn fail_reads(&self, fail: bool) {
		self.slot.lock().fail_reads = fail;
	}

	pub fn fail_writes(&self, fail: bool) {
		self.slot.lock().fail_writes = fail;
	}
}

impl QuotaStore for MemoryStore {
	fn read(&self) -> io::Result<Option<Vec<u8>>> {
		let mut slot = self.slot.lock();
		slot.reads += 1;
		if slot.fail_reads {
			return Err(io::Error::other("injected read failure"));
		}
		Ok(slot.bytes.clone())
	}

	fn write(&self, bytes: &[u8]) -> io::Result<()> {
		let mut slot = self.slot.lock();
		slot.writes += 1;
		if slot.fail_writes {
			return Err(io::Error::new(io::ErrorKind::StorageFull, "injected write failure"));
		}
		slot.bytes = Some(bytes.to_vec());
		Ok(())
	}
}
