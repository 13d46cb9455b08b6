/// Source of fresh suffixes for placed node ids.
pub trait IdAllocator {
	/// Produce an id starting with `prefix`. Successive calls never repeat.
	fn allocate(&mut self, prefix: &str) -> String;
}

/// Monotonic counter starting at 1.
#[derive(Clone, Debug)]
pub struct SequentialIds {
	next: u64,
}

impl Default for SequentialIds {
	fn default() -> Self {
		Self { next: 1 }
	}
}

impl IdAllocator for SequentialIds {
	fn allocate(&mut self, prefix: &str) -> String {
		let n = self.next;
		self.next += 1;
		format!("{}-{}", prefix, n)
	}
}
