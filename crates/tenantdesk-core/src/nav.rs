//! Breadcrumb history for tree browsers
//!
//! Browsing a hierarchy (organization units, group trees, translation
//! namespaces) keeps the trail of visited nodes. Opening a node pushes it,
//! going back pops, clicking a breadcrumb jumps to it and drops everything
//! after. A stack created with a root never loses it.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavStack<T> {
	items: Vec<T>,
	pinned_root: bool,
}

impl<T> Default for NavStack<T> {
	fn default() -> Self {
		Self::new()
	}
}

impl<T> NavStack<T> {
	pub fn new() -> Self {
		Self { items: Vec::new(), pinned_root: false }
	}

	/// Stack whose first entry cannot be popped
	pub fn with_root(root: T) -> Self {
		Self { items: vec![root], pinned_root: true }
	}

	pub fn push(&mut self, item: T) {
		self.items.push(item);
	}

	pub fn pop(&mut self) -> Option<T> {
		if self.pinned_root && self.items.len() <= 1 {
			return None;
		}
		self.items.pop()
	}

	/// Make the entry at `index` current, dropping all entries after it.
	/// Returns false and leaves the stack untouched if `index` is out of range.
	pub fn jump_to(&mut self, index: usize) -> bool {
		if index >= self.items.len() {
			return false;
		}
		self.items.truncate(index + 1);
		true
	}

	pub fn current(&self) -> Option<&T> {
		self.items.last()
	}

	pub fn items(&self) -> &[T] {
		&self.items
	}

	pub fn len(&self) -> usize {
		self.items.len()
	}

	pub fn is_empty(&self) -> bool {
		self.items.is_empty()
	}

	/// Back to the root (if pinned) or empty
	pub fn reset(&mut self) {
		let keep = usize::from(self.pinned_root);
		self.items.truncate(keep);
	}
}

impl<T: PartialEq> NavStack<T> {
	/// Jump to `item` if it is already on the trail, push it otherwise
	pub fn visit(&mut self, item: T) {
		match self.items.iter().position(|i| *i == item) {
			Some(index) => {
				self.items.truncate(index + 1);
			}
			None => self.items.push(item),
		}
	}
}


// vim: ts=4
