// https://en.wikipedia.org/wiki/Disjoint-set_data_structure
use std::cmp::Ordering;
use crate::error::{Error, Result};

/// Union by rank plus path compression. Roots are plain element indices, so
/// callers can key per-set data on whatever `find` returns.
#[derive(Debug, Clone)]
pub struct DisjointSet {
	parent: Vec<usize>,
	rank: Vec<u8>,
	components: usize,
}

impl DisjointSet {
	pub fn make_singletons(size: usize) -> DisjointSet {
		DisjointSet {
			parent: (0..size).collect(),
			rank: vec![0; size],
			components: size,
		}
	}

	pub fn len(&self) -> usize {
		self.parent.len()
	}

	pub fn is_empty(&self) -> bool {
		self.parent.is_empty()
	}

	pub fn component_count(&self) -> usize {
		self.components
	}

	fn check(&self, x: usize) -> Result<()> {
		if x < self.parent.len() {
			Ok(())
		} else {
			Err(Error::invalid(format!("element {} out of range 0..{}", x, self.parent.len())))
		}
	}

	pub fn find(&mut self, x: usize) -> Result<usize> {
		self.check(x)?;
		Ok(self.compress(x))
	}

	fn compress(&mut self, x: usize) -> usize {
		let mut root = x;
		while self.parent[root] != root {
			root = self.parent[root];
		}
		let mut node = x;
		while self.parent[node] != root {
			let next = self.parent[node];
			self.parent[node] = root;
			node = next;
		}
		root
	}

	/// Same answer as `find`, without touching the forest. Rank keeps every
	/// tree O(log n) deep, so this is fine for read-only queries.
	pub fn root(&self, x: usize) -> Result<usize> {
		self.check(x)?;
		let mut root = x;
		while self.parent[root] != root {
			root = self.parent[root];
		}
		Ok(root)
	}

	/// Returns the root of the merged set.
	pub fn unite(&mut self, x: usize, y: usize) -> Result<usize> {
		let x_root = self.find(x)?;
		let y_root = self.find(y)?;
		if x_root == y_root {
			return Ok(x_root);
		}
		self.components -= 1;
		let root = match self.rank[x_root].cmp(&self.rank[y_root]) {
			Ordering::Less => {
				self.parent[x_root] = y_root;
				y_root
			}
			Ordering::Greater => {
				self.parent[y_root] = x_root;
				x_root
			}
			Ordering::Equal => {
				self.parent[y_root] = x_root;
				self.rank[x_root] += 1;
				x_root
			}
		};
		Ok(root)
	}

	pub fn connected(&mut self, x: usize, y: usize) -> Result<bool> {
		Ok(self.find(x)? == self.find(y)?)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn singletons_are_their_own_roots() {
		let mut ds = DisjointSet::make_singletons(5);
		assert_eq!(ds.len(), 5);
		assert_eq!(ds.component_count(), 5);
		for i in 0..5 {
			assert_eq!(ds.find(i), Ok(i));
			assert_eq!(ds.root(i), Ok(i));
		}
	}

	#[test]
	fn empty_set_is_allowed() {
		let mut ds = DisjointSet::make_singletons(0);
		assert!(ds.is_empty());
		assert!(matches!(ds.find(0), Err(Error::InvalidArgument(_))));
	}

	#[test]
	fn unite_merges_and_is_idempotent() {
		let mut ds = DisjointSet::make_singletons(4);
		let root = ds.unite(0, 1).unwrap();
		assert!(root == 0 || root == 1);
		assert_eq!(ds.component_count(), 3);
		assert_eq!(ds.unite(1, 0), Ok(root));
		assert_eq!(ds.component_count(), 3);
		assert!(ds.connected(0, 1).unwrap());
		assert!(!ds.connected(0, 2).unwrap());
	}

	#[test]
	fn unite_returns_current_root() {
		let mut ds = DisjointSet::make_singletons(6);
		ds.unite(0, 1).unwrap();
		ds.unite(2, 3).unwrap();
		let root = ds.unite(1, 3).unwrap();
		for i in 0..4 {
			assert_eq!(ds.find(i), Ok(root));
		}
		assert_eq!(ds.find(4), Ok(4));
	}

	#[test]
	fn transitivity() {
		let mut ds = DisjointSet::make_singletons(5);
		ds.unite(0, 1).unwrap();
		ds.unite(1, 2).unwrap();
		assert!(ds.connected(0, 2).unwrap());
		assert!(!ds.connected(0, 3).unwrap());
	}

	#[test]
	fn out_of_range_is_rejected() {
		let mut ds = DisjointSet::make_singletons(3);
		assert!(matches!(ds.find(3), Err(Error::InvalidArgument(_))));
		assert!(matches!(ds.root(7), Err(Error::InvalidArgument(_))));
		assert!(matches!(ds.unite(0, 3), Err(Error::InvalidArgument(_))));
		assert!(matches!(ds.unite(3, 0), Err(Error::InvalidArgument(_))));
		assert!(matches!(ds.connected(0, 9), Err(Error::InvalidArgument(_))));
		// failed calls leave the partition alone
		assert_eq!(ds.component_count(), 3);
	}

	#[test]
	fn long_chain_stays_shallow() {
		let n = 1 << 12;
		let mut ds = DisjointSet::make_singletons(n);
		for i in 1..n {
			ds.unite(i - 1, i).unwrap();
		}
		assert_eq!(ds.component_count(), 1);
		assert!(ds.rank.iter().all(|&r| (r as usize) <= 12));
	}
}
