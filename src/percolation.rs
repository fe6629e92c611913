use crate::data::{Direction, Reach, Site, SiteState};
use crate::disjoint_set::DisjointSet;
use crate::error::{Error, Result};

/// An n-by-n grid of sites that are opened one at a time.
///
/// Each connected component records, on its root, whether it touches the
/// top row and/or the bottom row. `is_full` and `percolates` both read that
/// record, so there are no virtual top/bottom nodes and no backwash: a
/// bottom-row site is only full if it is actually joined to the top.
#[derive(Debug, Clone)]
pub struct Percolation {
	size: usize,
	sites: Vec<SiteState>,
	reach: Vec<Reach>,
	sets: DisjointSet,
	opened: usize,
	percolated: bool,
}

impl Percolation {
	pub fn new(n: usize) -> Result<Percolation> {
		if n < 1 {
			return Err(Error::invalid(format!("grid size must be at least 1, got {}", n)));
		}
		let num_sites = n.checked_mul(n)
			.ok_or_else(|| Error::invalid(format!("grid size {} is too large", n)))?;
		Ok(Percolation {
			size: n,
			sites: vec![SiteState::Blocked; num_sites],
			reach: vec![Reach::NONE; num_sites],
			sets: DisjointSet::make_singletons(num_sites),
			opened: 0,
			percolated: false,
		})
	}

	pub fn size(&self) -> usize {
		self.size
	}

	pub fn open(&mut self, row: usize, col: usize) -> Result<()> {
		let idx = self.index(row, col)?;
		if self.sites[idx] == SiteState::Open {
			return Ok(());
		}
		self.sites[idx] = SiteState::Open;
		self.reach[idx] = Reach::for_row(row, self.size);
		self.opened += 1;

		let site = Site::new(row, col);
		for d in Direction::adjacent_directions().iter() {
			let next = match site.step_toward(*d, self.size) {
				Some(next) => next,
				None => continue,
			};
			let next_idx = self.index(next.row, next.col)?;
			if self.sites[next_idx] != SiteState::Open {
				continue;
			}
			// read both roots before the merge; the surviving root gets the union
			let merged = self.reach[self.sets.find(idx)?] | self.reach[self.sets.find(next_idx)?];
			let root = self.sets.unite(idx, next_idx)?;
			self.reach[root] = merged;
		}

		let root = self.sets.find(idx)?;
		if !self.percolated && self.reach[root].spans() {
			debug!("{0}x{0} grid percolates after {1} opened sites (last {2}, {3})",
				self.size, self.opened, row, col);
			self.percolated = true;
		}
		Ok(())
	}

	pub fn is_open(&self, row: usize, col: usize) -> Result<bool> {
		let idx = self.index(row, col)?;
		Ok(self.sites[idx] == SiteState::Open)
	}

	/// Is the site open and joined to some open site in the top row?
	pub fn is_full(&self, row: usize, col: usize) -> Result<bool> {
		let idx = self.index(row, col)?;
		if self.sites[idx] != SiteState::Open {
			return Ok(false);
		}
		let root = self.sets.root(idx)?;
		Ok(self.reach[root].top)
	}

	pub fn number_of_open_sites(&self) -> usize {
		self.opened
	}

	pub fn percolates(&self) -> bool {
		self.percolated
	}

	fn index(&self, row: usize, col: usize) -> Result<usize> {
		if row < 1 || row > self.size || col < 1 || col > self.size {
			return Err(Error::invalid(format!(
				"site ({}, {}) is outside a {}x{} grid", row, col, self.size, self.size)));
		}
		Ok((row - 1) * self.size + (col - 1))
	}
}
