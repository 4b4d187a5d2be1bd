use crate::error::{Error, Result};
use crate::V3;

#[derive(Clone, Debug, PartialEq)]
pub struct ParticleTemplate {
	pub pos: V3,
	pub pinned: bool,
}

// ps index into PhysicalModel::particles
#[derive(Clone, Debug, PartialEq)]
pub struct DistanceConstraintTemplate {
	pub ps: [usize; 2],
	pub l0: f32,
}

/// Which particles of the top row are pinned.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Anchor {
	Free,
	Corners,
	EveryOther,
	TopRow,
}

impl Anchor {
	fn pins(self, col: usize, cols: usize) -> bool {
		match self {
			Anchor::Free => false,
			Anchor::Corners => col == 0 || col + 1 == cols,
			Anchor::EveryOther => col % 2 == 0,
			Anchor::TopRow => true,
		}
	}
}

/// Particles and constraints positioned relative to a model origin,
/// not yet owned by any world.
#[derive(Clone, Debug, Default)]
pub struct PhysicalModel {
	pub particles: Vec<ParticleTemplate>,
	pub constraints: Vec<DistanceConstraintTemplate>,
}

impl PhysicalModel {
	/// Grid of `cols * rows` particles `size` apart, row-major. Every
	/// particle is linked to the one above and the one to its left.
	pub fn new_cloth(
		cols: usize,
		rows: usize,
		size: f32,
		anchor: Anchor,
	) -> Result<Self> {
		if cols == 0 || rows == 0 {
			return Err(Error::InvalidGrid { cols, rows });
		}
		if !(size.is_finite() && size > 0.) {
			return Err(Error::InvalidSpacing(size));
		}
		let id = |col: usize, row: usize| row * cols + col;
		let mut particles = Vec::with_capacity(cols * rows);
		let mut constraints = vec![];
		for row in 0..rows {
			for col in 0..cols {
				let pos = V3::new(size * col as f32, size * row as f32, 0.);
				let pinned = row == 0 && anchor.pins(col, cols);
				particles.push(ParticleTemplate { pos, pinned });
				if row > 0 {
					constraints.push(DistanceConstraintTemplate {
						ps: [id(col, row), id(col, row - 1)],
						l0: size,
					});
				}
				if col > 0 {
					constraints.push(DistanceConstraintTemplate {
						ps: [id(col, row), id(col - 1, row)],
						l0: size,
					});
				}
			}
		}
		Ok(Self {
			particles,
			constraints,
		})
	}
}
