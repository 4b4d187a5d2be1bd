use crate::V3;

/// Axis-aligned box particles are kept inside.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PosBox {
	pub min: V3,
	pub max: V3,
}

impl Default for PosBox {
	fn default() -> Self {
		Self::from_size(800., 600.)
	}
}

impl PosBox {
	pub fn new(min: V3, max: V3) -> Self {
		Self { min, max }
	}

	/// x in [0, width], y and z in [0, height]
	pub fn from_size(width: f32, height: f32) -> Self {
		Self::new(V3::zeros(), V3::new(width, height, height))
	}

	pub fn contains(&self, pos: V3) -> bool {
		(0..3).all(|i| pos[i] >= self.min[i] && pos[i] <= self.max[i])
	}

	pub fn apply(&self, pos: &mut V3) -> bool {
		let mut flag = false;
		for i in 0..3 {
			if pos[i] < self.min[i] {
				pos[i] = self.min[i];
				flag = true;
			} else if pos[i] > self.max[i] {
				pos[i] = self.max[i];
				flag = true;
			}
		}
		flag
	}
}
