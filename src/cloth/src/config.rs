use crate::posbox::PosBox;
use crate::V3;

/// Order of the two halves of a relaxation pass.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum PassOrder {
	#[default]
	ClampThenRelax,
	RelaxThenClamp,
}

#[derive(Clone, Debug, PartialEq)]
pub struct WorldConfig {
	pub gravity: V3,
	pub bounds: PosBox,
	// relaxation passes per step
	pub iterations: usize,
	pub dt: f32,
	// steps per rendered frame
	pub ppr: usize,
	// cap on the displacement of one integration, unlimited by default
	pub max_dp: f32,
	pub order: PassOrder,
}

impl Default for WorldConfig {
	fn default() -> Self {
		Self {
			gravity: V3::new(0., 9.81, 0.),
			bounds: PosBox::default(),
			iterations: 3,
			dt: 1. / 60.,
			ppr: 1,
			max_dp: f32::INFINITY,
			order: PassOrder::default(),
		}
	}
}

impl WorldConfig {
	pub fn with_gravity(mut self, gravity: V3) -> Self {
		self.gravity = gravity;
		self
	}

	pub fn with_bounds(mut self, width: f32, height: f32) -> Self {
		self.bounds = PosBox::from_size(width, height);
		self
	}

	pub fn with_posbox(mut self, posbox: PosBox) -> Self {
		self.bounds = posbox;
		self
	}

	pub fn with_iterations(mut self, iterations: usize) -> Self {
		self.iterations = iterations;
		self
	}

	pub fn with_dt(mut self, dt: f32) -> Self {
		self.dt = dt;
		self
	}

	pub fn with_ppr(mut self, ppr: usize) -> Self {
		self.ppr = ppr;
		self
	}

	pub fn with_max_dp(mut self, max_dp: f32) -> Self {
		self.max_dp = max_dp;
		self
	}

	pub fn with_order(mut self, order: PassOrder) -> Self {
		self.order = order;
		self
	}
}
