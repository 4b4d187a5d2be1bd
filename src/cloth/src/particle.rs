use crate::V3;
use protocol::pr_model::PrParticle;

/// Point mass with implicit velocity (`pos - ppos`).
///
/// Mass is implicitly 1, so the accumulated force is used directly as
/// acceleration.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
	pos: V3,
	ppos: V3,
	force: V3,
	pinned: bool,
}

impl Particle {
	pub fn new(pos: V3) -> Self {
		Self {
			pos,
			ppos: pos,
			force: V3::zeros(),
			pinned: false,
		}
	}

	pub fn pinned_at(pos: V3) -> Self {
		let mut result = Self::new(pos);
		result.pin();
		result
	}

	pub fn get_pos(&self) -> V3 {
		self.pos
	}

	pub fn get_ppos(&self) -> V3 {
		self.ppos
	}

	pub fn get_force(&self) -> V3 {
		self.force
	}

	pub fn is_pinned(&self) -> bool {
		self.pinned
	}

	pub fn velocity_raw(&self) -> V3 {
		self.pos - self.ppos
	}

	pub fn add_force(&mut self, f: V3) {
		self.force += f;
	}

	pub fn reset_forces(&mut self) {
		self.force = V3::zeros();
	}

	// x' = x + (x - ppos) + a * t^2
	pub fn integrate(&mut self, t: f32, max_dp: f32) {
		if self.pinned {
			return;
		}
		let ppos = self.pos;
		let mut dp = self.pos - self.ppos + self.force * t * t;
		if dp.magnitude() > max_dp {
			dp = dp.normalize() * max_dp;
		}
		self.pos += dp;
		self.ppos = ppos;
	}

	/// Nudge the current position, keeping the previous one.
	pub fn add_pos(&mut self, dp: V3) {
		if self.pinned {
			return;
		}
		self.pos += dp
	}

	/// Translate without changing the implicit velocity.
	pub fn offset_pos(&mut self, dp: V3) {
		if self.pinned {
			return;
		}
		self.pos += dp;
		self.ppos += dp;
	}

	/// Place at rest at `p`.
	pub fn reset_pos(&mut self, p: V3) {
		self.pos = p;
		self.ppos = p;
	}

	/// Overwrite the current position. Ignores the pin: the bounds clamp
	/// goes through here and applies to anchors too.
	pub fn set_pos(&mut self, p: V3) {
		self.pos = p;
	}

	// no unpin
	pub fn pin(&mut self) {
		self.pinned = true;
	}

	pub fn render(&self) -> PrParticle {
		PrParticle {
			pos: self.pos.into(),
			pinned: self.pinned,
		}
	}
}

#[cfg(test)]
mod test {
	use super::*;
	use approx::assert_relative_eq;

	#[test]
	fn test_new_at_rest() {
		let p = Particle::new(V3::new(1., 2., 3.));
		assert_eq!(p.get_pos(), p.get_ppos());
		assert_eq!(p.get_force(), V3::zeros());
		assert!(!p.is_pinned());
	}

	#[test]
	fn test_force_accumulates() {
		let mut p = Particle::new(V3::zeros());
		p.add_force(V3::new(1., 0., 0.));
		p.add_force(V3::new(0., 2., 0.));
		assert_eq!(p.get_force(), V3::new(1., 2., 0.));
		p.reset_forces();
		assert_eq!(p.get_force(), V3::zeros());
	}

	#[test]
	fn test_verlet_recurrence() {
		let a = V3::new(0., 9.81, -1.5);
		let dt = 0.01;
		let mut p = Particle::new(V3::new(3., 4., 5.));
		p.add_force(a);
		let mut prev = p.get_pos();
		let mut cur = p.get_pos();
		for _ in 0..50 {
			p.integrate(dt, f32::INFINITY);
			let next = 2. * cur - prev + a * dt * dt;
			prev = cur;
			cur = next;
			assert_relative_eq!(p.get_pos(), cur, epsilon = 1e-4);
			assert_relative_eq!(p.get_ppos(), prev, epsilon = 1e-4);
		}
	}

	#[test]
	fn test_free_fall_matches_continuous() {
		let a = V3::new(0., 9.81, 0.);
		let dt = 1e-3;
		let n = 1000;
		let mut p = Particle::new(V3::zeros());
		for _ in 0..n {
			p.reset_forces();
			p.add_force(a);
			p.integrate(dt, f32::INFINITY);
		}
		let t = n as f32 * dt;
		let expected = 0.5 * 9.81 * t * t;
		eprintln!("{} {}", p.get_pos()[1], expected);
		// discrete solution leads by a * dt * t / 2
		assert!((p.get_pos()[1] - expected).abs() / expected < 0.01);
	}

	#[test]
	fn test_pinned_ignores_motion() {
		let origin = V3::new(5., 5., 0.);
		let mut p = Particle::pinned_at(origin);
		p.add_force(V3::new(1000., 1000., 0.));
		p.integrate(0.1, f32::INFINITY);
		p.add_pos(V3::new(1., 1., 1.));
		p.offset_pos(V3::new(1., 1., 1.));
		assert_eq!(p.get_pos(), origin);
		assert_eq!(p.get_ppos(), origin);
	}

	#[test]
	fn test_set_pos_ignores_pin() {
		let mut p = Particle::pinned_at(V3::new(-1., 0., 0.));
		p.set_pos(V3::zeros());
		assert_eq!(p.get_pos(), V3::zeros());
	}

	#[test]
	fn test_add_pos_keeps_ppos() {
		let mut p = Particle::new(V3::zeros());
		p.add_pos(V3::new(1., 0., 0.));
		assert_eq!(p.get_ppos(), V3::zeros());
		assert_eq!(p.velocity_raw(), V3::new(1., 0., 0.));
		p.offset_pos(V3::new(0., 2., 0.));
		assert_eq!(p.velocity_raw(), V3::new(1., 0., 0.));
	}

	#[test]
	fn test_reset_pos_at_rest() {
		let mut p = Particle::new(V3::zeros());
		p.add_pos(V3::new(1., 1., 1.));
		p.reset_pos(V3::new(4., 0., 0.));
		assert_eq!(p.velocity_raw(), V3::zeros());
		assert_eq!(p.get_pos(), V3::new(4., 0., 0.));
	}

	#[test]
	fn test_max_dp() {
		let mut p = Particle::new(V3::zeros());
		p.add_force(V3::new(0., 100., 0.));
		p.integrate(1., 0.5);
		assert_relative_eq!(p.get_pos(), V3::new(0., 0.5, 0.));
	}
}
