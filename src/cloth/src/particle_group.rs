use std::fmt;

use crate::error::{Error, Result};
use crate::particle::Particle;
use crate::posbox::PosBox;
use crate::V3;
use protocol::pr_model::PrParticle;

/// Stable handle of a particle, valid for the lifetime of its store.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pid(pub(crate) usize);

impl Pid {
	pub fn index(self) -> usize {
		self.0
	}
}

impl fmt::Display for Pid {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "#{}", self.0)
	}
}

/// Owns every particle of a world, in insertion order.
#[derive(Clone, Debug, Default)]
pub struct ParticleGroup {
	data: Vec<Particle>,
}

impl ParticleGroup {
	pub fn add_particle(&mut self, p: Particle) -> Pid {
		self.data.push(p);
		Pid(self.data.len() - 1)
	}

	pub fn len(&self) -> usize {
		self.data.len()
	}

	pub fn is_empty(&self) -> bool {
		self.data.is_empty()
	}

	pub fn check(&self, id: Pid) -> Result<()> {
		if id.0 < self.data.len() {
			Ok(())
		} else {
			Err(Error::UnknownParticle {
				id,
				len: self.data.len(),
			})
		}
	}

	pub fn get(&self, id: Pid) -> Option<&Particle> {
		self.data.get(id.0)
	}

	pub fn get_mut(&mut self, id: Pid) -> Option<&mut Particle> {
		self.data.get_mut(id.0)
	}

	pub fn iter(&self) -> impl Iterator<Item = (Pid, &Particle)> + '_ {
		self.data.iter().enumerate().map(|(idx, p)| (Pid(idx), p))
	}

	pub(crate) fn pos(&self, id: Pid) -> V3 {
		self.data[id.0].get_pos()
	}

	pub(crate) fn add_pos(&mut self, id: Pid, dp: V3) {
		self.data[id.0].add_pos(dp)
	}

	pub fn accumulate_forces(&mut self, gravity: V3) {
		for p in self.data.iter_mut() {
			p.reset_forces();
			p.add_force(gravity);
		}
	}

	pub fn update(&mut self, dt: f32, max_dp: f32) {
		for p in self.data.iter_mut() {
			p.integrate(dt, max_dp);
		}
	}

	/// Returns the number of particles that had to be moved.
	pub fn clamp(&mut self, posbox: &PosBox) -> usize {
		let mut count = 0;
		for p in self.data.iter_mut() {
			let mut pos = p.get_pos();
			if posbox.apply(&mut pos) {
				p.set_pos(pos);
				count += 1;
			}
		}
		count
	}

	pub fn pr_particles(&self) -> Vec<PrParticle> {
		self.data.iter().map(|p| p.render()).collect()
	}
}
