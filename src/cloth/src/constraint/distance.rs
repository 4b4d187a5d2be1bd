use crate::error::{Error, Result};
use crate::particle_group::{ParticleGroup, Pid};
use protocol::pr_model::PrConstraint;

/// Keeps two particles `l0` apart.
#[derive(Clone, Debug, PartialEq)]
pub struct DistanceConstraint {
	ps: [Pid; 2],
	l0: f32,
}

impl DistanceConstraint {
	pub fn new(p1: Pid, p2: Pid, l0: f32) -> Result<Self> {
		if !(l0.is_finite() && l0 > 0.) {
			return Err(Error::InvalidRestLength(l0));
		}
		if p1 == p2 {
			return Err(Error::SelfLink(p1));
		}
		Ok(Self { ps: [p1, p2], l0 })
	}

	pub fn particles(&self) -> [Pid; 2] {
		self.ps
	}

	pub fn rest_length(&self) -> f32 {
		self.l0
	}

	/// Current length minus rest length.
	pub fn error(&self, pg: &ParticleGroup) -> f32 {
		(pg.pos(self.ps[1]) - pg.pos(self.ps[0])).magnitude() - self.l0
	}

	/// One Gauss-Seidel correction, split evenly between both ends.
	/// Returns false if the endpoints coincide and nothing was done.
	pub fn step(&self, pg: &mut ParticleGroup) -> bool {
		let dp = pg.pos(self.ps[1]) - pg.pos(self.ps[0]);
		let l = dp.magnitude();
		if !l.is_normal() {
			log::debug!(
				"skip degenerate constraint {}-{}: length {}",
				self.ps[0],
				self.ps[1],
				l
			);
			return false;
		}
		let diff = (l - self.l0) / l;
		let correct = dp * (0.5 * diff);
		pg.add_pos(self.ps[0], correct);
		pg.add_pos(self.ps[1], -correct);
		true
	}

	pub fn render(&self, id: usize) -> PrConstraint {
		PrConstraint {
			id,
			particles: [self.ps[0].index(), self.ps[1].index()],
		}
	}
}

#[cfg(test)]
mod test {
	use super::*;
	use crate::particle::Particle;
	use crate::V3;
	use approx::assert_relative_eq;
	use rand::rngs::StdRng;
	use rand::{Rng, SeedableRng};

	fn pair(p1: Particle, p2: Particle) -> (ParticleGroup, Pid, Pid) {
		let mut pg = ParticleGroup::default();
		let a = pg.add_particle(p1);
		let b = pg.add_particle(p2);
		(pg, a, b)
	}

	#[test]
	fn test_reject_rest_length() {
		let a = Pid(0);
		let b = Pid(1);
		for l0 in [0., -1., f32::NAN, f32::INFINITY] {
			assert!(matches!(
				DistanceConstraint::new(a, b, l0),
				Err(Error::InvalidRestLength(_))
			));
		}
		assert_eq!(
			DistanceConstraint::new(a, a, 1.),
			Err(Error::SelfLink(a))
		);
	}

	#[test]
	fn test_single_step_solves_free_pair() {
		let (mut pg, a, b) = pair(
			Particle::new(V3::zeros()),
			Particle::new(V3::new(20., 0., 0.)),
		);
		let dc = DistanceConstraint::new(a, b, 10.).unwrap();
		assert!(dc.step(&mut pg));
		assert_relative_eq!(pg.pos(a), V3::new(5., 0., 0.));
		assert_relative_eq!(pg.pos(b), V3::new(15., 0., 0.));
		assert!(dc.error(&pg).abs() < 1e-5);
	}

	#[test]
	fn test_midpoint_invariant() {
		let mut rng = StdRng::seed_from_u64(7);
		for _ in 0..100 {
			let mut rv = || {
				V3::new(
					rng.gen_range(-50.0..50.0),
					rng.gen_range(-50.0..50.0),
					rng.gen_range(-50.0..50.0),
				)
			};
			let (mut pg, a, b) = pair(Particle::new(rv()), Particle::new(rv()));
			let l0 = rng.gen_range(0.1..100.0);
			let dc = DistanceConstraint::new(a, b, l0).unwrap();
			let mid = (pg.pos(a) + pg.pos(b)) / 2.;
			dc.step(&mut pg);
			let mid2 = (pg.pos(a) + pg.pos(b)) / 2.;
			assert_relative_eq!(mid, mid2, epsilon = 1e-3);
		}
	}

	#[test]
	fn test_converges_with_anchor() {
		let (mut pg, a, b) = pair(
			Particle::pinned_at(V3::zeros()),
			Particle::new(V3::new(0., 30., 0.)),
		);
		let dc = DistanceConstraint::new(a, b, 10.).unwrap();
		let mut last = dc.error(&pg).abs() / 10.;
		for _ in 0..20 {
			dc.step(&mut pg);
			let rel = dc.error(&pg).abs() / 10.;
			assert!(rel <= last, "{} > {}", rel, last);
			last = rel;
		}
		assert!(last < 1e-3);
		assert_eq!(pg.pos(a), V3::zeros());
	}

	#[test]
	fn test_degenerate_is_skipped() {
		let p = V3::new(3., 3., 3.);
		let (mut pg, a, b) = pair(Particle::new(p), Particle::new(p));
		let dc = DistanceConstraint::new(a, b, 1.).unwrap();
		assert!(!dc.step(&mut pg));
		assert_eq!(pg.pos(a), p);
		assert_eq!(pg.pos(b), p);
	}

	#[test]
	fn test_render() {
		let dc = DistanceConstraint::new(Pid(4), Pid(2), 1.).unwrap();
		let pr = dc.render(9);
		assert_eq!(pr.id, 9);
		assert_eq!(pr.particles, [4, 2]);
	}
}
