use crate::config::{PassOrder, WorldConfig};
use crate::constraint::DistanceConstraint;
use crate::error::{Error, Result};
use crate::particle::Particle;
use crate::particle_group::{ParticleGroup, Pid};
use crate::physical_model::PhysicalModel;
use crate::V3;
use protocol::pr_model::{PrConstraint, PrModel};

/// Owns all particles and constraints and advances them together.
///
/// A step is force accumulation, Verlet integration, then `iterations`
/// relaxation passes. Each pass clamps every particle into the bounds and
/// corrects every constraint in insertion order, using positions already
/// corrected earlier in the same pass. A final clamp closes the step.
#[derive(Clone, Debug, Default)]
pub struct PWorld {
	config: WorldConfig,
	pg: ParticleGroup,
	constraints: Vec<DistanceConstraint>,
}

impl PWorld {
	pub fn new(config: WorldConfig) -> Self {
		Self {
			config,
			pg: ParticleGroup::default(),
			constraints: Vec::new(),
		}
	}

	pub fn config(&self) -> &WorldConfig {
		&self.config
	}

	pub fn config_mut(&mut self) -> &mut WorldConfig {
		&mut self.config
	}

	pub fn add_particle(&mut self, p: Particle) -> Pid {
		self.pg.add_particle(p)
	}

	pub fn add_constraint(&mut self, c: DistanceConstraint) -> Result<usize> {
		for id in c.particles() {
			self.pg.check(id)?;
		}
		self.constraints.push(c);
		Ok(self.constraints.len() - 1)
	}

	pub fn link(&mut self, p1: Pid, p2: Pid, l0: f32) -> Result<usize> {
		self.add_constraint(DistanceConstraint::new(p1, p2, l0)?)
	}

	/// Link two particles at their current distance.
	pub fn link_current(&mut self, p1: Pid, p2: Pid) -> Result<usize> {
		self.pg.check(p1)?;
		self.pg.check(p2)?;
		let l0 = (self.pg.pos(p1) - self.pg.pos(p2)).magnitude();
		self.link(p1, p2, l0)
	}

	pub fn pin(&mut self, id: Pid) -> Result<()> {
		let len = self.pg.len();
		let p = self
			.pg
			.get_mut(id)
			.ok_or(Error::UnknownParticle { id, len })?;
		p.pin();
		Ok(())
	}

	/// Insert a whole model at `offset`. Nothing is added if any of its
	/// constraints is invalid.
	pub fn add_model(
		&mut self,
		model: PhysicalModel,
		offset: V3,
	) -> Result<Vec<Pid>> {
		log::info!(
			"add model: {} particles, {} constraints",
			model.particles.len(),
			model.constraints.len()
		);
		let base = self.pg.len();
		let len = base + model.particles.len();
		let mut constraints = Vec::with_capacity(model.constraints.len());
		for ct in model.constraints.iter() {
			for &idx in ct.ps.iter() {
				if idx >= model.particles.len() {
					return Err(Error::UnknownParticle {
						id: Pid(base + idx),
						len,
					});
				}
			}
			constraints.push(DistanceConstraint::new(
				Pid(base + ct.ps[0]),
				Pid(base + ct.ps[1]),
				ct.l0,
			)?);
		}
		let mut id_map = Vec::with_capacity(model.particles.len());
		for pt in model.particles.into_iter() {
			let mut p = Particle::new(pt.pos + offset);
			if pt.pinned {
				p.pin();
			}
			id_map.push(self.pg.add_particle(p));
		}
		self.constraints.extend(constraints);
		Ok(id_map)
	}

	pub fn particle(&self, id: Pid) -> Option<&Particle> {
		self.pg.get(id)
	}

	pub fn particles(&self) -> &ParticleGroup {
		&self.pg
	}

	pub fn constraints(&self) -> &[DistanceConstraint] {
		&self.constraints
	}

	pub fn for_each_particle<F: FnMut(Pid, &Particle)>(&self, mut f: F) {
		for (id, p) in self.pg.iter() {
			f(id, p);
		}
	}

	/// Visits each constraint with its endpoints' current positions.
	pub fn for_each_constraint<F: FnMut(&DistanceConstraint, V3, V3)>(
		&self,
		mut f: F,
	) {
		for c in self.constraints.iter() {
			let [p1, p2] = c.particles();
			f(c, self.pg.pos(p1), self.pg.pos(p2));
		}
	}

	pub fn accumulate_forces(&mut self) {
		self.pg.accumulate_forces(self.config.gravity);
	}

	pub fn integrate(&mut self, dt: f32) {
		self.pg.update(dt, self.config.max_dp);
	}

	fn relax(&mut self) {
		for constraint in self.constraints.iter() {
			constraint.step(&mut self.pg);
		}
	}

	pub fn satisfy_constraints(&mut self) {
		let bounds = self.config.bounds;
		for _ in 0..self.config.iterations {
			match self.config.order {
				PassOrder::ClampThenRelax => {
					self.pg.clamp(&bounds);
					self.relax();
				}
				PassOrder::RelaxThenClamp => {
					self.relax();
					self.pg.clamp(&bounds);
				}
			}
		}
		self.pg.clamp(&bounds);
	}

	pub fn step(&mut self, dt: f32) {
		if !dt.is_finite() {
			log::warn!("skip step with dt {}", dt);
			return;
		}
		self.accumulate_forces();
		self.integrate(dt);
		self.satisfy_constraints();
	}

	/// Advance one rendered frame: `ppr` steps of the configured `dt`.
	pub fn run(&mut self) {
		for _ in 0..self.config.ppr {
			self.step(self.config.dt);
		}
	}

	pub fn pr_model(&self) -> PrModel {
		let particles = self.pg.pr_particles();
		let constraints: Vec<PrConstraint> = self
			.constraints
			.iter()
			.enumerate()
			.map(|(id, c)| c.render(id))
			.collect();
		PrModel {
			particles,
			constraints,
		}
	}
}
