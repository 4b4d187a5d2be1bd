// pr_model: Physical model for rendering

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PrParticle {
	pub pos: [f32; 3],
	pub pinned: bool,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PrConstraint {
	pub id: usize,
	// indices into PrModel::particles
	pub particles: [usize; 2],
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct PrModel {
	pub particles: Vec<PrParticle>,
	pub constraints: Vec<PrConstraint>,
}

impl PrModel {
	/// Endpoint positions of every constraint, for drawing line segments.
	pub fn segments(
		&self,
	) -> impl Iterator<Item = ([f32; 3], [f32; 3])> + '_ {
		self.constraints.iter().filter_map(|c| {
			let p1 = self.particles.get(c.particles[0])?;
			let p2 = self.particles.get(c.particles[1])?;
			Some((p1.pos, p2.pos))
		})
	}

	pub fn points(&self) -> impl Iterator<Item = [f32; 3]> + '_ {
		self.particles.iter().map(|p| p.pos)
	}
}
