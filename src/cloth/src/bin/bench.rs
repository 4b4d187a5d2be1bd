use std::time::SystemTime;

use cloth::config::WorldConfig;
use cloth::physical_model::{Anchor, PhysicalModel};
use cloth::pworld::PWorld;
use cloth::V3;

fn main() -> Result<(), cloth::Error> {
	let start = SystemTime::now();
	let mut pworld =
		PWorld::new(WorldConfig::default().with_iterations(5).with_ppr(10));
	let model = PhysicalModel::new_cloth(60, 40, 8., Anchor::EveryOther)?;
	pworld.add_model(model, V3::new(160., 20., 0.))?;
	let rframes = 100;
	for _ in 0..rframes {
		pworld.run();
	}
	let config = pworld.config();
	let time = rframes as f32 * config.dt * config.ppr as f32;
	let duration = SystemTime::now()
		.duration_since(start)
		.map(|d| d.as_micros())
		.unwrap_or(0);
	eprintln!("{:.3}%", duration as f32 / time / 1e4);
	Ok(())
}
