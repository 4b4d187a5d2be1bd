pub mod config;
pub mod constraint;
pub mod controller_message;
pub mod error;
pub mod particle;
pub mod particle_group;
pub mod physical_model;
pub mod player;
pub mod posbox;
pub mod pworld;

pub type V3 = nalgebra::Vector3<f32>;

pub use error::{Error, Result};
pub use particle_group::Pid;
