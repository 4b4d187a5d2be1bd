use thiserror::Error;

use crate::particle_group::Pid;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
	#[error("rest length must be positive and finite, got {0}")]
	InvalidRestLength(f32),

	#[error("constraint links particle {0} to itself")]
	SelfLink(Pid),

	#[error("unknown particle {id} (store holds {len})")]
	UnknownParticle { id: Pid, len: usize },

	#[error("cloth grid needs at least one row and column, got {cols}x{rows}")]
	InvalidGrid { cols: usize, rows: usize },

	#[error("grid spacing must be positive and finite, got {0}")]
	InvalidSpacing(f32),
}

pub type Result<T> = std::result::Result<T, Error>;
