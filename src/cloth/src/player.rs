use crate::controller_message::ControllerMessage;
use crate::pworld::PWorld;
use protocol::pr_model::PrModel;

/// Drives a world frame by frame for a renderer.
pub struct Player {
	pworld: PWorld,

	// -1: always play
	// 0: pause
	// n: play n frames
	forward_frames: i32,
	first_frame: bool,
}

impl Player {
	pub fn new(pworld: PWorld) -> Self {
		Self {
			pworld,
			forward_frames: -1,
			first_frame: true,
		}
	}

	pub fn with_paused(mut self) -> Self {
		self.forward_frames = 1; // provide first frame
		self
	}

	pub fn is_paused(&self) -> bool {
		self.forward_frames == 0
	}

	pub fn pworld(&self) -> &PWorld {
		&self.pworld
	}

	pub fn pworld_mut(&mut self) -> &mut PWorld {
		&mut self.pworld
	}

	pub fn handle(&mut self, msg: ControllerMessage) {
		match msg {
			ControllerMessage::TogglePause => {
				if self.forward_frames == 0 {
					self.forward_frames = -1;
				} else {
					self.forward_frames = 0;
				}
			}
			ControllerMessage::FrameForward => {
				if self.forward_frames == 0 {
					self.forward_frames += 1;
				}
			}
		}
	}

	/// Snapshot to draw, or None while paused.
	pub fn frame(&mut self) -> Option<PrModel> {
		if self.forward_frames == 0 {
			return None;
		}
		if self.forward_frames > 0 {
			self.forward_frames -= 1;
		}
		if self.first_frame {
			self.first_frame = false;
		} else {
			self.pworld.run();
		}
		Some(self.pworld.pr_model())
	}
}
