pub mod candidate;
pub mod think;
pub mod weights;

pub use candidate::MoveCandidate;
pub use think::ThinkEngine;
