pub mod engine;
pub mod feedback;
pub mod folded;
pub mod mode;
pub mod routing;
pub mod sequencer;

/// Butterfly input slots, feedback registers and output bus width.
pub const SLOTS: usize = 16;
/// Butterfly units in the fabric; each consumes two slots.
pub const BUTTERFLIES: usize = SLOTS / 2;

pub use engine::Engine;
pub use feedback::FeedbackStore;
pub use folded::FoldedFft;
pub use mode::{ModeVector, Select};
pub use routing::{route, Source};
pub use sequencer::{Schedule, StageSequencer};
