pub mod answer;
pub mod selector;
pub mod session;
pub mod timer;

pub use session::{EndReason, Feedback, Phase, Session, Settings};
