//! Computer player.
//!
//! The computer never forgets a mismatched card. See [`RecallPolicy`] for the
//! order in which it tries known pairs and random guesses.

mod recall;

pub use recall::RecallPolicy;
