//! Audio signal input.

mod signal;
mod wav;

pub use signal::AudioSignal;
pub use wav::load_wav;
