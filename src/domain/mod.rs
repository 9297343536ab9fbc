pub mod home;
pub mod speech;
pub mod voice;

pub use home::HomeError;
pub use speech::Speech;
pub use voice::VoiceName;
