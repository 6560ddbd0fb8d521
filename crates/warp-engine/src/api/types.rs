/// An audio request emitted by the game logic.
/// The host owns the single ambient track and maps each request onto it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEvent {
    /// Start (or resume) the ambient track.
    AmbientPlay,
    /// Pause the ambient track.
    AmbientPause,
}
