//! Tick source collaborator trait

/// Trait for the one-second tick source
///
/// While subscribed, the source delivers one tick per elapsed second back
/// to the timer. The timer subscribes on entry to the get-ready phase and
/// unsubscribes on both transitions into the paused state, so at most one
/// subscription is ever active.
pub trait TickSource {
    /// Start delivering one tick per second
    fn subscribe(&mut self);

    /// Stop delivering ticks
    fn unsubscribe(&mut self);
}
