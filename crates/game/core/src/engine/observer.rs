//! State-change subscription.

use super::snapshot::BattleSnapshot;

/// Receives a snapshot every time the battle state changes.
///
/// The engine calls observers synchronously, after the mutation and before
/// the triggering call returns. Closures taking `&BattleSnapshot` implement
/// this trait.
pub trait BattleObserver {
    fn on_state_changed(&mut self, snapshot: &BattleSnapshot);
}

impl<F> BattleObserver for F
where
    F: FnMut(&BattleSnapshot),
{
    fn on_state_changed(&mut self, snapshot: &BattleSnapshot) {
        self(snapshot)
    }
}

impl BattleObserver for std::sync::mpsc::Sender<BattleSnapshot> {
    fn on_state_changed(&mut self, snapshot: &BattleSnapshot) {
        // A dropped receiver just means nobody is rendering anymore.
        let _ = self.send(snapshot.clone());
    }
}
