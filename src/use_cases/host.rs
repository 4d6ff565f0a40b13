// Host loop that owns one authoritative rotor. Sample ticks and player
// events are handled one at a time, so the controller needs no locking.

use crate::domain::ports::{
    MechanicalNetwork, RandomSource, SpatialQuery, StateStore, WindSampler, WorldEffects,
};
use crate::use_cases::controller::RotorController;
use crate::use_cases::types::{InteractReply, RotorEvent, RotorSync};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{Notify, mpsc, watch};
use tracing::{debug, info, warn};

/// Drives `controller` until the rotor is removed, every event sender is
/// dropped, or `shutdown` fires. Hands the store back for saving.
pub async fn rotor_task<W, N, R, S>(
    mut controller: RotorController<W, N, R>,
    mut store: S,
    mut events: mpsc::Receiver<RotorEvent>,
    sync_tx: watch::Sender<RotorSync>,
    sample_interval: Duration,
    shutdown: Arc<Notify>,
) -> S
where
    W: WindSampler + SpatialQuery + WorldEffects + Send,
    N: MechanicalNetwork + Send,
    R: RandomSource + Send,
    S: StateStore + Send,
{
    let position = controller.position();
    let mut interval = tokio::time::interval(sample_interval);
    info!(%position, sail_count = controller.sail_count(), "rotor task started");

    loop {
        tokio::select! {
            _ = shutdown.notified() => {
                debug!(%position, "rotor task shutting down");
                break;
            }
            _ = interval.tick() => {
                controller.sample_tick();
            }
            event = events.recv() => match event {
                None => break,
                Some(RotorEvent::Interact { mut player, reply }) => {
                    let attached = controller.try_attach_sail(&mut player);
                    let _ = reply.send(InteractReply { attached, player });
                }
                Some(RotorEvent::Remove { reply }) => {
                    let dropped = controller.on_removed();
                    if let Err(error) = store.remove(position) {
                        warn!(%position, %error, "failed to clear rotor state");
                    }
                    sync_tx.send_replace(controller.sync());
                    let _ = reply.send(dropped);
                    return store;
                }
            }
        }

        save_if_dirty(&mut controller, &mut store);
        sync_tx.send_replace(controller.sync());
    }

    save_if_dirty(&mut controller, &mut store);
    store
}

// A failed save keeps the rotor dirty, so the next pass writes it again.
fn save_if_dirty<W, N, R, S>(controller: &mut RotorController<W, N, R>, store: &mut S)
where
    W: WindSampler + SpatialQuery + WorldEffects,
    N: MechanicalNetwork,
    R: RandomSource,
    S: StateStore,
{
    if !controller.is_dirty() {
        return;
    }
    let position = controller.position();
    match controller.persist(store) {
        Ok(()) => debug!(%position, sail_count = controller.sail_count(), "rotor state saved"),
        Err(error) => warn!(%position, %error, "failed to save rotor state"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::BlockKind;
    use crate::domain::tuning::SAIL_LENGTH_FIELD;
    use crate::domain::{BladeAxis, GameMode, Player, RotorTuning};
    use crate::interface_adapters::network::RecordingNetwork;
    use crate::interface_adapters::store::JsonStateStore;
    use crate::interface_adapters::world::SharedWorld;
    use crate::use_cases::test_support::{FixedRandom, ORIGIN, sail_stack};
    use tokio::sync::oneshot;

    struct Harness {
        events: mpsc::Sender<RotorEvent>,
        sync_rx: watch::Receiver<RotorSync>,
        shutdown: Arc<Notify>,
        task: tokio::task::JoinHandle<JsonStateStore>,
    }

    fn spawn(world: &SharedWorld, network: &RecordingNetwork, store: JsonStateStore) -> Harness {
        let controller = RotorController::restore(
            ORIGIN,
            BladeAxis::X,
            RotorTuning::default(),
            &store,
            world.clone(),
            network.clone(),
            FixedRandom(1.0),
        );
        let (events, events_rx) = mpsc::channel(16);
        let (sync_tx, sync_rx) = watch::channel(controller.sync());
        let shutdown = Arc::new(Notify::new());
        let task = tokio::spawn(rotor_task(
            controller,
            store,
            events_rx,
            sync_tx,
            Duration::from_millis(10),
            shutdown.clone(),
        ));
        Harness {
            events,
            sync_rx,
            shutdown,
            task,
        }
    }

    async fn interact(events: &mpsc::Sender<RotorEvent>, player: Player) -> InteractReply {
        let (reply, reply_rx) = oneshot::channel();
        events
            .send(RotorEvent::Interact { player, reply })
            .await
            .expect("rotor task should be running");
        reply_rx.await.expect("rotor task should reply")
    }

    #[tokio::test]
    async fn when_player_attaches_then_state_is_saved_and_synced() {
        let world = SharedWorld::default();
        let network = RecordingNetwork::default();
        let mut harness = spawn(&world, &network, JsonStateStore::default());

        let reply = interact(
            &harness.events,
            Player::new("miller", GameMode::Survival).holding(sail_stack(8)),
        )
        .await;

        assert!(reply.attached);
        assert_eq!(reply.player.held_count(), 4);
        harness
            .sync_rx
            .wait_for(|sync| sync.sail_count == 1)
            .await
            .expect("sync should arrive");

        harness.shutdown.notify_one();
        let store = harness.task.await.expect("task should finish");
        assert_eq!(store.read_int(ORIGIN, SAIL_LENGTH_FIELD).expect("read"), Some(1));
    }

    #[tokio::test]
    async fn when_rotor_is_removed_then_sails_drop_and_record_is_cleared() {
        let world = SharedWorld::default();
        let mut store = JsonStateStore::default();
        store.write_int(ORIGIN, SAIL_LENGTH_FIELD, 4).expect("write");
        let harness = spawn(&world, &RecordingNetwork::default(), store);

        let (reply, reply_rx) = oneshot::channel();
        harness
            .events
            .send(RotorEvent::Remove { reply })
            .await
            .expect("send");

        assert_eq!(reply_rx.await.expect("reply"), 4);
        let store = harness.task.await.expect("task should finish");
        assert_eq!(store.read_int(ORIGIN, SAIL_LENGTH_FIELD).expect("read"), None);
        assert_eq!(world.drops().len(), 4);
        assert_eq!(harness.sync_rx.borrow().sail_count, 0);
    }

    #[tokio::test]
    async fn when_ticks_run_then_network_gets_physics_and_observers_get_wind() {
        let world = SharedWorld::default();
        world.set_wind(0.35);
        let network = RecordingNetwork::default();
        let mut harness = spawn(&world, &network, JsonStateStore::default());

        harness
            .sync_rx
            .wait_for(|sync| sync.wind_speed == 0.35)
            .await
            .expect("sync should arrive");

        assert!(network.reports() >= 1);
        harness.shutdown.notify_one();
        harness.task.await.expect("task should finish");
    }

    #[tokio::test]
    async fn when_space_is_blocked_then_player_keeps_items_and_gets_notice() {
        let world = SharedWorld::default();
        world.set_block(ORIGIN.offset(0, 2, 0), BlockKind::Solid);
        let harness = spawn(&world, &RecordingNetwork::default(), JsonStateStore::default());

        let reply = interact(
            &harness.events,
            Player::new("miller", GameMode::Survival).holding(sail_stack(8)),
        )
        .await;

        assert!(!reply.attached);
        assert_eq!(reply.player.held_count(), 8);
        assert_eq!(reply.player.notices.len(), 1);

        drop(harness.events);
        let store = harness.task.await.expect("task should finish");
        assert_eq!(store.read_int(ORIGIN, SAIL_LENGTH_FIELD).expect("read"), None);
    }
}
