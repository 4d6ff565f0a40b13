mod support;

use millwright::domain::ports::{BlockKind, StateStore};
use millwright::domain::tuning::{SAIL_ITEM_CODE, SAIL_LENGTH_FIELD};
use millwright::domain::{BlockPos, RotorTuning};
use millwright::interface_adapters::network::RecordingNetwork;
use millwright::interface_adapters::store::JsonStateStore;
use millwright::interface_adapters::world::SharedWorld;
use millwright::use_cases::AttachOutcome;
use millwright::{RunSettings, run};
use std::time::Duration;
use support::HUB;

#[test]
fn test_sixth_sail_is_refused_in_open_air() {
    let world = SharedWorld::default();
    let network = RecordingNetwork::default();
    let mut rotor = support::rotor(&world, &network, 1.0);
    let mut player = support::creative_player();

    let outcomes: Vec<_> = (0..7).map(|_| rotor.attach_sail(&mut player)).collect();

    assert_eq!(&outcomes[..5], &[AttachOutcome::Attached; 5]);
    assert_eq!(outcomes[5], AttachOutcome::MaxSailsReached);
    assert_eq!(outcomes[6], AttachOutcome::MaxSailsReached);
    assert_eq!(rotor.sail_count(), 5);
    assert_eq!(player.held_count(), 16);
    assert_eq!(network.topology_changes(), 5);
}

#[test]
fn test_blocked_projection_refuses_sail_and_keeps_items() {
    let world = SharedWorld::default();
    let mut rotor = support::rotor(&world, &RecordingNetwork::default(), 1.0);
    let mut player = support::survival_player(12);
    assert!(rotor.try_attach_sail(&mut player));

    // East-facing shaft: blades span Z. One sail needs a three-block clearance for the next.
    world.set_block(HUB.offset(0, 0, -3), BlockKind::Solid);

    assert!(!rotor.try_attach_sail(&mut player));
    assert_eq!(rotor.sail_count(), 1);
    assert_eq!(player.held_count(), 8);
    assert_eq!(player.notices.len(), 1);
}

#[test]
fn test_new_construction_breaks_sails_on_next_check() {
    let world = SharedWorld::default();
    world.set_wind(0.4);
    let network = RecordingNetwork::default();
    let mut rotor = support::rotor(&world, &network, 0.05);
    let mut player = support::survival_player(12);
    for _ in 0..3 {
        assert!(rotor.try_attach_sail(&mut player));
    }

    // Three sails sweep four blocks; a wall goes up inside that.
    world.fill(HUB.offset(0, -4, 3), HUB.offset(0, 4, 3), BlockKind::Solid);
    let report = rotor.sample_tick();

    assert_eq!(report.sails_broken, 3);
    assert_eq!(rotor.sail_count(), 0);
    let drops = world.drops();
    assert_eq!(drops.len(), 3);
    assert_eq!(drops.iter().map(|(stack, _)| stack.size).sum::<u32>(), 12);
    assert!(drops.iter().all(|(stack, _)| stack.code == SAIL_ITEM_CODE));
    assert_eq!(network.last_report().map(|physics| physics.torque_factor), Some(0.0));
}

#[test]
fn test_snow_never_blocks_sails() {
    let world = SharedWorld::default();
    world.fill(HUB.offset(0, -2, -2), HUB.offset(0, -2, 2), BlockKind::SnowBlock);
    world.fill(HUB.offset(0, -1, -2), HUB.offset(0, -1, 2), BlockKind::SnowLayer);
    let mut rotor = support::rotor(&world, &RecordingNetwork::default(), 0.0);
    let mut player = support::creative_player();

    for _ in 0..5 {
        assert!(rotor.try_attach_sail(&mut player));
    }
    assert_eq!(rotor.sample_tick().sails_broken, 0);
}

#[test]
fn test_sail_count_survives_save_and_reload() {
    let world = SharedWorld::default();
    let path = support::temp_path("json");
    let mut rotor = support::rotor(&world, &RecordingNetwork::default(), 1.0);
    let mut player = support::creative_player();
    for _ in 0..3 {
        rotor.try_attach_sail(&mut player);
    }

    let mut store = JsonStateStore::default();
    rotor.persist(&mut store).expect("persist");
    store.save(&path).expect("save");
    let loaded = JsonStateStore::load(&path).expect("load");
    let _ = std::fs::remove_file(&path);

    assert_eq!(support::restored(&world, &loaded).sail_count(), 3);
}

#[test]
fn test_missing_record_restores_bare_rotor() {
    let world = SharedWorld::default();
    let mut store = JsonStateStore::default();
    store
        .write_int(BlockPos::new(0, 0, 0), SAIL_LENGTH_FIELD, 4)
        .expect("write");

    assert_eq!(support::restored(&world, &store).sail_count(), 0);
}

#[test]
fn test_demolition_drops_one_batch_per_sail() {
    let world = SharedWorld::default();
    let mut rotor = support::rotor(&world, &RecordingNetwork::default(), 1.0);
    let mut player = support::creative_player();
    for _ in 0..4 {
        rotor.try_attach_sail(&mut player);
    }

    assert_eq!(rotor.on_removed(), 4);

    assert_eq!(rotor.sail_count(), 0);
    assert_eq!(world.drops().len(), 4);
    assert!(world.drops().iter().all(|(stack, _)| stack.size == 4));
}

#[tokio::test]
async fn test_demo_run_attaches_sails_and_saves_them() {
    let path = support::temp_path("json");
    let settings = RunSettings {
        tuning: RotorTuning::default(),
        state_path: path.clone(),
        sample_interval: Duration::from_millis(10),
        rng_seed: Some(1),
    };

    run(settings.clone(), tokio::time::sleep(Duration::from_millis(50)))
        .await
        .expect("first run");
    // A second run restores the full rotor and cannot add more.
    run(settings, tokio::time::sleep(Duration::from_millis(50)))
        .await
        .expect("second run");

    let store = JsonStateStore::load(&path).expect("load");
    let _ = std::fs::remove_file(&path);
    assert_eq!(
        store
            .read_int(BlockPos::new(0, 72, 0), SAIL_LENGTH_FIELD)
            .expect("read"),
        Some(5)
    );
}
