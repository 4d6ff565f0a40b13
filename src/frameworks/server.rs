// Framework bootstrap for the rotor demo runtime.

use crate::domain::ports::{BlockKind, ShapeResolver};
use crate::domain::tuning::SAIL_ITEM_CODE;
use crate::domain::{BladeAxis, BlockPos, GameMode, ItemStack, Player, RotorTuning, ShaftFacing};
use crate::frameworks::config::{self, MillwrightConfig};
use crate::interface_adapters::network::RecordingNetwork;
use crate::interface_adapters::protocol::{decode_sync, encode_sync};
use crate::interface_adapters::shapes::AssetShapeResolver;
use crate::interface_adapters::store::JsonStateStore;
use crate::interface_adapters::utils::rng::StdRandom;
use crate::interface_adapters::world::SharedWorld;
use crate::use_cases::{ObserverRotor, RotorController, RotorEvent, RotorSync, rotor_task};

use std::io::Result;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{Notify, mpsc, oneshot, watch};

const DEMO_ROTOR: BlockPos = BlockPos::new(0, 72, 0);
const DEMO_WIND: f64 = 0.6;
const DEMO_SAILS_HELD: u32 = 20;

fn init_runtime() {
    let _ = dotenvy::dotenv();

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let json = matches!(std::env::var("LOG_FORMAT").as_deref(), Ok("json"));
    if json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .json()
            .with_current_span(true)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .init();
    }

    std::panic::set_hook(Box::new(|info| {
        let backtrace = std::backtrace::Backtrace::capture();
        tracing::error!(%info, ?backtrace, "panic");
    }));
}

/// Settings for one demo run.
#[derive(Debug, Clone)]
pub struct RunSettings {
    pub tuning: RotorTuning,
    pub state_path: PathBuf,
    pub sample_interval: Duration,
    pub rng_seed: Option<u64>,
}

pub async fn run_with_config() -> Result<()> {
    init_runtime();

    let tunables = MillwrightConfig::load_or_init(&config::config_path());
    let settings = RunSettings {
        tuning: RotorTuning::from_settings(
            tunables.sail_centered_modifier,
            &config::world_settings(),
        ),
        state_path: config::state_path(),
        sample_interval: config::sample_interval(),
        rng_seed: config::rng_seed(),
    };

    run(settings, async {
        if let Err(error) = tokio::signal::ctrl_c().await {
            tracing::error!(%error, "failed to listen for ctrl-c");
        }
    })
    .await
}

/// Runs a single rotor in a small demo world until `stop` resolves, then
/// saves its state.
pub async fn run(settings: RunSettings, stop: impl Future<Output = ()>) -> Result<()> {
    let world = demo_world();
    let store = JsonStateStore::load_or_default(&settings.state_path);
    tracing::info!(
        path = %settings.state_path.display(),
        records = store.len(),
        "rotor state loaded"
    );

    let rng = match settings.rng_seed {
        Some(seed) => StdRandom::seeded(seed),
        None => StdRandom::from_os_rng(),
    };
    let controller = RotorController::restore(
        DEMO_ROTOR,
        BladeAxis::from_shaft(ShaftFacing::North),
        settings.tuning,
        &store,
        world,
        RecordingNetwork::default(),
        rng,
    );
    let observer = ObserverRotor::new(
        controller.snapshot(),
        settings.tuning.sail_modifier,
        0.0,
        AssetShapeResolver,
    );

    let (events_tx, events_rx) = mpsc::channel::<RotorEvent>(config::EVENT_CHANNEL_CAPACITY);
    let (sync_tx, sync_rx) = watch::channel::<RotorSync>(controller.sync());
    let shutdown = Arc::new(Notify::new());

    // The authoritative rotor runs in its own task; observers only see sync snapshots.
    let rotor = tokio::spawn(rotor_task(
        controller,
        store,
        events_rx,
        sync_tx,
        settings.sample_interval,
        shutdown.clone(),
    ));
    tokio::spawn(observer_task(sync_rx, observer));

    let mut player = Some(
        Player::new("miller", GameMode::Survival)
            .holding(ItemStack::new(SAIL_ITEM_CODE, DEMO_SAILS_HELD)),
    );
    let mut sails_left = DEMO_SAILS_HELD;
    // Keep attaching until the rotor refuses.
    while let Some(current) = player.take() {
        let (reply, reply_rx) = oneshot::channel();
        let event = RotorEvent::Interact {
            player: current,
            reply,
        };
        if events_tx.send(event).await.is_err() {
            break;
        }
        let Ok(outcome) = reply_rx.await else {
            break;
        };
        sails_left = outcome.player.held_count();
        if outcome.attached {
            player = Some(outcome.player);
        }
    }
    tracing::info!(sails_left, "player done attaching sails");

    stop.await;
    shutdown.notify_one();
    let store = rotor.await.map_err(std::io::Error::other)?;
    store
        .save(&settings.state_path)
        .map_err(std::io::Error::other)?;
    tracing::info!(path = %settings.state_path.display(), "rotor state saved");
    Ok(())
}

// Flat ground below the rotor, with a dusting of snow the sails ignore.
fn demo_world() -> SharedWorld {
    let world = SharedWorld::default();
    world.set_wind(DEMO_WIND);
    world.fill(
        BlockPos::new(-8, 64, -2),
        BlockPos::new(8, 64, 2),
        BlockKind::Solid,
    );
    world.fill(
        BlockPos::new(-8, 65, -2),
        BlockPos::new(8, 65, 2),
        BlockKind::SnowLayer,
    );
    world.set_block(DEMO_ROTOR.offset(0, -1, 0), BlockKind::Plant);
    world
}

async fn observer_task<S>(mut sync_rx: watch::Receiver<RotorSync>, mut observer: ObserverRotor<S>)
where
    S: ShapeResolver,
{
    while sync_rx.changed().await.is_ok() {
        let sync = *sync_rx.borrow_and_update();
        // Go through the wire format, as a remote client would.
        let sync = match encode_sync(sync).and_then(|text| decode_sync(&text)) {
            Ok(sync) => sync,
            Err(error) => {
                tracing::warn!(%error, "failed to relay rotor sync");
                continue;
            }
        };
        if observer.apply(sync) {
            tracing::info!(shape = %observer.shape().base, "rotor shape changed");
        }
        tracing::debug!(
            info = ?observer.block_info(),
            volume = observer.ambient_sound().volume,
            "observer updated"
        );
    }
}
