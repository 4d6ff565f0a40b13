// Authoritative rotor: wind sampling, sail growth and sail breakage.

use crate::domain::actor::{GameMode, Notice};
use crate::domain::errors::StoreError;
use crate::domain::geometry::{BladeAxis, BlockPos};
use crate::domain::items::ItemStack;
use crate::domain::physics::{self, RotorPhysics};
use crate::domain::ports::{
    Actor, MechanicalNetwork, RandomSource, SpatialQuery, StateStore, WindSampler,
    WorldEffects,
};
use crate::domain::state::RotorSnapshot;
use crate::domain::tuning::{
    BREAK_SOUND, BREAK_SOUND_RANGE, BREAKAGE_CHECK_CHANCE, MAX_SAILS, MIN_SUNLIGHT,
    RotorTuning, SAIL_ITEM_CODE, SAIL_ITEMS_PER_SEGMENT, SAIL_LENGTH_FIELD,
};
use crate::use_cases::obstruction;
use crate::use_cases::types::RotorSync;
use tracing::{debug, info, warn};

pub const NOT_ENOUGH_SPACE: Notice = Notice {
    code: "notenoughspace",
    message: "Cannot add more sails. Make sure there's space for the sails to rotate freely",
};

/// Result of a sail attachment attempt, in precondition order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttachOutcome {
    Attached,
    MaxSailsReached,
    EmptyHand,
    NotEnoughItems,
    WrongItem,
    NotEnoughSpace,
}

impl AttachOutcome {
    pub fn is_attached(self) -> bool {
        self == AttachOutcome::Attached
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SampleReport {
    pub wind_speed: f64,
    // Sail batches dropped because the sails hit something.
    pub sails_broken: u32,
}

/// Owns all rotor state. Only the authoritative simulation side holds one;
/// observers mirror it through [`RotorSync`].
pub struct RotorController<W, N, R> {
    position: BlockPos,
    blade_axis: BladeAxis,
    sail_count: u8,
    // Last effective sample; never persisted.
    wind_speed: f64,
    tuning: RotorTuning,
    dirty: bool,
    world: W,
    network: N,
    rng: R,
}

impl<W, N, R> RotorController<W, N, R>
where
    W: WindSampler + SpatialQuery + WorldEffects,
    N: MechanicalNetwork,
    R: RandomSource,
{
    /// Fresh rotor with no sails.
    pub fn place(
        position: BlockPos,
        blade_axis: BladeAxis,
        tuning: RotorTuning,
        world: W,
        network: N,
        rng: R,
    ) -> Self {
        Self {
            position,
            blade_axis,
            sail_count: 0,
            wind_speed: 0.0,
            tuning,
            dirty: false,
            world,
            network,
            rng,
        }
    }

    /// Rotor loaded from storage. Unreadable or out-of-range data restores as bare.
    pub fn restore<S>(
        position: BlockPos,
        blade_axis: BladeAxis,
        tuning: RotorTuning,
        store: &S,
        world: W,
        network: N,
        rng: R,
    ) -> Self
    where
        S: StateStore + ?Sized,
    {
        let mut rotor = Self::place(position, blade_axis, tuning, world, network, rng);
        rotor.sail_count = restore_sail_count(store, position);
        debug!(%position, sail_count = rotor.sail_count, "rotor restored");
        rotor
    }

    pub fn position(&self) -> BlockPos {
        self.position
    }

    pub fn sail_count(&self) -> u8 {
        self.sail_count
    }

    pub fn wind_speed(&self) -> f64 {
        self.wind_speed
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn snapshot(&self) -> RotorSnapshot {
        RotorSnapshot {
            position: self.position,
            blade_axis: self.blade_axis,
            sail_count: self.sail_count,
            wind_speed: self.wind_speed,
        }
    }

    pub fn sync(&self) -> RotorSync {
        RotorSync {
            sail_count: self.sail_count,
            wind_speed: self.wind_speed,
        }
    }

    pub fn physics(&self) -> RotorPhysics {
        RotorPhysics::derive(self.sail_count, self.wind_speed, self.tuning.sail_modifier)
    }

    pub fn sound_volume(&self) -> f64 {
        physics::sound_volume(self.sail_count, self.wind_speed)
    }

    pub fn is_obstructed(&self, len: i32) -> bool {
        obstruction::is_obstructed(&self.world, self.position, self.blade_axis, len)
    }

    /// Periodic wind sample. Occasionally re-checks that the sails still
    /// have room and breaks them if not. Pushes fresh physics to the network.
    pub fn sample_tick(&mut self) -> SampleReport {
        let sampled = self.world.wind_speed_at(self.position);
        let sunlight = self.world.sunlight_level_at(self.position);

        self.wind_speed = if sunlight < MIN_SUNLIGHT && !self.tuning.allow_underground {
            0.0
        } else {
            sampled
        };
        debug!(
            position = %self.position,
            sampled,
            sunlight,
            wind_speed = self.wind_speed,
            "wind sampled"
        );

        let mut sails_broken = 0;
        if self.sail_count > 0 && self.rng.next_f64() < BREAKAGE_CHECK_CHANCE {
            // Sails of count n reach n + 1 blocks from the hub.
            let reach = i32::from(self.sail_count) + 1;
            if self.is_obstructed(reach) {
                sails_broken = self.break_sails();
            }
        }

        self.network.report(self.position, self.physics());

        SampleReport {
            wind_speed: self.wind_speed,
            sails_broken,
        }
    }

    pub fn try_attach_sail<A>(&mut self, actor: &mut A) -> bool
    where
        A: Actor + ?Sized,
    {
        self.attach_sail(actor).is_attached()
    }

    /// Adds one sail segment from the actor's held stack.
    ///
    /// Rejections leave both the rotor and the actor's items untouched.
    pub fn attach_sail<A>(&mut self, actor: &mut A) -> AttachOutcome
    where
        A: Actor + ?Sized,
    {
        if self.sail_count >= MAX_SAILS {
            debug!(position = %self.position, "attach rejected: max sails");
            return AttachOutcome::MaxSailsReached;
        }

        if let Some(rejected) = check_held_stack(actor.active_slot()) {
            debug!(position = %self.position, ?rejected, "attach rejected");
            return rejected;
        }

        // Leave room for the next size up as well; the rendered shape grows one step early.
        let reach = i32::from(self.sail_count) + 2;
        if self.is_obstructed(reach) {
            debug!(position = %self.position, reach, "attach rejected: obstructed");
            actor.notify(NOT_ENOUGH_SPACE);
            return AttachOutcome::NotEnoughSpace;
        }

        if actor.game_mode() != GameMode::Creative {
            let slot = actor.active_slot();
            let emptied = slot.as_mut().is_some_and(|stack| {
                stack.take_out(SAIL_ITEMS_PER_SEGMENT);
                stack.is_empty()
            });
            if emptied {
                *slot = None;
            }
        }

        self.sail_count += 1;
        self.dirty = true;
        self.network.topology_changed(self.position);
        info!(position = %self.position, sail_count = self.sail_count, "sail attached");

        AttachOutcome::Attached
    }

    /// Drops every attached sail before the owning block is torn down.
    pub fn on_removed(&mut self) -> u32 {
        let dropped = self.eject_all_sails();
        if dropped > 0 {
            self.network.topology_changed(self.position);
        }
        info!(position = %self.position, dropped, "rotor removed");
        dropped
    }

    pub fn persist<S>(&mut self, store: &mut S) -> Result<(), StoreError>
    where
        S: StateStore + ?Sized,
    {
        store.write_int(self.position, SAIL_LENGTH_FIELD, i64::from(self.sail_count))?;
        self.dirty = false;
        Ok(())
    }

    fn break_sails(&mut self) -> u32 {
        self.world
            .play_sound(BREAK_SOUND, self.position.center(), BREAK_SOUND_RANGE, 1.0);
        let dropped = self.eject_all_sails();
        self.dirty = true;
        self.network.topology_changed(self.position);
        info!(position = %self.position, dropped, "sails broke on obstruction");
        dropped
    }

    // Decrements as it drops so an interrupted ejection never drops twice.
    fn eject_all_sails(&mut self) -> u32 {
        let at = self.position.center();
        let mut batches = 0;
        while self.sail_count > 0 {
            self.sail_count -= 1;
            self.world
                .spawn_item(ItemStack::new(SAIL_ITEM_CODE, SAIL_ITEMS_PER_SEGMENT), at);
            batches += 1;
        }
        batches
    }
}

fn check_held_stack(slot: &Option<ItemStack>) -> Option<AttachOutcome> {
    let Some(stack) = slot.as_ref().filter(|stack| !stack.is_empty()) else {
        return Some(AttachOutcome::EmptyHand);
    };
    if stack.size < SAIL_ITEMS_PER_SEGMENT {
        return Some(AttachOutcome::NotEnoughItems);
    }
    if !stack.same_item(&ItemStack::new(SAIL_ITEM_CODE, 1)) {
        return Some(AttachOutcome::WrongItem);
    }
    None
}

fn restore_sail_count<S>(store: &S, position: BlockPos) -> u8
where
    S: StateStore + ?Sized,
{
    match store.read_int(position, SAIL_LENGTH_FIELD) {
        Ok(Some(value)) => match u8::try_from(value) {
            Ok(count) if count <= MAX_SAILS => count,
            _ => {
                warn!(%position, value, "stored sail length out of range, resetting");
                0
            }
        },
        Ok(None) => 0,
        Err(error) => {
            warn!(%position, %error, "failed to read sail length, resetting");
            0
        }
    }
}
