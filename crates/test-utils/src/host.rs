//! Recording fakes for the host-side movement traits.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use movement::{AvoidanceArbiter, AvoidanceZone, Mover};
use party_core::{ObjectId, Vec3};

/// Avoidance arbiter that records every registered zone and answers
/// [`AvoidanceArbiter::is_running_out`] from a script.
///
/// Scripted answers queued with [`MockArbiter::script_running_out`] are
/// consumed one per call; once drained, the flag set by
/// [`MockArbiter::set_running_out`] answers (false by default).
#[derive(Clone, Default)]
pub struct MockArbiter {
    zones: Arc<Mutex<Vec<AvoidanceZone>>>,
    responses: Arc<Mutex<VecDeque<bool>>>,
    steering: Arc<AtomicBool>,
}

impl MockArbiter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn script_running_out(&self, responses: impl IntoIterator<Item = bool>) {
        self.responses.lock().unwrap().extend(responses);
    }

    pub fn set_running_out(&self, steering: bool) {
        self.steering.store(steering, Ordering::SeqCst);
    }

    pub fn zone_count(&self) -> usize {
        self.zones.lock().unwrap().len()
    }

    /// Zone owners in registration order.
    pub fn owners(&self) -> Vec<ObjectId> {
        self.zones.lock().unwrap().iter().map(|z| z.owner).collect()
    }

    /// Runs `inspect` against the recorded zones.
    pub fn with_zones<R>(&self, inspect: impl FnOnce(&[AvoidanceZone]) -> R) -> R {
        inspect(&self.zones.lock().unwrap())
    }

    /// How many recorded zones report themselves active right now.
    pub fn active_zone_count(&self) -> usize {
        self.with_zones(|zones| zones.iter().filter(|z| z.is_active()).count())
    }
}

impl AvoidanceArbiter for MockArbiter {
    fn register(&self, zone: AvoidanceZone) {
        self.zones.lock().unwrap().push(zone);
    }

    fn is_running_out(&self) -> bool {
        if let Some(next) = self.responses.lock().unwrap().pop_front() {
            return next;
        }
        self.steering.load(Ordering::SeqCst)
    }
}

/// A movement command the controller issued.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MoveCommand {
    Towards(Vec3),
    Stop,
}

/// Mover that logs every command instead of walking anywhere.
#[derive(Clone, Default)]
pub struct MockMover {
    commands: Arc<Mutex<Vec<MoveCommand>>>,
}

impl MockMover {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> Vec<MoveCommand> {
        self.commands.lock().unwrap().clone()
    }

    pub fn stops(&self) -> usize {
        self.commands()
            .iter()
            .filter(|c| matches!(c, MoveCommand::Stop))
            .count()
    }

    /// Destination of the most recent `Towards` command, if any.
    pub fn last_towards(&self) -> Option<Vec3> {
        self.commands()
            .iter()
            .rev()
            .find_map(|c| match c {
                MoveCommand::Towards(point) => Some(*point),
                MoveCommand::Stop => None,
            })
    }
}

impl Mover for MockMover {
    fn move_towards(&self, point: Vec3) {
        self.commands
            .lock()
            .unwrap()
            .push(MoveCommand::Towards(point));
    }

    fn stop(&self) {
        self.commands.lock().unwrap().push(MoveCommand::Stop);
    }
}
