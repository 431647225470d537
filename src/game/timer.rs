use enum_map::{Enum, EnumMap};
use std::time::{Duration, Instant};

/// The recurring events that drive a game session
#[derive(Clone, Copy, Debug, Enum, Eq, PartialEq)]
pub(crate) enum TimerId {
    /// Move the food to a new random cell
    FoodRespawn,
    /// Move the snake one cell
    Movement,
    /// Flip the pause/game-over banner between its two styles
    Blink,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
struct Schedule {
    period: Duration,
    next: Instant,
}

/// A set of recurring timers, one per [`TimerId`].
///
/// Timers do not fire on their own; the owner asks which ones are due at a
/// given instant, which keeps everything deterministic for a given sequence
/// of instants.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub(crate) struct Timers {
    schedules: EnumMap<TimerId, Option<Schedule>>,
}

impl Timers {
    pub(crate) fn new() -> Timers {
        Timers::default()
    }

    /// Make `id` fire every `period`, first at `now + period`.  Any previous
    /// schedule for `id` is discarded.
    pub(crate) fn schedule(&mut self, id: TimerId, period: Duration, now: Instant) {
        self.schedules[id] = Some(Schedule {
            period,
            next: now + period,
        });
    }

    pub(crate) fn period(&self, id: TimerId) -> Option<Duration> {
        self.schedules[id].map(|s| s.period)
    }

    /// Return the earliest instant at which any timer is next due
    pub(crate) fn next_deadline(&self) -> Option<Instant> {
        self.schedules.values().flatten().map(|s| s.next).min()
    }

    /// Return the timers due at `now`, earliest first, and move each of them
    /// on to its next occurrence.  A timer fires at most once per call; if
    /// `now` is more than a whole period past its deadline, the missed
    /// occurrences are dropped.
    pub(crate) fn due(&mut self, now: Instant) -> Vec<TimerId> {
        let mut fired = Vec::new();
        for (id, slot) in &mut self.schedules {
            let Some(sched) = slot else {
                continue;
            };
            if sched.next > now {
                continue;
            }
            fired.push((sched.next, id));
            sched.next += sched.period;
            if sched.next <= now {
                sched.next = now + sched.period;
            }
        }
        // Stable, so timers due at the same instant keep declaration order
        fired.sort_by_key(|&(deadline, _)| deadline);
        fired.into_iter().map(|(_, id)| id).collect()
    }
}
