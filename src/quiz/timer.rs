use std::time::{Duration, Instant};

pub const TICK_PERIOD: Duration = Duration::from_secs(1);

/// Identifies one arming of a [`Countdown`]. Ticks from an earlier arming
/// are stale once the countdown is cancelled or re-armed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickId(u64);

#[derive(Debug, Clone, Copy)]
struct Armed
{
    id: TickId,
    next_fire: Instant,
}

/// Cancellable repeating timer driven by the caller's clock.
#[derive(Debug)]
pub struct Countdown
{
    period: Duration,
    generation: u64,
    armed: Option<Armed>,
}

impl Countdown
{
    pub fn new(period: Duration) -> Self
    {
        Self {
            period,
            generation: 0,
            armed: None,
        }
    }

    pub fn start(&mut self, now: Instant) -> TickId
    {
        self.generation += 1;
        let id = TickId(self.generation);
        self.armed = Some(Armed {
            id,
            next_fire: now + self.period,
        });
        id
    }

    pub fn cancel(&mut self)
    {
        self.armed = None;
    }

    #[cfg(test)]
    pub fn is_running(&self) -> bool
    {
        self.armed.is_some()
    }

    pub fn current(&self) -> Option<TickId>
    {
        self.armed.map(|armed| armed.id)
    }

    pub fn accepts(&self, id: TickId) -> bool
    {
        self.current() == Some(id)
    }

    /// One id per period elapsed since the last call.
    pub fn due(&mut self, now: Instant) -> Vec<TickId>
    {
        let mut fired = Vec::new();
        if let Some(armed) = self.armed.as_mut() {
            while now >= armed.next_fire {
                fired.push(armed.id);
                armed.next_fire += self.period;
            }
        }
        fired
    }
}
