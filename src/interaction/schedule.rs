use std::time::Duration;

/// A deferred transition of the contact form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// The simulated send finished.
    Delivered,
    /// The success banner has been shown long enough.
    Reset,
}

/// Host timer facility. `schedule` returns `None` when the host could not
/// set the timer; callers then apply the step straight away.
pub trait Scheduler {
    type Handle;

    fn schedule(&mut self, delay: Duration, step: Step) -> Option<Self::Handle>;
    fn cancel(&mut self, handle: Self::Handle);
}

#[cfg(test)]
pub(crate) mod manual {
    use super::*;

    /// Virtual clock for driving timers in tests.
    #[derive(Debug, Default)]
    pub struct ManualScheduler {
        now: Duration,
        next_id: u64,
        pending: Vec<(u64, Duration, Step)>,
        pub cancelled: Vec<u64>,
        refuse: bool,
    }

    impl ManualScheduler {
        /// A host that cannot set timers at all.
        pub fn refusing() -> Self {
            Self {
                refuse: true,
                ..Default::default()
            }
        }

        pub fn pending(&self) -> usize {
            self.pending.len()
        }

        /// Moves the clock forward and returns the steps that came due, oldest first.
        pub fn advance(&mut self, by: Duration) -> Vec<Step> {
            self.now += by;
            let now = self.now;
            let mut due: Vec<_> = self
                .pending
                .iter()
                .filter(|(_, at, _)| *at <= now)
                .copied()
                .collect();
            self.pending.retain(|(_, at, _)| *at > now);
            due.sort_by_key(|(_, at, _)| *at);
            due.into_iter().map(|(_, _, step)| step).collect()
        }
    }

    impl Scheduler for ManualScheduler {
        type Handle = u64;

        fn schedule(&mut self, delay: Duration, step: Step) -> Option<u64> {
            if self.refuse {
                return None;
            }
            self.next_id += 1;
            self.pending.push((self.next_id, self.now + delay, step));
            Some(self.next_id)
        }

        fn cancel(&mut self, handle: u64) {
            self.pending.retain(|(id, _, _)| *id != handle);
            self.cancelled.push(handle);
        }
    }
}
