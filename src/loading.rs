use clap::ValueEnum;

/// What a request arriving while the veil is already up should do.
#[derive(Debug, PartialEq, Eq, Clone, Copy, ValueEnum)]
pub enum GatePolicy {
    /// Drop the new request, let the pending one finish.
    Ignore,
    /// Replace the pending request and restart the delay.
    Replace,
}

struct Pending {
    target: usize,
    remaining: f32,
}

/// Full-screen veil that defers a panel transition by a fixed delay.
/// The veil shows the moment a request lands and hides when it fires;
/// it can never be left up permanently.
pub struct LoadingGate {
    delay: f32,
    policy: GatePolicy,
    pending: Option<Pending>,
}

impl LoadingGate {
    pub fn new(delay: f32, policy: GatePolicy) -> Self {
        Self {
            delay,
            policy,
            pending: None,
        }
    }

    pub fn request(&mut self, target: usize) {
        if self.pending.is_some() && self.policy == GatePolicy::Ignore {
            return;
        }
        self.pending = Some(Pending {
            target,
            remaining: self.delay,
        });
    }

    /// Counts the delay down; yields the deferred target exactly once
    /// when it elapses.
    pub fn tick(&mut self, dt: f32) -> Option<usize> {
        let pending = self.pending.as_mut()?;
        pending.remaining -= dt;
        if pending.remaining > 0.0 {
            return None;
        }
        let target = pending.target;
        self.pending = None;
        Some(target)
    }

    pub fn veil_visible(&self) -> bool {
        self.pending.is_some()
    }
}
