use crate::models::Worker;

/// Single-slot holder for the worker currently being booked. Transient only:
/// never persisted, cleared on reset.
#[derive(Debug, Default)]
pub struct Selection {
    worker: Option<Worker>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the current selection unconditionally.
    pub fn select(&mut self, worker: Worker) {
        self.worker = Some(worker);
    }

    pub fn selected(&self) -> Option<&Worker> {
        self.worker.as_ref()
    }

    pub fn clear(&mut self) {
        self.worker = None;
    }

    /// Display-path cost estimate: 0 when nothing is selected or when hours
    /// is not a valid positive number. The confirm path validates instead.
    pub fn estimate_cost(&self, hours: f64) -> f64 {
        let hours = if hours.is_finite() && hours > 0.0 {
            hours
        } else {
            0.0
        };
        match &self.worker {
            Some(w) => hours * w.rate,
            None => 0.0,
        }
    }
}
