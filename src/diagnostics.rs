//! Conservation diagnostics
//!
//! Samples total energy, momentum and angular momentum of a [`BodySystem`]
//! and compares them against the first sample taken. For an isolated system
//! all three are conserved, so drift measures integration error.

use crate::config::DiagnosticsConfig;
use crate::physics::math::{Scalar, Vector, relative_change};
use crate::physics::system::BodySystem;
use std::collections::VecDeque;
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DiagnosticsSample {
    pub time: Scalar,
    pub step_count: u64,
    pub total_energy: Scalar,
    /// `|E - E₀| / |E₀|` against the first sample
    pub relative_energy_drift: Scalar,
    pub momentum: Scalar,
    /// `| |L| - |L₀| | / |L₀|` against the first sample
    pub angular_momentum_drift: Scalar,
    pub barycenter: Option<Vector>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Baseline {
    total_energy: Scalar,
    angular_momentum: Scalar,
}

#[derive(Debug, Clone)]
pub struct SimulationDiagnostics {
    baseline: Option<Baseline>,
    history: VecDeque<DiagnosticsSample>,
    max_history_length: usize,
    sample_interval_frames: u64,
    max_relative_energy_drift: Scalar,
}

impl Default for SimulationDiagnostics {
    fn default() -> Self {
        Self::new(&DiagnosticsConfig::default())
    }
}

impl SimulationDiagnostics {
    pub fn new(config: &DiagnosticsConfig) -> Self {
        Self {
            baseline: None,
            history: VecDeque::with_capacity(config.max_history_length),
            max_history_length: config.max_history_length.max(1),
            sample_interval_frames: config.sample_interval_frames.max(1),
            max_relative_energy_drift: 0.0,
        }
    }

    /// Take a sample now. The first sample becomes the reference for drift.
    pub fn record(&mut self, system: &BodySystem) -> DiagnosticsSample {
        let total_energy = system.total_energy();
        let angular_momentum = system.angular_momentum().length();
        let baseline = *self.baseline.get_or_insert(Baseline {
            total_energy,
            angular_momentum,
        });

        let sample = DiagnosticsSample {
            time: system.time(),
            step_count: system.step_count(),
            total_energy,
            relative_energy_drift: relative_change(baseline.total_energy, total_energy),
            momentum: system.total_momentum().length(),
            angular_momentum_drift: relative_change(baseline.angular_momentum, angular_momentum),
            barycenter: system.barycenter(),
        };

        self.max_relative_energy_drift = self
            .max_relative_energy_drift
            .max(sample.relative_energy_drift);

        if self.history.len() == self.max_history_length {
            self.history.pop_front();
        }
        self.history.push_back(sample);

        debug!(
            time = sample.time,
            energy = sample.total_energy,
            drift = sample.relative_energy_drift,
            "Recorded diagnostics sample"
        );

        sample
    }

    /// Sample on every `sample_interval_frames`-th frame, logging the result
    pub fn on_frame(&mut self, frame: u64, system: &BodySystem) -> Option<DiagnosticsSample> {
        if frame % self.sample_interval_frames != 0 {
            return None;
        }

        let sample = self.record(system);
        info!(
            "t = {:.4} yr: energy {:.9e}, drift {:.3e}, momentum {:.3e}, L drift {:.3e}",
            sample.time,
            sample.total_energy,
            sample.relative_energy_drift,
            sample.momentum,
            sample.angular_momentum_drift,
        );
        Some(sample)
    }

    pub fn latest(&self) -> Option<&DiagnosticsSample> {
        self.history.back()
    }

    pub fn history(&self) -> impl ExactSizeIterator<Item = &DiagnosticsSample> + '_ {
        self.history.iter()
    }

    pub fn initial_energy(&self) -> Option<Scalar> {
        self.baseline.map(|baseline| baseline.total_energy)
    }

    /// Largest energy drift seen since the first sample, including samples
    /// already evicted from the history
    pub fn max_relative_energy_drift(&self) -> Scalar {
        self.max_relative_energy_drift
    }

    pub fn reset(&mut self) {
        self.baseline = None;
        self.history.clear();
        self.max_relative_energy_drift = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::two_body_system;

    fn config(interval: u64, history: usize) -> DiagnosticsConfig {
        DiagnosticsConfig {
            enabled: true,
            sample_interval_frames: interval,
            max_history_length: history,
        }
    }

    #[test]
    fn test_first_sample_has_zero_drift() {
        let system = two_body_system();
        let mut diagnostics = SimulationDiagnostics::default();

        let sample = diagnostics.record(&system);

        assert_eq!(sample.relative_energy_drift, 0.0);
        assert_eq!(sample.angular_momentum_drift, 0.0);
        assert_eq!(diagnostics.initial_energy(), Some(system.total_energy()));
        assert!(sample.total_energy < 0.0, "Bound orbit should have negative energy");
    }

    #[test]
    fn test_drift_stays_small_for_verlet() {
        let mut system = two_body_system();
        let mut diagnostics = SimulationDiagnostics::default();
        diagnostics.record(&system);

        for _ in 0..2000 {
            system.step();
        }
        let sample = diagnostics.record(&system);

        assert!(sample.relative_energy_drift < 1e-3, "drift {}", sample.relative_energy_drift);
        assert!(sample.angular_momentum_drift < 1e-6);
        assert!(sample.momentum < 1e-12);
        assert_eq!(sample.step_count, 2000);
    }

    #[test]
    fn test_history_is_bounded() {
        let system = two_body_system();
        let mut diagnostics = SimulationDiagnostics::new(&config(1, 3));

        for _ in 0..10 {
            diagnostics.record(&system);
        }

        assert_eq!(diagnostics.history().len(), 3);
    }

    #[test]
    fn test_on_frame_respects_interval() {
        let system = two_body_system();
        let mut diagnostics = SimulationDiagnostics::new(&config(10, 100));

        let recorded = (0..35)
            .filter_map(|frame| diagnostics.on_frame(frame, &system))
            .count();

        assert_eq!(recorded, 4);
    }

    #[test]
    fn test_reset_clears_baseline() {
        let system = two_body_system();
        let mut diagnostics = SimulationDiagnostics::default();
        diagnostics.record(&system);

        diagnostics.reset();

        assert!(diagnostics.latest().is_none());
        assert!(diagnostics.initial_energy().is_none());
    }
}
