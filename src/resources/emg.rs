use bevy::prelude::*;
use crossbeam_channel::{Receiver, Sender, TryRecvError, TrySendError};
use serde::{Deserialize, Serialize};

use crate::components::ControlAxes;
use crate::resources::ConfigError;
use crate::utils::SimError;

/// Processed EMG amplitude per channel: throttle, yaw, pitch, roll.
pub type EmgSample = [f64; 4];

/// Create the single-slot handoff between an acquisition thread and the simulation.
///
/// The slot holds at most one sample. Publishing over an unread sample replaces
/// it, so the simulation always sees the newest reading and never waits.
pub fn emg_channel() -> (EmgSender, EmgReceiver) {
    let (tx, rx) = crossbeam_channel::bounded(1);
    (
        EmgSender {
            tx,
            evict: rx.clone(),
        },
        EmgReceiver {
            rx,
            last: [0.0; 4],
            connected: true,
        },
    )
}

/// Producer half, owned by the acquisition thread.
#[derive(Debug, Clone)]
pub struct EmgSender {
    tx: Sender<EmgSample>,
    // Lets the producer drop a stale sample instead of blocking on a full slot.
    evict: Receiver<EmgSample>,
}

impl EmgSender {
    /// Publish a sample, replacing any sample the consumer has not read yet.
    pub fn publish(&self, sample: EmgSample) -> Result<(), SimError> {
        let mut pending = sample;
        for _ in 0..2 {
            match self.tx.try_send(pending) {
                Ok(()) => return Ok(()),
                Err(TrySendError::Full(rejected)) => {
                    let _ = self.evict.try_recv();
                    pending = rejected;
                }
                Err(TrySendError::Disconnected(_)) => return Err(SimError::EmgDisconnected),
            }
        }
        // Only reachable if another producer refilled the slot in between.
        Ok(())
    }
}

/// Consumer half, read by the simulation once per tick.
#[derive(Resource, Debug)]
pub struct EmgReceiver {
    rx: Receiver<EmgSample>,
    last: EmgSample,
    connected: bool,
}

impl EmgReceiver {
    /// Newest sample if one arrived since the last call, otherwise the last known one.
    pub fn latest(&mut self) -> EmgSample {
        match self.rx.try_recv() {
            Ok(sample) => self.last = sample,
            Err(TryRecvError::Empty) => {}
            Err(TryRecvError::Disconnected) => {
                if self.connected {
                    warn!("EMG source disconnected, holding neutral signals");
                    self.connected = false;
                }
                self.last = [0.0; 4];
            }
        }
        self.last
    }

    pub fn is_connected(&self) -> bool {
        self.connected
    }
}

/// Maps raw EMG amplitudes onto control axes.
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmgMapping {
    /// Amplitude below which a muscle is considered at rest.
    pub threshold: f64,
    /// Amplitude that maps to full deflection.
    pub max_value: f64,
    /// Gain per channel: throttle, yaw, pitch, roll.
    pub sensitivity: [f64; 4],
}

impl Default for EmgMapping {
    fn default() -> Self {
        Self {
            threshold: 30.0,
            max_value: 100.0,
            sensitivity: [1.0; 4],
        }
    }
}

impl EmgMapping {
    /// Reduced gains used during first sessions, throttle especially damped.
    pub fn gentle() -> Self {
        Self {
            sensitivity: [0.3, 0.5, 0.5, 0.5],
            ..Default::default()
        }
    }

    pub fn map(&self, sample: &EmgSample) -> ControlAxes {
        let span = self.max_value - self.threshold;
        let normalize = |channel: usize| (sample[channel] - self.threshold) / span;
        ControlAxes::new(
            normalize(0).max(0.0) * self.sensitivity[0],
            normalize(1) * self.sensitivity[1],
            normalize(2) * self.sensitivity[2],
            normalize(3) * self.sensitivity[3],
        )
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.max_value > self.threshold) {
            return Err(ConfigError::Validation(format!(
                "EMG max value {} must exceed threshold {}",
                self.max_value, self.threshold
            )));
        }
        if self.sensitivity.iter().any(|s| !s.is_finite() || *s < 0.0) {
            return Err(ConfigError::Validation(
                "EMG sensitivities must be finite and non-negative".to_string(),
            ));
        }
        Ok(())
    }
}
