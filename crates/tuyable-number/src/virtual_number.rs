//! Number entity with no datapoint behind it.
//!
//! The value lives on the host. It is restored once when the entity is added
//! and saved after every change.

use crate::{DeviceHandle, DeviceInfo, NumberEntity, PendingWrite, StateStore};
use std::sync::Arc;
use tokio::sync::watch;
use tuyable_core::types::NumberMode;
use tuyable_core::{NumberDescription, VirtualNumberMapping};
use tuyable_datapoint::DataPointStore;

/// Host states that carry no value.
const NON_VALUE_STATES: [&str; 2] = ["unknown", "unavailable"];

/// Restore progress of a [`VirtualNumber`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RestoreState {
    Uninitialized,
    Restoring,
    Ready,
}

pub struct VirtualNumber<S> {
    device: DeviceHandle<S>,
    mapping: VirtualNumberMapping,
    unique_id: String,
    value: f64,
    state: RestoreState,
    storage: Arc<dyn StateStore>,
    changes: watch::Sender<f64>,
}

impl<S> std::fmt::Debug for VirtualNumber<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VirtualNumber")
            .field("unique_id", &self.unique_id)
            .field("value", &self.value)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

impl<S> VirtualNumber<S>
where
    S: DataPointStore + 'static,
{
    pub fn new(
        device: DeviceHandle<S>,
        mapping: VirtualNumberMapping,
        storage: Arc<dyn StateStore>,
    ) -> Self {
        let unique_id = device.identity().unique_id(mapping.description.key);
        let value = mapping.default_value;
        let (changes, _) = watch::channel(value);
        Self {
            device,
            mapping,
            unique_id,
            value,
            state: RestoreState::Uninitialized,
            storage,
            changes,
        }
    }

    pub fn state(&self) -> RestoreState {
        self.state
    }

    /// Receives the value after every change, restore included.
    pub fn subscribe(&self) -> watch::Receiver<f64> {
        self.changes.subscribe()
    }

    /// Restores the value: the host's last state first, then the local
    /// record, then the default. Runs once; later calls are ignored.
    pub fn activate(&mut self, last_state: Option<&str>) {
        if self.state != RestoreState::Uninitialized {
            return;
        }
        self.state = RestoreState::Restoring;

        let value = last_state
            .and_then(parse_host_state)
            .or_else(|| self.load_record())
            .unwrap_or(self.mapping.default_value);
        log::debug!("{}: restored value {value}", self.unique_id);

        self.value = value;
        self.changes.send_replace(value);
        self.state = RestoreState::Ready;
    }

    fn load_record(&self) -> Option<f64> {
        match self.storage.load(&self.unique_id) {
            Ok(value) => value,
            Err(err) => {
                log::debug!("{}: no usable stored value: {err}", self.unique_id);
                None
            }
        }
    }
}

fn parse_host_state(state: &str) -> Option<f64> {
    if NON_VALUE_STATES.contains(&state) {
        return None;
    }
    state.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

impl<S> NumberEntity for VirtualNumber<S>
where
    S: DataPointStore + 'static,
{
    fn unique_id(&self) -> &str {
        &self.unique_id
    }

    fn description(&self) -> &NumberDescription {
        &self.mapping.description
    }

    fn mode(&self) -> NumberMode {
        self.mapping.mode
    }

    fn device_info(&self) -> DeviceInfo {
        self.device.device_info()
    }

    fn native_value(&self) -> Option<f64> {
        Some(self.value)
    }

    fn set_native_value(&mut self, value: f64) -> Option<PendingWrite> {
        self.value = value;
        self.changes.send_replace(value);
        if let Err(err) = self.storage.save(&self.unique_id, value) {
            log::warn!("{}: could not persist value {value}: {err}", self.unique_id);
        }
        None
    }

    fn available(&self) -> bool {
        self.mapping
            .availability
            .evaluate(self.device.store().as_ref(), self.device.product())
    }

    fn added_to_host(&mut self, last_state: Option<&str>) {
        self.activate(last_state);
    }
}
