//! Number entity backed by a device datapoint.

use crate::{DeviceHandle, DeviceInfo, NumberEntity, PendingWrite};
use std::sync::Arc;
use tokio::runtime::Handle;
use tuyable_core::types::NumberMode;
use tuyable_core::{NumberDescription, NumberMapping, WriteChange};
use tuyable_datapoint::DataPointStore;

/// Adapter exposing one [`NumberMapping`] of a device as a number entity.
///
/// Values are read from the datapoint store on every call; the adapter keeps
/// no copy of the device state.
#[derive(Debug)]
pub struct DataPointNumber<S> {
    device: DeviceHandle<S>,
    mapping: NumberMapping,
    unique_id: String,
}

impl<S> DataPointNumber<S>
where
    S: DataPointStore + 'static,
{
    pub fn new(device: DeviceHandle<S>, mapping: NumberMapping) -> Self {
        let unique_id = device.identity().unique_id(mapping.description.key);
        Self {
            device,
            mapping,
            unique_id,
        }
    }

    pub fn mapping(&self) -> &NumberMapping {
        &self.mapping
    }
}

impl<S> NumberEntity for DataPointNumber<S>
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
        self.mapping.accessor.read(
            &self.mapping,
            self.device.store().as_ref(),
            self.device.product(),
        )
    }

    fn set_native_value(&mut self, value: f64) -> Option<PendingWrite> {
        let Ok(runtime) = Handle::try_current() else {
            log::warn!("{}: no tokio runtime, dropping write of {value}", self.unique_id);
            return None;
        };
        let store = Arc::clone(self.device.store());
        let product = self.device.product();
        let Some(write) = self.mapping.accessor.encode(&self.mapping, store.as_ref(), product, value)
        else {
            log::debug!("{}: nothing to write for value {value}", self.unique_id);
            return None;
        };

        if let WriteChange::Set(initial) = &write.change {
            store.get_or_create(write.id, write.dp_type, initial.clone());
        }
        let unique_id = self.unique_id.clone();
        let handle = runtime.spawn(async move {
            let id = write.id;
            let result = match write.change {
                WriteChange::Set(value) => store.set_value(id, value).await,
                change @ WriteChange::Program(_) => {
                    store.update(id, move |current| change.apply(current)).await
                }
            };
            match result {
                Ok(()) => log::debug!("{unique_id}: datapoint {id} written"),
                Err(err) => log::warn!("{unique_id}: write failed: {err}"),
            }
        });
        Some(PendingWrite::new(handle))
    }

    fn available(&self) -> bool {
        self.device.is_connected()
            && self
                .mapping
                .availability
                .evaluate(self.device.store().as_ref(), self.device.product())
    }
}
