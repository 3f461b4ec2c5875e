use crate::{DataPointNumber, DeviceHandle, NumberEntity, StateStore, VirtualNumber};
use std::sync::Arc;
use tuyable_core::{NumberDescriptor, NumberRegistry};
use tuyable_datapoint::DataPointStore;

/// Creates the number entities of one device.
///
/// A direct descriptor yields an entity when it is force-added or the device
/// has reported its datapoint (of the declared type, if any). A virtual
/// descriptor yields one when it is force-added. Entities come back in table
/// order and have not been added to the host yet.
pub fn setup_numbers<S>(
    device: &DeviceHandle<S>,
    registry: &NumberRegistry,
    storage: Arc<dyn StateStore>,
) -> Vec<Box<dyn NumberEntity>>
where
    S: DataPointStore + 'static,
{
    let identity = device.identity();
    let descriptors = registry.resolve(&identity.category, &identity.product_id);
    if descriptors.is_empty() {
        log::debug!(
            "{}: no number controls for {}",
            identity.address,
            identity.model()
        );
        return Vec::new();
    }

    let mut entities: Vec<Box<dyn NumberEntity>> = Vec::with_capacity(descriptors.len());
    for descriptor in descriptors {
        match descriptor {
            NumberDescriptor::Direct(mapping) => {
                if mapping.force_add || device.store().has_id(mapping.dp_id, mapping.dp_type) {
                    entities.push(Box::new(DataPointNumber::new(
                        device.clone(),
                        mapping.clone(),
                    )));
                } else {
                    log::debug!(
                        "{}: skipping {}, datapoint {} not reported",
                        identity.address,
                        mapping.description.key,
                        mapping.dp_id
                    );
                }
            }
            NumberDescriptor::Virtual(mapping) => {
                if mapping.force_add {
                    entities.push(Box::new(VirtualNumber::new(
                        device.clone(),
                        mapping.clone(),
                        Arc::clone(&storage),
                    )));
                }
            }
        }
    }
    log::info!(
        "{}: created {} number entities",
        identity.address,
        entities.len()
    );
    entities
}
