use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tuyable_core::{product_info, DeviceIdentity, ProductInfo};

/// Manufacturer reported for every device.
pub const MANUFACTURER: &str = "Tuya";

/// Device registry information shared by all entities of a device.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceInfo {
    /// Device address, the device's identifier on the host.
    pub identifier: String,
    pub name: String,
    pub manufacturer: &'static str,
    pub model: String,
}

/// One device session: identity, product capabilities, datapoint store, and
/// the host-level connection state.
///
/// Cloning is cheap; all clones share the store and the connection flag.
#[derive(Debug)]
pub struct DeviceHandle<S> {
    identity: Arc<DeviceIdentity>,
    product: ProductInfo,
    store: Arc<S>,
    connected: Arc<AtomicBool>,
}

impl<S> Clone for DeviceHandle<S> {
    fn clone(&self) -> Self {
        Self {
            identity: Arc::clone(&self.identity),
            product: self.product,
            store: Arc::clone(&self.store),
            connected: Arc::clone(&self.connected),
        }
    }
}

impl<S> DeviceHandle<S> {
    /// Creates a connected session, looking up the product in the catalog.
    pub fn new(identity: DeviceIdentity, store: Arc<S>) -> Self {
        let product = product_info(&identity.category, &identity.product_id);
        Self::with_product(identity, product, store)
    }

    pub fn with_product(identity: DeviceIdentity, product: ProductInfo, store: Arc<S>) -> Self {
        Self {
            identity: Arc::new(identity),
            product,
            store,
            connected: Arc::new(AtomicBool::new(true)),
        }
    }

    pub fn identity(&self) -> &DeviceIdentity {
        &self.identity
    }

    pub fn product(&self) -> &ProductInfo {
        &self.product
    }

    pub fn store(&self) -> &Arc<S> {
        &self.store
    }

    /// Host-level availability of the device.
    pub fn is_connected(&self) -> bool {
        self.connected.load(Ordering::Acquire)
    }

    pub fn set_connected(&self, connected: bool) {
        self.connected.store(connected, Ordering::Release);
    }

    pub fn device_info(&self) -> DeviceInfo {
        DeviceInfo {
            identifier: self.identity.address.clone(),
            name: self.identity.name.clone(),
            manufacturer: MANUFACTURER,
            model: self.identity.model(),
        }
    }
}
