use crate::DeviceInfo;
use tokio::task::JoinHandle;
use tuyable_core::types::NumberMode;
use tuyable_core::NumberDescription;

/// A datapoint write running in the background.
///
/// Dropping it leaves the write running.
#[derive(Debug)]
pub struct PendingWrite(JoinHandle<()>);

impl PendingWrite {
    pub(crate) fn new(handle: JoinHandle<()>) -> Self {
        Self(handle)
    }

    /// Waits for the write to finish. Failures were already logged.
    pub async fn wait(self) {
        if let Err(err) = self.0.await {
            log::debug!("datapoint write task ended abnormally: {err}");
        }
    }
}

/// Host-facing number entity.
pub trait NumberEntity: Send {
    /// Stable id, `"<address>_<key>"`.
    fn unique_id(&self) -> &str;

    fn description(&self) -> &NumberDescription;

    fn mode(&self) -> NumberMode;

    fn device_info(&self) -> DeviceInfo;

    /// Value to show, or `None` when it cannot be determined.
    fn native_value(&self) -> Option<f64>;

    /// Applies a user value. Datapoint-backed entities return the background
    /// write, if one was issued.
    ///
    /// Datapoint writes are spawned on the current tokio runtime; without one
    /// the write is logged and dropped.
    fn set_native_value(&mut self, value: f64) -> Option<PendingWrite>;

    /// Recomputed on every call.
    fn available(&self) -> bool;

    /// Called once when the host adds the entity, with the host's last known
    /// state for it.
    fn added_to_host(&mut self, _last_state: Option<&str>) {}
}
