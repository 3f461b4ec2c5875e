use crate::DataPoint;
use std::future::Future;
use thiserror::Error;
use tuyable_core::types::{DataPointId, DataPointType, DataPointValue, DataPointView};

/// Errors reported by a datapoint store's write path.
#[derive(Debug, Error)]
pub enum DataPointError {
    #[error("datapoint {0} does not exist")]
    Unknown(DataPointId),
    #[error("datapoint {id} is {expected:?}, got a {actual:?} value")]
    TypeMismatch {
        id: DataPointId,
        expected: DataPointType,
        actual: DataPointType,
    },
    #[error("datapoint {0} cannot take the requested edit")]
    Rejected(DataPointId),
}

/// Keyed collection of a device's datapoints.
///
/// Reads are synchronous snapshots. Writes are asynchronous; callers that do
/// not care about the outcome spawn them and observe the result through the
/// store's own update notifications.
pub trait DataPointStore: DataPointView + Send + Sync {
    /// Returns the datapoint `id`, if the device has reported it.
    fn get(&self, id: DataPointId) -> Option<DataPoint>;

    /// Returns the datapoint `id`, creating it with `initial` if absent.
    fn get_or_create(
        &self,
        id: DataPointId,
        dp_type: DataPointType,
        initial: DataPointValue,
    ) -> DataPoint;

    /// Whether datapoint `id` exists, optionally of type `dp_type`.
    fn has_id(&self, id: DataPointId, dp_type: Option<DataPointType>) -> bool;

    /// Writes `value` to datapoint `id`.
    fn set_value(
        &self,
        id: DataPointId,
        value: DataPointValue,
    ) -> impl Future<Output = Result<(), DataPointError>> + Send;

    /// Read-modify-write of datapoint `id`.
    ///
    /// `edit` receives the value current when the write is applied and
    /// returns the new value, or `None` to reject the edit. No other write to
    /// `id` may land between the read and the write.
    fn update<F>(
        &self,
        id: DataPointId,
        edit: F,
    ) -> impl Future<Output = Result<(), DataPointError>> + Send
    where
        F: FnOnce(&DataPointValue) -> Option<DataPointValue> + Send;
}
