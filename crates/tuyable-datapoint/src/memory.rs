//! In-memory datapoint store.
//!
//! [`MemoryDataPointStore`] applies writes locally and announces every change
//! on a broadcast channel. It stands in for a connected device in tests and
//! in the simulator tool.

use crate::{DataPoint, DataPointError, DataPointStore, DataPointUpdate, UpdateSource};
use std::collections::BTreeMap;
use std::future::Future;
use std::sync::{PoisonError, RwLock};
use tokio::sync::broadcast;
use tuyable_core::types::{DataPointId, DataPointType, DataPointValue, DataPointView};

const UPDATE_CHANNEL_CAPACITY: usize = 64;

#[derive(Debug)]
pub struct MemoryDataPointStore {
    points: RwLock<BTreeMap<DataPointId, DataPoint>>,
    updates: broadcast::Sender<DataPointUpdate>,
}

impl Default for MemoryDataPointStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryDataPointStore {
    pub fn new() -> Self {
        let (updates, _) = broadcast::channel(UPDATE_CHANNEL_CAPACITY);
        Self {
            points: RwLock::new(BTreeMap::new()),
            updates,
        }
    }

    /// Creates a store pre-populated with device-reported values.
    pub fn with_points<I>(points: I) -> Self
    where
        I: IntoIterator<Item = (DataPointId, DataPointValue)>,
    {
        let store = Self::new();
        {
            let mut map = store.points.write().unwrap_or_else(PoisonError::into_inner);
            for (id, value) in points {
                map.insert(id, DataPoint::new(id, value));
            }
        }
        store
    }

    /// Subscribes to datapoint changes.
    pub fn subscribe(&self) -> broadcast::Receiver<DataPointUpdate> {
        self.updates.subscribe()
    }

    /// Records a value reported by the device, replacing any previous value
    /// and type.
    pub fn report(&self, id: DataPointId, value: DataPointValue) {
        let data_point = DataPoint::new(id, value);
        self.points
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(id, data_point.clone());
        self.publish(data_point, UpdateSource::Device);
    }

    /// Snapshot of every datapoint, ordered by id.
    pub fn snapshot(&self) -> Vec<DataPoint> {
        self.points
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .values()
            .cloned()
            .collect()
    }

    fn publish(&self, data_point: DataPoint, source: UpdateSource) {
        // No subscribers is fine.
        let _ = self.updates.send(DataPointUpdate { data_point, source });
    }

    /// Applies `edit` to datapoint `id` under the write lock.
    fn apply<F>(&self, id: DataPointId, edit: F) -> Result<(), DataPointError>
    where
        F: FnOnce(&DataPointValue) -> Option<DataPointValue>,
    {
        let updated = {
            let mut points = self.points.write().unwrap_or_else(PoisonError::into_inner);
            let data_point = points.get_mut(&id).ok_or(DataPointError::Unknown(id))?;
            let value = edit(&data_point.value).ok_or(DataPointError::Rejected(id))?;
            data_point.value = coerce(id, data_point.dp_type, value)?;
            data_point.clone()
        };
        log::debug!("datapoint {id} set to {:?}", updated.value);
        self.publish(updated, UpdateSource::Write);
        Ok(())
    }
}

/// Converts `value` to `dp_type`. Integer-valued types convert between each
/// other; everything else must match exactly.
fn coerce(
    id: DataPointId,
    dp_type: DataPointType,
    value: DataPointValue,
) -> Result<DataPointValue, DataPointError> {
    let actual = value.data_point_type();
    if actual == dp_type {
        return Ok(value);
    }
    let mismatch = DataPointError::TypeMismatch {
        id,
        expected: dp_type,
        actual,
    };
    let Some(raw) = value.as_integer() else {
        return Err(mismatch);
    };
    match dp_type {
        DataPointType::Value => i32::try_from(raw)
            .map(DataPointValue::Value)
            .map_err(|_| mismatch),
        DataPointType::Enum => u32::try_from(raw)
            .map(DataPointValue::Enum)
            .map_err(|_| mismatch),
        DataPointType::Bitmap => u32::try_from(raw)
            .map(DataPointValue::Bitmap)
            .map_err(|_| mismatch),
        DataPointType::Bool => Ok(DataPointValue::Bool(raw != 0)),
        _ => Err(mismatch),
    }
}

impl DataPointView for MemoryDataPointStore {
    fn data_point_value(&self, id: DataPointId) -> Option<DataPointValue> {
        self.get(id).map(|dp| dp.value)
    }
}

impl DataPointStore for MemoryDataPointStore {
    fn get(&self, id: DataPointId) -> Option<DataPoint> {
        self.points
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&id)
            .cloned()
    }

    fn get_or_create(
        &self,
        id: DataPointId,
        dp_type: DataPointType,
        initial: DataPointValue,
    ) -> DataPoint {
        self.points
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .entry(id)
            .or_insert_with(|| DataPoint {
                id,
                dp_type,
                value: initial,
            })
            .clone()
    }

    fn has_id(&self, id: DataPointId, dp_type: Option<DataPointType>) -> bool {
        self.points
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&id)
            .is_some_and(|dp| dp_type.map_or(true, |t| t == dp.dp_type))
    }

    fn set_value(
        &self,
        id: DataPointId,
        value: DataPointValue,
    ) -> impl Future<Output = Result<(), DataPointError>> + Send {
        async move { self.apply(id, |_| Some(value)) }
    }

    fn update<F>(
        &self,
        id: DataPointId,
        edit: F,
    ) -> impl Future<Output = Result<(), DataPointError>> + Send
    where
        F: FnOnce(&DataPointValue) -> Option<DataPointValue> + Send,
    {
        async move { self.apply(id, edit) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn has_id_honours_type_filter() {
        let store = MemoryDataPointStore::with_points([(8, DataPointValue::Enum(2))]);
        assert!(store.has_id(8, None));
        assert!(store.has_id(8, Some(DataPointType::Enum)));
        assert!(!store.has_id(8, Some(DataPointType::Value)));
        assert!(!store.has_id(9, None));
    }

    #[test]
    fn get_or_create_keeps_existing_value() {
        let store = MemoryDataPointStore::with_points([(17, DataPointValue::Value(40))]);
        let existing = store.get_or_create(17, DataPointType::Value, DataPointValue::Value(0));
        assert_eq!(existing.value, DataPointValue::Value(40));

        let created = store.get_or_create(26, DataPointType::Value, DataPointValue::Value(800));
        assert_eq!(created, DataPoint::new(26, DataPointValue::Value(800)));
        assert!(store.has_id(26, Some(DataPointType::Value)));
    }

    #[tokio::test]
    async fn set_value_publishes_update() {
        let store = MemoryDataPointStore::with_points([(17, DataPointValue::Value(40))]);
        let mut rx = store.subscribe();
        store.set_value(17, DataPointValue::Value(55)).await.unwrap();

        let update = rx.recv().await.unwrap();
        assert_eq!(update.source, UpdateSource::Write);
        assert_eq!(update.data_point.value, DataPointValue::Value(55));
        assert_eq!(store.data_point_value(17), Some(DataPointValue::Value(55)));
    }

    #[tokio::test]
    async fn set_value_on_missing_datapoint_fails() {
        let store = MemoryDataPointStore::new();
        let err = store.set_value(3, DataPointValue::Value(1)).await.unwrap_err();
        assert!(matches!(err, DataPointError::Unknown(3)));
    }

    #[tokio::test]
    async fn integer_values_coerce_to_existing_type() {
        let store = MemoryDataPointStore::with_points([
            (8, DataPointValue::Enum(0)),
            (121, DataPointValue::Raw(vec![0, 1, 2])),
        ]);
        store.set_value(8, DataPointValue::Value(2)).await.unwrap();
        assert_eq!(store.data_point_value(8), Some(DataPointValue::Enum(2)));

        let err = store.set_value(121, DataPointValue::Value(2)).await.unwrap_err();
        assert!(matches!(
            err,
            DataPointError::TypeMismatch {
                id: 121,
                expected: DataPointType::Raw,
                actual: DataPointType::Value,
            }
        ));

        let err = store.set_value(8, DataPointValue::Value(-1)).await.unwrap_err();
        assert!(matches!(err, DataPointError::TypeMismatch { .. }));
    }

    #[tokio::test]
    async fn update_sees_value_current_at_write_time() {
        let store =
            MemoryDataPointStore::with_points([(121, DataPointValue::Raw(vec![0, 5, 10]))]);
        let first = store.update(121, |current| {
            let mut payload = current.as_bytes()?.to_vec();
            payload[0] = 0x03;
            Some(DataPointValue::Raw(payload))
        });
        let second = store.update(121, |current| {
            let mut payload = current.as_bytes()?.to_vec();
            payload[2] = 37;
            Some(DataPointValue::Raw(payload))
        });
        first.await.unwrap();
        second.await.unwrap();
        assert_eq!(
            store.data_point_value(121),
            Some(DataPointValue::Raw(vec![0x03, 5, 37]))
        );
    }

    #[tokio::test]
    async fn rejected_update_leaves_value_alone() {
        let store = MemoryDataPointStore::with_points([(121, DataPointValue::Value(4))]);
        let mut rx = store.subscribe();
        let err = store
            .update(121, |current| {
                current
                    .as_bytes()
                    .map(|payload| DataPointValue::Raw(payload.to_vec()))
            })
            .await
            .unwrap_err();
        assert!(matches!(err, DataPointError::Rejected(121)));
        assert_eq!(store.data_point_value(121), Some(DataPointValue::Value(4)));
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn snapshot_is_ordered_by_id() {
        let store = MemoryDataPointStore::with_points([
            (121, DataPointValue::Raw(vec![0, 1, 2])),
            (8, DataPointValue::Enum(2)),
        ]);
        let ids: Vec<_> = store.snapshot().iter().map(|dp| dp.id).collect();
        assert_eq!(ids, [8, 121]);
    }

    #[test]
    fn report_replaces_type() {
        let store = MemoryDataPointStore::with_points([(5, DataPointValue::Value(1))]);
        let mut rx = store.subscribe();
        store.report(5, DataPointValue::Raw(vec![9]));
        assert_eq!(store.get(5).unwrap().dp_type, DataPointType::Raw);
        assert_eq!(rx.try_recv().unwrap().source, UpdateSource::Device);
    }
}
