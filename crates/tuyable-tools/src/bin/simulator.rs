use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tuyable_core::{registry, DataPointValue, DeviceIdentity};
use tuyable_datapoint::MemoryDataPointStore;
use tuyable_number::{setup_numbers, DeviceHandle, JsonFileStore, MemoryStateStore, StateStore};
use tuyable_tools::{format_hex, parse_assignment, parse_datapoint};

#[derive(Parser, Debug)]
#[command(name = "tuyable-simulator")]
struct Args {
    #[arg(long)]
    category: String,
    #[arg(long)]
    product: String,
    #[arg(long, default_value = "00:00:00:00:00:00")]
    address: String,
    /// Directory for virtual number records. Values are kept in memory when
    /// omitted.
    #[arg(long)]
    state_dir: Option<PathBuf>,
    /// Datapoint reported by the device, as `id=value`. Repeatable.
    #[arg(long = "dp")]
    data_points: Vec<String>,
    /// Number value to set, as `key=value`. Repeatable, applied in order.
    #[arg(long = "set")]
    assignments: Vec<String>,
    /// Simulate a disconnected device.
    #[arg(long)]
    disconnected: bool,
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Args::parse();

    let points = args
        .data_points
        .iter()
        .map(|s| parse_datapoint(s))
        .collect::<Result<Vec<_>, _>>()?;
    let assignments = args
        .assignments
        .iter()
        .map(|s| parse_assignment(s))
        .collect::<Result<Vec<_>, _>>()?;

    let store = Arc::new(MemoryDataPointStore::with_points(points));
    let mut updates = store.subscribe();
    let identity = DeviceIdentity::new(
        args.category.as_str(),
        args.product.as_str(),
        args.address.as_str(),
        "Simulated device",
    );
    let device = DeviceHandle::new(identity, store);
    device.set_connected(!args.disconnected);

    let storage: Arc<dyn StateStore> = match args.state_dir {
        Some(dir) => {
            let store = JsonFileStore::new(dir);
            log::info!("virtual numbers stored under {}", store.dir().display());
            Arc::new(store)
        }
        None => Arc::new(MemoryStateStore::new()),
    };
    let mut entities = setup_numbers(&device, registry(), storage);
    for entity in &mut entities {
        entity.added_to_host(None);
    }

    for (key, value) in assignments {
        let Some(entity) = entities
            .iter_mut()
            .find(|e| e.description().key == key)
        else {
            eprintln!("no number '{key}' on {}", device.identity().model());
            std::process::exit(1);
        };
        let description = entity.description();
        if !description.contains(value) {
            return Err(format!(
                "{key}={value} is outside {}..={}",
                description.native_min_value, description.native_max_value
            )
            .into());
        }
        if let Some(write) = entity.set_native_value(value) {
            write.wait().await;
        }
    }

    while let Ok(update) = updates.try_recv() {
        let dp = &update.data_point;
        match &dp.value {
            DataPointValue::Raw(bytes) => {
                log::info!("dp {} <- {} ({:?})", dp.id, format_hex(bytes), update.source)
            }
            value => log::info!("dp {} <- {value:?} ({:?})", dp.id, update.source),
        }
    }

    let data_points = device.store().snapshot();
    if args.json {
        let numbers: Vec<_> = entities
            .iter()
            .map(|e| {
                serde_json::json!({
                    "unique_id": e.unique_id(),
                    "key": e.description().key,
                    "value": e.native_value(),
                    "available": e.available(),
                    "mode": e.mode(),
                })
            })
            .collect();
        let report = serde_json::json!({
            "numbers": numbers,
            "data_points": data_points,
        });
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        for e in &entities {
            let value = e
                .native_value()
                .map_or_else(|| "unknown".to_owned(), |v| v.to_string());
            let available = if e.available() { "" } else { " (unavailable)" };
            println!("{:<28} {value}{available}", e.description().key);
        }
        for dp in &data_points {
            let value = match &dp.value {
                DataPointValue::Raw(bytes) => format_hex(bytes),
                value => format!("{value:?}"),
            };
            println!("dp {:<3} {:?} {value}", dp.id, dp.dp_type);
        }
    }
    Ok(())
}
