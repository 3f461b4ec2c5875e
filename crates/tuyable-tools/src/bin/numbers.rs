use clap::Parser;
use tuyable_core::{product_info, registry, NumberDescriptor};

#[derive(Parser, Debug)]
#[command(name = "tuyable-numbers")]
struct Args {
    /// Tuya device category, e.g. "szjqr".
    #[arg(long)]
    category: String,
    /// Tuya product id, e.g. "blliqpsj".
    #[arg(long)]
    product: String,
    #[arg(long)]
    json: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Args::parse();
    let descriptors = registry().resolve(&args.category, &args.product);
    if args.json {
        println!("{}", serde_json::to_string_pretty(descriptors)?);
        return Ok(());
    }

    let product = product_info(&args.category, &args.product);
    println!(
        "{} {} ({}): {} number controls",
        args.category,
        args.product,
        product.name,
        descriptors.len()
    );
    for descriptor in descriptors {
        let d = descriptor.description();
        let source = match descriptor {
            NumberDescriptor::Direct(m) => format!("dp {} {:?}", m.dp_id, m.accessor),
            NumberDescriptor::Virtual(m) => format!("virtual default {}", m.default_value),
        };
        println!(
            "  {:<28} {:>9} ..{:>9} step {:<6} {:<4} {source} [{:?}]",
            d.key,
            d.native_min_value,
            d.native_max_value,
            d.native_step,
            d.native_unit_of_measurement.unwrap_or(""),
            descriptor.availability()
        );
    }
    Ok(())
}
