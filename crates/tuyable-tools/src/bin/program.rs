use clap::Parser;
use tuyable_core::number::program;
use tuyable_tools::{format_hex, parse_hex};

#[derive(Parser, Debug)]
#[command(name = "tuyable-program")]
struct Args {
    /// Fingerbot program payload as hex, e.g. "0003320a".
    #[arg(long)]
    payload: String,
    /// Replace the repeat count (65535 repeats forever).
    #[arg(long)]
    repeat_count: Option<u16>,
    /// Replace the idle position, in percent.
    #[arg(long)]
    idle_position: Option<u8>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Args::parse();
    let mut payload = parse_hex(&args.payload)?;
    if let Some(count) = args.repeat_count {
        payload = program::with_repeat_count(&payload, count)?;
    }
    if let Some(position) = args.idle_position {
        payload = program::with_idle_position(&payload, position)?;
    }

    match program::repeat_count(&payload) {
        Ok(program::REPEAT_FOREVER) => println!("repeat_count: forever"),
        Ok(count) => println!("repeat_count: {count}"),
        Err(e) => println!("repeat_count: n/a ({e})"),
    }
    match program::idle_position(&payload) {
        Ok(position) => println!("idle_position: {position}%"),
        Err(e) => println!("idle_position: n/a ({e})"),
    }
    println!("payload: {}", format_hex(&payload));
    Ok(())
}
