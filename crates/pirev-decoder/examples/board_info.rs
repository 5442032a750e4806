//! Decode the revision code of the board this runs on
//!
//! Reads `/proc/cpuinfo`, or the file given as the first argument.

use pirev_decoder::{cpuinfo, decode, parse_code, Result};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter("pirev_decoder=debug")
        .init();

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| cpuinfo::DEFAULT_PATH.to_string());

    let revision = cpuinfo::read_revision(&path)?;
    let board = decode(parse_code(&revision)?)?;

    println!("Board revision {} ({} style)", board.raw(), board.style());
    println!("  Model:        {} rev {}", board.type_name(), board.revision());
    if let Some(soc) = board.processor() {
        println!("  SoC:          {soc}");
    }
    println!("  Memory:       {}", board.memory());
    println!("  Manufacturer: {}", board.manufacturer());
    if let Some(p) = board.permissions() {
        println!("  Overvoltage:  {}", if p.overvoltage_allowed { "allowed" } else { "disallowed" });
        println!("  Warranty:     {}", if p.warranty_intact { "intact" } else { "voided" });
    }

    Ok(())
}
