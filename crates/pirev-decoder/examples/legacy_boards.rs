//! List every legacy revision code and the board it stands for

use pirev_decoder::board::legacy::{LegacySlot, LEGACY_TABLE};
use pirev_decoder::decode;

fn main() {
    println!("Code    Model  Rev  Memory  Manufacturer");
    for (code, slot) in (0u32..).zip(LEGACY_TABLE) {
        if slot == LegacySlot::Invalid {
            println!("{code:#06x}  (not issued)");
            continue;
        }
        match decode(code) {
            Ok(b) => println!(
                "{code:#06x}  {:<5}  {:<3}  {:<6}  {}",
                b.type_name(),
                b.revision(),
                b.memory(),
                b.manufacturer()
            ),
            Err(e) => println!("{code:#06x}  {e}"),
        }
    }
}
