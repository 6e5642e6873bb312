// ============================================================================
// Basic Usage Example
// ============================================================================

use decimal_comparator::prelude::*;
use std::cmp::Ordering;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Decimal Comparator Example ===\n");

    println!("Ambient locale: {}\n", Locale::ambient());

    // "value < 42" over a column of mixed cells
    let comparator = DecimalByteComparator::from_i64_with_locale(42, Locale::us());
    println!("Filter: value < {}", comparator.reference_value());

    let cells: [&[u8]; 6] = [b"41.999", b"42", b"0042.0", b"1,000", b"-7.5", b"n/a"];
    for cell in cells {
        let verdict = match comparator.compare(cell) {
            Ordering::Greater => "keep",
            Ordering::Equal | Ordering::Less => "skip",
        };
        println!("  {:>8} -> {}", String::from_utf8_lossy(cell), verdict);
    }

    // Same text, different locales
    println!("\nReading \"1,5\":");
    for locale in [Locale::us(), Locale::germany()] {
        let c = DecimalByteComparator::from_bytes_with_locale("1,5", locale.clone())?;
        println!("  {:<40} -> {}", locale.to_string(), c.reference_value());
    }

    // Wire round trip
    let original = DecimalByteComparator::from_bytes_with_locale("3.14", Locale::us())?;
    let wire = original.to_byte_array();
    let decoded = DecimalByteComparator::parse_from_with_locale(&wire, Locale::us())?;
    println!("\nSerialized {} into {} bytes: {:?}", original, wire.len(), wire);
    println!(
        "Decoded {} (fields equal: {})",
        decoded,
        decoded.are_serialized_fields_equal(&original)
    );

    // Malformed definitions fail fast
    match DecimalByteComparator::from_bytes_with_locale("abc", Locale::us()) {
        Ok(_) => println!("\nunexpected success"),
        Err(err) => println!("\nRejected filter value: {}", err),
    }
    match DecimalByteComparator::parse_from(&[0xff, 0xff, 0xff]) {
        Ok(_) => println!("unexpected success"),
        Err(err) => println!("Rejected envelope: {}", err),
    }

    Ok(())
}
