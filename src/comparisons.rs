use crate::models::ComparisonEntry;

const HOUR: u64 = 3600;

/// The comparison catalog: what else the watch time would have paid for.
/// Each entry is (name, seconds per unit, unit label); the constants are
/// all nonzero, so converting can never fail.
const CATALOG: [(&str, u64, &str); 11] = [
    ("Cook instant noodles", 180, "packs"),
    ("Pet a cat", 300, "sessions"),
    ("Read War and Peace", 50 * HOUR, "readings"),
    ("Train for and run a marathon", 100 * HOUR, "marathons"),
    ("Watch the entire One Piece anime", 1_000 * HOUR, "watch-throughs"),
    ("Learn a language to fluency", 1_000 * HOUR, "languages"),
    ("Build a house from scratch", 2_000 * HOUR, "houses"),
    ("Overthrow a government", 10_000 * HOUR, "coups"),
    ("Serve as President of Argentina", 35_000 * HOUR, "terms"),
    ("Walk to the Moon (one way)", 38_440 * HOUR, "walks"),
    ("Walk to the Moon and back", 76_880 * HOUR, "round trips"),
];

/// Converts total watch time into every catalog equivalent, in catalog
/// order. Pure and infallible; identical inputs give identical lists.
pub fn compare(total_duration_seconds: u64) -> Vec<ComparisonEntry> {
    CATALOG
        .iter()
        .map(|&(name, seconds_per_unit, unit)| ComparisonEntry {
            name,
            quantity: total_duration_seconds as f64 / seconds_per_unit as f64,
            unit,
        })
        .collect()
}

/// Renders a quantity at a precision that reads well: two decimals below
/// one, one decimal up to a hundred, thousands-separated integers above.
/// Tier selection uses the value as it would print, so 99.96 renders as
/// "100" rather than "100.0".
pub fn format_quantity(quantity: f64) -> String {
    let tenths = (quantity * 10.0).round() / 10.0;
    if quantity < 1.0 {
        format!("{quantity:.2}")
    } else if tenths < 100.0 {
        format!("{tenths:.1}")
    } else {
        group_thousands(quantity.round() as u64)
    }
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}
