//! Segment lists: the ordered values on each ring.
//!
//! Segment 0 is the value at 12 o'clock when a ring's rotation is zero.
//! Decades and months are fixed; the year list follows whichever decade
//! the decade ring is showing.

use crate::model::RingKind;

/// Decade labels, oldest first.
pub const DECADES: [&str; 9] = [
    "1940s", "1950s", "1960s", "1970s", "1980s", "1990s", "2000s", "2010s", "2020s",
];

/// Month labels, January first.
pub const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// The ten year labels for a decade: `"1990s"` → `1990..=1999`.
///
/// A label that doesn't start with four digits yields an empty list.
pub fn years_for_decade(decade: &str) -> Vec<String> {
    let Some(start) = decade.get(..4).and_then(|digits| digits.parse::<u32>().ok()) else {
        return Vec::new();
    };
    (start..start + 10).map(|year| year.to_string()).collect()
}

/// The ordered segment values for a ring.
///
/// `context_decade` picks the year list and is ignored for the other
/// rings.
pub fn segments_for(ring: RingKind, context_decade: &str) -> Vec<String> {
    match ring {
        RingKind::Decade => DECADES.iter().map(|d| (*d).to_string()).collect(),
        RingKind::Year => years_for_decade(context_decade),
        RingKind::Month => MONTHS.iter().map(|m| (*m).to_string()).collect(),
    }
}
