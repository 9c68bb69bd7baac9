//! Ethiopian date coinciding with 1 January.

use crate::leap::LeapStatus;
use crate::regime::{CalendarRegime, EpochOffset};
use crate::sequence::EthiopianDate;

/// Ethiopian `(month, day)` falling on 1 January of a Gregorian/Julian year.
pub type EthiopianAnchor = EthiopianDate;

/// Tahsas, the Ethiopian month 1 January falls in under Gregorian rules.
const GREGORIAN_ANCHOR_MONTH: u8 = 4;
const GREGORIAN_ANCHOR_DAY: i16 = 23;

/// Tir 6, used for every Julian year.
const JULIAN_ANCHOR: EthiopianDate = EthiopianDate::new_unchecked(5, 6);

/// Locates the Ethiopian date of 1 January.
///
/// Gregorian years start from Tahsas 23 (22 in a leap year) corrected by
/// `offset`. Julian years always anchor on Tir 6; that override wins over
/// both the leap adjustment and the offset.
pub fn locate_ethiopian_anchor(
    leap: LeapStatus,
    regime: CalendarRegime,
    offset: EpochOffset,
) -> EthiopianAnchor {
    if regime.is_julian() {
        return JULIAN_ANCHOR;
    }
    let base = if leap.is_leap() {
        GREGORIAN_ANCHOR_DAY - 1
    } else {
        GREGORIAN_ANCHOR_DAY
    };
    // base +- 1 stays within 21..=24
    let day = (base + i16::from(offset.get())) as u8;
    EthiopianDate::new_unchecked(GREGORIAN_ANCHOR_MONTH, day)
}
