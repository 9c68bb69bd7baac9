use ethcal_calendar::{
    CalendarYear, PAGUME, SEQUENCE_LEN, Year, ethiopian_date_sequence,
    generate_ethiopian_day_sequence,
};

fn compute(y: u32) -> CalendarYear {
    CalendarYear::compute(Year::new(y).unwrap())
}

const SAMPLE_YEARS: [u32; 12] = [1, 8, 9, 1000, 1751, 1752, 1753, 1899, 1900, 2023, 2024, 2101];

#[test]
fn always_366_days_in_range() {
    for y in SAMPLE_YEARS {
        let cy = compute(y);
        let days = cy.ethiopian_days();
        assert_eq!(days.len(), SEQUENCE_LEN, "year {y}");
        assert!(
            days.as_slice().iter().all(|&d| (1..=30).contains(&d)),
            "year {y}: day out of range"
        );
    }
}

#[test]
fn pagume_wraps_exactly_once() {
    for y in SAMPLE_YEARS {
        let cy = compute(y);
        let dates = ethiopian_date_sequence(cy.anchor(), cy.leap().is_ethiopian_leap());
        let wraps = dates
            .windows(2)
            .filter(|w| w[0].month() == PAGUME && w[1].month() == 1)
            .count();
        assert_eq!(wraps, 1, "year {y}");

        let pagume_days = dates.iter().filter(|d| d.month() == PAGUME).count();
        let expected = if cy.leap().is_ethiopian_leap() { 6 } else { 5 };
        assert_eq!(pagume_days, expected, "year {y}");
    }
}

#[test]
fn resimulated_months_follow_day_drops() {
    // A drop in the day number marks the start of a new Ethiopian month.
    for y in SAMPLE_YEARS {
        let cy = compute(y);
        let days = cy.ethiopian_days().as_slice();
        let dates = ethiopian_date_sequence(cy.anchor(), cy.leap().is_ethiopian_leap());
        let mut month = cy.anchor().month();
        for i in 1..days.len() {
            if days[i] < days[i - 1] {
                month = if month == PAGUME { 1 } else { month + 1 };
            }
            assert_eq!(month, dates[i].month(), "year {y}, offset {i}");
        }
    }
}

#[test]
fn ethiopian_new_year_2023() {
    // Meskerem 1, 2016 fell on 12 September 2023.
    let cy = compute(2023);
    let offset = cy.month_offset(8) + 11;
    let dates = ethiopian_date_sequence(cy.anchor(), cy.leap().is_ethiopian_leap());
    assert_eq!(dates[offset].month(), 1);
    assert_eq!(dates[offset].day(), 1);
    assert_eq!(dates[offset - 1].month_name(), "Pagume");
    assert_eq!(dates[offset - 1].day(), 6);
}

#[test]
fn consecutive_years_line_up() {
    // The entry after 31 December is 1 January of the next year.
    for y in [1900u32, 1999, 2023, 2024, 2050] {
        let this = compute(y);
        let next = compute(y + 1);
        let dec31 = usize::from(this.days_in_year()) - 1;
        let dates = ethiopian_date_sequence(this.anchor(), this.leap().is_ethiopian_leap());
        assert_eq!(dates[dec31].next(this.leap().is_ethiopian_leap()), next.anchor(), "year {y}");
    }
}

#[test]
fn generator_is_deterministic() {
    let cy = compute(2024);
    let again = generate_ethiopian_day_sequence(cy.anchor(), cy.leap().is_ethiopian_leap());
    assert_eq!(&again, cy.ethiopian_days());
}
