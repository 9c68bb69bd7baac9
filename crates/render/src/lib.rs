//! # ethcal-render
//!
//! Terminal rendering of an [`ethcal_calendar::CalendarYear`]: one
//! Sunday-first weekly grid per Gregorian month, with the aligned
//! Ethiopian day number under every Gregorian day.
//!
//! ```text
//! Gregorian Year: 2024
//!         Ethiopian Years: 2016 - 2017
//! January         Tahisas-Tir
//! |-------------------------------------------------------|
//! |Sun    |Mon    |Tue    |Wed    |Thu    |Fri    |Sat    |
//! |-------------------------------------------------------|
//! |       |      1|      2|      3|      4|      5|      6|
//! |       |22     |23     |24     |25     |26     |27     |
//! |-------------------------------------------------------|
//! ```
//!
//! # Quick start
//!
//! ```
//! use ethcal_calendar::{CalendarYear, Year};
//! use ethcal_render::{RenderConfig, render_year};
//!
//! let cy = CalendarYear::compute(Year::new(2024).unwrap());
//! let text = render_year(&cy, &RenderConfig::default().with_month(Some(1))).unwrap();
//! assert!(text.contains("January\t\tTahisas-Tir"));
//! ```

mod config;
mod error;
mod grid;
mod layout;

pub use config::{MAX_CELL_WIDTH, MIN_CELL_WIDTH, RenderConfig};
pub use error::RenderError;
pub use grid::{MonthGrid, Week};
pub use layout::{render_year, write_year};
