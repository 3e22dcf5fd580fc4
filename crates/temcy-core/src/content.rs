//! Static content records and the few derivations the page makes from them.

use crate::constants::{STATUS_FULL_GAS_ABOVE_KM, STATUS_IDLE_BELOW_KM};
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunnerStatus {
    /// Barely ran this week.
    Mager,
    Active,
    FullGas,
}

impl RunnerStatus {
    pub fn from_distance(distance_km: f32) -> Self {
        if distance_km < STATUS_IDLE_BELOW_KM {
            RunnerStatus::Mager
        } else if distance_km > STATUS_FULL_GAS_ABOVE_KM {
            RunnerStatus::FullGas
        } else {
            RunnerStatus::Active
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            RunnerStatus::Mager => "MAGER",
            RunnerStatus::Active => "ACTIVE",
            RunnerStatus::FullGas => "FULL GAS",
        }
    }

    /// CSS modifier class for the status cell.
    pub fn css_class(self) -> &'static str {
        match self {
            RunnerStatus::Mager => "status-mager",
            RunnerStatus::Active => "status-active",
            RunnerStatus::FullGas => "status-full-gas",
        }
    }
}

impl fmt::Display for RunnerStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Status label derived from a distance in km.
#[inline]
pub fn status_label(distance_km: f32) -> &'static str {
    RunnerStatus::from_distance(distance_km).label()
}

#[derive(Clone, Debug, PartialEq)]
pub struct RunnerRow {
    pub id: &'static str,
    pub name: &'static str,
    pub distance_km: f32,
    pub elevation_m: u32,
}

impl RunnerRow {
    #[inline]
    pub fn status(&self) -> RunnerStatus {
        RunnerStatus::from_distance(self.distance_km)
    }
}

/// One-based, zero-padded rank: `01`, `02`, …
pub fn rank_label(index: usize) -> String {
    format!("{:02}", index + 1)
}

pub fn distance_label(distance_km: f32) -> String {
    format!("{:.1}", distance_km)
}

/// Grid footprint of a card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridShape {
    pub col_span: u8,
    pub row_span: u8,
}

impl GridShape {
    pub const fn new(col_span: u8, row_span: u8) -> Self {
        Self { col_span, row_span }
    }

    /// Inline grid placement for the card element.
    pub fn css(&self) -> String {
        format!(
            "grid-column: span {}; grid-row: span {};",
            self.col_span, self.row_span
        )
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct GalleryItem {
    pub id: u32,
    pub image: &'static str,
    pub category: &'static str,
    pub shape: GridShape,
}

impl GalleryItem {
    pub fn caption(&self) -> String {
        format!("IMG_{}.RAW", self.id)
    }

    pub fn session_label(&self) -> String {
        format!("TEMCY RUN SESSION #{}", self.id)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ProjectItem {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub stat: &'static str,
    pub image: Option<&'static str>,
    pub href: Option<&'static str>,
    pub shape: GridShape,
}
