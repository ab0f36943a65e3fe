//! Billing periods and plan cadences.
//!
//! A payment plan groups calendar months into one obligation: a monthly plan pays each
//! month on its own, a semestral plan pays January-June and July-December as blocks and an
//! annual plan pays the whole year at once. Due records are always stored per month, so
//! every operation that touches a plan's obligation works on an inclusive range of months.

use std::{fmt, str::FromStr};

use chrono::{Datelike, NaiveDate};

/// Payment plan of a member, stored as `mensual`, `semestral` or `anual`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlanType {
    Monthly,
    Semestral,
    Annual,
}

impl PlanType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Monthly => "mensual",
            Self::Semestral => "semestral",
            Self::Annual => "anual",
        }
    }
}

impl fmt::Display for PlanType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a stored plan value is not recognised.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownPlanType(pub String);

impl FromStr for PlanType {
    type Err = UnknownPlanType;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "mensual" => Ok(Self::Monthly),
            "semestral" => Ok(Self::Semestral),
            "anual" => Ok(Self::Annual),
            other => Err(UnknownPlanType(other.to_string())),
        }
    }
}

/// Calendar month, always within 1..=12.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Month(i32);

impl Month {
    /// Returns `None` when `value` is outside 1..=12.
    pub fn new(value: i32) -> Option<Self> {
        (1..=12).contains(&value).then_some(Self(value))
    }

    /// Month of the given date.
    pub fn of(date: NaiveDate) -> Self {
        // chrono months are 1-based and never exceed 12
        Self(date.month() as i32)
    }

    pub fn value(&self) -> i32 {
        self.0
    }
}

/// Half of the year addressed by the `S1` and `S2` period markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Semester {
    First,
    Second,
}

impl Semester {
    pub fn containing(month: Month) -> Self {
        if month.value() <= 6 {
            Self::First
        } else {
            Self::Second
        }
    }

    pub fn range(&self) -> MonthRange {
        match self {
            Self::First => MonthRange::new(1, 6),
            Self::Second => MonthRange::new(7, 12),
        }
    }
}

/// Period requested when generating dues: a single month or a semester marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Period {
    Month(Month),
    Semester(Semester),
}

/// Error returned when a period string is neither `1`-`12` nor `S1`/`S2`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidPeriod(pub String);

impl FromStr for Period {
    type Err = InvalidPeriod;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let value = value.trim();

        match value {
            "S1" => return Ok(Self::Semester(Semester::First)),
            "S2" => return Ok(Self::Semester(Semester::Second)),
            _ => {}
        }

        value
            .parse::<i32>()
            .ok()
            .and_then(Month::new)
            .map(Self::Month)
            .ok_or_else(|| InvalidPeriod(value.to_string()))
    }
}

/// Inclusive range of months inside one year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthRange {
    pub start: i32,
    pub end: i32,
}

impl MonthRange {
    const fn new(start: i32, end: i32) -> Self {
        Self { start, end }
    }

    pub fn single(month: Month) -> Self {
        Self::new(month.value(), month.value())
    }

    pub fn whole_year() -> Self {
        Self::new(1, 12)
    }

    pub fn months(&self) -> impl Iterator<Item = i32> {
        self.start..=self.end
    }

    pub fn len(&self) -> usize {
        (self.end - self.start + 1) as usize
    }
}

/// Resolves the billing cycle group a month belongs to under the given plan.
///
/// Every due record whose month falls inside the returned range shares one payment
/// obligation with the record at `month`.
pub fn resolve_group(plan: PlanType, month: Month) -> MonthRange {
    match plan {
        PlanType::Monthly => MonthRange::single(month),
        PlanType::Semestral => Semester::containing(month).range(),
        PlanType::Annual => MonthRange::whole_year(),
    }
}

/// Months a generation run must cover for one member.
///
/// Without an explicit period the group containing `today` is used. A semester marker
/// covers its six months unless the plan is annual, whose obligation always spans the year.
pub fn months_to_generate(plan: PlanType, period: Option<Period>, today: NaiveDate) -> MonthRange {
    match period {
        Some(Period::Month(month)) => resolve_group(plan, month),
        Some(Period::Semester(semester)) => match plan {
            PlanType::Annual => MonthRange::whole_year(),
            PlanType::Monthly | PlanType::Semestral => semester.range(),
        },
        None => resolve_group(plan, Month::of(today)),
    }
}
