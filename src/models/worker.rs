//! Worker (roster member) model.
//!
//! Workers are the people shifts get assigned to. Each worker has a
//! role, a station-skill set, a weekly hour budget, fixed availability
//! rules keyed by weekday and session, and dated absence records.
//!
//! # Skill Normalization
//! Skills and station tokens are normalized (trimmed, uppercased) at the
//! ingestion boundary; engine code only ever sees the normalized form.

use chrono::{NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::time::Session;

/// A roster member eligible for shift assignment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Worker {
    /// Unique worker identifier.
    pub id: String,
    /// Human-readable name.
    pub name: String,
    /// Role, used for ranking tiers and exclusion.
    pub role: Role,
    /// Normalized station skills.
    pub skills: Vec<String>,
    /// Opt-in: this worker may cover any station regardless of skills.
    pub any_station: bool,
    /// Minimum weekly hours target.
    pub min_hours: f64,
    /// Maximum weekly hours budget.
    pub max_hours: f64,
    /// Fixed availability rules. Absent (weekday, session) pairs are
    /// unconstrained.
    pub availability: Vec<AvailabilityRule>,
    /// Dated absence records.
    pub absences: Vec<Absence>,
}

/// Worker role.
///
/// Roles drive two ranking decisions: management roles are permanently
/// excluded from demand-driven assignment, and on-call workers rank
/// below every other role (last resort).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    /// Management; never assigned by the engine.
    Manager,
    /// Trainee; ranked above standard operators to accrue floor time.
    Trainee,
    /// Standard operator.
    Operator,
    /// On-call cover; assigned only when nobody else is eligible.
    OnCall,
    /// No declared role.
    Unspecified,
}

impl Role {
    /// Whether this role is excluded from demand-driven assignment.
    pub fn is_excluded(&self) -> bool {
        matches!(self, Role::Manager)
    }

    /// Whether this role is only assigned when no other candidate exists.
    pub fn is_last_resort(&self) -> bool {
        matches!(self, Role::OnCall)
    }
}

/// A fixed availability entry for one (weekday, session) slot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AvailabilityRule {
    /// Day of week the rule applies to.
    pub weekday: Weekday,
    /// Session the rule applies to.
    pub session: Session,
    /// The constraint for that slot.
    pub availability: Availability,
}

/// Availability of a worker for one (weekday, session) slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Availability {
    /// No constraint.
    Unconstrained,
    /// Hard no; the worker cannot take shifts in this slot.
    Unavailable {
        /// Optional free-text reason for display.
        reason: Option<String>,
    },
    /// Soft preference window; demand must fit inside it.
    Preferred {
        /// Window start (fractional hours).
        start: f64,
        /// Window end (fractional hours).
        end: f64,
    },
    /// Forced window; same containment rule as `Preferred`.
    Forced {
        /// Window start (fractional hours).
        start: f64,
        /// Window end (fractional hours).
        end: f64,
    },
}

/// A dated absence record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Absence {
    /// Date of the absence.
    pub date: NaiveDate,
    /// Which part of the day is affected.
    pub scope: AbsenceScope,
}

/// Granularity of an absence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AbsenceScope {
    /// The whole day.
    WholeDay,
    /// The lunch session only.
    Lunch,
    /// The dinner session only.
    Dinner,
}

impl Absence {
    /// Creates a whole-day absence.
    pub fn whole_day(date: NaiveDate) -> Self {
        Self {
            date,
            scope: AbsenceScope::WholeDay,
        }
    }

    /// Creates a single-session absence.
    pub fn session(date: NaiveDate, session: Session) -> Self {
        Self {
            date,
            scope: match session {
                Session::Lunch => AbsenceScope::Lunch,
                Session::Dinner => AbsenceScope::Dinner,
            },
        }
    }

    /// Whether this absence blocks the given date and session.
    pub fn covers(&self, date: NaiveDate, session: Session) -> bool {
        if self.date != date {
            return false;
        }
        match self.scope {
            AbsenceScope::WholeDay => true,
            AbsenceScope::Lunch => session == Session::Lunch,
            AbsenceScope::Dinner => session == Session::Dinner,
        }
    }
}

/// Normalizes a skill or station token: trimmed, uppercased.
pub fn normalize_token(raw: &str) -> String {
    raw.trim().to_uppercase()
}

impl Worker {
    /// Creates a new worker with the given ID and role.
    pub fn new(id: impl Into<String>, role: Role) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            role,
            skills: Vec::new(),
            any_station: false,
            min_hours: 0.0,
            max_hours: 40.0,
            availability: Vec::new(),
            absences: Vec::new(),
        }
    }

    /// Creates a standard operator.
    pub fn operator(id: impl Into<String>) -> Self {
        Self::new(id, Role::Operator)
    }

    /// Sets the worker name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Adds a station skill (normalized on entry).
    pub fn with_skill(mut self, skill: impl AsRef<str>) -> Self {
        let token = normalize_token(skill.as_ref());
        if !token.is_empty() {
            self.skills.push(token);
        }
        self
    }

    /// Opts this worker into covering any station.
    pub fn with_any_station(mut self) -> Self {
        self.any_station = true;
        self
    }

    /// Sets the weekly hour budget.
    pub fn with_hours(mut self, min_hours: f64, max_hours: f64) -> Self {
        self.min_hours = min_hours;
        self.max_hours = max_hours;
        self
    }

    /// Adds a fixed availability rule.
    pub fn with_availability(
        mut self,
        weekday: Weekday,
        session: Session,
        availability: Availability,
    ) -> Self {
        self.availability.push(AvailabilityRule {
            weekday,
            session,
            availability,
        });
        self
    }

    /// Adds an absence record.
    pub fn with_absence(mut self, absence: Absence) -> Self {
        self.absences.push(absence);
        self
    }

    /// Looks up the availability for a (weekday, session) slot.
    ///
    /// Missing entries mean unconstrained.
    pub fn availability_for(&self, weekday: Weekday, session: Session) -> &Availability {
        self.availability
            .iter()
            .find(|r| r.weekday == weekday && r.session == session)
            .map(|r| &r.availability)
            .unwrap_or(&Availability::Unconstrained)
    }

    /// Whether an absence record blocks the given date and session.
    pub fn is_absent(&self, date: NaiveDate, session: Session) -> bool {
        self.absences.iter().any(|a| a.covers(date, session))
    }

    /// Whether a whole-day absence exists for the date.
    pub fn is_absent_whole_day(&self, date: NaiveDate) -> bool {
        self.absences
            .iter()
            .any(|a| a.date == date && a.scope == AbsenceScope::WholeDay)
    }

    /// Whether this worker's skills match a station token.
    ///
    /// Matching is case-insensitive and bidirectional-substring, so a
    /// `"BAR"` skill covers a `"BAR_V"` station and vice versa. An empty
    /// skill set matches nothing unless the worker opted into
    /// `any_station`.
    pub fn skill_matches(&self, station: &str) -> bool {
        if self.any_station {
            return true;
        }
        let token = normalize_token(station);
        if token.is_empty() {
            return false;
        }
        self.skills
            .iter()
            .any(|s| s.contains(&token) || token.contains(s.as_str()))
    }
}
