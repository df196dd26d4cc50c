//! Side-by-side loan comparison state.
//!
//! Holds up to [`MAX_SCENARIOS`] loans, exactly one of which is active at
//! any time. Scenario ids come from a monotonically increasing counter and
//! are never reused, so a remembered id can never silently point at a
//! different loan after removals.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::FinCalcError;
use crate::loan::schedule::{compute_loan, AmortizationRow, LoanMetrics, LoanTerms, RepaymentMode};
use crate::memo::Memoized;
use crate::types::{Money, RatePercent};
use crate::FinCalcResult;

/// Upper bound on simultaneously compared loans.
pub const MAX_SCENARIOS: usize = 3;

/// Rows shown per page of the amortization table.
pub const SCHEDULE_PAGE_ROWS: usize = 12;

/// One loan inside a comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanScenario {
    pub id: u32,
    pub terms: LoanTerms,
}

/// A single-field edit applied to one scenario.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TermsUpdate {
    Principal(Money),
    AnnualRatePercent(RatePercent),
    TenureYears(u32),
    Mode(RepaymentMode),
}

/// Bounded, never-empty collection of loans under comparison.
#[derive(Debug, Clone)]
pub struct LoanComparison {
    scenarios: Vec<LoanScenario>,
    active: u32,
    next_id: u32,
    schedule_page: usize,
    metrics_cache: Memoized<(LoanTerms, NaiveDate), LoanMetrics>,
}

impl LoanComparison {
    /// Start a comparison holding a single scenario, which becomes active.
    pub fn new(terms: LoanTerms) -> Self {
        let mut comparison = Self {
            scenarios: Vec::with_capacity(MAX_SCENARIOS),
            active: 0,
            next_id: 1,
            schedule_page: 0,
            metrics_cache: Memoized::new(),
        };
        let id = comparison.mint_id();
        comparison.scenarios.push(LoanScenario { id, terms });
        comparison.active = id;
        comparison
    }

    /// Build a comparison from externally supplied terms (scenario files).
    /// The first entry becomes active.
    pub fn from_terms(terms: Vec<LoanTerms>) -> FinCalcResult<Self> {
        if terms.len() > MAX_SCENARIOS {
            return Err(FinCalcError::ScenarioLimit { count: terms.len() });
        }

        let mut entries = terms.into_iter();
        let first = match entries.next() {
            Some(first) => first,
            None => {
                return Err(FinCalcError::InvalidInput {
                    field: "loans".into(),
                    reason: "at least one loan is required".into(),
                })
            }
        };

        let mut comparison = Self::new(first);
        for terms in entries {
            let id = comparison.mint_id();
            comparison.scenarios.push(LoanScenario { id, terms });
        }
        Ok(comparison)
    }

    fn mint_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Add a scenario. At capacity this is a no-op returning None; otherwise
    /// the new scenario becomes active and its id is returned.
    pub fn add(&mut self, terms: LoanTerms) -> Option<u32> {
        if self.scenarios.len() >= MAX_SCENARIOS {
            return None;
        }
        let id = self.mint_id();
        self.scenarios.push(LoanScenario { id, terms });
        self.active = id;
        self.schedule_page = 0;
        Some(id)
    }

    /// Remove a scenario. Removing the last remaining scenario or an unknown
    /// id is a no-op returning false. When the active scenario goes, the
    /// first remaining one becomes active.
    pub fn remove(&mut self, id: u32) -> bool {
        if self.scenarios.len() <= 1 {
            return false;
        }
        let position = match self.scenarios.iter().position(|s| s.id == id) {
            Some(position) => position,
            None => return false,
        };

        self.scenarios.remove(position);
        if self.active == id {
            self.active = self.scenarios[0].id;
            self.schedule_page = 0;
        }
        true
    }

    /// Apply a single-field edit to the scenario with `id`. Returns false
    /// for an unknown id. Any successful edit resets the table page.
    pub fn update(&mut self, id: u32, update: TermsUpdate) -> bool {
        let scenario = match self.scenarios.iter_mut().find(|s| s.id == id) {
            Some(scenario) => scenario,
            None => return false,
        };

        match update {
            TermsUpdate::Principal(value) => scenario.terms.principal = value,
            TermsUpdate::AnnualRatePercent(value) => scenario.terms.annual_rate_percent = value,
            TermsUpdate::TenureYears(value) => scenario.terms.tenure_years = value,
            TermsUpdate::Mode(value) => scenario.terms.mode = value,
        }
        self.schedule_page = 0;
        true
    }

    /// Make the scenario with `id` active. Unknown ids are a no-op returning
    /// false. Switching loans resets the table page.
    pub fn select(&mut self, id: u32) -> bool {
        if !self.scenarios.iter().any(|s| s.id == id) {
            return false;
        }
        if self.active != id {
            self.active = id;
            self.schedule_page = 0;
        }
        true
    }

    /// The active scenario. The collection is never empty and `active`
    /// always names a member.
    pub fn active(&self) -> &LoanScenario {
        self.scenarios
            .iter()
            .find(|s| s.id == self.active)
            .unwrap_or(&self.scenarios[0])
    }

    pub fn active_id(&self) -> u32 {
        self.active
    }

    pub fn scenarios(&self) -> &[LoanScenario] {
        &self.scenarios
    }

    pub fn len(&self) -> usize {
        self.scenarios.len()
    }

    /// Metrics for the active scenario. Recomputed only when the active
    /// terms or the start date changed since the previous call.
    pub fn active_metrics(&mut self, start_date: NaiveDate) -> LoanMetrics {
        let terms = self.active().terms.clone();
        self.metrics_cache
            .get_or_compute((terms, start_date), |(terms, date)| {
                compute_loan(terms, *date)
            })
    }

    pub fn schedule_page(&self) -> usize {
        self.schedule_page
    }

    pub fn set_schedule_page(&mut self, page: usize) {
        self.schedule_page = page;
    }

    /// The slice of `schedule` visible on the current page. Pages past the
    /// end are empty rather than clamped.
    pub fn visible_rows<'a>(&self, schedule: &'a [AmortizationRow]) -> &'a [AmortizationRow] {
        let start = self.schedule_page.saturating_mul(SCHEDULE_PAGE_ROWS);
        if start >= schedule.len() {
            return &[];
        }
        let end = (start + SCHEDULE_PAGE_ROWS).min(schedule.len());
        &schedule[start..end]
    }
}
