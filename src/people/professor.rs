//! Professor roles: one shared record, three ranks.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::validation::{Auditor, Violation};

/// Fields required to appoint a professor of any rank.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProfessorProfile {
    pub department: String,
    pub specialization: String,
    pub hire_date: NaiveDate,
    pub years_of_service: u32,
    pub base_salary: Decimal,
    pub research_grants: Decimal,
}

/// Closed set of professor ranks. Ranks share the professor record and
/// differ only in their payment formula.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Rank {
    Assistant,
    Associate,
    Full,
}

impl Rank {
    /// Rank name for display and diagnostics.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Assistant => "AssistantProfessor",
            Self::Associate => "AssociateProfessor",
            Self::Full => "FullProfessor",
        }
    }
}

/// Professor payload attached to a person's role.
///
/// Base salary and research grants are validated non-negative at
/// construction; years of service is unsigned by type.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Professor {
    department: String,
    specialization: String,
    hire_date: NaiveDate,
    years_of_service: u32,
    base_salary: Decimal,
    research_grants: Decimal,
    rank: Rank,
}

impl Professor {
    /// Validate and build the professor payload.
    ///
    /// A negative base salary or grant total fails construction with
    /// [`Violation::InvalidPersonData`] under the fatal-field policy.
    pub(crate) fn new(
        owner_name: &str,
        profile: ProfessorProfile,
        rank: Rank,
        auditor: &Auditor,
    ) -> Result<Self, Violation> {
        if profile.base_salary < Decimal::ZERO || profile.research_grants < Decimal::ZERO {
            return Err(auditor.flag(Violation::InvalidPersonData {
                name: owner_name.to_string(),
            }));
        }
        Ok(Self {
            department: profile.department,
            specialization: profile.specialization,
            hire_date: profile.hire_date,
            years_of_service: profile.years_of_service,
            base_salary: profile.base_salary,
            research_grants: profile.research_grants,
            rank,
        })
    }

    pub fn department(&self) -> &str {
        &self.department
    }

    pub fn specialization(&self) -> &str {
        &self.specialization
    }

    pub fn hire_date(&self) -> NaiveDate {
        self.hire_date
    }

    pub fn years_of_service(&self) -> u32 {
        self.years_of_service
    }

    pub fn base_salary(&self) -> Decimal {
        self.base_salary
    }

    pub fn research_grants(&self) -> Decimal {
        self.research_grants
    }

    pub fn rank(&self) -> Rank {
        self.rank
    }
}
