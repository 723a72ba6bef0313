//! Per-role payment policy.
//!
//! Payment is a capability each concrete role variant supplies: a total,
//! deterministic, side-effect-free function of the variant's own state to a
//! non-negative amount. [`Role::Unassigned`] deliberately supplies no
//! formula — asking it for payment is a [`Violation::PaymentNotDefined`],
//! never a silent zero.

use rust_decimal::Decimal;

use crate::validation::{Auditor, Violation};

use super::person::{Person, Role};
use super::professor::{Professor, Rank};
use super::student::{Standing, Student};

/// Per-variant payment formula.
///
/// Implementations must be pure: two calls on an unmutated value return the
/// same amount. The trait is implemented for each role payload, so adding a
/// role variant without a formula fails to compile at the dispatch site.
pub trait PaymentPolicy {
    /// Amount owed under this variant's formula, from its own state alone.
    fn payment(&self) -> Decimal;
}

impl PaymentPolicy for Student {
    fn payment(&self) -> Decimal {
        match self.standing() {
            // Flat stipend; the undergraduate track does not change it.
            Standing::General | Standing::Undergraduate(_) => Decimal::from(1000),
            Standing::Graduate(graduate) => {
                Decimal::from(1500)
                    + Decimal::from(20) * Decimal::from(graduate.teaching_hours())
                    + Decimal::from(25) * Decimal::from(graduate.research_hours())
            }
        }
    }
}

impl PaymentPolicy for Professor {
    fn payment(&self) -> Decimal {
        let years = Decimal::from(self.years_of_service());
        match self.rank() {
            Rank::Assistant => {
                self.base_salary() + Decimal::from(300) * years + self.research_grants()
            }
            Rank::Associate => {
                self.base_salary()
                    + Decimal::from(500) * years
                    + Decimal::new(12, 1) * self.research_grants()
            }
            Rank::Full => {
                self.base_salary()
                    + Decimal::from(800) * years
                    + Decimal::new(15, 1) * self.research_grants()
            }
        }
    }
}

impl Person {
    /// Compute this person's payment, dispatching on the concrete role.
    ///
    /// A person with no role has no payment formula: the request raises
    /// [`Violation::PaymentNotDefined`] through the auditor (subject id,
    /// attempted amount zero) instead of returning zero as a result.
    pub fn calculate_payment(&self, auditor: &Auditor) -> Result<Decimal, Violation> {
        match self.role() {
            Role::Unassigned => Err(auditor.flag(Violation::payment_not_defined(self.id()))),
            Role::Student(student) => Ok(student.payment()),
            Role::Professor(professor) => Ok(professor.payment()),
        }
    }
}
