use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::emi::{self, EmiBreakdown};
use crate::format::{format_currency, format_number};
use crate::types::{Money, Rate};
use crate::EmiCalcResult;

/// Current calculator inputs. The default terms double as the reset values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanTerms {
    pub principal: Money,
    pub annual_rate_percent: Rate,
    pub tenure_months: i64,
}

impl Default for LoanTerms {
    fn default() -> Self {
        Self {
            principal: dec!(500_000),
            annual_rate_percent: dec!(7.5),
            tenure_months: 60,
        }
    }
}

/// One recomputation's worth of display strings: the echoed inputs plus
/// the three formatted results.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultsView {
    pub principal: String,
    pub annual_rate: String,
    pub tenure_months: String,
    pub emi: String,
    pub total_payment: String,
    pub total_interest: String,
}

/// Rendering seam between the calculator and whatever displays it.
///
/// Implementations own panel visibility; presenting to an already
/// visible panel must be a no-op at the sink.
pub trait ResultsSink {
    fn present(&mut self, view: &ResultsView) -> EmiCalcResult<()>;
}

/// Owns the three inputs and re-renders on every change.
#[derive(Debug)]
pub struct CalculatorSession<S: ResultsSink> {
    terms: LoanTerms,
    sink: S,
}

impl<S: ResultsSink> CalculatorSession<S> {
    /// Runs the initial recomputation before returning.
    pub fn new(terms: LoanTerms, sink: S) -> EmiCalcResult<Self> {
        let mut session = Self { terms, sink };
        session.recompute()?;
        Ok(session)
    }

    pub fn terms(&self) -> &LoanTerms {
        &self.terms
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn set_principal(&mut self, principal: Money) -> EmiCalcResult<()> {
        self.terms.principal = principal;
        self.recompute()
    }

    pub fn set_annual_rate(&mut self, annual_rate_percent: Rate) -> EmiCalcResult<()> {
        self.terms.annual_rate_percent = annual_rate_percent;
        self.recompute()
    }

    pub fn set_tenure_months(&mut self, tenure_months: i64) -> EmiCalcResult<()> {
        self.terms.tenure_months = tenure_months;
        self.recompute()
    }

    /// Restore the default inputs and re-render.
    pub fn reset(&mut self) -> EmiCalcResult<()> {
        self.terms = LoanTerms::default();
        self.recompute()
    }

    /// Single entry point: engine call, formatting, then the sink.
    pub fn recompute(&mut self) -> EmiCalcResult<()> {
        let EmiBreakdown {
            emi,
            total_payment,
            total_interest,
        } = emi::compute(
            self.terms.principal,
            self.terms.annual_rate_percent,
            self.terms.tenure_months,
        );

        let view = ResultsView {
            principal: format_number(self.terms.principal),
            annual_rate: format_number(self.terms.annual_rate_percent),
            tenure_months: self.terms.tenure_months.to_string(),
            emi: format_currency(emi),
            total_payment: format_currency(total_payment),
            total_interest: format_currency(total_interest),
        };

        self.sink.present(&view)
    }
}
