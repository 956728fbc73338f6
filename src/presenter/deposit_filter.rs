//! Pure derivations over a fetched deposit list: filtering, domain
//! discovery and totals. Nothing here mutates the source list.

use rust_decimal::Decimal;
use std::collections::HashSet;

use crate::entity::Deposito;
use crate::utils::normalize_query;

/// Filter inputs of the list screen. Domain and search compose with AND.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DepositFilter {
    domain: Option<String>,
    query: String,
    needle: Option<String>,
}

impl DepositFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn domain(&self) -> Option<&str> {
        self.domain.as_deref()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// Exact, case-sensitive match on the stored tag. `None` shows all domains.
    pub fn set_domain(&mut self, domain: Option<&str>) {
        self.domain = domain.map(str::to_string);
    }

    /// Selecting the active domain again clears it.
    pub fn toggle_domain(&mut self, domain: &str) {
        if self.domain.as_deref() == Some(domain) {
            self.domain = None;
        } else {
            self.domain = Some(domain.to_string());
        }
    }

    pub fn set_query(&mut self, query: &str) {
        self.query = query.to_string();
        self.needle = normalize_query(query);
    }

    pub fn is_active(&self) -> bool {
        self.domain.is_some() || self.needle.is_some()
    }

    pub fn matches(&self, deposito: &Deposito) -> bool {
        if let Some(domain) = &self.domain {
            if deposito.dominio.as_deref() != Some(domain.as_str()) {
                return false;
            }
        }

        match &self.needle {
            Some(needle) => deposito.matches_query(needle),
            None => true,
        }
    }

    /// Visible records, in source order.
    pub fn apply<'a>(&'a self, deposits: &'a [Deposito]) -> impl Iterator<Item = &'a Deposito> + 'a {
        deposits.iter().filter(move |deposito| self.matches(deposito))
    }
}

/// Distinct non-null `dominio` values in order of first appearance.
///
/// Lazy and finite; call again for a fresh pass over the current list.
pub fn available_domains(deposits: &[Deposito]) -> impl Iterator<Item = &str> + '_ {
    let mut seen = HashSet::new();
    deposits
        .iter()
        .filter_map(|deposito| deposito.dominio.as_deref())
        .filter(move |dominio| seen.insert(*dominio))
}

// Currency-blind: mixed `moneda` values are summed as-is
pub fn total_amount<'a>(deposits: impl IntoIterator<Item = &'a Deposito>) -> Decimal {
    deposits.into_iter().map(|deposito| deposito.monto).sum()
}

/// The shared currency of `deposits`, or `None` when empty or mixed.
pub fn common_currency<'a>(deposits: impl IntoIterator<Item = &'a Deposito>) -> Option<&'a str> {
    let mut iter = deposits.into_iter();
    let first = iter.next()?.moneda.as_str();
    iter.all(|deposito| deposito.moneda == first).then_some(first)
}
