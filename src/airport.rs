//! Airport decoration for graph nodes
//!
//! Departure (SID) and arrival (STAR) procedure names attached to a node for
//! display. Reachability and route search never look at this data.

use serde::{Deserialize, Serialize};

/// Procedures published for one airport
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AirportInfo {
    /// ICAO code (e.g. LEBL)
    pub icao: String,
    #[serde(default)]
    sids: Vec<String>,
    #[serde(default)]
    stars: Vec<String>,
}

impl AirportInfo {
    pub fn new(icao: impl Into<String>) -> Self {
        AirportInfo {
            icao: icao.into(),
            sids: Vec::new(),
            stars: Vec::new(),
        }
    }

    /// Add a departure procedure; returns false if it was already listed
    pub fn add_sid(&mut self, sid: impl Into<String>) -> bool {
        push_unique(&mut self.sids, sid.into())
    }

    /// Add an arrival procedure; returns false if it was already listed
    pub fn add_star(&mut self, star: impl Into<String>) -> bool {
        push_unique(&mut self.stars, star.into())
    }

    /// Departure procedures, sorted by name
    pub fn sids(&self) -> Vec<&str> {
        sorted(&self.sids)
    }

    /// Arrival procedures, sorted by name
    pub fn stars(&self) -> Vec<&str> {
        sorted(&self.stars)
    }

    pub fn sid_count(&self) -> usize {
        self.sids.len()
    }

    pub fn star_count(&self) -> usize {
        self.stars.len()
    }
}

fn push_unique(list: &mut Vec<String>, value: String) -> bool {
    if list.contains(&value) {
        return false;
    }
    list.push(value);
    true
}

fn sorted(list: &[String]) -> Vec<&str> {
    let mut names: Vec<&str> = list.iter().map(String::as_str).collect();
    names.sort_unstable();
    names
}
