//! Shared test helpers.
#![allow(dead_code)]

use memrank::config::Config;
use memrank::domain::entities::entry::Entry;
use memrank::infrastructure::embeddings::precomputed::PrecomputedProvider;
use memrank::MemRank;
use std::collections::HashMap;
use std::sync::Arc;

pub const VPN: &str = "Employees must use the VPN when accessing internal tools from outside the office.";
pub const EXPENSES: &str = "Expense reports over 5000 USD require manager approval before submission.";
pub const LEAVE: &str = "Leave requests should be submitted at least two weeks in advance for approval.";
pub const PASSWORDS: &str = "Default password policy: 12 characters minimum, mix of letters, numbers, and symbols.";

pub const EXPENSE_QUESTION: &str = "What is the rule for expense reports over 5000?";
pub const REMOTE_QUESTION: &str = "How do I reach the wiki from home?";

/// Hand-made 4-d vectors: one axis per policy topic.
pub fn policy_provider() -> PrecomputedProvider {
    let mut vectors = HashMap::new();
    vectors.insert(VPN.to_string(), vec![0.9, 0.1, 0.0, 0.2]);
    vectors.insert(EXPENSES.to_string(), vec![0.0, 0.95, 0.1, 0.0]);
    vectors.insert(LEAVE.to_string(), vec![0.0, 0.3, 0.9, 0.0]);
    vectors.insert(PASSWORDS.to_string(), vec![0.3, 0.0, 0.0, 0.9]);
    vectors.insert(EXPENSE_QUESTION.to_string(), vec![0.0, 1.0, 0.2, 0.0]);
    vectors.insert(REMOTE_QUESTION.to_string(), vec![1.0, 0.0, 0.0, 0.3]);
    PrecomputedProvider::new(vectors)
}

pub fn policies() -> Vec<String> {
    vec![VPN.into(), EXPENSES.into(), LEAVE.into(), PASSWORDS.into()]
}

pub fn setup() -> MemRank {
    MemRank::with_config(Arc::new(policy_provider()), Config::default())
}

pub fn entries(items: Vec<(Vec<f64>, &'static str)>) -> Vec<Entry<&'static str>> {
    items.into_iter().map(|(v, p)| Entry::new(v, p)).collect()
}
