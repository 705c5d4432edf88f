use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Direction of a transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    Expense,
}

/// A logged transaction as returned by `GET /transactions`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Transaction {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub amount: f64,
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

/// Body of `POST /transactions`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewTransaction {
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub amount: f64,
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub date: String,
}

/// Budget reset period
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BudgetPeriod {
    Weekly,
    Monthly,
}

impl BudgetPeriod {
    pub fn label(&self) -> &'static str {
        match self {
            BudgetPeriod::Weekly => "Weekly",
            BudgetPeriod::Monthly => "Monthly",
        }
    }
}

/// A spending budget. `spent_amount` is computed by the server.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Budget {
    pub id: String,
    pub category: String,
    #[serde(rename = "limit")]
    pub limit_amount: f64,
    #[serde(rename = "spent", default)]
    pub spent_amount: f64,
    pub period: BudgetPeriod,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

/// Body of `POST /budgets` and `PUT /budgets/{id}`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BudgetInput {
    pub category: String,
    #[serde(rename = "limit")]
    pub limit_amount: f64,
    pub period: BudgetPeriod,
}

/// A savings goal
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Goal {
    pub id: String,
    pub name: String,
    pub target_amount: f64,
    #[serde(default)]
    pub current_amount: f64,
    pub deadline: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

/// Body of `POST /goals`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewGoal {
    pub name: String,
    pub target_amount: f64,
    pub deadline: String,
}

/// Server-computed dashboard aggregate (`GET /stats`).
///
/// Replaced wholesale on every fetch.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Stats {
    pub total_income: f64,
    pub total_expenses: f64,
    pub balance: f64,
    #[serde(default)]
    pub category_expenses: CategoryAmounts,
    pub recent_income: f64,
    pub recent_expenses: f64,
    pub transaction_count: u64,
}

/// Body of `POST /advice`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct AdviceRequest {
    pub context: String,
}

/// Response of `POST /advice`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AdviceResponse {
    pub advice: String,
}

/// Category → amount mapping that keeps the order the server sent it in.
///
/// Chart colors are assigned by position, so the order must survive decoding.
/// A key repeated on the wire keeps its first position and its last value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryAmounts(Vec<(String, f64)>);

impl CategoryAmounts {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn insert(&mut self, category: impl Into<String>, amount: f64) {
        let category = category.into();
        match self.0.iter_mut().find(|(c, _)| *c == category) {
            Some(slot) => slot.1 = amount,
            None => self.0.push((category, amount)),
        }
    }

    pub fn get(&self, category: &str) -> Option<f64> {
        self.0.iter().find(|(c, _)| c == category).map(|(_, a)| *a)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.0.iter().map(|(c, a)| (c.as_str(), *a))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, f64)> for CategoryAmounts {
    fn from_iter<I: IntoIterator<Item = (S, f64)>>(iter: I) -> Self {
        let mut amounts = CategoryAmounts::new();
        for (category, amount) in iter {
            amounts.insert(category, amount);
        }
        amounts
    }
}

impl Serialize for CategoryAmounts {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (category, amount) in &self.0 {
            map.serialize_entry(category, amount)?;
        }
        map.end()
    }
}

struct CategoryAmountsVisitor;

impl<'de> Visitor<'de> for CategoryAmountsVisitor {
    type Value = CategoryAmounts;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a map of category names to amounts")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut amounts = CategoryAmounts(Vec::with_capacity(access.size_hint().unwrap_or(0)));
        while let Some((category, amount)) = access.next_entry::<String, f64>()? {
            amounts.insert(category, amount);
        }
        Ok(amounts)
    }

    fn visit_none<E: serde::de::Error>(self) -> Result<Self::Value, E> {
        Ok(CategoryAmounts::new())
    }

    fn visit_unit<E: serde::de::Error>(self) -> Result<Self::Value, E> {
        Ok(CategoryAmounts::new())
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Self::Value, D::Error> {
        deserializer.deserialize_map(CategoryAmountsVisitor)
    }
}

impl<'de> Deserialize<'de> for CategoryAmounts {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_option(CategoryAmountsVisitor)
    }
}
