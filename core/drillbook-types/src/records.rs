//! Fixed-shape records.
//!
//! JSON field names are camelCase (`isActive`, `publishedYear`) so records
//! match the JSON documents callers already exchange. Every numeric field is
//! an `f64`: any JSON number is accepted, with no range or integrality check.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A named person with an age.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Person {
    pub name: String,
    pub age: f64,
}

impl Person {
    pub fn new(name: impl Into<String>, age: f64) -> Self {
        Self {
            name: name.into(),
            age,
        }
    }

    /// Formats the person as `Name: <name>, Age: <age>`.
    #[must_use]
    pub fn details(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Name: {}, Age: {}", self.name, self.age)
    }
}

/// A rated item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub title: String,
    pub rating: f64,
}

impl Item {
    pub fn new(title: impl Into<String>, rating: f64) -> Self {
        Self {
            title: title.into(),
            rating,
        }
    }
}

/// A user account. `id` uniqueness is left to the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: f64,
    pub name: String,
    pub email: String,
    pub is_active: bool,
}

impl User {
    pub fn new(id: f64, name: impl Into<String>, email: impl Into<String>, is_active: bool) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
            is_active,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    pub title: String,
    pub author: String,
    pub published_year: f64,
    pub is_available: bool,
}

/// A priced line item.
///
/// `discount` is a percentage. It is not range-checked; an absent discount
/// counts as 0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub name: String,
    pub price: f64,
    pub quantity: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount: Option<f64>,
}

impl Product {
    pub fn new(name: impl Into<String>, price: f64, quantity: f64) -> Self {
        Self {
            name: name.into(),
            price,
            quantity,
            discount: None,
        }
    }

    /// Sets the discount percentage.
    #[must_use]
    pub fn with_discount(mut self, discount: f64) -> Self {
        self.discount = Some(discount);
        self
    }
}
