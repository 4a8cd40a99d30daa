//! List outcomes
//!
//! Services report an empty collection as `Listing::Empty` rather than an
//! error. Each endpoint decides with a `ListPolicy` whether that is a 404.

use crate::error::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListPolicy {
    /// An empty result is reported as "<plural> not found"
    EmptyIsNotFound,
    /// An empty result is a valid, empty list
    EmptyIsOk,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Listing<T> {
    Items(Vec<T>),
    Empty,
}

impl<T> Listing<T> {
    pub fn from_vec(items: Vec<T>) -> Self {
        if items.is_empty() {
            Listing::Empty
        } else {
            Listing::Items(items)
        }
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        matches!(self, Listing::Empty)
    }

    /// Apply an endpoint's policy. `plural` names the collection in the 404
    /// message, e.g. "workouts" gives "workouts not found".
    pub fn require(self, policy: ListPolicy, plural: &str) -> Result<Vec<T>, AppError> {
        match (self, policy) {
            (Listing::Items(items), _) => Ok(items),
            (Listing::Empty, ListPolicy::EmptyIsOk) => Ok(Vec::new()),
            (Listing::Empty, ListPolicy::EmptyIsNotFound) => {
                Err(AppError::NotFound(format!("{} not found", plural)))
            }
        }
    }
}
