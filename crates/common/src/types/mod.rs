use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug)]
pub struct Health {
    pub status: &'static str,
}

/// Body of `GET /`.
#[derive(Serialize, Debug)]
pub struct Welcome {
    pub message: &'static str,
}

impl Default for Welcome {
    fn default() -> Self {
        Self { message: "Welcome to the BestCake API!" }
    }
}

/// Confirmation returned by update and delete.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Detail {
    pub detail: String,
}

impl Detail {
    pub fn new(detail: impl Into<String>) -> Self {
        Self { detail: detail.into() }
    }
}

/// Confirmation returned by create, carrying the store-assigned id.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Created {
    pub detail: String,
    pub id: i32,
}

impl Created {
    pub fn new(detail: impl Into<String>, id: i32) -> Self {
        Self { detail: detail.into(), id }
    }
}

/// The shop's contact card. Built once at startup and shared read-only.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Contact {
    pub address: String,
    pub phone: String,
    pub email: String,
}
