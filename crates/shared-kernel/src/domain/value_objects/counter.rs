// crates/shared_kernel/src/domain/value_objects/counter.rs

use crate::domain::value_objects::ValueObject;
use crate::errors::Result;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub struct Counter(u64);

impl Counter {
    /// Pour la reconstruction depuis la DB
    pub fn from_raw(val: u64) -> Self {
        Self(val)
    }

    /// Reconstruction depuis un compteur signé (Redis HINCRBY, colonne BIGINT).
    /// Un unlike traité avant son like peut laisser transitoirement une valeur négative :
    /// on sature à 0 plutôt que de propager un compteur invalide.
    pub fn from_signed(val: i64) -> Self {
        Self(u64::try_from(val).unwrap_or(0))
    }

    /// Incrément sécurisé contre l'overflow (Saturating)
    pub fn increment(&mut self) {
        self.0 = self.0.saturating_add(1);
    }

    /// Décrément sécurisé (ne descendra jamais sous 0)
    pub fn decrement(&mut self) {
        self.0 = self.0.saturating_sub(1);
    }

    pub fn value(&self) -> u64 {
        self.0
    }

    /// Valeur pour une colonne BIGINT
    pub fn as_i64(&self) -> i64 {
        i64::try_from(self.0).unwrap_or(i64::MAX)
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl ValueObject for Counter {
    fn validate(&self) -> Result<()> {
        Ok(())
    }
}

impl From<Counter> for u64 {
    fn from(counter: Counter) -> Self {
        counter.0
    }
}
