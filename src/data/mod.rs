//! Read-only portfolio store.
//!
//! Holds the merchant table, per-merchant transaction aggregates, and the
//! processor catalog joined with its performance table. The store is built
//! once, either from the bundled NexusPay snapshot or from caller-supplied
//! tables (synthetic fixtures in tests), and never mutated afterwards.
//!
//! # Bundled Data
//! - 260 merchants (`merchants.json`, from the client export)
//! - 101 transaction aggregates (`transactions.json`), keyed by merchant id
//! - 52 processors, 7 of them with simulated volume (see [`processors`])

pub mod processors;

use std::collections::{BTreeMap, HashMap};

use crate::error::AnalyticsResult;
use crate::models::merchant::{Merchant, TransactionStats};
use crate::models::processor::{
    PerformanceRecord, Processor, ProcessorPerformance, ProcessorType,
};

const MERCHANTS_JSON: &str = include_str!("merchants.json");
const TRANSACTIONS_JSON: &str = include_str!("transactions.json");

/// Immutable in-memory store of merchants, aggregates, and processors.
#[derive(Debug, Clone)]
pub struct DataStore {
    merchants: Vec<Merchant>,
    transactions: BTreeMap<u64, TransactionStats>,
    processors: Vec<ProcessorPerformance>,
}

impl DataStore {
    /// Build a store from raw tables.
    ///
    /// Performance records are joined to processors by name. A processor
    /// with no matching record is `Unused`. When the performance table
    /// lists a name twice, the first record wins.
    pub fn new(
        merchants: Vec<Merchant>,
        transactions: BTreeMap<u64, TransactionStats>,
        processors: Vec<Processor>,
        performance: Vec<(String, PerformanceRecord)>,
    ) -> Self {
        let mut by_name: HashMap<String, PerformanceRecord> = HashMap::new();
        for (name, record) in performance {
            if by_name.contains_key(&name) {
                log::warn!("duplicate performance record for processor {name}, keeping the first");
                continue;
            }
            by_name.insert(name, record);
        }

        let mut joined_names: HashMap<&str, u64> = HashMap::new();
        for p in &processors {
            if !by_name.contains_key(&p.name) {
                continue;
            }
            if let Some(other) = joined_names.insert(&p.name, p.id) {
                log::warn!(
                    "processors {other} and {} share the name {}; both receive its performance record",
                    p.id,
                    p.name
                );
            }
        }

        let processors: Vec<ProcessorPerformance> = processors
            .iter()
            .map(|p| ProcessorPerformance::from_parts(p, by_name.get(&p.name)))
            .collect();

        log::debug!(
            "store built: {} merchants, {} aggregates, {} processors ({} active)",
            merchants.len(),
            transactions.len(),
            processors.len(),
            processors.iter().filter(|p| p.is_active()).count()
        );

        DataStore {
            merchants,
            transactions,
            processors,
        }
    }

    /// Load the bundled NexusPay snapshot.
    pub fn bundled() -> AnalyticsResult<Self> {
        let merchants: Vec<Merchant> = serde_json::from_str(MERCHANTS_JSON)?;
        let transactions: BTreeMap<u64, TransactionStats> =
            serde_json::from_str(TRANSACTIONS_JSON)?;
        let processors = processors::get_all_processors()?;
        Ok(Self::new(
            merchants,
            transactions,
            processors,
            processors::get_performance_table(),
        ))
    }

    /// All merchants, in source order.
    pub fn merchants(&self) -> &[Merchant] {
        &self.merchants
    }

    pub fn merchant(&self, id: u64) -> Option<&Merchant> {
        self.merchants.iter().find(|m| m.id == id)
    }

    /// Transaction aggregate for a merchant. `None` means no data in the
    /// period, which is distinct from an aggregate with zero transactions.
    pub fn transaction_stats(&self, merchant_id: u64) -> Option<&TransactionStats> {
        self.transactions.get(&merchant_id)
    }

    /// All transaction aggregates, ordered by merchant id.
    pub fn transactions(&self) -> &BTreeMap<u64, TransactionStats> {
        &self.transactions
    }

    /// Every processor joined with its performance, in catalog order.
    pub fn processor_performance(&self) -> &[ProcessorPerformance] {
        &self.processors
    }

    pub fn processor(&self, id: u64) -> Option<&ProcessorPerformance> {
        self.processors.iter().find(|p| p.id == id)
    }

    /// Processors with recorded volume, in catalog order.
    pub fn active_processors(&self) -> Vec<&ProcessorPerformance> {
        self.processors.iter().filter(|p| p.is_active()).collect()
    }

    /// Integrated processors without recorded volume, in catalog order.
    pub fn unused_processors(&self) -> Vec<&ProcessorPerformance> {
        self.processors.iter().filter(|p| !p.is_active()).collect()
    }

    /// Processors grouped by type, each group sorted by volume (descending).
    ///
    /// Every type is present as a key, even when its group is empty.
    pub fn processors_by_type(&self) -> BTreeMap<ProcessorType, Vec<ProcessorPerformance>> {
        let mut grouped: BTreeMap<ProcessorType, Vec<ProcessorPerformance>> =
            ProcessorType::ALL.iter().map(|t| (*t, Vec::new())).collect();
        for p in &self.processors {
            grouped.entry(p.processor_type).or_default().push(p.clone());
        }
        for group in grouped.values_mut() {
            group.sort_by(|a, b| b.total_volume.total_cmp(&a.total_volume));
        }
        grouped
    }
}
