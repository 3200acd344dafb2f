use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Processor family, inferred from the processor name.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum ProcessorType {
    Card,
    Wallet,
    Digital,
    Cash,
    Local,
    Other,
}

impl ProcessorType {
    /// Every type, in display order.
    pub const ALL: [ProcessorType; 6] = [
        ProcessorType::Card,
        ProcessorType::Wallet,
        ProcessorType::Digital,
        ProcessorType::Cash,
        ProcessorType::Local,
        ProcessorType::Other,
    ];
}

impl std::fmt::Display for ProcessorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProcessorType::Card => write!(f, "card"),
            ProcessorType::Wallet => write!(f, "wallet"),
            ProcessorType::Digital => write!(f, "digital"),
            ProcessorType::Cash => write!(f, "cash"),
            ProcessorType::Local => write!(f, "local"),
            ProcessorType::Other => write!(f, "other"),
        }
    }
}

/// Geographic reach of a processor, inferred from the processor name.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ProcessorRegion {
    International,
    Latam,
    Local,
}

impl std::fmt::Display for ProcessorRegion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProcessorRegion::International => write!(f, "international"),
            ProcessorRegion::Latam => write!(f, "latam"),
            ProcessorRegion::Local => write!(f, "local"),
        }
    }
}

/// Whether a processor carries recorded volume.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ProcessorStatus {
    Active,
    Unused,
}

/// An integrated payment processor.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Processor {
    /// Unique processor identifier.
    pub id: u64,
    /// Processor slug (e.g., "visa-cybersource"). Used as the join key
    /// into the performance table.
    pub name: String,
    #[serde(rename = "type")]
    pub processor_type: ProcessorType,
    pub region: ProcessorRegion,
    /// Integration date.
    pub created_at: NaiveDate,
}

/// Simulated performance metrics for a processor that carries volume.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PerformanceRecord {
    /// Total processed volume in USD over the period.
    pub total_volume: f64,
    pub total_transactions: u64,
    /// Approval rate as a percentage (0.0–100.0).
    pub success_rate: f64,
    /// Average commission cost as a percentage (e.g., 2.9 for 2.9%).
    pub avg_cost: f64,
    pub merchant_count: u32,
    /// Countries where the processor is active.
    pub countries: Vec<String>,
}

/// A processor joined with its performance metrics.
///
/// Processors without a performance record are `Unused`, with every
/// numeric field zeroed and no countries.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProcessorPerformance {
    pub id: u64,
    pub name: String,
    #[serde(rename = "type")]
    pub processor_type: ProcessorType,
    pub region: ProcessorRegion,
    pub created_at: NaiveDate,
    pub total_volume: f64,
    pub total_transactions: u64,
    pub success_rate: f64,
    pub avg_cost: f64,
    pub merchant_count: u32,
    pub status: ProcessorStatus,
    pub countries: Vec<String>,
}

impl ProcessorPerformance {
    /// Join a processor with its (optional) performance record.
    pub fn from_parts(processor: &Processor, record: Option<&PerformanceRecord>) -> Self {
        match record {
            Some(perf) => ProcessorPerformance {
                id: processor.id,
                name: processor.name.clone(),
                processor_type: processor.processor_type,
                region: processor.region,
                created_at: processor.created_at,
                total_volume: perf.total_volume,
                total_transactions: perf.total_transactions,
                success_rate: perf.success_rate,
                avg_cost: perf.avg_cost,
                merchant_count: perf.merchant_count,
                status: ProcessorStatus::Active,
                countries: perf.countries.clone(),
            },
            None => ProcessorPerformance {
                id: processor.id,
                name: processor.name.clone(),
                processor_type: processor.processor_type,
                region: processor.region,
                created_at: processor.created_at,
                total_volume: 0.0,
                total_transactions: 0,
                success_rate: 0.0,
                avg_cost: 0.0,
                merchant_count: 0,
                status: ProcessorStatus::Unused,
                countries: Vec::new(),
            },
        }
    }

    pub fn is_active(&self) -> bool {
        self.status == ProcessorStatus::Active
    }
}

/// Annual cost picture across active processors.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CostAnalysis {
    /// Sum of `volume × avg_cost%` across active processors.
    pub total_annual_cost: f64,
    /// Sum of savings across the hypothetical reallocations.
    pub potential_savings: f64,
    pub recommendations: Vec<String>,
}
