//! Processor catalog for the NexusPay portfolio.
//!
//! 52 integrated processors, of which 7 carry simulated volume (about
//! $2.06M in total). Type and region are not stored upstream; they are
//! inferred from the processor slug through fixed classification tables.

use chrono::NaiveDate;

use crate::error::AnalyticsResult;
use crate::models::processor::{PerformanceRecord, Processor, ProcessorRegion, ProcessorType};

/// Raw processor rows: (id, slug, integration date).
const CATALOG: [(u64, &str, &str); 52] = [
    (11, "fac", "2022-03-07"),
    (12, "fri", "2022-03-07"),
    (13, "epay", "2022-03-07"),
    (14, "openpay", "2022-03-16"),
    (15, "ridivi", "2022-03-16"),
    (16, "serfinsa", "2022-03-17"),
    (17, "globalPay-PSE", "2022-03-24"),
    (18, "globalPay", "2022-03-31"),
    (19, "fac-2", "2022-05-18"),
    (20, "visa-cybersource", "2022-05-20"),
    (21, "paypal", "2022-05-25"),
    (22, "mercadoPago", "2022-08-12"),
    (23, "adyen", "2022-09-12"),
    (24, "paymentez", "2022-09-28"),
    (25, "ge", "2022-10-27"),
    (26, "pronet", "2023-03-23"),
    (27, "osmo", "2023-06-07"),
    (28, "visa-epay", "2023-07-05"),
    (29, "bam", "2023-08-22"),
    (159, "zigi", "2023-10-13"),
    (160, "visa", "2023-11-07"),
    (161, "t1-pagos", "2024-02-13"),
    (162, "t1pagos", "2024-02-13"),
    (163, "ridivi-v2", "2024-02-13"),
    (164, "ebanx", "2024-02-14"),
    (165, "{{processorSlug}}", "2024-03-06"),
    (166, "mo", "2024-03-27"),
    (167, "tc/td", "2024-04-09"),
    (168, "transfer", "2024-04-10"),
    (170, "azul", "2024-07-17"),
    (171, "globalPay-ApplePay", "2024-09-06"),
    (172, "akisi", "2024-10-17"),
    (173, "cash", "2024-10-17"),
    (174, "oky", "2025-01-20"),
    (175, "migoCredit", "2025-02-02"),
    (176, "davivienda", "2025-02-21"),
    (177, "ebanxTest", "2025-03-19"),
    (178, "akisiQR", "2025-04-07"),
    (179, "bancoIndustrial", "2025-05-29"),
    (180, "applePayFac", "2025-06-05"),
    (181, "nequi", "2025-07-04"),
    (182, "bbva", "2025-07-18"),
    (183, "push-payment-neonet", "2025-07-21"),
    (184, "push-payment-gateway", "2025-07-21"),
    (185, "bbvaQR", "2025-07-30"),
    (186, "applePayT1", "2025-08-26"),
    (187, "applePayCyber", "2025-09-05"),
    (188, "bamButton", "2025-11-06"),
    (189, "bamPaymentButton", "2025-11-23"),
    (190, "googlepay", "2025-12-10"),
    (191, "googlePayCyber", "2025-12-22"),
    (192, "quickPayQR", "2026-01-08"),
];

/// Classify a processor slug into its family. Unknown slugs are `Other`.
pub fn classify_type(name: &str) -> ProcessorType {
    match name {
        "visa" | "visa-cybersource" | "visa-epay" | "adyen" | "serfinsa" | "globalPay"
        | "globalPay-PSE" | "globalPay-ApplePay" | "paymentez" | "azul" | "tc/td" => {
            ProcessorType::Card
        }
        "paypal" | "mercadoPago" | "openpay" | "ebanx" | "ebanxTest" | "nequi" | "oky" => {
            ProcessorType::Wallet
        }
        "googlepay" | "googlePayCyber" | "applePayFac" | "applePayT1" | "applePayCyber" => {
            ProcessorType::Digital
        }
        "cash" | "transfer" => ProcessorType::Cash,
        "bancoIndustrial" | "davivienda" | "bbva" | "bbvaQR" | "ridivi" | "ridivi-v2" | "fac"
        | "fac-2" | "fri" | "bam" | "bamButton" | "bamPaymentButton" | "quickPayQR" => {
            ProcessorType::Local
        }
        _ => ProcessorType::Other,
    }
}

/// Classify a processor slug into its region. Unknown slugs are `Local`.
pub fn classify_region(name: &str) -> ProcessorRegion {
    match name {
        "adyen" | "paypal" | "visa-cybersource" | "visa" | "visa-epay" | "googlepay"
        | "googlePayCyber" | "applePayFac" | "applePayT1" | "applePayCyber" | "globalPay"
        | "globalPay-PSE" | "globalPay-ApplePay" => ProcessorRegion::International,
        "ebanx" | "ebanxTest" | "mercadoPago" | "openpay" | "paymentez" | "azul" | "t1-pagos"
        | "t1pagos" => ProcessorRegion::Latam,
        _ => ProcessorRegion::Local,
    }
}

/// Returns every integrated processor, classified, in catalog order.
pub fn get_all_processors() -> AnalyticsResult<Vec<Processor>> {
    CATALOG
        .iter()
        .map(|&(id, name, created_at)| {
            Ok(Processor {
                id,
                name: name.to_string(),
                processor_type: classify_type(name),
                region: classify_region(name),
                created_at: NaiveDate::parse_from_str(created_at, "%Y-%m-%d")?,
            })
        })
        .collect()
}

fn record(
    total_volume: f64,
    total_transactions: u64,
    success_rate: f64,
    avg_cost: f64,
    merchant_count: u32,
    countries: &[&str],
) -> PerformanceRecord {
    PerformanceRecord {
        total_volume,
        total_transactions,
        success_rate,
        avg_cost,
        merchant_count,
        countries: countries.iter().map(|c| c.to_string()).collect(),
    }
}

/// Returns the simulated performance table, keyed by processor slug.
///
/// Only processors listed here are `Active`; every other catalog entry
/// is `Unused`.
pub fn get_performance_table() -> Vec<(String, PerformanceRecord)> {
    vec![
        // Card acquiring backbone: ~65% of volume
        (
            "visa-cybersource".to_string(),
            record(1_339_000.0, 8_500, 82.0, 2.9, 45, &["GT", "MX", "SV", "HN", "CR"]),
        ),
        ("paypal".to_string(), record(247_000.0, 890, 91.0, 3.4, 18, &["GT", "MX", "CR"])),
        ("mercadoPago".to_string(), record(165_000.0, 650, 88.0, 3.2, 12, &["MX"])),
        ("bancoIndustrial".to_string(), record(124_000.0, 480, 79.0, 2.8, 15, &["GT"])),
        ("googlepay".to_string(), record(82_000.0, 320, 94.0, 3.0, 8, &["GT", "MX"])),
        ("applePayFac".to_string(), record(62_000.0, 240, 95.0, 3.0, 6, &["GT", "MX"])),
        // Cheapest rail
        ("cash".to_string(), record(41_000.0, 180, 99.0, 1.5, 10, &["GT", "SV"])),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_has_fifty_two_processors() {
        assert_eq!(get_all_processors().unwrap().len(), 52);
    }

    #[test]
    fn test_catalog_ids_are_unique() {
        let mut ids: Vec<u64> = CATALOG.iter().map(|&(id, _, _)| id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), CATALOG.len(), "Processor IDs must be unique");
    }

    #[test]
    fn test_classification_defaults() {
        assert_eq!(classify_type("visa-cybersource"), ProcessorType::Card);
        assert_eq!(classify_type("googlepay"), ProcessorType::Digital);
        assert_eq!(classify_type("t1pagos"), ProcessorType::Other);
        assert_eq!(classify_region("t1pagos"), ProcessorRegion::Latam);
        assert_eq!(classify_region("bancoIndustrial"), ProcessorRegion::Local);
        assert_eq!(classify_region("{{processorSlug}}"), ProcessorRegion::Local);
    }

    #[test]
    fn test_every_performance_entry_matches_a_catalog_processor() {
        let processors = get_all_processors().unwrap();
        for (name, _) in get_performance_table() {
            assert!(
                processors.iter().any(|p| p.name == name),
                "Performance entry {name} has no catalog processor"
            );
        }
    }

    #[test]
    fn test_performance_rates_are_valid() {
        for (name, perf) in get_performance_table() {
            assert!(
                perf.success_rate > 0.0 && perf.success_rate <= 100.0,
                "Processor {name} has invalid success rate: {}",
                perf.success_rate
            );
            assert!(perf.avg_cost > 0.0, "Processor {name} has no cost");
            assert!(!perf.countries.is_empty(), "Processor {name} has no countries");
        }
    }
}
