//! Demonstration dataset covering the value shapes the builder must handle.

use super::{Dataset, RawValue, Temporal};
use crate::error::Result;
use chrono::{Duration, NaiveDate};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use serde_json::json;

const GRADES: &[&str] = &["A", "B", "C", "D", "F"];
const PRODUCTS: &[&str] = &["Premium", "Standard", "Budget"];
const PRIORITIES: &[&str] = &["Low priority", "Medium priority", "High priority", "Emergency"];

/// Approximately standard normal: the sum of twelve uniforms, recentred.
fn gauss(rng: &mut StdRng) -> f64 {
    (0..12).map(|_| rng.gen_range(0.0f64..1.0)).sum::<f64>() - 6.0
}

fn pick<'a>(rng: &mut StdRng, items: &[&'a str]) -> &'a str {
    items.choose(rng).copied().unwrap_or_default()
}

impl Dataset {
    /// Build the demo table: mixed types, HTML text, nested values and gaps.
    pub fn sample(size: usize, seed: u64) -> Result<Self> {
        let mut rng = StdRng::seed_from_u64(seed);
        let base = NaiveDate::from_ymd_opt(2025, 1, 1)
            .and_then(|d| d.and_hms_opt(9, 30, 0))
            .unwrap_or_default();

        let timestamp: Vec<RawValue> = (0..size)
            .map(|i| RawValue::Temporal(Temporal::DateTime(base - Duration::days(i as i64))))
            .collect();
        let grade: Vec<RawValue> = (0..size)
            .map(|_| RawValue::from(pick(&mut rng, GRADES)))
            .collect();
        let revenue: Vec<RawValue> = (0..size)
            .map(|_| RawValue::from(rng.gen_range(-2000i64..=70000)))
            .collect();
        let product_type: Vec<RawValue> = (0..size)
            .map(|_| RawValue::from(pick(&mut rng, PRODUCTS)))
            .collect();
        let is_active: Vec<RawValue> = (0..size)
            .map(|_| RawValue::from(rng.gen_bool(0.5)))
            .collect();
        let priority: Vec<RawValue> = (0..size)
            .map(|_| RawValue::from(pick(&mut rng, PRIORITIES)))
            .collect();
        let value: Vec<RawValue> = (0..size).map(|_| RawValue::from(gauss(&mut rng))).collect();
        let measurement: Vec<RawValue> = (0..size)
            .map(|_| {
                let choices = [-0.333, 1.0, -9.0, 4.0, 2.0, f64::NAN, 1111.111];
                RawValue::from(choices.choose(&mut rng).copied().unwrap_or(f64::NAN))
            })
            .collect();
        let description: Vec<RawValue> = (0..size)
            .map(|_| match rng.gen_range(0..6) {
                0 => RawValue::from("Lorem ipsum dolor sit amet"),
                1 => RawValue::from("<b>HTML content</b> is allowed"),
                2 => RawValue::Other(json!({"A": [1, 2, 3, [4, 5]]})),
                3 => RawValue::from(100.12345),
                4 => RawValue::Null,
                _ => RawValue::from(false),
            })
            .collect();

        Dataset::from_columns([
            ("timestamp", timestamp),
            ("grade", grade),
            ("revenue", revenue),
            ("product_type", product_type),
            ("is_active", is_active),
            ("priority", priority),
            ("value", value),
            ("measurement", measurement),
            ("description", description),
        ])
    }
}
