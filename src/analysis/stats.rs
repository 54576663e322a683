//! Per-type value statistics
//!
//! Runs its own walk over the items, independent of the tree walker, and
//! accumulates raw observations before building the summaries once at the
//! end. Floats are deliberately not tallied; only integers get numeric stats.

use crate::types::{ArrayStats, BooleanStats, IntegerStats, StringStats, TypeStats};
use serde_json::{Number, Value};
use std::collections::HashMap;

/// Frequency table that remembers the order values were first seen in
#[derive(Debug, Default)]
struct IntegerFrequency {
    counts: Vec<(i128, usize)>,
    slots: HashMap<i128, usize>,
    total: usize,
}

impl IntegerFrequency {
    fn add(&mut self, value: i128) {
        self.total += 1;
        match self.slots.get(&value) {
            Some(&slot) => self.counts[slot].1 += 1,
            None => {
                self.slots.insert(value, self.counts.len());
                self.counts.push((value, 1));
            }
        }
    }

    fn build(self) -> Option<IntegerStats> {
        // Most used: highest count, earliest value on ties.
        // Least used: lowest count, latest value on ties.
        let mut most: Option<(i128, usize)> = None;
        let mut least: Option<(i128, usize)> = None;
        for &(value, count) in &self.counts {
            if most.map_or(true, |(_, best)| count > best) {
                most = Some((value, count));
            }
            if least.map_or(true, |(_, worst)| count <= worst) {
                least = Some((value, count));
            }
        }

        let (most_value, most_count) = most?;
        let (least_value, least_count) = least?;
        Some(IntegerStats {
            most_used_value: to_number(most_value),
            most_used_count: most_count,
            least_used_value: to_number(least_value),
            least_used_count: least_count,
            total: self.total,
        })
    }
}

/// Accumulator for the statistics pass
#[derive(Debug, Default)]
pub struct TypeStatsBuilder {
    string_words: Vec<usize>,
    true_count: usize,
    false_count: usize,
    integers: IntegerFrequency,
    array_lengths: Vec<usize>,
}

impl TypeStatsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a value and everything nested inside it
    pub fn add_value(&mut self, value: &Value) {
        match value {
            Value::Bool(true) => self.true_count += 1,
            Value::Bool(false) => self.false_count += 1,
            Value::Number(n) => {
                if let Some(i) = integer_value(n) {
                    self.integers.add(i);
                }
            }
            Value::String(s) => self.string_words.push(s.split_whitespace().count()),
            Value::Array(arr) => {
                self.array_lengths.push(arr.len());
                for item in arr {
                    self.add_value(item);
                }
            }
            Value::Object(obj) => {
                for item in obj.values() {
                    self.add_value(item);
                }
            }
            Value::Null => {}
        }
    }

    pub fn build(self) -> TypeStats {
        let string = summarize(&self.string_words).map(|(min, max, avg)| StringStats {
            min_words: min,
            max_words: max,
            avg_words: avg,
            total: self.string_words.len(),
        });

        let boolean_total = self.true_count + self.false_count;
        let boolean = (boolean_total > 0).then(|| BooleanStats {
            true_count: self.true_count,
            false_count: self.false_count,
            total: boolean_total,
        });

        let array = summarize(&self.array_lengths).map(|(min, max, avg)| ArrayStats {
            min_length: min,
            max_length: max,
            avg_length: avg,
            total: self.array_lengths.len(),
        });

        TypeStats {
            string,
            boolean,
            integer: self.integers.build(),
            array,
        }
    }
}

/// Collect statistics over every value in `items`
pub fn collect_type_stats(items: &[Value]) -> TypeStats {
    let mut builder = TypeStatsBuilder::new();
    for item in items {
        builder.add_value(item);
    }
    builder.build()
}

/// min, max and one-decimal average; `None` for an empty sample
fn summarize(samples: &[usize]) -> Option<(usize, usize, f64)> {
    let min = *samples.iter().min()?;
    let max = *samples.iter().max()?;
    let sum: usize = samples.iter().sum();
    let avg = sum as f64 / samples.len() as f64;
    Some((min, max, round_one_decimal(avg)))
}

/// Round to one decimal on the exact binary value, ties to even
fn round_one_decimal(value: f64) -> f64 {
    format!("{:.1}", value).parse().unwrap_or(value)
}

fn integer_value(n: &Number) -> Option<i128> {
    n.as_i64()
        .map(i128::from)
        .or_else(|| n.as_u64().map(i128::from))
}

fn to_number(value: i128) -> Number {
    match i64::try_from(value) {
        Ok(v) => Number::from(v),
        // only values read through as_u64 land here
        Err(_) => Number::from(value as u64),
    }
}
