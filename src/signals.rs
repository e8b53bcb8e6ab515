//! The three per-timestamp signal functions. Each is pure given its inputs:
//! the same timestamp and RNG state always produce the same value.

use std::f64::consts::TAU;
use std::ops::Range;

use chrono::{Datelike, NaiveDateTime, Timelike, Weekday};
use rand::Rng;
use rand_distr::{Distribution, Normal};

const BASE_TEMPERATURE_C: f64 = 22.5;
const TEMPERATURE_SWING_C: f64 = 2.;
const TEMPERATURE_NOISE_STD: f64 = 0.2;
const TEMPERATURE_ANCHOR_HOUR: i64 = 15;

const ILLUMINANCE_SWING_LUX: f64 = 400.;
const ILLUMINANCE_NOISE_STD: f64 = 25.;
const ILLUMINANCE_ANCHOR_HOUR: i64 = 13;
const DAYLIGHT_HOURS: Range<u32> = 7..19;

const BUSINESS_HOURS: Range<u32> = 8..18;
const OCCUPANCY_P_WEEKEND: f64 = 0.05;
const OCCUPANCY_P_BUSINESS: f64 = 0.85;
const OCCUPANCY_P_OFF_HOURS: f64 = 0.10;

/// Radian position of `hour` in the 24h cycle, with `anchor_hour` mapped to
/// phase zero.
fn daily_phase(hour: u32, anchor_hour: i64) -> f64 {
    (hour as i64 - anchor_hour).rem_euclid(24) as f64 * (TAU / 24.)
}

/// Office temperature in °C: 22.5 base plus a ±2 cosine swing anchored at
/// 15:00, plus N(0, 0.2) noise. Not clamped.
pub fn temperature(ts: NaiveDateTime, rng: &mut impl Rng) -> f64 {
    let swing = -daily_phase(ts.hour(), TEMPERATURE_ANCHOR_HOUR).cos() * TEMPERATURE_SWING_C;
    let noise = Normal::new(0., TEMPERATURE_NOISE_STD).unwrap().sample(rng);
    BASE_TEMPERATURE_C + swing + noise
}

/// Illuminance in lux: a 0..800 cosine curve anchored at 13:00 with N(0, 25)
/// noise, clamped at 0. Outside daylight hours the value is exactly 0 and no
/// RNG draw is made.
pub fn illuminance(ts: NaiveDateTime, rng: &mut impl Rng) -> f64 {
    if !DAYLIGHT_HOURS.contains(&ts.hour()) {
        return 0.;
    }
    let lux = (-daily_phase(ts.hour(), ILLUMINANCE_ANCHOR_HOUR).cos() + 1.) * ILLUMINANCE_SWING_LUX;
    let noise = Normal::new(0., ILLUMINANCE_NOISE_STD).unwrap().sample(rng);
    (lux + noise).max(0.)
}

/// Occupancy as 0.0 or 1.0: an independent Bernoulli draw per timestamp
/// against [`occupancy_probability`]. No memory of prior state.
pub fn occupancy(ts: NaiveDateTime, rng: &mut impl Rng) -> f64 {
    if rng.random::<f64>() < occupancy_probability(ts) {
        1.
    } else {
        0.
    }
}

/// Ordered occupancy policy: weekend beats business hours beats the off-hours
/// default.
pub fn occupancy_probability(ts: NaiveDateTime) -> f64 {
    if matches!(ts.weekday(), Weekday::Sat | Weekday::Sun) {
        OCCUPANCY_P_WEEKEND
    } else if BUSINESS_HOURS.contains(&ts.hour()) {
        OCCUPANCY_P_BUSINESS
    } else {
        OCCUPANCY_P_OFF_HOURS
    }
}
