use std::time::Duration;

const SPEED_ERROR_RATIO: f64 = 0.2;
const SCORE_SCALAR: f64 = 100.0;
const SCORE_EXPONENT: f64 = 2.3;
const SCORE_CHAR_FACTOR: f64 = 10.0;

const FAST_WEIGHT: f64 = 0.15;
const SLOW_WEIGHT: f64 = 0.35;
const NORMAL_WEIGHT: f64 = 0.5;

fn char_count(text: &str) -> f64 {
    text.chars().count() as f64
}

/// Score between 0 and 1, exactly 0.5 at two characters per second.
pub fn speed_score(text: &str, elapsed: Duration) -> f64 {
    if elapsed.is_zero() {
        return 1.0;
    }
    let secs_per_char = elapsed.as_secs_f64() / char_count(text);
    1.0 / (1.0 + 2.0 * secs_per_char)
}

/// Score between 0 and 1, exactly 0.5 at one error.
pub fn error_score(_text: &str, errors: u32) -> f64 {
    1.0 / (1.0 + errors as f64)
}

pub fn round_score(text: &str, elapsed: Duration, errors: u32) -> f64 {
    SPEED_ERROR_RATIO * speed_score(text, elapsed)
        + (1.0 - SPEED_ERROR_RATIO) * error_score(text, errors)
}

/// Squared blend of the three mode scores, scaled by the phrase length.
pub fn final_score(text: &str, fast: f64, slow: f64, normal: f64) -> f64 {
    let blend = FAST_WEIGHT * fast + SLOW_WEIGHT * slow + NORMAL_WEIGHT * normal;
    max_score(text) * blend.powi(2)
}

pub fn max_score(text: &str) -> f64 {
    SCORE_CHAR_FACTOR * char_count(text)
}

pub fn required_score(level: u32) -> f64 {
    SCORE_SCALAR * (level as f64).powf(SCORE_EXPONENT)
}

pub fn level(score: f64) -> u32 {
    (score.max(0.0) / SCORE_SCALAR)
        .powf(1.0 / SCORE_EXPONENT)
        .floor() as u32
}

/// Fraction of the way from the current level threshold to the next one.
pub fn progress(score: f64) -> f64 {
    let current = level(score);
    let floor = required_score(current);
    let ceiling = required_score(current + 1);
    ((score - floor) / (ceiling - floor)).clamp(0.0, 1.0 - f64::EPSILON)
}
