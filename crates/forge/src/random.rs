//! Random sources for evolve, grid randomization and value randomization.
//!
//! Everything random in the editor draws from a [`RandomSource`] passed in
//! explicitly, so tests can seed or script the sequence.

use std::time::{SystemTime, UNIX_EPOCH};

use tilecss::catalog::{AttributeDefinition, Control};
use tilecss::types::{GradientValue, hex_from_rgb};
use tilecss::{CompositeValue, Value};

pub trait RandomSource {
    fn next_u64(&mut self) -> u64;

    /// Uniform in `[0, 1)`.
    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Uniform in `0..n`; `0` when `n == 0`.
    fn below(&mut self, n: usize) -> usize {
        if n == 0 {
            return 0;
        }
        ((self.next_f64() * n as f64) as usize).min(n - 1)
    }

    /// `true` with probability `p`.
    fn chance(&mut self, p: f64) -> bool {
        self.next_f64() < p
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next_u64(&mut self) -> u64 {
        (**self).next_u64()
    }
}

/// Xorshift64 generator.
#[derive(Debug, Clone)]
pub struct XorShiftRng(u64);

impl XorShiftRng {
    pub fn seeded(seed: u64) -> Self {
        // Zero is a fixed point of xorshift.
        Self(if seed == 0 { 0x9E37_79B9_7F4A_7C15 } else { seed })
    }

    /// Seeds from the operating system, falling back to the clock.
    pub fn from_entropy() -> Self {
        let mut bytes = [0u8; 8];
        match getrandom::getrandom(&mut bytes) {
            Ok(()) => Self::seeded(u64::from_le_bytes(bytes)),
            Err(e) => {
                log::warn!("OS entropy unavailable ({e}), seeding from the clock");
                let nanos = SystemTime::now()
                    .duration_since(UNIX_EPOCH)
                    .map(|d| d.as_nanos() as u64)
                    .unwrap_or_default();
                Self::seeded(nanos)
            }
        }
    }
}

impl Default for XorShiftRng {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl RandomSource for XorShiftRng {
    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }
}

/// A random value of the shape `definition`'s control expects.
///
/// Sliders land on a step within bounds, selects pick an option, text keeps
/// the default and composites recurse into their sub-attributes.
pub fn random_value(definition: &AttributeDefinition, rng: &mut impl RandomSource) -> Value {
    match &definition.control {
        Control::Color => Value::Color(random_color(rng)),
        Control::Slider(bounds) => {
            let step = if bounds.step > 0.0 { bounds.step } else { 1.0 };
            let steps = ((bounds.max - bounds.min) / step + 1e-9).floor() as usize;
            let value = bounds.min + step * rng.below(steps + 1) as f64;
            Value::Number(bounds.clamp(round_to_step(value, step)))
        }
        Control::Select(options) => match options.get(rng.below(options.len())) {
            Some(option) => Value::choice(option.value),
            None => definition.default_value.clone(),
        },
        Control::Text => definition.default_value.clone(),
        Control::Checkbox => Value::Flag(rng.chance(0.5)),
        Control::Gradient => Value::Gradient(GradientValue::linear(
            rng.below(361) as f64,
            random_color(rng),
            random_color(rng),
        )),
        Control::Composite(subs) => Value::Composite(
            subs.iter()
                .map(|sub| (sub.id, random_value(sub, rng)))
                .collect::<CompositeValue>(),
        ),
    }
}

fn random_color(rng: &mut impl RandomSource) -> String {
    hex_from_rgb((rng.next_u64() & 0xFF_FFFF) as u32)
}

/// Removes float noise such as `0.37000000000000005` for a `0.01` step.
fn round_to_step(value: f64, step: f64) -> f64 {
    let decimals = (0..6)
        .find(|&d| {
            let scaled = step * 10f64.powi(d);
            (scaled - scaled.round()).abs() < 1e-9
        })
        .unwrap_or(6);
    let scale = 10f64.powi(decimals);
    (value * scale).round() / scale
}
