//! Pure opacity steppers behind the fade animations.
//!
//! Each iterator yields the opacity values to write, one per animation tick.
//! A fade-in stops as soon as the next value would reach 1.0, so the terminal
//! on-screen opacity is the last yielded value (0.8 with the default step),
//! never a clamped 1.0. A fade-out counts down in rounded tenths and ends
//! once the next value would drop below zero; the consumer then hides the
//! element.

use crate::constants::{FADE_IN_STEP, FADE_OUT_STEP};

/// Opacity steps for a fade-in, starting from fully transparent.
#[derive(Clone, Debug)]
pub struct FadeIn {
    value: f64,
}

impl FadeIn {
    pub fn new() -> Self {
        Self { value: 0.0 }
    }
}

impl Default for FadeIn {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for FadeIn {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        let next = self.value + FADE_IN_STEP;
        if next < 1.0 {
            self.value = next;
            Some(next)
        } else {
            None
        }
    }
}

/// Opacity steps for a fade-out, starting from fully opaque.
#[derive(Clone, Debug)]
pub struct FadeOut {
    value: f64,
}

impl FadeOut {
    pub fn new() -> Self {
        Self { value: 1.0 }
    }
}

impl Default for FadeOut {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for FadeOut {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        // Round to one decimal place so repeated subtraction cannot drift.
        let next = round_tenth(self.value - FADE_OUT_STEP);
        if next < 0.0 {
            None
        } else {
            self.value = next;
            Some(next)
        }
    }
}

#[inline]
fn round_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
