//! Pointer proximity falloff and the decaying per-cell trail field.

use crate::constants::TRAIL_SPEED_THRESHOLD;

/// `(1 - d/r)^2` inside the radius, zero on and beyond it.
#[inline]
pub fn proximity(dist: f32, radius: f32) -> f32 {
    if dist < radius {
        let k = 1.0 - dist / radius;
        (k * k).clamp(0.0, 1.0)
    } else {
        0.0
    }
}

/// One value in [0, 1] per lattice cell, indexed row-major.
#[derive(Clone, Debug, Default)]
pub struct TrailField {
    values: Vec<f32>,
}

impl TrailField {
    pub fn new(len: usize) -> Self {
        Self {
            values: vec![0.0; len],
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Reallocate (zeroed) when the cell count changed. Returns true if it did.
    pub fn ensure_len(&mut self, len: usize) -> bool {
        if self.values.len() == len {
            return false;
        }
        self.values.clear();
        self.values.resize(len, 0.0);
        true
    }

    pub fn reset(&mut self) {
        self.values.fill(0.0);
    }

    #[inline]
    pub fn get(&self, index: usize) -> f32 {
        self.values.get(index).copied().unwrap_or(0.0)
    }

    pub fn values(&self) -> &[f32] {
        &self.values
    }

    /// Decay the cell linearly over `duration_sec`, then raise it to the
    /// speed-weighted proximity if the pointer is moving. Rise is instant,
    /// fall is slow; the value is never averaged down.
    pub fn update(
        &mut self,
        index: usize,
        dt_sec: f32,
        duration_sec: f32,
        proximity: f32,
        speed_factor: f32,
    ) -> f32 {
        let Some(slot) = self.values.get_mut(index) else {
            return 0.0;
        };
        let mut value = (*slot - dt_sec.max(0.0) / duration_sec).max(0.0);
        if proximity > 0.0 && speed_factor > TRAIL_SPEED_THRESHOLD {
            value = value.max(proximity * speed_factor.min(1.0));
        }
        let value = value.clamp(0.0, 1.0);
        *slot = value;
        value
    }
}
