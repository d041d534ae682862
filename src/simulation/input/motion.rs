/// One device-motion sample (acceleration including gravity, m/s²).
///
/// Browsers may leave any axis out; an absent axis never qualifies.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MotionReading {
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub z: Option<f64>,
}

impl MotionReading {
    pub fn new(x: Option<f64>, y: Option<f64>, z: Option<f64>) -> Self {
        Self { x, y, z }
    }

    /// True if any present axis has magnitude above `threshold`
    pub fn exceeds(&self, threshold: f64) -> bool {
        [self.x, self.y, self.z]
            .into_iter()
            .flatten()
            .any(|a| a.abs() > threshold)
    }
}

/// Turns a stream of motion readings into at most one shake per cooldown window
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MotionGate {
    threshold: f64,
    cooldown_ms: f64,
    last_shake_ms: Option<f64>,
}

impl MotionGate {
    pub fn new(threshold: f64, cooldown_ms: f64) -> Self {
        Self {
            threshold,
            cooldown_ms,
            last_shake_ms: None,
        }
    }

    /// Decide whether this reading fires a shake. Missing readings are ignored,
    /// and so is a reading without a usable timestamp.
    pub fn accept(&mut self, now_ms: f64, reading: Option<MotionReading>) -> bool {
        if !now_ms.is_finite() {
            return false;
        }
        if let Some(last) = self.last_shake_ms {
            if now_ms - last < self.cooldown_ms {
                return false;
            }
        }
        let Some(reading) = reading else {
            return false;
        };
        if !reading.exceeds(self.threshold) {
            return false;
        }
        self.last_shake_ms = Some(now_ms);
        true
    }
}
