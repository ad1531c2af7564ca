use serde::{Deserialize, Serialize};

/// RGBA color kept as numbers until the final draw call.
///
/// `r`, `g`, `b` are in `0.0..=255.0`; `a` is in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const TRANSPARENT: Color = Color {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 0.0,
    };

    pub fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub fn from_rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub fn from_rgb8(rgb: [u8; 3]) -> Self {
        Self::rgb(rgb[0] as f32, rgb[1] as f32, rgb[2] as f32)
    }

    pub fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }

    /// Round the color channels to whole values, leaving alpha untouched.
    pub fn rounded(self) -> Self {
        Self {
            r: self.r.round(),
            g: self.g.round(),
            b: self.b.round(),
            a: self.a,
        }
    }

    /// Channel-wise linear interpolation, alpha included. `t` is clamped to `[0, 1]`.
    pub fn lerp(self, other: Color, t: f32) -> Self {
        let t = t.clamp(0.0, 1.0);
        Self {
            r: self.r + (other.r - self.r) * t,
            g: self.g + (other.g - self.g) * t,
            b: self.b + (other.b - self.b) * t,
            a: self.a + (other.a - self.a) * t,
        }
    }

    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        let channel = |i: usize| u8::from_str_radix(hex.get(i..i + 2)?, 16).ok();
        match hex.len() {
            6 => Some(Self::from_rgb8([channel(0)?, channel(2)?, channel(4)?])),
            8 => {
                let a = channel(6)? as f32 / 255.0;
                Some(Self::from_rgb8([channel(0)?, channel(2)?, channel(4)?]).with_alpha(a))
            }
            _ => None,
        }
    }

    /// Parse `rgb(r, g, b)`, `rgba(r, g, b, a)` or a hex string.
    pub fn from_css(s: &str) -> Option<Self> {
        let s = s.trim();
        if s.starts_with('#') {
            return Self::from_hex(s);
        }
        let (inner, expected) = if let Some(rest) = s.strip_prefix("rgba(") {
            (rest.strip_suffix(')')?, 4)
        } else if let Some(rest) = s.strip_prefix("rgb(") {
            (rest.strip_suffix(')')?, 3)
        } else {
            return None;
        };
        let parts: Vec<f32> = inner
            .split(',')
            .map(|p| p.trim().parse::<f32>().ok())
            .collect::<Option<_>>()?;
        if parts.len() != expected {
            return None;
        }
        if parts[..3].iter().any(|c| !(0.0..=255.0).contains(c)) {
            return None;
        }
        let a = parts.get(3).copied().unwrap_or(1.0);
        if !(0.0..=1.0).contains(&a) {
            return None;
        }
        Some(Self::from_rgba(parts[0], parts[1], parts[2], a))
    }

    pub fn to_css(&self) -> String {
        let [r, g, b, _] = self.to_rgba8();
        format!("rgba({r}, {g}, {b}, {})", self.a)
    }

    pub fn to_rgba8(&self) -> [u8; 4] {
        let q = |v: f32| v.round().clamp(0.0, 255.0) as u8;
        [q(self.r), q(self.g), q(self.b), q(self.a * 255.0)]
    }

    /// Largest absolute channel difference, alpha scaled to the 0-255 range.
    pub fn max_channel_delta(&self, other: &Color) -> f32 {
        (self.r - other.r)
            .abs()
            .max((self.g - other.g).abs())
            .max((self.b - other.b).abs())
            .max((self.a - other.a).abs() * 255.0)
    }
}
