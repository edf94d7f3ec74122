//! CIELAB / LCH color space conversions.
//!
//! The generator does all of its hue rotation, chroma stepping, and ramp
//! interpolation in LCH (the cylindrical form of CIELAB) because it is
//! perceptually uniform: equal numeric distances correspond to equal
//! perceived differences, so ramps stay even and hue shifts preserve
//! lightness. Conversions go sRGB ⇄ linear RGB ⇄ XYZ (D65) ⇄ LAB ⇄ LCH.

use super::RgbColor;

/// D65 reference white point for the XYZ → LAB transform.
const XN: f64 = 0.95047;
const YN: f64 = 1.00000;
const ZN: f64 = 1.08883;

/// Below this chroma a color is treated as achromatic (hue undefined).
const ACHROMATIC_CHROMA: f64 = 1e-4;

/// Converts an sRGB channel (0-255) to linear light (0.0-1.0).
#[must_use]
pub fn srgb_to_linear(c: u8) -> f64 {
    let c = f64::from(c) / 255.0;
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Converts a linear light value (0.0-1.0) to an sRGB channel, clamped.
#[must_use]
pub fn linear_to_srgb(c: f64) -> u8 {
    let c = c.clamp(0.0, 1.0);
    let s = if c <= 0.003_130_8 {
        12.92 * c
    } else {
        1.055 * c.powf(1.0 / 2.4) - 0.055
    };
    (s * 255.0).round() as u8
}

/// LAB forward transform helper.
fn lab_f(t: f64) -> f64 {
    if t > 0.008856 {
        t.cbrt()
    } else {
        7.787 * t + 16.0 / 116.0
    }
}

/// LAB inverse transform helper.
fn lab_f_inv(t: f64) -> f64 {
    if t > 0.206896 {
        t * t * t
    } else {
        (t - 16.0 / 116.0) / 7.787
    }
}

/// A color in CIELAB space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lab {
    /// Lightness (0 = black, 100 = white).
    pub l: f64,
    /// Green-red axis.
    pub a: f64,
    /// Blue-yellow axis.
    pub b: f64,
}

impl Lab {
    /// Converts an [`RgbColor`] to LAB via XYZ (D65 illuminant).
    #[must_use]
    pub fn from_rgb(rgb: RgbColor) -> Self {
        let r = srgb_to_linear(rgb.r);
        let g = srgb_to_linear(rgb.g);
        let b = srgb_to_linear(rgb.b);

        // sRGB -> XYZ (D65) using the standard matrix
        let x = 0.412_456_4 * r + 0.357_576_1 * g + 0.180_437_5 * b;
        let y = 0.212_672_9 * r + 0.715_152_2 * g + 0.072_175_0 * b;
        let z = 0.019_333_9 * r + 0.119_192_0 * g + 0.950_304_1 * b;

        let fx = lab_f(x / XN);
        let fy = lab_f(y / YN);
        let fz = lab_f(z / ZN);

        Self {
            l: 116.0 * fy - 16.0,
            a: 500.0 * (fx - fy),
            b: 200.0 * (fy - fz),
        }
    }

    /// Converts back to sRGB, clamping out-of-gamut channels.
    #[must_use]
    pub fn to_rgb(self) -> RgbColor {
        let fy = (self.l + 16.0) / 116.0;
        let fx = self.a / 500.0 + fy;
        let fz = fy - self.b / 200.0;

        let x = XN * lab_f_inv(fx);
        let y = YN * lab_f_inv(fy);
        let z = ZN * lab_f_inv(fz);

        // XYZ -> linear RGB (D65)
        let r = 3.240_454_2 * x - 1.537_138_5 * y - 0.498_531_4 * z;
        let g = -0.969_266_0 * x + 1.876_010_8 * y + 0.041_556_0 * z;
        let b = 0.055_643_4 * x - 0.204_025_9 * y + 1.057_225_2 * z;

        RgbColor::new(linear_to_srgb(r), linear_to_srgb(g), linear_to_srgb(b))
    }

    /// Converts to the cylindrical LCH form.
    #[must_use]
    pub fn to_lch(self) -> Lch {
        let c = self.a.hypot(self.b);
        let h = if c < ACHROMATIC_CHROMA {
            0.0
        } else {
            let deg = self.b.atan2(self.a).to_degrees();
            if deg < 0.0 {
                deg + 360.0
            } else {
                deg
            }
        };
        Lch { l: self.l, c, h }
    }

    /// Squared Euclidean distance, used by the image clusterer.
    #[must_use]
    pub fn distance_squared(self, other: Self) -> f64 {
        let dl = self.l - other.l;
        let da = self.a - other.a;
        let db = self.b - other.b;
        dl * dl + da * da + db * db
    }

    /// Linear interpolation between two LAB colors.
    #[must_use]
    pub fn lerp(self, other: Self, t: f64) -> Self {
        Self {
            l: self.l + t * (other.l - self.l),
            a: self.a + t * (other.a - self.a),
            b: self.b + t * (other.b - self.b),
        }
    }
}

/// A color in LCH space (LAB with polar chroma/hue).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lch {
    /// Lightness (0-100).
    pub l: f64,
    /// Chroma (0 = gray, unbounded upper end in theory, ~130 in sRGB).
    pub c: f64,
    /// Hue angle in degrees (0-360, 0 for achromatic colors).
    pub h: f64,
}

impl Lch {
    /// Converts an [`RgbColor`] to LCH.
    #[must_use]
    pub fn from_rgb(rgb: RgbColor) -> Self {
        Lab::from_rgb(rgb).to_lch()
    }

    /// Converts back to LAB.
    #[must_use]
    pub fn to_lab(self) -> Lab {
        let rad = self.h.to_radians();
        Lab {
            l: self.l,
            a: self.c * rad.cos(),
            b: self.c * rad.sin(),
        }
    }

    /// Converts back to sRGB, clamping out-of-gamut channels.
    #[must_use]
    pub fn to_rgb(self) -> RgbColor {
        self.to_lab().to_rgb()
    }

    /// Returns this color with its hue rotated by `degrees` (mod 360).
    #[must_use]
    pub fn rotate_hue(self, degrees: f64) -> Self {
        Self {
            h: (self.h + degrees).rem_euclid(360.0),
            ..self
        }
    }

    /// Interpolation with shortest-arc hue blending.
    ///
    /// If either endpoint is achromatic its hue is undefined, so the
    /// other endpoint's hue is carried through instead of sweeping from 0.
    #[must_use]
    pub fn lerp(self, other: Self, t: f64) -> Self {
        let (ha, hb) = if self.c < ACHROMATIC_CHROMA {
            (other.h, other.h)
        } else if other.c < ACHROMATIC_CHROMA {
            (self.h, self.h)
        } else {
            (self.h, other.h)
        };

        let mut dh = hb - ha;
        if dh > 180.0 {
            dh -= 360.0;
        } else if dh < -180.0 {
            dh += 360.0;
        }

        Self {
            l: self.l + t * (other.l - self.l),
            c: self.c + t * (other.c - self.c),
            h: (ha + t * dh).rem_euclid(360.0),
        }
    }
}
