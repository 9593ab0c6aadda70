/*
    Statistical, probability distributions and seeded variate generators
    Copyright (C) 2018-onwards Christopher Rabotin <christopher.rabotin@gmail.com>

    This program is free software: you can redistribute it and/or modify
    it under the terms of the GNU Affero General Public License as published
    by the Free Software Foundation, either version 3 of the License, or
    (at your option) any later version.

    This program is distributed in the hope that it will be useful,
    but WITHOUT ANY WARRANTY; without even the implied warranty of
    MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
    GNU Affero General Public License for more details.

    You should have received a copy of the GNU Affero General Public License
    along with this program.  If not, see <https://www.gnu.org/licenses/>.
*/

use super::{positional, Distribution, FromParams};
use crate::domain::Domain;
use crate::errors::{ensure_arg, StatsError};
use crate::polynomial::Rational;
use crate::utils::{SQRT_2, SQRT_2PI};
use rand::Rng;
use statrs::function::erf::erf;
use std::cmp::Ordering;
use std::fmt;

/// Central region of AS 241, valid for `|p - 0.5| <= 0.425`, evaluated in `r = 0.180625 - q²`.
const CENTRAL: Rational<8> = Rational::new(
    [
        3.387_132_872_796_366_608,
        133.141_667_891_784_377_45,
        1_971.590_950_306_551_442_7,
        13_731.693_765_509_461_125,
        45_921.953_931_549_871_457,
        67_265.770_927_008_700_853,
        33_430.575_583_588_128_105,
        2_509.080_928_730_122_672_7,
    ],
    [
        1.0,
        42.313_330_701_600_911_252,
        687.187_007_492_057_908_3,
        5_394.196_021_424_751_107_7,
        21_213.794_301_586_595_867,
        39_307.895_800_092_710_61,
        28_729.085_735_721_942_674,
        5_226.495_278_852_854_561,
    ],
);

/// Intermediate tails, `r = sqrt(-ln(min(p, 1 - p))) <= 5`, evaluated in `r - 1.6`.
const TAIL: Rational<8> = Rational::new(
    [
        1.423_437_110_749_683_577_34,
        4.630_337_846_156_545_295_9,
        5.769_497_221_460_691_405_5,
        3.647_848_324_763_204_605_04,
        1.270_458_252_452_368_382_58,
        0.241_780_725_177_450_611_77,
        0.022_723_844_989_269_184_583_3,
        7.745_450_142_783_414_076_4e-4,
    ],
    [
        1.0,
        2.053_191_626_637_758_821_87,
        1.676_384_830_183_803_849_4,
        0.689_767_334_985_100_004_55,
        0.148_103_976_427_480_074_59,
        0.015_198_666_563_616_457_196_6,
        5.475_938_084_995_344_946e-4,
        1.050_750_071_644_416_843_24e-9,
    ],
);

/// Far tails, `r > 5`, evaluated in `r - 5`.
const FAR_TAIL: Rational<8> = Rational::new(
    [
        6.657_904_643_501_103_777_2,
        5.463_784_911_164_114_369_9,
        1.784_826_539_917_291_335_8,
        0.296_560_571_828_504_891_23,
        0.026_532_189_526_576_123_093,
        0.001_242_660_947_388_078_438_6,
        2.711_555_568_743_487_578_15e-5,
        2.010_334_399_292_288_132_65e-7,
    ],
    [
        1.0,
        0.599_832_206_555_887_937_69,
        0.136_929_880_922_735_805_31,
        0.014_875_361_290_850_614_852_5,
        7.868_691_311_456_132_591e-4,
        1.846_318_317_510_054_681_8e-5,
        1.421_511_758_316_445_888_7e-7,
        2.044_263_103_389_939_785_64e-15,
    ],
);

/// √(8/e), bounds the ratio-of-uniforms acceptance region.
const KM_SCALE: f64 = 1.715_527_769_921_413_5;

/// Returns the standard normal quantile of `p` (Wichura, AS 241, PPND16), accurate to about 1e-16.
///
/// `p` must be within [0, 1]: the bounds map to the infinities, and `0.5` maps to exactly zero.
pub fn standard_normal_quantile(p: f64) -> f64 {
    if p <= 0.0 {
        return f64::NEG_INFINITY;
    } else if p >= 1.0 {
        return f64::INFINITY;
    }

    let q = p - 0.5;
    if q.abs() <= 0.425 {
        return q * CENTRAL.eval(0.180_625 - q * q);
    }

    let r = (-p.min(1.0 - p).ln()).sqrt();
    let z = if r <= 5.0 {
        TAIL.eval(r - 1.6)
    } else {
        FAR_TAIL.eval(r - 5.0)
    };
    if q < 0.0 {
        -z
    } else {
        z
    }
}

/// Draws a standard normal deviate with the Kinderman-Monahan ratio-of-uniforms method,
/// including Leva's quadratic bounds to skip most logarithm evaluations.
///
/// Each candidate costs two uniform draws, and on average 1.37 candidates are needed.
pub fn ratio_of_uniforms<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    loop {
        // u in (0, 1] so that the logarithm is finite
        let u = 1.0 - rng.gen::<f64>();
        let v = KM_SCALE * (rng.gen::<f64>() - 0.5);

        let x = u - 0.449_871;
        let y = v.abs() + 0.386_595;
        let q = x * x + y * (0.196_00 * y - 0.254_72 * x);

        if q < 0.275_97 || (q <= 0.278_46 && v * v <= -4.0 * u * u * u.ln()) {
            return v / u;
        }
    }
}

/// Normal (Gaussian) distribution, parametrized by its location (mean) and scale (standard deviation).
#[derive(Clone, Debug, PartialEq)]
pub struct Normal {
    location: f64,
    scale: f64,
    support: Domain,
}

impl Normal {
    pub fn new(location: f64, scale: f64) -> Result<Self, StatsError> {
        ensure_arg!(location.is_finite(), "normal location must be finite, got {location}");
        ensure_arg!(
            scale > 0.0 && scale.is_finite(),
            "normal scale must be strictly positive, got {scale}"
        );
        Ok(Self {
            location,
            scale,
            support: Domain::real_line(),
        })
    }

    /// The standard normal distribution, N(0, 1).
    pub fn standard() -> Self {
        Self {
            location: 0.0,
            scale: 1.0,
            support: Domain::real_line(),
        }
    }

    pub fn location(&self) -> f64 {
        self.location
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    fn z_score(&self, x: f64) -> f64 {
        (x - self.location) / self.scale
    }
}

impl FromParams for Normal {
    const TYPE_NAME: &'static str = "Normal";

    fn from_params(params: &[f64]) -> Result<Self, StatsError> {
        let [location, scale] = positional(Self::TYPE_NAME, params, [Some(0.0), Some(1.0)])?;
        Self::new(location, scale)
    }
}

impl Distribution for Normal {
    fn pdf(&self, x: f64) -> f64 {
        match self.support.compare(x) {
            Some(Ordering::Equal) => {
                let z = self.z_score(x);
                (-0.5 * z * z).exp() / (SQRT_2PI * self.scale)
            }
            Some(_) => 0.0,
            None => f64::NAN,
        }
    }

    fn cdf(&self, x: f64) -> f64 {
        match self.support.compare(x) {
            Some(Ordering::Less) => 0.0,
            Some(Ordering::Greater) => 1.0,
            Some(Ordering::Equal) => 0.5 * (1.0 + erf(self.z_score(x) / SQRT_2)),
            None => f64::NAN,
        }
    }

    fn inverse_cdf(&self, p: f64) -> f64 {
        self.location + self.scale * standard_normal_quantile(p)
    }

    fn mean(&self) -> f64 {
        self.location
    }

    fn variance(&self) -> f64 {
        self.scale.powi(2)
    }

    fn domain(&self) -> Option<&Domain> {
        Some(&self.support)
    }
}

impl rand_distr::Distribution<f64> for Normal {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        self.location + self.scale * ratio_of_uniforms(rng)
    }
}

impl fmt::Display for Normal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Normal(location = {}, scale = {})",
            self.location, self.scale
        )
    }
}
