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

//! Named constants shared by the distributions.

/// Truncated Euler-Mascheroni constant
pub const EULER_GAMMA: f64 = 0.577_215_664_901_532_8;
pub const SQRT_2: f64 = std::f64::consts::SQRT_2;
/// √π
pub const SQRT_PI: f64 = 1.772_453_850_905_516;
/// √(2π)
pub const SQRT_2PI: f64 = 2.506_628_274_631_000_5;

#[test]
fn constants() {
    assert!((SQRT_PI - std::f64::consts::PI.sqrt()).abs() < f64::EPSILON);
    assert!((SQRT_2PI - std::f64::consts::TAU.sqrt()).abs() < f64::EPSILON);
}
