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

/// Polynomial is a statically allocated polynomial.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Polynomial<const SIZE: usize> {
    /// Coefficients are orders by their power, e.g. index 0 is to the power 0, 1 is linear, 2 is quadratic, etc.
    pub coefficients: [f64; SIZE],
}

impl<const SIZE: usize> Polynomial<SIZE> {
    pub const fn new(coefficients: [f64; SIZE]) -> Self {
        Self { coefficients }
    }

    /// Evaluate the polynomial at the provided position using Horner's method
    pub fn eval(&self, x: f64) -> f64 {
        // Start with biggest coefficients
        self.coefficients
            .iter()
            .rev()
            .fold(0.0, |acc, val| acc * x + *val)
    }
}

/// A ratio of two polynomials of the same size, as used by minimax approximations.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Rational<const SIZE: usize> {
    pub numerator: Polynomial<SIZE>,
    pub denominator: Polynomial<SIZE>,
}

impl<const SIZE: usize> Rational<SIZE> {
    pub const fn new(numerator: [f64; SIZE], denominator: [f64; SIZE]) -> Self {
        Self {
            numerator: Polynomial::new(numerator),
            denominator: Polynomial::new(denominator),
        }
    }

    pub fn eval(&self, x: f64) -> f64 {
        self.numerator.eval(x) / self.denominator.eval(x)
    }
}
