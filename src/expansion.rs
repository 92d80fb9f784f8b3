// Copyright 2017 The Spade Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Exact floating point arithmetic on expansions.
//!
//! An expansion represents a real number as the exact, unevaluated sum of its `f64`
//! components. Components are ordered by increasing magnitude and are non-overlapping: the
//! lowest set bit of each component lies above the highest set bit of its predecessor. Hence
//! the last component carries the sign of the whole expansion.
//!
//! Every operation producing an expansion eliminates zero components. An expansion with the
//! value zero consists of the single component `0.0`.
//!
//! This is a transcript of the algorithms provided by Jonathan Richard Shewchuk
//! (https://www.cs.cmu.edu/~quake/robust.html). The `*_tail` functions recover the rounding
//! error of the corresponding floating point operation, given its rounded result.

use std::mem;

#[inline]
pub(crate) fn fast_two_sum_tail(a: f64, b: f64, x: f64) -> f64 {
    let bvirt = x - a;
    b - bvirt
}

/// Sum of two values and its rounding error. Requires `|a| >= |b|`.
#[inline]
pub(crate) fn fast_two_sum(a: f64, b: f64) -> (f64, f64) {
    let x = a + b;
    (x, fast_two_sum_tail(a, b, x))
}

#[inline]
pub(crate) fn two_sum_tail(a: f64, b: f64, x: f64) -> f64 {
    let bvirt = x - a;
    let avirt = x - bvirt;
    let bround = b - bvirt;
    let around = a - avirt;
    around + bround
}

/// Sum of two values and its rounding error, for any magnitudes.
#[inline]
pub(crate) fn two_sum(a: f64, b: f64) -> (f64, f64) {
    let x = a + b;
    (x, two_sum_tail(a, b, x))
}

#[inline]
pub(crate) fn two_diff_tail(a: f64, b: f64, x: f64) -> f64 {
    let bvirt = a - x;
    let avirt = x + bvirt;
    let bround = bvirt - b;
    let around = a - avirt;
    around + bround
}

#[inline]
pub(crate) fn two_diff(a: f64, b: f64) -> (f64, f64) {
    let x = a - b;
    (x, two_diff_tail(a, b, x))
}

/// Adds a scalar to a two component expansion `a1 + a0`.
#[inline]
pub(crate) fn two_one_sum(a1: f64, a0: f64, b: f64) -> (f64, f64, f64) {
    let (i, x0) = two_sum(a0, b);
    let (x2, x1) = two_sum(a1, i);
    (x2, x1, x0)
}

#[inline]
pub(crate) fn two_one_diff(a1: f64, a0: f64, b: f64) -> (f64, f64, f64) {
    let (i, x0) = two_diff(a0, b);
    let (x2, x1) = two_sum(a1, i);
    (x2, x1, x0)
}

/// Exact sum of two two-component expansions. The result is ordered by increasing magnitude.
#[inline]
pub(crate) fn two_two_sum(a1: f64, a0: f64, b1: f64, b0: f64) -> [f64; 4] {
    let (j, r0, x0) = two_one_sum(a1, a0, b0);
    let (x3, x2, x1) = two_one_sum(j, r0, b1);
    [x0, x1, x2, x3]
}

/// Exact difference of two two-component expansions. The result is ordered by increasing
/// magnitude.
#[inline]
pub(crate) fn two_two_diff(a1: f64, a0: f64, b1: f64, b0: f64) -> [f64; 4] {
    let (j, r0, x0) = two_one_diff(a1, a0, b0);
    let (x3, x2, x1) = two_one_diff(j, r0, b1);
    [x0, x1, x2, x3]
}

/// Approximates an expansion by summing up its components.
pub(crate) fn estimate(e: &[f64]) -> f64 {
    let mut q = e[0];
    for cur in &e[1..] {
        q += *cur;
    }
    q
}

/// Adds a scalar to an expansion, writing the result into `h`.
///
/// `h` must hold at least `e.len() + 1` components. Returns the length of the result.
pub(crate) fn grow_expansion_zeroelim(e: &[f64], b: f64, h: &mut [f64]) -> usize {
    let mut q = b;
    let mut hindex = 0;
    for &enow in e {
        let (qnew, hh) = two_sum(q, enow);
        q = qnew;
        if hh != 0.0 {
            h[hindex] = hh;
            hindex += 1;
        }
    }
    if q != 0.0 || hindex == 0 {
        h[hindex] = q;
        hindex += 1;
    }
    hindex
}

/// Merges two expansions, writing their exact sum into `h`.
///
/// `h` must hold at least `e.len() + f.len()` components. Returns the length of the result.
pub(crate) fn fast_expansion_sum_zeroelim(e: &[f64], f: &[f64], h: &mut [f64]) -> usize {
    let mut enow = e[0];
    let mut fnow = f[0];
    let mut eindex = 0;
    let mut findex = 0;
    let mut q;
    if (fnow > enow) == (fnow > -enow) {
        q = enow;
        eindex += 1;
    } else {
        q = fnow;
        findex += 1;
    }

    let mut hindex = 0;
    if eindex < e.len() && findex < f.len() {
        enow = e[eindex];
        fnow = f[findex];
        let (qnew, hh) = if (fnow > enow) == (fnow > -enow) {
            eindex += 1;
            fast_two_sum(enow, q)
        } else {
            findex += 1;
            fast_two_sum(fnow, q)
        };
        q = qnew;
        if hh != 0.0 {
            h[hindex] = hh;
            hindex += 1;
        }

        while eindex < e.len() && findex < f.len() {
            enow = e[eindex];
            fnow = f[findex];
            let (qnew, hh) = if (fnow > enow) == (fnow > -enow) {
                eindex += 1;
                two_sum(q, enow)
            } else {
                findex += 1;
                two_sum(q, fnow)
            };
            q = qnew;
            if hh != 0.0 {
                h[hindex] = hh;
                hindex += 1;
            }
        }
    }

    for &now in e[eindex..].iter().chain(&f[findex..]) {
        let (qnew, hh) = two_sum(q, now);
        q = qnew;
        if hh != 0.0 {
            h[hindex] = hh;
            hindex += 1;
        }
    }

    if q != 0.0 || hindex == 0 {
        h[hindex] = q;
        hindex += 1;
    }
    hindex
}

/// Multiplication primitives.
///
/// Exact products need to split each factor into two halves of at most 26 significant bits.
/// The split depends on the `splitter` constant determined by
/// [ErrorBounds::probe](crate::ErrorBounds::probe).
#[derive(Debug, Clone, Copy)]
pub(crate) struct ExactArithmetic {
    splitter: f64,
}

impl ExactArithmetic {
    pub fn new(splitter: f64) -> Self {
        ExactArithmetic { splitter }
    }

    /// Splits `a` into a high and a low half with `a == ahi + alo`.
    #[inline]
    pub fn split(&self, a: f64) -> (f64, f64) {
        let c = self.splitter * a;
        let abig = c - a;
        let ahi = c - abig;
        let alo = a - ahi;
        (ahi, alo)
    }

    #[inline]
    pub fn two_product_tail(&self, a: f64, b: f64, x: f64) -> f64 {
        let (ahi, alo) = self.split(a);
        let (bhi, blo) = self.split(b);
        let err1 = x - (ahi * bhi);
        let err2 = err1 - (alo * bhi);
        let err3 = err2 - (ahi * blo);
        (alo * blo) - err3
    }

    /// Product of two values and its rounding error.
    #[inline]
    pub fn two_product(&self, a: f64, b: f64) -> (f64, f64) {
        let x = a * b;
        (x, self.two_product_tail(a, b, x))
    }

    /// Like [Self::two_product] with `b` already split into `bhi` and `blo`.
    #[inline]
    pub fn two_product_presplit(&self, a: f64, b: f64, bhi: f64, blo: f64) -> (f64, f64) {
        let x = a * b;
        let (ahi, alo) = self.split(a);
        let err1 = x - ahi * bhi;
        let err2 = err1 - alo * bhi;
        let err3 = err2 - ahi * blo;
        (x, alo * blo - err3)
    }

    #[inline]
    pub fn square(&self, a: f64) -> (f64, f64) {
        let x = a * a;
        let (ahi, alo) = self.split(a);
        let err1 = x - ahi * ahi;
        let err3 = err1 - (ahi + ahi) * alo;
        (x, alo * alo - err3)
    }

    /// Exact value of `a * b - c * d` as a four component expansion.
    #[inline]
    pub fn two_product_diff(&self, a: f64, b: f64, c: f64, d: f64) -> [f64; 4] {
        let (ab1, ab0) = self.two_product(a, b);
        let (cd1, cd0) = self.two_product(c, d);
        two_two_diff(ab1, ab0, cd1, cd0)
    }

    /// Exact value of `a * b + c * d` as a four component expansion.
    #[inline]
    pub fn two_product_sum(&self, a: f64, b: f64, c: f64, d: f64) -> [f64; 4] {
        let (ab1, ab0) = self.two_product(a, b);
        let (cd1, cd0) = self.two_product(c, d);
        two_two_sum(ab1, ab0, cd1, cd0)
    }

    /// Multiplies an expansion with a scalar, writing the result into `h`.
    ///
    /// `h` must hold at least `2 * e.len()` components. Returns the length of the result.
    pub fn scale_expansion_zeroelim(&self, e: &[f64], b: f64, h: &mut [f64]) -> usize {
        let (bhi, blo) = self.split(b);
        let (mut q, hh) = self.two_product_presplit(e[0], b, bhi, blo);
        let mut hindex = 0;
        if hh != 0.0 {
            h[hindex] = hh;
            hindex += 1;
        }
        for &enow in &e[1..] {
            let (product1, product0) = self.two_product_presplit(enow, b, bhi, blo);
            let (sum, hh) = two_sum(q, product0);
            if hh != 0.0 {
                h[hindex] = hh;
                hindex += 1;
            }
            let (qnew, hh) = fast_two_sum(product1, sum);
            q = qnew;
            if hh != 0.0 {
                h[hindex] = hh;
                hindex += 1;
            }
        }
        if q != 0.0 || hindex == 0 {
            h[hindex] = q;
            hindex += 1;
        }
        hindex
    }

    /// Returns `e * b` as a new expansion with capacity `N`.
    #[inline]
    pub fn scale<const N: usize>(&self, e: &[f64], b: f64) -> Expansion<N> {
        let mut result = Expansion::empty();
        result.len = self.scale_expansion_zeroelim(e, b, &mut result.components);
        result
    }
}

/// An expansion with a fixed capacity of `N` components, stored on the stack.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Expansion<const N: usize> {
    components: [f64; N],
    len: usize,
}

impl<const N: usize> Expansion<N> {
    fn empty() -> Self {
        Expansion {
            components: [0.0; N],
            len: 0,
        }
    }

    /// The expansion representing zero.
    pub fn zero() -> Self {
        Expansion {
            components: [0.0; N],
            len: 1,
        }
    }

    /// Returns `e + f` as a new expansion.
    #[inline]
    pub fn sum(e: &[f64], f: &[f64]) -> Self {
        let mut result = Self::empty();
        result.len = fast_expansion_sum_zeroelim(e, f, &mut result.components);
        result
    }

    /// Returns `e + b` as a new expansion.
    #[inline]
    pub fn grow(e: &[f64], b: f64) -> Self {
        let mut result = Self::empty();
        result.len = grow_expansion_zeroelim(e, b, &mut result.components);
        result
    }

    /// Adds a scalar to this expansion.
    #[inline]
    pub fn push(&mut self, b: f64) {
        *self = Self::grow(self.as_slice(), b);
    }

    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.components[..self.len]
    }

    /// The largest component. Its sign is the sign of the represented value.
    #[inline]
    pub fn most_significant(&self) -> f64 {
        self.components[self.len - 1]
    }
}

/// A running sum of expansions.
///
/// Merging requires a second buffer, both buffers are swapped after each addition.
pub(crate) struct ExpansionBuffer<const N: usize> {
    current: [f64; N],
    scratch: [f64; N],
    len: usize,
}

impl<const N: usize> ExpansionBuffer<N> {
    /// Creates a running sum starting at `e + f`.
    pub fn from_sum(e: &[f64], f: &[f64]) -> Self {
        let mut current = [0.0; N];
        let len = fast_expansion_sum_zeroelim(e, f, &mut current);
        ExpansionBuffer {
            current,
            scratch: [0.0; N],
            len,
        }
    }

    /// Adds an expansion to the running sum.
    #[inline]
    pub fn add(&mut self, e: &[f64]) {
        self.len = fast_expansion_sum_zeroelim(&self.current[..self.len], e, &mut self.scratch);
        mem::swap(&mut self.current, &mut self.scratch);
    }

    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.current[..self.len]
    }

    pub fn estimate(&self) -> f64 {
        estimate(self.as_slice())
    }

    #[inline]
    pub fn most_significant(&self) -> f64 {
        self.current[self.len - 1]
    }
}
