/*
 * // Copyright (c) Radzivon Bartoshyk 10/2026. All rights reserved.
 * //
 * // Redistribution and use in source and binary forms, with or without modification,
 * // are permitted provided that the following conditions are met:
 * //
 * // 1.  Redistributions of source code must retain the above copyright notice, this
 * // list of conditions and the following disclaimer.
 * //
 * // 2.  Redistributions in binary form must reproduce the above copyright notice,
 * // this list of conditions and the following disclaimer in the documentation
 * // and/or other materials provided with the distribution.
 * //
 * // 3.  Neither the name of the copyright holder nor the names of its
 * // contributors may be used to endorse or promote products derived from
 * // this software without specific prior written permission.
 * //
 * // THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS IS"
 * // AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE
 * // IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE ARE
 * // DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT HOLDER OR CONTRIBUTORS BE LIABLE
 * // FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR CONSEQUENTIAL
 * // DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF SUBSTITUTE GOODS OR
 * // SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS INTERRUPTION) HOWEVER
 * // CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN CONTRACT, STRICT LIABILITY,
 * // OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE) ARISING IN ANY WAY OUT OF THE USE
 * // OF THIS SOFTWARE, EVEN IF ADVISED OF THE POSSIBILITY OF SUCH DAMAGE.
 */
use ddouble::{DDouble, consts, cos, exp, log, sin, sqrt, subqq};
use rand::Rng;

fn ulp_distance(value: DDouble, reference: f64) -> f64 {
    let ulp = f64::from_bits(reference.abs().to_bits() + 1) - reference.abs();
    (value - reference).hi.abs() / ulp
}

fn main() {
    let root2 = sqrt(DDouble::from_f64(2.));
    println!("sqrt(2) = {:?}", root2);
    println!("sqrt(2)^2 - 2 = {:e}", subqq(root2 * root2, DDouble::from_f64(2.)).hi);

    println!("exp(1) = {:?}, e = {:?}", exp(DDouble::ONE), consts::E);
    println!("log(10) = {:?}, ln10 = {:?}", log(DDouble::from_f64(10.)), consts::LOG10);
    println!("sin(pi/6) = {:?}", sin(consts::PI / 6.));

    let mut acc = DDouble::ZERO;
    let mut naive = 0f64;
    for _ in 0..1_000_000 {
        acc += 0.1;
        naive += 0.1;
    }
    println!("sum of 10^6 x 0.1: ddouble {:?}, f64 {naive}", acc);

    let mut rng = rand::rng();
    let mut worst_exp = 0f64;
    let mut worst_cos = 0f64;
    for _ in 0..100_000 {
        let x: f64 = rng.random_range(-50.0..50.0);
        let d = DDouble::from_f64(x);
        worst_exp = worst_exp.max(ulp_distance(exp(d), libm::exp(x)));
        worst_cos = worst_cos.max(ulp_distance(cos(d), libm::cos(x)));
    }
    println!("libm exp worst distance {worst_exp} ulp");
    println!("libm cos worst distance {worst_cos} ulp");
}
