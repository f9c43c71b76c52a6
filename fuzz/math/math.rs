#![no_main]

use ddouble::{
    DDouble, Matrix, absq, addqq, ceil, cos, cosh, divqd, divqq, exp, expm1, floor, givens,
    householder, hypotqq, log, mulqd, mulqq, norm, round, sin, sinh, sqrt, subqq, svd,
    svvals_tri2x2, tanh, trunc, two_sum,
};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: (u64, u64, u64)| {
    let x = two_sum(f64::from_bits(data.0), f64::from_bits(data.1) * 1e-17);
    let d = f64::from_bits(data.2);
    let y = DDouble::from_f64(d);

    _ = addqq(x, y);
    _ = subqq(x, y);
    _ = mulqq(x, y);
    _ = divqq(x, y);
    _ = mulqd(x, d);
    _ = divqd(x, d);
    _ = exp(x);
    _ = expm1(x);
    _ = log(x);
    _ = sin(x);
    _ = cos(x);
    _ = sinh(x);
    _ = cosh(x);
    _ = tanh(x);
    _ = hypotqq(x, y);
    _ = round(x);
    _ = floor(x);
    _ = ceil(x);
    _ = trunc(x);
    _ = i64::try_from(x);
    _ = norm(&[x, y]);
    _ = givens(x, y);
    _ = householder(&[x, y]);
    _ = svvals_tri2x2(x, y, x);
    if let Ok(m) = Matrix::new(2, 2, vec![x, y, y, x]) {
        _ = svd(&m);
    }

    let a = absq(x);
    assert!(a.hi.is_nan() || !a.hi.is_sign_negative());
    let r = sqrt(a);
    assert!(r.hi.is_nan() || r.hi >= 0.);
});
