//! 3x3 matrix helpers for per-pixel colour transforms

/// Row-major 3x3 matrix
pub type Mat3 = [[f32; 3]; 3];

/// Multiply a column vector by `m`
#[inline]
pub fn apply(m: &Mat3, v: [f32; 3]) -> [f32; 3] {
    [
        m[0][0] * v[0] + m[0][1] * v[1] + m[0][2] * v[2],
        m[1][0] * v[0] + m[1][1] * v[1] + m[1][2] * v[2],
        m[2][0] * v[0] + m[2][1] * v[1] + m[2][2] * v[2],
    ]
}

pub fn transpose(m: &Mat3) -> Mat3 {
    let mut t = [[0.0; 3]; 3];
    for (i, row) in m.iter().enumerate() {
        for (j, &v) in row.iter().enumerate() {
            t[j][i] = v;
        }
    }
    t
}

pub fn determinant(m: &Mat3) -> f64 {
    let a = m.map(|row| row.map(f64::from));
    a[0][0] * (a[1][1] * a[2][2] - a[1][2] * a[2][1])
        - a[0][1] * (a[1][0] * a[2][2] - a[1][2] * a[2][0])
        + a[0][2] * (a[1][0] * a[2][1] - a[1][1] * a[2][0])
}

/// Inverse via the adjugate, computed in f64
///
/// Returns `None` for a singular matrix.
pub fn invert(m: &Mat3) -> Option<Mat3> {
    let det = determinant(m);
    if det.abs() < 1e-12 {
        return None;
    }

    let a = m.map(|row| row.map(f64::from));
    let cof = |r0: usize, r1: usize, c0: usize, c1: usize| a[r0][c0] * a[r1][c1] - a[r0][c1] * a[r1][c0];

    let adj = [
        [cof(1, 2, 1, 2), -cof(0, 2, 1, 2), cof(0, 1, 1, 2)],
        [-cof(1, 2, 0, 2), cof(0, 2, 0, 2), -cof(0, 1, 0, 2)],
        [cof(1, 2, 0, 1), -cof(0, 2, 0, 1), cof(0, 1, 0, 1)],
    ];

    Some(adj.map(|row| row.map(|v| (v / det) as f32)))
}
