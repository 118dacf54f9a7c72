//! 3x3 rotation matrices for frame changes such as B1950 to J2000 precession.
//!
//! Rotations follow the ERFA convention: `rotate_z(psi)` premultiplies the
//! matrix by
//!
//! ```text
//! Rz(psi) = | cos(psi)  sin(psi)  0 |
//!           |-sin(psi)  cos(psi)  0 |
//!           |    0         0      1 |
//! ```
//!
//! which rotates the frame, not the vector. A positive quarter turn about Z
//! takes `[1, 0, 0]` to `[0, -1, 0]`. Storage is row-major.
//!
//! For a proper rotation the inverse is the transpose:
//!
//! ```
//! use starcat_core::RotationMatrix3;
//!
//! let mut m = RotationMatrix3::identity();
//! m.rotate_z(0.5);
//! m.rotate_y(-0.2);
//!
//! let v = [1.0, 2.0, 3.0];
//! let back = m.transpose().apply_to_vector(m.apply_to_vector(v));
//! assert!((back[2] - 3.0).abs() < 1e-14);
//! ```

use super::Vector3;

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RotationMatrix3 {
    elements: [[f64; 3]; 3],
}

impl Default for RotationMatrix3 {
    fn default() -> Self {
        Self::identity()
    }
}

impl RotationMatrix3 {
    pub fn identity() -> Self {
        Self::from_array([[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]])
    }

    pub fn from_array(elements: [[f64; 3]; 3]) -> Self {
        Self { elements }
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.elements[row][col]
    }

    pub fn elements(&self) -> &[[f64; 3]; 3] {
        &self.elements
    }

    /// Premultiplies by `Rz(psi)`.
    pub fn rotate_z(&mut self, psi: f64) {
        let (s, c) = libm::sincos(psi);
        let [r0, r1, _] = self.elements;
        for j in 0..3 {
            self.elements[0][j] = c * r0[j] + s * r1[j];
            self.elements[1][j] = -s * r0[j] + c * r1[j];
        }
    }

    /// Premultiplies by `Ry(theta)`:
    ///
    /// ```text
    /// Ry(theta) = | cos(theta)  0  -sin(theta) |
    ///             |     0       1       0      |
    ///             | sin(theta)  0   cos(theta) |
    /// ```
    pub fn rotate_y(&mut self, theta: f64) {
        let (s, c) = libm::sincos(theta);
        let [r0, _, r2] = self.elements;
        for j in 0..3 {
            self.elements[0][j] = c * r0[j] - s * r2[j];
            self.elements[2][j] = s * r0[j] + c * r2[j];
        }
    }

    /// `self * other`: `other` acts on the vector first.
    pub fn multiply(&self, other: &Self) -> Self {
        let mut out = [[0.0; 3]; 3];
        for (i, row) in out.iter_mut().enumerate() {
            for (j, cell) in row.iter_mut().enumerate() {
                *cell = (0..3).map(|k| self.elements[i][k] * other.elements[k][j]).sum();
            }
        }
        Self::from_array(out)
    }

    pub fn apply_to_vector(&self, v: [f64; 3]) -> [f64; 3] {
        let m = &self.elements;
        [
            m[0][0] * v[0] + m[0][1] * v[1] + m[0][2] * v[2],
            m[1][0] * v[0] + m[1][1] * v[1] + m[1][2] * v[2],
            m[2][0] * v[0] + m[2][1] * v[1] + m[2][2] * v[2],
        ]
    }

    pub fn transpose(&self) -> Self {
        let m = &self.elements;
        Self::from_array([
            [m[0][0], m[1][0], m[2][0]],
            [m[0][1], m[1][1], m[2][1]],
            [m[0][2], m[1][2], m[2][2]],
        ])
    }

    pub fn determinant(&self) -> f64 {
        let m = &self.elements;
        m[0][0] * (m[1][1] * m[2][2] - m[1][2] * m[2][1])
            - m[0][1] * (m[1][0] * m[2][2] - m[1][2] * m[2][0])
            + m[0][2] * (m[1][0] * m[2][1] - m[1][1] * m[2][0])
    }

    /// True when `M * M^T` is the identity and the determinant is +1, both
    /// within `tolerance`.
    pub fn is_rotation_matrix(&self, tolerance: f64) -> bool {
        let product = self.multiply(&self.transpose());
        let identity = Self::identity();
        let orthogonal = (0..3).all(|i| {
            (0..3).all(|j| (product.get(i, j) - identity.get(i, j)).abs() <= tolerance)
        });
        orthogonal && (self.determinant() - 1.0).abs() <= tolerance
    }
}

impl std::ops::Mul for RotationMatrix3 {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        self.multiply(&rhs)
    }
}

impl std::ops::Mul<&RotationMatrix3> for &RotationMatrix3 {
    type Output = RotationMatrix3;

    fn mul(self, rhs: &RotationMatrix3) -> RotationMatrix3 {
        self.multiply(rhs)
    }
}

impl std::ops::Mul<Vector3> for &RotationMatrix3 {
    type Output = Vector3;

    fn mul(self, rhs: Vector3) -> Vector3 {
        Vector3::from_array(self.apply_to_vector(rhs.to_array()))
    }
}

impl std::ops::Mul<Vector3> for RotationMatrix3 {
    type Output = Vector3;

    fn mul(self, rhs: Vector3) -> Vector3 {
        &self * rhs
    }
}
