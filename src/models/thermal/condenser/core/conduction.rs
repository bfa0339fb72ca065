//! Radial conduction through a cylindrical shell.
//!
//! `R = ln(r_o / r_i) / (2π k L)`

use std::f64::consts::PI;

/// A cylindrical layer in SI base units.
#[derive(Debug, Clone, Copy)]
pub(super) struct CylindricalShell {
    pub(super) outer_radius: f64,
    pub(super) inner_radius: f64,
    pub(super) conductivity: f64,
    pub(super) length: f64,
}

/// Partial derivatives of the shell resistance, in SI base units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct ShellGradient {
    pub(super) outer_radius: f64,
    pub(super) inner_radius: f64,
    pub(super) conductivity: f64,
    pub(super) length: f64,
}

impl CylindricalShell {
    fn conductance_per_log(&self) -> f64 {
        2.0 * PI * self.conductivity * self.length
    }

    /// Conduction resistance, K/W.
    pub(super) fn resistance(&self) -> f64 {
        (self.outer_radius / self.inner_radius).ln() / self.conductance_per_log()
    }

    /// Exact partial derivatives of [`CylindricalShell::resistance`].
    pub(super) fn gradient(&self) -> ShellGradient {
        let g = self.conductance_per_log();
        let resistance = self.resistance();

        ShellGradient {
            outer_radius: 1.0 / (self.outer_radius * g),
            inner_radius: -1.0 / (self.inner_radius * g),
            conductivity: -resistance / self.conductivity,
            length: -resistance / self.length,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn wall() -> CylindricalShell {
        CylindricalShell {
            outer_radius: 0.003,
            inner_radius: 0.0025,
            conductivity: 11.4,
            length: 0.02,
        }
    }

    #[test]
    fn doubling_radius() {
        let shell = CylindricalShell {
            outer_radius: 2.0,
            inner_radius: 1.0,
            conductivity: 1.0,
            length: 1.0,
        };
        assert_relative_eq!(shell.resistance(), 2.0_f64.ln() / (2.0 * PI));
    }

    #[test]
    fn stainless_wall() {
        assert_relative_eq!(
            wall().resistance(),
            0.127_269_197_350_735_1,
            max_relative = 1e-12
        );
    }

    #[test]
    fn gradient_matches_finite_differences() {
        let base = wall();
        let grad = base.gradient();

        let perturbed: [(f64, fn(&mut CylindricalShell) -> &mut f64); 4] = [
            (grad.outer_radius, |s| &mut s.outer_radius),
            (grad.inner_radius, |s| &mut s.inner_radius),
            (grad.conductivity, |s| &mut s.conductivity),
            (grad.length, |s| &mut s.length),
        ];

        for (analytic, field) in perturbed {
            let mut plus = base;
            let mut minus = base;
            let step = 1e-6 * *field(&mut plus);
            *field(&mut plus) += step;
            *field(&mut minus) -= step;

            let numeric = (plus.resistance() - minus.resistance()) / (2.0 * step);
            assert_relative_eq!(analytic, numeric, max_relative = 1e-6);
        }
    }
}
