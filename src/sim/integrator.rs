// ---------------------------------------------------------------------------
// Generic scalar RK4 stepper
// ---------------------------------------------------------------------------

/// Advance one scalar state by one step of classical 4th-order Runge-Kutta.
///
/// `f(x, t, aux)` returns dx/dt. The aux value carries whatever coupling
/// inputs the derivative needs beyond the state itself; it is held constant
/// across all four stages — aux is a frozen input, not state being
/// integrated. Each derivative declares its own aux type, so supplying the
/// wrong inputs is a compile error rather than a runtime hazard.
///
/// Local truncation error O(h^5), global error O(h^4).
pub fn rk4_step<A, F>(f: F, x: f64, t: f64, h: f64, aux: &A) -> f64
where
    F: Fn(f64, f64, &A) -> f64,
{
    let k1 = h * f(x, t, aux);
    let k2 = h * f(x + 0.5 * k1, t + 0.5 * h, aux);
    let k3 = h * f(x + 0.5 * k2, t + 0.5 * h, aux);
    let k4 = h * f(x + k3, t + h, aux);
    x + (k1 + 2.0 * k2 + 2.0 * k3 + k4) / 6.0
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    /// One explicit Euler step, for accuracy comparison only.
    fn euler_step<A>(f: impl Fn(f64, f64, &A) -> f64, x: f64, t: f64, h: f64, aux: &A) -> f64 {
        x + h * f(x, t, aux)
    }

    fn decay(x: f64, _t: f64, a: &f64) -> f64 {
        -a * x
    }

    #[test]
    fn exponential_decay_matches_closed_form() {
        // dx/dt = -a x, exact solution x0 * exp(-a h).
        // One-step error must be O(h^5): ~ (a h)^5 / 120 here.
        let (a, h, x0): (f64, f64, f64) = (2.0, 0.1, 1.0);
        let exact = x0 * (-a * h).exp();
        let got = rk4_step(decay, x0, 0.0, h, &a);
        let err = (got - exact).abs() / exact;
        let bound = (a * h).powi(5) / 120.0;
        assert!(err < 2.0 * bound, "relative error {err:e} exceeds {bound:e}");
    }

    #[test]
    fn beats_euler_on_decay() {
        let (a, h, x0): (f64, f64, f64) = (2.0, 0.1, 1.0);
        let exact = x0 * (-a * h).exp();
        let rk4_err = (rk4_step(decay, x0, 0.0, h, &a) - exact).abs();
        let euler_err = (euler_step(decay, x0, 0.0, h, &a) - exact).abs();
        assert!(
            rk4_err < euler_err,
            "rk4 err {rk4_err:e} not below euler err {euler_err:e}"
        );
        // the gap should be dramatic, not marginal
        assert!(rk4_err < euler_err * 1e-3);
    }

    #[test]
    fn error_shrinks_as_h_to_the_fifth() {
        // Halving h should cut the one-step error by ~2^5.
        let (a, x0) = (2.0, 1.0);
        let err = |h: f64| (rk4_step(decay, x0, 0.0, h, &a) - x0 * (-a * h).exp()).abs();
        let ratio = err(0.1) / err(0.05);
        assert!(
            (20.0..50.0).contains(&ratio),
            "error ratio {ratio} not consistent with O(h^5)"
        );
    }

    #[test]
    fn exact_for_cubic_time_dependence() {
        // dx/dt = 3 t^2 integrates to t^3; RK4 is exact for this, which
        // also checks that the stage times t, t+h/2, t+h are threaded right.
        let f = |_x: f64, t: f64, _aux: &()| 3.0 * t * t;
        let got = rk4_step(f, 1.0, 2.0, 0.5, &());
        let exact = 1.0 + (2.5_f64.powi(3) - 2.0_f64.powi(3));
        assert!((got - exact).abs() < 1e-12, "got {got}, want {exact}");
    }

    #[test]
    fn aux_feeds_the_derivative() {
        // dx/dt = aux (constant): one step advances x by exactly h * aux.
        let f = |_x: f64, _t: f64, aux: &f64| *aux;
        let got = rk4_step(f, 1.0, 0.0, 0.25, &4.0);
        assert!((got - 2.0).abs() < 1e-15);
    }
}
