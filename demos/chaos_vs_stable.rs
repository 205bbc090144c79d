//! Chaotic vs stable regime
//!
//! Estimates the Lyapunov exponent at mu = 4 (fully chaotic, analytic value
//! ln 2) and at mu = 2.5 (stable fixed point at x = 0.6).

use logmap::{LogisticMap, LyapunovParams};

fn main() -> Result<(), logmap::LogmapError> {
    println!("Running logistic map Lyapunov estimates...\n");

    let params = LyapunovParams::new(1000, 200);

    let mut chaotic = LogisticMap::new(0.4, 4.0);
    let lam_chaotic = chaotic.lyapunov_exponent(&params)?;

    let mut stable = LogisticMap::new(0.5, 2.5);
    let lam_stable = stable.lyapunov_exponent(&params)?;

    println!("Configuration:");
    println!("  Samples: {}", params.sample_count);
    println!("  Transient: {}", params.transient_count);
    println!();

    println!("mu = 4.0:  lambda = {lam_chaotic:.6}  (ln 2 = {:.6})", std::f64::consts::LN_2);
    println!("mu = 2.5:  lambda = {lam_stable:.6}  (ln 0.5 = {:.6})", 0.5_f64.ln());
    println!("  final x = {:.10}", stable.x());

    Ok(())
}
