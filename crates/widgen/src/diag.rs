use crate::{
    validate_hlc, validate_wid, HlcGenerator, IdGenerator, Result, TimeUnit, WidGenerator,
};
use core::hint::black_box;
use std::time::Instant;

/// Which identifier family an operation should produce or accept.
///
/// Dispatch is always on this declared tag, never guessed from input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum IdKind {
    Wid,
    Hlc,
}

/// Throughput figures from a [`bench`] run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct BenchReport {
    pub n: u64,
    pub seconds: f64,
    pub ids_per_sec: f64,
}

/// The outcome of a [`healthcheck`] probe.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct HealthReport {
    pub ok: bool,
    pub sample: String,
}

fn build(kind: IdKind, node: &str, w: usize, z: usize, unit: TimeUnit) -> Result<Box<dyn IdGenerator>> {
    Ok(match kind {
        IdKind::Wid => Box::new(WidGenerator::with_params(w, z, unit)?),
        IdKind::Hlc => Box::new(HlcGenerator::with_params(node, w, z, unit)?),
    })
}

/// Generates `n` identifiers in a tight loop and reports wall-time
/// throughput, measured with the monotonic clock.
pub fn bench(
    kind: IdKind,
    node: &str,
    w: usize,
    z: usize,
    unit: TimeUnit,
    n: u64,
) -> Result<BenchReport> {
    let mut generator = build(kind, node, w, z, unit)?;

    let start = Instant::now();
    for _ in 0..n {
        black_box(generator.next_id());
    }
    let mut seconds = start.elapsed().as_secs_f64();
    if seconds <= 0.0 {
        seconds = 1e-9;
    }

    Ok(BenchReport {
        n,
        seconds,
        ids_per_sec: n as f64 / seconds,
    })
}

/// Generates a single identifier and validates it under the same
/// parameters.
pub fn healthcheck(
    kind: IdKind,
    node: &str,
    w: usize,
    z: usize,
    unit: TimeUnit,
) -> Result<HealthReport> {
    let mut generator = build(kind, node, w, z, unit)?;
    let sample = generator.next_id();
    let ok = match kind {
        IdKind::Wid => validate_wid(&sample, w, z, unit),
        IdKind::Hlc => validate_hlc(&sample, w, z, unit),
    };
    Ok(HealthReport { ok, sample })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn bench_reports_positive_throughput() {
        let report = bench(IdKind::Wid, "", 4, 6, TimeUnit::Sec, 1_000).unwrap();
        assert_eq!(report.n, 1_000);
        assert!(report.seconds > 0.0);
        assert!(report.ids_per_sec > 0.0);

        let hlc = bench(IdKind::Hlc, "node01", 4, 0, TimeUnit::Ms, 1_000).unwrap();
        assert_eq!(hlc.n, 1_000);
    }

    #[test]
    fn bench_propagates_parameter_errors() {
        assert!(matches!(
            bench(IdKind::Wid, "", 0, 0, TimeUnit::Sec, 10),
            Err(Error::InvalidParameter(_))
        ));
        assert!(matches!(
            bench(IdKind::Hlc, "bad node", 4, 0, TimeUnit::Sec, 10),
            Err(Error::InvalidParameter(_))
        ));
    }

    #[test]
    fn healthcheck_samples_validate() {
        let wid = healthcheck(IdKind::Wid, "", 4, 6, TimeUnit::Sec).unwrap();
        assert!(wid.ok, "sample failed validation: {}", wid.sample);

        let hlc = healthcheck(IdKind::Hlc, "node01", 4, 0, TimeUnit::Ms).unwrap();
        assert!(hlc.ok, "sample failed validation: {}", hlc.sample);
        assert!(hlc.sample.contains("-node01"));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn reports_serialize_to_json() {
        let report = healthcheck(IdKind::Wid, "", 4, 0, TimeUnit::Sec).unwrap();
        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains("\"ok\":true"));
    }
}
