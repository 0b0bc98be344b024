use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::fmt::SubscriberBuilder;

use nfp::{generate_nfp, Backend, CoordKernel, FloatKernel, NfpConfig, NfpError, Polygon, RationalKernel};

mod svg_debug;
mod wkt_io;

/// Compute the no-fit polygon of two WKT polygons via orbiting slide.
#[derive(Parser)]
#[command(name = "nfp")]
struct Cmd {
    /// Stationary polygon (A)
    poly_a: PathBuf,
    /// Orbiting polygon (B)
    poly_b: PathBuf,
    /// Output path; defaults to stdout when omitted
    out: Option<PathBuf>,

    #[arg(long, value_enum, default_value = "float")]
    backend: BackendArg,
    #[arg(long, default_value_t = 1e-8)]
    epsilon: f64,
    #[arg(long)]
    skip_validity: bool,
    #[arg(long, default_value_t = 0)]
    max_iterations: usize,
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum BackendArg {
    Float,
    Rational,
}

fn main() -> ExitCode {
    SubscriberBuilder::default().with_target(false).init();
    match run(Cmd::parse()) {
        Ok(()) => ExitCode::from(0),
        Err(err) => {
            if err.downcast_ref::<NfpError>().is_some() {
                tracing::error!(%err, "nfp engine failure");
                ExitCode::from(2)
            } else {
                tracing::error!(%err, "invalid input");
                ExitCode::from(1)
            }
        }
    }
}

fn run(cmd: Cmd) -> Result<()> {
    let config = NfpConfig {
        backend: match cmd.backend {
            BackendArg::Float => Backend::Float,
            BackendArg::Rational => Backend::Rational,
        },
        epsilon: cmd.epsilon,
        check_validity: !cmd.skip_validity,
        max_iterations: cmd.max_iterations,
    };

    match config.backend {
        // The rational backend is exact by construction; epsilon only
        // configures the float kernel used elsewhere in this match arm.
        Backend::Float => run_with_kernel(&cmd, &config, FloatKernel { eps: config.epsilon }),
        Backend::Rational => run_with_kernel(&cmd, &config, RationalKernel),
    }
}

fn run_with_kernel<K: CoordKernel>(cmd: &Cmd, config: &NfpConfig, k: K) -> Result<()> {
    let poly_a: Polygon<K> = wkt_io::read_polygon(&cmd.poly_a, &k)?;
    let poly_b: Polygon<K> = wkt_io::read_polygon(&cmd.poly_b, &k)?;

    tracing::info!(a = %cmd.poly_a.display(), b = %cmd.poly_b.display(), backend = ?config.backend, "generating nfp");
    let nfp = generate_nfp(&k, config, poly_a.clone(), poly_b.clone())?;

    match &cmd.out {
        Some(out_path) => wkt_io::write_nfp(out_path, &nfp, &k)?,
        None => {
            let tmp = std::env::temp_dir().join("nfp-stdout.wkt");
            wkt_io::write_nfp(&tmp, &nfp, &k)?;
            print!("{}", std::fs::read_to_string(&tmp)?);
            let _ = std::fs::remove_file(&tmp);
        }
    }

    if svg_debug::enabled() {
        let debug_path = cmd
            .out
            .as_ref()
            .map(|p| p.with_extension("debug.svg"))
            .unwrap_or_else(|| PathBuf::from("nfp-debug.svg"));
        svg_debug::dump(&debug_path, &k, &poly_a, &poly_b, &nfp)?;
        tracing::debug!(path = %debug_path.display(), "wrote debug svg");
    }

    Ok(())
}
