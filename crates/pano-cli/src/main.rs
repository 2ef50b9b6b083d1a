//! pano - downsample equirectangular spherical panorama images
//!
//! Reads an 8-bit binary PPM panorama, resamples it on the unit sphere
//! with a projection-aware Gaussian kernel, and writes the result.

use anyhow::{Context, Result, bail};
use clap::Parser;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "pano")]
#[command(version, about = "Downsample equirectangular panorama images")]
#[command(long_about = "
Downsamples an equirectangular spherical panorama to a smaller target
resolution, compensating for the pixel density distortion of the
projection near the poles.

Examples:
  pano 1024x512 input.ppm               # writes output.ppm
  pano 1024x512 input.ppm -o small.ppm
  pano 512x256 input.ppm -v -j 4
")]
struct Cli {
    /// Target size as WxH, e.g. 1024x512
    size: String,

    /// Input PPM (P6) panorama
    input: PathBuf,

    /// Output PPM file
    #[arg(short, long, default_value = "output.ppm")]
    output: PathBuf,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Number of threads (0 = auto)
    #[arg(short = 'j', long, default_value = "0")]
    threads: usize,
}

/// Parses a `WxH` size token into (width, height).
fn parse_size(s: &str) -> Result<(u32, u32)> {
    let Some((w, h)) = s.split_once('x') else {
        bail!("invalid size '{}': expected WxH, e.g. 1024x512", s);
    };
    let width: u32 = w
        .parse()
        .with_context(|| format!("invalid width '{}'", w))?;
    let height: u32 = h
        .parse()
        .with_context(|| format!("invalid height '{}'", h))?;
    if width == 0 || height == 0 {
        bail!("size must be at least 1x1, got {}x{}", width, height);
    }
    Ok((width, height))
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    if cli.threads > 0 {
        rayon::ThreadPoolBuilder::new()
            .num_threads(cli.threads)
            .build_global()
            .context("failed to configure thread pool")?;
    }

    let (width, height) = parse_size(&cli.size)?;

    let input = pano_io::ppm::read(&cli.input)
        .with_context(|| format!("failed to read {}", cli.input.display()))?;
    info!(
        "input {}x{}, target {}x{}",
        input.width(),
        input.height(),
        width,
        height
    );

    let output = pano_ops::downsample(&input, width, height)?;

    pano_io::ppm::write(&cli.output, &output)
        .with_context(|| format!("failed to write {}", cli.output.display()))?;
    info!("wrote {}", cli.output.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_size() {
        assert_eq!(parse_size("1024x512").unwrap(), (1024, 512));
        assert_eq!(parse_size("1x1").unwrap(), (1, 1));
    }

    #[test]
    fn test_parse_size_rejects_malformed() {
        assert!(parse_size("1024").is_err());
        assert!(parse_size("x512").is_err());
        assert!(parse_size("1024x").is_err());
        assert!(parse_size("ax b").is_err());
        assert!(parse_size("0x512").is_err());
        assert!(parse_size("-4x2").is_err());
    }
}
