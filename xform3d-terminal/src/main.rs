/// xform3d - print 4x4 homogeneous transforms from the command line
///
/// Examples:
///   xform3d rotate --axis 1,0,0 --degrees 90 --point 0,1,0
///   xform3d perspective --fov 60 --near 1 --far 100 --point 0,0,-100
///   xform3d camera --config camera.json --point 0,0,0

use anyhow::Result;
use clap::Parser;
use std::io::stdout;
use tracing_subscriber::EnvFilter;
use xform3d_terminal::Args;

fn main() -> Result<()> {
    let args = Args::parse();

    let default_level = if args.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();

    xform3d_terminal::run(&args, &mut stdout())
}
