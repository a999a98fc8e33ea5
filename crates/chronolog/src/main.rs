//! chronolog: generate a changelog from a git branch's commit history
//!
//! Walks the currently checked out branch newest-first, groups commit
//! messages under the tags that bound them, and optionally links each
//! section to the hosting service's compare/commits views.

use clap::Parser;

use chronolog::config::Config;

fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    // Logs go to stderr; the changelog itself may be going to stdout.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(config.log_level().into()),
        )
        .with_writer(std::io::stderr)
        .init();

    chronolog::run(&config)
}
