use tracing_subscriber::EnvFilter;

pub fn setup_logging(verbose: bool) {
    let default_filter = if verbose { "info" } else { "error" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

pub fn format_number(num: u64) -> String {
    num.to_string()
        .as_bytes()
        .rchunks(3)
        .rev()
        .map(|chunk| std::str::from_utf8(chunk).unwrap())
        .collect::<Vec<_>>()
        .join(",")
}

pub fn validate_args(args: &crate::args::Args) -> anyhow::Result<()> {
    if args.count == 0 {
        anyhow::bail!("--count must be greater than 0");
    }

    if args.timeout == 0 {
        anyhow::bail!("--timeout must be greater than 0");
    }

    Ok(())
}
