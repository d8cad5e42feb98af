use anyhow::Result;
use clap::Parser;
use tracing::error;

use tubescout::{analyze_channel, init_default_keywords, print_report, utils, Args};

fn main() -> Result<()> {
    let args = Args::parse();
    utils::setup_logging(args.verbose);
    utils::validate_args(&args)?;

    if args.init {
        return init_default_keywords();
    }

    let Some(channel) = args.channel.as_deref() else {
        anyhow::bail!("no channel supplied; pass a handle like @name or a full channel URL");
    };

    match analyze_channel(channel, &args) {
        Ok(result) => {
            print_report(&result);
            if args.json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            }
            Ok(())
        }
        Err(e) => {
            error!("Error: {e:#}");
            std::process::exit(1);
        }
    }
}
