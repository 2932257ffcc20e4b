// SPDX-License-Identifier: MPL-2.0
use pet_manager::app::{self, Flags};
use tracing_subscriber::EnvFilter;

const HELP: &str = "\
Pet Manager

USAGE:
  pet_manager [OPTIONS]

OPTIONS:
  --config-dir <DIR>   Directory holding settings.toml
  --toast-limit <N>    Maximum number of toasts shown at once
  -h, --help           Print this help
";

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let config_dir = args.opt_value_from_str("--config-dir").unwrap_or_else(|err| {
        tracing::warn!(error = %err, "ignoring invalid --config-dir");
        None
    });
    let toast_limit = args.opt_value_from_str("--toast-limit").unwrap_or_else(|err| {
        tracing::warn!(error = %err, "ignoring invalid --toast-limit");
        None
    });

    let remaining = args.finish();
    if !remaining.is_empty() {
        tracing::warn!(?remaining, "ignoring unexpected arguments");
    }

    app::run(Flags {
        config_dir,
        toast_limit,
    })
}
