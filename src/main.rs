// SPDX-License-Identifier: MPL-2.0
use iced_caption::app::{self, Flags};
use tracing_subscriber::EnvFilter;

const HELP: &str = "\
iced_caption - batch edit photo titles and capture dates

USAGE:
  iced_caption [OPTIONS] [FILES...]

OPTIONS:
  --lang <LOCALE>       UI language (e.g. en-US, fr)
  --config-dir <DIR>    Directory holding settings.toml
  --data-dir <DIR>      Directory holding state.cbor
  -h, --help            Print this help
";

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let flags = Flags {
        lang: opt_arg(&mut args, "--lang"),
        config_dir: opt_arg(&mut args, "--config-dir"),
        data_dir: opt_arg(&mut args, "--data-dir"),
        file_paths: args
            .finish()
            .into_iter()
            .filter_map(|s| s.into_string().ok())
            .collect(),
    };

    app::run(flags)
}

fn opt_arg(args: &mut pico_args::Arguments, key: &'static str) -> Option<String> {
    args.opt_value_from_str(key).unwrap_or_else(|err| {
        tracing::warn!(%key, error = %err, "ignoring invalid argument");
        None
    })
}
