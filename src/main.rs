// SPDX-License-Identifier: MPL-2.0
use iced_showcase::app::{self, paths, Flags};
use iced_showcase::logging;

const HELP: &str = "\
iced_showcase

USAGE:
  iced_showcase [OPTIONS]

OPTIONS:
  -h, --help            Print help information
      --lang <LOCALE>   Interface language (e.g. en-US, fr)
      --page <FILE>     Page to open first (e.g. contact.html)
      --config-dir <DIR>
                        Directory holding settings.toml
";

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let flags = Flags {
        lang: args.opt_value_from_str("--lang").unwrap_or(None),
        page: args.opt_value_from_str("--page").unwrap_or(None),
        config_dir: args.opt_value_from_str("--config-dir").unwrap_or(None),
    };

    logging::init();

    for extra in args.finish() {
        tracing::warn!(argument = ?extra, "ignoring unknown argument");
    }

    paths::init_cli_override(flags.config_dir.clone());
    app::run(flags)
}
