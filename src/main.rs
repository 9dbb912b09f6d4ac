// SPDX-License-Identifier: MPL-2.0
use photo_grid::app::{self, Flags};
use std::process::ExitCode;

const HELP: &str = "\
PhotoGrid - browse and search photos

USAGE:
  photo_grid [OPTIONS]

OPTIONS:
  -h, --help                Print this help and exit
      --lang <LOCALE>       UI language (e.g. en-US, fr)
      --config-dir <DIR>    Directory holding settings.toml
      --access-key <KEY>    Photo API access key
      --base-url <URL>      Photo API base URL

ENVIRONMENT:
  UNSPLASH_ACCESS_KEY       Photo API access key
  PHOTO_GRID_CONFIG_DIR     Directory holding settings.toml
  RUST_LOG                  Log filter (default: photo_grid=info)
";

fn parse_flags() -> Result<Option<Flags>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let flags = Flags {
        lang: args.opt_value_from_str("--lang")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
        access_key: args.opt_value_from_str("--access-key")?,
        base_url: args.opt_value_from_str("--base-url")?,
    };

    let remaining = args.finish();
    if !remaining.is_empty() {
        log::warn!("Ignoring unexpected arguments: {:?}", remaining);
    }

    Ok(Some(flags))
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("photo_grid=info"))
        .init();

    let flags = match parse_flags() {
        Ok(Some(flags)) => flags,
        Ok(None) => {
            print!("{HELP}");
            return ExitCode::SUCCESS;
        }
        Err(err) => {
            eprintln!("Error: {err}\n\n{HELP}");
            return ExitCode::from(2);
        }
    };

    match app::run(flags) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{err}");
            ExitCode::FAILURE
        }
    }
}
