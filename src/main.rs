// SPDX-License-Identifier: MPL-2.0
use manga_reader::app::{self, paths, Flags};

fn main() -> iced::Result {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let mut args = pico_args::Arguments::from_env();

    let config_dir: Option<String> = match args.opt_value_from_str("--config-dir") {
        Ok(dir) => dir,
        Err(err) => {
            log::warn!("ignoring --config-dir: {err}");
            None
        }
    };
    paths::init_cli_overrides(config_dir.clone());

    let flags = Flags {
        file_path: args
            .finish()
            .into_iter()
            .next()
            .and_then(|s| s.into_string().ok()),
        config_dir,
    };

    app::run(flags)
}
