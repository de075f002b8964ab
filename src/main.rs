// SPDX-License-Identifier: MPL-2.0
use herald::app::{self, Flags};
use tracing_subscriber::EnvFilter;

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("herald=info")),
        )
        .with_target(false)
        .init();

    let mut args = pico_args::Arguments::from_env();
    let config_path = match args.opt_value_from_str("--config") {
        Ok(path) => path,
        Err(err) => {
            tracing::warn!(error = %err, "ignoring invalid --config argument");
            None
        }
    };

    app::run(Flags { config_path })
}
