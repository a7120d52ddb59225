/// Initialize the logger; only warnings and errors show unless `RUST_LOG` says otherwise
pub fn init() {
    env_logger::init_from_env(
        env_logger::Env::default().filter_or(env_logger::DEFAULT_FILTER_ENV, "warn"),
    );
}
