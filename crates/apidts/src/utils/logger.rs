use std::io::Write;

use apidts_config::logger::LogLevel;

const WHITELISTED_CRATES: &[&str] = &["apidts", "apidts_codegen", "apidts_config"];

pub(crate) fn default_env_filter(level: &str) -> String {
    let mut filters: Vec<String> = WHITELISTED_CRATES
        .iter()
        .map(|crate_name| format!("{crate_name}={level}"))
        .collect();

    // Set default level for all other crates to warn
    filters.insert(0, "warn".to_string());

    filters.join(",")
}

pub(crate) fn init_cli_logger(level: LogLevel, verbose: u8, quiet: bool) {
    let level = level.with_flags(verbose, quiet);
    let level_str = level.as_str();

    let mut builder = env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(default_env_filter(level_str)),
    );

    // For INFO and above, only prefix and colorize WARN and ERROR lines
    if level >= LogLevel::Info {
        builder.format(|buf, record| {
            if record.level() == tracing::log::Level::Info {
                writeln!(buf, "{}", record.args())
            } else {
                let log_style = buf.default_level_style(record.level());
                writeln!(
                    buf,
                    "{log_style}[{}]{log_style:#} {}",
                    record.level(),
                    record.args()
                )
            }
        });
    }

    if let Err(e) = builder.try_init() {
        eprintln!("apidts: Failed initializing env_logger: {e:?}");
    }
}
