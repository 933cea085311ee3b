use utilkit_core::parse_float_or;

/// Print `value` as a float, the default if it does not parse, or `none`.
pub(crate) fn run_float(value: &str, default: Option<f64>) {
    match parse_float_or(value, default) {
        Some(v) => log::info!("{}", v),
        None => log::info!("none"),
    }
}
