use std::io::Write;

/// Initialize logging to stdout.
///
/// Records are printed as the bare message so progress reads
/// `Saved black_bishop.png`.
pub fn init_logging(verbose: bool) {
    env_logger::Builder::new()
        .filter_level(if verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        })
        .format(|buf, record| writeln!(buf, "{}", record.args()))
        .target(env_logger::Target::Stdout)
        .init();
}
