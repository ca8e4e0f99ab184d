#[derive(Debug, Clone, Copy, Default)]
pub struct Config {
    /// Skips the banner printed when the program starts.
    pub no_banner: bool,
    /// Verbosity reduction. `0` prints everything, `1` hides headers and
    /// informational logs, `2` and above only prints command results.
    pub quiet: u8,
}
