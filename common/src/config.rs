pub struct Config {
    /// Skips the startup banner.
    pub no_banner: bool,

    /// Output reduction level.
    ///
    /// 0 renders full reports, 1 drops decorative headers,
    /// 2 additionally drops per-resident detail trees.
    pub quiet: u8,
}
