#[derive(Debug, Clone)]
pub struct Config {
    /// The classifier's fixed input resolution. Source images are stretched
    /// to exactly this size, aspect ratio not preserved.
    pub buffer_width: u32,
    pub buffer_height: u32,
    pub logger_timezone: chrono::FixedOffset,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            buffer_width: 360,
            buffer_height: 360,
            logger_timezone: pacific_standard_time(),
        }
    }
}

fn pacific_standard_time() -> chrono::FixedOffset {
    chrono::FixedOffset::west_opt(8 * 3600).unwrap()
}
