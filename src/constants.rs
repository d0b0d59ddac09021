//! Application-wide constants and configuration values
//!
//! Endpoints, page markers and file names live here so the parsers and the
//! fetch layer agree on them.

/// Default timeout for HTTP requests in seconds
pub const DEFAULT_HTTP_TIMEOUT_SECONDS: u64 = 30;

/// Maximum number of idle connections per host in the HTTP client pool
pub const HTTP_POOL_MAX_IDLE_PER_HOST: usize = 4;

/// Default results site
pub const DEFAULT_BASE_URL: &str = "https://sumodb.sumogames.de";

/// Default User-Agent sent with every request
pub const DEFAULT_USER_AGENT: &str = concat!("sumo_scrape/", env!("CARGO_PKG_VERSION"));

/// Default directory for generated files, relative to the working directory
pub const DEFAULT_OUTPUT_DIR: &str = "data";

/// Default log file name
pub const LOG_FILE_NAME: &str = "sumo_scrape.log";

/// Remote page paths
pub mod endpoints {
    /// Per-day results page, takes `b` (banzuke) and `d` (day) query parameters
    pub const RESULTS_PATH: &str = "/Results.aspx";

    /// Plain-text export of the per-day results, same query parameters
    pub const RESULTS_TEXT_PATH: &str = "/Results_text.aspx";

    /// Current banzuke page carrying the yusho arasoi table
    pub const BANZUKE_PATH: &str = "/Banzuke.aspx";
}

/// Output file names
pub mod output {
    pub const BOUTS_FILE_NAME: &str = "bouts.json";
    pub const LEADERBOARD_FILE_NAME: &str = "leaderboard.json";

    /// Suffix appended to the target name while a write is in flight
    pub const TEMP_SUFFIX: &str = ".tmp";
}

/// Tournament calendar
pub mod tournament {
    /// Months in which a basho is held
    pub const BASHO_MONTHS: [u32; 6] = [1, 3, 5, 7, 9, 11];

    /// Number of days in a basho
    pub const TOURNAMENT_DAYS: u32 = 15;

    /// Day 1 falls on this Sunday of the month
    pub const START_SUNDAY_ORDINAL: u8 = 2;

    /// Japan Standard Time offset from UTC, in seconds (no DST)
    pub const JST_OFFSET_SECONDS: i32 = 9 * 3600;
}

/// Markup markers used to locate tables and decide winners
pub mod markers {
    /// Caption/heading text identifying the top-division results table
    pub const TOP_DIVISION: &str = "Makuuchi";

    /// Division following the top division in the text export
    pub const LOWER_DIVISION: &str = "Juryo";

    /// Winner mark next to a name in the text export
    pub const TEXT_WINNER_MARK: char = '*';

    /// Structural class of results tables, used when no table is labeled
    pub const RESULTS_TABLE_CLASS: &str = "tk_table";

    /// Heading text preceding the leaderboard table
    pub const LEADERBOARD_HEADING: &str = "Yusho Arasoi";

    /// Image name fragment marking a win
    pub const WIN_IMAGE: &str = "hoshi_shiro";

    /// Image name fragment marking a loss
    pub const LOSS_IMAGE: &str = "hoshi_kuro";

    /// Style property marking the winner's cell in the compact layout
    pub const WINNER_STYLE: &str = "background-color";

    /// Technique cell contents meaning "not decided yet"
    pub const TECHNIQUE_PLACEHOLDERS: [&str; 3] = ["-", "\u{2013}", "\u{2014}"];
}

/// Environment variable names
pub mod env_vars {
    /// Tournament code override (YYYYMM)
    pub const BANZUKE: &str = "BANZUKE";

    /// Tournament day override
    pub const DAY: &str = "DAY";

    /// Results site override
    pub const BASE_URL: &str = "SUMO_BASE_URL";

    /// Output directory override
    pub const OUTPUT_DIR: &str = "SUMO_OUTPUT_DIR";

    /// Log file path override
    pub const LOG_FILE: &str = "SUMO_LOG_FILE";

    /// HTTP timeout override in seconds
    pub const HTTP_TIMEOUT: &str = "SUMO_HTTP_TIMEOUT";
}
