use serde::Deserialize;

/// Timetable endpoint of FB03
pub const DEFAULT_ENDPOINT: &str =
    "https://mpl-server.kr.hs-niederrhein.de/fb03/sp/stundenplan.php";

/// Main configuration structure for fbnd
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub http: HttpConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Outbound request configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    /// URL every form request is posted to
    pub endpoint: String,

    /// Total timeout of one request (seconds)
    #[serde(rename = "timeout-secs")]
    pub timeout_secs: u64,

    /// Timeout for establishing the connection (seconds)
    #[serde(rename = "connect-timeout-secs")]
    pub connect_timeout_secs: u64,

    /// User-Agent header sent with every request
    #[serde(rename = "user-agent")]
    pub user_agent: String,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout_secs: 30,
            connect_timeout_secs: 10,
            user_agent: format!("fbnd/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

/// Presentation defaults, overridable from the command line
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Colorize terminal output
    pub color: bool,

    /// Print JSON instead of tables
    pub json: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            color: true,
            json: false,
        }
    }
}
