// Runtime configuration for the mock gateway
use std::env;

// Default TCP port when PORT is unset or unparsable
pub const DEFAULT_PORT: u16 = 10000;

// Default loyalty balance used by the MAXIPUANSORGU response. Some
// integrations expect 50.00 instead; selectable via LOYALTY_BALANCE.
pub const DEFAULT_LOYALTY_BALANCE: &str = "100000.00";

// Behavior knobs for the gateway. ENABLE_3D selects between a variant
// that recognizes 3D-Secure store types and one that answers them with
// a standard payment response.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    pub port: u16,
    pub enable_three_d_secure: bool,
    pub loyalty_balance: String,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            enable_three_d_secure: true,
            loyalty_balance: DEFAULT_LOYALTY_BALANCE.to_string(),
        }
    }
}

impl GatewayConfig {
    // Read configuration from the environment:
    //   PORT            - listen port (default 10000)
    //   ENABLE_3D       - "false"/"0" disables the 3D-Secure branch
    //   LOYALTY_BALANCE - loyalty points literal (default "100000.00")
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let port = env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(defaults.port);

        let enable_three_d_secure = env::var("ENABLE_3D")
            .map(|v| !matches!(v.trim(), "false" | "0" | "no"))
            .unwrap_or(defaults.enable_three_d_secure);

        let loyalty_balance = env::var("LOYALTY_BALANCE")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or(defaults.loyalty_balance);

        Self {
            port,
            enable_three_d_secure,
            loyalty_balance,
        }
    }
}
