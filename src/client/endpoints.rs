//! Remote analysis endpoints

/// One GET endpoint of the analysis service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Endpoint {
    /// Path segment below the base URL (no slashes).
    pub path: &'static str,
    /// Name of the single query parameter.
    pub param: &'static str,
    /// What the call does, used in failure logs.
    pub action: &'static str,
}

/// Token contract risk analysis.
pub const CONTRACT_ANALYSIS: Endpoint = Endpoint {
    path: "contract_analysis",
    param: "contract_address",
    action: "analyzing contract",
};

/// Bundled-buy detection over a set of transactions.
pub const BUNDLE_DETECTION: Endpoint = Endpoint {
    path: "bundle_detection",
    param: "transaction_data",
    action: "detecting bundles",
};

/// Market trend analysis.
pub const TREND_ANALYSIS: Endpoint = Endpoint {
    path: "trend_analysis",
    param: "market_data",
    action: "analyzing trends",
};

/// Real-time wallet monitoring.
pub const REAL_TIME_MONITORING: Endpoint = Endpoint {
    path: "real_time_monitoring",
    param: "wallet_address",
    action: "monitoring wallet",
};

/// All endpoints the service exposes.
pub const ALL: [Endpoint; 4] = [
    CONTRACT_ANALYSIS,
    BUNDLE_DETECTION,
    TREND_ANALYSIS,
    REAL_TIME_MONITORING,
];

impl Endpoint {
    /// Resolve this endpoint against a base URL as `{base}/{path}/`.
    ///
    /// Trailing slashes on the base are collapsed so exactly one separator
    /// remains.
    #[must_use]
    pub fn url(&self, base_url: &str) -> String {
        format!("{}/{}/", base_url.trim_end_matches('/'), self.path)
    }
}
