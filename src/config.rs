use std::env;
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_TOKEN_FILE: &str = ".rms-token.json";

/// How a list operation turns the caller's `limit` into the value sent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LimitPolicy {
    /// Absent or non-positive limits are replaced by the default.
    ClampNonPositive,
    /// Only an absent limit is replaced; zero and negatives go out as given.
    FallbackWhenAbsent,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ListPaging {
    pub limit_policy: LimitPolicy,
    pub default_limit: i64,
    pub default_offset: i64,
}

impl ListPaging {
    pub const fn clamped(default_limit: i64) -> Self {
        Self {
            limit_policy: LimitPolicy::ClampNonPositive,
            default_limit,
            default_offset: 0,
        }
    }

    pub const fn fallback(default_limit: i64, default_offset: i64) -> Self {
        Self {
            limit_policy: LimitPolicy::FallbackWhenAbsent,
            default_limit,
            default_offset,
        }
    }

    pub fn resolve_limit(&self, limit: Option<i64>) -> i64 {
        match (self.limit_policy, limit) {
            (LimitPolicy::ClampNonPositive, Some(limit)) if limit > 0 => limit,
            (LimitPolicy::ClampNonPositive, _) => self.default_limit,
            (LimitPolicy::FallbackWhenAbsent, limit) => limit.unwrap_or(self.default_limit),
        }
    }

    /// Offsets are never validated, negative values included.
    pub fn resolve_offset(&self, offset: Option<i64>) -> i64 {
        offset.unwrap_or(self.default_offset)
    }
}

#[derive(Clone, Debug)]
pub struct ClientConfig {
    pub base_url: String,
    pub timeout: Option<Duration>,
    pub token_file: PathBuf,
    pub shift_list_paging: ListPaging,
    pub shift_request_list_paging: ListPaging,
    pub shift_assignment_list_paging: ListPaging,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: None,
            token_file: PathBuf::from(DEFAULT_TOKEN_FILE),
            // Shift list clamps; request lists only fill in absent values
            shift_list_paging: ListPaging::clamped(10),
            shift_request_list_paging: ListPaging::fallback(10, 0),
            shift_assignment_list_paging: ListPaging::fallback(10, 0),
        }
    }

    pub fn from_env() -> Result<Self, String> {
        let base_url = env::var("RMS_API_BASE_URL")
            .or_else(|_| env::var("PUBLIC_RMS_API_BASE_URL"))
            .map_err(|_| "RMS_API_BASE_URL must be set".to_string())?;

        if base_url.trim().is_empty() {
            return Err("RMS_API_BASE_URL must not be empty".to_string());
        }

        Self::new(base_url).with_env_overrides()
    }

    /// Applies `RMS_API_TIMEOUT_SECS` and `RMS_TOKEN_FILE` on top of an
    /// already chosen base URL.
    pub fn with_env_overrides(mut self) -> Result<Self, String> {
        if let Ok(raw) = env::var("RMS_API_TIMEOUT_SECS") {
            let secs: u64 = raw
                .parse()
                .map_err(|_| format!("RMS_API_TIMEOUT_SECS must be a whole number, got '{}'", raw))?;
            self.timeout = Some(Duration::from_secs(secs));
        }

        if let Ok(path) = env::var("RMS_TOKEN_FILE") {
            self.token_file = PathBuf::from(path);
        }

        Ok(self)
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn with_token_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.token_file = path.into();
        self
    }

    pub fn with_shift_list_paging(mut self, paging: ListPaging) -> Self {
        self.shift_list_paging = paging;
        self
    }

    pub fn with_shift_request_list_paging(mut self, paging: ListPaging) -> Self {
        self.shift_request_list_paging = paging;
        self
    }

    pub fn with_shift_assignment_list_paging(mut self, paging: ListPaging) -> Self {
        self.shift_assignment_list_paging = paging;
        self
    }
}
