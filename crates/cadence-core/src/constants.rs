/// Route component constants shared across crates
pub const API_ROUTE_COMPONENT: &str = "api";
pub const API_ROUTE_PREFIX: &str = const_str::concat!("/", API_ROUTE_COMPONENT);

pub const NEXTDATE_ROUTE_COMPONENT: &str = "nextdate";
pub const NEXTDATE_ROUTE_PREFIX: &str =
    const_str::concat!(API_ROUTE_PREFIX, "/", NEXTDATE_ROUTE_COMPONENT);

pub const HEALTHCHECK_ROUTE_COMPONENT: &str = "healthcheck";

/// `chrono` format of the canonical 8-digit date (`YYYYMMDD`).
pub const DATE_FORMAT: &str = "%Y%m%d";

/// Sentinel accepted in place of a date meaning "the current day".
pub const TODAY_SENTINEL: &str = "today";

/// Default cap on candidate days examined by weekly and monthly rules.
///
/// Long enough for `m 29 2` to reach the next leap year across a skipped
/// century leap day.
pub const DEFAULT_MAX_SEARCH_DAYS: u32 = 4000;
