/// Default base URL for the account endpoints of the Schwab Trader API
pub const DEFAULT_ACCOUNTS_BASE_URL: &str = "https://api.schwabapi.com/trader/v1/accounts";
/// Default timeout in seconds for REST requests
pub const DEFAULT_REST_TIMEOUT: u64 = 30;
/// User agent string used in HTTP requests to identify this client
pub const USER_AGENT: &str = concat!("schwab-accounts/", env!("CARGO_PKG_VERSION"));
/// Path segment listing the account number / hash pairs
pub const ACCOUNT_NUMBERS_PATH: &str = "accountNumbers";
/// Path segment listing the transactions of a single account
pub const TRANSACTIONS_PATH: &str = "transactions";
/// Query parameter selecting optional account fields
pub const FIELDS_PARAM: &str = "fields";
/// Query parameter carrying the start of a transaction window
pub const START_DATE_PARAM: &str = "startDate";
/// Query parameter carrying the end of a transaction window
pub const END_DATE_PARAM: &str = "endDate";
/// Query parameter filtering transactions by type
pub const TYPES_PARAM: &str = "types";
/// Query parameter filtering transactions by symbol
pub const SYMBOL_PARAM: &str = "symbol";
