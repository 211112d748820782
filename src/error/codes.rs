/// Error code registry for birthday-kit
///
/// Error codes are organized by category:
/// - 1000-1999: Configuration errors
/// - 3000-3999: IO errors
/// - 7000-7099: Validation errors
/// - 7100-7199: Shape errors
pub struct ErrorCode;

impl ErrorCode {
    // Configuration errors (1000-1999)
    pub const CONFIG_GENERIC: u16 = 1000;
    pub const CONFIG_NOT_FOUND: u16 = 1001;
    pub const CONFIG_INVALID_TOML: u16 = 1002;
    pub const CONFIG_INVALID_VALUE: u16 = 1005;
    pub const CONFIG_ENV_OVERRIDE: u16 = 1010;

    // IO errors (3000-3999)
    pub const IO_READ_FAILED: u16 = 3001;
    pub const IO_NOT_FOUND: u16 = 3004;

    // Validation errors (7000-7099)
    pub const VALIDATION_REQUIRED_FIELD: u16 = 7001;
    pub const VALIDATION_INVALID_TYPE: u16 = 7002;
    pub const VALIDATION_INVALID_FORMAT: u16 = 7005;
    pub const VALIDATION_INVALID_DATA: u16 = 7009;

    // Shape errors (7100-7199)
    pub const SHAPE_NOT_A_LIST: u16 = 7101;
    pub const SHAPE_INVALID_JSON: u16 = 7102;
}
