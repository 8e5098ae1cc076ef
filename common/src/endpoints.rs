pub const PATH_AC_COMMAND: &str = "/api/ac3";
pub const PATH_AC_STATE: &str = "/api/ac3_state";
pub const PATH_LIGHT_COMMAND: &str = "/api/light";
