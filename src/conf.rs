//! Settings loaded from TOML and `SIGNUP_*` environment variables

pub use signup_conf::*;
