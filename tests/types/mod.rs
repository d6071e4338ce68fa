mod chain_error;
mod error_code;
mod formatting;
mod path_cleanup;
