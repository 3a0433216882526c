pub mod fallback_handler;
pub mod ping_handler;
pub mod test_function_handler;
