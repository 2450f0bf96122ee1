mod directive_usage_tests;
mod extension_tests;
mod interface_implementation_tests;
mod printer_tests;
mod root_resolution_tests;
mod schema_builder_tests;
mod test_utils;
