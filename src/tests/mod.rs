mod parser_tests;
mod property_tests;
