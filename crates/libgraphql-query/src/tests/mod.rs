mod graphql_parser_error_tests;
mod graphql_parser_position_tests;
mod utils;
