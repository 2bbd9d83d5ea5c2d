mod graphql_parser_schema_tests;
mod graphql_token_stream_tests;
mod round_trip_tests;
mod source_location_tests;
mod utils;
