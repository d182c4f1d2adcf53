mod listing_routes_tests;
mod test_utils;
