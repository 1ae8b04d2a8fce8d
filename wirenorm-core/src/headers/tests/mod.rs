mod directive_tests;
mod test_helpers;
