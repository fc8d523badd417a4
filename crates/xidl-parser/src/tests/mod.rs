mod source_position_tests;
mod utils;
mod xidl_parser_annotation_tests;
