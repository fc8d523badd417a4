mod xidl_token_kind_tests;
