mod value_compat_tests;
