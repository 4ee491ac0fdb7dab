mod authorization_tests;
