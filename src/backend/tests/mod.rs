mod discovery_tests;
