mod scoring_tests;
