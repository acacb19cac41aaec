mod round_trip_tests;
