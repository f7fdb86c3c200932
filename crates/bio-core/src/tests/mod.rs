mod media_classifier;
mod models;
mod property_tests;
