mod cli;
mod logger;
mod runner;
