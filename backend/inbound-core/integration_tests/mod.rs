mod error;
mod scenarios;
