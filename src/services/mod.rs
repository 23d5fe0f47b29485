pub mod trends_api;
