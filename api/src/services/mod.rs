pub mod signal_service;
