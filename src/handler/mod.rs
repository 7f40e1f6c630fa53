pub mod request_handler;
