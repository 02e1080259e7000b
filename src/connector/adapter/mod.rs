mod http_chat_backend;

pub use http_chat_backend::*;
