pub mod codec;
pub mod service;
pub mod template;
pub mod vocab;
