pub mod credential;
pub mod model;
pub mod submit;
