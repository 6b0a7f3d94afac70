pub mod cv_data;
pub mod response;
