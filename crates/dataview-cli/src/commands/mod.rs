pub mod check;
pub mod navigate;
pub mod resolve;
pub mod routes;
pub mod url;
