pub mod mortgage;
pub mod password;
pub mod replay;
pub mod text;
