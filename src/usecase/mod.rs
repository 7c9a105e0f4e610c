pub mod reset_password_usecase;
