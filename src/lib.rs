pub mod core {
    pub mod command;
    pub mod controller;
    pub mod domain;
    pub mod events;
    pub mod library;
    pub mod repository;
    pub mod server;
}

pub mod utils {
    pub mod date;
    pub mod logs;
    pub mod number;
}

pub mod books;
pub mod borrowing;
pub mod catalog;
pub mod gateway;
