pub mod borrow_book_cmd;
pub mod borrow_status_cmd;
pub mod list_borrowed_cmd;
pub mod return_book_cmd;
