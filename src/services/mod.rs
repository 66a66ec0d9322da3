pub mod question_import;
pub mod ticket_document;
pub mod tickets;
